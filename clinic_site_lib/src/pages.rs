//! Single-type pages (home, services, news, about, contact) and the built-in
//! copy used for any section the backend does not provide.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::error::SiteError;

/// The site's single-type pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Home,
    Services,
    News,
    About,
    Contact,
}

impl PageKind {
    pub const ALL: [PageKind; 5] = [
        PageKind::Home,
        PageKind::Services,
        PageKind::News,
        PageKind::About,
        PageKind::Contact,
    ];

    /// Backend path of the single type.
    pub fn api_path(&self) -> &'static str {
        match self {
            PageKind::Home => "/homepage",
            PageKind::Services => "/services-page",
            PageKind::News => "/news-page",
            PageKind::About => "/about-page",
            PageKind::Contact => "/contact-page",
        }
    }

    /// Public route of the page on the site.
    pub fn route(&self) -> &'static str {
        match self {
            PageKind::Home => "/",
            PageKind::Services => "/dich-vu",
            PageKind::News => "/tin-tuc",
            PageKind::About => "/ve-chung-toi",
            PageKind::Contact => "/lien-he",
        }
    }

    /// Section keys rendered on this page, in display order.
    pub fn section_keys(&self) -> &'static [&'static str] {
        match self {
            PageKind::Home => &[
                "hero_section",
                "services_section",
                "benefits_section",
                "process_section",
                "testimonials_section",
                "cta_section",
            ],
            PageKind::Services => &["hero_section", "services_detail_section", "cta_section"],
            PageKind::News => &["hero_section", "cta_section"],
            PageKind::About => &[
                "hero_section",
                "story_section",
                "values_section",
                "doctors_section",
                "certifications_section",
                "cta_section",
            ],
            PageKind::Contact => &[
                "hero_section",
                "contact_info_section",
                "contact_form_section",
                "faq_section",
            ],
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PageKind::Home => "home",
            PageKind::Services => "services",
            PageKind::News => "news",
            PageKind::About => "about",
            PageKind::Contact => "contact",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for PageKind {
    type Err = SiteError;

    /// Accepts the English name or the Vietnamese route segment.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('/').to_lowercase().as_str() {
            "" | "home" | "homepage" => Ok(PageKind::Home),
            "services" | "dich-vu" => Ok(PageKind::Services),
            "news" | "tin-tuc" => Ok(PageKind::News),
            "about" | "ve-chung-toi" => Ok(PageKind::About),
            "contact" | "lien-he" => Ok(PageKind::Contact),
            other => Err(SiteError::InvalidInput(format!("Unknown page '{}'", other))),
        }
    }
}

/// A page section. Only the heading fields are typed; anything else the
/// backend sends (cards, lists, images) is kept as raw JSON.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Section {
    fn copy(title: &str, description: &str) -> Self {
        Self {
            title: non_empty(title),
            description: non_empty(description),
            extra: Map::new(),
        }
    }

    fn with(mut self, key: &str, value: Value) -> Self {
        self.extra.insert(key.to_string(), value);
        self
    }

    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Fills a blank title or description from `fallback`.
    fn fill_from(&mut self, fallback: &Section) {
        if blank(&self.title) {
            self.title = fallback.title.clone();
        }
        if blank(&self.description) {
            self.description = fallback.description.clone();
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

fn blank(s: &Option<String>) -> bool {
    s.as_deref().map_or(true, |s| s.trim().is_empty())
}

/// Where a section's content came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionSource {
    Backend,
    Fallback,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PageSection {
    pub key: &'static str,
    pub section: Section,
    pub source: SectionSource,
}

/// Every section of a page, each one either from the backend or built-in.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PageContent {
    pub kind: PageKind,
    pub sections: Vec<PageSection>,
}

impl PageContent {
    /// Builds the page from the single type's `data`. A missing document,
    /// a missing section or a non-object section all fall back to built-in copy.
    pub fn from_document(kind: PageKind, data: Option<&Value>) -> Self {
        let sections = kind
            .section_keys()
            .iter()
            .map(|&key| {
                let fallback = fallback_section(kind, key);
                let from_backend = data
                    .and_then(|d| d.get(key))
                    .filter(|v| v.is_object())
                    .and_then(|v| match Section::deserialize(v) {
                        Ok(section) => Some(section),
                        Err(e) => {
                            tracing::warn!("Ignoring malformed {} on {} page: {}", key, kind, e);
                            None
                        }
                    });
                match from_backend {
                    Some(mut section) => {
                        section.fill_from(&fallback);
                        PageSection {
                            key,
                            section,
                            source: SectionSource::Backend,
                        }
                    }
                    None => PageSection {
                        key,
                        section: fallback,
                        source: SectionSource::Fallback,
                    },
                }
            })
            .collect();
        Self { kind, sections }
    }

    /// The page with nothing from the backend.
    pub fn fallback(kind: PageKind) -> Self {
        Self::from_document(kind, None)
    }

    pub fn section(&self, key: &str) -> Option<&PageSection> {
        self.sections.iter().find(|s| s.key == key)
    }

    pub fn fallback_count(&self) -> usize {
        self.sections
            .iter()
            .filter(|s| s.source == SectionSource::Fallback)
            .count()
    }
}

const CONSULT_CTA: &str = "Bạn cần tư vấn thêm?";

/// Built-in copy for `key` on `kind`. Unknown keys get an empty section.
pub fn fallback_section(kind: PageKind, key: &str) -> Section {
    match (kind, key) {
        (PageKind::Home, "hero_section") => Section::copy(
            "Tự tin với",
            "Chúng tôi mang đến giải pháp thẩm mỹ vùng kín an toàn, hiệu quả với đội ngũ bác sĩ chuyên môn cao và công nghệ tiên tiến nhất.",
        )
        .with("badge", json!("Công nghệ Laser hiện đại nhất"))
        .with("highlight", json!("Vẻ đẹp riêng tư")),
        (PageKind::Home, "services_section") => Section::copy(
            "Dịch vụ của chúng tôi",
            "Các giải pháp thẩm mỹ vùng kín toàn diện với công nghệ hiện đại và đội ngũ bác sĩ giàu kinh nghiệm",
        )
        .with("services", default_services()),
        (PageKind::Home, "benefits_section") => Section::copy("Tại sao chọn chúng tôi?", "")
            .with(
                "benefits_list",
                json!([
                    { "label": "Đội ngũ bác sĩ chuyên môn cao, giàu kinh nghiệm" },
                    { "label": "Công nghệ Laser CO2 Fractional hiện đại nhất" },
                    { "label": "Quy trình khép kín, đảm bảo riêng tư tuyệt đối" },
                    { "label": "Cam kết an toàn, không đau, không cần nghỉ dưỡng" },
                    { "label": "Tư vấn miễn phí, hỗ trợ 24/7" },
                    { "label": "Giá cả minh bạch, nhiều ưu đãi hấp dẫn" },
                ]),
            ),
        (PageKind::Home, "process_section") => Section::copy(
            "Quy trình điều trị",
            "4 bước đơn giản để bạn có được kết quả như mong đợi",
        )
        .with(
            "steps",
            json!([
                { "step_number": "01", "title": "Tư vấn", "description": "Bác sĩ thăm khám và tư vấn phương pháp phù hợp" },
                { "step_number": "02", "title": "Kiểm tra", "description": "Kiểm tra sức khỏe tổng quát và vùng điều trị" },
                { "step_number": "03", "title": "Thực hiện", "description": "Tiến hành liệu trình với công nghệ hiện đại" },
                { "step_number": "04", "title": "Chăm sóc", "description": "Theo dõi và chăm sóc sau điều trị" },
            ]),
        ),
        (PageKind::Home, "testimonials_section") => Section::copy(
            "Khách hàng nói gì về chúng tôi",
            "Hàng ngàn khách hàng đã tin tưởng và hài lòng với dịch vụ của chúng tôi",
        ),
        (PageKind::Home, "cta_section") => Section::copy(
            "Sẵn sàng bắt đầu hành trình của bạn?",
            "Đặt lịch tư vấn miễn phí ngay hôm nay để được bác sĩ thăm khám và tư vấn chi tiết",
        ),

        (PageKind::Services, "hero_section") => Section::copy(
            "Dịch vụ của chúng tôi",
            "Chúng tôi cung cấp các giải pháp thẩm mỹ vùng kín toàn diện với công nghệ hiện đại nhất, đảm bảo an toàn, hiệu quả và riêng tư tuyệt đối.",
        ),
        (PageKind::Services, "services_detail_section") => {
            Section::copy("", "").with("services", default_services())
        }
        (PageKind::Services, "cta_section") => Section::copy(
            CONSULT_CTA,
            "Liên hệ ngay với chúng tôi để được bác sĩ tư vấn miễn phí và nhận ưu đãi đặc biệt",
        ),

        (PageKind::News, "hero_section") => Section::copy(
            "Tin tức & Kiến thức",
            "Cập nhật những thông tin mới nhất về thẩm mỹ vùng kín, kiến thức chăm sóc sức khỏe và xu hướng làm đẹp",
        ),
        (PageKind::News, "cta_section") => Section::copy(
            CONSULT_CTA,
            "Liên hệ ngay với chúng tôi để được bác sĩ tư vấn miễn phí",
        ),

        (PageKind::About, "hero_section") => Section::copy(
            "Về chúng tôi",
            "Trung tâm thẩm mỹ vùng kín hàng đầu với sứ mệnh mang lại sự tự tin và hạnh phúc cho phụ nữ Việt",
        ),
        (PageKind::About, "story_section") => Section::copy("Câu chuyện của chúng tôi", "").with(
            "paragraphs",
            json!([
                { "content": "Ra đời từ năm 2010, chúng tôi đã không ngừng nỗ lực để trở thành địa chỉ tin cậy hàng đầu trong lĩnh vực thẩm mỹ vùng kín tại Việt Nam." },
                { "content": "Với đội ngũ bác sĩ giàu kinh nghiệm, được đào tạo bài bản trong và ngoài nước, cùng với trang thiết bị hiện đại nhất, chúng tôi cam kết mang đến dịch vụ chất lượng cao nhất." },
                { "content": "Chúng tôi hiểu rằng mỗi khách hàng đều có nhu cầu riêng biệt. Vì vậy, chúng tôi luôn lắng nghe, tư vấn tận tâm và đưa ra giải pháp phù hợp nhất cho từng cá nhân." },
            ]),
        ),
        (PageKind::About, "values_section") => Section::copy(
            "Giá trị cốt lõi",
            "Những giá trị mà chúng tôi luôn hướng tới trong mọi hoạt động",
        )
        .with(
            "values",
            json!([
                { "title": "Chuyên nghiệp", "description": "Đội ngũ bác sĩ giàu kinh nghiệm, được đào tạo bài bản", "icon_name": "Award" },
                { "title": "An toàn", "description": "Công nghệ hiện đại, quy trình chuẩn y khoa", "icon_name": "Shield" },
                { "title": "Riêng tư", "description": "Đảm bảo bảo mật thông tin tuyệt đối", "icon_name": "Target" },
                { "title": "Hiệu quả", "description": "Cam kết kết quả rõ rệt, bền vững", "icon_name": "TrendingUp" },
            ]),
        ),
        (PageKind::About, "doctors_section") => Section::copy(
            "Đội ngũ bác sĩ",
            "Các bác sĩ chuyên môn cao, giàu kinh nghiệm và tận tâm",
        ),
        (PageKind::About, "certifications_section") => Section::copy(
            "Chứng nhận & Giấy phép",
            "Chúng tôi tự hào với các chứng nhận và giấy phép hoạt động hợp pháp, đảm bảo chất lượng dịch vụ.",
        ),
        (PageKind::About, "cta_section") => Section::copy(
            "Hãy để chúng tôi đồng hành cùng bạn",
            "Đặt lịch tư vấn miễn phí ngay hôm nay để trải nghiệm dịch vụ chuyên nghiệp",
        ),

        (PageKind::Contact, "hero_section") => Section::copy(
            "Liên hệ với chúng tôi",
            "Hãy để lại thông tin, chúng tôi sẽ liên hệ tư vấn miễn phí trong thời gian sớm nhất",
        ),
        (PageKind::Contact, "contact_info_section") => Section::copy("", "").with(
            "info_cards",
            json!([
                { "icon_name": "MapPin", "title": "Địa chỉ", "content": "123 Đường ABC, Quận XYZ, TP. Hồ Chí Minh", "link": "" },
                { "icon_name": "Phone", "title": "Điện thoại", "content": "0123 456 789", "link": "tel:0123456789" },
                { "icon_name": "Mail", "title": "Email", "content": "info@thammyvungkin.vn", "link": "mailto:info@thammyvungkin.vn" },
                { "icon_name": "Clock", "title": "Giờ làm việc", "content": "T2 - T7: 8:00 - 20:00\nCN: 8:00 - 17:00", "link": "" },
            ]),
        ),
        (PageKind::Contact, "contact_form_section") => Section::copy("", "")
            .with("form_title", json!("Đặt lịch tư vấn"))
            .with(
                "form_description",
                json!("Thông tin của bạn sẽ được bảo mật tuyệt đối"),
            ),
        (PageKind::Contact, "faq_section") => Section::copy(
            "Câu hỏi thường gặp",
            "Một số câu hỏi khách hàng thường quan tâm",
        )
        .with(
            "faqs",
            json!([
                { "question": "Liệu trình có đau không?", "answer": "Các liệu trình của chúng tôi sử dụng công nghệ Laser hiện đại, gây tê tại chỗ nên hoàn toàn không đau." },
                { "question": "Cần nghỉ dưỡng bao lâu?", "answer": "Hầu hết các liệu trình không cần nghỉ dưỡng, bạn có thể sinh hoạt bình thường ngay sau khi thực hiện." },
                { "question": "Kết quả có lâu dài không?", "answer": "Kết quả rất lâu dài, có thể duy trì từ 3-5 năm tùy thuộc vào cơ địa và chế độ chăm sóc." },
                { "question": "Thông tin có được bảo mật không?", "answer": "Chúng tôi cam kết bảo mật thông tin khách hàng 100%, quy trình khép kín và riêng tư tuyệt đối." },
            ]),
        ),

        _ => Section::default(),
    }
}

fn default_services() -> Value {
    json!([
        { "title": "Làm hồng vùng kín", "description": "Công nghệ Laser CO2 Fractional giúp làm hồng tự nhiên, an toàn và lâu dài.", "icon_name": "Heart", "slug": "lam-hong-vung-kin" },
        { "title": "Thu hẹp âm đạo", "description": "Phương pháp Laser không đau, không cần nghỉ dưỡng, hiệu quả ngay sau 1 lần.", "icon_name": "Sparkles", "slug": "thu-hep-am-dao" },
        { "title": "Tạo hình môi lớn", "description": "Tạo hình thẩm mỹ, cải thiện độ đàn hồi và màu sắc tự nhiên.", "icon_name": "Award", "slug": "tao-hinh-moi-lon" },
        { "title": "Trẻ hóa vùng kín", "description": "Kích thích tái tạo collagen, phục hồi độ ẩm và độ đàn hồi.", "icon_name": "Shield", "slug": "tre-hoa-vung-kin" },
    ])
}
