use super::*;

// -- Text sanitization --

#[test]
fn sanitize_strips_control_chars() {
    assert_eq!(sanitize_text("  laser\u{0007} care \n", 100).unwrap(), "laser care");
}

#[test]
fn sanitize_rejects_empty() {
    assert!(sanitize_text("   ", 100).is_err());
    assert!(sanitize_text("", 100).is_err());
}

#[test]
fn sanitize_rejects_too_long() {
    assert!(sanitize_text(&"a".repeat(101), 100).is_err());
}

#[test]
fn search_keeps_vietnamese_text() {
    assert_eq!(validate_search(" Trẻ hóa ").unwrap(), "Trẻ hóa");
}

// -- Slug validation --

#[test]
fn slug_valid() {
    assert_eq!(
        validate_slug("tre-hoa-vung-kin-la-gi").unwrap(),
        "tre-hoa-vung-kin-la-gi"
    );
}

#[test]
fn slug_keeps_case_and_punctuation() {
    assert_eq!(validate_slug("/Bai_Viet/").unwrap(), "Bai_Viet");
    assert_eq!(validate_slug(" v1.2~moi ").unwrap(), "v1.2~moi");
}

#[test]
fn slug_invalid() {
    assert!(validate_slug("").is_err());
    assert!(validate_slug(" / ").is_err());
    assert!(validate_slug(&"a".repeat(201)).is_err());
}

// -- Required fields --

#[test]
fn required_field_is_trimmed() {
    assert_eq!(
        require_field("phone", " 0901234567 (Zalo) ").unwrap(),
        "0901234567 (Zalo)"
    );
}

#[test]
fn required_field_rejects_blank() {
    let err = require_field("name", " \t ").unwrap_err();
    assert!(err.to_string().contains("name is required"));
}

// -- Paging --

#[test]
fn page_bounds() {
    assert!(validate_page(0).is_err());
    assert_eq!(validate_page(3).unwrap(), 3);
    assert!(validate_page_size(0).is_err());
    assert!(validate_page_size(101).is_err());
    assert_eq!(validate_page_size(9).unwrap(), 9);
}
