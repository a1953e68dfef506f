//! Resolution of media paths returned in content payloads.

/// Turns a media path from the backend into a URL usable directly in markup.
///
/// Absolute (`http://`, `https://`), protocol-relative (`//`) and `data:` URLs
/// pass through untouched; anything else is joined onto `origin`.
pub fn resolve_media_url(origin: &str, path: Option<&str>) -> Option<String> {
    let path = path?;
    if path.starts_with("data:")
        || path.starts_with("http://")
        || path.starts_with("https://")
        || path.starts_with("//")
    {
        return Some(path.to_string());
    }
    let origin = origin.trim_end_matches('/');
    if path.starts_with('/') {
        Some(format!("{}{}", origin, path))
    } else {
        Some(format!("{}/{}", origin, path))
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_media_url;

    const ORIGIN: &str = "http://127.0.0.1:1337";

    #[test]
    fn none_stays_none() {
        assert_eq!(resolve_media_url(ORIGIN, None), None);
    }

    #[test]
    fn absolute_urls_pass_through() {
        for url in [
            "http://x/y",
            "https://cdn.example.com/a.png",
            "//cdn.example.com/a.png",
            "data:image/png;base64,iVBORw0KGgo=",
        ] {
            assert_eq!(resolve_media_url(ORIGIN, Some(url)).as_deref(), Some(url));
        }
    }

    #[test]
    fn relative_paths_get_origin() {
        assert_eq!(
            resolve_media_url(ORIGIN, Some("/uploads/a.png")).as_deref(),
            Some("http://127.0.0.1:1337/uploads/a.png")
        );
        assert_eq!(
            resolve_media_url("http://127.0.0.1:1337/", Some("uploads/a.png")).as_deref(),
            Some("http://127.0.0.1:1337/uploads/a.png")
        );
    }

    #[test]
    fn http_prefix_without_scheme_separator_is_relative() {
        assert_eq!(
            resolve_media_url(ORIGIN, Some("/httpdocs/a.png")).as_deref(),
            Some("http://127.0.0.1:1337/httpdocs/a.png")
        );
        assert_eq!(
            resolve_media_url(ORIGIN, Some("httpdocs/a.png")).as_deref(),
            Some("http://127.0.0.1:1337/httpdocs/a.png")
        );
    }
}
