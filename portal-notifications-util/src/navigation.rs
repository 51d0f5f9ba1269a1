use url::Url;

/// Check if a URL is safe to hand to the system opener (http, https, mailto only)
pub fn is_safe_url(url: &str) -> bool {
    Url::parse(url)
        .map(|url| matches!(url.scheme(), "http" | "https" | "mailto"))
        .unwrap_or(false)
}

/// Open a URL in the default browser/handler
#[cfg(feature = "open")]
pub fn open_target(url: &str) -> Result<(), std::io::Error> {
    if !is_safe_url(url) {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "Unsafe or malformed URL",
        ));
    }
    open::that(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_schemes() {
        assert!(is_safe_url("https://portal.example.org/login"));
        assert!(is_safe_url("http://localhost:3000/"));
        assert!(is_safe_url("HTTPS://PORTAL.EXAMPLE.ORG/"));
        assert!(is_safe_url("mailto:contato@example.org"));
    }

    #[test]
    fn test_unsafe_schemes() {
        assert!(!is_safe_url("javascript:alert(1)"));
        assert!(!is_safe_url("file:///etc/passwd"));
        assert!(!is_safe_url("data:text/html,hi"));
    }

    #[test]
    fn test_malformed_urls() {
        assert!(!is_safe_url(""));
        assert!(!is_safe_url("/login"));
        assert!(!is_safe_url("not a url"));
    }

    #[cfg(feature = "open")]
    #[test]
    fn test_open_target_rejects_unsafe() {
        let err = open_target("javascript:alert(1)").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }
}
