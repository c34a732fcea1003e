#[cfg(test)]
mod tests {
    use crate::http::error_detail;

    #[test]
    fn test_error_detail_string() {
        let body = r#"{"detail": "file too large"}"#;
        assert_eq!(error_detail(413, body), "file too large");
    }

    #[test]
    fn test_error_detail_structured() {
        let body = r#"{"detail": [{"loc": ["body", "file"], "msg": "field required"}]}"#;
        let detail = error_detail(422, body);
        assert!(detail.contains("field required"));
        assert!(detail.starts_with('['));
    }

    #[test]
    fn test_error_detail_falls_back_to_error_key() {
        let body = r#"{"error": "no tables found"}"#;
        assert_eq!(error_detail(500, body), "no tables found");
    }

    #[test]
    fn test_error_detail_plain_text_body() {
        assert_eq!(error_detail(502, "  Bad Gateway \n"), "Bad Gateway");
    }

    #[test]
    fn test_error_detail_json_without_known_keys() {
        let body = r#"{"message": "nope"}"#;
        assert_eq!(error_detail(400, body), body);
    }

    #[test]
    fn test_error_detail_empty_body() {
        assert_eq!(error_detail(503, ""), "HTTP 503");
    }
}
