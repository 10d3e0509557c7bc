const DEFAULT_API_URL: &str = "http://localhost:9000";

/// Base URL for the course catalog API. Override with `LECTERN_API_URL` for
/// dev/testing.
pub fn api_url() -> String {
    std::env::var("LECTERN_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}
