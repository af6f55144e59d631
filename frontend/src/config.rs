/// API endpoint configuration, resolved once at startup.
///
/// The base URL comes from the `API_BASE_URL` build environment variable
/// (the bundler exports it when building against a remote backend) and
/// defaults to the same-origin `/api` prefix. Nothing re-reads the
/// environment after startup; the value is threaded explicitly into
/// [`crate::api::QueryClient::new`].
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        ApiConfig {
            base_url: option_env!("API_BASE_URL").unwrap_or("/api").to_string(),
        }
    }
}
