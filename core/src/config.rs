//! Client configuration: API token, host and request headers.

use bon::Builder;

use crate::error::{Error, Result};

pub const DEFAULT_HOST: &str = "https://api.lokalise.com/api2/";
pub const API_TOKEN_HEADER: &str = "X-Api-Token";

const TOKEN_ENV: &str = "LOKALISE_API_TOKEN";
const HOST_ENV: &str = "LOKALISE_API_HOST";

/// Connection settings shared by every collection.
///
/// ```
/// use lokalise_core::ClientConfig;
///
/// let config = ClientConfig::builder()
///     .api_key("secret")
///     .host("http://localhost:3000/api2")
///     .build();
/// assert_eq!(config.base_url(), "http://localhost:3000/api2/");
/// ```
#[derive(Clone, Builder)]
pub struct ClientConfig {
    #[builder(into)]
    api_key: String,
    #[builder(into, default = DEFAULT_HOST.to_string())]
    host: String,
    #[builder(into, default = default_user_agent())]
    user_agent: String,
}

impl ClientConfig {
    /// Read `LOKALISE_API_TOKEN` and, optionally, `LOKALISE_API_HOST`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(TOKEN_ENV)
            .map_err(|_| Error::Config(format!("{TOKEN_ENV} is not set")))?;
        let host = std::env::var(HOST_ENV).unwrap_or_else(|_| DEFAULT_HOST.to_string());
        Ok(Self::builder().api_key(api_key).host(host).build())
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// The host with exactly one trailing slash, ready for relative URIs.
    pub fn base_url(&self) -> String {
        format!("{}/", self.host.trim_end_matches('/'))
    }

    /// Headers sent with every request.
    pub(crate) fn default_headers(&self) -> Vec<(String, String)> {
        vec![
            ("accept".to_string(), "application/json".to_string()),
            ("user-agent".to_string(), self.user_agent.clone()),
            (API_TOKEN_HEADER.to_string(), self.api_key.clone()),
        ]
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"***")
            .field("host", &self.host)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn default_user_agent() -> String {
    format!("lokalise-core/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_api() {
        let config = ClientConfig::builder().api_key("token").build();
        assert_eq!(config.base_url(), DEFAULT_HOST);
        assert!(config.user_agent().starts_with("lokalise-core/"));
    }

    #[test]
    fn trailing_slashes_are_normalized() {
        let config = ClientConfig::builder()
            .api_key("token")
            .host("http://localhost:3000/api2///")
            .build();
        assert_eq!(config.base_url(), "http://localhost:3000/api2/");
    }

    #[test]
    fn token_travels_in_default_headers() {
        let config = ClientConfig::builder().api_key("token").build();
        let headers = config.default_headers();
        assert!(headers.contains(&(API_TOKEN_HEADER.to_string(), "token".to_string())));
    }

    #[test]
    fn debug_output_hides_token() {
        let config = ClientConfig::builder().api_key("super-secret").build();
        assert!(!format!("{config:?}").contains("super-secret"));
    }
}
