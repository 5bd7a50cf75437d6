//!
//! Client configuration
//!

/// User agent sent when the configuration doesn't name one
pub const DEFAULT_USER_AGENT: &str = concat!("cf-apps-client/", env!("CARGO_PKG_VERSION"));

/// API address and credentials for a [`crate::Client`].
///
/// The token is used as is, acquiring or refreshing it is up to the caller.
#[derive(Clone)]
pub struct Config {
    /// Base address of the API, e.g. `https://api.example.com`
    pub api_address: String,
    /// Bearer token attached to every request
    pub token: String,
    /// Optional client identification
    pub user_agent: Option<String>,
}

impl Config {
    /// Create a configuration with the default user agent
    #[must_use]
    pub fn new(api_address: &str, token: &str) -> Self {
        Self {
            api_address: api_address.to_string(),
            token: token.to_string(),
            user_agent: None,
        }
    }

    /// Set the user agent
    #[must_use]
    pub fn user_agent(self, user_agent: &str) -> Self {
        Self {
            user_agent: Some(user_agent.to_string()),
            ..self
        }
    }

    /// Load the configuration from environment variables
    /// * `CF_API` - API address, e.g. `https://api.example.com`
    /// * `CF_TOKEN` - bearer token, without the `bearer` prefix
    /// * `CF_USER_AGENT` - optional user agent
    pub fn from_env() -> crate::Result<Self> {
        let api_address =
            std::env::var("CF_API").map_err(|_| crate::Error::MissingEnv("CF_API".into()))?;
        tracing::info!("Using API at address {}", api_address);

        let token =
            std::env::var("CF_TOKEN").map_err(|_| crate::Error::MissingEnv("CF_TOKEN".into()))?;
        // `cf oauth-token` prints the scheme as well
        let token = token
            .strip_prefix("bearer ")
            .or_else(|| token.strip_prefix("Bearer "))
            .unwrap_or(&token)
            .to_string();

        Ok(Self {
            api_address,
            token,
            user_agent: std::env::var("CF_USER_AGENT").ok(),
        })
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_address", &self.api_address)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}
