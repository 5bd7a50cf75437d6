//!
//! Library for managing applications on a Cloud Foundry compatible platform
//! through the v2 REST API.
//!
//! ## Client
//! A client is built from a [`Config`] carrying the API address and an already
//! acquired bearer token.
//! ```no_run
//! #[tokio::main]
//! async fn main() -> Result<(), cf_apps_client::Error> {
//!     use cf_apps_client::{ClientBuilder, Config};
//!
//!     let config = Config::new("https://api.example.com", "bearer-token")
//!         .user_agent("my-deployer/1.0");
//!     let client = ClientBuilder::new().build(config)?;
//!
//!     for app in client.list_apps().await? {
//!         println!("{} {:?}", app.name, app.state);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Application lifecycle
//! ```no_run
//! #[tokio::main]
//! async fn main() -> Result<(), cf_apps_client::Error> {
//!     use cf_apps_client::types::app::AppCreateRequest;
//!     use cf_apps_client::{ClientBuilder, Config};
//!
//!     let client = ClientBuilder::new().build(Config::from_env()?)?;
//!
//!     let app = client
//!         .create_app(&AppCreateRequest::new("my-app", "space-guid"))
//!         .await?;
//!
//!     let bits = std::fs::read("my-app.zip")?;
//!     client.upload_app_bits(&app.guid, bits).await?;
//!     client.start_app(&app.guid).await?;
//!
//!     for (index, instance) in client.get_app_instances(&app.guid).await? {
//!         println!("{index}: {:?} since {}", instance.state, instance.since);
//!     }
//!     Ok(())
//! }
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub mod apps;
pub mod config;
pub mod types;

pub use apps::bits::Bits;
pub use config::Config;
pub use types::app::{App, AppEnv, AppInstance, AppStats, AppSummary};
pub use types::route::Route;
pub use types::space::{Org, Space};
pub use types::Timestamp;

/// Error description embedded by the platform in failed responses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CfError {
    /// Numeric error code
    #[serde(default)]
    pub code: i64,
    /// Machine readable error name, e.g. `CF-AppNotFound`
    #[serde(default)]
    pub error_code: String,
    /// Human readable description
    #[serde(default)]
    pub description: String,
}

/// Error returned by client functions
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The API answered with a non-success status
    #[error("Request to {endpoint} failed with HTTP {status}: {body}")]
    Request {
        /// URL of the failed request
        endpoint: String,
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
        /// Platform error, when the body carries one
        cf_error: Option<CfError>,
    },

    /// The response body could not be decoded into the expected type
    #[error("Unable to decode response from {endpoint}: {source}")]
    Decode {
        /// URL of the request
        endpoint: String,
        /// JSON error
        source: serde_json::Error,
    },

    /// A follow-up lookup of a multi step fetch failed
    #[error("Unable to get the {resource} for the app {app}: {source}")]
    DependencyLookup {
        /// Kind of the related resource, `Space` or `Org`
        resource: &'static str,
        /// Name of the application being fetched
        app: String,
        /// The lookup failure
        source: Box<Error>,
    },

    /// HTTP client error
    #[error("Reqwest: {0}")]
    HTTPClient(#[from] reqwest::Error),

    /// URL parsing error
    #[error("URL: {0}")]
    URL(#[from] url::ParseError),

    /// IO Errors
    #[error("IO error {0}")]
    IO(#[from] std::io::Error),

    /// Configuration is missing an environment variable
    #[error("Missing environment variable '{0}'")]
    MissingEnv(String),

    /// A lookup by name found nothing
    #[error("{0}")]
    NotFound(String),

    /// This error is returned if we get data from the API we can't parse/understand
    #[error("API Error {0:?}")]
    API(String),
}

impl Error {
    pub(crate) fn dependency(resource: &'static str, app: &str, source: Self) -> Self {
        Self::DependencyLookup {
            resource,
            app: app.to_string(),
            source: Box::new(source),
        }
    }

    /// HTTP status of a failed request, following dependency lookups
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            Self::DependencyLookup { source, .. } => source.status(),
            Self::HTTPClient(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Platform error carried by a failed request
    #[must_use]
    pub fn cf_error(&self) -> Option<&CfError> {
        match self {
            Self::Request { cf_error, .. } => cf_error.as_ref(),
            Self::DependencyLookup { source, .. } => source.cf_error(),
            _ => None,
        }
    }
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Builder for a [`Client`]
#[derive(Clone, Debug)]
pub struct ClientBuilder {
    reqwest_ca: Vec<reqwest::Certificate>,
    disable_cert_verification: bool,
    http_client: Option<reqwest::Client>,
}

impl ClientBuilder {
    /// Create a new builder instance
    #[must_use]
    pub const fn new() -> Self {
        Self {
            reqwest_ca: Vec::new(),
            disable_cert_verification: false,
            http_client: None,
        }
    }

    /// Add a root certificate for API certificate verification
    pub fn add_root_certificate(mut self, cert: &[u8]) -> Result<Self> {
        let r_ca = reqwest::Certificate::from_pem(cert)?;
        self.reqwest_ca.push(r_ca);
        Ok(self)
    }

    /// Disable certificate verification
    #[must_use]
    pub fn danger_accept_invalid_certs(self) -> Self {
        Self {
            disable_cert_verification: true,
            ..self
        }
    }

    /// Use an already configured HTTP client, e.g. with timeouts or proxies.
    /// Certificate settings of the builder are ignored in that case.
    #[must_use]
    pub fn http_client(self, client: reqwest::Client) -> Self {
        Self {
            http_client: Some(client),
            ..self
        }
    }

    /// Create the client
    pub fn build(&self, config: Config) -> Result<Client> {
        let base_url = url::Url::parse(&config.api_address)?;

        let client = if let Some(client) = &self.http_client {
            client.clone()
        } else {
            // Downloads resolve the blobstore redirect themselves
            let client = reqwest::Client::builder().redirect(reqwest::redirect::Policy::none());

            let client = self
                .reqwest_ca
                .iter()
                .fold(client, |client, ca| client.add_root_certificate(ca.clone()));

            client
                .danger_accept_invalid_certs(self.disable_cert_verification)
                .build()?
        };

        tracing::debug!("Client for API at {}", base_url);

        Ok(Client {
            api_address: config.api_address.trim_end_matches('/').to_string(),
            token: config.token,
            user_agent: config
                .user_agent
                .unwrap_or_else(|| config::DEFAULT_USER_AGENT.to_string()),
            client,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The `Client` is used for all interaction with the platform API.
/// It keeps no state between calls and can be cloned freely, clones share
/// the connection pool.
#[derive(Clone)]
pub struct Client {
    api_address: String,
    token: String,
    user_agent: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("api_address", &self.api_address)
            .field("user_agent", &self.user_agent)
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a Client builder
    #[must_use]
    pub const fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Returns the bearer token
    #[must_use]
    pub fn bearer_token(&self) -> &str {
        &self.token
    }

    /// Returns the API address, without trailing slash
    #[must_use]
    pub fn api_address(&self) -> &str {
        &self.api_address
    }

    /// Paths are appended verbatim, including paging links returned by the API.
    fn url(&self, path: &str) -> Result<url::Url> {
        Ok(url::Url::parse(&format!("{}{}", self.api_address, path))?)
    }

    fn request(&self, method: reqwest::Method, url: url::Url) -> reqwest::RequestBuilder {
        self.client
            .request(method, url)
            .bearer_auth(&self.token)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .header(reqwest::header::ACCEPT, "application/json")
    }

    /// GET a json payload from the REST API.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query_params: Option<&[(&str, &str)]>,
    ) -> Result<T> {
        let url = self.url(path)?;

        tracing::debug!("GET {}", url);

        let mut builder = self.request(reqwest::Method::GET, url.clone());
        if let Some(qp) = query_params {
            builder = builder.query(qp);
        }

        let result = check_status(builder.send().await?, url.as_str()).await?;
        decode(result, url.as_str()).await
    }

    /// POST a JSON body to a path and decode the response
    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        data: &B,
    ) -> Result<T> {
        let url = self.url(path)?;

        tracing::debug!("POST {}", url);

        let result = self
            .request(reqwest::Method::POST, url.clone())
            .json(data)
            .send()
            .await?;

        let result = check_status(result, url.as_str()).await?;
        decode(result, url.as_str()).await
    }

    /// PUT a JSON body to a path and decode the response
    pub async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        data: &B,
    ) -> Result<T> {
        let url = self.url(path)?;

        tracing::debug!("PUT {}", url);

        let result = self
            .request(reqwest::Method::PUT, url.clone())
            .json(data)
            .send()
            .await?;

        let result = check_status(result, url.as_str()).await?;
        decode(result, url.as_str()).await
    }

    /// DELETE a path, only the status is checked
    pub async fn delete(&self, path: &str) -> Result<()> {
        let url = self.url(path)?;

        tracing::debug!("DELETE {}", url);

        let result = self
            .request(reqwest::Method::DELETE, url.clone())
            .send()
            .await?;

        check_status(result, url.as_str()).await?;
        Ok(())
    }

    /// GET every page of a collection, following `next_url` until the API
    /// reports no further page. When `max_pages` is set, traversal stops after
    /// that many pages.
    pub async fn list_resources<T: types::Entity>(
        &self,
        path: &str,
        query_params: &[(&str, &str)],
        max_pages: Option<usize>,
    ) -> Result<Vec<T>> {
        let mut records = Vec::new();
        let mut page: types::Page<T> = self.get_json(path, Some(query_params)).await?;
        let mut fetched = 1;

        loop {
            let next_url = page.next_url.take();
            records.extend(page.into_entities());

            match next_url {
                Some(next) if !next.is_empty() && max_pages.map_or(true, |max| fetched < max) => {
                    page = self.get_json(&next, None).await?;
                    fetched += 1;
                }
                _ => break,
            }
        }

        tracing::debug!("{} returned {} records in {} pages", path, records.len(), fetched);
        Ok(records)
    }
}

/// Map a non-success status to [`Error::Request`]
pub(crate) async fn check_status(
    response: reqwest::Response,
    endpoint: &str,
) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    tracing::error!("{} returned {}", endpoint, status);
    let body = response.text().await?;
    tracing::debug!("error body: {}", body);

    let cf_error = serde_json::from_str::<CfError>(&body)
        .ok()
        .filter(|e| !e.error_code.is_empty() || !e.description.is_empty());

    Err(Error::Request {
        endpoint: endpoint.to_string(),
        status: status.as_u16(),
        body,
        cf_error,
    })
}

pub(crate) async fn decode<T: DeserializeOwned>(
    response: reqwest::Response,
    endpoint: &str,
) -> Result<T> {
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|source| Error::Decode {
        endpoint: endpoint.to_string(),
        source,
    })
}
