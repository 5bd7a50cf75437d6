//!
//! Routes mapped to applications
//!
use serde::Deserialize;

use super::nullable;

/// A route
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Route {
    /// Route identifier
    #[serde(skip)]
    pub guid: String,
    /// Creation time
    #[serde(skip)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    /// Last update
    #[serde(skip)]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    /// Host name, empty for TCP routes
    #[serde(default, deserialize_with = "nullable")]
    pub host: String,
    /// Path prefix
    #[serde(default, deserialize_with = "nullable")]
    pub path: String,
    /// Owning domain
    #[serde(default, deserialize_with = "nullable")]
    pub domain_guid: String,
    /// Owning space
    #[serde(default, deserialize_with = "nullable")]
    pub space_guid: String,
    /// Bound route service
    #[serde(default)]
    pub service_instance_guid: Option<String>,
    /// Port, only set for TCP routes
    #[serde(default)]
    pub port: Option<u16>,
    #[allow(missing_docs)]
    #[serde(default, deserialize_with = "nullable")]
    pub domain_url: String,
    #[allow(missing_docs)]
    #[serde(default, deserialize_with = "nullable")]
    pub apps_url: String,
}

super::entity!(Route);
