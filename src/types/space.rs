//!
//! Spaces and organizations, the scopes owning applications
//!
use serde::Deserialize;

use super::{inline_resource, nullable};

/// A space
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Space {
    #[serde(skip)]
    pub guid: String,
    #[serde(skip)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip)]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub organization_guid: String,
    #[serde(rename = "organization_url", default, deserialize_with = "nullable")]
    pub org_url: String,
    #[serde(default, deserialize_with = "nullable")]
    pub allow_ssh: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub apps_url: String,
    /// Organization, present when fetched with inlined relations
    #[serde(rename = "organization", default, deserialize_with = "inline_resource")]
    pub org_data: Option<Org>,
}

/// An organization
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Org {
    #[serde(skip)]
    pub guid: String,
    #[serde(skip)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip)]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub status: String,
    #[serde(default, deserialize_with = "nullable")]
    pub quota_definition_guid: String,
    #[serde(default, deserialize_with = "nullable")]
    pub billing_enabled: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub spaces_url: String,
}

super::entity!(Space, Org);
