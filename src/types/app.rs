//!
//! Application records
//!
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{inline_resource, nullable, space::Space, Timestamp};

/// Key under which the API hides credentials
pub const REDACTED_KEY: &str = "redacted_message";

/// Value the API returns in place of credentials
pub const REDACTED_PLACEHOLDER: &str = "[PRIVATE DATA HIDDEN]";

/// Returns true if a credentials map only carries the redaction placeholder
#[must_use]
pub fn is_redacted(credentials: &HashMap<String, Value>) -> bool {
    credentials
        .get(REDACTED_KEY)
        .and_then(Value::as_str)
        .map_or(false, |v| v == REDACTED_PLACEHOLDER)
}

/// Desired state of an application
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppState {
    Started,
    Stopped,
    /// Any state this library doesn't know about
    #[default]
    #[serde(other)]
    Unknown,
}

/// Staging state of the application package
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PackageState {
    Pending,
    Staged,
    Failed,
    #[default]
    #[serde(other)]
    Unknown,
}

/// State of a single running instance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstanceState {
    Running,
    Starting,
    Crashed,
    Down,
    Flapping,
    #[default]
    #[serde(other)]
    Unknown,
}

/// An application
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct App {
    #[serde(skip)]
    pub guid: String,
    #[serde(skip)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip)]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    /// Memory limit per instance, in MB
    #[serde(default, deserialize_with = "nullable")]
    pub memory: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub instances: u32,
    /// Disk limit per instance, in MB
    #[serde(default, deserialize_with = "nullable")]
    pub disk_quota: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub space_guid: String,
    #[serde(default, deserialize_with = "nullable")]
    pub stack_guid: String,
    #[serde(default, deserialize_with = "nullable")]
    pub state: AppState,
    #[serde(default, deserialize_with = "nullable")]
    pub package_state: PackageState,
    #[serde(default, deserialize_with = "nullable")]
    pub command: String,
    #[serde(default, deserialize_with = "nullable")]
    pub buildpack: String,
    #[serde(default, deserialize_with = "nullable")]
    pub detected_buildpack: String,
    #[serde(default, deserialize_with = "nullable")]
    pub detected_buildpack_guid: String,
    #[serde(default, deserialize_with = "nullable")]
    pub detected_start_command: String,
    #[serde(default, deserialize_with = "nullable")]
    pub health_check_http_endpoint: String,
    #[serde(default, deserialize_with = "nullable")]
    pub health_check_type: String,
    #[serde(default, deserialize_with = "nullable")]
    pub health_check_timeout: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub diego: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub enable_ssh: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub docker_image: String,
    /// Always redacted by the API, see [`is_redacted`]
    #[serde(default, deserialize_with = "nullable")]
    pub docker_credentials_json: HashMap<String, Value>,
    /// User provided environment, values may be of any JSON type
    #[serde(default, deserialize_with = "nullable")]
    pub environment_json: HashMap<String, Value>,
    #[serde(default, deserialize_with = "nullable")]
    pub staging_failed_reason: String,
    #[serde(default, deserialize_with = "nullable")]
    pub staging_failed_description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub staging_task_id: String,
    #[serde(default)]
    pub package_updated_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "nullable")]
    pub ports: Vec<u16>,
    #[serde(default, deserialize_with = "nullable")]
    pub space_url: String,
    #[serde(default, deserialize_with = "nullable")]
    pub stack_url: String,
    #[serde(default, deserialize_with = "nullable")]
    pub routes_url: String,
    /// Space with its organization, present when fetched with inlined relations
    #[serde(rename = "space", default, deserialize_with = "inline_resource")]
    pub space_data: Option<Space>,
}

super::entity!(App);

impl App {
    /// True once the application is requested to run
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.state == AppState::Started
    }

    /// Name of the owning organization, if the space was inlined
    #[must_use]
    pub fn org_name(&self) -> Option<&str> {
        self.space_data
            .as_ref()
            .and_then(|space| space.org_data.as_ref())
            .map(|org| org.name.as_str())
    }
}

/// Registry credentials for a docker image
#[derive(Debug, Clone, Serialize)]
pub struct DockerCredentials {
    /// Registry user
    pub username: String,
    /// Registry password
    pub password: String,
}

/// Request body for creating an application
#[derive(Debug, Clone, Default, Serialize)]
pub struct AppCreateRequest {
    /// Application name
    pub name: String,
    /// Owning space
    pub space_guid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<AppState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instances: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_quota: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_guid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buildpack: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_json: Option<HashMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_http_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diego: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_ssh: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_credentials: Option<DockerCredentials>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ports: Option<Vec<u16>>,
}

impl AppCreateRequest {
    /// Minimal request, everything else is left to platform defaults
    #[must_use]
    pub fn new(name: &str, space_guid: &str) -> Self {
        Self {
            name: name.to_string(),
            space_guid: space_guid.to_string(),
            ..Default::default()
        }
    }
}

/// Request body for updating an application, only set fields are sent
#[derive(Debug, Clone, Default, Serialize)]
pub struct AppUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_guid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<AppState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instances: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_quota: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_guid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buildpack: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_json: Option<HashMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_http_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diego: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_ssh: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_credentials: Option<DockerCredentials>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ports: Option<Vec<u16>>,
}

impl AppUpdateRequest {
    /// Update that only changes the desired state
    #[must_use]
    pub fn with_state(state: AppState) -> Self {
        Self {
            state: Some(state),
            ..Default::default()
        }
    }
}

/// Status of one instance, from `/v2/apps/:guid/instances`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppInstance {
    /// Instance state
    #[serde(default, deserialize_with = "nullable")]
    pub state: InstanceState,
    /// When the instance entered its state
    #[serde(default, deserialize_with = "nullable")]
    pub since: Timestamp,
    /// Seconds since the instance started
    #[serde(default, deserialize_with = "nullable")]
    pub uptime: u64,
    /// Extra information, e.g. why an instance is down
    #[serde(default)]
    pub details: Option<String>,
}

/// Resource usage sample of an instance
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Usage {
    /// Sample time
    #[serde(default, deserialize_with = "nullable")]
    pub time: Timestamp,
    /// CPU usage as a fraction of one core
    #[serde(default, deserialize_with = "nullable")]
    pub cpu: f64,
    /// Memory in bytes
    #[serde(default, deserialize_with = "nullable")]
    pub mem: u64,
    /// Disk in bytes
    #[serde(default, deserialize_with = "nullable")]
    pub disk: u64,
}

/// Statistics of one instance
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Stats {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub uris: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub host: String,
    #[serde(default, deserialize_with = "nullable")]
    pub port: u16,
    #[serde(default, deserialize_with = "nullable")]
    pub uptime: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub mem_quota: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub disk_quota: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub fds_quota: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub usage: Usage,
}

/// Statistics and state of one instance, from `/v2/apps/:guid/stats`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppStats {
    /// Instance state
    #[serde(default, deserialize_with = "nullable")]
    pub state: InstanceState,
    /// Usage, missing for instances that aren't running
    #[serde(default, deserialize_with = "nullable")]
    pub stats: Stats,
}

/// Environment of an application, from `/v2/apps/:guid/env`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppEnv {
    /// Variables of the staging environment variable group
    #[serde(rename = "staging_env_json", default, deserialize_with = "nullable")]
    pub staging_env: HashMap<String, Value>,
    /// Variables of the running environment variable group
    #[serde(rename = "running_env_json", default, deserialize_with = "nullable")]
    pub running_env: HashMap<String, Value>,
    /// User provided variables
    #[serde(rename = "environment_json", default, deserialize_with = "nullable")]
    pub environment: HashMap<String, Value>,
    /// Platform provided variables, e.g. `VCAP_SERVICES`
    #[serde(rename = "system_env_json", default, deserialize_with = "nullable")]
    pub system_env: HashMap<String, Value>,
    /// Platform provided application metadata, e.g. `VCAP_APPLICATION`
    #[serde(rename = "application_env_json", default, deserialize_with = "nullable")]
    pub application_env: HashMap<String, Value>,
}

/// Application with aggregate counts, from `/v2/apps/:guid/summary`
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppSummary {
    #[serde(default, deserialize_with = "nullable")]
    pub guid: String,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    /// Number of bound service instances
    #[serde(default, deserialize_with = "nullable")]
    pub service_count: u32,
    /// Number of instances currently running
    #[serde(default, deserialize_with = "nullable")]
    pub running_instances: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub space_guid: String,
    #[serde(default, deserialize_with = "nullable")]
    pub stack_guid: String,
    #[serde(default, deserialize_with = "nullable")]
    pub buildpack: String,
    #[serde(default, deserialize_with = "nullable")]
    pub detected_buildpack: String,
    #[serde(default, deserialize_with = "nullable")]
    pub detected_buildpack_guid: String,
    #[serde(default, deserialize_with = "nullable")]
    pub environment_json: HashMap<String, Value>,
    #[serde(default, deserialize_with = "nullable")]
    pub memory: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub instances: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub disk_quota: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub state: AppState,
    #[serde(default, deserialize_with = "nullable")]
    pub command: String,
    #[serde(default, deserialize_with = "nullable")]
    pub package_state: PackageState,
    #[serde(default, deserialize_with = "nullable")]
    pub health_check_type: String,
    #[serde(default, deserialize_with = "nullable")]
    pub health_check_timeout: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub staging_failed_reason: String,
    #[serde(default, deserialize_with = "nullable")]
    pub staging_failed_description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub diego: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub docker_image: String,
    /// Always redacted by the API, see [`is_redacted`]
    #[serde(
        alias = "docker_credentials_json",
        default,
        deserialize_with = "nullable"
    )]
    pub docker_credentials: HashMap<String, Value>,
    #[serde(default, deserialize_with = "nullable")]
    pub detected_start_command: String,
    #[serde(default, deserialize_with = "nullable")]
    pub enable_ssh: bool,
    #[serde(default)]
    pub package_updated_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "nullable")]
    pub ports: Vec<u16>,
}

/// Reference to the job processing an upload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobReference {
    /// Job identifier
    #[serde(default, deserialize_with = "nullable")]
    pub guid: String,
    /// Job URL, relative to the API address
    #[serde(default, deserialize_with = "nullable")]
    pub url: String,
}
