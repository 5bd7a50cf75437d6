//!
//! Collection of types returned from and sent to the v2 API.
//!
//! NOTE: The types here are not exhaustive to the APIs.
//!
//! Every field tolerates being absent or `null` and falls back to its zero value.
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

pub mod app;
pub mod route;
pub mod space;
mod timestamp;

pub use timestamp::{ParseTimestampError, Timestamp};

/// Metadata attached to every v2 resource
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Metadata {
    /// Resource identifier
    #[serde(default, deserialize_with = "nullable")]
    pub guid: String,
    /// Resource URL, relative to the API address
    #[serde(default, deserialize_with = "nullable")]
    pub url: String,
    /// Creation time
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    /// Last update
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// A record delivered inside a `{"metadata": ..., "entity": ...}` envelope.
pub trait Entity: DeserializeOwned {
    /// Copy identifiers from the envelope into the record
    fn apply_metadata(&mut self, metadata: Metadata);
}

macro_rules! entity {
    ($($type:ty),+) => {
        $(
            impl crate::types::Entity for $type {
                fn apply_metadata(&mut self, metadata: crate::types::Metadata) {
                    self.guid = metadata.guid;
                    self.created_at = metadata.created_at;
                    self.updated_at = metadata.updated_at;
                }
            }
        )+
    };
}
pub(crate) use entity;

/// Resource envelope
#[derive(Debug, Deserialize)]
pub struct Resource<T> {
    /// Identifiers and timestamps
    #[serde(default)]
    pub metadata: Metadata,
    /// The record itself
    pub entity: T,
}

impl<T: Entity> Resource<T> {
    /// Merge the envelope into the record
    pub fn into_entity(self) -> T {
        let mut entity = self.entity;
        entity.apply_metadata(self.metadata);
        entity
    }
}

/// One page of a collection
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    /// Number of records over all pages
    #[serde(default)]
    pub total_results: u64,
    /// Number of pages
    #[serde(default)]
    pub total_pages: u64,
    /// Link to the previous page
    pub prev_url: Option<String>,
    /// Link to the next page, `None` on the last page
    pub next_url: Option<String>,
    /// Records of this page
    #[serde(default = "Vec::new")]
    pub resources: Vec<Resource<T>>,
}

impl<T: Entity> Page<T> {
    /// The records of this page, in server order
    pub fn into_entities(self) -> impl Iterator<Item = T> {
        self.resources.into_iter().map(Resource::into_entity)
    }
}

/// Decode `null` as the zero value of the field
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode an inlined related resource, e.g. an app's `space`
pub(crate) fn inline_resource<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Entity,
{
    Ok(Option::<Resource<T>>::deserialize(deserializer)?.map(Resource::into_entity))
}
