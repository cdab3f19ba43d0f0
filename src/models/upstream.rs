//! Raw user shapes returned by the upstream demo feed.
//!
//! Only the fields the enrichment pipeline actually reads are deserialized;
//! everything else in the feed payload is ignored.

use serde::Deserialize;

/// Envelope of the upstream `/users` endpoint.
#[derive(Debug, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<RawUser>,
}

/// A single raw user record from the feed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUser {
    pub id: u64,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub image: String,
}
