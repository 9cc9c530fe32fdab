//! Normalized model entry (no dependencies on HTTP or provider payloads).

use serde::Serialize;

/// Display-ready model record. `identifier` is never empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ModelRecord {
    pub identifier: String,
    pub owner: String,
    /// Unix seconds; only set when the provider reported a positive value.
    pub created_at: Option<i64>,
}
