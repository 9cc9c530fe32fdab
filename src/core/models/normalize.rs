//! Turn provider payloads into [`ModelRecord`]s and order them newest first.

use log::{debug, warn};
use serde_json::{Map, Value};

use super::record::ModelRecord;

/// Identifier used when an entry carries neither `id` nor `name`.
pub const UNKNOWN_IDENTIFIER: &str = "unknown";

/// Keys that may hold the model list, in lookup order.
const LIST_KEYS: [&str; 2] = ["data", "models"];

/// The model list from a payload: the first of `data` / `models` holding a non-empty array.
/// Anything else (missing keys, null, non-array, non-object payload) yields an empty slice.
pub fn extract_entries(payload: &Value) -> &[Value] {
    LIST_KEYS
        .iter()
        .filter_map(|key| payload.get(key).and_then(Value::as_array))
        .find(|list| !list.is_empty())
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn non_empty_str<'a>(entry: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    entry
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// `created` as whole seconds; floats are truncated. Zero and negatives count as absent.
fn created_at(entry: &Map<String, Value>) -> Option<i64> {
    let value = entry.get("created")?;
    let secs = value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f as i64))?;
    (secs > 0).then_some(secs)
}

/// Normalize one raw entry. Missing fields fall back instead of failing.
pub fn normalize_entry(entry: &Map<String, Value>, provider_name: &str) -> ModelRecord {
    let identifier = non_empty_str(entry, "id")
        .or_else(|| non_empty_str(entry, "name"))
        .unwrap_or(UNKNOWN_IDENTIFIER)
        .to_string();
    let owner = non_empty_str(entry, "owned_by")
        .unwrap_or(provider_name)
        .to_string();
    ModelRecord {
        identifier,
        owner,
        created_at: created_at(entry),
    }
}

/// Stable sort, newest first. Records without a timestamp go last in provider order.
pub fn sort_newest_first(records: &mut [ModelRecord]) {
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Full payload pipeline: extract, normalize, sort.
pub fn normalize_response(payload: &Value, provider_name: &str) -> Vec<ModelRecord> {
    let entries = extract_entries(payload);
    let mut records: Vec<ModelRecord> = entries
        .iter()
        .filter_map(|entry| match entry.as_object() {
            Some(obj) => Some(normalize_entry(obj, provider_name)),
            None => {
                warn!("Skipping non-object model entry from {}", provider_name);
                None
            }
        })
        .collect();
    if records.len() < entries.len() {
        debug!(
            "Kept {} of {} entries from {}",
            records.len(),
            entries.len(),
            provider_name
        );
    }
    sort_newest_first(&mut records);
    records
}
