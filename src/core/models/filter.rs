//! Narrow a record list by a free-text query.

use super::record::ModelRecord;

/// Records whose identifier or owner contains `query` (case-insensitive), in original order.
/// An empty or blank query keeps everything.
pub fn filter_records<'a>(records: &'a [ModelRecord], query: &str) -> Vec<&'a ModelRecord> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|r| r.identifier.to_lowercase().contains(&q) || r.owner.to_lowercase().contains(&q))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(identifier: &str, owner: &str) -> ModelRecord {
        ModelRecord {
            identifier: identifier.to_string(),
            owner: owner.to_string(),
            created_at: None,
        }
    }

    #[test]
    fn blank_query_returns_all() {
        let records = vec![record("a", "x"), record("b", "y")];
        assert_eq!(filter_records(&records, "").len(), 2);
        assert_eq!(filter_records(&records, "   ").len(), 2);
    }

    #[test]
    fn matches_identifier_or_owner_case_insensitive() {
        let records = vec![
            record("gpt-4o", "system"),
            record("llama-3.1-8b", "Meta"),
            record("whisper-1", "openai-internal"),
        ];
        let ids: Vec<_> = filter_records(&records, "GPT")
            .iter()
            .map(|r| r.identifier.as_str())
            .collect();
        assert_eq!(ids, vec!["gpt-4o"]);

        let ids: Vec<_> = filter_records(&records, "meta")
            .iter()
            .map(|r| r.identifier.as_str())
            .collect();
        assert_eq!(ids, vec!["llama-3.1-8b"]);
    }

    #[test]
    fn keeps_order() {
        let records = vec![record("m-2", "o"), record("m-1", "o"), record("z", "o")];
        let ids: Vec<_> = filter_records(&records, "m-")
            .iter()
            .map(|r| r.identifier.as_str())
            .collect();
        assert_eq!(ids, vec!["m-2", "m-1"]);
    }

    #[test]
    fn no_match_is_empty() {
        let records = vec![record("a", "b")];
        assert!(filter_records(&records, "zzz").is_empty());
    }
}
