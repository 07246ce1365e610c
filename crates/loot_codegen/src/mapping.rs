//! Ordered raw-id -> enum-token mapping.

use std::collections::HashSet;

use crate::helpers::id_to_enum;

/// Reserved raw id that heads every mapping.
const NONE_ID: &str = "none";

/// Insertion-ordered, key-unique mapping from raw catalog id to canonical
/// enum token.
///
/// The reserved `"none"` sentinel is always present and always first;
/// every other entry sits at the position its raw id was first
/// discovered. Iteration over [`entries`](Self::entries) follows that
/// order, which is what pins down the generated enum values.
#[derive(Debug)]
pub struct EnumMapping {
    entries: Vec<(String, String)>,
    seen: HashSet<String>,
}

impl EnumMapping {
    /// New mapping holding only the sentinel entry.
    pub fn new() -> Self {
        let mut mapping = EnumMapping {
            entries: Vec::new(),
            seen: HashSet::new(),
        };
        mapping.insert(NONE_ID);
        mapping
    }

    /// Build a mapping from raw ids in discovery order.
    pub fn from_ids<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut mapping = Self::new();
        for id in ids {
            mapping.insert(&id);
        }
        mapping
    }

    /// Record a raw id. First occurrence wins; repeats are no-ops.
    pub fn insert(&mut self, raw: &str) {
        if !self.seen.insert(raw.to_string()) {
            return;
        }
        self.entries.push((raw.to_string(), id_to_enum(raw)));
    }

    /// Entries as `(raw id, token)` pairs in insertion order.
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Number of entries, sentinel included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for EnumMapping {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_is_seeded_first() {
        let mapping = EnumMapping::new();
        assert_eq!(mapping.len(), 1);
        assert_eq!(
            mapping.entries()[0],
            ("none".to_string(), "NONE".to_string())
        );
    }

    #[test]
    fn test_discovery_order_with_dedup() {
        let mapping = EnumMapping::from_ids(
            ["goblin", "orc", "goblin", "none", "orc"].map(String::from),
        );
        let raws: Vec<&str> = mapping.entries().iter().map(|(r, _)| r.as_str()).collect();
        assert_eq!(raws, ["none", "goblin", "orc"]);
    }

    #[test]
    fn test_tokens_are_canonicalized() {
        let mapping = EnumMapping::from_ids(["regenerationRing".to_string()]);
        assert_eq!(
            mapping.entries()[1],
            ("regenerationRing".to_string(), "REGENERATION_RING".to_string())
        );
    }

    #[test]
    fn test_none_stays_first_even_when_listed_late() {
        let mapping = EnumMapping::from_ids(["dragon", "none"].map(String::from));
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.entries()[0].0, "none");
        assert_eq!(mapping.entries()[1].0, "dragon");
    }
}
