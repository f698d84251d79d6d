//! REST collections managed by the back office.

use serde::{de::DeserializeOwned, Serialize};

use super::table::Sortable;
use super::validation::FromForm;

/// A record type served by a CRUD collection under `/api/{COLLECTION}`.
pub trait Resource: Clone + Serialize + DeserializeOwned + Sortable + Searchable {
    const COLLECTION: &'static str;
    /// Human-readable name for toasts and headings.
    const TITLE: &'static str;

    /// Create/update payload.
    type Draft: FromForm + Serialize;

    fn id(&self) -> &str;

    /// Prefill for the edit form.
    fn to_draft(&self) -> Self::Draft;

    /// Whether the collection exposes `PATCH /{id}/toggle-status`.
    fn supports_status_toggle() -> bool {
        false
    }

    /// Current value of the toggled flag, when there is one.
    fn is_enabled(&self) -> Option<bool> {
        None
    }
}

/// Free-text search over a record.
pub trait Searchable {
    /// `needle` is already lowercased and non-empty.
    fn matches_filter(&self, needle: &str) -> bool;
}

pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Keeps rows matching `query` (case-insensitive). A blank query keeps all.
pub fn filter_items<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note(&'static str);

    impl Searchable for Note {
        fn matches_filter(&self, needle: &str) -> bool {
            contains_ci(self.0, needle)
        }
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let notes = vec![Note("Red Shoes"), Note("blue hat"), Note("RED scarf")];
        assert_eq!(filter_items(&notes, " red "), vec![Note("Red Shoes"), Note("RED scarf")]);
        assert_eq!(filter_items(&notes, "   ").len(), 3);
        assert!(filter_items(&notes, "green").is_empty());
    }
}
