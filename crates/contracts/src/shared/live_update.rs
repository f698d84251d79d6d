//! Change notifications pushed by the backend over the WebSocket channel.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionAction {
    Created,
    Updated,
    Deleted,
}

/// `{"collection": "orders", "action": "updated", "id": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionEvent {
    pub collection: String,
    pub action: CollectionAction,
    #[serde(default)]
    pub id: Option<String>,
}

impl CollectionEvent {
    /// Malformed frames yield `None`; the subscriber ignores them.
    pub fn parse(frame: &str) -> Option<Self> {
        serde_json::from_str(frame).ok()
    }

    pub fn concerns(&self, collection: &str) -> bool {
        self.collection == collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_event() {
        let event =
            CollectionEvent::parse(r#"{"collection":"orders","action":"updated","id":"o-1"}"#)
                .unwrap();
        assert_eq!(event.action, CollectionAction::Updated);
        assert_eq!(event.id.as_deref(), Some("o-1"));
        assert!(event.concerns("orders"));
        assert!(!event.concerns("products"));
    }

    #[test]
    fn test_id_is_optional() {
        let event = CollectionEvent::parse(r#"{"collection":"orders","action":"deleted"}"#).unwrap();
        assert_eq!(event.id, None);
    }

    #[test]
    fn test_malformed_frames_are_ignored() {
        assert_eq!(CollectionEvent::parse("ping"), None);
        assert_eq!(
            CollectionEvent::parse(r#"{"collection":"orders","action":"exploded"}"#),
            None
        );
    }
}
