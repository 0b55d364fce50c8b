use serde::{Deserialize, Serialize};

/// What changed as the result of a dispatched [`super::ChooserCommand`].
///
/// Within one dispatch, events are ordered chronologically. A dispatch that
/// changed nothing observable returns no events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChooserEvent<I> {
    /// The menu was rebuilt with `item_count` items.
    Rebuilt { item_count: usize },
    /// The requested identity was absent and `actual` was selected instead.
    SelectionCoerced {
        requested: Option<I>,
        actual: Option<I>,
    },
    /// The listener was notified with `identity`.
    SelectionChanged { identity: Option<I> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serde_roundtrip() {
        let events = vec![
            ChooserEvent::Rebuilt { item_count: 3 },
            ChooserEvent::SelectionCoerced {
                requested: Some("x".to_string()),
                actual: Some("a".to_string()),
            },
            ChooserEvent::SelectionChanged { identity: None },
        ];
        let json = serde_json::to_string(&events).unwrap();
        let deserialized: Vec<ChooserEvent<String>> = serde_json::from_str(&json).unwrap();
        assert_eq!(events, deserialized);
    }

    #[test]
    fn test_selection_changed_serializes_none_as_null() {
        let event: ChooserEvent<u32> = ChooserEvent::SelectionChanged { identity: None };
        assert_eq!(
            serde_json::to_string(&event).unwrap(),
            r#"{"SelectionChanged":{"identity":null}}"#
        );
    }
}
