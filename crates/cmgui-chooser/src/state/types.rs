use serde::{Deserialize, Serialize};

use crate::items::ChooserItem;
use crate::layout::EntryPath;

/// All operations that can be dispatched to a chooser.
///
/// Commands own their data so they can be queued, logged, or replayed from a
/// script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChooserCommand<I> {
    /// Replace every item, keeping `identity` selected when it survives.
    Rebuild {
        items: Vec<ChooserItem<I>>,
        identity: Option<I>,
    },
    /// Programmatic selection. Falls back to the first item if absent.
    SetCurrent { identity: I },
    /// Interactive pick by identity.
    Pick { identity: I },
    /// Interactive activation of the entry at `path`.
    Activate { path: EntryPath },
}

impl<I> ChooserCommand<I> {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            ChooserCommand::Rebuild { .. } => "rebuild",
            ChooserCommand::SetCurrent { .. } => "set_current",
            ChooserCommand::Pick { .. } => "pick",
            ChooserCommand::Activate { .. } => "activate",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_serde_roundtrip() {
        let cmd = ChooserCommand::Rebuild {
            items: vec![ChooserItem::new(1u32, "one"), ChooserItem::new(2, "two")],
            identity: Some(2),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        let deserialized: ChooserCommand<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(cmd, deserialized);
    }

    #[test]
    fn test_activate_serializes_path_as_indices() {
        let cmd: ChooserCommand<u32> = ChooserCommand::Activate {
            path: EntryPath::new(vec![2, 0, 13]),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert_eq!(json, r#"{"Activate":{"path":[2,0,13]}}"#);
    }

    #[test]
    fn test_command_names() {
        let cmd: ChooserCommand<u32> = ChooserCommand::SetCurrent { identity: 4 };
        assert_eq!(cmd.name(), "set_current");
        let cmd: ChooserCommand<u32> = ChooserCommand::Pick { identity: 4 };
        assert_eq!(cmd.name(), "pick");
    }
}
