//! Input events for the generator form.

use serde::{Deserialize, Serialize};

use crate::{Color, SymbolSize};

/// Key name that commits the current input, matching the form's text field
/// behavior where Enter is equivalent to pressing Generate.
pub const COMMIT_KEY: &str = "Enter";

/// All input events the generator form can receive.
///
/// Each event corresponds to one discrete user action; the state machine
/// consumes them synchronously in [`crate::GeneratorState::apply`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum FormEvent {
    /// The text field content changed (one event per edit).
    InputChanged(String),

    /// A key was pressed while the text field had focus.
    KeyPressed {
        /// Key name (e.g. `"Enter"`, `"a"`).
        key: String,
    },

    /// The generate control was activated.
    GenerateRequested,

    /// The clear control was activated.
    ClearRequested,

    /// A new output size was selected.
    SizeSelected(SymbolSize),

    /// A new foreground (module) color was picked.
    ForegroundPicked(Color),

    /// A new background color was picked.
    BackgroundPicked(Color),
}

impl FormEvent {
    /// Whether this event requests a commit of the current input, either
    /// through the generate control or the commit key.
    #[must_use]
    pub fn is_commit(&self) -> bool {
        match self {
            Self::GenerateRequested => true,
            Self::KeyPressed { key } => key == COMMIT_KEY,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_events() {
        assert!(FormEvent::GenerateRequested.is_commit());
        assert!(FormEvent::KeyPressed {
            key: "Enter".to_string()
        }
        .is_commit());
    }

    #[test]
    fn test_non_commit_events() {
        assert!(!FormEvent::KeyPressed {
            key: "a".to_string()
        }
        .is_commit());
        assert!(!FormEvent::ClearRequested.is_commit());
        assert!(!FormEvent::InputChanged("x".to_string()).is_commit());
    }

    #[test]
    fn test_serde_round_trip() {
        let event = FormEvent::SizeSelected(SymbolSize::Large);
        let json = serde_json::to_string(&event).expect("serialize");
        let back: FormEvent = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(event, back);
    }
}
