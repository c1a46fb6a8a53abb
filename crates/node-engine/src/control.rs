//! Editable controls attached to nodes
//!
//! A control holds a value the user edits on the node body, outside the
//! dataflow. Nodes read the current value as a fallback when nothing is
//! connected upstream.

use serde::{Deserialize, Serialize};

/// Widget kind of a control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlKind {
    /// Single-line text input
    Text,
}

/// A text input control with an initial and a current value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputControl {
    kind: ControlKind,
    initial: String,
    value: String,
}

impl InputControl {
    /// Create a text control starting at `initial`
    pub fn text(initial: impl Into<String>) -> Self {
        let initial = initial.into();
        Self {
            kind: ControlKind::Text,
            value: initial.clone(),
            initial,
        }
    }

    /// Widget kind
    pub fn kind(&self) -> ControlKind {
        self.kind
    }

    /// The value the control was created with
    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// The current value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the current value with text
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Replace the current value with an editor-supplied JSON value
    ///
    /// `null` clears the control, strings are taken as-is and anything else
    /// is stored as its JSON text.
    pub fn set_value(&mut self, value: &serde_json::Value) {
        self.value = match value {
            serde_json::Value::Null => String::new(),
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
    }

    /// Restore the initial value
    pub fn reset(&mut self) {
        self.value = self.initial.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_starts_at_initial() {
        let control = InputControl::text("example.com");
        assert_eq!(control.kind(), ControlKind::Text);
        assert_eq!(control.initial(), "example.com");
        assert_eq!(control.value(), "example.com");
    }

    #[test]
    fn test_set_value_coercion() {
        let mut control = InputControl::text("example.com");

        control.set_value(&json!("target.org"));
        assert_eq!(control.value(), "target.org");

        control.set_value(&json!(42));
        assert_eq!(control.value(), "42");

        control.set_value(&json!(true));
        assert_eq!(control.value(), "true");

        control.set_value(&serde_json::Value::Null);
        assert_eq!(control.value(), "");
    }

    #[test]
    fn test_reset() {
        let mut control = InputControl::text("example.com");
        control.set_text("other.net");
        assert_eq!(control.value(), "other.net");

        control.reset();
        assert_eq!(control.value(), "example.com");
    }
}
