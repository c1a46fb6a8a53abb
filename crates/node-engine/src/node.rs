//! The contract every node definition implements
//!
//! A node exposes its metadata, its controls and a data function. The data
//! function must be a pure function of the inputs and the current control
//! values: the editor may call it any number of times, in any order.

use crate::control::InputControl;
use crate::descriptor::TaskMetadata;
use crate::error::{NodeEngineError, Result};
use crate::types::{NodeInputs, NodeOutputs};

/// A node that can be placed on a canvas and evaluated by an editor runtime
pub trait DataNode: Send + Sync {
    /// Metadata describing ports and controls
    fn metadata(&self) -> TaskMetadata;

    /// Compute outputs from upstream values
    ///
    /// Must never fail: missing or malformed inputs degrade to empty outputs.
    fn data(&self, inputs: &NodeInputs) -> NodeOutputs;

    /// Look up a control by key
    fn control(&self, _key: &str) -> Option<&InputControl> {
        None
    }

    /// Get a mutable control by key
    fn control_mut(&mut self, _key: &str) -> Option<&mut InputControl> {
        None
    }

    /// Update a control from an editor-supplied value
    fn set_control(&mut self, key: &str, value: &serde_json::Value) -> Result<()> {
        match self.control_mut(key) {
            Some(control) => {
                control.set_value(value);
                Ok(())
            }
            None => {
                let node_type = self.metadata().node_type;
                log::warn!("Rejected edit of unknown control '{}' on '{}'", key, node_type);
                Err(NodeEngineError::unknown_control(node_type, key))
            }
        }
    }
}

impl<N: DataNode + ?Sized> DataNode for Box<N> {
    fn metadata(&self) -> TaskMetadata {
        (**self).metadata()
    }

    fn data(&self, inputs: &NodeInputs) -> NodeOutputs {
        (**self).data(inputs)
    }

    fn control(&self, key: &str) -> Option<&InputControl> {
        (**self).control(key)
    }

    fn control_mut(&mut self, key: &str) -> Option<&mut InputControl> {
        (**self).control_mut(key)
    }

    fn set_control(&mut self, key: &str, value: &serde_json::Value) -> Result<()> {
        (**self).set_control(key, value)
    }
}

/// The first upstream value connected to `port`, if any
pub fn first_input<'a>(inputs: &'a NodeInputs, port: &str) -> Option<&'a serde_json::Value> {
    inputs.get(port).and_then(|values| values.first())
}

/// Read a value as a list of strings
///
/// Non-array values yield an empty list; non-string elements are skipped.
pub fn string_list(value: Option<&serde_json::Value>) -> Vec<String> {
    value
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ControlMetadata;
    use crate::types::{ExecutionMode, NodeCategory};
    use serde_json::json;

    struct EchoNode {
        label: InputControl,
    }

    impl DataNode for EchoNode {
        fn metadata(&self) -> TaskMetadata {
            TaskMetadata {
                node_type: "echo".to_string(),
                category: NodeCategory::Transform,
                label: "Echo".to_string(),
                description: "Echoes its control".to_string(),
                inputs: vec![],
                outputs: vec![],
                controls: vec![ControlMetadata::text("label", "hi")],
                execution_mode: ExecutionMode::Reactive,
            }
        }

        fn data(&self, _inputs: &NodeInputs) -> NodeOutputs {
            NodeOutputs::from([("out".to_string(), json!(self.label.value()))])
        }

        fn control(&self, key: &str) -> Option<&InputControl> {
            (key == "label").then_some(&self.label)
        }

        fn control_mut(&mut self, key: &str) -> Option<&mut InputControl> {
            (key == "label").then_some(&mut self.label)
        }
    }

    #[test]
    fn test_first_input() {
        let mut inputs = NodeInputs::new();
        inputs.insert("a".to_string(), vec![json!(1), json!(2)]);
        inputs.insert("b".to_string(), vec![]);

        assert_eq!(first_input(&inputs, "a"), Some(&json!(1)));
        assert_eq!(first_input(&inputs, "b"), None);
        assert_eq!(first_input(&inputs, "missing"), None);
    }

    #[test]
    fn test_string_list() {
        assert_eq!(string_list(Some(&json!(["x", "y"]))), vec!["x", "y"]);
        assert_eq!(string_list(Some(&json!(["x", 3, null, "z"]))), vec!["x", "z"]);
        assert!(string_list(Some(&json!("x"))).is_empty());
        assert!(string_list(None).is_empty());
    }

    #[test]
    fn test_set_control() {
        let mut node = EchoNode {
            label: InputControl::text("hi"),
        };
        node.set_control("label", &json!("bye")).unwrap();
        assert_eq!(node.control("label").unwrap().value(), "bye");
        assert_eq!(node.data(&NodeInputs::new())["out"], json!("bye"));
    }

    #[test]
    fn test_set_unknown_control() {
        let mut node = EchoNode {
            label: InputControl::text("hi"),
        };
        let err = node.set_control("missing", &json!("x")).unwrap_err();
        assert!(matches!(
            err,
            NodeEngineError::UnknownControl { ref node_type, ref control }
                if node_type == "echo" && control == "missing"
        ));
    }

    #[test]
    fn test_boxed_node_delegates() {
        let mut node: Box<dyn DataNode> = Box::new(EchoNode {
            label: InputControl::text("hi"),
        });
        node.set_control("label", &json!("boxed")).unwrap();
        assert_eq!(node.metadata().node_type, "echo");
        assert_eq!(node.data(&NodeInputs::new())["out"], json!("boxed"));
    }
}
