//! Subtract Node
//!
//! Removes every entry of one list from another, e.g. hosts already seen
//! in a previous run.

use std::collections::HashSet;

use node_engine::{
    first_input, string_list, DataNode, ExecutionMode, NodeCategory, NodeInputs, NodeOutputs,
    PortMetadata, TaskDescriptor, TaskMetadata, DATA_SOCKET,
};
use serde_json::json;

/// Subtract Node
///
/// # Inputs
/// - `list` - the list to filter
/// - `remove` - entries to drop from `list`
///
/// # Outputs
/// - `list` - entries of `list` not found in `remove`, order and repeats kept
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubtractNode;

impl SubtractNode {
    /// Port ID for the list to filter, also used for the output
    pub const PORT_LIST: &'static str = "list";
    /// Port ID for the entries to remove
    pub const PORT_REMOVE: &'static str = "remove";

    pub fn new() -> Self {
        Self
    }

    /// Entries of `original` that are not in `to_remove`
    pub fn subtract(original: &[String], to_remove: &[String]) -> Vec<String> {
        let to_remove: HashSet<&str> = to_remove.iter().map(String::as_str).collect();
        original
            .iter()
            .filter(|item| !to_remove.contains(item.as_str()))
            .cloned()
            .collect()
    }
}

impl TaskDescriptor for SubtractNode {
    fn descriptor() -> TaskMetadata {
        TaskMetadata {
            node_type: "subtract".to_string(),
            category: NodeCategory::Transform,
            label: "Subtract".to_string(),
            description: "Removes the entries of one list from another".to_string(),
            inputs: vec![
                PortMetadata::optional(Self::PORT_LIST, "List", DATA_SOCKET),
                PortMetadata::optional(Self::PORT_REMOVE, "Remove", DATA_SOCKET),
            ],
            outputs: vec![PortMetadata::optional(
                Self::PORT_LIST,
                "Remaining",
                DATA_SOCKET,
            )],
            controls: vec![],
            execution_mode: ExecutionMode::Reactive,
        }
    }
}

inventory::submit!(node_engine::NodeRegistration {
    descriptor: SubtractNode::descriptor,
    create: || Box::new(crate::Node::from(SubtractNode::new())),
});

impl DataNode for SubtractNode {
    fn metadata(&self) -> TaskMetadata {
        Self::descriptor()
    }

    fn data(&self, inputs: &NodeInputs) -> NodeOutputs {
        let list = string_list(first_input(inputs, Self::PORT_LIST));
        let remove = string_list(first_input(inputs, Self::PORT_REMOVE));
        let remaining = Self::subtract(&list, &remove);

        log::debug!(
            "SubtractNode: {} - {} entries left {}",
            list.len(),
            remove.len(),
            remaining.len()
        );

        NodeOutputs::from([(Self::PORT_LIST.to_string(), json!(remaining))])
    }
}
