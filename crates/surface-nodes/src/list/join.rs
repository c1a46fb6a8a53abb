//! Join Node
//!
//! Merges two string lists into one, dropping duplicates. Useful for
//! combining the results of parallel discovery branches.

use std::collections::HashSet;

use node_engine::{
    first_input, string_list, DataNode, ExecutionMode, NodeCategory, NodeInputs, NodeOutputs,
    PortMetadata, TaskDescriptor, TaskMetadata, DATA_SOCKET,
};
use serde_json::json;

/// Join Node
///
/// # Inputs
/// - `a` - first list (only the first connection is read)
/// - `b` - second list (only the first connection is read)
///
/// # Outputs
/// - `list` - every distinct entry of `a` then `b`, in first-occurrence order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinNode;

impl JoinNode {
    /// Port ID for the first list
    pub const PORT_A: &'static str = "a";
    /// Port ID for the second list
    pub const PORT_B: &'static str = "b";
    /// Port ID for the merged list
    pub const PORT_LIST: &'static str = "list";

    /// Create a new join node
    pub fn new() -> Self {
        Self
    }

    /// Merge two lists, keeping the first occurrence of each entry
    pub fn merge(a: &[String], b: &[String]) -> Vec<String> {
        let mut seen = HashSet::with_capacity(a.len() + b.len());
        a.iter()
            .chain(b)
            .filter(|item| seen.insert(item.as_str()))
            .cloned()
            .collect()
    }
}

impl TaskDescriptor for JoinNode {
    fn descriptor() -> TaskMetadata {
        TaskMetadata {
            node_type: "join".to_string(),
            category: NodeCategory::Transform,
            label: "Join".to_string(),
            description: "Merges two string lists, removing duplicates".to_string(),
            inputs: vec![
                PortMetadata::optional(Self::PORT_A, "List A", DATA_SOCKET),
                PortMetadata::optional(Self::PORT_B, "List B", DATA_SOCKET),
            ],
            outputs: vec![PortMetadata::optional(Self::PORT_LIST, "Merged", DATA_SOCKET)],
            controls: vec![],
            execution_mode: ExecutionMode::Reactive,
        }
    }
}

inventory::submit!(node_engine::NodeRegistration {
    descriptor: JoinNode::descriptor,
    create: || Box::new(crate::Node::from(JoinNode::new())),
});

impl DataNode for JoinNode {
    fn metadata(&self) -> TaskMetadata {
        Self::descriptor()
    }

    fn data(&self, inputs: &NodeInputs) -> NodeOutputs {
        let a = string_list(first_input(inputs, Self::PORT_A));
        let b = string_list(first_input(inputs, Self::PORT_B));
        let merged = Self::merge(&a, &b);

        log::debug!(
            "JoinNode: merged {} + {} entries into {}",
            a.len(),
            b.len(),
            merged.len()
        );

        NodeOutputs::from([(Self::PORT_LIST.to_string(), json!(merged))])
    }
}
