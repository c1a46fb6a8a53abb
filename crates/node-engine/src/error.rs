//! Error types for the node engine

use thiserror::Error;

/// Result type alias using NodeEngineError
pub type Result<T> = std::result::Result<T, NodeEngineError>;

/// Errors that can occur when building or editing nodes
#[derive(Debug, Error)]
pub enum NodeEngineError {
    /// No node is registered under this kind
    #[error("Unknown node kind: {0}")]
    UnknownNodeType(String),

    /// The node does not declare a control with this key
    #[error("Node '{node_type}' has no control '{control}'")]
    UnknownControl { node_type: String, control: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl NodeEngineError {
    /// Create an unknown-control error
    pub fn unknown_control(node_type: impl Into<String>, control: impl Into<String>) -> Self {
        Self::UnknownControl {
            node_type: node_type.into(),
            control: control.into(),
        }
    }
}

impl From<NodeEngineError> for graph_flow::GraphError {
    fn from(err: NodeEngineError) -> Self {
        graph_flow::GraphError::TaskExecutionFailed(err.to_string())
    }
}
