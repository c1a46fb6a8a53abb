//! Node descriptor trait and metadata types
//!
//! This module provides the `TaskDescriptor` trait that allows nodes to
//! self-describe their metadata (ports, controls, category, label, etc.).
//!
//! The node implementation defines both its behavior AND its metadata, so
//! the palette and the data function never drift apart.

use serde::{Deserialize, Serialize};

use crate::control::ControlKind;
use crate::socket::Socket;
use crate::types::{ExecutionMode, NodeCategory};

/// Trait for nodes that can describe their metadata
///
/// # Example
///
/// ```ignore
/// use node_engine::{TaskDescriptor, TaskMetadata, PortMetadata, DATA_SOCKET};
/// use node_engine::{NodeCategory, ExecutionMode};
///
/// impl TaskDescriptor for MyNode {
///     fn descriptor() -> TaskMetadata {
///         TaskMetadata {
///             node_type: "my-node".to_string(),
///             category: NodeCategory::Transform,
///             label: "My Node".to_string(),
///             description: "Does something useful".to_string(),
///             inputs: vec![PortMetadata::optional("in", "In", DATA_SOCKET)],
///             outputs: vec![PortMetadata::optional("out", "Out", DATA_SOCKET)],
///             controls: vec![],
///             execution_mode: ExecutionMode::Reactive,
///         }
///     }
/// }
/// ```
pub trait TaskDescriptor {
    /// Get the static metadata for this node type
    fn descriptor() -> TaskMetadata
    where
        Self: Sized;
}

/// Complete metadata for a node type
///
/// This describes everything needed to render a node in the UI
/// and validate connections between nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskMetadata {
    /// Unique type identifier (e.g., "find-subdomains")
    pub node_type: String,
    /// Category for UI grouping
    pub category: NodeCategory,
    /// Human-readable label
    pub label: String,
    /// Description of what the node does
    pub description: String,
    /// Input port definitions
    pub inputs: Vec<PortMetadata>,
    /// Output port definitions
    pub outputs: Vec<PortMetadata>,
    /// Editable controls shown on the node body
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub controls: Vec<ControlMetadata>,
    /// Execution mode
    pub execution_mode: ExecutionMode,
}

impl TaskMetadata {
    /// Find an input port by id
    pub fn input(&self, id: &str) -> Option<&PortMetadata> {
        self.inputs.iter().find(|p| p.id == id)
    }

    /// Find an output port by id
    pub fn output(&self, id: &str) -> Option<&PortMetadata> {
        self.outputs.iter().find(|p| p.id == id)
    }
}

/// Metadata for a port (input or output)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortMetadata {
    /// Port identifier (used in context keys)
    pub id: String,
    /// Human-readable label
    pub label: String,
    /// Socket the port is typed by
    pub socket: Socket,
    /// Whether this input is required
    pub required: bool,
    /// Whether multiple connections are allowed
    pub multiple: bool,
}

impl PortMetadata {
    /// Create a new port metadata
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        socket: Socket,
        required: bool,
        multiple: bool,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            socket,
            required,
            multiple,
        }
    }

    /// Create an optional port
    pub fn optional(id: impl Into<String>, label: impl Into<String>, socket: Socket) -> Self {
        Self::new(id, label, socket, false, false)
    }
}

/// Metadata for a control attached to a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlMetadata {
    /// Control identifier
    pub id: String,
    /// Widget kind
    pub kind: ControlKind,
    /// Value the control starts with
    pub initial: String,
}

impl ControlMetadata {
    /// Describe a text control
    pub fn text(id: impl Into<String>, initial: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: ControlKind::Text,
            initial: initial.into(),
        }
    }
}
