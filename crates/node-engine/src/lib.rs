//! Node Engine - the contract between surface-graph nodes and an editor
//!
//! This crate defines what a node looks like to a node-graph editor:
//!
//! - Sockets that type every port (a single shared `data` socket)
//! - Port and control metadata for rendering palettes and node bodies
//! - The `DataNode` trait: a pure data function plus editable controls
//! - A registry mapping node kinds to metadata and factories
//! - A graph-flow `Task` adapter for running nodes inside a workflow
//!
//! Evaluation order, cycle detection and re-computation belong to the
//! editor runtime; nothing here schedules work.
//!
//! # Example
//!
//! ```ignore
//! use node_engine::{NodeRegistry, NodeInputs};
//!
//! let registry = NodeRegistry::with_builtins();
//! let mut node = registry.create_node("find-subdomains")?;
//! node.set_control("domain", &serde_json::json!("example.org"))?;
//! let outputs = node.data(&NodeInputs::new());
//! ```

pub mod control;
pub mod descriptor;
pub mod error;
pub mod node;
pub mod registry;
pub mod socket;
pub mod tasks;
pub mod types;

// Re-export key types
pub use control::{ControlKind, InputControl};
pub use descriptor::{ControlMetadata, PortMetadata, TaskDescriptor, TaskMetadata};
pub use error::{NodeEngineError, Result};
pub use node::{first_input, string_list, DataNode};
pub use registry::{NodeFactory, NodeRegistration, NodeRegistry};
pub use socket::{Socket, DATA_SOCKET};
pub use tasks::{ContextKeys, NodeTask};
pub use types::{ExecutionMode, NodeCategory, NodeInputs, NodeOutputs, PortId};

// Re-export graph-flow types that consumers will need
pub use graph_flow::{Context, GraphError, NextAction, Task, TaskResult};
