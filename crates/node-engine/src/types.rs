//! Core types shared by node definitions
//!
//! These types describe the data a node receives and produces, and how
//! nodes are grouped in an editor palette.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Unique identifier for a port
pub type PortId = String;

/// Values arriving on each input port, one entry per upstream connection
pub type NodeInputs = HashMap<PortId, Vec<serde_json::Value>>;

/// The single value produced on each output port
pub type NodeOutputs = HashMap<PortId, serde_json::Value>;

/// Category of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeCategory {
    /// Nodes that reshape or combine lists
    Transform,
    /// Nodes that derive new hosts from a root domain
    Discovery,
}

/// Execution mode for a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    /// Re-evaluate whenever inputs or controls change
    Reactive,
}
