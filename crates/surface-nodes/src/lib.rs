//! Surface Nodes
//!
//! Node definitions for wiring domain reconnaissance graphs in a node
//! editor. Each node declares its ports and controls and computes its
//! outputs with a pure data function; the editor runtime decides when.
//!
//! # Categories
//!
//! - **List**: Nodes that combine and filter string lists (Join, Subtract,
//!   Select Subdomains, Trim Subdomains, URL Extract Domains, URL Extract IPs)
//! - **Discovery**: Nodes that derive hosts from a root domain
//!   (Find Subdomains, Find Wildcard Domains)
//!
//! The discovery nodes produce fixed demo patterns; they perform no
//! network I/O.

pub mod discovery;
pub mod factory;
pub mod list;

// Re-export all nodes for convenience
pub use discovery::*;
pub use factory::{
    builtin_registry_with_config, create_node, create_node_with_config, Node, NodeKind,
};
pub use list::*;
