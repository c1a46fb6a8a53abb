//! Graph-flow integration for node definitions
//!
//! Nodes are evaluated by an external runtime. When that runtime is
//! graph-flow, each node is wrapped in a [`NodeTask`] which reads its inputs
//! from, and writes its outputs to, the shared Context using well-defined
//! key patterns.
//!
//! # Key Conventions
//!
//! - Inputs: `{task_id}.input.{port_name}` (one upstream value, as produced)
//! - Fan-in: `{task_id}.connections.{port_name}` (array, one entry per connection)
//! - Outputs: `{task_id}.output.{port_name}`
//! - Metadata: `{task_id}.meta.{field}`
//!
//! # Example
//!
//! ```ignore
//! // Feed the Join node's "a" port
//! context.set("join_1.input.a", json!(["x", "y"])).await;
//!
//! // After execution, read the merged list
//! let list: Vec<String> = context.get("join_1.output.list").await.unwrap();
//! ```

pub mod node_task;

pub use node_task::NodeTask;

/// Helper for building context keys
pub struct ContextKeys;

impl ContextKeys {
    /// Build an input key: `{task_id}.input.{port}`
    pub fn input(task_id: &str, port: &str) -> String {
        format!("{}.input.{}", task_id, port)
    }

    /// Build a fan-in key: `{task_id}.connections.{port}`
    pub fn connections(task_id: &str, port: &str) -> String {
        format!("{}.connections.{}", task_id, port)
    }

    /// Build an output key: `{task_id}.output.{port}`
    pub fn output(task_id: &str, port: &str) -> String {
        format!("{}.output.{}", task_id, port)
    }

    /// Build a metadata key: `{task_id}.meta.{field}`
    pub fn meta(task_id: &str, field: &str) -> String {
        format!("{}.meta.{}", task_id, field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_keys() {
        assert_eq!(ContextKeys::input("join_1", "a"), "join_1.input.a");
        assert_eq!(
            ContextKeys::connections("join_1", "a"),
            "join_1.connections.a"
        );
        assert_eq!(ContextKeys::output("join_1", "list"), "join_1.output.list");
        assert_eq!(
            ContextKeys::meta("find_1", "node_type"),
            "find_1.meta.node_type"
        );
    }
}
