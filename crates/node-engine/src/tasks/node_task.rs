//! Node Task
//!
//! Adapts any [`DataNode`] to graph-flow's `Task` trait so node definitions
//! can run inside a graph-flow workflow without knowing about it.

use async_trait::async_trait;
use graph_flow::{Context, NextAction, Task, TaskResult};

use super::ContextKeys;
use crate::error::NodeEngineError;
use crate::node::DataNode;
use crate::types::NodeInputs;

/// Node Task
///
/// Wraps a node instance under a task id.
///
/// # Inputs (from context)
/// - `{task_id}.input.{port}` - the upstream value for a port with one
///   connection, stored exactly as the upstream output produced it
/// - `{task_id}.connections.{port}` (optional) - array holding one value per
///   upstream connection; takes precedence over the input key
///
/// # Outputs (to context)
/// - `{task_id}.output.{port}` - the value produced on each output port
/// - `{task_id}.meta.node_type` - the wrapped node's type
pub struct NodeTask<N> {
    /// Unique identifier for this task instance
    task_id: String,
    /// The wrapped node
    node: N,
}

impl<N: DataNode> NodeTask<N> {
    /// Wrap a node under the given task id
    pub fn new(task_id: impl Into<String>, node: N) -> Self {
        Self {
            task_id: task_id.into(),
            node,
        }
    }

    /// Get the task ID
    pub fn task_id(&self) -> &str {
        &self.task_id
    }

    /// The wrapped node
    pub fn node(&self) -> &N {
        &self.node
    }

    /// The wrapped node, for control edits between runs
    pub fn node_mut(&mut self) -> &mut N {
        &mut self.node
    }

    /// Unwrap the node
    pub fn into_inner(self) -> N {
        self.node
    }

    /// Gather the values for every declared input port from the context
    async fn collect_inputs(&self, context: &Context) -> NodeInputs {
        let mut inputs = NodeInputs::new();
        for port in self.node.metadata().inputs {
            let connections_key = ContextKeys::connections(&self.task_id, &port.id);
            let values = match context.get::<serde_json::Value>(&connections_key).await {
                Some(serde_json::Value::Array(values)) => values,
                Some(single) => vec![single],
                None => {
                    let input_key = ContextKeys::input(&self.task_id, &port.id);
                    match context.get::<serde_json::Value>(&input_key).await {
                        Some(value) => vec![value],
                        None => continue,
                    }
                }
            };
            inputs.insert(port.id, values);
        }
        inputs
    }
}

#[async_trait]
impl<N: DataNode + 'static> Task for NodeTask<N> {
    fn id(&self) -> &str {
        &self.task_id
    }

    async fn run(&self, context: Context) -> graph_flow::Result<TaskResult> {
        let inputs = self.collect_inputs(&context).await;
        let node_type = self.node.metadata().node_type;

        let outputs = self.node.data(&inputs);

        for (port, value) in &outputs {
            context
                .set(&ContextKeys::output(&self.task_id, port), value.clone())
                .await;
        }
        context
            .set(&ContextKeys::meta(&self.task_id, "node_type"), node_type.clone())
            .await;

        log::debug!(
            "NodeTask {} ({}): {} inputs -> {} outputs",
            self.task_id,
            node_type,
            inputs.len(),
            outputs.len()
        );

        let response = serde_json::to_string(&outputs).map_err(NodeEngineError::from)?;
        Ok(TaskResult::new(Some(response), NextAction::Continue))
    }
}
