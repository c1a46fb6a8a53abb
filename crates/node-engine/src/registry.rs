//! Node type registry for dynamic node resolution
//!
//! This module provides a registry that maps node type strings to metadata
//! and factories. Palettes list the metadata; the canvas asks the registry
//! for a fresh node when the user drops one.
//!
//! # Usage
//!
//! ```ignore
//! use node_engine::NodeRegistry;
//!
//! let registry = NodeRegistry::with_builtins();
//! let node = registry.create_node("join")?;
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use crate::descriptor::TaskMetadata;
use crate::error::{NodeEngineError, Result};
use crate::node::DataNode;
use crate::types::NodeCategory;

/// Factory for constructing node instances of one type
pub trait NodeFactory: Send + Sync {
    fn create_node(&self) -> Box<dyn DataNode>;
}

impl<F> NodeFactory for F
where
    F: Fn() -> Box<dyn DataNode> + Send + Sync,
{
    fn create_node(&self) -> Box<dyn DataNode> {
        self()
    }
}

/// Link-time registration of a node type.
///
/// Node crates submit one of these per node type so that
/// [`NodeRegistry::with_builtins`] can discover them without a central list.
///
/// # Example
///
/// ```ignore
/// inventory::submit!(node_engine::NodeRegistration {
///     descriptor: JoinNode::descriptor,
///     create: || Box::new(JoinNode::new()),
/// });
/// ```
pub struct NodeRegistration {
    /// Static metadata for the node type
    pub descriptor: fn() -> TaskMetadata,
    /// Creates a node with its default configuration
    pub create: fn() -> Box<dyn DataNode>,
}

inventory::collect!(NodeRegistration);

/// A registration entry combining metadata with its factory
struct RegistryEntry {
    metadata: TaskMetadata,
    factory: Arc<dyn NodeFactory>,
}

/// Registry of node types with their metadata and factories
///
/// # Composability
///
/// Registries can be composed by merging:
/// ```ignore
/// let mut registry = NodeRegistry::with_builtins();
/// registry.merge(plugin_registry); // Add plugin nodes
/// ```
pub struct NodeRegistry {
    entries: HashMap<String, RegistryEntry>,
}

impl NodeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Create a registry holding every node type submitted via `inventory`
    ///
    /// Each factory is the registration's `create`, so nodes come out with
    /// their default configuration. Re-register a node type to change that.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for registration in inventory::iter::<NodeRegistration> {
            let create = registration.create;
            registry.register((registration.descriptor)(), Arc::new(create));
        }
        log::debug!("Registered {} built-in node types", registry.entries.len());
        registry
    }

    /// Register a node type with metadata and a factory
    ///
    /// Replaces any earlier entry for the same node type.
    pub fn register(&mut self, metadata: TaskMetadata, factory: Arc<dyn NodeFactory>) {
        self.entries.insert(
            metadata.node_type.clone(),
            RegistryEntry { metadata, factory },
        );
    }

    /// Get metadata for a node type
    pub fn get_metadata(&self, node_type: &str) -> Option<&TaskMetadata> {
        self.entries.get(node_type).map(|e| &e.metadata)
    }

    /// Get all registered metadata, ordered by node type
    pub fn all_metadata(&self) -> Vec<&TaskMetadata> {
        let mut all: Vec<&TaskMetadata> = self.entries.values().map(|e| &e.metadata).collect();
        all.sort_by(|a, b| a.node_type.cmp(&b.node_type));
        all
    }

    /// Get metadata grouped by category
    pub fn metadata_by_category(&self) -> HashMap<NodeCategory, Vec<&TaskMetadata>> {
        let mut grouped: HashMap<NodeCategory, Vec<&TaskMetadata>> = HashMap::new();
        for metadata in self.all_metadata() {
            grouped.entry(metadata.category).or_default().push(metadata);
        }
        grouped
    }

    /// Construct a fresh node of the given type
    pub fn create_node(&self, node_type: &str) -> Result<Box<dyn DataNode>> {
        match self.entries.get(node_type) {
            Some(entry) => Ok(entry.factory.create_node()),
            None => {
                log::warn!("No factory registered for node type '{}'", node_type);
                Err(NodeEngineError::UnknownNodeType(node_type.to_string()))
            }
        }
    }

    /// Check if a node type is registered
    pub fn has_node_type(&self, node_type: &str) -> bool {
        self.entries.contains_key(node_type)
    }

    /// List all registered node type strings, sorted
    pub fn node_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.entries.keys().map(|s| s.as_str()).collect();
        types.sort_unstable();
        types
    }

    /// Merge another registry into this one
    ///
    /// Entries from `other` override entries in `self` if they share the same node_type.
    pub fn merge(&mut self, other: NodeRegistry) {
        self.entries.extend(other.entries);
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::PortMetadata;
    use crate::socket::DATA_SOCKET;
    use crate::types::{ExecutionMode, NodeInputs, NodeOutputs};

    fn test_metadata(node_type: &str) -> TaskMetadata {
        TaskMetadata {
            node_type: node_type.to_string(),
            category: NodeCategory::Transform,
            label: format!("Test {}", node_type),
            description: "Test node".to_string(),
            inputs: vec![PortMetadata::optional("input", "Input", DATA_SOCKET)],
            outputs: vec![PortMetadata::optional("output", "Output", DATA_SOCKET)],
            controls: vec![],
            execution_mode: ExecutionMode::Reactive,
        }
    }

    struct EmptyNode;

    impl DataNode for EmptyNode {
        fn metadata(&self) -> TaskMetadata {
            test_metadata("empty")
        }

        fn data(&self, _inputs: &NodeInputs) -> NodeOutputs {
            NodeOutputs::new()
        }
    }

    fn register_empty(registry: &mut NodeRegistry, metadata: TaskMetadata) {
        registry.register(
            metadata,
            Arc::new(|| Box::new(EmptyNode) as Box<dyn DataNode>),
        );
    }

    #[test]
    fn test_register_and_lookup_metadata() {
        let mut registry = NodeRegistry::new();
        register_empty(&mut registry, test_metadata("test-node"));

        assert!(registry.has_node_type("test-node"));
        assert!(!registry.has_node_type("unknown"));

        let meta = registry.get_metadata("test-node").unwrap();
        assert_eq!(meta.label, "Test test-node");
    }

    #[test]
    fn test_all_metadata_sorted() {
        let mut registry = NodeRegistry::new();
        register_empty(&mut registry, test_metadata("node-b"));
        register_empty(&mut registry, test_metadata("node-a"));

        let all = registry.all_metadata();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].node_type, "node-a");
        assert_eq!(registry.node_types(), vec!["node-a", "node-b"]);
    }

    #[test]
    fn test_merge_registries() {
        let mut registry1 = NodeRegistry::new();
        register_empty(&mut registry1, test_metadata("node-a"));

        let mut registry2 = NodeRegistry::new();
        register_empty(&mut registry2, test_metadata("node-b"));
        register_empty(&mut registry2, test_metadata("node-c"));

        registry1.merge(registry2);
        assert_eq!(registry1.all_metadata().len(), 3);
    }

    #[test]
    fn test_merge_override() {
        let mut registry1 = NodeRegistry::new();
        let mut meta1 = test_metadata("node-a");
        meta1.label = "Original".to_string();
        register_empty(&mut registry1, meta1);

        let mut registry2 = NodeRegistry::new();
        let mut meta2 = test_metadata("node-a");
        meta2.label = "Override".to_string();
        register_empty(&mut registry2, meta2);

        registry1.merge(registry2);
        assert_eq!(registry1.get_metadata("node-a").unwrap().label, "Override");
    }

    #[test]
    fn test_create_node_with_closure_factory() {
        let mut registry = NodeRegistry::new();
        register_empty(&mut registry, test_metadata("empty"));

        let node = registry.create_node("empty").unwrap();
        assert_eq!(node.metadata().node_type, "empty");
        assert!(node.data(&NodeInputs::new()).is_empty());
    }

    #[test]
    fn test_create_unknown_node() {
        let registry = NodeRegistry::new();
        let err = registry.create_node("unknown").err().unwrap();
        assert!(matches!(err, NodeEngineError::UnknownNodeType(ref t) if t == "unknown"));
    }

    #[test]
    fn test_metadata_by_category() {
        let mut registry = NodeRegistry::new();

        let mut meta_discovery = test_metadata("find-subdomains");
        meta_discovery.category = NodeCategory::Discovery;
        register_empty(&mut registry, meta_discovery);
        register_empty(&mut registry, test_metadata("join"));

        let grouped = registry.metadata_by_category();
        assert_eq!(grouped.get(&NodeCategory::Discovery).unwrap().len(), 1);
        assert_eq!(grouped.get(&NodeCategory::Transform).unwrap().len(), 1);
    }
}
