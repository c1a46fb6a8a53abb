//! Find Subdomains Node
//!
//! Domain -> list of subdomains. A deterministic stand-in for real
//! enumeration so graphs can be wired and previewed offline.

use node_engine::{
    ControlMetadata, DataNode, ExecutionMode, InputControl, NodeCategory, NodeInputs, NodeOutputs,
    PortMetadata, TaskDescriptor, TaskMetadata, DATA_SOCKET,
};
use serde_json::json;

use super::{resolve_root, DomainNodeConfig, PORT_DOMAIN};

/// Host prefixes emitted for every root
const PREFIXES: [&str; 4] = ["www", "api", "dev", "staging"];

/// Find Subdomains Node
///
/// # Inputs
/// - `domain` (optional) - root domain; falls back to the `domain` control
///
/// # Outputs
/// - `list` - `www.`, `api.`, `dev.` and `staging.` prefixed onto the root,
///   or an empty list when the root is empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindSubdomainsNode {
    domain: InputControl,
}

impl FindSubdomainsNode {
    /// Port ID for the subdomain list
    pub const PORT_LIST: &'static str = "list";

    /// Create a node with the default configuration
    pub fn new() -> Self {
        Self::with_config(DomainNodeConfig::default())
    }

    /// Create with configuration
    pub fn with_config(config: DomainNodeConfig) -> Self {
        Self {
            domain: InputControl::text(config.default_domain),
        }
    }

    /// The `domain` control
    pub fn domain(&self) -> &InputControl {
        &self.domain
    }

    /// Set the `domain` control
    pub fn set_domain(&mut self, domain: impl Into<String>) {
        self.domain.set_text(domain);
    }

    /// Derive the subdomain list for a root
    pub fn subdomains(root: &str) -> Vec<String> {
        if root.is_empty() {
            return Vec::new();
        }
        PREFIXES
            .iter()
            .map(|prefix| format!("{}.{}", prefix, root))
            .collect()
    }
}

impl Default for FindSubdomainsNode {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskDescriptor for FindSubdomainsNode {
    fn descriptor() -> TaskMetadata {
        TaskMetadata {
            node_type: "find-subdomains".to_string(),
            category: NodeCategory::Discovery,
            label: "Find Subdomains".to_string(),
            description: "Derives common subdomains of a domain (demo data)".to_string(),
            inputs: vec![PortMetadata::optional(PORT_DOMAIN, "Domain", DATA_SOCKET)],
            outputs: vec![PortMetadata::optional(Self::PORT_LIST, "Subdomains", DATA_SOCKET)],
            controls: vec![ControlMetadata::text(
                PORT_DOMAIN,
                DomainNodeConfig::default().default_domain,
            )],
            execution_mode: ExecutionMode::Reactive,
        }
    }
}

inventory::submit!(node_engine::NodeRegistration {
    descriptor: FindSubdomainsNode::descriptor,
    create: || Box::new(crate::Node::from(FindSubdomainsNode::new())),
});

impl DataNode for FindSubdomainsNode {
    fn metadata(&self) -> TaskMetadata {
        let mut metadata = Self::descriptor();
        metadata.controls = vec![ControlMetadata::text(PORT_DOMAIN, self.domain.initial())];
        metadata
    }

    fn data(&self, inputs: &NodeInputs) -> NodeOutputs {
        let root = resolve_root(inputs, &self.domain);
        let list = Self::subdomains(&root);

        log::debug!("FindSubdomainsNode: {} subdomains for '{}'", list.len(), root);

        NodeOutputs::from([(Self::PORT_LIST.to_string(), json!(list))])
    }

    fn control(&self, key: &str) -> Option<&InputControl> {
        (key == PORT_DOMAIN).then_some(&self.domain)
    }

    fn control_mut(&mut self, key: &str) -> Option<&mut InputControl> {
        (key == PORT_DOMAIN).then_some(&mut self.domain)
    }
}
