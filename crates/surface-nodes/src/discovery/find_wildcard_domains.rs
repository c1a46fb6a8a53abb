//! Find Wildcard Domains Node
//!
//! Domain -> list of wildcard patterns (demo stub).

use node_engine::{
    ControlMetadata, DataNode, ExecutionMode, InputControl, NodeCategory, NodeInputs, NodeOutputs,
    PortMetadata, TaskDescriptor, TaskMetadata, DATA_SOCKET,
};
use serde_json::json;

use super::{resolve_root, DomainNodeConfig, PORT_DOMAIN};

/// Label prefixes placed between `*.` and the root
const PREFIXES: [&str; 3] = ["", "dev.", "staging."];

/// Find Wildcard Domains Node
///
/// # Inputs
/// - `domain` (optional) - root domain; falls back to the `domain` control
///
/// # Outputs
/// - `list` - `*.R`, `*.dev.R` and `*.staging.R` for root `R`, or an empty
///   list when the root is empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindWildcardDomainsNode {
    domain: InputControl,
}

impl FindWildcardDomainsNode {
    /// Port ID for the wildcard list
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

    /// Derive the wildcard patterns for a root
    pub fn wildcards(root: &str) -> Vec<String> {
        if root.is_empty() {
            return Vec::new();
        }
        PREFIXES
            .iter()
            .map(|prefix| format!("*.{}{}", prefix, root))
            .collect()
    }
}

impl Default for FindWildcardDomainsNode {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskDescriptor for FindWildcardDomainsNode {
    fn descriptor() -> TaskMetadata {
        TaskMetadata {
            node_type: "find-wildcard-domains".to_string(),
            category: NodeCategory::Discovery,
            label: "Find Wildcard Domains".to_string(),
            description: "Derives wildcard patterns for a domain (demo data)".to_string(),
            inputs: vec![PortMetadata::optional(PORT_DOMAIN, "Domain", DATA_SOCKET)],
            outputs: vec![PortMetadata::optional(Self::PORT_LIST, "Wildcards", DATA_SOCKET)],
            controls: vec![ControlMetadata::text(
                PORT_DOMAIN,
                DomainNodeConfig::default().default_domain,
            )],
            execution_mode: ExecutionMode::Reactive,
        }
    }
}

inventory::submit!(node_engine::NodeRegistration {
    descriptor: FindWildcardDomainsNode::descriptor,
    create: || Box::new(crate::Node::from(FindWildcardDomainsNode::new())),
});

impl DataNode for FindWildcardDomainsNode {
    fn metadata(&self) -> TaskMetadata {
        let mut metadata = Self::descriptor();
        metadata.controls = vec![ControlMetadata::text(PORT_DOMAIN, self.domain.initial())];
        metadata
    }

    fn data(&self, inputs: &NodeInputs) -> NodeOutputs {
        let root = resolve_root(inputs, &self.domain);
        let list = Self::wildcards(&root);

        log::debug!("FindWildcardDomainsNode: {} patterns for '{}'", list.len(), root);

        NodeOutputs::from([(Self::PORT_LIST.to_string(), json!(list))])
    }

    fn control(&self, key: &str) -> Option<&InputControl> {
        (key == PORT_DOMAIN).then_some(&self.domain)
    }

    fn control_mut(&mut self, key: &str) -> Option<&mut InputControl> {
        (key == PORT_DOMAIN).then_some(&mut self.domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor() {
        let meta = FindWildcardDomainsNode::descriptor();
        assert_eq!(meta.node_type, "find-wildcard-domains");
        assert_eq!(meta.label, "Find Wildcard Domains");
        assert_eq!(meta.outputs[0].id, "list");
        assert_eq!(meta.outputs[0].label, "Wildcards");
        assert_eq!(meta.controls.len(), 1);
    }

    #[test]
    fn test_incoming_http_domain() {
        let node = FindWildcardDomainsNode::new();
        let inputs = NodeInputs::from([("domain".to_string(), vec![json!("http://acme.io")])]);

        let out = node.data(&inputs);
        assert_eq!(
            out["list"],
            json!(["*.acme.io", "*.dev.acme.io", "*.staging.acme.io"])
        );
    }

    #[test]
    fn test_control_fallback() {
        let mut node = FindWildcardDomainsNode::new();
        node.set_domain(" target.net ");

        let out = node.data(&NodeInputs::new());
        assert_eq!(
            out["list"],
            json!(["*.target.net", "*.dev.target.net", "*.staging.target.net"])
        );
    }

    #[test]
    fn test_empty_root_yields_empty_list() {
        let mut node = FindWildcardDomainsNode::new();
        node.set_domain("");
        assert_eq!(node.data(&NodeInputs::new())["list"], json!([]));
    }

    #[test]
    fn test_reset_restores_initial() {
        let mut node = FindWildcardDomainsNode::new();
        node.set_domain("other.org");
        node.control_mut("domain").unwrap().reset();
        assert_eq!(node.domain().value(), "example.com");
    }
}
