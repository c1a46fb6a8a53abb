//! URL Extract Domains Node
//!
//! Reduces a list of URLs to the distinct hosts they point at.

use node_engine::{
    first_input, string_list, DataNode, ExecutionMode, NodeCategory, NodeInputs, NodeOutputs,
    PortMetadata, TaskDescriptor, TaskMetadata, DATA_SOCKET,
};
use serde_json::json;

use super::{host_string, unique, url_hosts};

/// URL Extract Domains Node
///
/// # Inputs
/// - `urls` - URLs, with or without an `http(s)://` scheme
///
/// # Outputs
/// - `list` - distinct hosts in first-occurrence order. Ports are dropped,
///   internationalized names come back in Unicode and IP hosts are kept bare.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlExtractDomainsNode;

impl UrlExtractDomainsNode {
    /// Port ID for the URLs
    pub const PORT_URLS: &'static str = "urls";
    /// Port ID for the extracted hosts
    pub const PORT_LIST: &'static str = "list";

    pub fn new() -> Self {
        Self
    }

    /// Distinct hosts of every parsable URL
    pub fn extract(urls: &[String]) -> Vec<String> {
        unique(url_hosts(urls).map(|host| host_string(&host)))
    }
}

impl TaskDescriptor for UrlExtractDomainsNode {
    fn descriptor() -> TaskMetadata {
        TaskMetadata {
            node_type: "url-extract-domains".to_string(),
            category: NodeCategory::Transform,
            label: "URL Extract Domains".to_string(),
            description: "Extracts the distinct hosts from a list of URLs".to_string(),
            inputs: vec![PortMetadata::optional(Self::PORT_URLS, "URLs", DATA_SOCKET)],
            outputs: vec![PortMetadata::optional(Self::PORT_LIST, "Domains", DATA_SOCKET)],
            controls: vec![],
            execution_mode: ExecutionMode::Reactive,
        }
    }
}

inventory::submit!(node_engine::NodeRegistration {
    descriptor: UrlExtractDomainsNode::descriptor,
    create: || Box::new(crate::Node::from(UrlExtractDomainsNode::new())),
});

impl DataNode for UrlExtractDomainsNode {
    fn metadata(&self) -> TaskMetadata {
        Self::descriptor()
    }

    fn data(&self, inputs: &NodeInputs) -> NodeOutputs {
        let urls = string_list(first_input(inputs, Self::PORT_URLS));
        let domains = Self::extract(&urls);

        log::debug!(
            "UrlExtractDomainsNode: {} URLs -> {} domains",
            urls.len(),
            domains.len()
        );

        NodeOutputs::from([(Self::PORT_LIST.to_string(), json!(domains))])
    }
}
