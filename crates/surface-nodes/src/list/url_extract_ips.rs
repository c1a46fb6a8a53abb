//! URL Extract IPs Node
//!
//! Reduces a list of URLs to the distinct IP addresses used as hosts.

use node_engine::{
    first_input, string_list, DataNode, ExecutionMode, NodeCategory, NodeInputs, NodeOutputs,
    PortMetadata, TaskDescriptor, TaskMetadata, DATA_SOCKET,
};
use serde_json::json;
use url::Host;

use super::{host_string, unique, url_hosts};

/// URL Extract IPs Node
///
/// # Inputs
/// - `urls` - URLs, with or without an `http(s)://` scheme
///
/// # Outputs
/// - `list` - distinct IPv4 and IPv6 hosts (no brackets), first occurrence first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlExtractIpsNode;

impl UrlExtractIpsNode {
    /// Port ID for the URLs
    pub const PORT_URLS: &'static str = "urls";
    /// Port ID for the extracted addresses
    pub const PORT_LIST: &'static str = "list";

    pub fn new() -> Self {
        Self
    }

    /// Distinct IP hosts of every parsable URL
    pub fn extract(urls: &[String]) -> Vec<String> {
        unique(
            url_hosts(urls)
                .filter(|host| !matches!(host, Host::Domain(_)))
                .map(|host| host_string(&host)),
        )
    }
}

impl TaskDescriptor for UrlExtractIpsNode {
    fn descriptor() -> TaskMetadata {
        TaskMetadata {
            node_type: "url-extract-ips".to_string(),
            category: NodeCategory::Transform,
            label: "URL Extract IPs".to_string(),
            description: "Extracts the distinct IP address hosts from a list of URLs"
                .to_string(),
            inputs: vec![PortMetadata::optional(Self::PORT_URLS, "URLs", DATA_SOCKET)],
            outputs: vec![PortMetadata::optional(Self::PORT_LIST, "IPs", DATA_SOCKET)],
            controls: vec![],
            execution_mode: ExecutionMode::Reactive,
        }
    }
}

inventory::submit!(node_engine::NodeRegistration {
    descriptor: UrlExtractIpsNode::descriptor,
    create: || Box::new(crate::Node::from(UrlExtractIpsNode::new())),
});

impl DataNode for UrlExtractIpsNode {
    fn metadata(&self) -> TaskMetadata {
        Self::descriptor()
    }

    fn data(&self, inputs: &NodeInputs) -> NodeOutputs {
        let urls = string_list(first_input(inputs, Self::PORT_URLS));
        let ips = Self::extract(&urls);

        log::debug!("UrlExtractIpsNode: {} URLs -> {} IPs", urls.len(), ips.len());

        NodeOutputs::from([(Self::PORT_LIST.to_string(), json!(ips))])
    }
}
