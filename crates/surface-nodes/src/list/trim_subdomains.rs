//! Trim Subdomains Node
//!
//! Collapses a domain list to its top-most entries: a domain is dropped when
//! one of its parent domains is also in the list. Registrable domains are
//! resolved against the public suffix list so `example.co.uk` counts as a
//! root while `co.uk` does not.

use std::collections::HashSet;

use node_engine::{
    first_input, string_list, DataNode, ExecutionMode, NodeCategory, NodeInputs, NodeOutputs,
    PortMetadata, TaskDescriptor, TaskMetadata, DATA_SOCKET,
};
use serde_json::json;
use thiserror::Error;

/// Reasons a domain cannot be trimmed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrimSubdomainsError {
    /// The domain has an empty label (`a..b`, a leading or trailing dot)
    #[error("Domain '{0}' has an empty label")]
    EmptyLabel(String),

    /// The domain has no registrable part (it is a public suffix itself)
    #[error("Cannot derive a registrable domain for '{0}'")]
    PublicSuffix(String),
}

/// Trim Subdomains Node
///
/// # Inputs
/// - `domains` - domains to collapse
///
/// # Outputs
/// - `list` - lowercased domains with no parent in the input, in input order.
///   Empty if any domain is invalid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrimSubdomainsNode;

impl TrimSubdomainsNode {
    /// Port ID for the domains to trim
    pub const PORT_DOMAINS: &'static str = "domains";
    /// Port ID for the trimmed list
    pub const PORT_LIST: &'static str = "list";

    pub fn new() -> Self {
        Self
    }
}

/// Registrable domain (eTLD+1) of an already lowercased domain
fn registrable_domain(domain: &str) -> Result<&str, TrimSubdomainsError> {
    if domain.split('.').any(str::is_empty) {
        return Err(TrimSubdomainsError::EmptyLabel(domain.to_string()));
    }
    psl::domain_str(domain).ok_or_else(|| TrimSubdomainsError::PublicSuffix(domain.to_string()))
}

/// Drop every domain whose parent domain is also listed
///
/// Comparison is case-insensitive and the output is lowercased. Fails on
/// the first domain without a registrable part.
pub fn trim_subdomains(domains: &[String]) -> Result<Vec<String>, TrimSubdomainsError> {
    let lowered: Vec<String> = domains.iter().map(|d| d.to_lowercase()).collect();
    for domain in &lowered {
        registrable_domain(domain)?;
    }

    let listed: HashSet<&str> = lowered.iter().map(String::as_str).collect();
    let trimmed = lowered
        .iter()
        .filter(|domain| !has_listed_parent(domain, &listed))
        .cloned()
        .collect();
    Ok(trimmed)
}

fn has_listed_parent(domain: &str, listed: &HashSet<&str>) -> bool {
    domain
        .match_indices('.')
        .any(|(dot, _)| listed.contains(&domain[dot + 1..]))
}

impl TaskDescriptor for TrimSubdomainsNode {
    fn descriptor() -> TaskMetadata {
        TaskMetadata {
            node_type: "trim-subdomains".to_string(),
            category: NodeCategory::Transform,
            label: "Trim Subdomains".to_string(),
            description: "Drops domains whose parent domain is also listed".to_string(),
            inputs: vec![PortMetadata::optional(
                Self::PORT_DOMAINS,
                "Domains",
                DATA_SOCKET,
            )],
            outputs: vec![PortMetadata::optional(Self::PORT_LIST, "Trimmed", DATA_SOCKET)],
            controls: vec![],
            execution_mode: ExecutionMode::Reactive,
        }
    }
}

inventory::submit!(node_engine::NodeRegistration {
    descriptor: TrimSubdomainsNode::descriptor,
    create: || Box::new(crate::Node::from(TrimSubdomainsNode::new())),
});

impl DataNode for TrimSubdomainsNode {
    fn metadata(&self) -> TaskMetadata {
        Self::descriptor()
    }

    fn data(&self, inputs: &NodeInputs) -> NodeOutputs {
        let domains = string_list(first_input(inputs, Self::PORT_DOMAINS));
        let trimmed = trim_subdomains(&domains).unwrap_or_else(|e| {
            log::warn!("TrimSubdomainsNode: {}", e);
            Vec::new()
        });

        log::debug!(
            "TrimSubdomainsNode: {} domains trimmed to {}",
            domains.len(),
            trimmed.len()
        );

        NodeOutputs::from([(Self::PORT_LIST.to_string(), json!(trimmed))])
    }
}
