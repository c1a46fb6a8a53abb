//! Select Subdomains Node
//!
//! Keeps only the domains that sit under one of a set of selector domains.

use node_engine::{
    first_input, string_list, DataNode, ExecutionMode, NodeCategory, NodeInputs, NodeOutputs,
    PortMetadata, TaskDescriptor, TaskMetadata, DATA_SOCKET,
};
use serde_json::json;

/// Select Subdomains Node
///
/// # Inputs
/// - `domains` - candidate domains
/// - `selectors` - parent domains to select under
///
/// # Outputs
/// - `list` - every candidate equal to a selector or ending in `.{selector}`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectSubdomainsNode;

impl SelectSubdomainsNode {
    /// Port ID for the candidate domains
    pub const PORT_DOMAINS: &'static str = "domains";
    /// Port ID for the selector domains
    pub const PORT_SELECTORS: &'static str = "selectors";
    /// Port ID for the selected domains
    pub const PORT_LIST: &'static str = "list";

    pub fn new() -> Self {
        Self
    }

    /// Domains that equal, or are subdomains of, at least one selector
    pub fn select(domains: &[String], selectors: &[String]) -> Vec<String> {
        domains
            .iter()
            .filter(|domain| selectors.iter().any(|selector| is_under(domain, selector)))
            .cloned()
            .collect()
    }
}

fn is_under(domain: &str, selector: &str) -> bool {
    match domain.strip_suffix(selector) {
        Some("") => true,
        Some(rest) => rest.ends_with('.'),
        None => false,
    }
}

impl TaskDescriptor for SelectSubdomainsNode {
    fn descriptor() -> TaskMetadata {
        TaskMetadata {
            node_type: "select-subdomains".to_string(),
            category: NodeCategory::Transform,
            label: "Select Subdomains".to_string(),
            description: "Keeps the domains that fall under any selector domain".to_string(),
            inputs: vec![
                PortMetadata::optional(Self::PORT_DOMAINS, "Domains", DATA_SOCKET),
                PortMetadata::optional(Self::PORT_SELECTORS, "Selectors", DATA_SOCKET),
            ],
            outputs: vec![PortMetadata::optional(Self::PORT_LIST, "Selected", DATA_SOCKET)],
            controls: vec![],
            execution_mode: ExecutionMode::Reactive,
        }
    }
}

inventory::submit!(node_engine::NodeRegistration {
    descriptor: SelectSubdomainsNode::descriptor,
    create: || Box::new(crate::Node::from(SelectSubdomainsNode::new())),
});

impl DataNode for SelectSubdomainsNode {
    fn metadata(&self) -> TaskMetadata {
        Self::descriptor()
    }

    fn data(&self, inputs: &NodeInputs) -> NodeOutputs {
        let domains = string_list(first_input(inputs, Self::PORT_DOMAINS));
        let selectors = string_list(first_input(inputs, Self::PORT_SELECTORS));
        let selected = Self::select(&domains, &selectors);

        log::debug!(
            "SelectSubdomainsNode: {} of {} domains under {} selectors",
            selected.len(),
            domains.len(),
            selectors.len()
        );

        NodeOutputs::from([(Self::PORT_LIST.to_string(), json!(selected))])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn select(domains: &[&str], selectors: &[&str]) -> Vec<String> {
        SelectSubdomainsNode::select(&strings(domains), &strings(selectors))
    }

    #[test]
    fn test_empty_inputs() {
        assert!(select(&[], &[]).is_empty());
    }

    #[test]
    fn test_no_matches() {
        assert!(select(&["example.com", "test.org"], &["google.com"]).is_empty());
    }

    #[test]
    fn test_exact_matches() {
        assert_eq!(
            select(&["example.com", "google.com", "test.org"], &["google.com"]),
            strings(&["google.com"])
        );
    }

    #[test]
    fn test_subdomain_matches() {
        assert_eq!(
            select(
                &["mail.google.com", "docs.google.com", "example.com"],
                &["google.com"]
            ),
            strings(&["mail.google.com", "docs.google.com"])
        );
    }

    #[test]
    fn test_multiple_selectors() {
        assert_eq!(
            select(
                &["mail.google.com", "example.com", "blog.example.com"],
                &["google.com", "example.com"]
            ),
            strings(&["mail.google.com", "example.com", "blog.example.com"])
        );
    }

    #[test]
    fn test_label_boundary_is_respected() {
        assert!(select(&["notgoogle.com"], &["google.com"]).is_empty());
        // Matching more than one selector still yields the domain once
        assert_eq!(
            select(&["a.b.com"], &["b.com", "a.b.com"]),
            strings(&["a.b.com"])
        );
    }

    #[test]
    fn test_data() {
        let inputs = NodeInputs::from([
            ("domains".to_string(), vec![json!(["www.acme.io", "acme.dev"])]),
            ("selectors".to_string(), vec![json!(["acme.io"])]),
        ]);
        let out = SelectSubdomainsNode::new().data(&inputs);
        assert_eq!(out["list"], json!(["www.acme.io"]));
    }
}
