//! Discovery nodes
//!
//! Nodes that derive host names from a root domain. The root comes from the
//! `domain` input when a string is connected, otherwise from the node's
//! `domain` text control.
//!
//! The derived lists are fixed demo patterns: no DNS lookups are made.

pub mod find_subdomains;
pub mod find_wildcard_domains;

pub use find_subdomains::FindSubdomainsNode;
pub use find_wildcard_domains::FindWildcardDomainsNode;

use node_engine::{first_input, InputControl, NodeInputs};
use serde::{Deserialize, Serialize};

/// Port and control ID shared by discovery nodes
pub const PORT_DOMAIN: &str = "domain";

/// Configuration for discovery nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainNodeConfig {
    /// Initial value of the `domain` control
    pub default_domain: String,
}

impl Default for DomainNodeConfig {
    fn default() -> Self {
        Self {
            default_domain: "example.com".to_string(),
        }
    }
}

/// Resolve the root domain for a discovery node
///
/// A connected string wins over the control. The control value is trimmed;
/// a connected string is used as-is. One leading `http://` or `https://` is
/// removed from either.
pub fn resolve_root(inputs: &NodeInputs, control: &InputControl) -> String {
    let raw = match first_input(inputs, PORT_DOMAIN).and_then(|v| v.as_str()) {
        Some(incoming) => incoming,
        None => control.value().trim(),
    };
    strip_scheme(raw).to_string()
}

/// Remove one leading `http://` or `https://`
pub fn strip_scheme(domain: &str) -> &str {
    domain
        .strip_prefix("https://")
        .or_else(|| domain.strip_prefix("http://"))
        .unwrap_or(domain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn with_domain(value: serde_json::Value) -> NodeInputs {
        NodeInputs::from([(PORT_DOMAIN.to_string(), vec![value])])
    }

    #[test]
    fn test_strip_scheme() {
        assert_eq!(strip_scheme("https://example.com"), "example.com");
        assert_eq!(strip_scheme("http://example.com"), "example.com");
        assert_eq!(strip_scheme("example.com"), "example.com");
        assert_eq!(strip_scheme("https://"), "");
        // Only one prefix, and only at the start
        assert_eq!(strip_scheme("https://http://a.io"), "http://a.io");
        assert_eq!(strip_scheme("ftp://a.io"), "ftp://a.io");
        assert_eq!(strip_scheme("HTTPS://a.io"), "HTTPS://a.io");
    }

    #[test]
    fn test_incoming_string_wins() {
        let control = InputControl::text("fallback.org");
        let root = resolve_root(&with_domain(json!("https://target.io")), &control);
        assert_eq!(root, "target.io");
    }

    #[test]
    fn test_incoming_string_not_trimmed() {
        let control = InputControl::text("fallback.org");
        let root = resolve_root(&with_domain(json!(" target.io")), &control);
        assert_eq!(root, " target.io");
    }

    #[test]
    fn test_control_fallback_is_trimmed() {
        let control = InputControl::text("  http://fallback.org  ");
        assert_eq!(resolve_root(&NodeInputs::new(), &control), "fallback.org");
    }

    #[test]
    fn test_non_string_incoming_falls_back() {
        let control = InputControl::text("fallback.org");
        let root = resolve_root(&with_domain(json!(["a.io"])), &control);
        assert_eq!(root, "fallback.org");
    }

    #[test]
    fn test_default_config() {
        let config = DomainNodeConfig::default();
        assert_eq!(config.default_domain, "example.com");

        let parsed: DomainNodeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, config);
    }
}
