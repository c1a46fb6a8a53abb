//! Node factory used by the editor palette
//!
//! Maps a kind string to a freshly constructed node. [`Node`] is the closed
//! set of node kinds this crate provides; hosts that want an open set can use
//! `NodeRegistry::with_builtins` (default configuration) or
//! [`builtin_registry_with_config`] and work with boxed nodes instead. Both
//! box the same [`Node`] values.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use node_engine::{
    DataNode, InputControl, NodeEngineError, NodeInputs, NodeOutputs, NodeRegistry, Result,
    TaskDescriptor, TaskMetadata,
};
use serde::{Deserialize, Serialize};

use crate::discovery::{DomainNodeConfig, FindSubdomainsNode, FindWildcardDomainsNode};
use crate::list::{
    JoinNode, SelectSubdomainsNode, SubtractNode, TrimSubdomainsNode, UrlExtractDomainsNode,
    UrlExtractIpsNode,
};

/// The kinds of node a palette can create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Join,
    FindSubdomains,
    FindWildcardDomains,
    Subtract,
    SelectSubdomains,
    TrimSubdomains,
    UrlExtractDomains,
    UrlExtractIps,
}

impl NodeKind {
    /// Every kind, in palette order
    pub const ALL: [NodeKind; 8] = [
        NodeKind::Join,
        NodeKind::FindSubdomains,
        NodeKind::FindWildcardDomains,
        NodeKind::Subtract,
        NodeKind::SelectSubdomains,
        NodeKind::TrimSubdomains,
        NodeKind::UrlExtractDomains,
        NodeKind::UrlExtractIps,
    ];

    /// The kind string used by the palette and the registry
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Join => "join",
            NodeKind::FindSubdomains => "find-subdomains",
            NodeKind::FindWildcardDomains => "find-wildcard-domains",
            NodeKind::Subtract => "subtract",
            NodeKind::SelectSubdomains => "select-subdomains",
            NodeKind::TrimSubdomains => "trim-subdomains",
            NodeKind::UrlExtractDomains => "url-extract-domains",
            NodeKind::UrlExtractIps => "url-extract-ips",
        }
    }

    /// Static metadata for this kind
    pub fn descriptor(&self) -> TaskMetadata {
        match self {
            NodeKind::Join => JoinNode::descriptor(),
            NodeKind::FindSubdomains => FindSubdomainsNode::descriptor(),
            NodeKind::FindWildcardDomains => FindWildcardDomainsNode::descriptor(),
            NodeKind::Subtract => SubtractNode::descriptor(),
            NodeKind::SelectSubdomains => SelectSubdomainsNode::descriptor(),
            NodeKind::TrimSubdomains => TrimSubdomainsNode::descriptor(),
            NodeKind::UrlExtractDomains => UrlExtractDomainsNode::descriptor(),
            NodeKind::UrlExtractIps => UrlExtractIpsNode::descriptor(),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = NodeEngineError;

    fn from_str(s: &str) -> Result<Self> {
        NodeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| NodeEngineError::UnknownNodeType(s.to_string()))
    }
}

/// A node instance of one of the built-in kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Join(JoinNode),
    FindSubdomains(FindSubdomainsNode),
    FindWildcardDomains(FindWildcardDomainsNode),
    Subtract(SubtractNode),
    SelectSubdomains(SelectSubdomainsNode),
    TrimSubdomains(TrimSubdomainsNode),
    UrlExtractDomains(UrlExtractDomainsNode),
    UrlExtractIps(UrlExtractIpsNode),
}

impl Node {
    /// Construct a node of the given kind with default configuration
    pub fn new(kind: NodeKind) -> Self {
        Self::with_config(kind, &DomainNodeConfig::default())
    }

    /// Construct a node, seeding discovery controls from `config`
    pub fn with_config(kind: NodeKind, config: &DomainNodeConfig) -> Self {
        match kind {
            NodeKind::Join => Node::Join(JoinNode::new()),
            NodeKind::FindSubdomains => {
                Node::FindSubdomains(FindSubdomainsNode::with_config(config.clone()))
            }
            NodeKind::FindWildcardDomains => {
                Node::FindWildcardDomains(FindWildcardDomainsNode::with_config(config.clone()))
            }
            NodeKind::Subtract => Node::Subtract(SubtractNode::new()),
            NodeKind::SelectSubdomains => Node::SelectSubdomains(SelectSubdomainsNode::new()),
            NodeKind::TrimSubdomains => Node::TrimSubdomains(TrimSubdomainsNode::new()),
            NodeKind::UrlExtractDomains => Node::UrlExtractDomains(UrlExtractDomainsNode::new()),
            NodeKind::UrlExtractIps => Node::UrlExtractIps(UrlExtractIpsNode::new()),
        }
    }

    /// The kind of this node
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Join(_) => NodeKind::Join,
            Node::FindSubdomains(_) => NodeKind::FindSubdomains,
            Node::FindWildcardDomains(_) => NodeKind::FindWildcardDomains,
            Node::Subtract(_) => NodeKind::Subtract,
            Node::SelectSubdomains(_) => NodeKind::SelectSubdomains,
            Node::TrimSubdomains(_) => NodeKind::TrimSubdomains,
            Node::UrlExtractDomains(_) => NodeKind::UrlExtractDomains,
            Node::UrlExtractIps(_) => NodeKind::UrlExtractIps,
        }
    }

    fn as_data_node(&self) -> &dyn DataNode {
        match self {
            Node::Join(node) => node,
            Node::FindSubdomains(node) => node,
            Node::FindWildcardDomains(node) => node,
            Node::Subtract(node) => node,
            Node::SelectSubdomains(node) => node,
            Node::TrimSubdomains(node) => node,
            Node::UrlExtractDomains(node) => node,
            Node::UrlExtractIps(node) => node,
        }
    }

    fn as_data_node_mut(&mut self) -> &mut dyn DataNode {
        match self {
            Node::Join(node) => node,
            Node::FindSubdomains(node) => node,
            Node::FindWildcardDomains(node) => node,
            Node::Subtract(node) => node,
            Node::SelectSubdomains(node) => node,
            Node::TrimSubdomains(node) => node,
            Node::UrlExtractDomains(node) => node,
            Node::UrlExtractIps(node) => node,
        }
    }
}

impl DataNode for Node {
    fn metadata(&self) -> TaskMetadata {
        self.as_data_node().metadata()
    }

    fn data(&self, inputs: &NodeInputs) -> NodeOutputs {
        self.as_data_node().data(inputs)
    }

    fn control(&self, key: &str) -> Option<&InputControl> {
        self.as_data_node().control(key)
    }

    fn control_mut(&mut self, key: &str) -> Option<&mut InputControl> {
        self.as_data_node_mut().control_mut(key)
    }
}

impl From<JoinNode> for Node {
    fn from(node: JoinNode) -> Self {
        Node::Join(node)
    }
}

impl From<FindSubdomainsNode> for Node {
    fn from(node: FindSubdomainsNode) -> Self {
        Node::FindSubdomains(node)
    }
}

impl From<FindWildcardDomainsNode> for Node {
    fn from(node: FindWildcardDomainsNode) -> Self {
        Node::FindWildcardDomains(node)
    }
}

impl From<SubtractNode> for Node {
    fn from(node: SubtractNode) -> Self {
        Node::Subtract(node)
    }
}

impl From<SelectSubdomainsNode> for Node {
    fn from(node: SelectSubdomainsNode) -> Self {
        Node::SelectSubdomains(node)
    }
}

impl From<TrimSubdomainsNode> for Node {
    fn from(node: TrimSubdomainsNode) -> Self {
        Node::TrimSubdomains(node)
    }
}

impl From<UrlExtractDomainsNode> for Node {
    fn from(node: UrlExtractDomainsNode) -> Self {
        Node::UrlExtractDomains(node)
    }
}

impl From<UrlExtractIpsNode> for Node {
    fn from(node: UrlExtractIpsNode) -> Self {
        Node::UrlExtractIps(node)
    }
}

/// Create a node for a palette kind string
///
/// Fails with [`NodeEngineError::UnknownNodeType`] for any other string.
pub fn create_node(kind: &str) -> Result<Node> {
    create_node_with_config(kind, &DomainNodeConfig::default())
}

/// Create a node for a palette kind string, seeding discovery controls
pub fn create_node_with_config(kind: &str, config: &DomainNodeConfig) -> Result<Node> {
    let kind = kind.parse::<NodeKind>().inspect_err(|_| {
        log::warn!("Palette requested unknown node kind '{}'", kind);
    })?;
    log::debug!("Creating {} node", kind);
    Ok(Node::with_config(kind, config))
}

/// A registry holding the built-in kinds, seeding discovery controls from `config`
///
/// Starts from `NodeRegistry::with_builtins` and replaces the factory of
/// every kind so discovery nodes pick up `config`.
pub fn builtin_registry_with_config(config: DomainNodeConfig) -> NodeRegistry {
    let mut registry = NodeRegistry::with_builtins();
    for kind in NodeKind::ALL {
        let config = config.clone();
        registry.register(
            kind.descriptor(),
            Arc::new(move || Box::new(Node::with_config(kind, &config)) as Box<dyn DataNode>),
        );
    }
    registry
}
