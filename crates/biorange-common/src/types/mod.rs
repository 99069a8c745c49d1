//! Network dataset records shared across biorange
//!
//! All records are built fresh per invocation and never mutated afterwards.
//! Field names serialize to the column headers of the flat output files.

use serde::{Deserialize, Serialize};

/// An undirected relationship between two nodes.
///
/// Uniqueness is not enforced; duplicate edges are expected and carried
/// through the pipeline untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub node1: String,
    pub node2: String,
}

impl Edge {
    pub fn new(node1: impl Into<String>, node2: impl Into<String>) -> Self {
        Self {
            node1: node1.into(),
            node2: node2.into(),
        }
    }

    /// The same edge with its endpoints swapped
    pub fn reversed(&self) -> Self {
        Self {
            node1: self.node2.clone(),
            node2: self.node1.clone(),
        }
    }
}

/// The role a node plays in the merged network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Pathway,
    Target,
    Compound,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Pathway => "pathway",
            NodeKind::Target => "target",
            NodeKind::Compound => "compound",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the node-type table.
///
/// A node may legitimately appear under more than one kind; only exact
/// `(node, kind)` duplicates are removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeType {
    pub node: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
}

impl NodeType {
    pub fn new(node: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            node: node.into(),
            kind,
        }
    }
}

/// A raw protein-protein interaction as reported by the interaction service
///
/// Written to disk with the `node1,node2` headers of the edge tables.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InteractionRow {
    #[serde(rename = "node1")]
    pub preferred_name_a: String,
    #[serde(rename = "node2")]
    pub preferred_name_b: String,
}

impl InteractionRow {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            preferred_name_a: a.into(),
            preferred_name_b: b.into(),
        }
    }

    pub fn to_edge(&self) -> Edge {
        Edge::new(self.preferred_name_a.clone(), self.preferred_name_b.clone())
    }
}

/// Graph degree of a single node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeEntry {
    pub node: String,
    pub degree: usize,
}

impl DegreeEntry {
    pub fn new(node: impl Into<String>, degree: usize) -> Self {
        Self {
            node: node.into(),
            degree,
        }
    }
}

/// A single gene-to-pathway association after semicolon explosion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathwayGene {
    pub gene_name: String,
    pub term: String,
}

impl PathwayGene {
    pub fn new(gene_name: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            gene_name: gene_name.into(),
            term: term.into(),
        }
    }
}

/// A single gene-to-compound association after semicolon explosion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundGene {
    pub gene_name: String,
    pub compound_name: String,
}

impl CompoundGene {
    pub fn new(gene_name: impl Into<String>, compound_name: impl Into<String>) -> Self {
        Self {
            gene_name: gene_name.into(),
            compound_name: compound_name.into(),
        }
    }
}
