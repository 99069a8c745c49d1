//! Biorange Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, logging, and error handling for the biorange workspace.
//!
//! # Overview
//!
//! - **Error Handling**: [`BiorangeError`] and the [`Result`] alias
//! - **Logging**: tracing subscriber setup driven by [`logging::LogConfig`]
//! - **Types**: the network dataset records (edges, node types, degrees)
//!
//! # Example
//!
//! ```no_run
//! use biorange_common::types::{Edge, NodeKind, NodeType};
//!
//! let edge = Edge::new("TP53", "hsa04115");
//! let node = NodeType::new("TP53", NodeKind::Target);
//! assert_eq!(edge.node1, node.node);
//! ```

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{BiorangeError, Result};
