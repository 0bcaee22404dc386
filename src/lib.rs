//! # adt-debug
//!
//! Compact, deterministic text rendering of evaluated configuration graphs.
//!
//! An evaluator produces a graph of resolved values, pending expressions and
//! structural markers. This crate prints such a graph as one human-readable
//! line for diagnostics, tracing and golden-file tests. The output is not
//! valid configuration source and carries no compatibility guarantee.
//!
//! ## Quick Start
//!
//! ```rust
//! use adt_debug::adt::{Node, Vertex};
//! use adt_debug::label::{LabelKind, LabelTable};
//! use adt_debug::{node_string, Config};
//!
//! let mut labels = LabelTable::new();
//! let a = labels.intern(LabelKind::String, "a");
//! let b = labels.intern(LabelKind::String, "b");
//!
//! let root = Vertex::new()
//!     .with_value(Node::StructMarker)
//!     .with_arc(a, Vertex::leaf(Node::int(1)))
//!     .with_arc(b, Vertex::leaf(Node::int(2)));
//!
//! assert_eq!(node_string(&root.into(), &labels, Config::default()), "{a:1,b:2}");
//! ```
//!
//! ## Module Overview
//!
//! - [`adt`] - The closed set of node kinds a graph may contain
//! - [`label`] - Labels and the resolver that turns them into text
//! - [`printer`] - The output sink and its configuration
//! - [`compact`] - The render engine
//! - [`quote`] - String and bytes literal quoting
//! - [`document`] - JSON documents bundling a graph with its labels
//! - [`error`] - Error types
//!
//! ## Raw Mode
//!
//! With [`Config::raw`] set, a vertex that still carries its conjuncts prints
//! them joined by ` & ` instead of its evaluated value:
//!
//! ```rust
//! use adt_debug::adt::{Kind, Node, Vertex};
//! use adt_debug::label::LabelTable;
//! use adt_debug::{node_string, Config};
//!
//! let labels = LabelTable::new();
//! let v: Node = Vertex::leaf(Node::int(1))
//!     .with_conjunct(Node::BasicType(Kind::INT))
//!     .with_conjunct(Node::int(1))
//!     .into();
//!
//! assert_eq!(node_string(&v, &labels, Config::default()), "1");
//! assert_eq!(node_string(&v, &labels, Config::raw()), "int & 1");
//! ```

pub mod adt;
pub mod compact;
pub mod document;
pub mod error;
pub mod label;
pub mod printer;
pub mod quote;

// Re-export commonly used types
pub use adt::{Node, NodeKind};
pub use compact::CompactPrinter;
pub use document::Document;
pub use error::{DocumentError, EvalError, NodeError};
pub use label::{Label, LabelResolver, LabelTable};
pub use printer::{Config, Printer, Sink};

/// Render `node` to a string.
///
/// # Panics
///
/// Panics if the graph contains a node kind without a compact form; see
/// [`CompactPrinter::node`].
pub fn node_string(node: &Node, labels: &dyn LabelResolver, cfg: Config) -> String {
    tracing::trace!(kind = %node.kind(), raw = cfg.raw, "rendering node");
    let mut p = Printer::with_config(cfg);
    CompactPrinter::new(&mut p, labels).node(node);
    p.finish()
}
