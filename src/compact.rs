//! Compact rendering of graph nodes.
//!
//! [`CompactPrinter`] writes any [`Node`] as a single line of text. The output
//! is not valid configuration syntax; it exists so that evaluation states can
//! be logged, traced and compared against golden files. Distinct node shapes
//! always produce distinct text.
//!
//! # Example
//!
//! ```rust
//! use adt_debug::adt::{Disjunction, Node};
//! use adt_debug::label::LabelTable;
//! use adt_debug::{node_string, Config};
//!
//! let labels = LabelTable::new();
//! let d = Disjunction::new(vec![Node::int(1), Node::int(2), Node::int(3)], 2).unwrap();
//! assert_eq!(node_string(&d.into(), &labels, Config::default()), "*1 | *2 | 3");
//! ```
//!
//! # Formatting
//!
//! | Node | Output |
//! |------|--------|
//! | struct vertex | `{a:1,b:2}` |
//! | list vertex | `[1,2]` |
//! | unresolved or raw vertex | `c1 & c2` |
//! | `BinaryExpr` | `(x + y)` |
//! | `SliceExpr` | `x[lo:hi:stride]` |
//! | `Interpolation` | `"a\(x)b"` |
//! | `ForClause` | `for k, v in src {…}` |

use crate::adt::*;
use crate::label::{Label, LabelResolver};
use crate::printer::Sink;
use crate::quote::{quote, quote_bytes};

/// Renders nodes into a borrowed [`Sink`], resolving labels through a
/// borrowed [`LabelResolver`].
pub struct CompactPrinter<'a> {
    sink: &'a mut dyn Sink,
    labels: &'a dyn LabelResolver,
}

impl<'a> CompactPrinter<'a> {
    pub fn new(sink: &'a mut dyn Sink, labels: &'a dyn LabelResolver) -> Self {
        Self { sink, labels }
    }

    /// Write the compact form of `n`.
    ///
    /// # Panics
    ///
    /// Panics with `unknown type <Kind>` for evaluator-internal kinds
    /// ([`Node::Builtin`], [`Node::NodeLink`]), which have no compact form.
    pub fn node(&mut self, n: &Node) {
        match n {
            Node::Vertex(x) => self.vertex(x),

            Node::StructMarker => self.string("struct"),
            Node::ListMarker => self.string("list"),

            Node::StructLit(x) => self.struct_lit(x),

            Node::ListLit(x) => {
                self.string("[");
                self.nodes(&x.elems, ",");
                self.string("]");
            }

            // ================================================================
            // Declarations
            // ================================================================
            Node::Field(x) => {
                self.label(x.label);
                self.string(":");
                self.node(&x.value);
            }

            Node::OptionalField(x) => {
                self.label(x.label);
                self.string("?:");
                self.node(&x.value);
            }

            Node::BulkOptionalField(x) => {
                self.string("[");
                self.node(&x.filter);
                self.string("]:");
                self.node(&x.value);
            }

            Node::DynamicField(x) => {
                self.node(&x.key);
                if x.is_optional() {
                    self.string("?");
                }
                self.string(":");
                self.node(&x.value);
            }

            Node::Ellipsis(x) => {
                self.string("...");
                if let Some(value) = &x.value {
                    self.node(value);
                }
            }

            // ================================================================
            // Literals
            // ================================================================
            Node::Bottom(x) => {
                self.string("_|_");
                if let Some(err) = &x.err {
                    self.string("(");
                    self.sink.write_display(err);
                    self.string(")");
                }
            }

            Node::Null => self.string("null"),
            Node::Top => self.string("_"),
            Node::Bool(b) => self.string(if *b { "true" } else { "false" }),
            Node::Num(x) => self.sink.write_display(x),
            Node::String(s) => self.string(&quote(s)),
            Node::Bytes(b) => self.string(&quote_bytes(b)),
            Node::BasicType(k) => self.sink.write_display(k),

            Node::BoundExpr(x) => {
                self.string(x.op().token());
                self.node(x.expr());
            }

            Node::BoundValue(x) => {
                self.string(x.op().token());
                self.node(x.value());
            }

            // ================================================================
            // References
            // ================================================================
            Node::FieldReference(x) => self.label(x.label),

            Node::LabelReference(x) => match &x.src {
                Some(name) => self.string(name),
                None => self.string("LABEL"),
            },

            Node::DynamicReference(x) => self.node(&x.label),
            Node::ImportReference(x) => self.label(x.import_path),
            Node::LetReference(x) => self.label(x.label),

            // ================================================================
            // Expressions
            // ================================================================
            Node::SelectorExpr(x) => {
                self.node(&x.x);
                self.string(".");
                self.label(x.sel);
            }

            Node::IndexExpr(x) => {
                self.node(&x.x);
                self.string("[");
                self.node(&x.index);
                self.string("]");
            }

            Node::SliceExpr(x) => {
                self.node(&x.x);
                self.string("[");
                if let Some(lo) = &x.lo {
                    self.node(lo);
                }
                self.string(":");
                if let Some(hi) = &x.hi {
                    self.node(hi);
                }
                if let Some(stride) = &x.stride {
                    self.string(":");
                    self.node(stride);
                }
                self.string("]");
            }

            Node::Interpolation(x) => self.interpolation(x),

            Node::UnaryExpr(x) => {
                self.string(x.op.token());
                self.node(&x.x);
            }

            Node::BinaryExpr(x) => {
                self.string("(");
                self.node(&x.x);
                self.string(" ");
                self.string(x.op.token());
                self.string(" ");
                self.node(&x.y);
                self.string(")");
            }

            Node::CallExpr(x) => self.call(&x.fun, &x.args),
            Node::BuiltinValidator(x) => self.call(&x.fun, &x.args),

            Node::DisjunctionExpr(x) => {
                self.string("(");
                for (i, d) in x.values.iter().enumerate() {
                    if i > 0 {
                        self.string("|");
                    }
                    if d.default {
                        self.string("*");
                    }
                    self.node(&d.val);
                }
                self.string(")");
            }

            Node::Conjunction(x) => self.nodes(&x.values, " & "),

            Node::Disjunction(x) => {
                for (i, v) in x.values().iter().enumerate() {
                    if i > 0 {
                        self.string(" | ");
                    }
                    if i < x.num_defaults() {
                        self.string("*");
                    }
                    self.node(v);
                }
            }

            // ================================================================
            // Comprehension clauses
            // ================================================================
            Node::ForClause(x) => {
                self.string("for ");
                self.label(x.key);
                self.string(", ");
                self.label(x.value);
                self.string(" in ");
                self.node(&x.src);
                self.string(" ");
                self.node(&x.dst);
            }

            Node::IfClause(x) => {
                self.string("if ");
                self.node(&x.condition);
                self.string(" ");
                self.node(&x.dst);
            }

            Node::LetClause(x) => {
                self.string("let ");
                self.label(x.label);
                self.string(" = ");
                self.node(&x.expr);
                self.string(" ");
                self.node(&x.dst);
            }

            Node::ValueClause(x) => self.struct_lit(&x.struct_lit),

            Node::Builtin(_) | Node::NodeLink(_) => self.unknown(n.kind()),
        }
    }

    fn vertex(&mut self, x: &Vertex) {
        let value = match &x.value {
            Some(value) if !(self.sink.config().raw && !x.conjuncts.is_empty()) => value,
            _ => {
                for (i, c) in x.conjuncts.iter().enumerate() {
                    if i > 0 {
                        self.string(" & ");
                    }
                    self.node(&c.expr);
                }
                return;
            }
        };

        match value.as_ref() {
            Node::StructMarker => {
                self.string("{");
                for (i, a) in x.arcs.iter().enumerate() {
                    if i > 0 {
                        self.string(",");
                    }
                    self.label(a.label);
                    self.string(":");
                    self.vertex(&a.vertex);
                }
                self.string("}");
            }

            Node::ListMarker => {
                self.string("[");
                for (i, a) in x.arcs.iter().enumerate() {
                    if i > 0 {
                        self.string(",");
                    }
                    self.vertex(&a.vertex);
                }
                self.string("]");
            }

            other => self.node(other),
        }
    }

    fn struct_lit(&mut self, x: &StructLit) {
        self.string("{");
        self.nodes(&x.decls, ",");
        self.string("}");
    }

    fn call(&mut self, fun: &Node, args: &[Node]) {
        self.node(fun);
        self.string("(");
        self.nodes(args, ", ");
        self.string(")");
    }

    fn interpolation(&mut self, x: &Interpolation) {
        self.string("\"");
        for pair in x.parts.chunks(2) {
            match &pair[0] {
                Node::String(s) => self.string(s),
                _ => self.string("<bad string>"),
            }
            if let Some(expr) = pair.get(1) {
                self.string("\\(");
                self.node(expr);
                self.string(")");
            }
        }
        self.string("\"");
    }

    fn nodes(&mut self, nodes: &[Node], sep: &str) {
        for (i, n) in nodes.iter().enumerate() {
            if i > 0 {
                self.string(sep);
            }
            self.node(n);
        }
    }

    fn label(&mut self, label: Label) {
        let s = self.labels.label_str(label);
        self.sink.write_str(&s);
    }

    fn string(&mut self, s: &str) {
        self.sink.write_str(s);
    }

    fn unknown(&self, kind: NodeKind) -> ! {
        tracing::error!(%kind, "node kind has no compact form");
        panic!("unknown type {}", kind)
    }
}
