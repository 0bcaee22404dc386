//! Node types of an evaluated configuration graph.
//!
//! The evaluator hands the renderer an immutable tree of [`Node`]s. Every
//! container owns its children; references carry only the label or name they
//! display and are never followed.
//!
//! # Node Families
//!
//! ```text
//! Node
//! ├── containers:   Vertex, StructMarker, ListMarker, StructLit, ListLit
//! ├── declarations: Field, OptionalField, BulkOptionalField, DynamicField, Ellipsis
//! ├── literals:     Bottom, Null, Bool, Num, String, Bytes, Top, BasicType
//! ├── bounds:       BoundExpr, BoundValue
//! ├── references:   FieldReference, LabelReference, DynamicReference,
//! │                 ImportReference, LetReference
//! ├── expressions:  SelectorExpr, IndexExpr, SliceExpr, Interpolation, UnaryExpr,
//! │                 BinaryExpr, CallExpr, BuiltinValidator, DisjunctionExpr
//! ├── evaluated:    Conjunction, Disjunction
//! ├── clauses:      ForClause, IfClause, LetClause, ValueClause
//! └── internal:     Builtin, NodeLink
//! ```
//!
//! The internal kinds exist inside the evaluator but have no compact text
//! form; rendering one is a fatal error.
//!
//! # Serialization
//!
//! All node types implement `Serialize` and `Deserialize`. Types with
//! construction invariants ([`Disjunction`], [`BoundExpr`], [`BoundValue`])
//! re-check them on deserialization.

mod kind;
mod op;

pub use kind::Kind;
pub use op::Op;

use crate::error::{EvalError, NodeError, Result};
use crate::label::Label;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A node in the evaluated graph.
///
/// | Variant | Compact form |
/// |---------|--------------|
/// | `Vertex` | `{a:1,b:2}`, `[1,2]`, its value, or `c1 & c2` |
/// | `Field` | `a:1` |
/// | `OptionalField` | `a?:1` |
/// | `BulkOptionalField` | `[string]:int` |
/// | `Bottom` | `_\|_(message)` |
/// | `Bytes` | `'ab'` |
/// | `BinaryExpr` | `(a + b)` |
/// | `DisjunctionExpr` | `(*1\|2)` |
/// | `Disjunction` | `*1 \| 2` |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Vertex(Vertex),
    StructMarker,
    ListMarker,
    StructLit(StructLit),
    ListLit(ListLit),

    Field(Field),
    OptionalField(OptionalField),
    BulkOptionalField(BulkOptionalField),
    DynamicField(DynamicField),
    Ellipsis(Ellipsis),

    Bottom(Bottom),
    Null,
    Bool(bool),
    Num(Num),
    String(String),
    Bytes(Vec<u8>),
    Top,
    BasicType(Kind),

    BoundExpr(BoundExpr),
    BoundValue(BoundValue),

    FieldReference(FieldReference),
    LabelReference(LabelReference),
    DynamicReference(DynamicReference),
    ImportReference(ImportReference),
    LetReference(LetReference),

    SelectorExpr(SelectorExpr),
    IndexExpr(IndexExpr),
    SliceExpr(SliceExpr),
    Interpolation(Interpolation),
    UnaryExpr(UnaryExpr),
    BinaryExpr(BinaryExpr),
    CallExpr(CallExpr),
    BuiltinValidator(BuiltinValidator),
    DisjunctionExpr(DisjunctionExpr),

    Conjunction(Conjunction),
    Disjunction(Disjunction),

    ForClause(ForClause),
    IfClause(IfClause),
    LetClause(LetClause),
    ValueClause(ValueClause),

    Builtin(Builtin),
    NodeLink(NodeLink),
}

/// The variant of a [`Node`] without its payload.
///
/// Displays as the variant name, e.g. `BinaryExpr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Vertex,
    StructMarker,
    ListMarker,
    StructLit,
    ListLit,
    Field,
    OptionalField,
    BulkOptionalField,
    DynamicField,
    Ellipsis,
    Bottom,
    Null,
    Bool,
    Num,
    String,
    Bytes,
    Top,
    BasicType,
    BoundExpr,
    BoundValue,
    FieldReference,
    LabelReference,
    DynamicReference,
    ImportReference,
    LetReference,
    SelectorExpr,
    IndexExpr,
    SliceExpr,
    Interpolation,
    UnaryExpr,
    BinaryExpr,
    CallExpr,
    BuiltinValidator,
    DisjunctionExpr,
    Conjunction,
    Disjunction,
    ForClause,
    IfClause,
    LetClause,
    ValueClause,
    Builtin,
    NodeLink,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Vertex(_) => NodeKind::Vertex,
            Node::StructMarker => NodeKind::StructMarker,
            Node::ListMarker => NodeKind::ListMarker,
            Node::StructLit(_) => NodeKind::StructLit,
            Node::ListLit(_) => NodeKind::ListLit,
            Node::Field(_) => NodeKind::Field,
            Node::OptionalField(_) => NodeKind::OptionalField,
            Node::BulkOptionalField(_) => NodeKind::BulkOptionalField,
            Node::DynamicField(_) => NodeKind::DynamicField,
            Node::Ellipsis(_) => NodeKind::Ellipsis,
            Node::Bottom(_) => NodeKind::Bottom,
            Node::Null => NodeKind::Null,
            Node::Bool(_) => NodeKind::Bool,
            Node::Num(_) => NodeKind::Num,
            Node::String(_) => NodeKind::String,
            Node::Bytes(_) => NodeKind::Bytes,
            Node::Top => NodeKind::Top,
            Node::BasicType(_) => NodeKind::BasicType,
            Node::BoundExpr(_) => NodeKind::BoundExpr,
            Node::BoundValue(_) => NodeKind::BoundValue,
            Node::FieldReference(_) => NodeKind::FieldReference,
            Node::LabelReference(_) => NodeKind::LabelReference,
            Node::DynamicReference(_) => NodeKind::DynamicReference,
            Node::ImportReference(_) => NodeKind::ImportReference,
            Node::LetReference(_) => NodeKind::LetReference,
            Node::SelectorExpr(_) => NodeKind::SelectorExpr,
            Node::IndexExpr(_) => NodeKind::IndexExpr,
            Node::SliceExpr(_) => NodeKind::SliceExpr,
            Node::Interpolation(_) => NodeKind::Interpolation,
            Node::UnaryExpr(_) => NodeKind::UnaryExpr,
            Node::BinaryExpr(_) => NodeKind::BinaryExpr,
            Node::CallExpr(_) => NodeKind::CallExpr,
            Node::BuiltinValidator(_) => NodeKind::BuiltinValidator,
            Node::DisjunctionExpr(_) => NodeKind::DisjunctionExpr,
            Node::Conjunction(_) => NodeKind::Conjunction,
            Node::Disjunction(_) => NodeKind::Disjunction,
            Node::ForClause(_) => NodeKind::ForClause,
            Node::IfClause(_) => NodeKind::IfClause,
            Node::LetClause(_) => NodeKind::LetClause,
            Node::ValueClause(_) => NodeKind::ValueClause,
            Node::Builtin(_) => NodeKind::Builtin,
            Node::NodeLink(_) => NodeKind::NodeLink,
        }
    }

    pub fn string(s: impl Into<String>) -> Self {
        Node::String(s.into())
    }

    pub fn bytes(b: impl Into<Vec<u8>>) -> Self {
        Node::Bytes(b.into())
    }

    pub fn int(i: i64) -> Self {
        Node::Num(Num::int(i))
    }

    pub fn bottom(err: EvalError) -> Self {
        Node::Bottom(Bottom { err: Some(err) })
    }
}

macro_rules! node_from {
    ($($ty:ident),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(x: $ty) -> Self {
                    Node::$ty(x)
                }
            }
        )*
    };
}

node_from!(
    Vertex,
    StructLit,
    ListLit,
    Field,
    OptionalField,
    BulkOptionalField,
    DynamicField,
    Ellipsis,
    Bottom,
    Num,
    BoundExpr,
    BoundValue,
    FieldReference,
    LabelReference,
    DynamicReference,
    ImportReference,
    LetReference,
    SelectorExpr,
    IndexExpr,
    SliceExpr,
    Interpolation,
    UnaryExpr,
    BinaryExpr,
    CallExpr,
    BuiltinValidator,
    DisjunctionExpr,
    Conjunction,
    Disjunction,
    ForClause,
    IfClause,
    LetClause,
    ValueClause,
    Builtin,
    NodeLink,
);

// ============================================================================
// Containers
// ============================================================================

/// A position in the evaluated graph.
///
/// A vertex has a resolved `value` once evaluation finished; until then its
/// `conjuncts` hold the expressions that will contribute to it. When the
/// value is [`Node::StructMarker`] or [`Node::ListMarker`] the actual content
/// lives in `arcs`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Box<Node>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arcs: Vec<Arc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conjuncts: Vec<Conjunct>,
}

impl Vertex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, value: impl Into<Node>) -> Self {
        self.value = Some(Box::new(value.into()));
        self
    }

    pub fn with_arc(mut self, label: Label, vertex: Vertex) -> Self {
        self.arcs.push(Arc { label, vertex });
        self
    }

    pub fn with_conjunct(mut self, expr: impl Into<Node>) -> Self {
        self.conjuncts.push(Conjunct::new(expr));
        self
    }

    /// A resolved leaf vertex.
    pub fn leaf(value: impl Into<Node>) -> Self {
        Self::new().with_value(value)
    }
}

/// A labeled child vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub label: Label,
    pub vertex: Vertex,
}

/// One expression contributing to a vertex, with the field it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conjunct {
    pub expr: Node,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Label>,
}

impl Conjunct {
    pub fn new(expr: impl Into<Node>) -> Self {
        Self {
            expr: expr.into(),
            origin: None,
        }
    }
}

/// A struct literal: declarations in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructLit {
    pub decls: Vec<Node>,
}

/// A list literal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListLit {
    pub elems: Vec<Node>,
}

// ============================================================================
// Declarations
// ============================================================================

/// A regular field: `label: value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub label: Label,
    pub value: Box<Node>,
}

impl Field {
    pub fn new(label: Label, value: impl Into<Node>) -> Self {
        Self {
            label,
            value: Box::new(value.into()),
        }
    }
}

/// An optional field: `label?: value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionalField {
    pub label: Label,
    pub value: Box<Node>,
}

/// A pattern constraint applying `value` to every field matching `filter`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkOptionalField {
    pub filter: Box<Node>,
    pub value: Box<Node>,
}

/// A field whose label is computed: `(key): value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicField {
    pub key: Box<Node>,
    pub value: Box<Node>,
    #[serde(default)]
    pub optional: bool,
}

impl DynamicField {
    pub fn is_optional(&self) -> bool {
        self.optional
    }
}

/// An open-ended marker: `...` or `...T`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ellipsis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Box<Node>>,
}

// ============================================================================
// Literals
// ============================================================================

/// The bottom value, optionally with the error that produced it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bottom {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub err: Option<EvalError>,
}

/// An exact decimal number.
///
/// A float always shows a fractional part, so `1.0` and `1` stay distinct.
///
/// # Example
///
/// ```rust
/// use adt_debug::adt::{Kind, Num};
///
/// let n: Num = "1.50".parse().unwrap();
/// assert_eq!(n.kind, Kind::FLOAT);
/// assert_eq!(n.to_string(), "1.50");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NumRepr")]
pub struct Num {
    /// [`Kind::INT`] or [`Kind::FLOAT`].
    pub kind: Kind,
    pub value: Decimal,
}

impl Num {
    pub fn int(i: i64) -> Self {
        Self {
            kind: Kind::INT,
            value: Decimal::from(i),
        }
    }

    pub fn float(value: Decimal) -> Self {
        Self {
            kind: Kind::FLOAT,
            value,
        }
    }
}

impl FromStr for Num {
    type Err = NodeError;

    /// Parse a decimal literal. A literal with a fractional part or an
    /// exponent is a float.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || NodeError::InvalidNumber(s.to_string());
        if s.contains(['e', 'E']) {
            let value = Decimal::from_scientific(s).map_err(|_| invalid())?;
            return Ok(Self::float(value));
        }
        let value = Decimal::from_str(s).map_err(|_| invalid())?;
        let kind = if s.contains('.') { Kind::FLOAT } else { Kind::INT };
        Ok(Self { kind, value })
    }
}

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == Kind::FLOAT && self.value.scale() == 0 {
            write!(f, "{}.0", self.value)
        } else {
            fmt::Display::fmt(&self.value, f)
        }
    }
}

#[derive(Deserialize)]
struct NumRepr {
    kind: Kind,
    value: Decimal,
}

impl TryFrom<NumRepr> for Num {
    type Error = NodeError;

    fn try_from(repr: NumRepr) -> Result<Self> {
        if repr.kind == Kind::FLOAT {
            return Ok(Self::float(repr.value));
        }
        if repr.kind != Kind::INT {
            return Err(NodeError::InvalidNumKind { kind: repr.kind });
        }
        if !repr.value.fract().is_zero() {
            return Err(NodeError::InvalidNumber(repr.value.to_string()));
        }
        Ok(Self {
            kind: Kind::INT,
            value: repr.value.normalize(),
        })
    }
}

// ============================================================================
// Bounds
// ============================================================================

/// A bound over an unevaluated expression: `<expr`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoundRepr")]
pub struct BoundExpr {
    op: Op,
    expr: Box<Node>,
}

impl BoundExpr {
    /// Create a bound. Fails unless `op` is relational.
    pub fn new(op: Op, expr: impl Into<Node>) -> Result<Self> {
        check_bound_op(op)?;
        Ok(Self {
            op,
            expr: Box::new(expr.into()),
        })
    }

    pub fn op(&self) -> Op {
        self.op
    }

    pub fn expr(&self) -> &Node {
        &self.expr
    }
}

/// A bound over an evaluated value: `>=0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoundRepr")]
pub struct BoundValue {
    op: Op,
    #[serde(rename = "expr")]
    value: Box<Node>,
}

impl BoundValue {
    /// Create a bound. Fails unless `op` is relational.
    pub fn new(op: Op, value: impl Into<Node>) -> Result<Self> {
        check_bound_op(op)?;
        Ok(Self {
            op,
            value: Box::new(value.into()),
        })
    }

    pub fn op(&self) -> Op {
        self.op
    }

    pub fn value(&self) -> &Node {
        &self.value
    }
}

#[derive(Deserialize)]
struct BoundRepr {
    op: Op,
    expr: Box<Node>,
}

impl TryFrom<BoundRepr> for BoundExpr {
    type Error = NodeError;

    fn try_from(repr: BoundRepr) -> Result<Self> {
        check_bound_op(repr.op)?;
        Ok(Self {
            op: repr.op,
            expr: repr.expr,
        })
    }
}

impl TryFrom<BoundRepr> for BoundValue {
    type Error = NodeError;

    fn try_from(repr: BoundRepr) -> Result<Self> {
        check_bound_op(repr.op)?;
        Ok(Self {
            op: repr.op,
            value: repr.expr,
        })
    }
}

fn check_bound_op(op: Op) -> Result<()> {
    if op.is_bound() {
        Ok(())
    } else {
        Err(NodeError::InvalidBoundOp { op })
    }
}

// ============================================================================
// References
// ============================================================================

/// A reference to a field `up` scopes out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldReference {
    #[serde(default)]
    pub up: u32,
    pub label: Label,
}

/// A reference to the label of an enclosing pattern constraint.
///
/// `src` is the identifier that declared the label, when known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelReference {
    #[serde(default)]
    pub up: u32,
    #[serde(default)]
    pub src: Option<String>,
}

/// A reference to a field whose label is computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicReference {
    #[serde(default)]
    pub up: u32,
    pub label: Box<Node>,
}

/// A reference to an imported package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportReference {
    pub import_path: Label,
    pub label: Label,
}

/// A reference to a let binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetReference {
    #[serde(default)]
    pub up: u32,
    pub label: Label,
}

// ============================================================================
// Expressions
// ============================================================================

/// `x.sel`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectorExpr {
    pub x: Box<Node>,
    pub sel: Label,
}

/// `x[index]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexExpr {
    pub x: Box<Node>,
    pub index: Box<Node>,
}

/// `x[lo:hi:stride]`, each bound optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceExpr {
    pub x: Box<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lo: Option<Box<Node>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hi: Option<Box<Node>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stride: Option<Box<Node>>,
}

/// An interpolated string or bytes literal.
///
/// `parts` alternates literal segments (even positions, expected to be
/// [`Node::String`]) and embedded expressions (odd positions).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interpolation {
    /// [`Kind::STRING`] or [`Kind::BYTES`].
    pub kind: Kind,
    pub parts: Vec<Node>,
}

/// `op x`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpr {
    pub op: Op,
    pub x: Box<Node>,
}

/// `x op y`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub op: Op,
    pub x: Box<Node>,
    pub y: Box<Node>,
}

impl BinaryExpr {
    pub fn new(op: Op, x: impl Into<Node>, y: impl Into<Node>) -> Self {
        Self {
            op,
            x: Box::new(x.into()),
            y: Box::new(y.into()),
        }
    }
}

/// `fun(args...)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpr {
    pub fun: Box<Node>,
    pub args: Vec<Node>,
}

/// A builtin applied as a constraint, e.g. `strings.MinRunes(3)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuiltinValidator {
    pub fun: Box<Node>,
    pub args: Vec<Node>,
}

/// One branch of a [`DisjunctionExpr`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disjunct {
    pub val: Node,
    #[serde(default)]
    pub default: bool,
}

impl Disjunct {
    pub fn new(val: impl Into<Node>) -> Self {
        Self {
            val: val.into(),
            default: false,
        }
    }

    pub fn default_value(val: impl Into<Node>) -> Self {
        Self {
            val: val.into(),
            default: true,
        }
    }
}

/// An unevaluated disjunction: `a | *b | c`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisjunctionExpr {
    pub values: Vec<Disjunct>,
}

// ============================================================================
// Evaluated
// ============================================================================

/// A conjunction of values that could not be simplified further.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conjunction {
    pub values: Vec<Node>,
}

/// An evaluated disjunction whose first `num_defaults` values are defaults.
///
/// # Example
///
/// ```rust
/// use adt_debug::adt::{Disjunction, Node};
///
/// let d = Disjunction::new(vec![Node::int(1), Node::int(2)], 1).unwrap();
/// assert_eq!(d.defaults().len(), 1);
/// assert!(Disjunction::new(vec![Node::int(1)], 2).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DisjunctionRepr")]
pub struct Disjunction {
    values: Vec<Node>,
    num_defaults: usize,
}

impl Disjunction {
    /// Create a disjunction. Fails if there are more defaults than values.
    pub fn new(values: Vec<Node>, num_defaults: usize) -> Result<Self> {
        if num_defaults > values.len() {
            return Err(NodeError::TooManyDefaults {
                num_defaults,
                num_values: values.len(),
            });
        }
        Ok(Self {
            values,
            num_defaults,
        })
    }

    pub fn values(&self) -> &[Node] {
        &self.values
    }

    pub fn num_defaults(&self) -> usize {
        self.num_defaults
    }

    pub fn defaults(&self) -> &[Node] {
        &self.values[..self.num_defaults]
    }
}

#[derive(Deserialize)]
struct DisjunctionRepr {
    values: Vec<Node>,
    #[serde(default)]
    num_defaults: usize,
}

impl TryFrom<DisjunctionRepr> for Disjunction {
    type Error = NodeError;

    fn try_from(repr: DisjunctionRepr) -> Result<Self> {
        Disjunction::new(repr.values, repr.num_defaults)
    }
}

// ============================================================================
// Comprehension clauses
// ============================================================================

/// `for key, value in src dst`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForClause {
    pub key: Label,
    pub value: Label,
    pub src: Box<Node>,
    pub dst: Box<Node>,
}

/// `if condition dst`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfClause {
    pub condition: Box<Node>,
    pub dst: Box<Node>,
}

/// `let label = expr dst`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetClause {
    pub label: Label,
    pub expr: Box<Node>,
    pub dst: Box<Node>,
}

/// The struct a comprehension yields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueClause {
    pub struct_lit: StructLit,
}

// ============================================================================
// Evaluator-internal
// ============================================================================

/// A builtin function value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Builtin {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    pub name: String,
    #[serde(default)]
    pub params: Vec<Kind>,
    pub result: Kind,
}

/// A forwarding link the evaluator resolves internally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLink {
    pub node: Box<Node>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::LabelKind;

    #[test]
    fn test_node_kind_display() {
        assert_eq!(Node::Null.kind().to_string(), "Null");
        assert_eq!(
            Node::from(BinaryExpr::new(Op::Add, Node::int(1), Node::int(2)))
                .kind()
                .to_string(),
            "BinaryExpr"
        );
        assert_eq!(Node::from(Vertex::new()).kind(), NodeKind::Vertex);
    }

    #[test]
    fn test_disjunction_invariant() {
        let d = Disjunction::new(vec![Node::int(1), Node::int(2)], 2).unwrap();
        assert_eq!(d.num_defaults(), 2);
        assert_eq!(d.defaults(), d.values());

        let err = Disjunction::new(vec![Node::int(1)], 2).unwrap_err();
        assert_eq!(
            err,
            NodeError::TooManyDefaults {
                num_defaults: 2,
                num_values: 1
            }
        );
    }

    #[test]
    fn test_disjunction_deserialize_checks_defaults() {
        let ok = r#"{"Disjunction": {"values": ["Null", "Top"], "num_defaults": 1}}"#;
        let node: Node = serde_json::from_str(ok).unwrap();
        assert_eq!(
            node,
            Node::from(Disjunction::new(vec![Node::Null, Node::Top], 1).unwrap())
        );

        let bad = r#"{"Disjunction": {"values": ["Null"], "num_defaults": 2}}"#;
        let err = serde_json::from_str::<Node>(bad).unwrap_err();
        assert!(err.to_string().contains("disjunction has 2 defaults"));
    }

    #[test]
    fn test_bound_requires_relational_op() {
        assert!(BoundValue::new(Op::LessThan, Node::int(5)).is_ok());
        assert_eq!(
            BoundExpr::new(Op::Add, Node::int(5)).unwrap_err(),
            NodeError::InvalidBoundOp { op: Op::Add }
        );

        let bad = r#"{"BoundValue": {"op": "+", "expr": "Null"}}"#;
        assert!(serde_json::from_str::<Node>(bad).is_err());
    }

    #[test]
    fn test_num_parse() {
        let n: Num = "42".parse().unwrap();
        assert_eq!(n, Num::int(42));
        let f: Num = "-0.25".parse().unwrap();
        assert_eq!(f.kind, Kind::FLOAT);
        assert_eq!(f.to_string(), "-0.25");
        assert_eq!(
            "x1".parse::<Num>(),
            Err(NodeError::InvalidNumber("x1".to_string()))
        );
    }

    #[test]
    fn test_num_parse_exponent_is_float() {
        let n: Num = "1e3".parse().unwrap();
        assert_eq!(n.kind, Kind::FLOAT);
        assert_eq!(n.value, Decimal::from(1000));
        let n: Num = "2.5E-1".parse().unwrap();
        assert_eq!(n.kind, Kind::FLOAT);
        assert_eq!(n.value, Decimal::new(25, 2));
        assert!("1e".parse::<Num>().is_err());
    }

    #[test]
    fn test_whole_float_keeps_fraction() {
        assert_eq!(Num::float(Decimal::from(1)).to_string(), "1.0");
        assert_eq!(Num::float(Decimal::new(-30, 0)).to_string(), "-30.0");
        assert_eq!(Num::int(1).to_string(), "1");
        assert_ne!(
            Num::float(Decimal::from(1)).to_string(),
            Num::int(1).to_string()
        );
    }

    #[test]
    fn test_num_deserialize_checks_kind() {
        let n: Num = serde_json::from_str(r#"{"kind":"int","value":"1.00"}"#).unwrap();
        assert_eq!(n.to_string(), "1");
        let f: Num = serde_json::from_str(r#"{"kind":"float","value":"2"}"#).unwrap();
        assert_eq!(f.to_string(), "2.0");

        let err = serde_json::from_str::<Num>(r#"{"kind":"string","value":"1"}"#).unwrap_err();
        assert!(err.to_string().contains("number cannot have kind string"));
        let err = serde_json::from_str::<Num>(r#"{"kind":"int","value":"1.5"}"#).unwrap_err();
        assert!(err.to_string().contains("invalid number"));
    }

    #[test]
    fn test_vertex_builders() {
        let a = Label::new(LabelKind::String, 0);
        let v = Vertex::new()
            .with_value(Node::StructMarker)
            .with_arc(a, Vertex::leaf(Node::int(1)))
            .with_conjunct(Node::Top);

        assert_eq!(v.arcs.len(), 1);
        assert_eq!(v.conjuncts.len(), 1);
        assert_eq!(v.arcs[0].label, a);
        assert_eq!(v.arcs[0].vertex, Vertex::leaf(Node::int(1)));
        assert_eq!(v.conjuncts[0], Conjunct::new(Node::Top));
    }
}
