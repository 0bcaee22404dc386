//! Error types for node construction, evaluation results and document loading.
//!
//! # Error Types
//!
//! - [`NodeError`] - A node was built in violation of its structural invariants
//! - [`EvalError`] - The error carried by a bottom (`_|_`) value
//! - [`DocumentError`] - A serialized graph could not be loaded
//!
//! None of these describe a rendering failure: rendering is total over the
//! node taxonomy and only aborts on an evaluator-internal kind (see
//! [`crate::compact`]).

use crate::adt::{Kind, Op};
use thiserror::Error;

/// Errors raised when constructing or deserializing a node whose invariants
/// do not hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeError {
    /// A disjunction declared more leading defaults than it has values.
    #[error("disjunction has {num_defaults} defaults but only {num_values} values")]
    TooManyDefaults {
        num_defaults: usize,
        num_values: usize,
    },

    /// A bound was built from an operator that is not relational.
    #[error("operator {op} cannot be used as a bound")]
    InvalidBoundOp { op: Op },

    /// A basic type name was not recognized.
    #[error("unknown basic type {0:?}")]
    InvalidKind(String),

    /// A number literal could not be parsed.
    #[error("invalid number {0:?}")]
    InvalidNumber(String),

    /// A number was given a kind other than `int` or `float`.
    #[error("number cannot have kind {kind}")]
    InvalidNumKind { kind: Kind },
}

/// The error attached to a bottom value by the evaluator.
///
/// The `Display` text is exactly what the compact renderer prints between the
/// parentheses of `_|_(...)`.
#[derive(Debug, Clone, PartialEq, Eq, Error, serde::Serialize, serde::Deserialize)]
pub enum EvalError {
    /// Two values could not be unified.
    #[error("conflicting values {left} and {right}")]
    Conflict { left: String, right: String },

    /// A value does not satisfy a constraint.
    #[error("invalid value {value} (out of bound {bound})")]
    OutOfBound { value: String, bound: String },

    /// A reference could not be resolved.
    #[error("reference {name:?} not found")]
    NotFound { name: String },

    /// Evaluation hit a structural cycle.
    #[error("structural cycle")]
    Cycle,

    /// Evaluation could not complete yet.
    #[error("incomplete value {0}")]
    Incomplete(String),

    /// Any other message produced by the evaluator.
    #[error("{0}")]
    Message(String),
}

/// Errors that can occur when loading a [`crate::Document`].
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The input could not be read.
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not a valid JSON document.
    #[error("invalid document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for node construction.
pub type Result<T> = std::result::Result<T, NodeError>;
