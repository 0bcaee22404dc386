//! Operator tokens.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An operator of a unary, binary or bound expression.
///
/// Serializes as its token, e.g. `"<="` or `"quo"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Op {
    #[serde(rename = "&")]
    And,
    #[serde(rename = "|")]
    Or,
    #[serde(rename = "&&")]
    BoolAnd,
    #[serde(rename = "||")]
    BoolOr,
    #[serde(rename = "==")]
    Equal,
    #[serde(rename = "!=")]
    NotEqual,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = "<=")]
    LessEqual,
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = ">=")]
    GreaterEqual,
    #[serde(rename = "=~")]
    Match,
    #[serde(rename = "!~")]
    NotMatch,
    #[serde(rename = "!")]
    Not,
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    FloatQuotient,
    #[serde(rename = "quo")]
    IntQuotient,
    #[serde(rename = "rem")]
    IntRemainder,
    #[serde(rename = "div")]
    IntDivide,
    #[serde(rename = "mod")]
    IntModulo,
}

impl Op {
    /// The source token for this operator.
    pub fn token(self) -> &'static str {
        match self {
            Op::And => "&",
            Op::Or => "|",
            Op::BoolAnd => "&&",
            Op::BoolOr => "||",
            Op::Equal => "==",
            Op::NotEqual => "!=",
            Op::LessThan => "<",
            Op::LessEqual => "<=",
            Op::GreaterThan => ">",
            Op::GreaterEqual => ">=",
            Op::Match => "=~",
            Op::NotMatch => "!~",
            Op::Not => "!",
            Op::Add => "+",
            Op::Subtract => "-",
            Op::Multiply => "*",
            Op::FloatQuotient => "/",
            Op::IntQuotient => "quo",
            Op::IntRemainder => "rem",
            Op::IntDivide => "div",
            Op::IntModulo => "mod",
        }
    }

    /// Whether this operator may prefix a bound (`<5`, `!=null`, `=~"re"`).
    pub fn is_bound(self) -> bool {
        matches!(
            self,
            Op::NotEqual
                | Op::LessThan
                | Op::LessEqual
                | Op::GreaterThan
                | Op::GreaterEqual
                | Op::Match
                | Op::NotMatch
        )
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
