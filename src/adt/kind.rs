//! Basic types as a bit set.

use crate::error::NodeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A set of basic value kinds.
///
/// Displays as `_|_` when empty, `_` when it holds every kind, a single name
/// for one kind, `number` for `int|float`, and a parenthesized `|`-list
/// otherwise.
///
/// # Example
///
/// ```rust
/// use adt_debug::adt::Kind;
///
/// assert_eq!(Kind::INT.to_string(), "int");
/// assert_eq!(Kind::NUMBER.to_string(), "number");
/// assert_eq!((Kind::INT | Kind::STRING).to_string(), "(int|string)");
/// assert_eq!("(int|string)".parse::<Kind>().unwrap(), Kind::INT | Kind::STRING);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Kind(u16);

const NAMES: [(Kind, &str); 8] = [
    (Kind::NULL, "null"),
    (Kind::BOOL, "bool"),
    (Kind::INT, "int"),
    (Kind::FLOAT, "float"),
    (Kind::STRING, "string"),
    (Kind::BYTES, "bytes"),
    (Kind::LIST, "list"),
    (Kind::STRUCT, "struct"),
];

impl Kind {
    pub const BOTTOM: Kind = Kind(0);
    pub const NULL: Kind = Kind(1 << 0);
    pub const BOOL: Kind = Kind(1 << 1);
    pub const INT: Kind = Kind(1 << 2);
    pub const FLOAT: Kind = Kind(1 << 3);
    pub const STRING: Kind = Kind(1 << 4);
    pub const BYTES: Kind = Kind(1 << 5);
    pub const LIST: Kind = Kind(1 << 6);
    pub const STRUCT: Kind = Kind(1 << 7);

    pub const NUMBER: Kind = Kind(Self::INT.0 | Self::FLOAT.0);
    pub const TOP: Kind = Kind((1 << 8) - 1);

    pub fn contains(self, other: Kind) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for Kind {
    type Output = Kind;

    fn bitor(self, rhs: Kind) -> Kind {
        Kind(self.0 | rhs.0)
    }
}

impl std::ops::BitAnd for Kind {
    type Output = Kind;

    fn bitand(self, rhs: Kind) -> Kind {
        Kind(self.0 & rhs.0)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("_|_");
        }
        if *self == Kind::TOP {
            return f.write_str("_");
        }

        let number = self.contains(Kind::NUMBER);
        let mut names: Vec<&str> = NAMES
            .iter()
            .filter(|(k, _)| self.contains(*k) && !(number && Kind::NUMBER.contains(*k)))
            .map(|(_, name)| *name)
            .collect();
        if number {
            names.push("number");
        }

        if names.len() > 1 {
            write!(f, "({})", names.join("|"))
        } else {
            f.write_str(names.concat().as_str())
        }
    }
}

impl fmt::Debug for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Kind({})", self)
    }
}

impl FromStr for Kind {
    type Err = NodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "_|_" => return Ok(Kind::BOTTOM),
            "_" => return Ok(Kind::TOP),
            _ => {}
        }

        let inner = s
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(s);

        inner.split('|').try_fold(Kind::BOTTOM, |acc, name| {
            let kind = match name {
                "number" => Kind::NUMBER,
                _ => NAMES
                    .iter()
                    .find(|(_, n)| *n == name)
                    .map(|(k, _)| *k)
                    .ok_or_else(|| NodeError::InvalidKind(s.to_string()))?,
            };
            Ok(acc | kind)
        })
    }
}

impl TryFrom<String> for Kind {
    type Error = NodeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Kind> for String {
    fn from(kind: Kind) -> String {
        kind.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(Kind::BOTTOM.to_string(), "_|_");
        assert_eq!(Kind::TOP.to_string(), "_");
        assert_eq!(Kind::STRUCT.to_string(), "struct");
        assert_eq!(Kind::NUMBER.to_string(), "number");
        assert_eq!((Kind::NULL | Kind::NUMBER).to_string(), "(null|number)");
        assert_eq!((Kind::STRING | Kind::BYTES).to_string(), "(string|bytes)");
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("int".parse::<Kind>().unwrap(), Kind::INT);
        assert_eq!("number".parse::<Kind>().unwrap(), Kind::NUMBER);
        assert_eq!("(null|number)".parse::<Kind>().unwrap(), Kind::NULL | Kind::NUMBER);
        assert_eq!("_".parse::<Kind>().unwrap(), Kind::TOP);
        assert_eq!("_|_".parse::<Kind>().unwrap(), Kind::BOTTOM);
        assert_eq!(
            "integer".parse::<Kind>(),
            Err(NodeError::InvalidKind("integer".to_string()))
        );
    }

    #[test]
    fn test_kind_serde() {
        let json = serde_json::to_string(&(Kind::INT | Kind::STRING)).unwrap();
        assert_eq!(json, r#""(int|string)""#);
        let kind: Kind = serde_json::from_str(r#""bool""#).unwrap();
        assert_eq!(kind, Kind::BOOL);
        assert!(serde_json::from_str::<Kind>(r#""nope""#).is_err());
    }
}
