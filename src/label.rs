//! Labels and their display names.
//!
//! A [`Label`] is a compact identity for a field name: its [`LabelKind`] plus
//! either an index into a string table or, for list positions, the integer
//! itself. Turning a label into text is the job of a [`LabelResolver`]; the
//! renderer never looks inside a label.
//!
//! | Kind | Stored name | Displayed |
//! |------|-------------|-----------|
//! | `String` | `a` | `a` |
//! | `String` | `a-b` | `"a-b"` |
//! | `String` | `_a` | `"_a"` |
//! | `Int` | - | `3` |
//! | `Definition` | `Def` | `#Def` |
//! | `Hidden` | `x` | `_x` |
//! | `HiddenDefinition` | `Def` | `_#Def` |
//! | `Let` | `tmp` | `tmp` |

use crate::quote::{is_identifier, quote};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// The kind of field a label names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LabelKind {
    /// A regular field name.
    String,
    /// A list position.
    Int,
    /// A definition (`#Name`).
    Definition,
    /// A hidden field (`_name`).
    Hidden,
    /// A hidden definition (`_#Name`).
    HiddenDefinition,
    /// A let binding.
    Let,
}

/// An interned field label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Label {
    pub kind: LabelKind,
    /// String table index, or the list position for [`LabelKind::Int`].
    pub index: u32,
}

impl Label {
    pub fn new(kind: LabelKind, index: u32) -> Self {
        Self { kind, index }
    }

    /// A list position label.
    pub fn int(index: u32) -> Self {
        Self::new(LabelKind::Int, index)
    }

    pub fn is_int(&self) -> bool {
        self.kind == LabelKind::Int
    }
}

/// Maps labels to the text used to display them.
pub trait LabelResolver {
    /// The display text for `label`, quoted or prefixed as its kind requires.
    fn label_str(&self, label: Label) -> Cow<'_, str>;
}

/// A string interner that resolves labels by table index.
///
/// # Example
///
/// ```rust
/// use adt_debug::label::{LabelKind, LabelResolver, LabelTable};
///
/// let mut labels = LabelTable::new();
/// let a = labels.intern(LabelKind::String, "a");
/// let def = labels.intern(LabelKind::Definition, "Schema");
/// let odd = labels.intern(LabelKind::String, "a-b");
///
/// assert_eq!(labels.label_str(a), "a");
/// assert_eq!(labels.label_str(def), "#Schema");
/// assert_eq!(labels.label_str(odd), "\"a-b\"");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelTable {
    names: IndexSet<String>,
}

impl LabelTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `name` and return a label of the given kind for it.
    ///
    /// Int labels are not interned; use [`Label::int`] for those.
    pub fn intern(&mut self, kind: LabelKind, name: &str) -> Label {
        let index = match self.names.get_index_of(name) {
            Some(i) => i,
            None => self.names.insert_full(name.to_string()).0,
        };
        Label::new(kind, index as u32)
    }

    /// The stored name for a table index, without any display prefix.
    pub fn name(&self, index: u32) -> Option<&str> {
        self.names.get_index(index as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl LabelResolver for LabelTable {
    fn label_str(&self, label: Label) -> Cow<'_, str> {
        if label.is_int() {
            return Cow::Owned(label.index.to_string());
        }
        let Some(name) = self.name(label.index) else {
            return Cow::Owned(format!("<unknown label {}>", label.index));
        };
        match label.kind {
            // A bare `_a` would read as a hidden label.
            LabelKind::String if is_identifier(name) && !name.starts_with('_') => {
                Cow::Borrowed(name)
            }
            LabelKind::String => Cow::Owned(quote(name)),
            LabelKind::Definition => Cow::Owned(format!("#{}", name)),
            LabelKind::Hidden => Cow::Owned(format!("_{}", name)),
            LabelKind::HiddenDefinition => Cow::Owned(format!("_#{}", name)),
            LabelKind::Let | LabelKind::Int => Cow::Borrowed(name),
        }
    }
}
