//! A serialized graph together with the labels it refers to.
//!
//! Documents are how graphs travel outside the evaluator: golden test
//! fixtures, bug reports and the `adt-debug` command line tool all use the
//! JSON form.
//!
//! ```json
//! {
//!   "labels": ["a", "b"],
//!   "config": { "raw": false },
//!   "root": { "Vertex": { "value": "StructMarker", "arcs": [] } }
//! }
//! ```

use crate::adt::Node;
use crate::error::DocumentError;
use crate::label::LabelTable;
use crate::printer::Config;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// A node graph with its label table and printer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub labels: LabelTable,
    #[serde(default)]
    pub config: Config,
    pub root: Node,
}

impl Document {
    pub fn new(labels: LabelTable, root: Node) -> Self {
        Self {
            labels,
            config: Config::default(),
            root,
        }
    }

    /// Parse a document from JSON text.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON document.
    pub fn from_reader(mut reader: impl Read) -> Result<Self, DocumentError> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render the root node with the document's own configuration.
    pub fn render(&self) -> String {
        crate::node_string(&self.root, &self.labels, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adt::{Field, StructLit, Vertex};
    use crate::label::LabelKind;

    const DOC: &str = r#"{
        "labels": ["a", "b-c"],
        "root": {
            "Vertex": {
                "value": "StructMarker",
                "arcs": [
                    { "label": { "kind": "String", "index": 0 },
                      "vertex": { "value": { "Num": { "kind": "int", "value": "1" } } } },
                    { "label": { "kind": "String", "index": 1 },
                      "vertex": { "value": { "String": "x" } } }
                ],
                "conjuncts": [ { "expr": "Top" } ]
            }
        }
    }"#;

    #[test]
    fn test_from_json_and_render() {
        let doc = Document::from_json(DOC).unwrap();
        assert_eq!(doc.labels.len(), 2);
        assert!(!doc.config.raw);
        assert_eq!(doc.render(), r#"{a:1,"b-c":"x"}"#);
    }

    #[test]
    fn test_render_respects_raw_config() {
        let mut doc = Document::from_json(DOC).unwrap();
        doc.config = Config::raw();
        assert_eq!(doc.render(), "_");
    }

    #[test]
    fn test_from_reader() {
        let doc = Document::from_reader(DOC.as_bytes()).unwrap();
        assert_eq!(doc.render(), r#"{a:1,"b-c":"x"}"#);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut labels = LabelTable::new();
        let a = labels.intern(LabelKind::String, "a");
        let root = Vertex::leaf(StructLit {
            decls: vec![Field::new(a, Node::int(0)).into()],
        });
        let doc = Document::new(labels, root.into());
        let back = Document::from_json(&doc.to_json().unwrap()).unwrap();
        assert_eq!(back, doc);
        assert_eq!(back.render(), "{a:0}");
    }

    #[test]
    fn test_invalid_json() {
        let err = Document::from_json("{").unwrap_err();
        assert!(matches!(err, DocumentError::Json(_)));
        let err = Document::from_json(r#"{"labels": []}"#).unwrap_err();
        assert!(err.to_string().contains("root"));
    }
}
