//! Document tree
//!
//! A mutable, ordered tree of [`DocumentNode`]s. Node names are element type
//! names of the schema the tree is meant to conform to; nothing here consults
//! the schema, so a tree may be built, edited and serialized while invalid.

use std::fmt;

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::schema::leaf::parse_number;

/// Terminal value carried by a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LeafValue {
    /// Text value
    Text(String),
    /// Decimal value
    Number(Decimal),
}

impl LeafValue {
    /// Text form of the value
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Numeric form of the value, if it has one
    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            LeafValue::Number(n) => Some(*n),
            LeafValue::Text(s) => parse_number(s),
        }
    }
}

impl fmt::Display for LeafValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeafValue::Text(s) => f.write_str(s),
            LeafValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for LeafValue {
    fn from(value: &str) -> Self {
        LeafValue::Text(value.to_string())
    }
}

impl From<String> for LeafValue {
    fn from(value: String) -> Self {
        LeafValue::Text(value)
    }
}

impl From<Decimal> for LeafValue {
    fn from(value: Decimal) -> Self {
        LeafValue::Number(value)
    }
}

impl From<i64> for LeafValue {
    fn from(value: i64) -> Self {
        LeafValue::Number(Decimal::from(value))
    }
}

impl From<f64> for LeafValue {
    fn from(value: f64) -> Self {
        let text = value.to_string();
        match parse_number(&text) {
            Some(n) => LeafValue::Number(n),
            None => LeafValue::Text(text),
        }
    }
}

/// Element in a document tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentNode {
    /// Element type name
    pub name: String,
    /// Child elements in order
    pub children: Vec<DocumentNode>,
    /// Leaf value
    pub value: Option<LeafValue>,
    /// Attributes in insertion order
    pub attributes: IndexMap<String, String>,
}

impl DocumentNode {
    /// Create an empty node
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            value: None,
            attributes: IndexMap::new(),
        }
    }

    /// Create a node holding a value
    pub fn leaf(name: impl Into<String>, value: impl Into<LeafValue>) -> Self {
        Self::new(name).with_value(value)
    }

    /// Append a child
    pub fn with_child(mut self, child: DocumentNode) -> Self {
        self.children.push(child);
        self
    }

    /// Set the value
    pub fn with_value(mut self, value: impl Into<LeafValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set an attribute
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Append a child
    pub fn push_child(&mut self, child: DocumentNode) {
        self.children.push(child);
    }

    /// Replace the value
    pub fn set_value(&mut self, value: impl Into<LeafValue>) {
        self.value = Some(value.into());
    }

    /// Set an attribute, replacing any previous value
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Get an attribute value
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Children with the given type name
    pub fn find_children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a DocumentNode> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// First child with the given type name
    pub fn child(&self, name: &str) -> Option<&DocumentNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// First child with the given type name, mutably
    pub fn child_mut(&mut self, name: &str) -> Option<&mut DocumentNode> {
        self.children.iter_mut().find(|c| c.name == name)
    }

    /// Remove every child with the given type name, returning how many went
    pub fn remove_children(&mut self, name: &str) -> usize {
        let before = self.children.len();
        self.children.retain(|c| c.name != name);
        before - self.children.len()
    }

    /// Element type name
    pub fn type_name(&self) -> &str {
        &self.name
    }

    /// Whether the node has neither value nor children
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_build_tree() {
        let mut dataset = DocumentNode::new("dataset")
            .with_child(DocumentNode::leaf("title", "Plankton counts"))
            .with_child(DocumentNode::leaf("keyword", "ocean"))
            .with_child(DocumentNode::leaf("keyword", "chlorophyll"));

        assert_eq!(dataset.type_name(), "dataset");
        assert_eq!(dataset.find_children("keyword").count(), 2);
        assert_eq!(
            dataset.child("title").and_then(|t| t.value.as_ref()),
            Some(&LeafValue::from("Plankton counts"))
        );

        dataset.child_mut("title").unwrap().set_value("Zooplankton counts");
        assert_eq!(dataset.child("title").unwrap().value.as_ref().unwrap().to_text(), "Zooplankton counts");

        assert_eq!(dataset.remove_children("keyword"), 2);
        assert_eq!(dataset.children.len(), 1);
    }

    #[test]
    fn test_attributes_keep_order() {
        let node = DocumentNode::new("eml")
            .with_attribute("packageId", "knb.1.1")
            .with_attribute("system", "knb");
        let keys: Vec<_> = node.attributes.keys().map(String::as_str).collect();
        assert_eq!(keys, ["packageId", "system"]);
        assert_eq!(node.attribute("system"), Some("knb"));
    }

    #[test]
    fn test_leaf_values() {
        assert_eq!(LeafValue::from(42i64).to_string(), "42");
        assert_eq!(LeafValue::from(-12.5f64), LeafValue::Number(Decimal::from_str("-12.5").unwrap()));
        assert!(matches!(LeafValue::from(f64::NAN), LeafValue::Text(_)));
        assert_eq!(LeafValue::from("1.5e3").as_number(), Some(Decimal::from(1500)));
        assert!(DocumentNode::new("x").is_empty());
    }
}
