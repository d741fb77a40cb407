//! Schema-checked node construction
//!
//! [`Builder`] hands out one [`ElementHelper`] per element type. A helper
//! accepts named arguments, rejects any name that is neither a child nor an
//! attribute of its type the moment it is given, and places children in the
//! schema's declared order no matter the order they were supplied in.
//!
//! ```rust
//! use schemadoc::builders::Builder;
//! use schemadoc::schema::{Cardinality, LeafKind, SchemaBuilder};
//!
//! let schema = SchemaBuilder::new("individualName")
//!     .element("individualName", |t| {
//!         t.child("givenName", Cardinality::ZeroOrMore)
//!             .child("surName", Cardinality::Required)
//!     })
//!     .leaf("givenName", LeafKind::Text)
//!     .leaf("surName", LeafKind::Text)
//!     .build()?;
//!
//! let builder = Builder::new(&schema);
//! let name = builder
//!     .helper("individualName")?
//!     .arg("surName", "Clark")?
//!     .arg("givenName", "Jeanette")?
//!     .build();
//! assert_eq!(name.children[0].name, "givenName");
//! # Ok::<(), schemadoc::Error>(())
//! ```

use indexmap::IndexMap;
use rust_decimal::Decimal;

use crate::document::{DocumentNode, LeafValue};
use crate::error::{Error, Result};
use crate::schema::{ChildDecl, SchemaElementType, SchemaModel};

/// Value given for a named builder argument
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    /// An already built child node
    Node(DocumentNode),
    /// A leaf value for a child or attribute
    Leaf(LeafValue),
    /// Several values for a repeatable child
    Many(Vec<ArgValue>),
}

impl From<DocumentNode> for ArgValue {
    fn from(node: DocumentNode) -> Self {
        ArgValue::Node(node)
    }
}

impl From<LeafValue> for ArgValue {
    fn from(value: LeafValue) -> Self {
        ArgValue::Leaf(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::Leaf(value.into())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue::Leaf(value.into())
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        ArgValue::Leaf(value.into())
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        ArgValue::Leaf(value.into())
    }
}

impl From<Decimal> for ArgValue {
    fn from(value: Decimal) -> Self {
        ArgValue::Leaf(value.into())
    }
}

impl<T: Into<ArgValue>> From<Vec<T>> for ArgValue {
    fn from(values: Vec<T>) -> Self {
        ArgValue::Many(values.into_iter().map(Into::into).collect())
    }
}

/// A structured table of records, one row per repeated element
///
/// Column names are argument names of the row element type. Empty cells are
/// left out of the row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordTable {
    /// Column names
    pub columns: Vec<String>,
    /// Rows of cells, one cell per column
    pub rows: Vec<Vec<String>>,
}

impl RecordTable {
    /// Create a table with the given columns and no rows
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row
    pub fn with_row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Entry point for schema-checked construction
#[derive(Debug, Clone, Copy)]
pub struct Builder<'s> {
    schema: &'s SchemaModel,
}

impl<'s> Builder<'s> {
    /// Create a builder over a schema
    pub fn new(schema: &'s SchemaModel) -> Self {
        Self { schema }
    }

    /// The schema being built against
    pub fn schema(&self) -> &'s SchemaModel {
        self.schema
    }

    /// Start building a node of the given type
    pub fn helper(&self, type_name: &str) -> Result<ElementHelper<'s>> {
        let decl = self.schema.resolve(type_name)?;
        Ok(ElementHelper::new(self.schema, decl))
    }

    /// Build a node from named arguments in one call
    pub fn element<I, N, V>(&self, type_name: &str, args: I) -> Result<DocumentNode>
    where
        I: IntoIterator<Item = (N, V)>,
        N: AsRef<str>,
        V: Into<ArgValue>,
    {
        let mut helper = self.helper(type_name)?;
        for (name, value) in args {
            helper = helper.arg(name.as_ref(), value)?;
        }
        Ok(helper.build())
    }

    /// Build a leaf node
    pub fn leaf(&self, type_name: &str, value: impl Into<LeafValue>) -> Result<DocumentNode> {
        let decl = self.schema.resolve(type_name)?;
        if decl.leaf.is_none() {
            return Err(Error::invalid_argument(
                type_name,
                type_name,
                "element type does not hold a value",
            ));
        }
        Ok(DocumentNode::leaf(type_name, value))
    }

    /// Build `parent` holding one `row_type` child per table row
    pub fn table(&self, parent: &str, row_type: &str, table: &RecordTable) -> Result<DocumentNode> {
        let mut rows = Vec::with_capacity(table.rows.len());
        for (index, cells) in table.rows.iter().enumerate() {
            if cells.len() > table.columns.len() {
                return Err(Error::invalid_argument(
                    row_type,
                    parent,
                    format!(
                        "row {} has {} cells but the table has {} columns",
                        index + 1,
                        cells.len(),
                        table.columns.len()
                    ),
                ));
            }

            let mut row = self.helper(row_type)?;
            for (column, cell) in table.columns.iter().zip(cells) {
                if cell.trim().is_empty() {
                    continue;
                }
                row = row.arg(column, cell.as_str())?;
            }
            rows.push(ArgValue::Node(row.build()));
        }

        tracing::debug!(parent, row_type, rows = rows.len(), "built record table");
        Ok(self.helper(parent)?.arg(row_type, ArgValue::Many(rows))?.build())
    }
}

/// Argument collector for one element type
#[derive(Debug, Clone)]
pub struct ElementHelper<'s> {
    schema: &'s SchemaModel,
    decl: &'s SchemaElementType,
    /// One slot per declared child, in schema order
    slots: Vec<Vec<DocumentNode>>,
    attributes: IndexMap<String, String>,
    value: Option<LeafValue>,
}

impl<'s> ElementHelper<'s> {
    fn new(schema: &'s SchemaModel, decl: &'s SchemaElementType) -> Self {
        Self {
            schema,
            decl,
            slots: vec![Vec::new(); decl.children.len()],
            attributes: IndexMap::new(),
            value: None,
        }
    }

    /// Element type being built
    pub fn type_name(&self) -> &str {
        &self.decl.name
    }

    /// Supply a named argument
    ///
    /// Fails with [`Error::UnknownChildOrAttribute`] when the name is neither
    /// a declared child nor a declared attribute, and with
    /// [`Error::InvalidArgument`] when the value cannot fill the slot.
    pub fn arg(mut self, name: &str, value: impl Into<ArgValue>) -> Result<Self> {
        let value = value.into();

        if let Some(position) = self.decl.child_position(name) {
            let child = &self.decl.children[position];
            let nodes = self.child_nodes(child, value)?;
            if !child.cardinality.is_repeatable() && self.slots[position].len() + nodes.len() > 1 {
                return Err(self.reject(name, "child may appear at most once"));
            }
            self.slots[position].extend(nodes);
            return Ok(self);
        }

        if self.decl.attribute(name).is_some() {
            return match value {
                ArgValue::Leaf(v) => {
                    self.attributes.insert(name.to_string(), v.to_text());
                    Ok(self)
                }
                _ => Err(self.reject(name, "attribute values must be plain values")),
            };
        }

        tracing::debug!(argument = name, element = %self.decl.name, "rejected unknown argument");
        Err(Error::unknown_child(name, self.decl.name.as_str()))
    }

    /// Supply several named arguments
    pub fn args<I, N, V>(mut self, args: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, V)>,
        N: AsRef<str>,
        V: Into<ArgValue>,
    {
        for (name, value) in args {
            self = self.arg(name.as_ref(), value)?;
        }
        Ok(self)
    }

    /// Set the node's own value
    pub fn value(mut self, value: impl Into<LeafValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Produce the node
    pub fn build(self) -> DocumentNode {
        let mut node = DocumentNode::new(self.decl.name.as_str());
        node.children = self.slots.into_iter().flatten().collect();
        node.attributes = self.attributes;
        node.value = self.value;
        node
    }

    fn child_nodes(&self, child: &ChildDecl, value: ArgValue) -> Result<Vec<DocumentNode>> {
        match value {
            ArgValue::Many(values) => {
                if !child.cardinality.is_repeatable() {
                    return Err(self.reject(&child.name, "a sequence was given for a child that appears at most once"));
                }
                values
                    .into_iter()
                    .map(|v| match v {
                        ArgValue::Many(_) => Err(self.reject(&child.name, "nested sequences are not allowed")),
                        single => self.child_node(child, single),
                    })
                    .collect()
            }
            single => Ok(vec![self.child_node(child, single)?]),
        }
    }

    fn child_node(&self, child: &ChildDecl, value: ArgValue) -> Result<DocumentNode> {
        match value {
            ArgValue::Node(node) if node.name == child.name => Ok(node),
            ArgValue::Node(node) => Err(self.reject(
                &child.name,
                format!("expected a '{}' node, got '{}'", child.name, node.name),
            )),
            ArgValue::Leaf(v) => {
                let holds_value = self
                    .schema
                    .get(&child.name)
                    .map_or(false, |t| t.leaf.is_some());
                if holds_value {
                    Ok(DocumentNode::leaf(child.name.as_str(), v))
                } else {
                    Err(self.reject(&child.name, "element type does not hold a value"))
                }
            }
            ArgValue::Many(_) => Err(self.reject(&child.name, "nested sequences are not allowed")),
        }
    }

    fn reject(&self, name: &str, reason: impl Into<String>) -> Error {
        let reason = reason.into();
        tracing::debug!(argument = name, element = %self.decl.name, %reason, "rejected argument");
        Error::invalid_argument(name, self.decl.name.as_str(), reason)
    }
}
