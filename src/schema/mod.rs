//! Schema model
//!
//! An immutable description of which element types exist, which children each
//! may contain and how often, which attributes it takes and what kind of leaf
//! value it holds. A model is built once, through [`SchemaBuilder`] or by
//! loading an XSD document, and then shared read-only by the builder helpers,
//! the validator and the serializer.

pub mod builder;
pub mod cardinality;
pub mod leaf;
pub mod parsing;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::namespaces::NamespaceBinding;

pub use builder::{ElementTypeBuilder, SchemaBuilder};
pub use cardinality::Cardinality;
pub use leaf::{LeafKind, LeafMismatch};

/// An allowed child of an element type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChildDecl {
    /// Child element type name
    pub name: String,
    /// How often the child may appear
    pub cardinality: Cardinality,
}

impl ChildDecl {
    /// Create a new child declaration
    pub fn new(name: impl Into<String>, cardinality: Cardinality) -> Self {
        Self {
            name: name.into(),
            cardinality,
        }
    }
}

/// A declared attribute of an element type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeDecl {
    /// Attribute name
    pub name: String,
    /// Whether the attribute must be present
    pub required: bool,
}

/// A named element type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaElementType {
    /// Unique type name, also the element tag
    pub name: String,
    /// Allowed children in declared order
    pub children: Vec<ChildDecl>,
    /// Leaf value kind, if the element carries a value
    pub leaf: Option<LeafKind>,
    /// Declared attributes
    pub attributes: Vec<AttributeDecl>,
    /// Whether the type may contain itself
    pub recursive: bool,
}

impl SchemaElementType {
    /// Create an empty element type
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            leaf: None,
            attributes: Vec::new(),
            recursive: false,
        }
    }

    /// Look up an allowed child by name
    pub fn child(&self, name: &str) -> Option<&ChildDecl> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Position of a child in the declared order
    pub fn child_position(&self, name: &str) -> Option<usize> {
        self.children.iter().position(|c| c.name == name)
    }

    /// Look up a declared attribute by name
    pub fn attribute(&self, name: &str) -> Option<&AttributeDecl> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Whether the type has both a leaf kind and children
    pub fn is_mixed(&self) -> bool {
        self.leaf.is_some() && !self.children.is_empty()
    }

    /// Whether the type holds a value and nothing else
    pub fn is_leaf_only(&self) -> bool {
        self.leaf.is_some() && self.children.is_empty()
    }
}

/// Immutable schema model
#[derive(Debug, Clone)]
pub struct SchemaModel {
    root: String,
    types: IndexMap<String, SchemaElementType>,
    namespace: Option<NamespaceBinding>,
    version: Option<String>,
    schema_location: Option<String>,
}

impl SchemaModel {
    pub(crate) fn from_parts(
        root: String,
        types: IndexMap<String, SchemaElementType>,
        namespace: Option<NamespaceBinding>,
        version: Option<String>,
        schema_location: Option<String>,
    ) -> Self {
        Self {
            root,
            types,
            namespace,
            version,
            schema_location,
        }
    }

    /// Resolve an element type by name
    pub fn resolve(&self, type_name: &str) -> Result<&SchemaElementType> {
        self.types
            .get(type_name)
            .ok_or_else(|| Error::UnknownType(type_name.to_string()))
    }

    /// Allowed children of a type, in declared order
    pub fn allowed_children(&self, type_name: &str) -> Result<&[ChildDecl]> {
        Ok(&self.resolve(type_name)?.children)
    }

    /// Leaf kind of a type, if it carries a value
    pub fn leaf_kind(&self, type_name: &str) -> Result<Option<&LeafKind>> {
        Ok(self.resolve(type_name)?.leaf.as_ref())
    }

    /// Look up a type without failing
    pub fn get(&self, type_name: &str) -> Option<&SchemaElementType> {
        self.types.get(type_name)
    }

    /// Whether a type is registered
    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    /// Name of the root element type
    pub fn root(&self) -> &str {
        &self.root
    }

    /// The root element type
    pub fn root_type(&self) -> &SchemaElementType {
        // `SchemaBuilder::build` guarantees the root is registered
        &self.types[self.root.as_str()]
    }

    /// Namespace binding used on the root tag
    pub fn namespace(&self) -> Option<&NamespaceBinding> {
        self.namespace.as_ref()
    }

    /// Target namespace URI
    pub fn target_namespace(&self) -> Option<&str> {
        self.namespace.as_ref().map(|ns| ns.uri.as_str())
    }

    /// Prefix bound to the target namespace
    pub fn prefix(&self) -> Option<&str> {
        self.namespace.as_ref().and_then(|ns| ns.prefix.as_deref())
    }

    /// Schema version identifier
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Value emitted as `xsi:schemaLocation`
    pub fn schema_location(&self) -> Option<&str> {
        self.schema_location.as_deref()
    }

    /// Return the model with a different `xsi:schemaLocation` value
    pub fn with_schema_location(mut self, location: impl Into<String>) -> Self {
        self.schema_location = Some(location.into());
        self
    }

    /// All element types in declaration order
    pub fn types(&self) -> impl Iterator<Item = &SchemaElementType> {
        self.types.values()
    }

    /// Number of element types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the model has no types (never true for a built model)
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
