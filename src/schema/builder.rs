//! Programmatic schema construction
//!
//! [`SchemaBuilder`] is the only way to obtain a [`SchemaModel`]; the XSD
//! loader goes through it too. `build` checks every structural invariant of
//! the model so the rest of the crate can rely on them.

use std::collections::HashSet;

use indexmap::IndexMap;

use super::{AttributeDecl, Cardinality, ChildDecl, LeafKind, SchemaElementType, SchemaModel};
use crate::error::{ParseError, Result};
use crate::limits::Limits;
use crate::names::{is_valid_ncname, validate_attribute_name, validate_type_name};
use crate::namespaces::NamespaceBinding;

/// Builder for a single element type
#[derive(Debug)]
pub struct ElementTypeBuilder {
    decl: SchemaElementType,
}

impl ElementTypeBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            decl: SchemaElementType::new(name),
        }
    }

    /// Append an allowed child
    pub fn child(mut self, name: impl Into<String>, cardinality: Cardinality) -> Self {
        self.decl.children.push(ChildDecl::new(name, cardinality));
        self
    }

    /// Set the leaf kind
    pub fn leaf(mut self, kind: LeafKind) -> Self {
        self.decl.leaf = Some(kind);
        self
    }

    /// Declare an attribute
    pub fn attribute(mut self, name: impl Into<String>, required: bool) -> Self {
        self.decl.attributes.push(AttributeDecl {
            name: name.into(),
            required,
        });
        self
    }

    /// Allow the type to contain itself
    pub fn recursive(mut self) -> Self {
        self.decl.recursive = true;
        self
    }
}

/// Builder for a [`SchemaModel`]
#[derive(Debug)]
pub struct SchemaBuilder {
    root: String,
    types: IndexMap<String, SchemaElementType>,
    namespace: Option<NamespaceBinding>,
    version: Option<String>,
    schema_location: Option<String>,
    limits: Limits,
    errors: Vec<ParseError>,
}

impl SchemaBuilder {
    /// Start a schema whose documents are rooted at `root`
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            types: IndexMap::new(),
            namespace: None,
            version: None,
            schema_location: None,
            limits: Limits::default(),
            errors: Vec::new(),
        }
    }

    /// Bind the target namespace to a prefix
    pub fn namespace(mut self, prefix: impl Into<String>, uri: impl Into<String>) -> Self {
        self.namespace = Some(NamespaceBinding::prefixed(prefix, uri));
        self
    }

    /// Use the target namespace as the default namespace
    pub fn default_namespace(mut self, uri: impl Into<String>) -> Self {
        self.namespace = Some(NamespaceBinding::default_namespace(uri));
        self
    }

    /// Set the version identifier
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the `xsi:schemaLocation` value emitted on the root tag
    pub fn schema_location(mut self, location: impl Into<String>) -> Self {
        self.schema_location = Some(location.into());
        self
    }

    /// Set resource limits
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Declare an element type
    pub fn element<F>(self, name: impl Into<String>, define: F) -> Self
    where
        F: FnOnce(ElementTypeBuilder) -> ElementTypeBuilder,
    {
        let decl = define(ElementTypeBuilder::new(name)).decl;
        self.add_type(decl)
    }

    /// Declare a leaf-only element type
    pub fn leaf(self, name: impl Into<String>, kind: LeafKind) -> Self {
        self.element(name, |t| t.leaf(kind))
    }

    /// Add a fully formed element type
    ///
    /// Re-adding an identical declaration is a no-op; a different declaration
    /// under an existing name is an error reported by [`build`](Self::build).
    pub fn add_type(mut self, decl: SchemaElementType) -> Self {
        match self.types.get(&decl.name) {
            Some(existing) if existing == &decl => {}
            Some(_) => self.errors.push(
                ParseError::new(format!("conflicting declarations for element '{}'", decl.name))
                    .with_location(decl.name.clone()),
            ),
            None => {
                self.types.insert(decl.name.clone(), decl);
            }
        }
        self
    }

    /// Whether a type of this name has been declared
    pub fn has_type(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Validate and freeze the schema
    pub fn build(self) -> Result<SchemaModel> {
        if let Some(err) = self.errors.into_iter().next() {
            return Err(err.into());
        }

        self.limits.check_schema_types(self.types.len())?;

        if !self.types.contains_key(&self.root) {
            return Err(ParseError::new(format!("root element '{}' is not declared", self.root)).into());
        }

        if let Some(prefix) = self.namespace.as_ref().and_then(|ns| ns.prefix.as_deref()) {
            if !is_valid_ncname(prefix) {
                return Err(ParseError::new(format!("invalid namespace prefix '{}'", prefix)).into());
            }
        }

        for decl in self.types.values() {
            check_type(decl, &self.types)?;
        }
        check_acyclic(&self.types)?;

        tracing::debug!(root = %self.root, types = self.types.len(), "built schema model");

        Ok(SchemaModel::from_parts(
            self.root,
            self.types,
            self.namespace,
            self.version,
            self.schema_location,
        ))
    }
}

fn check_type(decl: &SchemaElementType, types: &IndexMap<String, SchemaElementType>) -> Result<()> {
    validate_type_name(&decl.name)?;
    let located = |message: String| ParseError::new(message).with_location(decl.name.clone());

    let mut seen = HashSet::new();
    for child in &decl.children {
        if !seen.insert(child.name.as_str()) {
            return Err(located(format!("child '{}' is declared twice", child.name)).into());
        }
        if !types.contains_key(&child.name) {
            return Err(located(format!("child '{}' is not a declared element", child.name)).into());
        }
        if child.name == decl.name && !decl.recursive {
            return Err(located(format!(
                "element '{}' contains itself but is not marked recursive",
                decl.name
            ))
            .into());
        }
    }

    let mut seen = HashSet::new();
    for attr in &decl.attributes {
        validate_attribute_name(&attr.name)?;
        if !seen.insert(attr.name.as_str()) {
            return Err(located(format!("attribute '{}' is declared twice", attr.name)).into());
        }
    }

    match &decl.leaf {
        Some(LeafKind::Enum(values)) if values.is_empty() => {
            Err(located("enumeration has no values".to_string()).into())
        }
        Some(LeafKind::DateFormat(pattern)) => LeafKind::date_format(pattern).map(|_| ()),
        _ => Ok(()),
    }
}

/// Reject cycles other than direct self-references
fn check_acyclic(types: &IndexMap<String, SchemaElementType>) -> Result<()> {
    #[derive(Clone, Copy, PartialEq)]
    enum Mark {
        Unvisited,
        InProgress,
        Done,
    }

    let mut marks = vec![Mark::Unvisited; types.len()];

    for start in 0..types.len() {
        if marks[start] != Mark::Unvisited {
            continue;
        }

        // Iterative DFS: (type index, next child position)
        let mut stack = vec![(start, 0usize)];
        marks[start] = Mark::InProgress;

        while let Some(frame) = stack.last_mut() {
            let (index, position) = *frame;
            frame.1 += 1;

            let Some((name, decl)) = types.get_index(index) else {
                break;
            };
            let Some(child) = decl.children.get(position) else {
                marks[index] = Mark::Done;
                stack.pop();
                continue;
            };

            if &child.name == name {
                continue;
            }
            let child_index = match types.get_index_of(&child.name) {
                Some(i) => i,
                None => continue,
            };
            match marks[child_index] {
                Mark::InProgress => {
                    return Err(ParseError::new(format!(
                        "element '{}' is part of a containment cycle through '{}'",
                        child.name, name
                    ))
                    .with_location(name.clone())
                    .into());
                }
                Mark::Unvisited => {
                    marks[child_index] = Mark::InProgress;
                    stack.push((child_index, 0));
                }
                Mark::Done => {}
            }
        }
    }

    Ok(())
}
