//! XML serialization
//!
//! Renders a tree as a namespaced XML document. Children of known types are
//! written in the order the schema declares them; children the schema does
//! not know keep their relative order after the declared ones. Invalid trees
//! serialize fine: the only failures are nodes that cannot be rendered at
//! all.

use std::io::Write;
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::document::DocumentNode;
use crate::error::{Error, Result};
use crate::limits::Limits;
use crate::names::{is_valid_ncname, is_valid_qname};
use crate::namespaces::{is_namespace_declaration, XSI_NAMESPACE};
use crate::schema::SchemaModel;

/// Output options
#[derive(Debug, Clone)]
pub struct SerializerConfig {
    /// Spaces per nesting level (0 = no line breaks)
    pub indent: usize,
    /// Whether to emit the `<?xml ...?>` declaration
    pub declaration: bool,
    /// Whether to emit `xsi:schemaLocation` when the schema has one
    pub include_schema_location: bool,
    /// Resource limits
    pub limits: Limits,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            declaration: true,
            include_schema_location: true,
            limits: Limits::default(),
        }
    }
}

impl SerializerConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-line output
    pub fn compact() -> Self {
        Self::default().with_indent(0)
    }

    /// Set the indentation width
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Enable or disable the XML declaration
    pub fn with_declaration(mut self, declaration: bool) -> Self {
        self.declaration = declaration;
        self
    }

    /// Enable or disable `xsi:schemaLocation`
    pub fn with_schema_location(mut self, include: bool) -> Self {
        self.include_schema_location = include;
        self
    }

    /// Set resource limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }
}

/// Serialize with default settings
pub fn serialize(root: &DocumentNode, schema: &SchemaModel) -> Result<String> {
    serialize_with(root, schema, &SerializerConfig::default())
}

/// Serialize with explicit settings
pub fn serialize_with(root: &DocumentNode, schema: &SchemaModel, config: &SerializerConfig) -> Result<String> {
    let mut writer = if config.indent > 0 {
        Writer::new_with_indent(Vec::new(), b' ', config.indent)
    } else {
        Writer::new(Vec::new())
    };

    if config.declaration {
        write_event(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    }

    let mut serializer = NodeWriter {
        writer,
        schema,
        config,
        path: Vec::new(),
    };
    serializer.write_node(root, true)?;

    let text = String::from_utf8(serializer.writer.into_inner())
        .map_err(|e| Error::Xml(format!("serializer produced invalid UTF-8: {}", e)))?;
    tracing::debug!(root = %root.name, bytes = text.len(), "serialized document");
    Ok(text)
}

/// Serialize with default settings and write the result to a file
pub fn write_document(root: &DocumentNode, schema: &SchemaModel, path: impl AsRef<Path>) -> Result<()> {
    let text = serialize(root, schema)?;
    std::fs::write(path.as_ref(), text.as_bytes())?;
    tracing::info!(path = %path.as_ref().display(), "wrote document");
    Ok(())
}

fn write_event<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| Error::Xml(format!("Failed to write XML: {}", e)))
}

struct NodeWriter<'a> {
    writer: Writer<Vec<u8>>,
    schema: &'a SchemaModel,
    config: &'a SerializerConfig,
    path: Vec<String>,
}

impl<'a> NodeWriter<'a> {
    fn malformed(&self, reason: impl Into<String>) -> Error {
        Error::MalformedNode {
            path: self.path.join("/"),
            reason: reason.into(),
        }
    }

    fn write_node(&mut self, node: &DocumentNode, is_root: bool) -> Result<()> {
        self.path.push(node.name.clone());
        self.config.limits.check_depth(self.path.len())?;

        if !is_valid_ncname(&node.name) {
            return Err(self.malformed(format!("'{}' is not a valid element name", node.name)));
        }

        let decl = self.schema.get(&node.name);
        if node.value.is_some() && !node.children.is_empty() && !decl.map_or(false, |d| d.is_mixed()) {
            return Err(self.malformed("node has both a value and children"));
        }

        let tag = match (is_root, self.schema.namespace()) {
            (true, Some(ns)) => ns.qualify(&node.name),
            _ => node.name.clone(),
        };
        let mut start = BytesStart::new(tag.as_str());

        if is_root {
            if let Some(ns) = self.schema.namespace() {
                start.push_attribute((ns.attribute_name().as_str(), ns.uri.as_str()));
            }
            if let (true, Some(location)) = (self.config.include_schema_location, self.schema.schema_location()) {
                start.push_attribute(("xmlns:xsi", XSI_NAMESPACE));
                start.push_attribute(("xsi:schemaLocation", location));
            }
        }

        for (name, value) in &node.attributes {
            if is_root && is_namespace_declaration(name) {
                continue;
            }
            if !is_valid_qname(name) {
                return Err(self.malformed(format!("'{}' is not a valid attribute name", name)));
            }
            start.push_attribute((name.as_str(), value.as_str()));
        }

        let text = node.value.as_ref().map(|v| v.to_text()).unwrap_or_default();
        if text.is_empty() && node.children.is_empty() {
            write_event(&mut self.writer, Event::Empty(start))?;
            self.path.pop();
            return Ok(());
        }

        write_event(&mut self.writer, Event::Start(start))?;
        if !text.is_empty() {
            write_event(&mut self.writer, Event::Text(BytesText::new(&text)))?;
        }

        let mut children: Vec<&DocumentNode> = node.children.iter().collect();
        if let Some(decl) = decl {
            // stable: repeated and unknown children keep their relative order
            children.sort_by_key(|c| decl.child_position(&c.name).unwrap_or(usize::MAX));
        }
        for child in children {
            self.write_node(child, false)?;
        }

        write_event(&mut self.writer, Event::End(BytesEnd::new(tag.as_str())))?;
        self.path.pop();
        Ok(())
    }
}
