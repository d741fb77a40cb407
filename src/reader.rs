//! Reading XML documents back into trees
//!
//! The reader is schema-agnostic: element prefixes are dropped so node names
//! are plain type names, namespace declarations and `xsi:*` attributes are
//! discarded, and every leaf value comes back as text.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::document::{DocumentNode, LeafValue};
use crate::error::{Error, Result};
use crate::limits::Limits;
use crate::namespaces::is_namespace_declaration;

/// Parse an XML document with default limits
pub fn read_document(xml: &str) -> Result<DocumentNode> {
    read_document_with_limits(xml, &Limits::default())
}

/// Parse an XML document
pub fn read_document_with_limits(xml: &str, limits: &Limits) -> Result<DocumentNode> {
    limits.check_input_size(xml.len())?;

    let mut reader = Reader::from_str(xml);

    let mut stack: Vec<Frame> = Vec::new();
    let mut root: Option<DocumentNode> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                limits.check_depth(stack.len() + 1)?;
                let node = start_node(&e, limits)?;
                if stack.is_empty() && root.is_some() {
                    return Err(Error::Xml(format!("second root element '{}'", node.name)));
                }
                if let Some(parent) = stack.last_mut() {
                    parent.flush();
                }
                stack.push(Frame::new(node));
            }
            Ok(Event::Empty(e)) => {
                limits.check_depth(stack.len() + 1)?;
                let node = start_node(&e, limits)?;
                if let Some(parent) = stack.last_mut() {
                    parent.flush();
                }
                attach(&mut stack, &mut root, node)?;
            }
            Ok(Event::End(_)) => {
                let frame = match stack.pop() {
                    Some(frame) => frame,
                    None => return Err(Error::Xml("unbalanced end tag".to_string())),
                };
                attach(&mut stack, &mut root, frame.finish())?;
            }
            Ok(Event::Text(e)) => {
                if let Some(frame) = stack.last_mut() {
                    let unescaped = e
                        .unescape()
                        .map_err(|e| Error::Xml(format!("Failed to unescape text: {}", e)))?;
                    frame.segment.push_str(&unescaped);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(frame) = stack.last_mut() {
                    let content = std::str::from_utf8(&e)
                        .map_err(|e| Error::Xml(format!("Invalid CDATA content: {}", e)))?;
                    frame.segment.push_str(content);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::Xml(format!(
                    "Error parsing XML at position {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
            _ => {} // declarations, comments, processing instructions
        }
    }

    if let Some(open) = stack.last() {
        return Err(Error::Xml(format!("unclosed element '{}'", open.node.name)));
    }

    let root = root.ok_or_else(|| Error::Xml("document has no root element".to_string()))?;
    tracing::debug!(root = %root.name, "read document");
    Ok(root)
}

/// An open element with the text read so far
///
/// Text between two tags is one segment. Segments holding only whitespace are
/// indentation and are dropped; the others are kept verbatim.
struct Frame {
    node: DocumentNode,
    text: String,
    segment: String,
}

impl Frame {
    fn new(node: DocumentNode) -> Self {
        Self {
            node,
            text: String::new(),
            segment: String::new(),
        }
    }

    fn flush(&mut self) {
        if !self.segment.trim().is_empty() {
            self.text.push_str(&self.segment);
        }
        self.segment.clear();
    }

    fn finish(mut self) -> DocumentNode {
        self.flush();
        if !self.text.is_empty() {
            self.node.value = Some(LeafValue::Text(self.text));
        }
        self.node
    }
}

fn attach(stack: &mut [Frame], root: &mut Option<DocumentNode>, node: DocumentNode) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.node.push_child(node),
        None if root.is_some() => {
            return Err(Error::Xml(format!("second root element '{}'", node.name)))
        }
        None => *root = Some(node),
    }
    Ok(())
}

fn start_node(start: &BytesStart<'_>, limits: &Limits) -> Result<DocumentNode> {
    let local = start.local_name();
    let name = std::str::from_utf8(local.as_ref())
        .map_err(|e| Error::Xml(format!("Invalid element name: {}", e)))?;
    let mut node = DocumentNode::new(name);

    for attr_result in start.attributes() {
        let attr = attr_result.map_err(|e| Error::Xml(format!("Failed to parse attribute: {}", e)))?;

        let attr_name = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| Error::Xml(format!("Invalid attribute name: {}", e)))?;
        if is_namespace_declaration(attr_name) || attr_name.starts_with("xsi:") {
            continue;
        }

        let attr_value = attr
            .unescape_value()
            .map_err(|e| Error::Xml(format!("Failed to unescape attribute value: {}", e)))?;
        node.set_attribute(attr_name, attr_value.into_owned());
    }

    limits.check_attributes(node.attributes.len())?;
    Ok(node)
}
