//! Tree validation
//!
//! Depth-first walk in document order. For each node of a known type the
//! checks run in a fixed order: attributes, the node's own value, unexpected
//! children, then missing and over-repeated children in schema order. Every
//! child is then visited whether or not it was allowed.

use super::context::ValidationContext;
use super::IssueKind;
use crate::document::DocumentNode;
use crate::schema::{LeafMismatch, SchemaElementType, SchemaModel};

/// Validate a tree from its root
pub fn validate_root(root: &DocumentNode, schema: &SchemaModel, context: &mut ValidationContext) {
    context.enter(&root.name);
    if root.name != schema.root() {
        context.report(
            IssueKind::UnexpectedElement {
                element: root.name.clone(),
            },
            format!(
                "root element '{}' is not the schema root '{}'",
                root.name,
                schema.root()
            ),
        );
    }
    validate_node(root, schema, context);
    context.exit();
}

/// Validate a node already entered in the context, then its subtree
pub fn validate_node(node: &DocumentNode, schema: &SchemaModel, context: &mut ValidationContext) {
    if context.is_max_depth_exceeded() {
        if !context.truncated {
            context.truncated = true;
            let max_depth = context.max_depth.unwrap_or_default();
            context.report(
                IssueKind::DepthLimitExceeded { max_depth },
                format!("nested deeper than {} levels, content below was not checked", max_depth),
            );
        }
        return;
    }

    if let Some(decl) = schema.get(&node.name) {
        validate_attributes(node, decl, context);
        validate_leaf(node, decl, context);
        validate_children(node, decl, context);
    }

    for child in &node.children {
        context.enter(&child.name);
        validate_node(child, schema, context);
        context.exit();
    }
}

fn validate_attributes(node: &DocumentNode, decl: &SchemaElementType, context: &mut ValidationContext) {
    for name in node.attributes.keys() {
        if decl.attribute(name).is_none() {
            context.report(
                IssueKind::UnexpectedAttribute {
                    attribute: name.clone(),
                },
                format!("attribute '{}' is not allowed on '{}'", name, node.name),
            );
        }
    }

    for attr in decl.attributes.iter().filter(|a| a.required) {
        if !node.attributes.contains_key(&attr.name) {
            context.report(
                IssueKind::MissingRequiredAttribute {
                    attribute: attr.name.clone(),
                },
                format!("'{}' is missing required attribute '{}'", node.name, attr.name),
            );
        }
    }
}

fn validate_leaf(node: &DocumentNode, decl: &SchemaElementType, context: &mut ValidationContext) {
    let kind = match &decl.leaf {
        Some(kind) => kind,
        None => {
            if let Some(value) = &node.value {
                context.report(
                    IssueKind::BadLeafType,
                    format!("'{}' does not hold a value but has '{}'", node.name, value),
                );
            }
            return;
        }
    };

    let text = match &node.value {
        Some(value) => value.to_text(),
        None if decl.is_leaf_only() => String::new(),
        None => return,
    };

    match kind.check(&text) {
        Ok(()) => {}
        Err(LeafMismatch::Type(reason)) => {
            context.report(IssueKind::BadLeafType, format!("'{}': {}", node.name, reason))
        }
        Err(LeafMismatch::Format(reason)) => {
            context.report(IssueKind::BadLeafFormat, format!("'{}': {}", node.name, reason))
        }
    }
}

fn validate_children(node: &DocumentNode, decl: &SchemaElementType, context: &mut ValidationContext) {
    for child in &node.children {
        if decl.child(&child.name).is_none() {
            context.report_at(
                &child.name,
                IssueKind::UnexpectedElement {
                    element: child.name.clone(),
                },
                format!("element '{}' is not allowed in '{}'", child.name, node.name),
            );
        }
    }

    for expected in &decl.children {
        let count = node.find_children(&expected.name).count();
        if expected.cardinality.is_missing(count) {
            context.report(
                IssueKind::MissingRequiredChild {
                    child: expected.name.clone(),
                },
                format!("'{}' is missing required child '{}'", node.name, expected.name),
            );
        } else if expected.cardinality.is_exceeded(count) {
            context.report(
                IssueKind::CardinalityViolation {
                    child: expected.name.clone(),
                    count,
                },
                format!(
                    "'{}' may contain at most one '{}', found {}",
                    node.name, expected.name, count
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Cardinality, LeafKind, SchemaBuilder};
    use pretty_assertions::assert_eq;

    fn schema() -> SchemaModel {
        SchemaBuilder::new("individualName")
            .element("individualName", |t| {
                t.child("givenName", Cardinality::ZeroOrMore)
                    .child("surName", Cardinality::Required)
                    .attribute("lang", false)
            })
            .leaf("givenName", LeafKind::Text)
            .leaf("surName", LeafKind::Text)
            .build()
            .unwrap()
    }

    fn codes(context: &ValidationContext) -> Vec<&'static str> {
        context.issues.iter().map(|i| i.kind.code()).collect()
    }

    #[test]
    fn test_fixed_order_at_one_node() {
        let schema = schema();
        let node = DocumentNode::new("individualName")
            .with_attribute("color", "blue")
            .with_value("stray")
            .with_child(DocumentNode::leaf("nickname", "JC"))
            .with_child(DocumentNode::leaf("surName", "Clark"))
            .with_child(DocumentNode::leaf("surName", "Smith"));

        let mut context = ValidationContext::new();
        validate_root(&node, &schema, &mut context);
        assert_eq!(
            codes(&context),
            [
                "unexpected-attribute",
                "bad-leaf-type",
                "unexpected-element",
                "cardinality-violation"
            ]
        );
        assert_eq!(context.issues[2].path, ["individualName", "nickname"]);
        assert_eq!(context.issues[3].path, ["individualName"]);
    }

    #[test]
    fn test_wrong_root() {
        let schema = schema();
        let node = DocumentNode::leaf("surName", "Clark");
        let mut context = ValidationContext::new();
        validate_root(&node, &schema, &mut context);
        assert_eq!(codes(&context), ["unexpected-element"]);
    }

    #[test]
    fn test_unknown_nodes_are_still_visited() {
        let schema = schema();
        let node = DocumentNode::new("individualName")
            .with_child(DocumentNode::leaf("surName", "Clark"))
            .with_child(DocumentNode::new("wrapper").with_child(DocumentNode::new("surName")));

        let mut context = ValidationContext::new();
        validate_root(&node, &schema, &mut context);
        // the nested empty surName is still checked as a leaf
        assert_eq!(codes(&context), ["unexpected-element"]);
        assert_eq!(context.issues.len(), 1);

        let schema = SchemaBuilder::new("individualName")
            .element("individualName", |t| t.child("surName", Cardinality::Required))
            .leaf("surName", LeafKind::Numeric)
            .build()
            .unwrap();
        let mut context = ValidationContext::new();
        validate_root(&node, &schema, &mut context);
        assert_eq!(codes(&context), ["unexpected-element", "bad-leaf-type", "bad-leaf-type"]);
        assert_eq!(context.issues[2].path, ["individualName", "wrapper", "surName"]);
    }

    #[test]
    fn test_depth_limit_truncates() {
        let schema = schema();
        let node = DocumentNode::new("individualName").with_child(DocumentNode::new("surName"));
        let mut context = ValidationContext::new().with_max_depth(1);
        validate_root(&node, &schema, &mut context);
        assert!(context.truncated);
        assert_eq!(codes(&context), ["depth-limit-exceeded"]);
        assert_eq!(context.issues[0].path, ["individualName", "surName"]);
    }
}
