//! JSON conversion
//!
//! A BadgerFish-style mapping between document trees and JSON values:
//!
//! - the root is a single-key object `{ "name": body }`
//! - attributes are `"@name"` keys, the node's own value sits under `"$"`
//! - a node with only a value is the bare value, an empty node is `null`
//! - repeated children become arrays
//!
//! Children are grouped by name, so the relative order of differently named
//! siblings is not preserved. The serializer reorders them by schema anyway.

use serde_json::{Map, Number, Value as JsonValue};

use crate::document::{DocumentNode, LeafValue};
use crate::error::{Error, Result};
use crate::schema::leaf::parse_number;

const ATTR_PREFIX: &str = "@";
const TEXT_KEY: &str = "$";

/// Convert a tree to JSON
pub fn to_json(root: &DocumentNode) -> JsonValue {
    let mut object = Map::new();
    object.insert(root.name.clone(), encode_body(root));
    JsonValue::Object(object)
}

/// Convert a tree to JSON text
pub fn to_json_string(root: &DocumentNode, pretty: bool) -> Result<String> {
    let value = to_json(root);
    let text = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };
    text.map_err(|e| Error::Json(e.to_string()))
}

/// Convert JSON back to a tree
pub fn from_json(value: &JsonValue) -> Result<DocumentNode> {
    match value {
        JsonValue::Object(object) if object.len() == 1 => {
            let (name, body) = object
                .iter()
                .next()
                .ok_or_else(|| Error::Json("empty root object".to_string()))?;
            decode_node(name, body)
        }
        _ => Err(Error::Json(
            "expected an object with exactly one key naming the root element".to_string(),
        )),
    }
}

fn encode_value(value: &LeafValue) -> JsonValue {
    match value {
        LeafValue::Text(s) => JsonValue::String(s.clone()),
        LeafValue::Number(n) => match n.to_string().parse::<Number>() {
            Ok(number) => JsonValue::Number(number),
            Err(_) => JsonValue::String(n.to_string()),
        },
    }
}

fn encode_body(node: &DocumentNode) -> JsonValue {
    if node.attributes.is_empty() && node.children.is_empty() {
        return node.value.as_ref().map_or(JsonValue::Null, encode_value);
    }

    let mut object = Map::new();
    for (name, value) in &node.attributes {
        object.insert(format!("{}{}", ATTR_PREFIX, name), JsonValue::String(value.clone()));
    }
    if let Some(value) = &node.value {
        object.insert(TEXT_KEY.to_string(), encode_value(value));
    }

    for child in &node.children {
        if object.contains_key(&child.name) {
            continue;
        }
        let mut group: Vec<JsonValue> = node.find_children(&child.name).map(encode_body).collect();
        let encoded = if group.len() == 1 {
            group.remove(0)
        } else {
            JsonValue::Array(group)
        };
        object.insert(child.name.clone(), encoded);
    }

    JsonValue::Object(object)
}

fn decode_scalar(name: &str, value: &JsonValue) -> Result<LeafValue> {
    match value {
        JsonValue::String(s) => Ok(LeafValue::Text(s.clone())),
        JsonValue::Number(n) => {
            let text = n.to_string();
            Ok(parse_number(&text).map_or(LeafValue::Text(text), LeafValue::Number))
        }
        JsonValue::Bool(b) => Ok(LeafValue::Text(b.to_string())),
        _ => Err(Error::Json(format!("'{}' must be a string, number or boolean", name))),
    }
}

fn decode_node(name: &str, body: &JsonValue) -> Result<DocumentNode> {
    let mut node = DocumentNode::new(name);

    match body {
        JsonValue::Null => {}
        JsonValue::Array(_) => {
            return Err(Error::Json(format!("'{}': nested arrays are not supported", name)))
        }
        JsonValue::Object(object) => {
            for (key, value) in object {
                if key == TEXT_KEY {
                    node.value = Some(decode_scalar(key, value)?);
                } else if let Some(attr) = key.strip_prefix(ATTR_PREFIX) {
                    node.set_attribute(attr, decode_scalar(key, value)?.to_text());
                } else if let JsonValue::Array(items) = value {
                    for item in items {
                        node.push_child(decode_node(key, item)?);
                    }
                } else {
                    node.push_child(decode_node(key, value)?);
                }
            }
        }
        scalar => node.value = Some(decode_scalar(name, scalar)?),
    }

    Ok(node)
}
