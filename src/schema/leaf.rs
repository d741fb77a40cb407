//! Leaf value kinds
//!
//! The terminal data an element may carry: free text, a number, one of an
//! enumerated set of values, or a date following a format pattern.

use std::fmt;
use std::str::FromStr;

use chrono::format::{self, Item, Parsed, StrftimeItems};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{ParseError, Result};

/// EML-style date pattern tokens
static DATE_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"YYYY|YY|MM|DD|hh|mm|ss").unwrap());

/// Decimal literal syntax, for values too wide for `Decimal`
static NUMBER_SYNTAX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?$").unwrap());

/// Kind of value a leaf element holds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum LeafKind {
    /// Any text
    Text,
    /// A decimal number, optionally in scientific notation
    Numeric,
    /// One of a fixed set of values
    Enum(Vec<String>),
    /// A date/time matching a strftime-style pattern
    DateFormat(String),
}

/// Why a value does not fit its leaf kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeafMismatch {
    /// The value is not of the declared type at all
    Type(String),
    /// The value has the right type but the wrong form
    Format(String),
}

impl LeafKind {
    /// Build an enumeration kind
    pub fn enumeration<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        LeafKind::Enum(values.into_iter().map(Into::into).collect())
    }

    /// Build a date-format kind
    ///
    /// Accepts strftime patterns (`%Y-%m-%d`) as well as the `YYYY-MM-DD`,
    /// `hh:mm:ss` style used in metadata records.
    pub fn date_format(pattern: &str) -> Result<Self> {
        let strftime = if pattern.contains('%') {
            pattern.to_string()
        } else {
            DATE_TOKEN
                .replace_all(pattern, |caps: &regex::Captures<'_>| match &caps[0] {
                    "YYYY" => "%Y",
                    "YY" => "%y",
                    "MM" => "%m",
                    "DD" => "%d",
                    "hh" => "%H",
                    "mm" => "%M",
                    _ => "%S",
                })
                .into_owned()
        };

        if strftime.is_empty() || StrftimeItems::new(&strftime).any(|item| matches!(item, Item::Error)) {
            return Err(ParseError::new(format!("invalid date format pattern '{}'", pattern)).into());
        }

        Ok(LeafKind::DateFormat(strftime))
    }

    /// Check a value against this kind
    pub fn check(&self, value: &str) -> std::result::Result<(), LeafMismatch> {
        match self {
            LeafKind::Text => Ok(()),
            LeafKind::Numeric => {
                if is_number(value) {
                    Ok(())
                } else {
                    Err(LeafMismatch::Type(format!("'{}' is not a number", value)))
                }
            }
            LeafKind::Enum(values) => {
                if values.iter().any(|v| v == value) {
                    Ok(())
                } else {
                    Err(LeafMismatch::Format(format!(
                        "'{}' is not one of [{}]",
                        value,
                        values.join(", ")
                    )))
                }
            }
            LeafKind::DateFormat(pattern) => {
                if matches_date_format(value, pattern) {
                    Ok(())
                } else {
                    Err(LeafMismatch::Format(format!(
                        "'{}' does not match date format '{}'",
                        value, pattern
                    )))
                }
            }
        }
    }
}

impl fmt::Display for LeafKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeafKind::Text => write!(f, "text"),
            LeafKind::Numeric => write!(f, "numeric"),
            LeafKind::Enum(values) => write!(f, "enum{{{}}}", values.join(",")),
            LeafKind::DateFormat(pattern) => write!(f, "date-format({})", pattern),
        }
    }
}

/// Whether a value is a number, however many digits it has
pub fn is_number(value: &str) -> bool {
    parse_number(value).is_some() || NUMBER_SYNTAX.is_match(value.trim())
}

/// Parse a numeric leaf value
pub fn parse_number(value: &str) -> Option<Decimal> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .ok()
}

fn matches_date_format(value: &str, pattern: &str) -> bool {
    if matches_pattern(value, pattern) {
        return true;
    }
    // Times ending in seconds may carry fractional seconds and a zone offset
    pattern.ends_with("%S")
        && ["%.f", "%.f%#z"]
            .iter()
            .any(|suffix| matches_pattern(value, &format!("{}{}", pattern, suffix)))
}

fn matches_pattern(value: &str, pattern: &str) -> bool {
    let mut parsed = Parsed::new();
    if format::parse(&mut parsed, value, StrftimeItems::new(pattern)).is_err() {
        return false;
    }

    // Day-level patterns must also name a real calendar day
    if pattern.contains("%d") || pattern.contains("%e") {
        parsed.to_naive_date().is_ok()
    } else {
        true
    }
}
