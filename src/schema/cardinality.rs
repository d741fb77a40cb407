//! Child occurrence constraints
//!
//! Each allowed child of an element type carries a cardinality, the four
//! occurrence shapes a metadata schema actually uses.

use std::fmt;

use serde::Serialize;

use crate::error::{ParseError, Result};

/// How many times a child element type may or must appear under its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cardinality {
    /// Exactly once (1..1)
    Required,
    /// At most once (0..1)
    Optional,
    /// Any number of times (0..unbounded)
    ZeroOrMore,
    /// At least once (1..unbounded)
    OneOrMore,
}

impl Cardinality {
    /// Build from XSD `minOccurs` / `maxOccurs` attribute values
    ///
    /// A missing value defaults to 1. Any bounded maximum above one is treated
    /// as unbounded.
    pub fn from_occurs(min: Option<&str>, max: Option<&str>) -> Result<Self> {
        let min = match min {
            None => 1,
            Some(s) => s.trim().parse::<u32>().map_err(|_| {
                ParseError::new(format!("invalid minOccurs value '{}'", s))
            })?,
        };
        let max = match max.map(str::trim) {
            None => Some(1),
            Some("unbounded") => None,
            Some(s) => Some(s.parse::<u32>().map_err(|_| {
                ParseError::new(format!("invalid maxOccurs value '{}'", s))
            })?),
        };

        if let Some(max) = max {
            if max < min {
                return Err(ParseError::new(format!(
                    "maxOccurs {} is less than minOccurs {}",
                    max, min
                ))
                .into());
            }
            if max == 0 {
                return Err(ParseError::new("maxOccurs of 0 is not supported").into());
            }
        }

        Ok(match (min > 0, max == Some(1)) {
            (true, true) => Cardinality::Required,
            (false, true) => Cardinality::Optional,
            (false, false) => Cardinality::ZeroOrMore,
            (true, false) => Cardinality::OneOrMore,
        })
    }

    /// Minimum number of occurrences
    pub fn min(&self) -> u32 {
        match self {
            Cardinality::Required | Cardinality::OneOrMore => 1,
            Cardinality::Optional | Cardinality::ZeroOrMore => 0,
        }
    }

    /// Maximum number of occurrences (None = unbounded)
    pub fn max(&self) -> Option<u32> {
        match self {
            Cardinality::Required | Cardinality::Optional => Some(1),
            Cardinality::ZeroOrMore | Cardinality::OneOrMore => None,
        }
    }

    /// Whether at least one occurrence is needed
    pub fn is_required(&self) -> bool {
        self.min() > 0
    }

    /// Whether more than one occurrence is allowed
    pub fn is_repeatable(&self) -> bool {
        self.max().is_none()
    }

    /// Check if occurrence count is under the minimum
    pub fn is_missing(&self, count: usize) -> bool {
        count < self.min() as usize
    }

    /// Check if occurrence count exceeds the maximum
    pub fn is_exceeded(&self, count: usize) -> bool {
        match self.max() {
            Some(max) => count > max as usize,
            None => false,
        }
    }

    /// The same bounds with the minimum relaxed to zero
    pub fn relaxed(&self) -> Self {
        match self {
            Cardinality::Required => Cardinality::Optional,
            Cardinality::OneOrMore => Cardinality::ZeroOrMore,
            other => *other,
        }
    }

    /// Kebab-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            Cardinality::Required => "required",
            Cardinality::Optional => "optional",
            Cardinality::ZeroOrMore => "zero-or-more",
            Cardinality::OneOrMore => "one-or-more",
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
