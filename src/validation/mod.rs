//! Document validation
//!
//! Checks a tree against a schema and reports every problem found, in a
//! deterministic order, as a list of [`ValidationIssue`]s. Validation never
//! fails and never touches the tree.

pub mod context;
pub mod document;

use std::fmt;

use serde::Serialize;

use crate::document::DocumentNode;
use crate::limits::Limits;
use crate::schema::SchemaModel;

pub use context::ValidationContext;

/// What is wrong at an issue's path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", rename_all = "kebab-case")]
pub enum IssueKind {
    /// A required child is absent
    MissingRequiredChild {
        /// The absent child type
        child: String,
    },
    /// An element is not allowed where it appears
    UnexpectedElement {
        /// The offending element type
        element: String,
    },
    /// A singular child appears more than once
    CardinalityViolation {
        /// The repeated child type
        child: String,
        /// How many times it appears
        count: usize,
    },
    /// A value is not of the declared leaf type
    BadLeafType,
    /// A value does not match the declared format
    BadLeafFormat,
    /// A required attribute is absent
    MissingRequiredAttribute {
        /// The absent attribute
        attribute: String,
    },
    /// An attribute is not declared for the element type
    UnexpectedAttribute {
        /// The offending attribute
        attribute: String,
    },
    /// The tree is nested deeper than the walk may go; nothing below was checked
    DepthLimitExceeded {
        /// The depth limit in force
        max_depth: usize,
    },
}

impl IssueKind {
    /// Kebab-case code of the kind
    pub fn code(&self) -> &'static str {
        match self {
            IssueKind::MissingRequiredChild { .. } => "missing-required-child",
            IssueKind::UnexpectedElement { .. } => "unexpected-element",
            IssueKind::CardinalityViolation { .. } => "cardinality-violation",
            IssueKind::BadLeafType => "bad-leaf-type",
            IssueKind::BadLeafFormat => "bad-leaf-format",
            IssueKind::MissingRequiredAttribute { .. } => "missing-required-attribute",
            IssueKind::UnexpectedAttribute { .. } => "unexpected-attribute",
            IssueKind::DepthLimitExceeded { .. } => "depth-limit-exceeded",
        }
    }
}

/// One mismatch between a tree and its schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Type names from the root to the node concerned
    pub path: Vec<String>,
    /// Kind of problem
    #[serde(flatten)]
    pub kind: IssueKind,
    /// Human-readable description
    pub message: String,
}

impl ValidationIssue {
    /// Slash-separated path
    pub fn path_string(&self) -> String {
        self.path.join("/")
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.kind.code(), self.path_string(), self.message)
    }
}

/// Outcome of validating one tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Issues in emission order
    pub issues: Vec<ValidationIssue>,
    /// Whether part of the tree was too deep to check, in which case the
    /// issues also hold a `depth-limit-exceeded` entry
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub truncated: bool,
}

impl ValidationReport {
    /// Whether no issues were found
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty() && !self.truncated
    }

    /// Number of issues
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Whether there are no issues
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Iterate over issues
    pub fn iter(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.issues.is_empty() {
            writeln!(f, "valid")?;
        }
        for issue in &self.issues {
            writeln!(f, "{}", issue)?;
        }
        Ok(())
    }
}

/// Validate a tree, returning its issues in order
///
/// A tree deeper than the default depth limit yields a
/// `depth-limit-exceeded` issue at the first node past the limit.
pub fn validate(root: &DocumentNode, schema: &SchemaModel) -> Vec<ValidationIssue> {
    validate_with_limits(root, schema, &Limits::default()).issues
}

/// Validate a tree under explicit resource limits
pub fn validate_with_limits(root: &DocumentNode, schema: &SchemaModel, limits: &Limits) -> ValidationReport {
    let mut context = ValidationContext::with_limits(limits);
    document::validate_root(root, schema, &mut context);

    if context.truncated {
        tracing::warn!(max_depth = limits.max_depth, "document deeper than limit, validation truncated");
    }
    tracing::debug!(root = %root.name, issues = context.issues.len(), "validated document");

    ValidationReport {
        truncated: context.truncated,
        issues: context.take_issues(),
    }
}

impl SchemaModel {
    /// Validate a tree against this schema
    pub fn validate(&self, root: &DocumentNode) -> ValidationReport {
        validate_with_limits(root, self, &Limits::default())
    }
}
