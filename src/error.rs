//! Error types for schemadoc
//!
//! Hard failures only. Schema conformance problems found while validating a
//! document are reported as [`ValidationIssue`](crate::validation::ValidationIssue)s
//! and never surface through this type.

use std::fmt;
use thiserror::Error;

/// Result type alias using the schemadoc Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for schemadoc operations
#[derive(Error, Debug)]
pub enum Error {
    /// Lookup of an element type that the schema never registered
    #[error("unknown element type '{0}'")]
    UnknownType(String),

    /// Builder argument naming neither a child nor an attribute of the type
    #[error("'{name}' is not a child or attribute of '{containing_type}'")]
    UnknownChildOrAttribute {
        /// The rejected argument name
        name: String,
        /// The element type being built
        containing_type: String,
    },

    /// Builder argument with a recognised name but an unusable value
    #[error("invalid value for '{name}' in '{containing_type}': {reason}")]
    InvalidArgument {
        /// The argument name
        name: String,
        /// The element type being built
        containing_type: String,
        /// What is wrong with the value
        reason: String,
    },

    /// A node whose value/children state cannot be rendered
    #[error("malformed node at '{path}': {reason}")]
    MalformedNode {
        /// Slash-separated path of the node
        path: String,
        /// What is inconsistent
        reason: String,
    },

    /// Schema definition error
    #[error("schema error: {0}")]
    Schema(#[from] ParseError),

    /// XML reading or writing error
    #[error("XML error: {0}")]
    Xml(String),

    /// Resource loading error
    #[error("resource error: {0}")]
    Resource(String),

    /// Limit exceeded error
    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parsing error
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// JSON conversion error
    #[error("JSON error: {0}")]
    Json(String),
}

impl Error {
    pub(crate) fn unknown_child(name: impl Into<String>, containing_type: impl Into<String>) -> Self {
        Error::UnknownChildOrAttribute {
            name: name.into(),
            containing_type: containing_type.into(),
        }
    }

    pub(crate) fn invalid_argument(
        name: impl Into<String>,
        containing_type: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Error::InvalidArgument {
            name: name.into(),
            containing_type: containing_type.into(),
            reason: reason.into(),
        }
    }
}

/// Schema definition error
#[derive(Debug, Clone)]
pub struct ParseError {
    /// Error message
    pub message: String,
    /// Element type or schema component the error concerns
    pub location: Option<String>,
    /// Schema source snippet that caused the error
    pub source: Option<String>,
}

impl ParseError {
    /// Create a new parse error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
            source: None,
        }
    }

    /// Set the location
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the source
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        if let Some(ref loc) = self.location {
            write!(f, "\n\nLocation: {}", loc)?;
        }

        if let Some(ref src) = self.source {
            write!(f, "\n\nSource:\n{}", src)?;
        }

        Ok(())
    }
}

impl std::error::Error for ParseError {}
