//! Limits and constraints for schema and document processing
//!
//! Bounds on input size and tree shape so that hostile or corrupt input
//! cannot exhaust memory or the stack.

use crate::error::{Error, Result};

/// Resource limits configuration
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum element nesting depth for reading, validating and writing
    pub max_depth: usize,

    /// Maximum size in bytes of a schema or document text
    pub max_input_size: usize,

    /// Maximum number of attributes per element
    pub max_attributes: usize,

    /// Maximum number of element types in a schema
    pub max_schema_types: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: 256,
            max_input_size: 64 * 1024 * 1024, // 64 MB
            max_attributes: 256,
            max_schema_types: 10_000,
        }
    }
}

impl Limits {
    /// Create a new Limits with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create strict limits (more restrictive)
    pub fn strict() -> Self {
        Self {
            max_depth: 64,
            max_input_size: 4 * 1024 * 1024, // 4 MB
            max_attributes: 32,
            max_schema_types: 1_000,
        }
    }

    /// Set the maximum depth
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the maximum input size
    pub fn with_max_input_size(mut self, size: usize) -> Self {
        self.max_input_size = size;
        self
    }

    /// Check if a nesting depth is within limits
    pub fn check_depth(&self, depth: usize) -> Result<()> {
        if depth > self.max_depth {
            Err(Error::LimitExceeded(format!(
                "element depth {} exceeds maximum {}",
                depth, self.max_depth
            )))
        } else {
            Ok(())
        }
    }

    /// Check if an input size is within limits
    pub fn check_input_size(&self, size: usize) -> Result<()> {
        if size > self.max_input_size {
            Err(Error::LimitExceeded(format!(
                "input size {} bytes exceeds maximum {} bytes",
                size, self.max_input_size
            )))
        } else {
            Ok(())
        }
    }

    /// Check if the number of attributes on one element is within limits
    pub fn check_attributes(&self, count: usize) -> Result<()> {
        if count > self.max_attributes {
            Err(Error::LimitExceeded(format!(
                "attribute count {} exceeds maximum {}",
                count, self.max_attributes
            )))
        } else {
            Ok(())
        }
    }

    /// Check if the number of schema element types is within limits
    pub fn check_schema_types(&self, count: usize) -> Result<()> {
        if count > self.max_schema_types {
            Err(Error::LimitExceeded(format!(
                "schema type count {} exceeds maximum {}",
                count, self.max_schema_types
            )))
        } else {
            Ok(())
        }
    }
}
