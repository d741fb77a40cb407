//! Resource loading utilities
//!
//! Reads schema definitions and documents from a [`Location`].

use crate::error::{Error, Result};
use crate::limits::Limits;
use crate::locations::Location;
use std::fs;

/// Resource loader for schemas and documents
#[derive(Debug, Clone, Default)]
pub struct Loader {
    /// Resource limits
    limits: Limits,
}

impl Loader {
    /// Create a new loader with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// The limits applied by this loader
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Load a resource as a string
    pub fn load(&self, location: &Location) -> Result<String> {
        let content = match location {
            Location::Path(path) => fs::read_to_string(path).map_err(|e| {
                Error::Resource(format!("failed to read file '{}': {}", path.display(), e))
            })?,
            Location::Url(url) => {
                return Err(Error::Resource(format!(
                    "remote resources are not supported: {}",
                    url
                )));
            }
            Location::String(s) => s.clone(),
        };

        self.limits.check_input_size(content.len())?;
        tracing::debug!(location = %location.as_str(), bytes = content.len(), "loaded resource");

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "<eml>test</eml>").unwrap();

        let location = Location::Path(file.path().to_path_buf());
        let content = Loader::new().load(&location).unwrap();

        assert!(content.contains("<eml>test</eml>"));
    }

    #[test]
    fn test_load_from_string() {
        let location = Location::String("<eml/>".to_string());
        let content = Loader::new().load(&location).unwrap();
        assert_eq!(content, "<eml/>");
    }

    #[test]
    fn test_missing_file() {
        let location = Location::Path("/nonexistent/schema.xsd".into());
        let result = Loader::new().load(&location);
        assert!(matches!(result, Err(Error::Resource(_))));
    }

    #[test]
    fn test_remote_refused() {
        let location = Location::parse("https://example.com/eml.xsd");
        assert!(matches!(Loader::new().load(&location), Err(Error::Resource(_))));
    }

    #[test]
    fn test_size_limit() {
        let location = Location::String("x".repeat(64));
        let loader = Loader::new().with_limits(Limits::new().with_max_input_size(32));
        assert!(matches!(loader.load(&location), Err(Error::LimitExceeded(_))));
    }
}
