//! Resource location resolution
//!
//! Where a schema definition comes from: a file, a URL, or an in-memory text.

use std::path::PathBuf;
use url::Url;

/// Resource location - can be a URL, file path, or literal text
#[derive(Debug, Clone)]
pub enum Location {
    /// File system path
    Path(PathBuf),
    /// URL (http, https, ...)
    Url(Url),
    /// Literal in-memory content
    String(String),
}

impl Location {
    /// Create a location from a string, detecting its kind
    ///
    /// Text starting with `<` is treated as literal content.
    pub fn parse(s: &str) -> Self {
        if s.trim_start().starts_with('<') {
            return Location::String(s.to_string());
        }

        if let Ok(url) = Url::parse(s) {
            if url.scheme() == "file" {
                if let Ok(path) = url.to_file_path() {
                    return Location::Path(path);
                }
            } else if url.scheme().len() > 1 {
                // single-letter schemes are Windows drive letters
                return Location::Url(url);
            }
        }

        Location::Path(PathBuf::from(s))
    }

    /// Create a URL location, failing on malformed URLs
    pub fn url(s: &str) -> crate::error::Result<Self> {
        Ok(Location::Url(Url::parse(s)?))
    }

    /// Get the location as a display string
    pub fn as_str(&self) -> String {
        match self {
            Location::Path(p) => p.to_string_lossy().to_string(),
            Location::Url(u) => u.to_string(),
            Location::String(_) => "<string>".to_string(),
        }
    }

    /// Check if this is a remote location (URL)
    pub fn is_remote(&self) -> bool {
        matches!(self, Location::Url(_))
    }

    /// Check if this is a local file
    pub fn is_file(&self) -> bool {
        matches!(self, Location::Path(_))
    }
}

impl From<PathBuf> for Location {
    fn from(path: PathBuf) -> Self {
        Location::Path(path)
    }
}
