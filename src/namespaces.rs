//! XML namespace handling
//!
//! Namespace bindings declared on the root tag of serialized documents.

/// XML Schema Instance namespace
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// XML Schema namespace
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

/// A namespace URI together with the prefix it is bound to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceBinding {
    /// Prefix (None for the default namespace)
    pub prefix: Option<String>,
    /// Namespace URI
    pub uri: String,
}

impl NamespaceBinding {
    /// Create a prefixed binding
    pub fn prefixed(prefix: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            uri: uri.into(),
        }
    }

    /// Create a default-namespace binding
    pub fn default_namespace(uri: impl Into<String>) -> Self {
        Self {
            prefix: None,
            uri: uri.into(),
        }
    }

    /// The declaring attribute name (`xmlns` or `xmlns:prefix`)
    pub fn attribute_name(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("xmlns:{}", prefix),
            None => "xmlns".to_string(),
        }
    }

    /// Qualify a local name with this binding's prefix
    pub fn qualify(&self, local_name: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}:{}", prefix, local_name),
            None => local_name.to_string(),
        }
    }
}

/// Whether an attribute name is a namespace declaration
pub fn is_namespace_declaration(attr_name: &str) -> bool {
    attr_name == "xmlns" || attr_name.starts_with("xmlns:")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixed_binding() {
        let ns = NamespaceBinding::prefixed("eml", "https://eml.ecoinformatics.org/eml-2.2.0");
        assert_eq!(ns.attribute_name(), "xmlns:eml");
        assert_eq!(ns.qualify("eml"), "eml:eml");
    }

    #[test]
    fn test_default_binding() {
        let ns = NamespaceBinding::default_namespace("http://example.com");
        assert_eq!(ns.attribute_name(), "xmlns");
        assert_eq!(ns.qualify("root"), "root");
    }

    #[test]
    fn test_is_namespace_declaration() {
        assert!(is_namespace_declaration("xmlns"));
        assert!(is_namespace_declaration("xmlns:eml"));
        assert!(!is_namespace_declaration("packageId"));
    }
}
