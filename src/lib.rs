//! # schemadoc
//!
//! Schema-guided construction, validation and serialization of structured
//! XML metadata records, such as EML ecological metadata.
//!
//! A [`SchemaModel`] says which element types exist, which children each may
//! hold and how often, and what kind of value a leaf carries. Trees of
//! [`DocumentNode`]s are built against it, checked by the validator, which
//! reports every problem in one pass, and written out as namespaced XML.
//!
//! ## Features
//!
//! - Schema models from an XSD subset or built in code
//! - Builder helpers that reject unknown argument names up front
//! - Exhaustive, deterministic validation reports
//! - Canonical XML output in schema order
//! - Reading records back, and JSON conversion
//!
//! ## Example
//!
//! ```rust
//! use schemadoc::{Builder, Cardinality, LeafKind, SchemaBuilder};
//!
//! let schema = SchemaBuilder::new("individualName")
//!     .element("individualName", |t| {
//!         t.child("givenName", Cardinality::ZeroOrMore)
//!             .child("surName", Cardinality::Required)
//!     })
//!     .leaf("givenName", LeafKind::Text)
//!     .leaf("surName", LeafKind::Text)
//!     .build()?;
//!
//! let name = Builder::new(&schema)
//!     .element("individualName", [("givenName", "Jeanette"), ("surName", "Clark")])?;
//!
//! assert!(schema.validate(&name).is_valid());
//! let xml = schemadoc::serialize(&name, &schema)?;
//! assert!(xml.contains("<surName>Clark</surName>"));
//! # Ok::<(), schemadoc::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Foundation
pub mod error;
pub mod limits;

// Utilities
pub mod names;
pub mod namespaces;
pub mod locations;

// Resource loading
pub mod loaders;

// Schema model
pub mod schema;

// Documents
pub mod document;
pub mod builders;
pub mod reader;

// Checking and output
pub mod validation;
pub mod serializer;
pub mod converters;

// Re-exports for convenience
pub use builders::{ArgValue, Builder, ElementHelper, RecordTable};
pub use document::{DocumentNode, LeafValue};
pub use error::{Error, Result};
pub use limits::Limits;
pub use schema::{Cardinality, LeafKind, SchemaBuilder, SchemaElementType, SchemaModel};
pub use serializer::{serialize, serialize_with, write_document, SerializerConfig};
pub use validation::{validate, IssueKind, ValidationIssue, ValidationReport};

/// Version of the schemadoc library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
