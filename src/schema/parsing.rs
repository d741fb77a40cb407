//! XSD schema loading
//!
//! Builds a [`SchemaModel`] from an XML Schema document. Only the subset that
//! maps onto the model is understood:
//!
//! - global and local `xs:element` declarations (`name`, `ref`, `type`,
//!   `minOccurs`, `maxOccurs`); the first global element is the root
//! - named and anonymous `xs:complexType` with `xs:sequence` / `xs:all` /
//!   `xs:choice` (choice members become optional), `xs:attribute`,
//!   `mixed="true"`, `xs:simpleContent` and `xs:complexContent` extension
//! - named and anonymous `xs:simpleType` restrictions, with `xs:enumeration`
//!   producing an enumerated leaf
//!
//! Element names are the type names of the model, so one name must have one
//! content model throughout the schema.

use std::collections::{HashMap, HashSet, VecDeque};
use std::path::Path;

use roxmltree::{Document, Node, NodeId};

use super::{
    AttributeDecl, Cardinality, ChildDecl, LeafKind, SchemaBuilder, SchemaElementType, SchemaModel,
};
use crate::error::{Error, ParseError, Result};
use crate::limits::Limits;
use crate::loaders::Loader;
use crate::locations::Location;
use crate::names::split_qname;
use crate::namespaces::XSD_NAMESPACE;

/// XSD element local names
mod xsd_elements {
    pub const SCHEMA: &str = "schema";
    pub const ELEMENT: &str = "element";
    pub const COMPLEX_TYPE: &str = "complexType";
    pub const SIMPLE_TYPE: &str = "simpleType";
    pub const ATTRIBUTE: &str = "attribute";
    pub const SEQUENCE: &str = "sequence";
    pub const CHOICE: &str = "choice";
    pub const ALL: &str = "all";
    pub const ANNOTATION: &str = "annotation";
    pub const ANY: &str = "any";
    pub const ANY_ATTRIBUTE: &str = "anyAttribute";
    pub const RESTRICTION: &str = "restriction";
    pub const EXTENSION: &str = "extension";
    pub const SIMPLE_CONTENT: &str = "simpleContent";
    pub const COMPLEX_CONTENT: &str = "complexContent";
    pub const ENUMERATION: &str = "enumeration";
    pub const LIST: &str = "list";
    pub const UNION: &str = "union";
}

/// XSD attribute names
mod xsd_attrs {
    pub const NAME: &str = "name";
    pub const TYPE: &str = "type";
    pub const REF: &str = "ref";
    pub const BASE: &str = "base";
    pub const VALUE: &str = "value";
    pub const USE: &str = "use";
    pub const MIXED: &str = "mixed";
    pub const MIN_OCCURS: &str = "minOccurs";
    pub const MAX_OCCURS: &str = "maxOccurs";
    pub const TARGET_NAMESPACE: &str = "targetNamespace";
    pub const VERSION: &str = "version";
}

impl SchemaModel {
    /// Load a schema from XSD text
    pub fn from_xsd_str(xsd: &str) -> Result<Self> {
        let limits = Limits::default();
        limits.check_input_size(xsd.len())?;
        parse_xsd(xsd, &limits)
    }

    /// Load a schema from an XSD file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::load(&Location::Path(path.as_ref().to_path_buf()), &Loader::new())
    }

    /// Load a schema from any location
    pub fn load(location: &Location, loader: &Loader) -> Result<Self> {
        let text = loader.load(location)?;
        let schema = parse_xsd(&text, loader.limits())?;
        tracing::info!(
            location = %location.as_str(),
            root = %schema.root(),
            types = schema.len(),
            "loaded schema"
        );
        Ok(schema)
    }
}

/// Parse XSD text into a schema model
pub fn parse_xsd(text: &str, limits: &Limits) -> Result<SchemaModel> {
    let doc = Document::parse(text)
        .map_err(|e| ParseError::new(format!("schema is not well-formed XML: {}", e)))?;
    XsdParser::new(&doc, limits)?.parse()
}

fn is_xsd(node: &Node<'_, '_>, local_name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == local_name
        && node.tag_name().namespace() == Some(XSD_NAMESPACE)
}

fn xsd_children<'a, 'input>(node: Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(|n| n.is_element() && n.tag_name().namespace() == Some(XSD_NAMESPACE))
}

fn first_xsd_child<'a, 'input>(node: Node<'a, 'input>, local_name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| is_xsd(n, local_name))
}

fn required_attr<'a>(node: Node<'a, '_>, name: &str) -> Result<&'a str> {
    node.attribute(name).ok_or_else(|| {
        ParseError::new(format!(
            "xs:{} is missing its '{}' attribute",
            node.tag_name().name(),
            name
        ))
        .into()
    })
}

/// Map an XSD built-in type onto a leaf kind
fn builtin_kind(local_name: &str) -> Result<LeafKind> {
    let kind = match local_name {
        "string" | "normalizedString" | "token" | "language" | "Name" | "NCName" | "NMTOKEN"
        | "NMTOKENS" | "ID" | "IDREF" | "IDREFS" | "QName" | "anyURI" | "anyType"
        | "anySimpleType" | "base64Binary" | "hexBinary" | "duration" => LeafKind::Text,
        "decimal" | "integer" | "int" | "long" | "short" | "byte" | "float" | "double"
        | "nonNegativeInteger" | "positiveInteger" | "nonPositiveInteger" | "negativeInteger"
        | "unsignedLong" | "unsignedInt" | "unsignedShort" | "unsignedByte" => LeafKind::Numeric,
        "boolean" => LeafKind::enumeration(["true", "false", "1", "0"]),
        "date" => LeafKind::date_format("%Y-%m-%d")?,
        "dateTime" => LeafKind::date_format("%Y-%m-%dT%H:%M:%S")?,
        "time" => LeafKind::date_format("%H:%M:%S")?,
        "gYear" => LeafKind::date_format("%Y")?,
        "gYearMonth" => LeafKind::date_format("%Y-%m")?,
        other => {
            return Err(ParseError::new(format!("unsupported built-in type 'xs:{}'", other)).into())
        }
    };
    Ok(kind)
}

/// Combine a member's occurrence with that of its enclosing group
fn combine(member: Cardinality, group: Cardinality, optional_member: bool) -> Cardinality {
    let optional = optional_member || !member.is_required() || !group.is_required();
    let repeatable = member.is_repeatable() || group.is_repeatable();
    match (optional, repeatable) {
        (false, false) => Cardinality::Required,
        (true, false) => Cardinality::Optional,
        (true, true) => Cardinality::ZeroOrMore,
        (false, true) => Cardinality::OneOrMore,
    }
}

struct XsdParser<'a, 'input> {
    doc: &'a Document<'input>,
    schema: Node<'a, 'input>,
    limits: &'a Limits,
    global_elements: Vec<(&'a str, Node<'a, 'input>)>,
    complex_types: HashMap<&'a str, Node<'a, 'input>>,
    simple_types: HashMap<&'a str, Node<'a, 'input>>,
    pending: VecDeque<Node<'a, 'input>>,
    seen: HashSet<NodeId>,
}

impl<'a, 'input> XsdParser<'a, 'input> {
    fn new(doc: &'a Document<'input>, limits: &'a Limits) -> Result<Self> {
        let schema = doc.root_element();
        if !is_xsd(&schema, xsd_elements::SCHEMA) {
            return Err(ParseError::new(format!(
                "expected an xs:schema root element, found '{}'",
                schema.tag_name().name()
            ))
            .into());
        }

        let mut parser = Self {
            doc,
            schema,
            limits,
            global_elements: Vec::new(),
            complex_types: HashMap::new(),
            simple_types: HashMap::new(),
            pending: VecDeque::new(),
            seen: HashSet::new(),
        };

        for child in xsd_children(schema) {
            match child.tag_name().name() {
                xsd_elements::ELEMENT => {
                    let name = required_attr(child, xsd_attrs::NAME)?;
                    if parser.global_elements.iter().any(|(n, _)| *n == name) {
                        return Err(parser.error_at(child, format!("global element '{}' is declared twice", name)));
                    }
                    parser.global_elements.push((name, child));
                }
                xsd_elements::COMPLEX_TYPE => {
                    let name = required_attr(child, xsd_attrs::NAME)?;
                    parser.complex_types.insert(name, child);
                }
                xsd_elements::SIMPLE_TYPE => {
                    let name = required_attr(child, xsd_attrs::NAME)?;
                    parser.simple_types.insert(name, child);
                }
                xsd_elements::ANNOTATION => {}
                other => {
                    tracing::warn!(component = other, "ignoring unsupported top-level schema component");
                }
            }
        }

        Ok(parser)
    }

    fn error_at(&self, node: Node<'_, '_>, message: impl Into<String>) -> Error {
        let pos = self.doc.text_pos_at(node.range().start);
        ParseError::new(message)
            .with_location(format!("line {}, column {}", pos.row, pos.col))
            .into()
    }

    fn parse(mut self) -> Result<SchemaModel> {
        let root = match self.global_elements.first() {
            Some((name, _)) => name.to_string(),
            None => return Err(ParseError::new("schema declares no global elements").into()),
        };

        let mut builder = SchemaBuilder::new(root).limits(self.limits.clone());

        if let Some(tns) = self.schema.attribute(xsd_attrs::TARGET_NAMESPACE) {
            builder = match self.schema.lookup_prefix(tns) {
                Some(prefix) if !prefix.is_empty() => builder.namespace(prefix, tns),
                _ => builder.default_namespace(tns),
            };
        }
        if let Some(version) = self.schema.attribute(xsd_attrs::VERSION) {
            builder = builder.version(version);
        }

        self.pending.extend(self.global_elements.iter().map(|(_, node)| *node));

        while let Some(node) = self.pending.pop_front() {
            if !self.seen.insert(node.id()) {
                continue;
            }
            self.limits.check_schema_types(self.seen.len())?;
            let decl = self.element_type(node)?;
            builder = builder.add_type(decl);
        }

        builder.build()
    }

    /// Declaration of the element type introduced by an `xs:element name=`
    fn element_type(&mut self, node: Node<'a, 'input>) -> Result<SchemaElementType> {
        let name = required_attr(node, xsd_attrs::NAME)?;
        let mut decl = SchemaElementType::new(name);

        if let Some(type_ref) = node.attribute(xsd_attrs::TYPE) {
            self.apply_type_ref(&mut decl, node, type_ref, 0)?;
        } else if let Some(complex) = first_xsd_child(node, xsd_elements::COMPLEX_TYPE) {
            self.apply_complex(&mut decl, complex, 0)?;
        } else if let Some(simple) = first_xsd_child(node, xsd_elements::SIMPLE_TYPE) {
            decl.leaf = Some(self.simple_kind(simple, 0)?);
        } else {
            decl.leaf = Some(LeafKind::Text);
        }

        decl.recursive = decl.children.iter().any(|c| c.name == decl.name);
        Ok(decl)
    }

    fn apply_type_ref(
        &mut self,
        decl: &mut SchemaElementType,
        context: Node<'a, 'input>,
        type_ref: &str,
        depth: usize,
    ) -> Result<()> {
        let (prefix, local) = split_qname(type_ref);
        if context.lookup_namespace_uri(prefix) == Some(XSD_NAMESPACE) {
            decl.leaf = Some(builtin_kind(local)?);
        } else if let Some(complex) = self.complex_types.get(local).copied() {
            self.apply_complex(decl, complex, depth + 1)?;
        } else if let Some(simple) = self.simple_types.get(local).copied() {
            decl.leaf = Some(self.simple_kind(simple, depth + 1)?);
        } else {
            return Err(self.error_at(context, format!("unknown type '{}'", type_ref)));
        }
        Ok(())
    }

    fn apply_complex(
        &mut self,
        decl: &mut SchemaElementType,
        complex: Node<'a, 'input>,
        depth: usize,
    ) -> Result<()> {
        self.limits.check_depth(depth)?;

        if complex.attribute(xsd_attrs::MIXED) == Some("true") {
            decl.leaf = Some(LeafKind::Text);
        }

        for child in xsd_children(complex) {
            match child.tag_name().name() {
                xsd_elements::SEQUENCE | xsd_elements::ALL => {
                    self.collect_particles(decl, child, Cardinality::Required, false)?
                }
                xsd_elements::CHOICE => {
                    self.collect_particles(decl, child, Cardinality::Required, true)?
                }
                xsd_elements::ATTRIBUTE => decl.attributes.push(self.attribute_decl(child)?),
                xsd_elements::SIMPLE_CONTENT => {
                    let derivation = xsd_children(child)
                        .find(|n| {
                            n.tag_name().name() == xsd_elements::EXTENSION
                                || n.tag_name().name() == xsd_elements::RESTRICTION
                        })
                        .ok_or_else(|| self.error_at(child, "xs:simpleContent without derivation"))?;
                    let base = required_attr(derivation, xsd_attrs::BASE)?;
                    self.apply_type_ref(decl, derivation, base, depth)?;
                    for attr in xsd_children(derivation).filter(|n| is_xsd(n, xsd_elements::ATTRIBUTE)) {
                        decl.attributes.push(self.attribute_decl(attr)?);
                    }
                }
                xsd_elements::COMPLEX_CONTENT => {
                    if let Some(extension) = first_xsd_child(child, xsd_elements::EXTENSION) {
                        let base = required_attr(extension, xsd_attrs::BASE)?;
                        self.apply_type_ref(decl, extension, base, depth)?;
                        self.apply_complex(decl, extension, depth + 1)?;
                    } else if let Some(restriction) = first_xsd_child(child, xsd_elements::RESTRICTION) {
                        self.apply_complex(decl, restriction, depth + 1)?;
                    }
                }
                xsd_elements::ANNOTATION | xsd_elements::ANY_ATTRIBUTE => {}
                other => {
                    return Err(self.error_at(child, format!("unsupported content 'xs:{}'", other)));
                }
            }
        }

        Ok(())
    }

    fn collect_particles(
        &mut self,
        decl: &mut SchemaElementType,
        group: Node<'a, 'input>,
        outer: Cardinality,
        optional_members: bool,
    ) -> Result<()> {
        let own = Cardinality::from_occurs(
            group.attribute(xsd_attrs::MIN_OCCURS),
            group.attribute(xsd_attrs::MAX_OCCURS),
        )
        .map_err(|e| self.error_at(group, e.to_string()))?;
        let group_card = combine(own, outer, false);

        for particle in xsd_children(group) {
            match particle.tag_name().name() {
                xsd_elements::ELEMENT => {
                    let name = match particle.attribute(xsd_attrs::REF) {
                        Some(reference) => split_qname(reference).1,
                        None => {
                            self.pending.push_back(particle);
                            required_attr(particle, xsd_attrs::NAME)?
                        }
                    };
                    let card = Cardinality::from_occurs(
                        particle.attribute(xsd_attrs::MIN_OCCURS),
                        particle.attribute(xsd_attrs::MAX_OCCURS),
                    )
                    .map_err(|e| self.error_at(particle, e.to_string()))?;
                    decl.children
                        .push(ChildDecl::new(name, combine(card, group_card, optional_members)));
                }
                xsd_elements::SEQUENCE | xsd_elements::ALL => {
                    self.collect_particles(decl, particle, group_card, optional_members)?
                }
                xsd_elements::CHOICE => self.collect_particles(decl, particle, group_card, true)?,
                xsd_elements::ANY => {
                    tracing::warn!(element = %decl.name, "ignoring xs:any wildcard");
                }
                xsd_elements::ANNOTATION => {}
                other => {
                    return Err(self.error_at(particle, format!("unsupported particle 'xs:{}'", other)));
                }
            }
        }

        Ok(())
    }

    fn attribute_decl(&self, node: Node<'a, 'input>) -> Result<AttributeDecl> {
        let name = match node.attribute(xsd_attrs::NAME) {
            Some(name) => name,
            None => split_qname(required_attr(node, xsd_attrs::REF)?).1,
        };
        Ok(AttributeDecl {
            name: name.to_string(),
            required: node.attribute(xsd_attrs::USE) == Some("required"),
        })
    }

    fn simple_kind(&self, simple: Node<'a, 'input>, depth: usize) -> Result<LeafKind> {
        self.limits.check_depth(depth)?;

        if let Some(restriction) = first_xsd_child(simple, xsd_elements::RESTRICTION) {
            let values: Vec<String> = xsd_children(restriction)
                .filter(|n| n.tag_name().name() == xsd_elements::ENUMERATION)
                .map(|n| required_attr(n, xsd_attrs::VALUE).map(str::to_string))
                .collect::<Result<_>>()?;
            if !values.is_empty() {
                return Ok(LeafKind::Enum(values));
            }

            return match restriction.attribute(xsd_attrs::BASE) {
                Some(base) => self.named_simple_kind(restriction, base, depth),
                None => match first_xsd_child(restriction, xsd_elements::SIMPLE_TYPE) {
                    Some(inner) => self.simple_kind(inner, depth + 1),
                    None => Ok(LeafKind::Text),
                },
            };
        }

        if first_xsd_child(simple, xsd_elements::LIST).is_some()
            || first_xsd_child(simple, xsd_elements::UNION).is_some()
        {
            return Ok(LeafKind::Text);
        }

        Err(self.error_at(simple, "xs:simpleType without restriction, list or union"))
    }

    fn named_simple_kind(&self, context: Node<'a, 'input>, type_ref: &str, depth: usize) -> Result<LeafKind> {
        let (prefix, local) = split_qname(type_ref);
        if context.lookup_namespace_uri(prefix) == Some(XSD_NAMESPACE) {
            builtin_kind(local)
        } else if let Some(simple) = self.simple_types.get(local) {
            self.simple_kind(*simple, depth + 1)
        } else {
            Err(self.error_at(context, format!("unknown simple type '{}'", type_ref)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERSON_XSD: &str = r#"<?xml version="1.0"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema"
           xmlns:p="http://example.com/person"
           targetNamespace="http://example.com/person"
           version="1.1">
  <xs:element name="person">
    <xs:complexType>
      <xs:sequence>
        <xs:element name="givenName" type="xs:string" minOccurs="0" maxOccurs="unbounded"/>
        <xs:element name="surName" type="xs:string"/>
        <xs:element name="born" type="xs:date" minOccurs="0"/>
        <xs:element name="height" type="xs:decimal" minOccurs="0"/>
        <xs:element ref="p:role" minOccurs="0"/>
      </xs:sequence>
      <xs:attribute name="id" type="xs:string" use="required"/>
      <xs:attribute name="scope" type="xs:string"/>
    </xs:complexType>
  </xs:element>
  <xs:element name="role" type="RoleType"/>
  <xs:simpleType name="RoleType">
    <xs:restriction base="xs:string">
      <xs:enumeration value="author"/>
      <xs:enumeration value="editor"/>
    </xs:restriction>
  </xs:simpleType>
</xs:schema>"#;

    #[test]
    fn test_parse_person_schema() {
        let schema = SchemaModel::from_xsd_str(PERSON_XSD).unwrap();
        assert_eq!(schema.root(), "person");
        assert_eq!(schema.prefix(), Some("p"));
        assert_eq!(schema.target_namespace(), Some("http://example.com/person"));
        assert_eq!(schema.version(), Some("1.1"));

        let person = schema.resolve("person").unwrap();
        let children: Vec<_> = person
            .children
            .iter()
            .map(|c| (c.name.as_str(), c.cardinality))
            .collect();
        assert_eq!(
            children,
            [
                ("givenName", Cardinality::ZeroOrMore),
                ("surName", Cardinality::Required),
                ("born", Cardinality::Optional),
                ("height", Cardinality::Optional),
                ("role", Cardinality::Optional),
            ]
        );
        assert!(person.attribute("id").unwrap().required);
        assert!(!person.attribute("scope").unwrap().required);

        assert_eq!(schema.leaf_kind("born").unwrap(), Some(&LeafKind::DateFormat("%Y-%m-%d".into())));
        assert_eq!(schema.leaf_kind("height").unwrap(), Some(&LeafKind::Numeric));
        assert_eq!(
            schema.leaf_kind("role").unwrap(),
            Some(&LeafKind::enumeration(["author", "editor"]))
        );
    }

    #[test]
    fn test_named_complex_type_and_choice() {
        let xsd = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
  <xs:element name="dataset">
    <xs:complexType>
      <xs:sequence>
        <xs:element name="creator" type="ResponsibleParty" maxOccurs="unbounded"/>
        <xs:element name="contact" type="ResponsibleParty" maxOccurs="unbounded"/>
      </xs:sequence>
    </xs:complexType>
  </xs:element>
  <xs:complexType name="ResponsibleParty">
    <xs:choice>
      <xs:element name="individualName" type="xs:string"/>
      <xs:element name="organizationName" type="xs:string"/>
    </xs:choice>
  </xs:complexType>
</xs:schema>"#;
        let schema = SchemaModel::from_xsd_str(xsd).unwrap();
        assert_eq!(schema.prefix(), None);
        assert_eq!(schema.target_namespace(), None);

        let creator = schema.resolve("creator").unwrap();
        assert_eq!(creator.children, schema.resolve("contact").unwrap().children);
        assert!(creator
            .children
            .iter()
            .all(|c| c.cardinality == Cardinality::Optional));
    }

    #[test]
    fn test_recursive_and_extension() {
        let xsd = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
  <xs:element name="section">
    <xs:complexType>
      <xs:sequence>
        <xs:element name="title" type="xs:string" minOccurs="0"/>
        <xs:element ref="section" minOccurs="0" maxOccurs="unbounded"/>
      </xs:sequence>
    </xs:complexType>
  </xs:element>
  <xs:element name="keyword">
    <xs:complexType>
      <xs:simpleContent>
        <xs:extension base="xs:string">
          <xs:attribute name="keywordType"/>
        </xs:extension>
      </xs:simpleContent>
    </xs:complexType>
  </xs:element>
</xs:schema>"#;
        let schema = SchemaModel::from_xsd_str(xsd).unwrap();
        assert!(schema.resolve("section").unwrap().recursive);

        let keyword = schema.resolve("keyword").unwrap();
        assert_eq!(keyword.leaf, Some(LeafKind::Text));
        assert!(keyword.attribute("keywordType").is_some());
    }

    #[test]
    fn test_conflicting_local_elements() {
        let xsd = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
  <xs:element name="a">
    <xs:complexType>
      <xs:sequence>
        <xs:element name="value" type="xs:string"/>
        <xs:element name="b">
          <xs:complexType>
            <xs:sequence>
              <xs:element name="value" type="xs:decimal"/>
            </xs:sequence>
          </xs:complexType>
        </xs:element>
      </xs:sequence>
    </xs:complexType>
  </xs:element>
</xs:schema>"#;
        let err = SchemaModel::from_xsd_str(xsd).unwrap_err().to_string();
        assert!(err.contains("conflicting declarations for element 'value'"), "{}", err);
    }

    #[test]
    fn test_unknown_type_reference() {
        let xsd = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
  <xs:element name="a" type="Missing"/>
</xs:schema>"#;
        let err = SchemaModel::from_xsd_str(xsd).unwrap_err().to_string();
        assert!(err.contains("unknown type 'Missing'"), "{}", err);
        assert!(err.contains("line 2"), "{}", err);
    }

    #[test]
    fn test_not_a_schema() {
        assert!(SchemaModel::from_xsd_str("<root/>").is_err());
        assert!(SchemaModel::from_xsd_str("not xml").is_err());
    }

    #[test]
    fn test_combine() {
        assert_eq!(
            combine(Cardinality::Required, Cardinality::Optional, false),
            Cardinality::Optional
        );
        assert_eq!(
            combine(Cardinality::Required, Cardinality::OneOrMore, false),
            Cardinality::OneOrMore
        );
        assert_eq!(
            combine(Cardinality::OneOrMore, Cardinality::Required, true),
            Cardinality::ZeroOrMore
        );
    }

    #[test]
    fn test_builtin_date_time_accepts_zones() {
        let kind = builtin_kind("dateTime").unwrap();
        assert!(kind.check("2019-06-12T08:30:00").is_ok());
        assert!(kind.check("2019-06-12T08:30:00Z").is_ok());
        assert!(kind.check("2019-06-12T08:30:00.5+02:00").is_ok());
        assert!(kind.check("2019-06-12").is_err());

        let integer = builtin_kind("integer").unwrap();
        assert!(integer.check("123456789012345678901234567890").is_ok());
    }
}
