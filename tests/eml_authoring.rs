//! End-to-end authoring of EML records against the fixture schema
//!
//! Build with the helpers, validate, serialize, read back.

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use schemadoc::reader::read_document;
use schemadoc::serializer::{serialize, serialize_with, SerializerConfig};
use schemadoc::validation::validate;
use schemadoc::{Builder, DocumentNode, Error, IssueKind, RecordTable, SchemaModel};

fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    path
}

fn eml_schema() -> SchemaModel {
    SchemaModel::from_file(fixture("eml.xsd")).unwrap()
}

fn jeanette(builder: &Builder<'_>) -> DocumentNode {
    builder
        .element("individualName", [("givenName", "Jeanette"), ("surName", "Clark")])
        .unwrap()
}

/// The record from the authoring walkthrough: one person as creator and contact
fn walkthrough_record(schema: &SchemaModel) -> DocumentNode {
    let builder = Builder::new(schema);

    let creator = builder.helper("creator").unwrap().arg("individualName", jeanette(&builder)).unwrap().build();
    let contact = builder.helper("contact").unwrap().arg("individualName", jeanette(&builder)).unwrap().build();

    let dataset = builder
        .helper("dataset")
        .unwrap()
        .arg("contact", contact)
        .unwrap()
        .arg("creator", creator)
        .unwrap()
        .arg("title", "Plankton counts in Prince William Sound")
        .unwrap()
        .build();

    builder
        .helper("eml")
        .unwrap()
        .arg("packageId", "knb.1.1")
        .unwrap()
        .arg("system", "knb")
        .unwrap()
        .arg("dataset", dataset)
        .unwrap()
        .build()
}

#[test]
fn test_schema_shape() {
    let schema = eml_schema();
    assert_eq!(schema.root(), "eml");
    assert_eq!(schema.prefix(), Some("eml"));
    assert_eq!(schema.target_namespace(), Some("https://eml.ecoinformatics.org/eml-2.2.0"));
    assert_eq!(schema.version(), Some("2.2.0"));

    let dataset: Vec<_> = schema
        .allowed_children("dataset")
        .unwrap()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(
        dataset,
        [
            "title",
            "creator",
            "pubDate",
            "abstract",
            "keywordSet",
            "coverage",
            "contact",
            "methods",
            "dataTable"
        ]
    );
    assert!(schema.resolve("section").unwrap().recursive);
    assert!(schema.resolve("abstract").unwrap().is_mixed());
    assert_eq!(
        schema.resolve("creator").unwrap().children,
        schema.resolve("contact").unwrap().children
    );
}

#[test]
fn test_walkthrough_validates_and_serializes() {
    let schema = eml_schema();
    let record = walkthrough_record(&schema);

    let issues = validate(&record, &schema);
    assert!(issues.is_empty(), "{:?}", issues);

    let xml = serialize_with(&record, &schema, &SerializerConfig::compact()).unwrap();
    let name = "<individualName><givenName>Jeanette</givenName><surName>Clark</surName></individualName>";
    assert!(xml.contains(&format!("<creator>{}</creator>", name)), "{}", xml);
    assert!(xml.contains(&format!("<contact>{}</contact>", name)), "{}", xml);
    assert!(xml.starts_with(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <eml:eml xmlns:eml=\"https://eml.ecoinformatics.org/eml-2.2.0\" packageId=\"knb.1.1\" system=\"knb\">"
    ));

    // schema order, not argument order
    let creator_at = xml.find("<creator>").unwrap();
    let contact_at = xml.find("<contact>").unwrap();
    let title_at = xml.find("<title>").unwrap();
    assert!(title_at < creator_at && creator_at < contact_at);
}

#[test]
fn test_arbitrary_element_under_dataset() {
    let schema = eml_schema();
    let mut record = walkthrough_record(&schema);
    record
        .child_mut("dataset")
        .unwrap()
        .push_child(DocumentNode::leaf("arbitrary", "making up stuff"));

    let issues = validate(&record, &schema);
    assert_eq!(issues.len(), 1, "{:?}", issues);
    assert_eq!(
        issues[0].kind,
        IssueKind::UnexpectedElement {
            element: "arbitrary".into()
        }
    );
    assert!(issues[0].path_string().ends_with("dataset/arbitrary"));

    // the serializer still renders the invalid tree
    let xml = serialize(&record, &schema).unwrap();
    assert!(xml.contains("<arbitrary>making up stuff</arbitrary>"));
}

#[test]
fn test_typed_helper_rejects_arbitrary_argument() {
    let schema = eml_schema();
    let builder = Builder::new(&schema);
    let result = builder.helper("dataset").unwrap().arg("arbitrary", "making up stuff");
    match result {
        Err(Error::UnknownChildOrAttribute { name, containing_type }) => {
            assert_eq!(name, "arbitrary");
            assert_eq!(containing_type, "dataset");
        }
        other => panic!("expected UnknownChildOrAttribute, got {:?}", other.map(|h| h.build())),
    }
}

#[test]
fn test_missing_surname() {
    let schema = eml_schema();
    let mut record = walkthrough_record(&schema);
    let name = record
        .child_mut("dataset")
        .and_then(|d| d.child_mut("creator"))
        .and_then(|c| c.child_mut("individualName"))
        .unwrap();
    assert_eq!(name.remove_children("surName"), 1);

    let issues = validate(&record, &schema);
    assert_eq!(issues.len(), 1, "{:?}", issues);
    assert_eq!(
        issues[0].kind,
        IssueKind::MissingRequiredChild {
            child: "surName".into()
        }
    );
    assert_eq!(issues[0].path_string(), "eml/dataset/creator/individualName");
}

#[test]
fn test_undeclared_element_reports_no_missing_siblings() {
    let schema = eml_schema();
    let mut record = walkthrough_record(&schema);
    record
        .child_mut("dataset")
        .and_then(|d| d.child_mut("contact"))
        .unwrap()
        .push_child(DocumentNode::leaf("phone", "555-0100"));

    let issues = validate(&record, &schema);
    let codes: Vec<_> = issues.iter().map(|i| i.kind.code()).collect();
    assert_eq!(codes, ["unexpected-element"]);
    assert_eq!(issues[0].path_string(), "eml/dataset/contact/phone");
}

#[test]
fn test_leaf_problems() {
    let schema = eml_schema();
    let builder = Builder::new(&schema);
    let mut record = walkthrough_record(&schema);

    let coordinates = builder
        .element(
            "boundingCoordinates",
            [
                ("westBoundingCoordinate", "-147.5"),
                ("eastBoundingCoordinate", "east"),
                ("northBoundingCoordinate", "61.2"),
                ("southBoundingCoordinate", "5.9e1"),
            ],
        )
        .unwrap();
    let geographic = builder
        .helper("geographicCoverage")
        .unwrap()
        .arg("boundingCoordinates", coordinates)
        .unwrap()
        .arg("geographicDescription", "Prince William Sound")
        .unwrap()
        .build();
    let coverage = builder.helper("coverage").unwrap().arg("geographicCoverage", geographic).unwrap().build();

    let dataset = record.child_mut("dataset").unwrap();
    dataset.push_child(coverage);
    dataset.push_child(builder.leaf("pubDate", "2019-02-30").unwrap());

    let issues = validate(&record, &schema);
    let found: Vec<_> = issues.iter().map(|i| (i.kind.code(), i.path_string())).collect();
    assert_eq!(
        found,
        [
            (
                "bad-leaf-type",
                "eml/dataset/coverage/geographicCoverage/boundingCoordinates/eastBoundingCoordinate".to_string()
            ),
            ("bad-leaf-format", "eml/dataset/pubDate".to_string()),
        ]
    );
}

#[test]
fn test_attribute_table() {
    let schema = eml_schema();
    let builder = Builder::new(&schema);

    let table = RecordTable::new(["attributeName", "attributeDefinition", "unit", "numberType"])
        .with_row(["depth", "Sampling depth", "meter", "real"])
        .with_row(["station", "Station code", "", ""])
        .with_row(["count", "Individuals per liter", "", "complex"]);
    let attribute_list = builder.table("attributeList", "attribute", &table).unwrap();
    assert_eq!(attribute_list.children.len(), 3);

    let data_table = builder
        .helper("dataTable")
        .unwrap()
        .arg("attributeList", attribute_list)
        .unwrap()
        .arg("entityName", "counts.csv")
        .unwrap()
        .build();

    let mut record = walkthrough_record(&schema);
    record.child_mut("dataset").unwrap().push_child(data_table);

    let issues = validate(&record, &schema);
    assert_eq!(issues.len(), 1, "{:?}", issues);
    assert_eq!(issues[0].kind, IssueKind::BadLeafFormat);
    assert_eq!(
        issues[0].path_string(),
        "eml/dataset/dataTable/attributeList/attribute/numberType"
    );
}

#[test]
fn test_nested_sections() {
    let schema = eml_schema();
    let builder = Builder::new(&schema);

    let inner = builder.element("section", [("title", "Counting"), ("para", "Under a microscope.")]).unwrap();
    let outer = builder
        .helper("section")
        .unwrap()
        .arg("section", inner)
        .unwrap()
        .arg("title", "Lab work")
        .unwrap()
        .build();
    let description = builder.helper("description").unwrap().arg("section", outer).unwrap().build();
    let step = builder.helper("methodStep").unwrap().arg("description", description).unwrap().build();
    let methods = builder.helper("methods").unwrap().arg("methodStep", step).unwrap().build();

    let mut record = walkthrough_record(&schema);
    record.child_mut("dataset").unwrap().push_child(methods);
    assert!(schema.validate(&record).is_valid());

    let xml = serialize_with(&record, &schema, &SerializerConfig::compact()).unwrap();
    assert!(xml.contains(
        "<section><title>Lab work</title><section><title>Counting</title><para>Under a microscope.</para></section></section>"
    ));
}

#[test]
fn test_serialize_parse_serialize_is_stable() {
    let schema = eml_schema().with_schema_location("https://eml.ecoinformatics.org/eml-2.2.0 eml.xsd");
    let builder = Builder::new(&schema);
    let mut record = walkthrough_record(&schema);

    let keywords = builder
        .helper("keywordSet")
        .unwrap()
        .arg(
            "keyword",
            DocumentNode::leaf("keyword", "plankton").with_attribute("keywordType", "theme"),
        )
        .unwrap()
        .arg("keyword", "salinity & temperature")
        .unwrap()
        .build();
    record.child_mut("dataset").unwrap().push_child(keywords);
    assert!(schema.validate(&record).is_valid());

    for config in [SerializerConfig::default(), SerializerConfig::compact()] {
        let first = serialize_with(&record, &schema, &config).unwrap();
        let reread = read_document(&first).unwrap();
        assert!(schema.validate(&reread).is_valid());
        let second = serialize_with(&reread, &schema, &config).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_surrounding_spaces_survive_reading() {
    let schema = eml_schema();
    let builder = Builder::new(&schema);
    let name = builder
        .element("individualName", [("givenName", " Jeanette"), ("surName", "Clark ")])
        .unwrap();
    assert!(validate(&name, &schema).is_empty());

    for config in [SerializerConfig::default(), SerializerConfig::compact()] {
        let first = serialize_with(&name, &schema, &config).unwrap();
        let reread = read_document(&first).unwrap();
        assert_eq!(reread, name);
        assert_eq!(serialize_with(&reread, &schema, &config).unwrap(), first);
    }
}

#[test]
fn test_fixture_records() {
    let schema = eml_schema();

    let record = read_document(&std::fs::read_to_string(fixture("record.xml")).unwrap()).unwrap();
    assert!(schema.validate(&record).is_valid());

    let invalid = read_document(&std::fs::read_to_string(fixture("invalid.xml")).unwrap()).unwrap();
    let report = schema.validate(&invalid);
    let found: Vec<_> = report.iter().map(|i| (i.kind.code(), i.path_string())).collect();
    assert_eq!(
        found,
        [
            ("unexpected-element", "eml/dataset/arbitrary".to_string()),
            (
                "missing-required-child",
                "eml/dataset/creator/individualName".to_string()
            ),
        ]
    );
}
