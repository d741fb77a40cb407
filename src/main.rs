//! Command-line interface for schemadoc

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use schemadoc::converters::to_json_string;
#[cfg(feature = "cli")]
use schemadoc::reader::read_document;
#[cfg(feature = "cli")]
use schemadoc::schema::{SchemaElementType, SchemaModel};
#[cfg(feature = "cli")]
use schemadoc::serializer::{serialize_with, SerializerConfig};
#[cfg(feature = "cli")]
use tracing_subscriber::EnvFilter;

#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(name = "schemadoc")]
#[command(author, version, about = "Schema-guided metadata record validation and formatting", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand, Debug)]
enum Commands {
    /// Inspect an XSD schema and display its element types
    Inspect {
        /// Path to the XSD schema file
        #[arg(value_name = "SCHEMA")]
        schema: PathBuf,

        /// Show detailed information about a specific element type
        #[arg(short = 't', long = "type")]
        type_name: Option<String>,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Validate an XML record against an XSD schema
    Validate {
        /// Path to the XSD schema file
        #[arg(short, long, value_name = "SCHEMA")]
        schema: PathBuf,

        /// Path to the XML file to validate
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output issues as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Rewrite an XML record in canonical schema order
    Format {
        /// Path to the XSD schema file
        #[arg(short, long, value_name = "SCHEMA")]
        schema: PathBuf,

        /// Path to the XML file to format
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Write everything on one line
        #[arg(short, long)]
        compact: bool,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert an XML record to JSON
    #[command(name = "to-json")]
    ToJson {
        /// Path to the XML file to convert
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Pretty print the output
        #[arg(short, long)]
        pretty: bool,
    },
}

#[cfg(feature = "cli")]
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Inspect {
            schema,
            type_name,
            json,
        } => cmd_inspect(schema, type_name, json),
        Commands::Validate { schema, file, json } => cmd_validate(schema, file, json),
        Commands::Format {
            schema,
            file,
            compact,
            output,
        } => cmd_format(schema, file, compact, output),
        Commands::ToJson { file, pretty } => cmd_to_json(file, pretty),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(feature = "cli")]
type CmdResult = Result<bool, Box<dyn std::error::Error>>;

#[cfg(feature = "cli")]
fn cmd_inspect(schema_path: PathBuf, type_name: Option<String>, json_output: bool) -> CmdResult {
    let schema = SchemaModel::from_file(&schema_path)?;

    if let Some(name) = type_name {
        let decl = schema.resolve(&name)?;
        if json_output {
            println!("{}", serde_json::to_string_pretty(decl)?);
        } else {
            print_type_details(decl);
        }
        return Ok(true);
    }

    if json_output {
        let types: Vec<&SchemaElementType> = schema.types().collect();
        let json = serde_json::json!({
            "root": schema.root(),
            "targetNamespace": schema.target_namespace(),
            "prefix": schema.prefix(),
            "version": schema.version(),
            "statistics": { "elementTypes": schema.len() },
            "types": types,
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        print_schema_summary(&schema);
        println!("\n=== Element Types ===");
        for decl in schema.types() {
            let shape = match (&decl.leaf, decl.children.len()) {
                (Some(kind), 0) => kind.to_string(),
                (Some(kind), n) => format!("mixed {}, {} children", kind, n),
                (None, n) => format!("{} children", n),
            };
            println!("  {} ({})", decl.name, shape);
        }
    }

    Ok(true)
}

#[cfg(feature = "cli")]
fn print_schema_summary(schema: &SchemaModel) {
    println!("schemadoc v{}", schemadoc::VERSION);
    println!();
    println!("Schema Information:");
    println!("  Root Element: {}", schema.root());
    println!(
        "  Target Namespace: {}",
        schema.target_namespace().unwrap_or("(none)")
    );
    if let Some(prefix) = schema.prefix() {
        println!("  Prefix: {}", prefix);
    }
    if let Some(version) = schema.version() {
        println!("  Version: {}", version);
    }
    println!();
    println!("Statistics:");
    println!("  Element Types: {}", schema.len());
}

#[cfg(feature = "cli")]
fn print_type_details(decl: &SchemaElementType) {
    println!("Element: {}", decl.name);
    if let Some(kind) = &decl.leaf {
        println!("  Leaf: {}", kind);
    }
    if decl.recursive {
        println!("  Recursive: true");
    }
    if !decl.children.is_empty() {
        println!("  Children:");
        for child in &decl.children {
            println!("    {} ({})", child.name, child.cardinality);
        }
    }
    if !decl.attributes.is_empty() {
        println!("  Attributes:");
        for attr in &decl.attributes {
            let usage = if attr.required { "required" } else { "optional" };
            println!("    {} ({})", attr.name, usage);
        }
    }
}

#[cfg(feature = "cli")]
fn cmd_validate(schema_path: PathBuf, file: PathBuf, json_output: bool) -> CmdResult {
    let schema = SchemaModel::from_file(&schema_path)?;
    let xml_content = fs::read_to_string(&file)?;
    let root = read_document(&xml_content)?;

    let report = schema.validate(&root);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.is_valid() {
        println!("✓ Document is valid");
    } else {
        println!("✗ Document is invalid");
        println!();
        println!("Issues:");
        for issue in report.iter() {
            println!("  - {}", issue);
        }
    }

    Ok(report.is_valid())
}

#[cfg(feature = "cli")]
fn cmd_format(schema_path: PathBuf, file: PathBuf, compact: bool, output: Option<PathBuf>) -> CmdResult {
    let schema = SchemaModel::from_file(&schema_path)?;
    let xml_content = fs::read_to_string(&file)?;
    let root = read_document(&xml_content)?;

    let config = if compact {
        SerializerConfig::compact()
    } else {
        SerializerConfig::default()
    };
    let text = serialize_with(&root, &schema, &config)?;

    if let Some(output_path) = output {
        fs::write(output_path, &text)?;
    } else {
        println!("{}", text);
    }

    Ok(true)
}

#[cfg(feature = "cli")]
fn cmd_to_json(file: PathBuf, pretty: bool) -> CmdResult {
    let xml_content = fs::read_to_string(&file)?;
    let root = read_document(&xml_content)?;
    println!("{}", to_json_string(&root, pretty)?);
    Ok(true)
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Rebuild with --features cli");
    std::process::exit(1);
}
