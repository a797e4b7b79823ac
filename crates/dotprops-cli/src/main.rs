//! `dotprops` CLI — query JSON documents with dotted property paths.
//!
//! ## Usage
//!
//! ```sh
//! # Read a single property (stdin → stdout)
//! echo '{"level2":{"bool5":[true,false]}}' | dotprops get 'level2.bool5[1]'
//!
//! # Address segments separately, from a file, with a type check
//! dotprops get -i config.json --type int level2 mixed3 1
//!
//! # Fall back to a default when the property is missing
//! dotprops get -i config.json --type string --default localhost server.host
//!
//! # List every addressable leaf path
//! dotprops paths -i config.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dotprops::{path::DEFAULT_DELIMITER, PathArg, Properties};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "dotprops",
    version,
    about = "Query JSON documents with dotted property paths"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log resolution details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value at a property path
    Get {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Expected type of the value
        #[arg(short = 't', long = "type", value_enum, default_value_t = ValueType::Any)]
        value_type: ValueType,
        /// Printed instead of failing when the property cannot be read
        #[arg(short, long)]
        default: Option<String>,
        /// Path delimiter
        #[arg(long, default_value_t = DEFAULT_DELIMITER)]
        delimiter: char,
        /// One delimited path, or several separate segments
        #[arg(value_name = "SEGMENT", allow_negative_numbers = true)]
        path: Vec<String>,
    },
    /// List every leaf path in the document
    Paths {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Path delimiter
        #[arg(long, default_value_t = DEFAULT_DELIMITER)]
        delimiter: char,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ValueType {
    /// Any value; containers are printed as pretty JSON
    Any,
    Bool,
    Int,
    Float,
    #[value(name = "string")]
    Text,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Get {
            input,
            value_type,
            default,
            delimiter,
            path,
        } => {
            let props = read_properties(input.as_deref(), delimiter)?;
            let args: Vec<PathArg<'_>> = path.iter().map(PathArg::from).collect();
            let rendered = match (render(&props, &args, value_type), default) {
                (Ok(text), _) => text,
                (Err(err), Some(default)) => {
                    tracing::debug!(error = %err, "falling back to default");
                    default
                }
                (Err(err), None) => {
                    return Err(err.context(format!("Failed to read property '{}'", path.join(" "))));
                }
            };
            println!("{}", rendered);
        }
        Commands::Paths { input, delimiter } => {
            let props = read_properties(input.as_deref(), delimiter)?;
            for leaf in props.leaf_paths() {
                println!("{}", leaf);
            }
        }
    }

    Ok(())
}

/// Install a stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Resolve `args` and format the value according to `value_type`.
fn render(props: &Properties, args: &[PathArg<'_>], value_type: ValueType) -> Result<String> {
    let text = match value_type {
        ValueType::Bool => props.get_bool(args)?.to_string(),
        ValueType::Int => props.get_int(args)?.to_string(),
        ValueType::Float => props.get_float(args)?.to_string(),
        ValueType::Text => props.get_string(args)?.to_string(),
        ValueType::Any => {
            let value = props.get(args)?;
            match value.as_str() {
                Some(s) => s.to_string(),
                None => serde_json::to_string_pretty(value)?,
            }
        }
    };
    Ok(text)
}

fn read_properties(path: Option<&str>, delimiter: char) -> Result<Properties> {
    let json = read_input(path)?;
    let props: Properties = json.parse().context("Failed to parse JSON input")?;
    Ok(props.with_delimiter(delimiter)?)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
