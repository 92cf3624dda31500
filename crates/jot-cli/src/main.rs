//! `jot` CLI — reformat and query JSON files with the lenient jot tree.
//!
//! This binary is the file-system collaborator of `jot-core`: the core only
//! ever consumes and produces in-memory text, so reading, writing, and the
//! warning sink (`env_logger`, enable with `RUST_LOG=warn`) all live here.
//!
//! ## Usage
//!
//! ```sh
//! # Pretty-print (stdin → stdout)
//! echo '{"name":"Alice","age":30}' | jot fmt
//!
//! # Minify from file to file
//! jot min -i data.json -o data.min.json
//!
//! # Truncate below two levels while formatting
//! jot fmt --max-depth 2 -i deep.json
//!
//! # Look up a dotted path (object keys and array indices)
//! echo '{"a":{"b":[10,20]}}' | jot get a.b.1
//!
//! # List top-level keys
//! jot keys -i data.json
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use jot_core::{parse_with_depth, stringify, stringify_pretty, Value};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "jot", version, about = "Lenient JSON formatter and inspector")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pretty-print a JSON document (tabs, one entry per line)
    Fmt {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Truncate the parsed tree this many levels below the root
        #[arg(long)]
        max_depth: Option<usize>,
    },
    /// Minify a JSON document (no whitespace between tokens)
    Min {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Truncate the parsed tree this many levels below the root
        #[arg(long)]
        max_depth: Option<usize>,
    },
    /// Print the value at a dotted path (object keys and array indices)
    Get {
        /// Path like `user.addresses.0.city`
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// List the top-level keys of an object document
    Keys {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Fmt {
            input,
            output,
            max_depth,
        } => {
            let text = read_input(input.as_deref())?;
            let doc = parse_with_depth(&text, max_depth);
            write_output(output.as_deref(), &(stringify_pretty(&doc) + "\n"))?;
        }
        Commands::Min {
            input,
            output,
            max_depth,
        } => {
            let text = read_input(input.as_deref())?;
            let doc = parse_with_depth(&text, max_depth);
            write_output(output.as_deref(), &(stringify(&doc) + "\n"))?;
        }
        Commands::Get { path, input } => {
            let text = read_input(input.as_deref())?;
            let doc = jot_core::parse(&text);
            let node = lookup(&doc, &path)?;
            println!("{}", stringify(node));
        }
        Commands::Keys { input } => {
            let text = read_input(input.as_deref())?;
            let doc = jot_core::parse(&text);
            if !doc.is_object() {
                bail!("document root is a {} node, not an object", doc.kind());
            }
            for key in doc.keys() {
                println!("{key}");
            }
        }
    }

    Ok(())
}

/// Walk a dotted path: object segments use keyed lookup, numeric segments on
/// arrays use bounds-checked positional lookup.
fn lookup<'a>(doc: &'a Value, path: &str) -> Result<&'a Value> {
    let mut node = doc;
    for segment in path.split('.') {
        if segment.is_empty() {
            bail!("empty segment in path '{path}'");
        }
        node = if node.is_array() {
            let index: usize = segment
                .parse()
                .with_context(|| format!("segment '{segment}' is not an array index"))?;
            node.at(index)
                .with_context(|| format!("segment '{segment}' in path '{path}'"))?
        } else {
            node.try_get(segment)
                .with_context(|| format!("no field '{segment}' in path '{path}'"))?
        };
    }
    Ok(node)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
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

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {path}"))?;
        }
        None => {
            print!("{content}");
        }
    }
    Ok(())
}
