//! `minijson` CLI: check, reformat, and summarize JSON from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Validate a document (stdin → exit status)
//! echo '{"name":"Alice","age":30}' | minijson check
//!
//! # Reformat a file, compact or pretty
//! minijson fmt -i data.json -o data.min.json
//! minijson fmt --pretty -i data.json
//!
//! # Node counts and nesting depth
//! minijson stats -i data.json
//!
//! # Tighter limits: shallower nesting, no trailing text
//! minijson check --max-depth 16 --strict -i data.json
//! ```
//!
//! Diagnostics go to stderr and are controlled by `RUST_LOG`.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use minijson::{Kind, ParseConfig, Value, DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT};
use std::io::{self, Read};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "minijson",
    version,
    about = "Check, format, and summarize JSON documents",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the input and report its top-level kind
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        #[command(flatten)]
        parse: ParseArgs,
    },
    /// Parse the input and write it back out
    Fmt {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// One member per line, two-space indentation
        #[arg(long)]
        pretty: bool,
        #[command(flatten)]
        parse: ParseArgs,
    },
    /// Show node counts per kind and the maximum nesting depth
    Stats {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        #[command(flatten)]
        parse: ParseArgs,
    },
}

#[derive(Args)]
struct ParseArgs {
    /// Maximum nesting of arrays and objects (at most 200)
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH, value_parser = parse_max_depth)]
    max_depth: usize,
    /// Reject text after the first complete value
    #[arg(long)]
    strict: bool,
}

impl ParseArgs {
    fn config(&self) -> ParseConfig {
        ParseConfig::new()
            .with_max_depth(self.max_depth)
            .with_reject_trailing(self.strict)
    }
}

fn parse_max_depth(s: &str) -> std::result::Result<usize, String> {
    let depth: usize = s.parse().map_err(|e| format!("{e}"))?;
    if depth > MAX_DEPTH_LIMIT {
        return Err(format!("must be at most {MAX_DEPTH_LIMIT}"));
    }
    Ok(depth)
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { input, parse } => {
            let value = read_and_parse(input.as_deref(), &parse)?;
            println!("ok: {}", value.kind());
        }
        Commands::Fmt {
            input,
            output,
            pretty,
            parse,
        } => {
            let value = read_and_parse(input.as_deref(), &parse)?;
            let mut text = if pretty {
                value.dump_pretty(2)
            } else {
                value.dump()
            };
            text.push('\n');
            write_output(output.as_deref(), &text)?;
        }
        Commands::Stats { input, parse } => {
            let value = read_and_parse(input.as_deref(), &parse)?;
            let stats = Stats::collect(&value);
            println!("nodes:      {}", stats.nodes);
            println!("max depth:  {}", stats.max_depth);
            for (kind, count) in stats.by_kind() {
                println!("{:<11} {}", format!("{kind}:"), count);
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn read_and_parse(path: Option<&str>, args: &ParseArgs) -> Result<Value> {
    let text = read_input(path)?;
    debug!(
        bytes = text.len(),
        max_depth = args.max_depth,
        strict = args.strict,
        "parsing input"
    );
    let value = minijson::parse_with_config(&text, &args.config())
        .with_context(|| format!("Failed to parse {}", path.unwrap_or("<stdin>")))?;
    info!(kind = %value.kind(), size = value.size(), "parsed");
    Ok(value)
}

/// Counts gathered by walking a parsed tree.
#[derive(Debug, Default, PartialEq, Eq)]
struct Stats {
    nodes: usize,
    max_depth: usize,
    null: usize,
    bool: usize,
    number: usize,
    string: usize,
    array: usize,
    object: usize,
}

impl Stats {
    fn collect(value: &Value) -> Self {
        let mut stats = Stats::default();
        stats.visit(value, 0);
        stats
    }

    /// `depth` counts the containers enclosing `value`.
    fn visit(&mut self, value: &Value, depth: usize) {
        self.nodes += 1;
        match value.kind() {
            Kind::Null => self.null += 1,
            Kind::Bool => self.bool += 1,
            Kind::Number => self.number += 1,
            Kind::String => self.string += 1,
            Kind::Array => self.array += 1,
            Kind::Object => self.object += 1,
        }
        match value {
            Value::Array(items) => {
                self.max_depth = self.max_depth.max(depth + 1);
                for item in items {
                    self.visit(item, depth + 1);
                }
            }
            Value::Object(members) => {
                self.max_depth = self.max_depth.max(depth + 1);
                for member in members.values() {
                    self.visit(member, depth + 1);
                }
            }
            _ => {}
        }
    }

    fn by_kind(&self) -> [(Kind, usize); 6] {
        [
            (Kind::Null, self.null),
            (Kind::Bool, self.bool),
            (Kind::Number, self.number),
            (Kind::String, self.string),
            (Kind::Array, self.array),
            (Kind::Object, self.object),
        ]
    }
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

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_counts_nodes_and_depth() {
        let value = minijson::parse(r#"{"a":[1,2,{"b":null}],"c":"x","d":true}"#).unwrap();
        let stats = Stats::collect(&value);
        assert_eq!(stats.nodes, 8);
        assert_eq!(stats.max_depth, 3);
        assert_eq!(stats.object, 2);
        assert_eq!(stats.array, 1);
        assert_eq!(stats.number, 2);
        assert_eq!(stats.null, 1);
        assert_eq!(stats.string, 1);
        assert_eq!(stats.bool, 1);
    }

    #[test]
    fn stats_for_scalar() {
        let stats = Stats::collect(&Value::Int(1));
        assert_eq!(stats.nodes, 1);
        assert_eq!(stats.max_depth, 0);
    }

    #[test]
    fn max_depth_flag_range() {
        assert_eq!(parse_max_depth("0"), Ok(0));
        assert_eq!(parse_max_depth("200"), Ok(200));
        assert!(parse_max_depth("201").is_err());
        assert!(parse_max_depth("100000000").is_err());
        assert!(parse_max_depth("-1").is_err());
    }

    #[test]
    fn parse_args_build_config() {
        let args = ParseArgs {
            max_depth: 4,
            strict: true,
        };
        assert_eq!(
            args.config(),
            ParseConfig::new().with_max_depth(4).with_reject_trailing(true)
        );
    }
}
