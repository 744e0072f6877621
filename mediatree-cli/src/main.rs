//! mtdump - dump the box/element structure of MP4 and Matroska files.

use clap::Parser;
use console::style;
use mediatree_bmff::{BmffFile, BmffOptions};
use mediatree_core::tree::{Node, Tree};
use mediatree_core::FourCc;
use mediatree_mkv::{schema, EbmlFile, EbmlOptions};
use serde::Serialize;
use std::cell::RefCell;
use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;

/// Command-line arguments for mtdump.
#[derive(Parser, Debug)]
#[command(name = "mtdump")]
#[command(version)]
#[command(about = "Inspect the structure of ISO BMFF (MP4) and EBML (MKV/WebM) files")]
#[command(long_about = "mtdump parses a media container into its box or element tree\n\
    and prints one line per node with its byte range and decoded value.\n\n\
    EXAMPLES:\n    \
    mtdump movie.mp4\n    \
    mtdump --metadata music.m4a\n    \
    mtdump --skip-clusters video.mkv\n    \
    mtdump --json video.webm")]
struct Args {
    /// File to inspect
    input: PathBuf,

    /// Parse iTunes metadata under moov.udta.meta.ilst (BMFF only)
    #[arg(short, long)]
    metadata: bool,

    /// Record clusters without traversing their contents (EBML only)
    #[arg(short = 'c', long)]
    skip_clusters: bool,

    /// JSON summary output for programmatic parsing
    #[arg(long, conflicts_with = "verbose")]
    json: bool,

    /// Verbose parse tracing
    #[arg(short, long)]
    verbose: bool,
}

/// Machine-readable summary of a parsed file.
#[derive(Debug, Serialize)]
struct JsonSummary {
    format: &'static str,
    file_size: u64,
    node_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    time_scale: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    documents: Vec<JsonDocument>,
}

/// One EBML document in the JSON summary.
#[derive(Debug, Serialize)]
struct JsonDocument {
    doc_type: String,
    doc_type_version: u64,
}

fn main() {
    let args = Args::parse();

    if args.verbose {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_target(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    if let Err(message) = run(&args) {
        eprintln!("{} {}", style("error:").red().bold(), message);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), String> {
    let format = sniff_format(&args.input)?;
    debug!("detected {} input", format);

    match format {
        "ebml" => dump_ebml(args),
        _ => dump_bmff(args),
    }
}

/// Decide between the two engines from the first header bytes.
fn sniff_format(path: &std::path::Path) -> Result<&'static str, String> {
    let mut head = [0u8; 8];
    let mut file = File::open(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    let got = file.read(&mut head).map_err(|e| e.to_string())?;
    if mediatree_mkv::is_ebml_signature(&head[..got]) {
        Ok("ebml")
    } else {
        Ok("bmff")
    }
}

fn dump_bmff(args: &Args) -> Result<(), String> {
    let mut file = BmffFile::open(&args.input).map_err(|e| e.to_string())?;
    let options = BmffOptions {
        parse_metadata: args.metadata,
    };
    file.parse(&options).map_err(|e| e.to_string())?;

    if args.json {
        let summary = JsonSummary {
            format: "bmff",
            file_size: file.len(),
            node_count: file.tree().len() - 1,
            time_scale: Some(file.summary().time_scale),
            documents: Vec::new(),
        };
        println!("{}", serde_json::to_string_pretty(&summary).unwrap());
        return Ok(());
    }

    println!(
        "{} {} ({} bytes)",
        style("bmff").cyan().bold(),
        args.input.display(),
        file.len()
    );
    print_tree(file.tree(), |node| {
        let mut name = FourCc::from_u32(node.id as u32).to_string();
        if let Some(uuid) = &node.uuid {
            write!(name, " {{{}}}", uuid).unwrap();
        }
        if node.synthetic {
            name.push_str(" (synthetic)");
        }
        name
    });
    Ok(())
}

fn dump_ebml(args: &Args) -> Result<(), String> {
    let mut file = EbmlFile::open(&args.input).map_err(|e| e.to_string())?;
    let options = EbmlOptions {
        skip_clusters: args.skip_clusters,
        return_after_cluster: false,
    };
    file.parse(&options).map_err(|e| e.to_string())?;

    if args.json {
        let summary = JsonSummary {
            format: "ebml",
            file_size: file.len(),
            node_count: file.tree().len() - 1,
            time_scale: None,
            documents: file
                .documents()
                .iter()
                .map(|doc| JsonDocument {
                    doc_type: doc.doc_type.clone(),
                    doc_type_version: doc.doc_type_version,
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&summary).unwrap());
        return Ok(());
    }

    println!(
        "{} {} ({} bytes)",
        style("ebml").cyan().bold(),
        args.input.display(),
        file.len()
    );
    for doc in file.documents() {
        println!(
            "  document {} v{} (read v{})",
            style(&doc.doc_type).green(),
            doc.doc_type_version,
            doc.doc_type_read_version
        );
    }
    print_tree(file.tree(), |node| {
        schema::element_name(node.id)
            .map(str::to_owned)
            .unwrap_or_else(|| format!("0x{:X}", node.id))
    });
    Ok(())
}

thread_local! {
    /// Per-call line composition buffer for the printer.
    static LINE: RefCell<String> = RefCell::new(String::with_capacity(512));
}

/// Depth-first dump, one line per node.
fn print_tree<P: std::fmt::Display>(tree: &Tree<P>, name_of: impl Fn(&Node<P>) -> String) {
    for id in tree.descendants(tree.root()).skip(1) {
        let node = tree.node(id);
        LINE.with(|line| {
            let mut line = line.borrow_mut();
            line.clear();
            for _ in 1..node.level {
                line.push_str("  ");
            }
            write!(
                line,
                "{} [{}, {}]",
                style(name_of(node)).yellow(),
                node.offset,
                node.end
            )
            .unwrap();
            let value = node.payload.to_string();
            if !value.is_empty() {
                write!(line, " = {}", value).unwrap();
            }
            println!("{}", line);
        });
    }
}
