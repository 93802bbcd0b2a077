//! HKSCS Converter CLI
//!
//! Command-line tool for converting legacy HKSCS text to its current
//! Unicode form, and for inspecting how individual codepoints resolve
//! through the revision chain.

use clap::{Parser, Subcommand};
use hkscs_core::{Converter, Error};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "hkscs-cli")]
#[command(about = "HKSCS to Unicode converter", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a string argument and print the result
    Convert {
        /// Text to convert
        #[arg(short, long)]
        text: String,
    },

    /// Convert a whole text file
    ConvertFile {
        /// Path to the input file (UTF-8 text)
        #[arg(short, long)]
        input: PathBuf,

        /// Output path; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert every .txt file under one or more directories
    Batch {
        /// Root directories to scan
        #[arg(short, long, required = true)]
        root: Vec<PathBuf>,

        /// Directory for converted files
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Show how one character resolves through the revision chain
    Explain {
        /// The character to resolve
        #[arg(short, long)]
        char: String,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// List the revision chain and per-table entry counts
    Tables,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> hkscs_core::Result<()> {
    let cli = Cli::parse();
    let converter = Converter::new()?;

    match cli.command {
        Commands::Convert { text } => cmd_convert(&converter, &text),
        Commands::ConvertFile { input, output } => cmd_convert_file(&converter, &input, output.as_deref()),
        Commands::Batch { root, output } => cmd_batch(&converter, &root, &output),
        Commands::Explain { char, format } => cmd_explain(&converter, &char, &format),
        Commands::Tables => cmd_tables(&converter),
    }
}

fn cmd_convert(converter: &Converter, text: &str) -> hkscs_core::Result<()> {
    println!("{}", converter.convert_string(text));
    Ok(())
}

fn cmd_convert_file(
    converter: &Converter,
    input: &Path,
    output: Option<&Path>,
) -> hkscs_core::Result<()> {
    let content = fs::read_to_string(input)?;
    let converted = converter.convert_string(&content);

    match output {
        Some(path) => fs::write(path, converted)?,
        None => print!("{}", converted),
    }

    Ok(())
}

fn cmd_batch(converter: &Converter, roots: &[PathBuf], output: &Path) -> hkscs_core::Result<()> {
    fs::create_dir_all(output)?;

    let mut converted_files = 0usize;
    for root in roots {
        for entry in WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.extension().is_some_and(|ext| ext == "txt") {
                continue;
            }

            let content = fs::read_to_string(path)?;
            let converted = converter.convert_string(&content);

            let file_name = path.file_name().unwrap_or_default();
            fs::write(output.join(file_name), converted)?;
            converted_files += 1;
        }
    }

    println!("Converted {} file(s) into {}", converted_files, output.display());
    Ok(())
}

fn cmd_explain(converter: &Converter, input: &str, format: &str) -> hkscs_core::Result<()> {
    let mut chars = input.chars();
    let c = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => {
            return Err(Error::InvalidArity {
                count: input.chars().count(),
            })
        }
    };

    let steps = converter.explain(c);

    if format.eq_ignore_ascii_case("json") {
        println!("{}", serde_json::to_string_pretty(&steps)?);
        return Ok(());
    }

    let key = hkscs_core::codepoint_key(c);
    if steps.is_empty() {
        println!("U+{} is not remapped by any revision", key);
        return Ok(());
    }

    println!("Resolution chain for U+{}:", key);
    for step in &steps {
        println!(
            "  {:12} U+{} -> {}",
            step.revision,
            step.matched,
            step.replacement
                .iter()
                .map(|v| format!("U+{}", v))
                .collect::<Vec<_>>()
                .join(" ")
        );
    }
    println!("Result: {}", converter.convert_string(input));

    Ok(())
}

fn cmd_tables(converter: &Converter) -> hkscs_core::Result<()> {
    println!("Revision chain (oldest first):");
    for (name, size) in converter.table_sizes() {
        println!("  {:12} {} entries", name, size);
    }
    Ok(())
}
