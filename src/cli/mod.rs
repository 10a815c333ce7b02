use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

mod build;
mod languages;
mod validate;

/// Default directory holding one snippet file per language.
const DEFAULT_SNIPPETS_DIR: &str = "snippets";

/// Default path of the generated global snippet file.
const DEFAULT_OUTPUT: &str = "dist/syntax-frame.code-snippets";

#[derive(Parser)]
#[command(
    name = "snipgen",
    version,
    about = "Global editor snippet generator"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Show project information
    #[arg(long)]
    about: bool,
}

/// Output format for reports.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum Format {
    /// Human-readable text output (default)
    #[default]
    Text,
    /// JSON document
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge per-language snippet files into one global snippet file
    #[command(alias = "generate")]
    Build {
        /// Directory containing <language>.json snippet files
        #[arg(long, default_value = DEFAULT_SNIPPETS_DIR)]
        snippets: PathBuf,
        /// Path of the generated snippet file
        #[arg(long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
        /// Verify the output is up to date without writing (exit 1 if stale)
        #[arg(long)]
        check: bool,
    },
    /// Validate snippet files without writing any output
    Validate {
        /// Directory containing <language>.json snippet files
        #[arg(long, default_value = DEFAULT_SNIPPETS_DIR)]
        snippets: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// List the registered snippet files and their language labels
    Languages {
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

pub fn run(cli: Cli) {
    if cli.about {
        print_about();
        return;
    }

    match cli.command {
        Some(Commands::Build {
            snippets,
            output,
            check,
        }) => build::run(snippets, output, check),
        Some(Commands::Validate { snippets, format }) => validate::run(snippets, format),
        Some(Commands::Languages { format }) => languages::run(format),
        None => {
            eprintln!("Usage: snipgen <command> [args]");
            eprintln!("Run `snipgen --help` for details.");
            std::process::exit(1);
        }
    }
}

fn print_about() {
    println!(
        "snipgen: Global Editor Snippet Generator\n\
         ├─ version:    {}\n\
         ├─ author:     {}\n\
         ├─ source:     {}\n\
         └─ licence:    {} https://www.apache.org/licenses/LICENSE-2.0",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS"),
        env!("CARGO_PKG_REPOSITORY"),
        env!("CARGO_PKG_LICENSE"),
    );
}
