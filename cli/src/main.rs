//! mdexport CLI - markdown note export tool

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;

use mdexport::{build_flow, export, ExportFormat, ExportOptions, SourceDocument};

#[derive(Parser)]
#[command(name = "mdexport")]
#[command(version)]
#[command(about = "Export markdown notes to PDF, DOCX, and raw Markdown", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export as raw Markdown
    #[command(alias = "md")]
    Markdown(ExportArgs),

    /// Export as a paginated PDF
    Pdf(ExportArgs),

    /// Export as a reflowable DOCX
    Docx(ExportArgs),

    /// Export all three formats at once
    Convert(ExportArgs),

    /// Print the flow document structure as JSON
    Inspect {
        /// Input markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Document title (defaults to the input file stem)
        #[arg(short, long)]
        title: Option<String>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },
}

#[derive(clap::Args)]
struct ExportArgs {
    /// Input markdown file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output directory (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Document title (defaults to the input file stem)
    #[arg(short, long)]
    title: Option<String>,

    /// Bullet glyph for DOCX list items
    #[arg(long)]
    list_marker: Option<char>,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Markdown(args) => run_export(&args, &[ExportFormat::Markdown]),
        Commands::Pdf(args) => run_export(&args, &[ExportFormat::Pdf]),
        Commands::Docx(args) => run_export(&args, &[ExportFormat::Docx]),
        Commands::Convert(args) => run_export(
            &args,
            &[ExportFormat::Markdown, ExportFormat::Pdf, ExportFormat::Docx],
        ),
        Commands::Inspect {
            input,
            title,
            compact,
        } => run_inspect(&input, title, compact),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{} {}", "error:".red().bold(), message);
            ExitCode::FAILURE
        }
    }
}

fn read_document(input: &Path, title: Option<String>) -> Result<SourceDocument, String> {
    let content = fs::read_to_string(input)
        .map_err(|e| format!("cannot read {}: {}", input.display(), e))?;
    let title = title.unwrap_or_else(|| {
        input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    });
    Ok(SourceDocument::new(title, content))
}

fn run_export(args: &ExportArgs, formats: &[ExportFormat]) -> Result<(), String> {
    let doc = read_document(&args.input, args.title.clone())?;

    let mut options = ExportOptions::default();
    if let Some(marker) = args.list_marker {
        options = options.with_list_marker(marker);
    }

    let output_dir = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));

    for &format in formats {
        let artifact = export(&doc, format, &options)
            .map_err(|e| format!("{}: {}", format.failure_message(), e))?;
        let path = artifact
            .save_to(&output_dir)
            .map_err(|e| format!("{}: {}", format.failure_message(), e))?;
        println!(
            "{} {} ({} bytes)",
            "exported".green().bold(),
            path.display(),
            artifact.len()
        );
    }

    Ok(())
}

fn run_inspect(input: &Path, title: Option<String>, compact: bool) -> Result<(), String> {
    let doc = read_document(input, title)?;
    let flow = build_flow(&doc);

    let json = if compact {
        serde_json::to_string(&flow)
    } else {
        serde_json::to_string_pretty(&flow)
    }
    .map_err(|e| format!("cannot serialize flow document: {}", e))?;

    println!("{}", json);
    Ok(())
}
