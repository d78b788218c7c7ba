//! mdpage CLI - Convert Markdown into paginated document layouts
//!
//! Usage:
//!   mdpage [OPTIONS] <COMMAND> <FILE>
//!
//! Commands:
//!   convert   Display the converted element sequence
//!   outline   Show headings and tables
//!   stats     Show document statistics
//!   export    Render the document to a file

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand, ValueEnum};
use log::LevelFilter;
use mdpage_core::{
    export_file, outline_entries, runs_to_markdown, DocumentElement, ExportRequest,
    JsonRenderer, ListKind, PageSetup, Parser, Renderer, TemplateKind, TextRenderer,
};

#[derive(Debug, ClapParser)]
#[command(name = "mdpage", version, about = "Markdown to paginated document converter")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Display the converted element sequence
    Convert {
        file: PathBuf,
        /// Output elements as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Show headings and tables
    Outline {
        file: PathBuf,
        /// Output labels as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Show document statistics
    Stats { file: PathBuf },
    /// Render the document to a file
    Export {
        file: PathBuf,
        /// Output path (default: input with the format's extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Page setup TOML file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Document kind: lesson-plan, test, thematic-plan, report, assignment, lab-work
        #[arg(short, long)]
        template: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Text,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Convert { file, json } => cmd_convert(&read_input(&file)?, json),
        Command::Outline { file, json } => cmd_outline(&read_input(&file)?, json),
        Command::Stats { file } => cmd_stats(&read_input(&file)?),
        Command::Export {
            file,
            output,
            format,
            config,
            template,
        } => cmd_export(file, output, format, config, template),
    }
}

fn read_input(path: &Path) -> Result<String> {
    if !path.exists() {
        anyhow::bail!("file \"{}\" not found", path.display());
    }
    fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path.display()))
}

// =============================================================================
// Convert Command
// =============================================================================

fn cmd_convert(input: &str, json: bool) -> Result<()> {
    let doc = Parser::new().parse(input);

    if json {
        println!("{}", serde_json::to_string_pretty(&doc.elements)?);
        return Ok(());
    }

    println!("Elements: {}", doc.len());
    for (i, element) in doc.iter().enumerate() {
        println!("  [{}] {}", i + 1, describe_element(element));
        print_element_detail(element, 2);
    }
    Ok(())
}

fn describe_element(element: &DocumentElement) -> String {
    match element {
        DocumentElement::Heading { level, .. } => format!("Heading (level {})", level),
        DocumentElement::Paragraph { runs } => format!("Paragraph ({} runs)", runs.len()),
        DocumentElement::ListItem { kind, level, .. } => {
            let kind = match kind {
                ListKind::Bullet => "bullet",
                ListKind::Numbered => "numbered",
            };
            format!("ListItem ({}, level {})", kind, level)
        }
        DocumentElement::Table { rows } => format!(
            "Table ({} rows, {} columns)",
            rows.len(),
            mdpage_core::ast::column_count(rows)
        ),
    }
}

fn print_element_detail(element: &DocumentElement, indent: usize) {
    let prefix = "  ".repeat(indent);

    match element {
        DocumentElement::Heading { text, .. } => println!("{}Text: {}", prefix, text),
        DocumentElement::Paragraph { runs } | DocumentElement::ListItem { runs, .. } => {
            println!("{}Content: {}", prefix, runs_to_markdown(runs));
        }
        DocumentElement::Table { rows } => {
            for (i, row) in rows.iter().enumerate() {
                let header_marker = if i == 0 { " (header)" } else { "" };
                println!("{}Row {}{}: {}", prefix, i + 1, header_marker, row.join(" | "));
            }
        }
    }
}

// =============================================================================
// Outline Command
// =============================================================================

fn cmd_outline(input: &str, json: bool) -> Result<()> {
    let entries = outline_entries(input);

    if json {
        let labels: Vec<String> = entries.iter().map(ToString::to_string).collect();
        println!("{}", serde_json::to_string_pretty(&labels)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No structure found");
    }
    for entry in &entries {
        println!("  - {}", entry);
    }
    Ok(())
}

// =============================================================================
// Stats Command
// =============================================================================

fn cmd_stats(input: &str) -> Result<()> {
    let doc = Parser::new().parse(input);
    let stats = DocumentStats::from_elements(&doc.elements, input);

    println!("Document Statistics");
    println!("-------------------");
    println!("Content:");
    println!("  Total elements: {}", stats.total);
    println!("  Headings:       {}", stats.headings);
    println!("  Paragraphs:     {}", stats.paragraphs);
    println!("  List items:     {}", stats.list_items);
    println!("  Tables:         {}", stats.tables);
    println!("  Table rows:     {}", stats.table_rows);
    println!();
    println!("Size:");
    println!("  Characters:     {}", stats.chars);
    println!("  Words (est.):   {}", stats.words);
    println!("  Lines:          {}", stats.lines);

    Ok(())
}

struct DocumentStats {
    total: usize,
    headings: usize,
    paragraphs: usize,
    list_items: usize,
    tables: usize,
    table_rows: usize,
    chars: usize,
    words: usize,
    lines: usize,
}

impl DocumentStats {
    fn from_elements(elements: &[DocumentElement], input: &str) -> Self {
        let mut stats = Self {
            total: elements.len(),
            headings: 0,
            paragraphs: 0,
            list_items: 0,
            tables: 0,
            table_rows: 0,
            chars: input.chars().count(),
            words: input.split_whitespace().count(),
            lines: input.lines().count(),
        };

        for element in elements {
            match element {
                DocumentElement::Heading { .. } => stats.headings += 1,
                DocumentElement::Paragraph { .. } => stats.paragraphs += 1,
                DocumentElement::ListItem { .. } => stats.list_items += 1,
                DocumentElement::Table { rows } => {
                    stats.tables += 1;
                    stats.table_rows += rows.len();
                }
            }
        }

        stats
    }
}

// =============================================================================
// Export Command
// =============================================================================

fn cmd_export(
    file: PathBuf,
    output: Option<PathBuf>,
    format: Format,
    config: Option<PathBuf>,
    template: Option<String>,
) -> Result<()> {
    let page = match config {
        Some(path) => PageSetup::load_from_path(&path)?,
        None => PageSetup::default(),
    };

    let mut request = ExportRequest::new(file).with_page(page);
    if let Some(path) = output {
        request = request.with_output(path);
    }
    if let Some(kind) = template {
        request = request.with_template(kind.parse::<TemplateKind>()?);
    }

    let renderer: Box<dyn Renderer> = match format {
        Format::Json => Box::new(JsonRenderer { pretty: true }),
        Format::Text => Box::new(TextRenderer),
    };

    let report = export_file(&request, renderer.as_ref())?;
    println!("{}", report);
    Ok(())
}
