//! redline - paragraph- and word-level document redlining CLI
//!
//! A thin wrapper over the `redline` library: parses two plain-text
//! documents with the reference adapter, runs the comparison engine, and
//! renders the result to the terminal, to HTML, or to JSON.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Color, Table};
use console::style;

use redline::adapters::plaintext;
use redline::export::to_json_string;
use redline::render::{html, terminal};
use redline::{compare, EngineConfig};

/// redline - compare two document revisions and mark insertions,
/// deletions, and moves at paragraph and word granularity.
#[derive(Parser)]
#[command(name = "redline")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the original revision (plain text).
    original: PathBuf,

    /// Path to the modified revision (plain text).
    modified: PathBuf,

    /// Output format.
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: OutputFormat,

    /// Write output to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Paragraph alignment similarity threshold.
    #[arg(long, default_value_t = 0.4)]
    paragraph_threshold: f64,

    /// Move-detection similarity threshold.
    #[arg(long, default_value_t = 0.85)]
    move_threshold: f64,

    /// Minimum word count for a delete/insert pair to qualify as a move.
    #[arg(long, default_value_t = 3)]
    min_move_words: usize,

    /// Table row alignment similarity threshold.
    #[arg(long, default_value_t = 0.4)]
    row_threshold: f64,

    /// Compare independent regions concurrently with rayon.
    #[arg(long)]
    parallel: bool,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Terminal,
    Html,
    Json,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let original_text = fs::read_to_string(&cli.original)
        .with_context(|| format!("failed to read {}", cli.original.display()))?;
    let modified_text = fs::read_to_string(&cli.modified)
        .with_context(|| format!("failed to read {}", cli.modified.display()))?;

    let original = plaintext::parse(&original_text);
    let modified = plaintext::parse(&modified_text);

    let config = EngineConfig {
        paragraph_similarity_threshold: cli.paragraph_threshold,
        move_similarity_threshold: cli.move_threshold,
        min_move_words: cli.min_move_words,
        row_similarity_threshold: cli.row_threshold,
        parallel: cli.parallel,
    };

    log::info!(
        "comparing {} -> {}",
        cli.original.display(),
        cli.modified.display()
    );

    let result = compare(&original, &modified, &config)
        .with_context(|| "comparison failed an internal consistency check")?;

    let rendered = match cli.format {
        OutputFormat::Terminal => terminal::render(&result.stream),
        OutputFormat::Html => html::build_html_report(&result.stream, "Redline"),
        OutputFormat::Json => to_json_string(&result).with_context(|| "failed to serialize result to JSON")?,
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, &rendered).with_context(|| format!("failed to write {}", path.display()))?;
            println!(
                "{} {}",
                style("Wrote").green().bold(),
                path.display()
            );
        }
        None => println!("{rendered}"),
    }

    print_summary(&result.stats);

    Ok(())
}

fn print_summary(stats: &redline::Statistics) {
    eprintln!("\n{}", style("Summary").cyan().bold());

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).apply_modifier(UTF8_ROUND_CORNERS);
    table.set_header(vec![
        Cell::new("Metric").fg(Color::Cyan),
        Cell::new("Words").fg(Color::Cyan),
    ]);
    table.add_row(vec![Cell::new("Insertions"), Cell::new(stats.insertions).fg(Color::Blue)]);
    table.add_row(vec![Cell::new("Deletions"), Cell::new(stats.deletions).fg(Color::Red)]);
    table.add_row(vec![Cell::new("Moves"), Cell::new(stats.moves).fg(Color::Green)]);
    table.add_row(vec![Cell::new("Unchanged"), Cell::new(stats.unchanged)]);

    eprintln!("{table}");
}
