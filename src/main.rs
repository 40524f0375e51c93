mod feed;
mod output;
mod parser;

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;

use output::Layout;

const INPUT_PATH: &str = "./top-rss-list.md";
const OUTPUT_PATH: &str = "./top-rss-list.json";

const NAME_COLUMNS: usize = 28;
const URL_COLUMNS: usize = 60;

#[derive(Parser)]
#[command(name = "parse-top-rss-list", about = "Convert a markdown table of RSS feeds into a JSON list")]
struct Cli {
    /// Defaults to `convert` with the standard file names
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the markdown table, print the JSON list and save it
    Convert {
        /// Markdown file to read
        #[arg(short, long, default_value = INPUT_PATH)]
        input: PathBuf,
        /// JSON file to (over)write
        #[arg(short, long, default_value = OUTPUT_PATH)]
        output: PathBuf,
        /// Indented output instead of a single line
        #[arg(long)]
        pretty: bool,
    },
    /// Show a generated feed list as a table
    List {
        /// JSON feed list to read
        #[arg(short, long, default_value = OUTPUT_PATH)]
        file: PathBuf,
        /// Max rows to display
        #[arg(short = 'n', long, default_value = "50")]
        limit: usize,
    },
}

fn main() -> anyhow::Result<()> {
    // stdout is reserved for the JSON list
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Convert {
        input: PathBuf::from(INPUT_PATH),
        output: PathBuf::from(OUTPUT_PATH),
        pretty: false,
    });

    match command {
        Commands::Convert { input, output: dest, pretty } => {
            let layout = if pretty { Layout::Pretty } else { Layout::Compact };
            run_convert(&input, &dest, layout, &mut std::io::stdout().lock())
        }
        Commands::List { file, limit } => list(&file, limit),
    }
}

fn convert(input: &Path, layout: Layout) -> anyhow::Result<String> {
    let entries = parser::read_entries(input)?;
    info!(input = %input.display(), feeds = entries.len(), "Parsed feed table");
    output::render(&entries, layout)
}

/// Print the JSON list to `out`, then save the same text to `dest`.
fn run_convert(input: &Path, dest: &Path, layout: Layout, out: &mut impl Write) -> anyhow::Result<()> {
    let json = convert(input, layout)?;
    writeln!(out, "{}", json)?;
    out.flush()?;
    output::write_file(dest, &json)?;
    info!(output = %dest.display(), bytes = json.len(), "Saved feed list");
    Ok(())
}

fn list(file: &Path, limit: usize) -> anyhow::Result<()> {
    let entries = feed::load_entries(file)?;
    info!(file = %file.display(), feeds = entries.len(), "Loaded feed list");
    if entries.is_empty() {
        println!("No feeds found.");
        return Ok(());
    }

    println!("{:>3} | {} | {}", "#", fit_column("Name", NAME_COLUMNS), "URL");
    println!("{}", "-".repeat(96));
    for (i, e) in entries.iter().take(limit).enumerate() {
        let url = fit_column(&e.url, URL_COLUMNS);
        println!("{:>3} | {} | {}", i + 1, fit_column(&e.name, NAME_COLUMNS), url.trim_end());
    }

    println!("\n{} of {} feeds", entries.len().min(limit), entries.len());
    Ok(())
}

/// Truncate with `...` and pad with spaces to exactly `columns` terminal cells.
fn fit_column(s: &str, columns: usize) -> String {
    let mut out = String::with_capacity(s.len() + columns);
    let mut used = 0;
    if text_width(s) <= columns {
        out.push_str(s);
        used = text_width(s);
    } else {
        let budget = columns.saturating_sub(3);
        for c in s.chars() {
            let w = char_width(c);
            if used + w > budget {
                break;
            }
            out.push(c);
            used += w;
        }
        out.push_str("...");
        used += 3;
    }
    out.push_str(&" ".repeat(columns.saturating_sub(used)));
    out
}

fn text_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// CJK, Hangul, fullwidth forms and emoji take two cells.
fn char_width(c: char) -> usize {
    match c as u32 {
        0x1100..=0x115F
        | 0x2E80..=0x303E
        | 0x3041..=0x33FF
        | 0x3400..=0x4DBF
        | 0x4E00..=0x9FFF
        | 0xA000..=0xA4CF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFE30..=0xFE4F
        | 0xFF00..=0xFF60
        | 0xFFE0..=0xFFE6
        | 0x1F300..=0x1F64F
        | 0x1F900..=0x1F9FF
        | 0x20000..=0x3FFFD => 2,
        _ => 1,
    }
}
