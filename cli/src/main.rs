//! notemark CLI - Markdown note reduction and metrics tool

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use notemark::{
    content_preview, create_empty_note_content, extract_title, format_note_content,
    metrics_with_options, read_note, remove_h1_from_content, strip_markdown, ContentMetrics,
    JsonFormat, MetricsOptions, PreviewOptions, DEFAULT_NOTE_TITLE, DEFAULT_PREVIEW_LENGTH,
    WORDS_PER_MINUTE,
};

#[derive(Parser)]
#[command(name = "notemark")]
#[command(version)]
#[command(about = "Reduce Markdown notes to plain text and report note metrics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Strip Markdown syntax, printing plain text
    #[command(alias = "plain")]
    Strip {
        /// Input Markdown file (stdin if not specified)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the note title
    Title {
        /// Input Markdown file (stdin if not specified)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Print a one-line preview of the note body
    Preview {
        /// Input Markdown file (stdin if not specified)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Maximum preview length in characters
        #[arg(long, default_value_t = DEFAULT_PREVIEW_LENGTH)]
        max_length: usize,
    },

    /// Show title, preview, word count and reading time
    Stats {
        /// Input Markdown files (stdin if none)
        #[arg(value_name = "FILES")]
        inputs: Vec<PathBuf>,

        /// Output JSON
        #[arg(long)]
        json: bool,

        /// Output compact JSON
        #[arg(long, requires = "json")]
        compact: bool,

        /// Reading speed in words per minute
        #[arg(long, env = "NOTEMARK_WPM", default_value_t = WORDS_PER_MINUTE)]
        wpm: u32,

        /// Maximum preview length in characters
        #[arg(long, default_value_t = DEFAULT_PREVIEW_LENGTH)]
        max_length: usize,
    },

    /// Emit content for a new empty note
    New {
        /// Note title
        #[arg(short, long, default_value = DEFAULT_NOTE_TITLE)]
        title: String,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Trim a note, giving a heading-only note an empty body
    Format {
        /// Input Markdown file (stdin if not specified)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the note body without its title heading
    Body {
        /// Input Markdown file (stdin if not specified)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

type CmdResult = Result<(), Box<dyn std::error::Error>>;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Strip { input, output }) => {
            cmd_transform(input.as_deref(), output.as_deref(), strip_markdown)
        }
        Some(Commands::Title { input }) => {
            cmd_transform(input.as_deref(), None, extract_title)
        }
        Some(Commands::Preview { input, max_length }) => {
            let options = PreviewOptions::new().with_max_length(max_length);
            cmd_transform(input.as_deref(), None, |content| {
                content_preview(content, &options)
            })
        }
        Some(Commands::Stats {
            inputs,
            json,
            compact,
            wpm,
            max_length,
        }) => cmd_stats(&inputs, json, compact, wpm, max_length),
        Some(Commands::New { title, output }) => cmd_new(&title, output.as_deref()),
        Some(Commands::Format { input, output }) => {
            cmd_transform(input.as_deref(), output.as_deref(), format_note_content)
        }
        Some(Commands::Body { input }) => {
            cmd_transform(input.as_deref(), None, remove_h1_from_content)
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: notemark <COMMAND> [FILE]".yellow());
            println!("       notemark --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Read a note from `input`, or stdin when absent.
fn read_input(input: Option<&Path>) -> Result<String, Box<dyn std::error::Error>> {
    match input {
        Some(path) => Ok(read_note(path)?),
        None => {
            let mut content = String::new();
            io::stdin().read_to_string(&mut content)?;
            Ok(content)
        }
    }
}

fn write_output(output: Option<&Path>, content: &str) -> CmdResult {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_transform<F>(input: Option<&Path>, output: Option<&Path>, transform: F) -> CmdResult
where
    F: Fn(&str) -> String,
{
    let content = read_input(input)?;
    write_output(output, &transform(&content))
}

fn cmd_stats(
    inputs: &[PathBuf],
    json: bool,
    compact: bool,
    wpm: u32,
    max_length: usize,
) -> CmdResult {
    if wpm == 0 {
        return Err(notemark::Error::InvalidOption("--wpm must be greater than zero".into()).into());
    }

    let options = MetricsOptions::new()
        .with_words_per_minute(wpm)
        .with_preview_max_length(max_length);

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    if inputs.is_empty() {
        let metrics = metrics_with_options(&read_input(None)?, &options);
        if json {
            println!("{}", metrics.to_json(format)?);
        } else {
            print_metrics(None, &metrics);
        }
        return Ok(());
    }

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let mut results = Vec::with_capacity(inputs.len());
    for path in inputs {
        pb.set_message(path.display().to_string());
        let metrics = notemark::metrics_from_file(path, &options)?;
        log::debug!("{}: {} words", path.display(), metrics.word_count);
        results.push((path.as_path(), metrics));
        pb.inc(1);
    }
    pb.finish_and_clear();

    if json {
        let entries: Vec<serde_json::Value> = results
            .iter()
            .map(|(path, metrics)| {
                serde_json::json!({
                    "file": path.display().to_string(),
                    "metrics": metrics,
                })
            })
            .collect();
        println!("{}", notemark::metrics::to_json(&entries, format)?);
    } else {
        for (path, metrics) in &results {
            print_metrics(Some(*path), metrics);
        }
        if results.len() > 1 {
            let words: usize = results.iter().map(|(_, m)| m.word_count).sum();
            println!("{}: {} files, {} words", "Total".cyan().bold(), results.len(), words);
        }
    }

    Ok(())
}

fn print_metrics(path: Option<&Path>, metrics: &ContentMetrics) {
    if let Some(path) = path {
        println!("{}", path.display().to_string().cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
    }
    println!("{}: {}", "Title".bold(), metrics.title);
    println!("{}: {}", "Preview".bold(), metrics.preview);
    println!("{}: {}", "Words".bold(), metrics.word_count);
    println!(
        "{}: {} min",
        "Reading time".bold(),
        metrics.reading_time_minutes
    );
    println!();
}

fn cmd_new(title: &str, output: Option<&Path>) -> CmdResult {
    let title = title.trim();
    if title.is_empty() {
        return Err(notemark::Error::InvalidOption("--title must not be empty".into()).into());
    }

    let content = create_empty_note_content(title);
    if let Some(path) = output {
        fs::write(path, &content)?;
        println!("{} {}", "Created".green(), path.display());
    } else {
        print!("{}", content);
    }
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "notemark".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Markdown note reduction and metrics tool");
    println!();
    println!("License: MIT");
}
