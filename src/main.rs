//! Studia CLI - AI study-note summarisation
//!
//! The application logic is contained in lib.rs, and this file is responsible
//! for parsing arguments and handling top-level errors.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use std::path::PathBuf;
use studia::agent::GeminiSummarizer;
use studia::speech::{CommandSpeaker, Speaker};
use studia::{export, input, Config, Pipeline, SessionHistory, StudyNote};

#[derive(Parser)]
#[command(name = "studia")]
#[command(author, version, about = "CLI for AI study-note summarisation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarise study material from text files, PDFs, or stdin
    Summarise {
        /// Files to summarise (PDFs by extension); reads stdin when empty
        files: Vec<PathBuf>,
        /// Write the session history to a JSON file
        #[arg(long, value_name = "PATH")]
        json: Option<PathBuf>,
        /// Write the latest note to a Markdown report
        #[arg(long, value_name = "PATH")]
        markdown: Option<PathBuf>,
        /// Read the latest summary aloud
        #[arg(long)]
        speak: bool,
        /// Number of keywords to extract
        #[arg(long, value_name = "N")]
        top_keywords: Option<usize>,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Summarise {
            files,
            json,
            markdown,
            speak,
            top_keywords,
        }) => {
            summarise(files, json, markdown, speak, top_keywords).await?;
        }
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        }
        None => {
            // Default: summarise whatever arrives on stdin
            summarise(vec![], None, None, false, None).await?;
        }
    }

    Ok(())
}

async fn summarise(
    files: Vec<PathBuf>,
    json: Option<PathBuf>,
    markdown: Option<PathBuf>,
    speak: bool,
    top_keywords: Option<usize>,
) -> anyhow::Result<()> {
    let mut config = Config::load()?;
    if let Some(n) = top_keywords {
        config.pipeline.top_n = n;
    }

    let summarizer = GeminiSummarizer::from_config(&config)?;
    let pipeline = Pipeline::new(summarizer, config.pipeline.clone());
    let mut history = SessionHistory::new();

    if files.is_empty() {
        let text = input::read_stdin()?;
        println!("Summarising {} characters...\n", text.len());
        let note = pipeline.analyse(&text).await?;
        print_note(&note);
        history.record(note);
    } else {
        for path in &files {
            let text = input::load_path(path)?;
            println!("{}", format!("Summarising {}...", path.display()).dimmed());
            let note = pipeline.analyse(&text).await?;
            print_note(&note);
            history.record(note);
        }
    }

    if let Some(path) = json {
        export::write_history_json(&history, &path)?;
        println!("{}", format!("Saved history to {}", path.display()).green());
    }

    if let Some(path) = markdown {
        if let Some(note) = history.latest() {
            export::write_markdown_report(note, &path)?;
            println!("{}", format!("Saved report to {}", path.display()).green());
        }
    }

    if speak {
        if let Some(note) = history.latest() {
            let speaker = match &config.speech.program {
                Some(program) => CommandSpeaker::new(program.clone()),
                None => CommandSpeaker::platform_default(),
            };
            if let Err(e) = speaker.speak(&note.summary) {
                eprintln!("Warning: {}", e);
            }
        }
    }

    Ok(())
}

fn print_note(note: &StudyNote) {
    println!("=== {} ===\n", note.title.bold());

    println!("{}", "📄 Summary:".cyan());
    println!("  {}\n", note.summary);

    if !note.bullets.is_empty() {
        println!("{}", "📌 Important Points:".cyan());
        for bullet in &note.bullets {
            println!("  • {}", bullet);
        }
        println!();
    }

    if !note.keywords.is_empty() {
        println!("{}", "🔑 Keywords:".cyan());
        println!("  {}\n", note.keywords.join(", "));
    }

    println!("{}", "📊 Analytics:".cyan());
    println!("  Original words: {}", note.analytics.original_words);
    println!("  Summary words: {}", note.analytics.summary_words);
    println!("  Word reduction: {}%", note.analytics.reduction_percent);
    println!(
        "  Estimated reading time: {} minutes\n",
        note.analytics.reading_time
    );
}
