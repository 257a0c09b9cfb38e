use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::style::Stylize;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use versemark::{
    auto_style, segment_verse, style_for, Annotation, AutoHighlight, Segment, ThemeMode,
    UserHighlight,
};

#[derive(Parser)]
#[command(name = "versemark")]
#[command(about = "Render annotated verses in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a chapter with its highlights applied.
    ///
    /// Sample data ships in demos/: versemark render demos/john11.json
    /// -H demos/highlights.json -a demos/auto.json
    Render {
        /// JSON file with an array of {verse_number, text} records
        verses: PathBuf,
        /// JSON file with an array of user highlights
        #[arg(short = 'H', long)]
        highlights: Option<PathBuf>,
        /// JSON file with an array of auto-highlights
        #[arg(short, long)]
        auto: Option<PathBuf>,
        /// Color theme: light or dark
        #[arg(short, long, default_value = "dark")]
        theme: String,
    },
    /// Show the token breakdown of a piece of text
    Tokens {
        /// Text to tokenize
        text: String,
    },
}

#[derive(Debug, Deserialize)]
struct VerseRecord {
    verse_number: i32,
    text: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Render {
            verses,
            highlights,
            auto,
            theme,
        } => {
            let mode = ThemeMode::from_str(&theme)
                .with_context(|| format!("unknown theme '{}'", theme))?;
            render_chapter(&verses, highlights.as_deref(), auto.as_deref(), mode)
        }
        Commands::Tokens { text } => {
            show_tokens(&text);
            Ok(())
        }
    }
}

fn render_chapter(
    verses_path: &Path,
    highlights_path: Option<&Path>,
    auto_path: Option<&Path>,
    mode: ThemeMode,
) -> Result<()> {
    let verses: Vec<VerseRecord> = load_json(verses_path)?;
    let highlights: Vec<UserHighlight> = match highlights_path {
        Some(path) => load_json(path)?,
        None => Vec::new(),
    };
    let auto_highlights: Vec<AutoHighlight> = match auto_path {
        Some(path) => load_json(path)?,
        None => Vec::new(),
    };

    println!(
        "📖 {} verses, {} highlights, {} auto-highlights\n",
        verses.len(),
        highlights.len(),
        auto_highlights.len()
    );

    for verse in &verses {
        let segments = segment_verse(
            verse.verse_number,
            &verse.text,
            &highlights,
            &auto_highlights,
        );
        print!("{}  ", format!("{}", verse.verse_number).yellow().bold());
        for segment in &segments {
            print_segment(segment, mode);
        }
        println!();
    }

    Ok(())
}

fn print_segment(segment: &Segment, mode: ThemeMode) {
    match &segment.annotation {
        Some(Annotation::User(h)) => {
            print!("{}", style_for(h.color, mode).apply(&segment.text));
        }
        Some(Annotation::Auto(h)) => {
            print!("{}", auto_style(&h.theme_color, mode).apply(&segment.text));
        }
        None => print!("{}", segment.text),
    }
}

fn show_tokens(text: &str) {
    let tokens = versemark::tokenize(text, "t");
    println!("{} tokens:", tokens.len());
    for token in &tokens {
        let kind = if token.is_word { "word" } else { "    " };
        println!("  {}  {:?}", kind, token.text);
    }
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}
