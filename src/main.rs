//! `Slidecraft` - text in, PowerPoint deck out.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};

use slidecraft::config::Config;
use slidecraft::constants::defaults;
use slidecraft::export::PptxWriter;
use slidecraft::preview::{render_markdown, PreviewOptions};
use slidecraft::types::{Directive, GenerationOptions, PresentationStyle};
use slidecraft::{DeckPipeline, DeckSession};

/// Generate a slide deck from free-form text
#[derive(Parser)]
#[command(
    name = "slidecraft",
    version,
    about = "Turn free-form text into an illustrated PowerPoint deck"
)]
struct Cli {
    /// Source text file ("-" reads stdin)
    input: PathBuf,

    /// Presentation style: balanced, text-focused or visual-focused
    #[arg(short, long, default_value = "BALANCED")]
    style: PresentationStyle,

    /// Output language (default: Chinese)
    #[arg(short, long)]
    language: Option<String>,

    /// Tone of the presentation (default: book club)
    #[arg(short, long)]
    tone: Option<String>,

    /// Output directory (default: SLIDECRAFT_OUTPUT_DIR or the current directory)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Output file name
    #[arg(short, long, default_value = defaults::OUTPUT_FILE_NAME)]
    file_name: String,

    /// Print a Markdown preview to stdout
    #[arg(long)]
    preview: bool,

    /// Skip writing the .pptx file
    #[arg(long)]
    no_export: bool,
}

fn directive(custom: Option<String>, preset: &str) -> Directive {
    custom.map_or_else(|| Directive::Preset(preset.to_string()), Directive::Custom)
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text).context("Failed to read stdin")?;
        return Ok(text);
    }
    fs_err::read_to_string(path).context("Failed to read input text")
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::load().context("Failed to load configuration")?;
    tracing::info!("{} {}", config.app_name(), config.app_version());

    let text = read_input(&cli.input)?;
    let options = GenerationOptions::new(
        cli.style,
        &directive(cli.language, defaults::LANGUAGE),
        &directive(cli.tone, defaults::TONE),
    )
    .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    let pipeline = DeckPipeline::from_config(&config);
    let mut session = DeckSession::new(pipeline);
    let progress = |message: &str| eprintln!("{message}");

    let presentation = session
        .generate(&text, &options, &progress)
        .await
        .map_err(|e| anyhow::anyhow!("{}\n  caused by: {e}", e.user_message()))?;
    eprintln!(
        "Generated {} slides ({} with images)",
        presentation.len(),
        presentation.image_count()
    );

    if cli.preview {
        let preview = PreviewOptions { embed_images: false, include_notes: true };
        if let Some(presentation) = session.presentation() {
            println!("{}", render_markdown(presentation, preview));
        }
    }

    if !cli.no_export {
        let dir = cli.out_dir.unwrap_or_else(|| config.output_dir.clone());
        let path = session
            .export(&PptxWriter::new(), &dir, Some(&cli.file_name))
            .map_err(|e| anyhow::anyhow!("{}\n  caused by: {e}", e.user_message()))?;
        eprintln!("Saved {}", path.display());
    }

    Ok(())
}
