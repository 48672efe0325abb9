use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use mixx::config::Settings;
use mixx::document::io::{load_paragraphs, save_paragraphs};
use mixx::document::parsing::block::{Recognizer, parse_blocks};
use mixx::rebuild::rebuild;
use mixx::shuffle::shuffle_blocks;

#[derive(Parser)]
#[command(
    name = "mixx",
    version,
    about = "Shuffle multiple-choice quizzes in .docx files"
)]
struct Cli {
    /// Input quiz document
    #[arg(default_value = "questions.docx")]
    input: PathBuf,

    /// Output path (defaults to "<input stem>-shuffled.docx")
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Seed the shuffle for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Number of answer choices per question (overrides the config file)
    #[arg(long)]
    choices: Option<usize>,

    /// Parse only: print a JSON summary of the detected blocks and exit
    #[arg(long)]
    inspect: bool,

    /// Write the effective settings to the config file and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load()?;
    if let Some(choices) = cli.choices {
        settings.choices = choices;
    }
    let recognizer = Recognizer::from_settings(&settings)?;

    if cli.init_config {
        settings.save()?;
        if let Some(path) = Settings::get_config_path() {
            println!("Wrote settings to {}", path.display());
        }
        return Ok(());
    }

    let paragraphs = load_paragraphs(&cli.input)?;
    let mut blocks = parse_blocks(paragraphs, &recognizer);
    if blocks.is_empty() {
        bail!(
            "no question blocks found in {} (expected paragraphs starting with \"1. \", \"2. \", ...)",
            cli.input.display()
        );
    }

    if cli.inspect {
        let summaries: Vec<_> = blocks.iter().map(|block| block.summary()).collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    let mut rng: StdRng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    shuffle_blocks(&mut blocks, &mut rng);

    let output = cli
        .output
        .unwrap_or_else(|| default_output_path(&cli.input));
    save_paragraphs(&rebuild(&blocks, &recognizer), &output)?;

    println!(
        "Shuffled {} questions: {} -> {}",
        blocks.len(),
        cli.input.display(),
        output.display()
    );
    Ok(())
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("questions");
    input.with_file_name(format!("{stem}-shuffled.docx"))
}
