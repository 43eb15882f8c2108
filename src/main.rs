use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use bardscore::config::Config;
use bardscore::corpus::discovery;
use bardscore::evaluation::accuracy::{self, DegeneratePolicy};
use bardscore::evaluation::thresholds;
use bardscore::scoring::overlap::OverlapScorer;
use bardscore::vocabulary::Vocabulary;

/// Bardscore: guess whether a text fragment was written by Shakespeare.
///
/// Scores a fragment by the share of its distinct words found in a reference
/// vocabulary, and measures how accurate that guess is across thresholds.
#[derive(Parser)]
#[command(name = "bardscore", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify one file at each threshold and compare with its file-name label
    Classify {
        /// The fragment to classify (e.g. test-set/shakespeare.0350.txt)
        file: PathBuf,

        /// Word list, one word per line (default: shakespeare-words.txt)
        #[arg(long)]
        vocabulary: Option<PathBuf>,

        /// Comma-separated thresholds (default: 0.0,0.05,0.1,0.15)
        #[arg(long)]
        thresholds: Option<String>,
    },

    /// Show the overlap score of one file
    Score {
        /// The fragment to score
        file: PathBuf,

        /// Word list, one word per line (default: shakespeare-words.txt)
        #[arg(long)]
        vocabulary: Option<PathBuf>,
    },

    /// Measure accuracy across thresholds over a labeled corpus
    Evaluate {
        /// Directory of `<label>.<n>.<ext>` files (default: test-set)
        #[arg(long)]
        corpus: Option<PathBuf>,

        /// Corpus file extension (default: txt)
        #[arg(long)]
        extension: Option<String>,

        /// Word list, one word per line (default: shakespeare-words.txt)
        #[arg(long)]
        vocabulary: Option<PathBuf>,

        /// Comma-separated thresholds (default: 0.0,0.05,0.1,0.15)
        #[arg(long)]
        thresholds: Option<String>,

        /// Documents with no qualifying words: fail, zero or exclude (default: fail)
        #[arg(long)]
        degenerate: Option<DegeneratePolicy>,

        /// Print the report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging on stderr so reports on stdout stay clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("bardscore=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify {
            file,
            vocabulary,
            thresholds,
        } => {
            let mut config = Config::load()?;
            if let Some(path) = vocabulary {
                config.vocabulary_path = path;
            }
            config.require_vocabulary()?;

            let thresholds = resolve_thresholds(thresholds.as_deref())?;
            let vocabulary = load_vocabulary(&config)?;
            let document = discovery::load_document(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;

            let breakdown = OverlapScorer::new(&vocabulary).breakdown(&document.text);
            bardscore::output::terminal::display_classification(&document, &breakdown, &thresholds);
        }

        Commands::Score { file, vocabulary } => {
            let mut config = Config::load()?;
            if let Some(path) = vocabulary {
                config.vocabulary_path = path;
            }
            config.require_vocabulary()?;

            let vocabulary = load_vocabulary(&config)?;
            let document = discovery::load_document(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;

            let breakdown = OverlapScorer::new(&vocabulary).breakdown(&document.text);
            bardscore::output::terminal::display_score(&document, &breakdown);
        }

        Commands::Evaluate {
            corpus,
            extension,
            vocabulary,
            thresholds,
            degenerate,
            json,
        } => {
            let mut config = Config::load()?;
            if let Some(dir) = corpus {
                config.corpus_dir = dir;
            }
            if let Some(ext) = extension {
                config.extension = ext.trim_start_matches('.').to_string();
            }
            if let Some(path) = vocabulary {
                config.vocabulary_path = path;
            }
            if let Some(policy) = degenerate {
                config.degenerate_policy = policy;
            }
            config.require_vocabulary()?;
            config.require_corpus()?;

            let thresholds = resolve_thresholds(thresholds.as_deref())?;
            let vocabulary = load_vocabulary(&config)?;

            if !json {
                println!(
                    "Evaluating {} (*.{}) against {} vocabulary words...",
                    config.corpus_dir.display(),
                    config.extension,
                    vocabulary.len()
                );
            }

            let documents = discovery::load_corpus(&config.corpus_dir, &config.extension, !json)
                .with_context(|| format!("Failed to load corpus {}", config.corpus_dir.display()))?;

            let report = accuracy::evaluate(
                &thresholds,
                &documents,
                &vocabulary,
                config.degenerate_policy,
            )
            .context("Accuracy evaluation failed")?;

            info!(
                thresholds = report.len(),
                documents = report.documents,
                excluded = report.excluded,
                "Evaluation complete"
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                bardscore::output::terminal::display_accuracy_report(
                    &report,
                    config.degenerate_policy,
                );
                println!("\n{}", "Evaluation complete.".bold());
            }
        }
    }

    Ok(())
}

/// Parse `--thresholds`, falling back to the reference sweep.
fn resolve_thresholds(raw: Option<&str>) -> Result<Vec<f64>> {
    match raw {
        Some(raw) => thresholds::parse_thresholds(raw).context("Invalid --thresholds"),
        None => Ok(thresholds::reference_thresholds()),
    }
}

fn load_vocabulary(config: &Config) -> Result<Vocabulary> {
    Vocabulary::load(&config.vocabulary_path).with_context(|| {
        format!(
            "Failed to load vocabulary from {}",
            config.vocabulary_path.display()
        )
    })
}
