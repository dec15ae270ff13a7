//! Phrasebook
//!
//! Command line entry point for inspecting and editing translation dictionaries

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::info;

use phrasebook::{
    config::Settings,
    utils::logging,
    Dictionary, TranslationStore,
};

#[derive(Parser)]
#[command(name = "phrasebook", version, about = "Inspect and edit translation dictionaries")]
struct Cli {
    /// Configuration file name, without extension
    #[arg(long, default_value = "phrasebook")]
    config: String,

    /// Override the configured data directory
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Translate a phrase
    Translate { language: String, phrase: String },
    /// Print the merged dictionary for a language
    Show { language: String },
    /// Replace a language's dictionary with the contents of a JSON file
    Save { language: String, file: PathBuf },
    /// Export a language's merged dictionary to the temp area
    Export { language: String },
    /// List languages with a dictionary on disk
    Languages,
    /// Show key counts for a language
    Stats { language: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // Load configuration
    let mut settings = Settings::from_file(&cli.config)?;
    if let Some(data_dir) = cli.data_dir {
        settings.storage.data_dir = data_dir;
    }
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!(
        data_dir = %settings.storage.data_dir.display(),
        auto_create = settings.features.auto_create,
        "Starting {}",
        phrasebook::info()
    );

    let store = TranslationStore::from_settings(&settings);

    match cli.command {
        Command::Translate { language, phrase } => {
            println!("{}", store.translate(&language, &phrase).await);
        }
        Command::Show { language } => {
            let translations = store.get_translations(&language).await;
            let sorted: std::collections::BTreeMap<_, _> = translations.into_iter().collect();
            println!("{}", serde_json::to_string_pretty(&sorted)?);
        }
        Command::Save { language, file } => {
            let content = tokio::fs::read_to_string(&file)
                .await
                .with_context(|| format!("reading {}", file.display()))?;
            let translations: Dictionary = serde_json::from_str(&content)
                .with_context(|| format!("parsing {}", file.display()))?;

            let response = store.save_translation(&language, &translations).await;
            println!("{}", response.message);
            if !response.success {
                bail!("save failed for {}", language);
            }
        }
        Command::Export { language } => {
            let translations = store.get_translations(&language).await;
            let logical_path = store.export_translation(&translations).await;
            if logical_path.is_empty() {
                bail!("export failed for {}", language);
            }
            println!("{}", logical_path);
        }
        Command::Languages => {
            for language in store.available_languages().await {
                println!("{}", language);
            }
        }
        Command::Stats { language } => {
            let stats = store.stats(&language).await;
            println!(
                "{}: {} of {} baseline keys translated ({:.1}%), {} keys not in baseline",
                stats.language,
                stats.overridden_keys,
                stats.baseline_keys,
                stats.coverage_percent(),
                stats.orphaned_keys()
            );
        }
    }

    Ok(())
}
