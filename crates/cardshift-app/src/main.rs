use std::path::PathBuf;

use anyhow::Context as _;
use cardshift_app::convert::{ConvertOptions, check_file, translate_file};
use cardshift_core::config::{Settings, load_config};
use cardshift_core::types::CounterMode;
use cardshift_rfc::rfc::vcard::{Translator, TranslatorOptions};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cardshift")]
#[command(about = "Translate Android vCard exports into Apple's contact-card dialect")]
#[command(version)]
struct Cli {
    /// Settings file (defaults to config.toml in the working directory)
    #[arg(long, global = true, env = "CARDSHIFT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate an Android export and save it
    Translate {
        /// Android vCard export
        input: PathBuf,

        /// Where to write the result (defaults to the configured output path)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number relation and event items with one counter
        #[arg(long)]
        shared_counter: bool,

        /// Print constructs that could not be mapped
        #[arg(long)]
        report: bool,

        /// Write the cards re-serialized instead of the translated text
        #[arg(long)]
        normalize: bool,
    },

    /// Parse a vCard file and list its cards
    Check {
        /// vCard file
        input: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let config = if let Some(path) = &cli.config {
        Settings::load_from(path)?
    } else {
        load_config()?
    };

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    tracing::debug!(config = ?config, "Configuration loaded");

    match cli.command {
        Commands::Translate {
            input,
            output,
            shared_counter,
            report,
            normalize,
        } => {
            let mut options = TranslatorOptions::from(&config.translator);
            if shared_counter {
                options.counter_mode = CounterMode::Shared;
            }

            let output = output.unwrap_or_else(|| config.output.default_path());
            let convert = ConvertOptions {
                report,
                normalize: normalize || config.output.normalize,
            };
            let summary = translate_file(&Translator::new(options), &input, &output, convert)
                .with_context(|| format!("translating {}", input.display()))?;

            for diagnostic in &summary.diagnostics {
                eprintln!("{}: {diagnostic}", input.display());
            }
            println!("{} card(s) written to {}", summary.cards, output.display());
        }
        Commands::Check { input } => {
            let cards =
                check_file(&input).with_context(|| format!("checking {}", input.display()))?;

            println!("{} card(s)", cards.len());
            for card in &cards {
                println!(
                    "  {} (vCard {})",
                    card.formatted_name().unwrap_or("<no FN>"),
                    card.version
                );
            }
        }
    }

    Ok(())
}
