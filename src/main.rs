use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;
use symptom_matcher::config::{DEFAULT_CATALOG_PATH, ENV_CATALOG_PATH};
use symptom_matcher::report::{humanize_token, render};
use symptom_matcher::{SymptomChecker, SymptomCheckerConfig};

/// Suggest possible diseases from a list of symptoms
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Disease/symptom table (.csv or .parquet)
    #[arg(long, env = ENV_CATALOG_PATH, default_value = DEFAULT_CATALOG_PATH)]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank diseases for a comma-separated list of symptoms
    Predict {
        /// e.g. "fever, cough, headache"
        symptoms: String,

        /// Maximum number of results (perfect matches are always returned)
        #[arg(long)]
        top_n: Option<usize>,

        /// Discard candidates scoring below this value
        #[arg(long)]
        min_score: Option<f64>,

        /// Print results as JSON instead of a report
        #[arg(long)]
        json: bool,
    },
    /// List every symptom known to the catalog
    Symptoms,
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let defaults = SymptomCheckerConfig::from_env();

    let mut builder = SymptomCheckerConfig::builder()
        .catalog_path(&cli.catalog)
        .top_n(defaults.top_n)
        .min_score(defaults.min_score)
        .parallel_threshold(defaults.parallel_threshold)
        .display_limit(defaults.display_limit);

    if let Command::Predict {
        top_n, min_score, ..
    } = &cli.command
    {
        if let Some(top_n) = top_n {
            builder = builder.top_n(*top_n);
        }
        if let Some(min_score) = min_score {
            builder = builder.min_score(*min_score);
        }
    }

    let config = builder.build().context("Invalid configuration")?;
    let checker = SymptomChecker::from_config(config)
        .with_context(|| format!("Failed to load symptom catalog from {}", cli.catalog.display()))?;

    match cli.command {
        Command::Predict { symptoms, json, .. } => {
            let assessment = checker.assess(&symptoms);
            info!(
                "Query '{}' produced {} results",
                assessment.query.to_query_string(),
                assessment.results.len()
            );

            if json {
                let output = serde_json::to_string_pretty(&assessment.results)
                    .context("Failed to serialise results")?;
                println!("{output}");
            } else {
                println!("{}", render(&assessment, checker.config().display_limit));
            }
        }
        Command::Symptoms => {
            for token in checker.catalog().symptom_vocabulary() {
                println!("{}", humanize_token(token));
            }
        }
    }

    Ok(())
}
