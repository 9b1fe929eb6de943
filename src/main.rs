//! Addiction Predictor - CLI Entry Point

use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use addiction_predictor::api::commands;
use addiction_predictor::config::{AppConfig, ConfigOverrides};
use addiction_predictor::constants::{APP_NAME, APP_VERSION};
use addiction_predictor::logic::reference::ReferenceStore;
use addiction_predictor::logic::scoring::{rules, ClassificationResult, ScoringEngine};
use addiction_predictor::InputRecord;

#[derive(Parser, Debug)]
#[command(name = "addiction-predictor", version, about = "Predict a phone addiction level from daily habits")]
struct Cli {
    /// Model artifact (.onnx or linear .json) [env: PREDICTOR_MODEL_PATH]
    #[arg(long, global = true)]
    model: Option<String>,

    /// Reference dataset [env: PREDICTOR_DATASET_PATH]
    #[arg(long, global = true)]
    dataset: Option<String>,

    /// Score column in the dataset [env: PREDICTOR_SCORE_COLUMN]
    #[arg(long, global = true)]
    score_column: Option<String>,

    /// Dataset field delimiter
    #[arg(long, global = true)]
    delimiter: Option<char>,

    /// JSON file overriding recommendation copy [env: PREDICTOR_RECOMMENDATIONS]
    #[arg(long, global = true)]
    recommendations: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Predict the addiction level for one person
    Predict(PredictArgs),
    /// Show what was loaded
    Status {
        /// Re-hash the model artifact against the load-time checksum
        #[arg(long)]
        verify: bool,
    },
}

#[derive(Args, Debug)]
struct PredictArgs {
    /// Age in years (10-100)
    #[arg(long)]
    age: u32,
    /// Daily phone usage, hours/day (0-12)
    #[arg(long)]
    daily_usage_hours: f32,
    /// Sleep, hours/day (0-24)
    #[arg(long)]
    sleep_hours: f32,
    /// Phone checks per day (0-150)
    #[arg(long)]
    phone_checks_per_day: u32,
    /// Distinct apps used per day (0-20)
    #[arg(long)]
    apps_used_daily: u32,
    /// Social media, hours/day (0-24)
    #[arg(long)]
    social_media_hours: f32,
    /// Mobile gaming, hours/day (0-24)
    #[arg(long)]
    gaming_hours: f32,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl PredictArgs {
    fn record(&self) -> InputRecord {
        InputRecord {
            age: self.age,
            daily_usage_hours: self.daily_usage_hours,
            sleep_hours: self.sleep_hours,
            phone_checks_per_day: self.phone_checks_per_day,
            apps_used_daily: self.apps_used_daily,
            social_media_hours: self.social_media_hours,
            gaming_hours: self.gaming_hours,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Cli::parse()) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    log::info!("Starting {} v{}", APP_NAME, APP_VERSION);

    let config = AppConfig::from_env().with_overrides(ConfigOverrides {
        model_path: cli.model,
        dataset_path: cli.dataset,
        score_column: cli.score_column,
        delimiter: cli.delimiter,
        recommendations_path: cli.recommendations,
    })?;

    // Reject bad input before touching the artifacts
    if let Command::Predict(args) = &cli.command {
        args.record().validate()?;
    }

    let store = ReferenceStore::load_with_options(
        &config.model_path,
        &config.dataset_path,
        &config.dataset_options(),
    )
    .context("reference store failed to load; refusing to serve predictions")?;
    let store = Arc::new(store);

    match cli.command {
        Command::Predict(args) => {
            let engine = ScoringEngine::with_recommendations(store, config.recommendations()?);
            let result = commands::run_prediction(&engine, args.record()).map_err(anyhow::Error::msg)?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                render(&result);
            }
        }
        Command::Status { verify } => {
            let status = commands::get_store_status(&store);
            println!("{}", serde_json::to_string_pretty(&status)?);

            if verify {
                let ok = commands::verify_model_checksum(&store).map_err(anyhow::Error::msg)?;
                println!("model checksum: {}", if ok { "OK" } else { "MISMATCH" });
                if !ok {
                    std::process::exit(2);
                }
            }
        }
    }

    Ok(())
}

fn render(result: &ClassificationResult) {
    let comparison = result.comparison();
    let (low, high) = result.category.score_range();

    println!("Predicted Addiction Level: {:.2}", result.score);
    println!(
        "Category: {} [{}] (scale {:.0}-{:.0})",
        result.category.label(),
        result.category.color(),
        low,
        high
    );
    println!(
        "{:.2}% of people in the dataset have an addiction level equal to or higher than you.",
        comparison.at_or_above_percent
    );
    println!();
    println!("Comparison with others in dataset:");
    println!("  You or Higher  {} {:.2}%", bar(comparison.at_or_above_percent), comparison.at_or_above_percent);
    println!("  Lower than You {} {:.2}%", bar(comparison.below_percent), comparison.below_percent);
    println!();
    println!("Recommendation: {}", result.recommendation);
    println!();
    println!(
        "Scale: Low < {} <= Moderate < {} <= High",
        rules::LOW_MAX,
        rules::MODERATE_MAX
    );
}

fn bar(percent: f64) -> String {
    const WIDTH: usize = 40;
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * WIDTH as f64).round() as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(WIDTH - filled))
}
