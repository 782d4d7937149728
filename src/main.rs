use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use ui_detect_eval::{
    evaluate, load_directory, render_json, render_table, EvaluationConfig, OrphanPolicy,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

/// Score UI-element detections against ground truth.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory of ground-truth annotation JSON files
    #[arg(long)]
    truth: PathBuf,

    /// Directory of predicted annotation JSON files
    #[arg(long)]
    pred: PathBuf,

    /// JSON config file (classes, iou_threshold, orphan_predictions)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Comma-separated class set, overrides the config file
    #[arg(long, value_delimiter = ',')]
    classes: Option<Vec<String>>,

    /// Minimum IoU for a match, overrides the config file
    #[arg(long)]
    iou_threshold: Option<f64>,

    /// Score prediction files that have no ground-truth file as false positives
    #[arg(long)]
    score_orphan_predictions: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

impl Cli {
    fn evaluation_config(&self) -> Result<EvaluationConfig> {
        let mut config = match &self.config {
            Some(path) => EvaluationConfig::from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => EvaluationConfig::default(),
        };

        if let Some(classes) = &self.classes {
            config.classes = classes.iter().map(|c| c.trim().to_string()).collect();
        }
        if let Some(threshold) = self.iou_threshold {
            config.iou_threshold = threshold;
        }
        if self.score_orphan_predictions {
            config.orphan_predictions = OrphanPolicy::CountAsFalsePositives;
        }

        config.validate().context("invalid evaluation settings")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli.evaluation_config()?;

    let truth = load_directory(&cli.truth)
        .with_context(|| format!("failed to load ground truth from {}", cli.truth.display()))?;
    let preds = load_directory(&cli.pred)
        .with_context(|| format!("failed to load predictions from {}", cli.pred.display()))?;

    let report = evaluate(&truth, &preds, &config).context("evaluation failed")?;
    info!("{}", report.stats.summary());

    match cli.format {
        OutputFormat::Table => print!("{}", render_table(&report)),
        OutputFormat::Json => println!("{}", render_json(&report)?),
    }

    Ok(())
}
