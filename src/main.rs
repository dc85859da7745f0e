mod config;
mod error;
mod input;
mod logging;
mod model;
mod report;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::{Mode, Settings, load_settings};
use crate::error::AppError;
use crate::input::{Sample, collect_eval_files, load_sample};
use crate::model::interval::estimate;
use crate::model::mean_test::mean_is_smaller;
use crate::model::variance_test::variance_is_equal;
use crate::report::{
    AnalysisReport, ArtifactSummary, ComparisonSummary, OutputFormat, artifact_label, render,
    write_output,
};

#[derive(Debug, Parser)]
#[command(
    name = "ahb-evalstats",
    version,
    about = "Confidence intervals and significance tests for AHB evaluation archives"
)]
struct Cli {
    /// TOML settings file.
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Layer `<settings>_dev.toml` over the settings file.
    #[arg(long, global = true)]
    dev: bool,
    /// Significance level; overrides the settings file.
    #[arg(long, global = true)]
    alpha: Option<f64>,
    /// Extraction directory; cleared before every archive.
    #[arg(long, global = true)]
    scratch: Option<PathBuf>,
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Write the report here instead of stdout.
    #[arg(long, global = true)]
    out: Option<PathBuf>,
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Confidence interval of the per-epoch mean score for each archive.
    Ci {
        #[arg(required = true)]
        archives: Vec<PathBuf>,
    },
    /// Is the mean of X smaller than that of Y, and are their variances equal?
    Compare { x: PathBuf, y: PathBuf },
    /// Confidence intervals for every evaluation archive in a directory.
    Scan { dir: PathBuf },
}

#[derive(Debug, Clone)]
struct RunConfig {
    alpha: f64,
    scratch_dir: PathBuf,
    eval_file_ending: String,
    format: OutputFormat,
    out: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mode = if cli.dev { Mode::Dev } else { Mode::Standard };
    let settings = load_settings(cli.settings.as_deref(), mode)?;
    logging::init(&settings.log_level, cli.verbose);
    if mode == Mode::Dev {
        tracing::info!("running in development mode");
    }

    let config = resolve_run_config(&cli, settings);
    tracing::debug!(
        alpha = config.alpha,
        scratch = %config.scratch_dir.display(),
        "resolved run configuration"
    );

    let report = build_report(&cli.command, &config)?;
    let rendered = render(&report, config.format)?;
    write_output(&rendered, config.out.as_deref()).map_err(|source| AppError::Output {
        path: config.out.clone().unwrap_or_else(|| PathBuf::from("<stdout>")),
        source,
    })?;
    if let Some(out) = &config.out {
        tracing::info!(path = %out.display(), "report written");
    }
    Ok(())
}

fn resolve_run_config(cli: &Cli, settings: Settings) -> RunConfig {
    RunConfig {
        alpha: cli.alpha.unwrap_or(settings.alpha),
        scratch_dir: cli.scratch.clone().unwrap_or(settings.scratch_dir),
        eval_file_ending: settings.eval_file_ending,
        format: cli.format,
        out: cli.out.clone(),
    }
}

fn build_report(command: &Command, config: &RunConfig) -> Result<AnalysisReport, AppError> {
    let mut report = AnalysisReport::new(config.alpha);
    match command {
        Command::Ci { archives } => {
            for archive in archives {
                let (summary, _) = analyze_archive(archive, config)?;
                report.artifacts.push(summary);
            }
        }
        Command::Compare { x, y } => {
            let (summary_x, values_x) = analyze_archive(x, config)?;
            let (summary_y, values_y) = analyze_archive(y, config)?;

            let context = format!("comparing {} with {}", summary_x.label, summary_y.label);
            let mean = mean_is_smaller(&values_x, &values_y, config.alpha)
                .map_err(AppError::stats(context.clone()))?;
            let variance = variance_is_equal(&values_x, &values_y, config.alpha)
                .map_err(AppError::stats(context))?;

            report.comparison = Some(ComparisonSummary {
                x: summary_x.label.clone(),
                y: summary_y.label.clone(),
                mean,
                variance,
            });
            report.artifacts.push(summary_x);
            report.artifacts.push(summary_y);
        }
        Command::Scan { dir } => {
            let files = collect_eval_files(dir, &config.eval_file_ending)?;
            if files.is_empty() {
                return Err(AppError::NoEvalFiles {
                    dir: dir.clone(),
                    ending: config.eval_file_ending.clone(),
                });
            }
            tracing::info!(n_files = files.len(), dir = %dir.display(), "scanning archives");
            for file in &files {
                let (summary, _) = analyze_archive(file, config)?;
                report.artifacts.push(summary);
            }
        }
    }
    Ok(report)
}

fn analyze_archive(
    archive: &Path,
    config: &RunConfig,
) -> Result<(ArtifactSummary, Vec<f64>), AppError> {
    let sample: Sample = load_sample(archive, &config.scratch_dir)?;
    if sample.is_empty() {
        tracing::warn!(archive = %archive.display(), "archive holds no summaries");
    }
    tracing::debug!(n_epochs = sample.len(), "per-epoch sample ready");
    let values = sample.values();
    let label = artifact_label(archive);
    let interval = estimate(&values, config.alpha)
        .map_err(AppError::stats(format!("estimating interval for {label}")))?;

    let summary = ArtifactSummary {
        label,
        path: archive.display().to_string(),
        epochs: sample.epochs,
        interval,
    };
    Ok((summary, values))
}

#[cfg(test)]
#[path = "../tests/src_inline/support.rs"]
mod test_support;

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
