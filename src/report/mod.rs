use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::input::summaries::EpochMean;
use crate::model::interval::IntervalEstimate;
use crate::model::mean_test::MeanComparison;
use crate::model::variance_test::VarianceComparison;

pub mod json;
pub mod text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArtifactSummary {
    pub label: String,
    pub path: String,
    pub epochs: Vec<EpochMean>,
    pub interval: IntervalEstimate,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonSummary {
    pub x: String,
    pub y: String,
    pub mean: MeanComparison,
    pub variance: VarianceComparison,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub tool: String,
    pub version: String,
    pub alpha: f64,
    pub artifacts: Vec<ArtifactSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<ComparisonSummary>,
}

impl AnalysisReport {
    pub fn new(alpha: f64) -> Self {
        Self {
            tool: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            alpha,
            artifacts: Vec::new(),
            comparison: None,
        }
    }
}

pub fn artifact_label(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn render(report: &AnalysisReport, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(text::render_report_text(report)),
        OutputFormat::Json => json::render_report_json(report),
    }
}

pub fn write_output(rendered: &str, out: Option<&Path>) -> std::io::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, rendered)
        }
        None => emit(std::io::stdout().lock(), rendered),
    }
}

fn emit(mut sink: impl Write, rendered: &str) -> std::io::Result<()> {
    sink.write_all(rendered.as_bytes())?;
    sink.flush()
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

pub fn format_p(v: f64) -> String {
    format!("{:.3}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
