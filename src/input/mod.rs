use std::path::{Path, PathBuf};

pub mod archive;
pub mod summaries;

use archive::extract_archive;
use summaries::{EpochMean, find_summaries, group_by_epoch, parse_summaries};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("no {} found under {}", summaries::SUMMARIES_FILE_NAME, .root.display())]
    NotFound { root: PathBuf },
    #[error(
        "refusing to clear {}: not empty and not a scratch directory created by this tool",
        .dir.display()
    )]
    ForeignScratch { dir: PathBuf },
    #[error("malformed summaries document: {0}")]
    Document(String),
    #[error("malformed summary record {index}: {reason}")]
    Format { index: usize, reason: String },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Per-epoch mean scores of one evaluation archive, in first-seen epoch order.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub source: PathBuf,
    pub epochs: Vec<EpochMean>,
}

impl Sample {
    pub fn values(&self) -> Vec<f64> {
        self.epochs.iter().map(|e| e.mean).collect()
    }

    pub fn len(&self) -> usize {
        self.epochs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.epochs.is_empty()
    }
}

pub fn load_sample(archive: &Path, scratch_dir: &Path) -> Result<Sample, InputError> {
    extract_archive(archive, scratch_dir)?;

    let summaries_path = find_summaries(scratch_dir)?;
    tracing::debug!(path = %summaries_path.display(), "located summaries");

    let bytes = std::fs::read(&summaries_path)?;
    let records = parse_summaries(&bytes)?;
    let epochs = group_by_epoch(&records);

    tracing::info!(
        archive = %archive.display(),
        n_records = records.len(),
        n_epochs = epochs.len(),
        "loaded sample"
    );

    Ok(Sample {
        source: archive.to_path_buf(),
        epochs,
    })
}

/// Files directly inside `dir` whose name ends with `ending`, sorted by path.
pub fn collect_eval_files(dir: &Path, ending: &str) -> Result<Vec<PathBuf>, InputError> {
    let mut out = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().ends_with(ending) {
            out.push(entry.path());
        }
    }
    out.sort();
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
