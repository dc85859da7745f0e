use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use zip::ZipArchive;

use crate::input::InputError;

/// Marks a directory as scratch space owned by this tool.
pub const SCRATCH_MARKER: &str = ".ahb-evalstats-scratch";

/// Unpacks `archive` below `scratch_dir`, clearing whatever a previous run
/// left there first. Concurrent callers must use distinct scratch dirs.
pub fn extract_archive(archive: &Path, scratch_dir: &Path) -> Result<(), InputError> {
    if scratch_dir.exists() {
        ensure_owned_scratch(scratch_dir)?;
        tracing::debug!(scratch = %scratch_dir.display(), "clearing scratch directory");
        fs::remove_dir_all(scratch_dir)?;
    }
    fs::create_dir_all(scratch_dir)?;
    fs::write(scratch_dir.join(SCRATCH_MARKER), "")?;

    let file = File::open(archive).map_err(|e| {
        InputError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {e}", archive.display()),
        ))
    })?;
    let mut zip = ZipArchive::new(BufReader::new(file))?;
    let n_entries = zip.len();
    zip.extract(scratch_dir)?;

    tracing::debug!(
        archive = %archive.display(),
        scratch = %scratch_dir.display(),
        n_entries,
        "extracted evaluation archive"
    );
    Ok(())
}

/// Only empty directories or ones carrying the marker may be cleared.
fn ensure_owned_scratch(scratch_dir: &Path) -> Result<(), InputError> {
    if scratch_dir.join(SCRATCH_MARKER).is_file() {
        return Ok(());
    }
    if fs::read_dir(scratch_dir)?.next().is_none() {
        return Ok(());
    }
    Err(InputError::ForeignScratch {
        dir: scratch_dir.to_path_buf(),
    })
}
