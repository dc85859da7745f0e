use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::input::InputError;

pub const SUMMARIES_FILE_NAME: &str = "summaries.json";
pub const SCORE_PATH: [&str; 4] = ["scores", "ahb_scorer", "value", "overall"];

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRecord {
    /// Canonical JSON text of the `epoch` value; `None` when absent or null.
    pub epoch: Option<String>,
    pub overall: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpochMean {
    pub epoch: Option<String>,
    pub n_records: usize,
    pub mean: f64,
}

/// Locates `summaries.json` anywhere below `root`. With several matches the
/// lexicographically smallest path relative to `root` wins.
pub fn find_summaries(root: &Path) -> Result<PathBuf, InputError> {
    let mut matches = Vec::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            let path = entry.path();
            if file_type.is_dir() {
                pending.push(path);
            } else if file_type.is_file() && entry.file_name() == SUMMARIES_FILE_NAME {
                matches.push(path);
            }
        }
    }

    matches.sort_by(|a, b| {
        let ra = a.strip_prefix(root).unwrap_or(a);
        let rb = b.strip_prefix(root).unwrap_or(b);
        ra.cmp(rb)
    });

    let n_matches = matches.len();
    let Some(first) = matches.into_iter().next() else {
        return Err(InputError::NotFound {
            root: root.to_path_buf(),
        });
    };
    if n_matches > 1 {
        tracing::warn!(
            n_matches,
            chosen = %first.display(),
            "multiple {SUMMARIES_FILE_NAME} files found; using the lexicographically first"
        );
    }
    Ok(first)
}

pub fn parse_summaries(bytes: &[u8]) -> Result<Vec<ScoreRecord>, InputError> {
    let doc: Value = serde_json::from_slice(bytes)?;
    let Value::Array(items) = doc else {
        return Err(InputError::Document(
            "top-level value is not an array".to_string(),
        ));
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        records.push(parse_record(index, item)?);
    }
    Ok(records)
}

fn parse_record(index: usize, item: &Value) -> Result<ScoreRecord, InputError> {
    let Value::Object(fields) = item else {
        return Err(InputError::Format {
            index,
            reason: "summary is not an object".to_string(),
        });
    };

    let epoch = match fields.get("epoch") {
        None | Some(Value::Null) => None,
        Some(v) => Some(epoch_key(v)),
    };

    let mut current = item;
    for (depth, segment) in SCORE_PATH.iter().enumerate() {
        current = current.get(*segment).ok_or_else(|| InputError::Format {
            index,
            reason: format!("missing `{}`", SCORE_PATH[..=depth].join(".")),
        })?;
    }

    let overall = match current {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    let overall = overall
        .filter(|v| v.is_finite())
        .ok_or_else(|| InputError::Format {
            index,
            reason: format!("`{}` is not a finite number", SCORE_PATH.join(".")),
        })?;

    Ok(ScoreRecord { epoch, overall })
}

/// JSON text of an epoch value, with integral floats written as integers so
/// that `1` and `1.0` share a group.
fn epoch_key(value: &Value) -> String {
    if let Value::Number(n) = value {
        if let Some(f) = n.as_f64().filter(|_| n.is_f64()) {
            if f.is_finite() && f.fract() == 0.0 && f.abs() < 9.007_199_254_740_992e15 {
                return format!("{}", f as i64);
            }
        }
    }
    value.to_string()
}

/// Per-epoch means in first-seen epoch order.
pub fn group_by_epoch(records: &[ScoreRecord]) -> Vec<EpochMean> {
    let mut slot_by_epoch: HashMap<Option<&str>, usize> = HashMap::new();
    let mut groups: Vec<(Option<String>, f64, usize)> = Vec::new();

    for record in records {
        let key = record.epoch.as_deref();
        let slot = match slot_by_epoch.get(&key) {
            Some(&slot) => slot,
            None => {
                groups.push((record.epoch.clone(), 0.0, 0));
                slot_by_epoch.insert(key, groups.len() - 1);
                groups.len() - 1
            }
        };
        groups[slot].1 += record.overall;
        groups[slot].2 += 1;
    }

    groups
        .into_iter()
        .map(|(epoch, sum, n_records)| EpochMean {
            epoch,
            n_records,
            mean: sum / n_records as f64,
        })
        .collect()
}
