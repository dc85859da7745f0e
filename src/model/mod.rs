pub mod interval;
pub mod special;

pub const DEFAULT_ALPHA: f64 = 0.05;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsError {
    #[error("insufficient data: need at least {needed} values, got {got}")]
    InsufficientData { needed: usize, got: usize },
    #[error("degenerate sample: {0}")]
    DegenerateSample(String),
    #[error("significance level must lie in (0, 1), got {0}")]
    InvalidAlpha(f64),
}

pub fn require_len(sample: &[f64], needed: usize) -> Result<(), StatsError> {
    if sample.len() < needed {
        return Err(StatsError::InsufficientData {
            needed,
            got: sample.len(),
        });
    }
    Ok(())
}

pub fn require_alpha(alpha: f64) -> Result<(), StatsError> {
    if alpha.is_nan() || alpha <= 0.0 || alpha >= 1.0 {
        return Err(StatsError::InvalidAlpha(alpha));
    }
    Ok(())
}

pub fn mean(sample: &[f64]) -> f64 {
    if sample.is_empty() {
        return f64::NAN;
    }
    sample.iter().sum::<f64>() / sample.len() as f64
}

/// Bessel-corrected variance (divisor `n - 1`).
pub fn sample_variance(sample: &[f64]) -> f64 {
    let n = sample.len();
    if n < 2 {
        return f64::NAN;
    }
    let m = mean(sample);
    let ss = sample.iter().map(|&v| (v - m) * (v - m)).sum::<f64>();
    ss / (n - 1) as f64
}

pub fn sample_std(sample: &[f64]) -> f64 {
    sample_variance(sample).sqrt()
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/mod.rs"]
mod tests;
