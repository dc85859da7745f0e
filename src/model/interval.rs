use serde::Serialize;

use crate::model::special::student_t_quantile;
use crate::model::{StatsError, mean, require_alpha, require_len, sample_std};

/// Two-sided confidence interval for the mean of a normal population with
/// unknown variance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntervalEstimate {
    pub n: usize,
    pub alpha: f64,
    pub mean: f64,
    pub std: f64,
    pub se: f64,
    pub df: usize,
    pub t_crit: f64,
    pub margin: f64,
    pub ci_low: f64,
    pub ci_high: f64,
}

impl IntervalEstimate {
    pub fn width(&self) -> f64 {
        self.ci_high - self.ci_low
    }
}

pub fn estimate(sample: &[f64], alpha: f64) -> Result<IntervalEstimate, StatsError> {
    require_len(sample, 2)?;
    require_alpha(alpha)?;

    let n = sample.len();
    let m = mean(sample);
    let std = sample_std(sample);
    let se = std / (n as f64).sqrt();
    let df = n - 1;
    let t_crit = student_t_quantile(1.0 - alpha / 2.0, df as f64);
    let margin = se * t_crit;

    tracing::trace!(n, mean = m, std, t_crit, margin, "interval estimate");

    Ok(IntervalEstimate {
        n,
        alpha,
        mean: m,
        std,
        se,
        df,
        t_crit,
        margin,
        ci_low: m - margin,
        ci_high: m + margin,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/interval.rs"]
mod tests;
