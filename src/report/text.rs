use crate::report::{AnalysisReport, ArtifactSummary, ComparisonSummary, format_f64_6, format_p};

pub fn render_report_text(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str("AHB Evaluation Statistics\n");
    out.push_str("=========================\n");
    out.push_str(&format!(
        "{} {} | alpha={}\n\n",
        report.tool,
        report.version,
        format_f64_6(report.alpha)
    ));

    for artifact in &report.artifacts {
        render_artifact(&mut out, artifact);
    }

    if let Some(cmp) = &report.comparison {
        render_comparison(&mut out, cmp);
    }

    out
}

fn render_artifact(out: &mut String, artifact: &ArtifactSummary) {
    let ci = &artifact.interval;
    out.push_str(&format!("{} ({})\n", artifact.label, artifact.path));
    out.push_str(&format!("  epochs: {}\n", ci.n));
    out.push_str(&format!(
        "  mean: {}  margin: {}\n",
        format_f64_6(ci.mean),
        format_f64_6(ci.margin)
    ));
    out.push_str(&format!(
        "  interval: [{}, {}] (width {})\n",
        format_f64_6(ci.ci_low),
        format_f64_6(ci.ci_high),
        format_f64_6(ci.width())
    ));
    out.push_str(&format!(
        "  std: {}  se: {}  t_crit(df={}): {}\n\n",
        format_f64_6(ci.std),
        format_f64_6(ci.se),
        ci.df,
        format_f64_6(ci.t_crit)
    ));
}

fn render_comparison(out: &mut String, cmp: &ComparisonSummary) {
    out.push_str(&format!("Comparison: {} vs {}\n", cmp.x, cmp.y));
    out.push_str(&format!(
        "Mean of {} smaller than {}: t={} df={}\n",
        cmp.x,
        cmp.y,
        format_f64_6(cmp.mean.t_stat),
        cmp.mean.df
    ));
    let (smaller, p_mean) = cmp.mean.verdict();
    out.push_str(&format!("Significant: {} (p={})\n", smaller, format_p(p_mean)));
    out.push_str(&format!(
        "Variance of {} equal to {}: F={} df=({}, {}){}\n",
        cmp.x,
        cmp.y,
        format_f64_6(cmp.variance.f_stat),
        cmp.variance.df_num,
        cmp.variance.df_den,
        if cmp.variance.swapped { " [swapped]" } else { "" }
    ));
    let (equal, p_var) = cmp.variance.verdict();
    out.push_str(&format!("Equal: {} (p={})\n", equal, format_p(p_var)));
}
