use super::*;

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual} (tol {tol})"
    );
}

#[test]
fn test_ln_gamma_known_values() {
    assert_close(ln_gamma(1.0), 0.0, 1e-13);
    assert_close(ln_gamma(2.0), 0.0, 1e-13);
    assert_close(ln_gamma(5.0), 24.0f64.ln(), 1e-13);
    assert_close(ln_gamma(0.5), 0.5 * PI.ln(), 1e-13);
    assert_close(ln_gamma(0.25), 3.625_609_908_221_908_f64.ln(), 1e-12);
}

#[test]
fn test_incomplete_beta_closed_forms() {
    for &x in &[0.05, 0.3, 0.5, 0.77, 0.99] {
        assert_close(regularized_incomplete_beta(x, 3.0, 1.0), x * x * x, 1e-13);
        assert_close(
            regularized_incomplete_beta(x, 1.0, 4.0),
            1.0 - (1.0 - x).powi(4),
            1e-13,
        );
        // I_x(2, 2) = x^2 (3 - 2x)
        assert_close(
            regularized_incomplete_beta(x, 2.0, 2.0),
            x * x * (3.0 - 2.0 * x),
            1e-13,
        );
    }
    assert_close(regularized_incomplete_beta(0.5, 7.5, 7.5), 0.5, 1e-13);
}

#[test]
fn test_incomplete_beta_bounds() {
    assert_eq!(regularized_incomplete_beta(0.0, 2.0, 3.0), 0.0);
    assert_eq!(regularized_incomplete_beta(-1.0, 2.0, 3.0), 0.0);
    assert_eq!(regularized_incomplete_beta(1.0, 2.0, 3.0), 1.0);
    assert!(regularized_incomplete_beta(f64::NAN, 2.0, 3.0).is_nan());
}

#[test]
fn test_student_t_cdf_cauchy_and_df2() {
    for &t in &[-25.0, -3.0, -0.4, 0.0, 0.4, 1.0, 3.0, 25.0] {
        let cauchy = 0.5 + f64::atan(t) / PI;
        assert_close(student_t_cdf(t, 1.0), cauchy, 1e-12);

        let df2 = 0.5 + t / (2.0 * (2.0 + t * t).sqrt());
        assert_close(student_t_cdf(t, 2.0), df2, 1e-12);
    }
}

#[test]
fn test_student_t_cdf_reference_values() {
    assert_close(student_t_cdf(2.0, 5.0), 0.949_030_260_585_070_8, 1e-10);
    assert_close(student_t_cdf(-2.0, 5.0), 0.050_969_739_414_929_2, 1e-10);
    assert_eq!(student_t_cdf(f64::INFINITY, 4.0), 1.0);
    assert_eq!(student_t_cdf(f64::NEG_INFINITY, 4.0), 0.0);
    assert!(student_t_cdf(f64::NAN, 4.0).is_nan());
}

#[test]
fn test_student_t_cdf_symmetry() {
    for &df in &[1.0, 3.0, 7.0, 29.0, 120.0] {
        for &t in &[0.1, 0.9, 2.5, 6.0] {
            let sum = student_t_cdf(t, df) + student_t_cdf(-t, df);
            assert_close(sum, 1.0, 1e-13);
        }
    }
}

#[test]
fn test_student_t_quantile_table() {
    assert_close(student_t_quantile(0.975, 1.0), 12.706_204_736, 1e-6);
    assert_close(student_t_quantile(0.975, 3.0), 3.182_446_305, 1e-8);
    assert_close(student_t_quantile(0.975, 10.0), 2.228_138_852, 1e-8);
    assert_close(student_t_quantile(0.975, 30.0), 2.042_272_456, 1e-8);
    assert_close(student_t_quantile(0.995, 5.0), 4.032_142_984, 1e-8);
    assert_close(student_t_quantile(0.95, 10.0), 1.812_461_123, 1e-8);
    assert_close(student_t_quantile(0.025, 10.0), -2.228_138_852, 1e-8);
}

#[test]
fn test_student_t_quantile_df2_closed_form() {
    for &p in &[0.01_f64, 0.2, 0.6, 0.975, 0.999] {
        let q = 2.0 * p - 1.0;
        let expected = q / (2.0 * p * (1.0 - p)).sqrt();
        assert_close(student_t_quantile(p, 2.0), expected, 1e-9);
    }
}

#[test]
fn test_student_t_quantile_edges() {
    assert_eq!(student_t_quantile(0.5, 6.0), 0.0);
    assert_eq!(student_t_quantile(0.0, 6.0), f64::NEG_INFINITY);
    assert_eq!(student_t_quantile(1.0, 6.0), f64::INFINITY);
    assert!(student_t_quantile(f64::NAN, 6.0).is_nan());
}

#[test]
fn test_student_t_quantile_inverts_cdf() {
    for &df in &[1.0, 2.0, 4.0, 15.0, 60.0] {
        for &p in &[0.001, 0.05, 0.3, 0.7, 0.95, 0.999] {
            let t = student_t_quantile(p, df);
            assert_close(student_t_cdf(t, df), p, 1e-12);
        }
    }
}

#[test]
fn test_fisher_f_cdf_closed_forms() {
    for &f in &[0.01, 0.25, 1.0, 3.0, 40.0] {
        assert_close(fisher_f_cdf(f, 2.0, 2.0), f / (1.0 + f), 1e-13);
    }
    assert_close(fisher_f_cdf(1.0, 5.0, 5.0), 0.5, 1e-12);
    assert_close(fisher_f_cdf(1.0, 12.0, 12.0), 0.5, 1e-12);
    assert_eq!(fisher_f_cdf(0.0, 3.0, 4.0), 0.0);
    assert_eq!(fisher_f_cdf(-2.0, 3.0, 4.0), 0.0);
    assert_eq!(fisher_f_cdf(f64::INFINITY, 3.0, 4.0), 1.0);
}

#[test]
fn test_fisher_f_cdf_reciprocal_identity() {
    for &(d1, d2) in &[(3.0, 8.0), (5.0, 10.0), (1.0, 20.0), (29.0, 4.0)] {
        for &f in &[0.2, 0.8, 2.0, 5.5] {
            let lhs = fisher_f_cdf(f, d1, d2);
            let rhs = 1.0 - fisher_f_cdf(1.0 / f, d2, d1);
            assert_close(lhs, rhs, 1e-12);
        }
    }
    assert_close(fisher_f_cdf(2.0, 5.0, 10.0), 0.835_805_049_1, 1e-8);
}
