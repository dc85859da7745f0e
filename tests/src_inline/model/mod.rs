use super::*;

#[test]
fn test_mean_and_sample_variance() {
    let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    assert_eq!(mean(&v), 5.0);
    assert!((sample_variance(&v) - 32.0 / 7.0).abs() < 1e-12);
    assert!((sample_std(&v) - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
}

#[test]
fn test_describe_degenerate_lengths() {
    assert!(mean(&[]).is_nan());
    assert!(sample_variance(&[1.0]).is_nan());
    assert_eq!(sample_variance(&[3.0, 3.0, 3.0]), 0.0);
}

#[test]
fn test_require_len() {
    assert_eq!(require_len(&[1.0, 2.0], 2), Ok(()));
    assert_eq!(
        require_len(&[1.0], 2),
        Err(StatsError::InsufficientData { needed: 2, got: 1 })
    );
}

#[test]
fn test_require_alpha() {
    assert!(require_alpha(0.05).is_ok());
    assert!(require_alpha(0.5).is_ok());
    assert_eq!(require_alpha(0.0), Err(StatsError::InvalidAlpha(0.0)));
    assert_eq!(require_alpha(1.0), Err(StatsError::InvalidAlpha(1.0)));
    assert!(matches!(
        require_alpha(f64::NAN),
        Err(StatsError::InvalidAlpha(_))
    ));
}
