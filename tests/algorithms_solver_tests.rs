//! Tests for the closed-form OLS solver.
//!
//! These tests verify the solver against both output conventions:
//! - Agreement between the two algebraically equivalent derivations
//! - Exact recovery of a noiseless line
//! - The documented NaN/infinity behavior for zero x-variance
//! - Bit-reproducible determinism on the sample dataset
//!
//! ## Test Organization
//!
//! 1. **Convention Agreement** - slope-intercept vs. coefficient form
//! 2. **Exact Recovery** - noiseless line inputs
//! 3. **Degenerate Input** - all x-values equal
//! 4. **Determinism** - repeated runs produce identical coefficients

use approx::assert_relative_eq;

use olsfit::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn points(pairs: &[(f64, f64)]) -> Vec<Point<f64>> {
    pairs.iter().map(|&(x, y)| Point { x, y }).collect()
}

fn sample_points() -> Vec<Point<f64>> {
    points(&[
        (43.0, 99.0),
        (21.0, 65.0),
        (25.0, 79.0),
        (42.0, 75.0),
        (57.0, 87.0),
        (59.0, 81.0),
    ])
}

fn solve_points(pts: &[Point<f64>], convention: Convention) -> LinearFit<f64> {
    let summary = Summary::from_points(pts);
    solve(&summary, pts.len(), convention)
}

// ============================================================================
// Convention Agreement Tests
// ============================================================================

/// Test both conventions agree when x-variance is nonzero.
///
/// The two derivations round differently but must match to 1e-9 relative
/// tolerance on the same input.
#[test]
fn test_conventions_agree_on_sample_data() {
    let pts = sample_points();

    let si = solve_points(&pts, SlopeIntercept);
    let co = solve_points(&pts, Coefficient);

    assert_relative_eq!(si.slope, co.slope, max_relative = 1e-9);
    assert_relative_eq!(si.intercept, co.intercept, max_relative = 1e-9);
}

/// Test conventions agree across a spread of noisy inputs.
#[test]
fn test_conventions_agree_on_noisy_data() {
    // Deterministic pseudo-noise around y = 3x - 7.
    let pts: Vec<Point<f64>> = (0..50)
        .map(|i| {
            let x = i as f64 * 0.5;
            let noise = ((i * 37 % 11) as f64 - 5.0) * 0.1;
            Point {
                x,
                y: 3.0 * x - 7.0 + noise,
            }
        })
        .collect();

    let si = solve_points(&pts, SlopeIntercept);
    let co = solve_points(&pts, Coefficient);

    assert_relative_eq!(si.slope, co.slope, max_relative = 1e-9);
    assert_relative_eq!(si.intercept, co.intercept, max_relative = 1e-9);
}

/// Test the six-point sample dataset against hand-derived coefficients.
///
/// m = 2868/7445 and b = (486 - 247m)/6 follow directly from the sums
/// Σx = 247, Σy = 486, Σx² = 11409, Σxy = 20485 with n = 6.
#[test]
fn test_sample_dataset_coefficients() {
    let fit = solve_points(&sample_points(), SlopeIntercept);

    let m_expected = 2868.0 / 7445.0;
    let b_expected = (486.0 - m_expected * 247.0) / 6.0;

    assert_relative_eq!(fit.slope, m_expected, max_relative = 1e-12);
    assert_relative_eq!(fit.intercept, b_expected, max_relative = 1e-12);
}

// ============================================================================
// Exact Recovery Tests
// ============================================================================

/// Test recovery of a noiseless line in slope-intercept form.
#[test]
fn test_exact_line_recovery_slope_intercept() {
    let pts: Vec<Point<f64>> = (0..10)
        .map(|i| {
            let x = i as f64;
            Point {
                x,
                y: 2.5 * x + 1.25,
            }
        })
        .collect();

    let fit = solve_points(&pts, SlopeIntercept);
    assert_relative_eq!(fit.slope, 2.5, max_relative = 1e-9);
    assert_relative_eq!(fit.intercept, 1.25, max_relative = 1e-9);
}

/// Test recovery of a noiseless line in coefficient form.
#[test]
fn test_exact_line_recovery_coefficient() {
    let pts: Vec<Point<f64>> = (1..=8)
        .map(|i| {
            let x = i as f64;
            Point {
                x,
                y: -0.75 * x + 4.0,
            }
        })
        .collect();

    let fit = solve_points(&pts, Coefficient);
    assert_relative_eq!(fit.slope, -0.75, max_relative = 1e-9);
    assert_relative_eq!(fit.intercept, 4.0, max_relative = 1e-9);
}

/// Test prediction on the fitted line.
#[test]
fn test_predict_on_fitted_line() {
    let pts = points(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)]);
    let fit = solve_points(&pts, SlopeIntercept);

    assert_relative_eq!(fit.predict(10.0), 21.0, max_relative = 1e-9);
}

// ============================================================================
// Degenerate Input Tests
// ============================================================================

/// Test all-equal x-values yield non-finite components, not a panic.
///
/// The denominator nΣx² − (Σx)² is exactly zero; IEEE division decides
/// whether each component is NaN or ±infinity.
#[test]
fn test_zero_x_variance_is_non_finite() {
    let pts = points(&[(5.0, 1.0), (5.0, 2.0)]);

    for convention in [SlopeIntercept, Coefficient] {
        let fit = solve_points(&pts, convention);
        assert!(
            !fit.slope.is_finite(),
            "{} slope should be NaN or infinite",
            convention.name()
        );
        assert!(
            !fit.intercept.is_finite(),
            "{} intercept should be NaN or infinite",
            convention.name()
        );
    }
}

/// Test the N = 0 contract: zero sums divide to NaN, no panic.
#[test]
fn test_empty_input_is_nan() {
    let pts: Vec<Point<f64>> = vec![];
    let fit = solve_points(&pts, SlopeIntercept);

    assert!(fit.slope.is_nan());
    assert!(fit.intercept.is_nan());
}

// ============================================================================
// Determinism Tests
// ============================================================================

/// Test repeated solves produce bit-identical coefficients.
///
/// There is no randomness anywhere in the pipeline; each convention is
/// evaluated with a fixed arithmetic sequence.
#[test]
fn test_repeated_runs_are_identical() {
    let pts = sample_points();

    for convention in [SlopeIntercept, Coefficient] {
        let first = solve_points(&pts, convention);
        for _ in 0..5 {
            let again = solve_points(&pts, convention);
            assert_eq!(first.slope.to_bits(), again.slope.to_bits());
            assert_eq!(first.intercept.to_bits(), again.intercept.to_bits());
        }
    }
}
