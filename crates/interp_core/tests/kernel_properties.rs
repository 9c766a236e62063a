//! Behavioural properties shared by the interpolation kernels.
//!
//! Exercises every kernel through the public API: sample reproduction,
//! boundary handling, step thresholds, smoothness at samples, linear
//! reproduction by the splines and shape preservation by the constrained
//! spline.

use approx::assert_relative_eq;
use interp_core::math::interpolators::{
    catmull_spline, constrained_spline, linear, locate_bracket, smooth_step, step, step_uniform,
    Curve, CurveConfig, Kernel,
};
use interp_core::math::remap::map;
use proptest::prelude::*;

const KERNELS: [Kernel; 5] = [
    Kernel::Step,
    Kernel::Linear,
    Kernel::SmoothStep,
    Kernel::CatmullSpline,
    Kernel::ConstrainedSpline,
];

fn eval(kernel: Kernel, xs: &[f64], ys: &[f64], x: f64, trim: bool) -> f64 {
    let result = match kernel {
        Kernel::Step => step(xs, ys, x, 1.0),
        Kernel::Linear => linear(xs, ys, x, trim),
        Kernel::SmoothStep => smooth_step(xs, ys, x, trim),
        Kernel::CatmullSpline => catmull_spline(xs, ys, x, trim),
        Kernel::ConstrainedSpline => constrained_spline(xs, ys, x, trim),
    };
    result.unwrap()
}

// ========================================
// Reference Values
// ========================================

#[test]
fn test_linear_reference_values() {
    let xs = [0.0, 10.0];
    let ys = [0.0, 10.0];

    assert_relative_eq!(linear(&xs, &ys, 5.0, true).unwrap(), 5.0);
    assert_relative_eq!(linear(&xs, &ys, -5.0, true).unwrap(), 0.0);
    assert_relative_eq!(linear(&xs, &ys, -5.0, false).unwrap(), -5.0);
}

#[test]
fn test_smooth_step_reference_values() {
    let xs = [0.0, 10.0];
    let ys = [0.0, 10.0];

    assert_relative_eq!(smooth_step(&xs, &ys, 5.0, true).unwrap(), 5.0);
}

#[test]
fn test_smooth_step_flat_at_domain_ends() {
    let xs = [0.0, 10.0];
    let ys = [0.0, 10.0];
    let h: f64 = 1e-4;

    let slope_start = (smooth_step(&xs, &ys, h, true).unwrap()
        - smooth_step(&xs, &ys, 0.0, true).unwrap())
        / h;
    let slope_end = (smooth_step(&xs, &ys, 10.0, true).unwrap()
        - smooth_step(&xs, &ys, 10.0 - h, true).unwrap())
        / h;

    assert!(slope_start.abs() < 1e-3, "slope at 0: {}", slope_start);
    assert!(slope_end.abs() < 1e-3, "slope at 10: {}", slope_end);

    // for comparison, the linear slope is 1
    assert_relative_eq!(
        (linear(&xs, &ys, h, true).unwrap() - linear(&xs, &ys, 0.0, true).unwrap()) / h,
        1.0,
        epsilon = 1e-9
    );
}

#[test]
fn test_step_uniform_midpoint_threshold() {
    let ys = [0.0, 1.0];
    assert_eq!(step_uniform(0.0, 10.0, &ys, 4.0, 0.5).unwrap(), 0.0);
    assert_eq!(step_uniform(0.0, 10.0, &ys, 6.0, 0.5).unwrap(), 1.0);
}

#[test]
fn test_step_switches_exactly_at_threshold() {
    let xs = [0.0, 1.0, 2.0, 4.0];
    let ys = [10.0, 20.0, 30.0, 40.0];

    for &threshold in &[0.25, 0.5, 0.75] {
        // bracket [2, 4], width 2
        let at = 2.0 + 2.0 * threshold;
        assert_eq!(step(&xs, &ys, at, threshold).unwrap(), 40.0);
        assert_eq!(step(&xs, &ys, at - 1e-9, threshold).unwrap(), 30.0);
    }

    // threshold 1 holds the lower value across the whole bracket
    assert_eq!(step(&xs, &ys, 3.999, 1.0).unwrap(), 30.0);
    // threshold 0 takes the upper value as soon as the bracket is entered
    assert_eq!(step(&xs, &ys, 2.0, 0.0).unwrap(), 40.0);
}

#[test]
fn test_map_reference_value() {
    assert_eq!(map(5, 0, 10, 0, 100).unwrap(), 50);
    assert_relative_eq!(map(5.0, 0.0, 10.0, 0.0, 100.0).unwrap(), 50.0);
}

// ========================================
// Boundary Policy
// ========================================

#[test]
fn test_trim_returns_boundary_values_for_every_kernel() {
    let xs = [1.0, 2.0, 4.0, 5.0];
    let ys = [3.0, -1.0, 2.0, 7.0];

    for kernel in KERNELS {
        for &x in &[-10.0, 0.0, 1.0] {
            assert_eq!(eval(kernel, &xs, &ys, x, true), 3.0, "{} at {}", kernel, x);
        }
        for &x in &[5.0, 5.5, 100.0] {
            assert_eq!(eval(kernel, &xs, &ys, x, true), 7.0, "{} at {}", kernel, x);
        }
    }
}

#[test]
fn test_splines_reproduce_collinear_data() {
    let xs = [0.0, 1.0, 3.0, 6.0];
    let ys = [-1.0, 0.5, 3.5, 8.0];

    for k in 0..=60 {
        let x = k as f64 * 0.1;
        let expected = linear(&xs, &ys, x, true).unwrap();
        assert_relative_eq!(
            catmull_spline(&xs, &ys, x, true).unwrap(),
            expected,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            constrained_spline(&xs, &ys, x, true).unwrap(),
            expected,
            epsilon = 1e-12
        );
    }
}

#[test]
fn test_curve_matches_free_functions() {
    let xs = vec![0.0, 0.4, 1.1, 2.0, 2.2];
    let ys = vec![1.0, -0.5, 0.25, 3.0, 2.0];
    let queries: Vec<f64> = (0..=24).map(|k| -0.1 + k as f64 * 0.1).collect();

    for kernel in KERNELS {
        let curve = Curve::new(&xs, &ys, CurveConfig::new(kernel)).unwrap();
        let values = curve.eval_many(&queries).unwrap();
        for (&x, &y) in queries.iter().zip(values.iter()) {
            assert_eq!(y, eval(kernel, &xs, &ys, x, true));
        }
    }
}

// ========================================
// Property-based Tests
// ========================================

/// Strictly increasing x-axis paired with arbitrary y-values.
fn sample_set_strategy() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (
        -50.0f64..50.0,
        prop::collection::vec((0.1f64..10.0, -100.0f64..100.0), 2..12),
    )
        .prop_map(|(start, steps)| {
            let mut x = start;
            let mut xs = Vec::with_capacity(steps.len());
            let mut ys = Vec::with_capacity(steps.len());
            for (dx, y) in steps {
                xs.push(x);
                ys.push(y);
                x += dx;
            }
            (xs, ys)
        })
}

/// Strictly increasing x-axis with non-decreasing y-values.
fn monotone_set_strategy() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    prop::collection::vec((0.1f64..5.0, 0.0f64..5.0), 2..12).prop_map(|steps| {
        let (mut x, mut y) = (0.0, 0.0);
        let mut xs = Vec::with_capacity(steps.len());
        let mut ys = Vec::with_capacity(steps.len());
        for (dx, dy) in steps {
            xs.push(x);
            ys.push(y);
            x += dx;
            y += dy;
        }
        (xs, ys)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_every_kernel_passes_through_samples((xs, ys) in sample_set_strategy()) {
        for kernel in KERNELS {
            for (&x, &y) in xs.iter().zip(ys.iter()) {
                prop_assert_eq!(eval(kernel, &xs, &ys, x, true), y);
                prop_assert_eq!(eval(kernel, &xs, &ys, x, false), y);
            }
        }
    }

    #[test]
    fn test_linear_is_deterministic(
        (xs, ys) in sample_set_strategy(),
        frac in 0.0f64..1.0,
    ) {
        let x = xs[0] + frac * (xs[xs.len() - 1] - xs[0]);
        let first = linear(&xs, &ys, x, true).unwrap();
        prop_assert_eq!(linear(&xs, &ys, x, true).unwrap(), first);
    }

    #[test]
    fn test_linear_stays_within_bracket_values(
        (xs, ys) in sample_set_strategy(),
        frac in 0.0f64..1.0,
    ) {
        let x = xs[0] + frac * (xs[xs.len() - 1] - xs[0]);
        let (lo, hi) = locate_bracket(&xs, x).unwrap();
        let y = linear(&xs, &ys, x, true).unwrap();
        let tol = 1e-9 * (1.0 + ys[lo].abs().max(ys[hi].abs()));
        prop_assert!(y >= ys[lo].min(ys[hi]) - tol);
        prop_assert!(y <= ys[lo].max(ys[hi]) + tol);
    }

    #[test]
    fn test_constrained_spline_preserves_monotonicity((xs, ys) in monotone_set_strategy()) {
        let x_min = xs[0];
        let x_max = xs[xs.len() - 1];
        let tol = 1e-9 * (1.0 + ys[ys.len() - 1].abs());

        let mut previous = f64::NEG_INFINITY;
        for k in 0..=200 {
            let x = x_min + (x_max - x_min) * k as f64 / 200.0;
            let y = constrained_spline(&xs, &ys, x, true).unwrap();

            prop_assert!(y >= previous - tol, "decrease at x = {}: {} < {}", x, y, previous);
            previous = y;

            let (lo, hi) = locate_bracket(&xs, x).unwrap();
            prop_assert!(
                y >= ys[lo] - tol && y <= ys[hi] + tol,
                "y({}) = {} outside [{}, {}]", x, y, ys[lo], ys[hi]
            );
        }
    }
}
