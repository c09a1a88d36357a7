//! Finite-difference stencils against known formulas and convergence rates.

use approx::assert_relative_eq;
use pde_suite::{
    SpectralError, dissipation_order, dissipation_wts, fdm_grid, fornberg_calculate_hermite_wts,
    fornberg_calculate_wts,
};

fn apply_stencil(w: &[f64], x: &[f64], f: impl Fn(f64) -> f64) -> f64 {
    w.iter().zip(x.iter()).map(|(&wj, &xj)| wj * f(xj)).sum()
}

#[test]
fn test_central_difference_sanity() {
    let w = fornberg_calculate_wts(1, 0.0, &[-1.0_f64, 0.0, 1.0]).unwrap();
    assert_relative_eq!(w[0], -0.5, epsilon = 1e-15);
    assert_relative_eq!(w[1], 0.0, epsilon = 1e-15);
    assert_relative_eq!(w[2], 0.5, epsilon = 1e-15);
}

#[test]
fn test_order_bound() {
    for order in 1..=5 {
        let x: Vec<f64> = (0..order).map(|i| i as f64).collect();
        assert_eq!(
            fornberg_calculate_wts(order, 0.0, &x),
            Err(SpectralError::InsufficientPoints {
                order,
                required: order,
                found: order
            })
        );
        let x: Vec<f64> = (0..=order).map(|i| i as f64).collect();
        assert!(fornberg_calculate_wts(order, 0.0, &x).is_ok());
    }
}

#[test]
fn test_central_stencils_match_tables() {
    // Fourth-order central stencils on a unit grid
    let x = fdm_grid(-2.0_f64, 2.0, 1.0).unwrap();
    let d1 = fornberg_calculate_wts(1, 0.0, &x).unwrap();
    let d2 = fornberg_calculate_wts(2, 0.0, &x).unwrap();
    let d4 = fornberg_calculate_wts(4, 0.0, &x).unwrap();

    let e1 = [1.0 / 12.0, -2.0 / 3.0, 0.0, 2.0 / 3.0, -1.0 / 12.0];
    let e2 = [-1.0 / 12.0, 4.0 / 3.0, -2.5, 4.0 / 3.0, -1.0 / 12.0];
    let e4 = [1.0, -4.0, 6.0, -4.0, 1.0];
    for j in 0..5 {
        assert_relative_eq!(d1[j], e1[j], epsilon = 1e-14);
        assert_relative_eq!(d2[j], e2[j], epsilon = 1e-14);
        assert_relative_eq!(d4[j], e4[j], epsilon = 1e-13);
    }
}

#[test]
fn test_convergence_order() {
    // Second-order central difference for u'' of sin: error ~ h^2
    let errors: Vec<f64> = [0.1, 0.05, 0.025]
        .iter()
        .map(|&h| {
            let x0 = 0.3;
            let x = [x0 - h, x0, x0 + h];
            let w = fornberg_calculate_wts(2, x0, &x).unwrap();
            (apply_stencil(&w, &x, f64::sin) + x0.sin()).abs()
        })
        .collect();

    for i in 1..errors.len() {
        let rate = (errors[i - 1] / errors[i]).log2();
        assert!(
            (rate - 2.0).abs() < 0.1,
            "Expected 2nd order convergence, got {:.2}",
            rate
        );
    }
}

#[test]
fn test_hermite_needs_fewer_points() {
    // Two points cannot give a 3rd derivative from values alone,
    // three points with slopes reproduce it exactly for quintics
    assert!(fornberg_calculate_wts(3, 0.0, &[-1.0, 0.0, 1.0]).is_err());

    let x = [-0.5, 0.25, 1.0];
    let (d, e) = fornberg_calculate_hermite_wts(3, 0.1, &x).unwrap();
    let p = |t: f64| 1.0 + t - t.powi(3) + 0.5 * t.powi(5);
    let dp = |t: f64| 1.0 - 3.0 * t * t + 2.5 * t.powi(4);
    let d3p = |t: f64| -6.0 + 30.0 * t * t;
    let approx = apply_stencil(&d, &x, p) + apply_stencil(&e, &x, dp);
    assert_relative_eq!(approx, d3p(0.1), epsilon = 1e-10);
}

#[test]
fn test_hermite_order_bound() {
    assert!(matches!(
        fornberg_calculate_hermite_wts(4, 0.0, &[0.0, 1.0, 2.0]),
        Err(SpectralError::InsufficientPoints {
            order: 4,
            required: 3,
            found: 3
        })
    ));
    assert!(fornberg_calculate_hermite_wts(4, 0.0, &[0.0, 1.0, 2.0, 3.0]).is_ok());
}

#[test]
fn test_dissipation_pairing() {
    for r in 2..=6 {
        let acc = 2 * r - 2;
        let order = dissipation_order(acc).unwrap();
        assert_eq!(order, 2 * r);

        let w = dissipation_wts::<f64>(order).unwrap();
        assert_eq!(w.len(), order + 1);
        let sum: f64 = w.iter().sum();
        assert_eq!(sum, 0.0);
        for k in 0..=order {
            assert_eq!(w[k], w[order - k]);
        }
    }
}

#[test]
fn test_dissipation_annihilates_low_degree() {
    // A 2r-th difference kills polynomials of degree < 2r
    let w = dissipation_wts(6).unwrap();
    let x: Vec<f64> = (0..7).map(|i| i as f64 - 3.0).collect();
    for deg in 0..6 {
        let v = apply_stencil(&w, &x, |t| t.powi(deg));
        assert!(v.abs() < 1e-12, "degree {}: {}", deg, v);
    }
}

#[test]
fn test_fdm_grid_feeds_fornberg() {
    let x = fdm_grid(0.0, 1.0, 0.125).unwrap();
    assert_eq!(x.len(), 9);
    // One-sided first derivative at the left boundary with five points
    let w = fornberg_calculate_wts(1, x[0], &x[..5]).unwrap();
    let approx = apply_stencil(&w, &x[..5], |t| t.powi(4) - t);
    assert_relative_eq!(approx, -1.0, epsilon = 1e-12);
}

#[test]
fn test_single_precision_stencils() {
    let x = fdm_grid(-2.0f32, 2.0, 1.0).unwrap();
    let d2 = fornberg_calculate_wts(2, 0.0, &x).unwrap();
    let e2 = [-1.0 / 12.0, 4.0 / 3.0, -2.5, 4.0 / 3.0, -1.0 / 12.0];
    for j in 0..5 {
        assert_relative_eq!(d2[j], e2[j], epsilon = 1e-5);
    }
    assert_eq!(
        dissipation_wts::<f32>(4).unwrap(),
        vec![-1.0 / 16.0, 0.25, -0.375, 0.25, -1.0 / 16.0]
    );
}

#[test]
fn test_fdm_grid_rejects_huge_point_counts() {
    assert!(matches!(
        fdm_grid(0.0, 1.0, 1e-300),
        Err(SpectralError::InvalidDimension(_))
    ));
}
