//! Finite-difference weights on arbitrary grids by Fornberg's algorithm.
//!
//! Points are added one at a time; after point i the table C[j, m] holds the
//! weight of f(x_j) in the m-th derivative of the interpolant through
//! x_0..x_i, evaluated at x0. Only the last column (m = order) is returned.
//!
//! The Hermite variant also uses f'(x_j). Its weights follow from the
//! Lagrange basis: with L_j the Lagrange polynomial of node j and
//! s_j = Σ_{i≠j} 1/(x_j - x_i), the Hermite basis functions are
//!
//! ```text
//! h_j(x) = [1 - 2 s_j (x - x_j)] L_j(x)²
//! g_j(x) = (x - x_j) L_j(x)²
//! ```
//!
//! and the Taylor coefficients of L_j² at x0 come from squaring the series
//! that the Fornberg table already provides.
//!
//! References: B. Fornberg, Math. Comp. 51 (1988); B. Fornberg, SIAM Rev. 40
//! (1998).

use faer::Mat;

use crate::error::{Result, SpectralError};
use crate::types::Real;

/// Weights c_j with f^(order)(x0) ≈ Σ_j c_j f(x_j).
///
/// For `order ≥ 1` the weights are corrected to sum to exactly zero: the
/// rounding residue is removed from the middle weight.
///
/// # Errors
///
/// `InsufficientPoints` unless `x.len() > order`.
///
/// # Example
///
/// ```
/// use pde_suite::finite_difference::fornberg_calculate_wts;
///
/// let w = fornberg_calculate_wts(1, 0.0, &[-1.0_f64, 0.0, 1.0]).unwrap();
/// assert!((w[0] + 0.5).abs() < 1e-15);
/// assert!(w[1].abs() < 1e-15);
/// assert!((w[2] - 0.5).abs() < 1e-15);
/// ```
pub fn fornberg_calculate_wts<T: Real>(order: usize, x0: T, x: &[T]) -> Result<Vec<T>> {
    let n = x.len();
    if n <= order {
        return Err(SpectralError::InsufficientPoints {
            order,
            required: order,
            found: n,
        });
    }

    let c = weight_table(order, x0, x);
    let mut w: Vec<T> = (0..n).map(|j| c[(j, order)]).collect();

    if order > 0 {
        let residue: T = w.iter().copied().sum();
        w[n / 2] -= residue;
    }
    Ok(w)
}

/// Hermite weights (d_j, e_j) with
/// f^(order)(x0) ≈ Σ_j d_j f(x_j) + Σ_j e_j f'(x_j).
///
/// # Errors
///
/// `InsufficientPoints` unless `x.len() > order / 2 + 1`.
///
/// # Example
///
/// ```
/// use pde_suite::finite_difference::fornberg_calculate_hermite_wts;
///
/// // Third derivative from values and slopes at -1, 0, 1
/// let (d, e) = fornberg_calculate_hermite_wts(3, 0.0, &[-1.0_f64, 0.0, 1.0]).unwrap();
/// let f = |x: f64| x.powi(3);
/// let df = |x: f64| 3.0 * x * x;
/// let approx: f64 = [-1.0, 0.0, 1.0]
///     .iter()
///     .enumerate()
///     .map(|(j, &xj)| d[j] * f(xj) + e[j] * df(xj))
///     .sum();
/// assert!((approx - 6.0).abs() < 1e-12);
/// ```
pub fn fornberg_calculate_hermite_wts<T: Real>(
    order: usize,
    x0: T,
    x: &[T],
) -> Result<(Vec<T>, Vec<T>)> {
    let n = x.len();
    let required = order / 2 + 1;
    if n <= required {
        return Err(SpectralError::InsufficientPoints {
            order,
            required,
            found: n,
        });
    }

    let c = weight_table(order, x0, x);

    // Taylor coefficients of L_j about x0: C[j, m] / m!
    let mut factorial = vec![T::one(); order + 1];
    for m in 1..=order {
        factorial[m] = factorial[m - 1] * T::from_count(m);
    }
    let taylor = Mat::from_fn(n, order + 1, |j, m| c[(j, m)] / factorial[m]);

    // Taylor coefficients of L_j²
    let squared = Mat::from_fn(n, order + 1, |j, m| {
        (0..=m).map(|a| taylor[(j, a)] * taylor[(j, m - a)]).sum::<T>()
    });

    let scale = factorial[order];
    let two = T::cast(2.0);
    let mut d = vec![T::zero(); n];
    let mut e = vec![T::zero(); n];
    for j in 0..n {
        let s: T = (0..n)
            .filter(|&i| i != j)
            .map(|i| (x[i] - x[j]).recip())
            .sum();

        // Coefficient of (x - x0)^order in (x - x_j) L_j²
        let below = if order > 0 {
            squared[(j, order - 1)]
        } else {
            T::zero()
        };
        let g = below - (x[j] - x0) * squared[(j, order)];

        e[j] = scale * g;
        d[j] = scale * (squared[(j, order)] + two * s * g);
    }

    Ok((d, e))
}

/// Fornberg's table, n points × (order + 1) derivative orders.
fn weight_table<T: Real>(order: usize, x0: T, x: &[T]) -> Mat<T> {
    let n = x.len();
    let mut c = Mat::zeros(n, order + 1);
    if n == 0 {
        return c;
    }

    let mut c1 = T::one();
    let mut c4 = x[0] - x0;
    c[(0, 0)] = T::one();

    for i in 1..n {
        let mn = i.min(order);
        let mut c2 = T::one();
        let c5 = c4;
        c4 = x[i] - x0;

        for j in 0..i {
            let c3 = x[i] - x[j];
            c2 *= c3;

            if j == i - 1 {
                for s in (1..=mn).rev() {
                    c[(i, s)] =
                        c1 * (T::from_count(s) * c[(i - 1, s - 1)] - c5 * c[(i - 1, s)]) / c2;
                }
                c[(i, 0)] = -c1 * c5 * c[(i - 1, 0)] / c2;
            }

            for s in (1..=mn).rev() {
                c[(j, s)] = (c4 * c[(j, s)] - T::from_count(s) * c[(j, s - 1)]) / c3;
            }
            c[(j, 0)] = c4 * c[(j, 0)] / c3;
        }

        c1 = c2;
    }

    c
}
