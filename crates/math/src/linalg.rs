//! Linear algebra operations for factor regression.

use ndarray::{Array1, Array2, Axis, s};

use crate::{MathError, students_t_two_sided_p};

/// Pivots below this value, after column equilibration, mark the design as singular.
const SINGULAR_TOLERANCE: f64 = 1e-10;

/// Result of an ordinary least squares fit with classical inference.
#[derive(Debug, Clone)]
pub struct OlsResult {
    /// Estimated coefficients, one per design column.
    pub coefficients: Array1<f64>,
    /// Coefficient standard errors.
    pub std_errors: Array1<f64>,
    /// t-statistics against zero (NaN when the standard error is zero).
    pub t_stats: Array1<f64>,
    /// Two-sided p-values.
    pub p_values: Array1<f64>,
    /// Residuals `y - X * beta`.
    pub residuals: Array1<f64>,
    /// R-squared (centered; NaN when `y` is constant).
    pub r_squared: f64,
    /// Adjusted R-squared.
    pub adj_r_squared: f64,
    /// Residual degrees of freedom `n - p`.
    pub dof: usize,
}

/// Prepend a column of ones to a design matrix.
#[must_use]
pub fn add_intercept(x: &Array2<f64>) -> Array2<f64> {
    let mut design = Array2::ones((x.nrows(), x.ncols() + 1));
    design.slice_mut(s![.., 1..]).assign(x);
    design
}

/// Perform ordinary least squares regression.
///
/// Solves `argmin_beta ||y - X * beta||^2` through the normal equations on a
/// column-equilibrated design, then derives standard errors from
/// `sigma^2 * (X'X)^-1` with `sigma^2 = SSR / (n - p)`.
///
/// The design is used as given: callers that want an intercept must include a
/// constant column (see [`add_intercept`]). R-squared is centered, which is
/// only meaningful when such a column is present.
///
/// # Arguments
/// * `y` - Response vector (n,)
/// * `x` - Design matrix (n x p)
///
/// # Errors
/// Returns error if dimensions mismatch, `n <= p`, or the design is singular.
pub fn ordinary_least_squares(y: &Array1<f64>, x: &Array2<f64>) -> Result<OlsResult, MathError> {
    let n = y.len();
    let p = x.ncols();

    if x.nrows() != n {
        return Err(MathError::DimensionMismatch { expected: n, actual: x.nrows() });
    }
    if n == 0 || p == 0 {
        return Err(MathError::EmptyData);
    }
    if n <= p {
        return Err(MathError::Underdetermined { observations: n, parameters: p });
    }

    // Equilibrate columns so the pivot tolerance is scale free
    let norms: Array1<f64> = x.map_axis(Axis(0), |c| c.dot(&c).sqrt());
    if norms.iter().any(|v| *v == 0.0 || !v.is_finite()) {
        return Err(MathError::Singular);
    }
    let scaled = x / &norms;

    let xtx = scaled.t().dot(&scaled);
    let xty = scaled.t().dot(y);
    let xtx_inv_scaled = invert_matrix(&xtx)?;

    let coefficients = xtx_inv_scaled.dot(&xty) / &norms;

    // Undo the scaling: (X'X)^-1 = D^-1 (Xs'Xs)^-1 D^-1
    let mut xtx_inv = xtx_inv_scaled;
    for i in 0..p {
        for j in 0..p {
            xtx_inv[[i, j]] /= norms[i] * norms[j];
        }
    }

    let fitted = x.dot(&coefficients);
    let residuals = y - &fitted;

    let dof = n - p;
    let ss_res: f64 = residuals.iter().map(|r| r * r).sum();
    let sigma2 = ss_res / dof as f64;

    let std_errors: Array1<f64> = xtx_inv.diag().mapv(|v| (sigma2 * v.max(0.0)).sqrt());
    let t_stats: Array1<f64> = coefficients
        .iter()
        .zip(std_errors.iter())
        .map(|(b, se)| if *se > 0.0 { b / se } else { f64::NAN })
        .collect();
    let p_values = t_stats
        .iter()
        .map(|t| students_t_two_sided_p(*t, dof as f64))
        .collect::<Result<Array1<f64>, _>>()?;

    let y_mean = y.mean().unwrap_or(f64::NAN);
    let ss_tot: f64 = y.iter().map(|yi| (yi - y_mean).powi(2)).sum();
    let constant = y.iter().all(|yi| *yi == y[0]);
    let r_squared = if ss_tot > 0.0 && !constant { 1.0 - ss_res / ss_tot } else { f64::NAN };
    let adj_r_squared = 1.0 - (1.0 - r_squared) * (n - 1) as f64 / dof as f64;

    Ok(OlsResult {
        coefficients,
        std_errors,
        t_stats,
        p_values,
        residuals,
        r_squared,
        adj_r_squared,
        dof,
    })
}

/// Invert a square matrix using Gauss-Jordan elimination with partial pivoting.
fn invert_matrix(a: &Array2<f64>) -> Result<Array2<f64>, MathError> {
    let n = a.nrows();
    if n == 0 {
        return Err(MathError::EmptyData);
    }
    if a.ncols() != n {
        return Err(MathError::LinearAlgebra("matrix must be square".to_string()));
    }

    // Augmented matrix [A | I]
    let mut aug = Array2::zeros((n, 2 * n));
    aug.slice_mut(s![.., ..n]).assign(a);
    for i in 0..n {
        aug[[i, n + i]] = 1.0;
    }

    for col in 0..n {
        // Find pivot
        let mut max_row = col;
        let mut max_val = aug[[col, col]].abs();
        for row in (col + 1)..n {
            if aug[[row, col]].abs() > max_val {
                max_val = aug[[row, col]].abs();
                max_row = row;
            }
        }

        if !(max_val > SINGULAR_TOLERANCE) {
            return Err(MathError::Singular);
        }

        // Swap rows
        if max_row != col {
            for j in 0..2 * n {
                aug.swap([col, j], [max_row, j]);
            }
        }

        // Normalize pivot row
        let pivot = aug[[col, col]];
        for j in 0..2 * n {
            aug[[col, j]] /= pivot;
        }

        // Eliminate column from every other row
        for row in 0..n {
            if row == col {
                continue;
            }
            let factor = aug[[row, col]];
            if factor != 0.0 {
                for j in col..2 * n {
                    aug[[row, j]] -= factor * aug[[col, j]];
                }
            }
        }
    }

    Ok(aug.slice(s![.., n..]).to_owned())
}
