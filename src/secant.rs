//! Secant method: finite-difference tangent from the two most recent iterates.

use crate::config::SolverCfg;
use crate::errors::SolverError;
use crate::trace::{IterationTrace, SolverResult, Termination};

const ALGORITHM: &str = "secant";

/// Finds a root of `f` using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// Replaces Newton's derivative with the slope through the two most recent
/// iterates, giving superlinear convergence (order ≈ 1.618) without requiring
/// `f'`. Shares Newton's risk profile: no divergence guard beyond the
/// degenerate-slope check.
///
/// # Arguments
/// - `f`   : function whose root is sought
/// - `x0`  : first initial guess
/// - `x1`  : second initial guess
/// - `cfg` : [`SolverCfg`] (`tol`, `max_iter`)
///
/// # Returns
/// [`SolverResult`] whose trace is pre-seeded with `x0` and `x1` and then
/// records each new estimate `x_2` with `f(x_2)`. Exhausting the cap is
/// non-fatal and returns the last estimate with
/// [`Termination::IterationLimit`].
///
/// # Errors
/// - [`SolverError::ZeroDifference`] : `f(x1) - f(x0) == 0`; the secant slope
///   is undefined and the method cannot recover
pub fn secant<F>(mut f: F, x0: f64, x1: f64, cfg: SolverCfg) -> Result<SolverResult, SolverError>
where
    F: FnMut(f64) -> f64,
{
    let (mut x0, mut x1) = (x0, x1);
    let mut f0 = f(x0);
    let mut f1 = f(x1);

    let mut trace = IterationTrace::new();
    trace.push_open(x0, f0);
    trace.push_open(x1, f1);

    // overwritten on the first iteration
    let mut x2 = x1;
    let mut f2 = f1;
    for iter in 1..=cfg.max_iter() {
        let denom = f1 - f0;
        if denom == 0.0 {
            return Err(SolverError::ZeroDifference { x0, x1 });
        }

        x2 = x1 - f1 * (x1 - x0) / denom;
        f2 = f(x2);
        trace.push_open(x2, f2);

        if f2.abs() < cfg.tol() {
            return Ok(SolverResult {
                root: x2,
                f_root: f2,
                iterations: iter,
                termination: Termination::ToleranceReached,
                bracket: None,
                trace,
                algorithm: ALGORITHM,
            });
        }

        // slide the two-point window
        (x0, f0) = (x1, f1);
        (x1, f1) = (x2, f2);
    }

    Ok(SolverResult {
        root: x2,
        f_root: f2,
        iterations: cfg.max_iter(),
        termination: Termination::IterationLimit,
        bracket: None,
        trace,
        algorithm: ALGORITHM,
    })
}
