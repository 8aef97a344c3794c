//! Bisection method: interval halving over a sign-change bracket.

use crate::config::SolverCfg;
use crate::errors::SolverError;
use crate::trace::{IterationTrace, SolverResult, Termination};

const ALGORITHM: &str = "bisection";

/// Midpoint of `[a, b]`.
#[inline]
fn midpoint(a: f64, b: f64) -> f64 {
    a + (b - a) * 0.5
}

/// Finds a root of `f` using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// Assumes `f` is continuous on `[a, b]` with `f(a)` and `f(b)` of opposite
/// signs, which guarantees a root inside the interval. The interval halves
/// every iteration, so convergence is linear and the width after `n`
/// iterations is exactly `(b - a) / 2^n`.
///
/// # Arguments
/// - `f`   : function whose root is sought
/// - `a`   : lower bound of the bracket
/// - `b`   : upper bound of the bracket
/// - `cfg` : [`SolverCfg`] (`tol`, `max_iter`)
///
/// # Returns
/// [`SolverResult`] with the final midpoint, the `(iter, a, b, t, f(t))`
/// trace, and the final bracket. If the cap is exhausted before `|f(t)| < tol`,
/// the last midpoint is still returned with
/// [`Termination::IterationLimit`].
///
/// # Errors
/// - [`SolverError::InvalidBracket`] : `f(a) * f(b) >= 0`; no iteration is performed
pub fn bisection<F>(
    mut f: F,
    mut a: f64,
    mut b: f64,
    cfg: SolverCfg,
) -> Result<SolverResult, SolverError>
where
    F: FnMut(f64) -> f64,
{
    let mut fa = f(a);
    let fb = f(b);
    if fa * fb >= 0.0 {
        return Err(SolverError::InvalidBracket { a, b });
    }

    let mut trace = IterationTrace::new();

    // overwritten on the first iteration
    let mut t = a;
    let mut ft = fa;
    for iter in 1..=cfg.max_iter() {
        t = midpoint(a, b);
        ft = f(t);
        trace.push_bracket(a, b, t, ft);

        if ft.abs() < cfg.tol() {
            return Ok(SolverResult {
                root: t,
                f_root: ft,
                iterations: iter,
                termination: Termination::ToleranceReached,
                bracket: Some((a, b)),
                trace,
                algorithm: ALGORITHM,
            });
        }

        // keep the half with the sign change
        if fa * ft < 0.0 {
            b = t;
        } else {
            a = t;
            fa = ft;
        }
    }

    Ok(SolverResult {
        root: t,
        f_root: ft,
        iterations: cfg.max_iter(),
        termination: Termination::IterationLimit,
        bracket: Some((a, b)),
        trace,
        algorithm: ALGORITHM,
    })
}
