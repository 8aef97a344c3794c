//! Regula-falsi (false position): secant interpolation over a sign-change bracket.

use crate::config::SolverCfg;
use crate::errors::SolverError;
use crate::trace::{IterationTrace, SolverResult, Termination};

const ALGORITHM: &str = "regula_falsi";

/// x-intercept of the line through `(a, fa)` and `(b, fb)`.
///
/// Returns `None` when the denominator `fb - fa` is exactly zero (collinear
/// endpoints), which the caller reports as a degenerate bracket.
#[inline]
fn interpolate((a, fa): (f64, f64), (b, fb): (f64, f64)) -> Option<f64> {
    let denom = fb - fa;
    if denom == 0.0 {
        return None;
    }
    Some((a * fb - b * fa) / denom)
}

/// Finds a root of `f` using the
/// [regula falsi method](https://en.wikipedia.org/wiki/Regula_falsi).
///
/// Same bracket precondition and narrowing policy as
/// [`bisection`](crate::bisection::bisection), but the estimate is the secant
/// x-intercept of the current endpoints rather than the midpoint. This is the
/// *pure* false-position rule: one endpoint may stall for convex or concave
/// functions, slowing convergence. That artifact is documented behavior of the
/// classic method and is deliberately not compensated for here.
///
/// # Arguments
/// - `f`   : function whose root is sought
/// - `a`   : lower bound of the bracket
/// - `b`   : upper bound of the bracket
/// - `cfg` : [`SolverCfg`] (`tol`, `max_iter`)
///
/// # Returns
/// [`SolverResult`] with the final interpolated estimate, the
/// `(iter, a, b, x, f(x))` trace, and the final bracket. Exhausting the cap is
/// non-fatal and reported as [`Termination::IterationLimit`].
///
/// # Errors
/// - [`SolverError::InvalidBracket`]    : `f(a) * f(b) >= 0`; no iteration is performed
/// - [`SolverError::DegenerateBracket`] : `f(b) - f(a) == 0` mid-run; interpolation undefined
pub fn regula_falsi<F>(
    mut f: F,
    mut a: f64,
    mut b: f64,
    cfg: SolverCfg,
) -> Result<SolverResult, SolverError>
where
    F: FnMut(f64) -> f64,
{
    if f(a) * f(b) >= 0.0 {
        return Err(SolverError::InvalidBracket { a, b });
    }

    let mut trace = IterationTrace::new();

    // overwritten on the first iteration
    let mut x = a;
    let mut fx = 0.0;
    for iter in 1..=cfg.max_iter() {
        let fa = f(a);
        let fb = f(b);
        x = match interpolate((a, fa), (b, fb)) {
            Some(x) => x,
            None => return Err(SolverError::DegenerateBracket { a, b }),
        };
        fx = f(x);
        trace.push_bracket(a, b, x, fx);

        if fx.abs() < cfg.tol() {
            return Ok(SolverResult {
                root: x,
                f_root: fx,
                iterations: iter,
                termination: Termination::ToleranceReached,
                bracket: Some((a, b)),
                trace,
                algorithm: ALGORITHM,
            });
        }

        // keep the half with the sign change
        if fa * fx < 0.0 {
            b = x;
        } else {
            a = x;
        }
    }

    Ok(SolverResult {
        root: x,
        f_root: fx,
        iterations: cfg.max_iter(),
        termination: Termination::IterationLimit,
        bracket: Some((a, b)),
        trace,
        algorithm: ALGORITHM,
    })
}
