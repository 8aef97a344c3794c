//! Newton-Raphson method: tangent-line iteration with an analytic derivative.

use crate::config::SolverCfg;
use crate::errors::SolverError;
use crate::trace::{IterationTrace, SolverResult, Termination};

const ALGORITHM: &str = "newton";

/// Finds a root of `f` using the
/// [Newton-Raphson method](https://en.wikipedia.org/wiki/Newton%27s_method).
///
/// No bracket is required; convergence is quadratic near a simple root but
/// *local only*. There is no step damping and no divergence detection beyond
/// the zero-derivative check — a poor initial guess can cycle or diverge until
/// the iteration cap stops it. For guaranteed convergence use a bracketed
/// method instead.
///
/// # Arguments
/// - `f`   : function whose root is sought
/// - `df`  : analytic derivative of `f`
/// - `x0`  : initial guess
/// - `cfg` : [`SolverCfg`] (`tol`, `max_iter`)
///
/// # Returns
/// [`SolverResult`] whose trace records each pre-step iterate `x_n` with
/// `f(x_n)`; on success the accepted root is appended as the final step. On
/// cap exhaustion the last iterate is returned with
/// [`Termination::IterationLimit`] (its trace ends at the iterate that
/// produced it).
///
/// # Errors
/// - [`SolverError::ZeroDerivative`] : `df(x_n) == 0`; the tangent step is
///   undefined and the method cannot recover
pub fn newton<F, G>(mut f: F, mut df: G, x0: f64, cfg: SolverCfg) -> Result<SolverResult, SolverError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    let mut trace = IterationTrace::new();

    let mut x = x0;
    let mut fx = f(x);
    for iter in 1..=cfg.max_iter() {
        let dfx = df(x);
        if dfx == 0.0 {
            return Err(SolverError::ZeroDerivative { x });
        }

        let x_next = x - fx / dfx;
        trace.push_open(x, fx);

        let fx_next = f(x_next);
        if fx_next.abs() < cfg.tol() {
            trace.push_open(x_next, fx_next);
            return Ok(SolverResult {
                root: x_next,
                f_root: fx_next,
                iterations: iter,
                termination: Termination::ToleranceReached,
                bracket: None,
                trace,
                algorithm: ALGORITHM,
            });
        }

        x = x_next;
        fx = fx_next;
    }

    Ok(SolverResult {
        root: x,
        f_root: fx,
        iterations: cfg.max_iter(),
        termination: Termination::IterationLimit,
        bracket: None,
        trace,
        algorithm: ALGORITHM,
    })
}
