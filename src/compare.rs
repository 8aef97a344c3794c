//! Comparative driver: all four methods on the same problem, side by side.

use crate::bisection::bisection;
use crate::config::SolverCfg;
use crate::errors::SolverError;
use crate::newton::newton;
use crate::regula_falsi::regula_falsi;
use crate::secant::secant;
use crate::trace::SolverResult;

/// Per-method outcome held by a [`Comparison`].
pub type SolverOutcome = Result<SolverResult, SolverError>;

/// Outcomes of one [`compare_all`] run.
///
/// Each method's success or failure is held independently — a bad bracket
/// fails the two bracketing entries without touching the open ones. Traces are
/// moved in exactly as the solvers produced them, never reordered or edited.
#[derive(Debug)]
pub struct Comparison {
    pub bisection: SolverOutcome,
    pub regula_falsi: SolverOutcome,
    pub newton: SolverOutcome,
    pub secant: SolverOutcome,
}

impl Comparison {
    /// Labeled outcomes in a fixed order, for renderers.
    #[must_use]
    pub fn outcomes(&self) -> [(&'static str, &SolverOutcome); 4] {
        [
            ("bisection", &self.bisection),
            ("regula_falsi", &self.regula_falsi),
            ("newton", &self.newton),
            ("secant", &self.secant),
        ]
    }
}

/// Runs all four solvers against the same `f` with compatible starting data
/// and the shared `cfg`.
///
/// # Arguments
/// - `f`       : function whose root is sought (shared by all methods)
/// - `df`      : derivative of `f`, used by Newton only
/// - `bracket` : `(a, b)` sign-change interval for bisection and regula-falsi
/// - `guess`   : initial guess for Newton
/// - `seeds`   : `(x0, x1)` initial pair for the secant method
/// - `cfg`     : [`SolverCfg`] applied to every method
///
/// # Returns
/// A [`Comparison`] aggregating each method's `Result` independently; this
/// function itself never fails.
pub fn compare_all<F, G>(
    f: F,
    df: G,
    bracket: (f64, f64),
    guess: f64,
    seeds: (f64, f64),
    cfg: SolverCfg,
) -> Comparison
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    let (a, b) = bracket;
    let (s0, s1) = seeds;

    Comparison {
        bisection: bisection(&f, a, b, cfg),
        regula_falsi: regula_falsi(&f, a, b, cfg),
        newton: newton(&f, &df, guess, cfg),
        secant: secant(&f, s0, s1, cfg),
    }
}
