//! Iteration traces and the result type returned by all solvers.
//!
//! A solver appends one [`TraceStep`] per iteration (the secant method also
//! pre-seeds its two starting guesses). The trace is append-only while the
//! solver runs and read-only once returned, so renderers and tests consume the
//! exact sequence the method produced.

/// One recorded step of a solver run.
///
/// - [`TraceStep::Bracket`] : bracketing methods (bisection, regula-falsi);
///   carries the bounds *before* narrowing plus the new estimate
/// - [`TraceStep::Open`]    : open methods (Newton, secant); carries one iterate
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TraceStep {
    Bracket { a: f64, b: f64, x: f64, fx: f64 },
    Open { x: f64, fx: f64 },
}

impl TraceStep {
    /// The root estimate recorded by this step.
    #[inline]
    #[must_use]
    pub fn estimate(&self) -> f64 {
        match *self {
            TraceStep::Bracket { x, .. } | TraceStep::Open { x, .. } => x,
        }
    }

    /// Function value at the recorded estimate.
    #[inline]
    #[must_use]
    pub fn f_estimate(&self) -> f64 {
        match *self {
            TraceStep::Bracket { fx, .. } | TraceStep::Open { fx, .. } => fx,
        }
    }
}

/// Ordered, append-only sequence of solver steps.
///
/// Iteration indices are positional. Equality is exact (`f64` bit semantics via
/// `PartialEq`), which is what makes the determinism of a solver observable:
/// two runs with identical inputs produce `==` traces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IterationTrace {
    steps: Vec<TraceStep>,
}

impl IterationTrace {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_bracket(&mut self, a: f64, b: f64, x: f64, fx: f64) {
        self.steps.push(TraceStep::Bracket { a, b, x, fx });
    }

    pub(crate) fn push_open(&mut self, x: f64, fx: f64) {
        self.steps.push(TraceStep::Open { x, fx });
    }

    /// All recorded steps, in production order.
    #[must_use]
    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The recorded estimates only, dropping bracket bounds and residuals.
    pub fn estimates(&self) -> impl Iterator<Item = f64> + '_ {
        self.steps.iter().map(TraceStep::estimate)
    }
}

/// Why a solver stopped.
///
/// [`Termination::IterationLimit`] is non-fatal: the last computed estimate is
/// still returned and callers decide whether to treat it as usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    ToleranceReached,
    IterationLimit,
}

/// Final report returned by every solver.
///
/// - `root`        : terminal estimate
/// - `f_root`      : function value at `root`
/// - `iterations`  : iterations performed
/// - `termination` : why the solver stopped ([`Termination`])
/// - `bracket`     : final `(a, b)` interval (bracketing methods only)
/// - `trace`       : full ordered [`IterationTrace`]
/// - `algorithm`   : method name (e.g. `"bisection"`)
#[derive(Debug, Clone, PartialEq)]
pub struct SolverResult {
    pub root: f64,
    pub f_root: f64,
    pub iterations: usize,
    pub termination: Termination,
    pub bracket: Option<(f64, f64)>,
    pub trace: IterationTrace,
    pub algorithm: &'static str,
}

impl SolverResult {
    /// `true` when the tolerance was met before the iteration cap.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.termination == Termination::ToleranceReached
    }
}
