//! Shared configuration for the root-finding solvers.
//!
//! [`SolverCfg`] — universal knobs
//! - `tol`      : convergence threshold on `|f(x)|`
//! - `max_iter` : iteration cap
//!
//! Both are plain per-call parameters with defaults; there is no global state.

/// Default convergence tolerance on `|f(x)|`.
pub const DEFAULT_TOL: f64 = 1e-6;

/// Default iteration cap.
pub const DEFAULT_MAX_ITER: usize = 100;

/// Solver configuration shared by all four methods.
///
/// # Construction
/// - Use [`SolverCfg::new`] then chain optional setters.
///
/// # Defaults
/// - `tol`      = [`DEFAULT_TOL`] (1e-6)
/// - `max_iter` = [`DEFAULT_MAX_ITER`] (100)
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SolverCfg {
    tol: f64,
    max_iter: usize,
}

impl SolverCfg {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_tol(mut self, v: f64) -> Self {
        self.tol = v;
        self
    }

    #[must_use]
    pub fn with_max_iter(mut self, v: usize) -> Self {
        self.max_iter = v;
        self
    }

    #[inline]
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }

    #[inline]
    #[must_use]
    pub fn max_iter(&self) -> usize {
        self.max_iter
    }
}

impl Default for SolverCfg {
    fn default() -> Self {
        Self {
            tol: DEFAULT_TOL,
            max_iter: DEFAULT_MAX_ITER,
        }
    }
}
