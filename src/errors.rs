//! Root-finding error types.
//!
//! All variants are fatal: they abort the single solver call immediately and
//! surface to the caller. Exhausting the iteration cap is *not* an error — the
//! last estimate is still returned, flagged via
//! [`Termination::IterationLimit`](crate::trace::Termination).

use thiserror::Error;

/// Fatal solver failures.
///
/// - [`SolverError::InvalidBracket`]    : entry sign check failed; no iteration performed
/// - [`SolverError::DegenerateBracket`] : false-position denominator vanished mid-run
/// - [`SolverError::ZeroDerivative`]    : Newton's derivative vanished mid-run
/// - [`SolverError::ZeroDifference`]    : secant's function values coincide mid-run
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SolverError {
    #[error("invalid bracket [{a}, {b}]: f(a) and f(b) must have opposite signs")]
    InvalidBracket { a: f64, b: f64 },

    #[error("degenerate bracket on [{a}, {b}]: f(b) - f(a) == 0, interpolation undefined")]
    DegenerateBracket { a: f64, b: f64 },

    #[error("derivative vanished at x={x}: tangent step undefined")]
    ZeroDerivative { x: f64 },

    #[error("secant step undefined: f(x0) == f(x1) for x0={x0}, x1={x1}")]
    ZeroDifference { x0: f64, x1: f64 },
}
