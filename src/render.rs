//! Console rendering of iteration traces.
//!
//! Writes to any `io::Write` sink, so the runnable scripts print to stdout
//! while tests capture output in a `Vec<u8>` (or skip rendering entirely).

use std::io::{self, Write};

use crate::compare::Comparison;
use crate::trace::{SolverResult, Termination, TraceStep};

/// Writes the iteration table for a single solver run.
///
/// Bracket traces get a five-column `Iter | a | b | x (est) | f(x)` table,
/// open traces a three-column `Iter | x_n | f(x_n)` table.
pub fn write_trace<W: Write>(out: &mut W, result: &SolverResult) -> io::Result<()> {
    if result.bracket.is_some() {
        writeln!(
            out,
            "{:>4} | {:>10} | {:>10} | {:>14} | {:>12}",
            "Iter", "a", "b", "x (est)", "f(x)"
        )?;
        writeln!(out, "{}", "-".repeat(62))?;
    } else {
        writeln!(out, "{:>4} | {:>14} | {:>12}", "Iter", "x_n", "f(x_n)")?;
        writeln!(out, "{}", "-".repeat(36))?;
    }

    for (i, step) in result.trace.steps().iter().enumerate() {
        match *step {
            TraceStep::Bracket { a, b, x, fx } => writeln!(
                out,
                "{:>4} | {:>10.6} | {:>10.6} | {:>14.6} | {:>12.6}",
                i + 1,
                a,
                b,
                x,
                fx
            )?,
            TraceStep::Open { x, fx } => {
                writeln!(out, "{:>4} | {:>14.6} | {:>12.6}", i + 1, x, fx)?;
            }
        }
    }

    Ok(())
}

/// Writes the one-line outcome for a solver run, plus a warning when the
/// iteration cap was hit before the tolerance.
pub fn write_summary<W: Write>(out: &mut W, result: &SolverResult) -> io::Result<()> {
    if result.termination == Termination::IterationLimit {
        writeln!(out, "warning: max iterations reached")?;
    }
    writeln!(
        out,
        "{}: root ≈ {:.6} (f(root) = {:.2e}, {} iterations)",
        result.algorithm, result.root, result.f_root, result.iterations
    )
}

/// Writes the side-by-side outcome table for a [`Comparison`].
pub fn write_comparison<W: Write>(out: &mut W, comparison: &Comparison) -> io::Result<()> {
    writeln!(
        out,
        "{:>14} | {:>14} | {:>12} | {:>6}",
        "method", "root", "f(root)", "iters"
    )?;
    writeln!(out, "{}", "-".repeat(56))?;

    for (name, outcome) in comparison.outcomes() {
        match outcome {
            Ok(res) => writeln!(
                out,
                "{:>14} | {:>14.6} | {:>12.2e} | {:>6}",
                name, res.root, res.f_root, res.iterations
            )?,
            Err(e) => writeln!(out, "{name:>14} | failed: {e}")?,
        }
    }

    Ok(())
}
