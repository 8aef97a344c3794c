//! Classical scalar root-finding methods with per-iteration traces.
//!
//! Four textbook algorithms are provided as pure computational functions:
//! - [`bisection::bisection`]       : interval halving over a sign-change bracket
//! - [`regula_falsi::regula_falsi`] : false-position interpolation over a bracket
//! - [`newton::newton`]             : tangent-line iteration (needs the derivative)
//! - [`secant::secant`]             : finite-difference tangent from two prior points
//!
//! Every solver takes the target function as a plain callable, iterates under a
//! `|f(x)| < tol` stopping rule with an iteration cap, and returns a
//! [`trace::SolverResult`] carrying the terminal estimate together with the full
//! ordered [`trace::IterationTrace`]. The solvers print nothing; rendering the
//! trace as a console table ([`render`]) or a plot window ([`plot`], behind the
//! `plot` feature) is layered on top of the returned data.
//!
//! [`compare::compare_all`] runs all four methods on the same problem and
//! collects their outcomes side by side, isolating failures per method.
//!
//! ```
//! use rootviz::bisection::bisection;
//! use rootviz::config::SolverCfg;
//!
//! let res = bisection(|x| x * x - 3.0, 1.0, 2.0, SolverCfg::new()).unwrap();
//! assert!((res.root - 3.0_f64.sqrt()).abs() < 1e-6);
//! ```

// common helpers
pub mod config;
pub mod errors;
pub mod trace;

// algorithms
pub mod bisection;
pub mod newton;
pub mod regula_falsi;
pub mod secant;

// comparative driver
pub mod compare;

// presentation
pub mod render;
#[cfg(feature = "plot")]
pub mod plot;
