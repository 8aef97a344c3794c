//! tests for the regula-falsi solver
use approx::assert_relative_eq;
use rootviz::bisection::bisection;
use rootviz::config::SolverCfg;
use rootviz::errors::SolverError;
use rootviz::regula_falsi::regula_falsi;
use rootviz::trace::{Termination, TraceStep};

type TestResult = Result<(), SolverError>;

#[test]
fn finds_sqrt_3() -> TestResult {
    let f = |x: f64| x * x - 3.0;
    let res = regula_falsi(f, 1.0, 2.0, SolverCfg::new())?;

    assert_eq!(res.termination, Termination::ToleranceReached);
    assert!(res.f_root.abs() < 1e-6);
    assert_relative_eq!(res.root, 3.0_f64.sqrt(), epsilon = 1e-6);
    Ok(())
}

#[test]
fn agrees_with_bisection_on_same_bracket() -> TestResult {
    let f = |x: f64| x * x - 3.0;
    let cfg = SolverCfg::new();

    let falsi = regula_falsi(f, 1.0, 2.0, cfg)?;
    let bisect = bisection(f, 1.0, 2.0, cfg)?;

    assert!((falsi.root - bisect.root).abs() < 1e-6);
    Ok(())
}

#[test]
fn rejects_same_sign_bracket() -> TestResult {
    let f = |x: f64| x * x - 3.0;
    let err = regula_falsi(f, 1.0, 1.4, SolverCfg::new()).unwrap_err();

    assert!(matches!(err, SolverError::InvalidBracket { a: 1.0, b: 1.4 }));
    Ok(())
}

#[test]
fn right_endpoint_stalls_on_convex_function() -> TestResult {
    // classic false-position artifact: for x^2 - 3 on [1, 2] every estimate
    // lands left of the root, so b never moves
    let f = |x: f64| x * x - 3.0;
    let res = regula_falsi(f, 1.0, 2.0, SolverCfg::new())?;

    for step in res.trace.steps() {
        match *step {
            TraceStep::Bracket { b, .. } => assert_eq!(b, 2.0),
            TraceStep::Open { .. } => unreachable!("bracket method records bracket steps"),
        }
    }
    Ok(())
}

#[test]
fn degenerate_bracket_fails_mid_run() -> TestResult {
    // entry check sees a sign change, then the endpoint evaluations coincide
    let mut calls = 0;
    let f = move |_x: f64| {
        calls += 1;
        match calls {
            1 => -1.0,
            2 => 1.0,
            _ => 5.0,
        }
    };
    let err = regula_falsi(f, 0.0, 1.0, SolverCfg::new()).unwrap_err();

    assert!(matches!(err, SolverError::DegenerateBracket { a: 0.0, b: 1.0 }));
    Ok(())
}

#[test]
fn identical_inputs_give_identical_traces() -> TestResult {
    let f = |x: f64| x * x - 3.0;
    let cfg = SolverCfg::new();

    let first = regula_falsi(f, 1.0, 2.0, cfg)?;
    let second = regula_falsi(f, 1.0, 2.0, cfg)?;

    assert_eq!(first, second);
    Ok(())
}
