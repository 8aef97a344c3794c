//! tests for the comparative driver
use rootviz::compare::compare_all;
use rootviz::config::SolverCfg;
use rootviz::errors::SolverError;

fn target(x: f64) -> f64 {
    x * x - 3.0
}

fn target_derivative(x: f64) -> f64 {
    2.0 * x
}

#[test]
fn all_methods_agree_on_the_root() {
    let cmp = compare_all(
        target,
        target_derivative,
        (1.0, 2.0),
        1.5,
        (1.0, 2.0),
        SolverCfg::new(),
    );

    let root = 3.0_f64.sqrt();
    for (name, outcome) in cmp.outcomes() {
        let res = outcome.as_ref().unwrap_or_else(|e| panic!("{name} failed: {e}"));
        assert!(
            (res.root - root).abs() < 1e-6,
            "{name} off target: {}",
            res.root
        );
        assert!(res.converged(), "{name} hit the iteration cap");
    }
}

#[test]
fn bad_bracket_only_fails_the_bracket_methods() {
    // f(1) and f(1.4) share a sign; Newton and secant don't care
    let cmp = compare_all(
        target,
        target_derivative,
        (1.0, 1.4),
        1.5,
        (1.0, 2.0),
        SolverCfg::new(),
    );

    assert!(matches!(
        cmp.bisection,
        Err(SolverError::InvalidBracket { .. })
    ));
    assert!(matches!(
        cmp.regula_falsi,
        Err(SolverError::InvalidBracket { .. })
    ));
    assert!(cmp.newton.is_ok());
    assert!(cmp.secant.is_ok());
}

#[test]
fn outcomes_keep_a_fixed_label_order() {
    let cmp = compare_all(
        target,
        target_derivative,
        (1.0, 2.0),
        1.5,
        (1.0, 2.0),
        SolverCfg::new(),
    );

    let labels: Vec<&str> = cmp.outcomes().iter().map(|(name, _)| *name).collect();
    assert_eq!(labels, ["bisection", "regula_falsi", "newton", "secant"]);
}

#[test]
fn traces_pass_through_untouched() {
    let cfg = SolverCfg::new();
    let cmp = compare_all(target, target_derivative, (1.0, 2.0), 1.5, (1.0, 2.0), cfg);

    let standalone = rootviz::newton::newton(target, target_derivative, 1.5, cfg)
        .expect("newton converges from 1.5");
    let driven = cmp.newton.expect("newton converges under the driver");

    assert_eq!(driven.trace, standalone.trace);
}
