//! tests for the console trace renderer
use rootviz::bisection::bisection;
use rootviz::compare::compare_all;
use rootviz::config::SolverCfg;
use rootviz::newton::newton;
use rootviz::render;

fn target(x: f64) -> f64 {
    x * x - 3.0
}

fn target_derivative(x: f64) -> f64 {
    2.0 * x
}

fn rendered(write: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
    let mut buf = Vec::new();
    write(&mut buf).expect("writing to a Vec cannot fail");
    String::from_utf8(buf).expect("renderer emits valid utf-8")
}

#[test]
fn bracket_table_has_header_and_one_row_per_step() {
    let res = bisection(target, 1.0, 2.0, SolverCfg::new()).unwrap();
    let out = rendered(|buf| render::write_trace(buf, &res));

    let lines: Vec<&str> = out.lines().collect();
    assert!(lines[0].contains("Iter"));
    assert!(lines[0].contains("a"));
    assert!(lines[0].contains("x (est)"));
    // header + separator + one row per trace step
    assert_eq!(lines.len(), res.trace.len() + 2);
}

#[test]
fn open_table_uses_the_narrow_layout() {
    let res = newton(target, target_derivative, 1.5, SolverCfg::new()).unwrap();
    let out = rendered(|buf| render::write_trace(buf, &res));

    let lines: Vec<&str> = out.lines().collect();
    assert!(lines[0].contains("x_n"));
    assert!(!lines[0].contains("x (est)"));
    assert_eq!(lines.len(), res.trace.len() + 2);
}

#[test]
fn summary_warns_on_iteration_limit() {
    let cfg = SolverCfg::new().with_tol(1e-30).with_max_iter(3);
    let res = bisection(target, 1.0, 2.0, cfg).unwrap();
    let out = rendered(|buf| render::write_summary(buf, &res));

    assert!(out.contains("warning: max iterations reached"));
    assert!(out.contains("bisection"));
}

#[test]
fn summary_is_quiet_on_convergence() {
    let res = bisection(target, 1.0, 2.0, SolverCfg::new()).unwrap();
    let out = rendered(|buf| render::write_summary(buf, &res));

    assert!(!out.contains("warning"));
}

#[test]
fn comparison_table_reports_failures_inline() {
    let cmp = compare_all(
        target,
        target_derivative,
        (1.0, 1.4),
        1.5,
        (1.0, 2.0),
        SolverCfg::new(),
    );
    let out = rendered(|buf| render::write_comparison(buf, &cmp));

    let lines: Vec<&str> = out.lines().collect();
    // header + separator + four method rows
    assert_eq!(lines.len(), 6);
    assert!(out.contains("failed: invalid bracket"));
    assert!(out.contains("newton"));
}
