//! All four methods on f(x) = x² - 3, side by side.
//!
//! Shared starting data: bracket [1, 2] for the bracketing methods,
//! x0 = 1.5 for Newton, (1, 2) for the secant method.

use std::io::{self, Write};

use rootviz::compare::compare_all;
use rootviz::config::SolverCfg;
use rootviz::render;

fn main() -> io::Result<()> {
    let f = |x: f64| x * x - 3.0;
    let df = |x: f64| 2.0 * x;

    let comparison = compare_all(f, df, (1.0, 2.0), 1.5, (1.0, 2.0), SolverCfg::new());

    let mut out = io::stdout().lock();
    render::write_comparison(&mut out, &comparison)?;
    out.flush()?;

    #[cfg(feature = "plot")]
    {
        use rootviz::plot::{self, PlotConfig};
        let series: Vec<(String, Vec<[f64; 2]>)> = comparison
            .outcomes()
            .iter()
            .filter_map(|(name, outcome)| {
                outcome
                    .as_ref()
                    .ok()
                    .map(|res| ((*name).to_owned(), plot::trace_points(res)))
            })
            .collect();
        if let Err(e) = plot::show(f, (1.0, 2.0), series, PlotConfig::new("Root-finding: x² - 3"))
        {
            eprintln!("plot window failed: {e}");
        }
    }

    Ok(())
}
