//! Bisection on f(x) = x⁴ - x³ - x² - 4 over [1, 9].

use std::io::{self, Write};

use rootviz::bisection::bisection;
use rootviz::config::SolverCfg;
use rootviz::render;

fn main() -> io::Result<()> {
    let f = |x: f64| x.powi(4) - x.powi(3) - x * x - 4.0;
    let (a, b) = (1.0, 9.0);

    let result = match bisection(f, a, b, SolverCfg::new()) {
        Ok(res) => res,
        Err(e) => {
            eprintln!("bisection failed: {e}");
            std::process::exit(1);
        }
    };

    let mut out = io::stdout().lock();
    render::write_trace(&mut out, &result)?;
    render::write_summary(&mut out, &result)?;
    out.flush()?;

    #[cfg(feature = "plot")]
    {
        use rootviz::plot::{self, PlotConfig};
        let series = vec![("bisection".to_owned(), plot::trace_points(&result))];
        if let Err(e) = plot::show(f, (a, b), series, PlotConfig::new("Bisection: x⁴ - x³ - x² - 4"))
        {
            eprintln!("plot window failed: {e}");
        }
    }

    Ok(())
}
