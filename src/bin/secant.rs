//! Secant on f(x) = x² - 3 from x0 = 1, x1 = 2.

use std::io::{self, Write};

use rootviz::config::SolverCfg;
use rootviz::render;
use rootviz::secant::secant;

fn main() -> io::Result<()> {
    let f = |x: f64| x * x - 3.0;
    let (x0, x1) = (1.0, 2.0);

    let result = match secant(f, x0, x1, SolverCfg::new()) {
        Ok(res) => res,
        Err(e) => {
            eprintln!("secant failed: {e}");
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
        let series = vec![("secant".to_owned(), plot::trace_points(&result))];
        if let Err(e) = plot::show(f, (1.0, 2.0), series, PlotConfig::new("Secant: x² - 3")) {
            eprintln!("plot window failed: {e}");
        }
    }

    Ok(())
}
