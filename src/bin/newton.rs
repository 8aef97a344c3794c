//! Newton-Raphson on f(x) = x² - 3 from x0 = 1.5.

use std::io::{self, Write};

use rootviz::config::SolverCfg;
use rootviz::newton::newton;
use rootviz::render;

fn main() -> io::Result<()> {
    let f = |x: f64| x * x - 3.0;
    let df = |x: f64| 2.0 * x;
    let x0 = 1.5;

    let result = match newton(f, df, x0, SolverCfg::new()) {
        Ok(res) => res,
        Err(e) => {
            eprintln!("newton failed: {e}");
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
        let series = vec![("newton".to_owned(), plot::trace_points(&result))];
        if let Err(e) = plot::show(f, (1.0, 2.0), series, PlotConfig::new("Newton-Raphson: x² - 3"))
        {
            eprintln!("plot window failed: {e}");
        }
    }

    Ok(())
}
