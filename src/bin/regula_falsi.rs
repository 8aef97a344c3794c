//! Regula-falsi on f(x) = x² - 3 over [1, 2].

use std::io::{self, Write};

use rootviz::config::SolverCfg;
use rootviz::regula_falsi::regula_falsi;
use rootviz::render;

fn main() -> io::Result<()> {
    let f = |x: f64| x * x - 3.0;
    let (a, b) = (1.0, 2.0);

    let result = match regula_falsi(f, a, b, SolverCfg::new()) {
        Ok(res) => res,
        Err(e) => {
            eprintln!("regula-falsi failed: {e}");
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
        let series = vec![("regula-falsi".to_owned(), plot::trace_points(&result))];
        if let Err(e) = plot::show(f, (a, b), series, PlotConfig::new("Regula-Falsi: x² - 3")) {
            eprintln!("plot window failed: {e}");
        }
    }

    Ok(())
}
