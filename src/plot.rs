//! Plot window for visualizing solver traces (behind the `plot` feature).
//!
//! Draws the target function as a sampled curve and each trace's estimates as
//! point markers in a blocking egui window. The solvers never touch this
//! module; it only consumes returned [`SolverResult`] data.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::trace::SolverResult;

/// Configuration for a plot window.
///
/// Construct with [`PlotConfig::new`] and chain builder methods as needed.
pub struct PlotConfig {
    title: String,
    samples: usize,
}

impl PlotConfig {
    /// Creates a config with the given window title and 400 curve samples.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            samples: 400,
        }
    }

    /// Sets the number of points used to sample the function curve.
    #[must_use]
    pub fn samples(mut self, n: usize) -> Self {
        self.samples = n.max(2);
        self
    }
}

/// `(x, f(x))` pairs for every estimate recorded in a result's trace.
#[must_use]
pub fn trace_points(result: &SolverResult) -> Vec<[f64; 2]> {
    result
        .trace
        .steps()
        .iter()
        .map(|s| [s.estimate(), s.f_estimate()])
        .collect()
}

/// Opens a blocking window plotting `f` over `range` with the named estimate
/// series overlaid as markers.
///
/// Blocks until the window is closed by the user.
///
/// # Errors
///
/// Returns an error if the native window cannot be created.
pub fn show<F>(
    mut f: F,
    range: (f64, f64),
    series: Vec<(String, Vec<[f64; 2]>)>,
    config: PlotConfig,
) -> Result<(), eframe::Error>
where
    F: FnMut(f64) -> f64,
{
    let (lo, hi) = range;
    let n = config.samples;
    let curve: Vec<[f64; 2]> = (0..n)
        .map(|i| {
            let x = lo + (hi - lo) * (i as f64) / ((n - 1) as f64);
            [x, f(x)]
        })
        .collect();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        &config.title,
        options,
        Box::new(move |_cc| Ok(Box::new(TracePlotApp { curve, series }))),
    )
}

/// The egui [`eframe::App`] that renders the curve and estimate series.
struct TracePlotApp {
    curve: Vec<[f64; 2]>,
    series: Vec<(String, Vec<[f64; 2]>)>,
}

impl eframe::App for TracePlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            Plot::new("root_trace")
                .legend(Legend::default())
                .show(ui, |plot_ui| {
                    let curve: PlotPoints = self.curve.iter().copied().collect();
                    plot_ui.line(Line::new(curve).name("f(x)"));

                    for (name, points) in &self.series {
                        let pts: PlotPoints = points.iter().copied().collect();
                        plot_ui.points(Points::new(pts).radius(3.0).name(name));
                    }
                });
        });
    }
}
