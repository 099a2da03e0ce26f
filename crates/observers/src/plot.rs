//! Plotting observer for visualizing Jacobi convergence.
//!
//! See [`PlotObserver`] for usage.

use eframe::egui;
use egui_plot::{HLine, Legend, Line, Plot, PlotPoints};
use jacomat_core::{Observer, unknown_name};
use jacomat_solvers::jacobi::History;

use crate::traits::{HasDelta, HasIterate, HasIteration, HasMaxChange};

/// Configuration for rendering a [`PlotObserver`] result.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
/// Unless overridden, convergence plots use a log₁₀ y-axis and variable
/// plots a linear one.
///
/// # Example
///
/// ```ignore
/// obs.show(ShowConfig::new().title("Jacobi").legend().tolerance(1e-8))?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    log_y: Option<bool>,
    tolerance: Option<f64>,
}

impl ShowConfig {
    /// Creates a new `ShowConfig`: no title, no legend, scale chosen by series.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            log_y: None,
            tolerance: None,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Forces a logarithmic y-axis (base 10).
    ///
    /// Non-positive values cannot be placed on it and are skipped.
    #[must_use]
    pub fn log_y(mut self) -> Self {
        self.log_y = Some(true);
        self
    }

    /// Forces a linear y-axis.
    #[must_use]
    pub fn linear_y(mut self) -> Self {
        self.log_y = Some(false);
        self
    }

    /// Draws a horizontal reference line at the stopping tolerance.
    ///
    /// Only meaningful for [`Series::Convergence`]; the sweep where the
    /// delta trace crosses it is where an epsilon policy stops.
    #[must_use]
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// What a [`PlotObserver`] extracts from each sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Series {
    /// The L1 delta and the max-norm change.
    Convergence,

    /// Every component of the iterate.
    Variables,
}

impl Series {
    /// Changes shrink geometrically, so they read best on a log scale.
    fn default_log_y(self) -> bool {
        matches!(self, Self::Convergence)
    }

    fn y_label(self, log_y: bool) -> &'static str {
        match (self, log_y) {
            (Self::Convergence, true) => "log₁₀ change",
            (Self::Convergence, false) => "change",
            (Self::Variables, true) => "log₁₀ value",
            (Self::Variables, false) => "value",
        }
    }
}

/// An observer that collects per-sweep traces and displays them via egui.
///
/// The x-axis is the sweep number. Pass `&mut PlotObserver` as the solver
/// observer, then call [`show`][PlotObserver::show] after the solve.
///
/// # Example
///
/// ```ignore
/// let mut obs = PlotObserver::convergence();
/// jacobi::solve(&system, Policy::Epsilon(1e-8), &Config::default(), &mut obs)?;
/// obs.show(ShowConfig::new().title("Jacobi").legend().log_y())?;
/// ```
pub struct PlotObserver {
    series: Series,
    names: Vec<String>,
    data: Vec<Vec<[f64; 2]>>,
}

impl PlotObserver {
    /// Creates an observer that plots the L1 delta and max-norm change.
    #[must_use]
    pub fn convergence() -> Self {
        Self::with_names(Series::Convergence, ["L1 delta", "Max change"])
    }

    /// Creates an observer that plots each of `n` unknowns.
    #[must_use]
    pub fn variables(n: usize) -> Self {
        Self::with_names(Series::Variables, (0..n).map(unknown_name))
    }

    /// Creates a variables plot from a finished solve's history.
    #[must_use]
    pub fn from_history(history: &History) -> Self {
        let n = history.last().map_or(0, <[f64]>::len);
        let mut obs = Self::variables(n);
        for (index, snapshot) in history.iter().enumerate() {
            obs.record_iterate(index + 1, snapshot);
        }
        obs
    }

    fn with_names<S: Into<String>>(series: Series, names: impl IntoIterator<Item = S>) -> Self {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let data = vec![Vec::new(); names.len()];
        Self {
            series,
            names,
            data,
        }
    }

    /// Returns which series this observer records.
    #[must_use]
    pub fn series(&self) -> Series {
        self.series
    }

    /// Records a single data point across all traces.
    ///
    /// For each trace slot, `None` skips recording for that trace while
    /// leaving other traces unaffected. Extra slots are ignored.
    pub fn record(&mut self, x: f64, traces: &[Option<f64>]) {
        for (points, y) in self.data.iter_mut().zip(traces) {
            if let Some(y) = *y {
                points.push([x, y]);
            }
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn record_iterate(&mut self, iteration: usize, iterate: &[f64]) {
        let traces: Vec<Option<f64>> = iterate.iter().copied().map(Some).collect();
        self.record(iteration as f64, &traces);
    }

    /// Opens a blocking egui window displaying all collected traces.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.unwrap_or_default();
        let app = PlotApp {
            series: self.series,
            traces: self.names.into_iter().zip(self.data).collect(),
            legend: config.legend,
            log_y: config.log_y.unwrap_or(self.series.default_log_y()),
            tolerance: config.tolerance,
        };

        eframe::run_native(&title, options, Box::new(move |_cc| Ok(Box::new(app))))
    }
}

impl<E, A> Observer<E, A> for PlotObserver
where
    E: HasIteration + HasDelta + HasMaxChange + HasIterate,
{
    #[allow(clippy::cast_precision_loss)]
    fn observe(&mut self, event: &E) -> Option<A> {
        match self.series {
            Series::Convergence => self.record(
                event.iteration() as f64,
                &[Some(event.delta()), Some(event.max_change())],
            ),
            Series::Variables => self.record_iterate(event.iteration(), event.iterate()),
        }
        None
    }
}

/// Allows `&mut PlotObserver` to be passed to solvers that take an observer
/// by value, so [`PlotObserver::show`] can be called after the solve completes.
impl<E, A> Observer<E, A> for &mut PlotObserver
where
    E: HasIteration + HasDelta + HasMaxChange + HasIterate,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

/// Maps recorded points onto the plotted y-axis.
///
/// On a log axis, points with a non-positive y (a sweep that changed nothing)
/// are dropped.
fn scaled(points: &[[f64; 2]], log_y: bool) -> Vec<[f64; 2]> {
    if log_y {
        points
            .iter()
            .filter(|p| p[1] > 0.0)
            .map(|p| [p[0], p[1].log10()])
            .collect()
    } else {
        points.to_vec()
    }
}

/// Returns where the tolerance line sits on the plotted y-axis, if anywhere.
fn tolerance_level(tolerance: f64, log_y: bool) -> Option<f64> {
    match (log_y, tolerance > 0.0) {
        (true, true) => Some(tolerance.log10()),
        (true, false) => None,
        (false, _) => Some(tolerance),
    }
}

/// The egui [`eframe::App`] that renders collected sweeps.
struct PlotApp {
    series: Series,
    traces: Vec<(String, Vec<[f64; 2]>)>,
    legend: bool,
    log_y: bool,
    tolerance: Option<f64>,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("jacobi_plot")
                .x_axis_label("sweep")
                .y_axis_label(self.series.y_label(self.log_y));
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            plot.show(ui, |plot_ui| {
                for (name, points) in &self.traces {
                    let plot_points: PlotPoints =
                        scaled(points, self.log_y).into_iter().collect();
                    plot_ui.line(Line::new(plot_points).name(name));
                }
                if let Some(level) = self
                    .tolerance
                    .and_then(|tolerance| tolerance_level(tolerance, self.log_y))
                {
                    plot_ui.hline(HLine::new(level).name("tolerance"));
                }
            });
        });
    }
}
