//! Price chart state and lifecycle
//!
//! `ChartView` owns the chart model (one label axis, a "Historical" and an
//! "AI Forecast" series) and drives a `ChartBackend` that does the drawing.
//! The view is Uninitialized until the first `initialize` or `update`, then
//! Ready until `dispose`.
//!
//! `figure` turns the model into a plotly figure; the browser backend hands
//! that figure to plotly.js.

use plotly::common::{DashType, Line, Mode, Title};
use plotly::layout::{Axis, AxisType, HoverMode, Margin};
use plotly::{Configuration, Layout, Plot, Scatter};

use crate::error::Result;

/// Label of the solid historical series
pub const HISTORICAL_LABEL: &str = "Historical";

/// Label of the dashed forecast series
pub const FORECAST_LABEL: &str = "AI Forecast";

/// Stroke style of a series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

impl LineStyle {
    fn dash(self) -> DashType {
        match self {
            LineStyle::Solid => DashType::Solid,
            LineStyle::Dashed => DashType::Dash,
        }
    }
}

/// Series colours, sourced from the page's CSS custom properties
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartTheme {
    /// `--primary-color`
    pub primary: String,
    /// `--accent-color`
    pub accent: String,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            primary: "#1f6feb".to_string(),
            accent: "#f0883e".to_string(),
        }
    }
}

impl ChartTheme {
    /// Build a theme from raw property values; blank values keep the default
    pub fn from_properties(primary: Option<&str>, accent: Option<&str>) -> Self {
        let fallback = Self::default();
        let pick = |raw: Option<&str>, default: String| {
            raw.map(str::trim)
                .filter(|v| !v.is_empty())
                .map_or(default, str::to_string)
        };
        Self {
            primary: pick(primary, fallback.primary),
            accent: pick(accent, fallback.accent),
        }
    }
}

/// One plotted line
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub color: String,
    pub style: LineStyle,
    /// `None` leaves a gap in the line
    pub points: Vec<Option<f64>>,
}

/// Everything the backend needs to draw a frame
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub historical: Series,
    pub forecast: Series,
}

impl ChartData {
    /// Empty two-series chart styled with `theme`
    pub fn empty(theme: &ChartTheme) -> Self {
        Self {
            labels: Vec::new(),
            historical: Series {
                label: HISTORICAL_LABEL.to_string(),
                color: theme.primary.clone(),
                style: LineStyle::Solid,
                points: Vec::new(),
            },
            forecast: Series {
                label: FORECAST_LABEL.to_string(),
                color: theme.accent.clone(),
                style: LineStyle::Dashed,
                points: Vec::new(),
            },
        }
    }

    pub fn series(&self) -> [&Series; 2] {
        [&self.historical, &self.forecast]
    }

    /// Category for point `index`. Points past the end of the label axis
    /// still get a distinct category so ragged series are not collapsed.
    fn category(&self, index: usize) -> String {
        self.labels
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("#{}", index + 1))
    }
}

/// Build the plotly figure for `data`.
///
/// Both series share a category x axis keyed by position. `null` points are
/// left as gaps.
pub fn figure(data: &ChartData) -> Plot {
    let mut plot = Plot::new();

    for series in data.series() {
        let x: Vec<String> = (0..series.points.len()).map(|i| data.category(i)).collect();
        let trace = Scatter::new(x, series.points.clone())
            .mode(Mode::Lines)
            .name(&series.label)
            .connect_gaps(false)
            .line(
                Line::new()
                    .color(series.color.clone())
                    .width(2.0)
                    .dash(series.style.dash()),
            );
        plot.add_trace(trace);
    }

    let layout = Layout::new()
        .show_legend(true)
        .hover_mode(HoverMode::X)
        .margin(Margin::new().left(64).right(16).top(32).bottom(40))
        .x_axis(Axis::new().type_(AxisType::Category))
        .y_axis(Axis::new().title(Title::with_text("Price (₱)")));
    plot.set_layout(layout);
    plot.set_configuration(Configuration::new().responsive(true).display_logo(false));

    plot
}

/// Drawing surface behind a `ChartView`
pub trait ChartBackend {
    /// Create the widget for an empty chart
    fn create(&mut self, data: &ChartData) -> Result<()>;

    /// Redraw with the full current data
    fn draw(&mut self, data: &ChartData) -> Result<()>;

    /// Release the widget
    fn destroy(&mut self);
}

/// Owned chart object with an explicit lifecycle
pub struct ChartView<B> {
    backend: B,
    theme: ChartTheme,
    data: Option<ChartData>,
}

impl<B: ChartBackend> ChartView<B> {
    pub fn new(backend: B, theme: ChartTheme) -> Self {
        Self {
            backend,
            theme,
            data: None,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.data.is_some()
    }

    /// Current chart model, `None` while Uninitialized
    pub fn data(&self) -> Option<&ChartData> {
        self.data.as_ref()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Uninitialized → Ready. Calling it on a Ready view is a no-op, so only
    /// one widget is ever bound to the surface.
    pub fn initialize(&mut self) -> Result<()> {
        if self.data.is_some() {
            return Ok(());
        }
        let data = ChartData::empty(&self.theme);
        self.backend.create(&data)?;
        log::debug!("📈 Chart initialized");
        self.data = Some(data);
        Ok(())
    }

    /// Replace the label axis and both series wholesale, then redraw.
    ///
    /// Lengths are not reconciled; whatever the backend does with ragged
    /// series is what the user sees.
    pub fn update(
        &mut self,
        labels: Vec<String>,
        historical: Vec<Option<f64>>,
        forecast: Vec<Option<f64>>,
    ) -> Result<()> {
        self.initialize()?;

        let Some(data) = self.data.as_mut() else {
            return Ok(());
        };
        data.labels = labels;
        data.historical.points = historical;
        data.forecast.points = forecast;

        self.backend.draw(data)
    }

    /// Draw the current model again, e.g. after its container became
    /// visible. An Uninitialized view is initialized instead.
    pub fn redraw(&mut self) -> Result<()> {
        match &self.data {
            Some(data) => self.backend.draw(data),
            None => self.initialize(),
        }
    }

    /// Ready → Uninitialized
    pub fn dispose(&mut self) {
        if self.data.take().is_some() {
            self.backend.destroy();
            log::debug!("Chart disposed");
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::DashboardError;
    use serde_json::{Value, json};

    /// Backend that records every call
    #[derive(Debug, Default)]
    pub(crate) struct RecordingBackend {
        pub created: usize,
        pub destroyed: usize,
        pub frames: Vec<ChartData>,
        pub fail_draw: bool,
    }

    impl ChartBackend for RecordingBackend {
        fn create(&mut self, _data: &ChartData) -> Result<()> {
            self.created += 1;
            Ok(())
        }

        fn draw(&mut self, data: &ChartData) -> Result<()> {
            if self.fail_draw {
                return Err(DashboardError::Chart("plot container lost".into()));
            }
            self.frames.push(data.clone());
            Ok(())
        }

        fn destroy(&mut self) {
            self.destroyed += 1;
        }
    }

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    fn traces(data: &ChartData) -> Vec<Value> {
        let figure: Value =
            serde_json::from_str(&figure(data).to_json()).expect("figure should be JSON");
        figure["data"].as_array().cloned().expect("figure has traces")
    }

    #[test]
    fn test_update_initializes_lazily() {
        let mut view = ChartView::new(RecordingBackend::default(), ChartTheme::default());
        assert!(!view.is_ready());

        view.update(labels(&["d1"]), vec![Some(1.0)], vec![Some(2.0)])
            .expect("update should succeed");

        assert!(view.is_ready());
        assert_eq!(view.backend().created, 1);
        assert_eq!(view.backend().frames.len(), 1);
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let mut view = ChartView::new(RecordingBackend::default(), ChartTheme::default());
        view.initialize().expect("first init");
        view.initialize().expect("second init");
        view.update(vec![], vec![], vec![]).expect("update");
        assert_eq!(view.backend().created, 1);
    }

    #[test]
    fn test_update_replaces_series() {
        let mut view = ChartView::new(RecordingBackend::default(), ChartTheme::default());
        view.update(
            labels(&["a", "b", "c"]),
            vec![Some(1.0), Some(2.0), Some(3.0)],
            vec![Some(4.0), Some(5.0), Some(6.0)],
        )
        .expect("first update");
        view.update(labels(&["x"]), vec![Some(9.0)], vec![None, Some(8.0)])
            .expect("second update");

        let data = view.data().expect("chart should be ready");
        assert_eq!(data.labels, labels(&["x"]));
        assert_eq!(data.historical.points, vec![Some(9.0)]);
        assert_eq!(data.forecast.points, vec![None, Some(8.0)]);
        assert_eq!(view.backend().frames.last(), Some(data));
    }

    #[test]
    fn test_redraw_repeats_current_frame() {
        let mut view = ChartView::new(RecordingBackend::default(), ChartTheme::default());
        view.update(labels(&["a", "b"]), vec![Some(1.0), Some(2.0)], vec![])
            .expect("update");

        view.redraw().expect("redraw");

        let frames = &view.backend().frames;
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0], frames[1]);
        assert_eq!(view.backend().created, 1);
    }

    #[test]
    fn test_redraw_before_initialize_creates_chart() {
        let mut view = ChartView::new(RecordingBackend::default(), ChartTheme::default());
        view.redraw().expect("redraw");

        assert!(view.is_ready());
        assert_eq!(view.backend().created, 1);
        assert!(view.backend().frames.is_empty());
    }

    #[test]
    fn test_series_styling_follows_theme() {
        let theme = ChartTheme::from_properties(Some(" #123456 "), Some(""));
        let data = ChartData::empty(&theme);

        assert_eq!(data.historical.label, HISTORICAL_LABEL);
        assert_eq!(data.historical.color, "#123456");
        assert_eq!(data.historical.style, LineStyle::Solid);
        assert_eq!(data.forecast.label, FORECAST_LABEL);
        assert_eq!(data.forecast.color, ChartTheme::default().accent);
        assert_eq!(data.forecast.style, LineStyle::Dashed);
    }

    #[test]
    fn test_figure_traces() {
        let mut data = ChartData::empty(&ChartTheme::default());
        data.labels = labels(&["2026-02-01", "2026-02-02"]);
        data.historical.points = vec![Some(262.0), None];
        data.forecast.points = vec![Some(266.0), Some(268.5)];

        let traces = traces(&data);
        assert_eq!(traces.len(), 2);

        let historical = &traces[0];
        assert_eq!(historical["name"], HISTORICAL_LABEL);
        assert_eq!(historical["x"], json!(["2026-02-01", "2026-02-02"]));
        assert_eq!(historical["y"], json!([262.0, null]));
        assert_eq!(historical["line"]["color"], "#1f6feb");
        assert_eq!(historical["line"]["dash"], "solid");

        let forecast = &traces[1];
        assert_eq!(forecast["name"], FORECAST_LABEL);
        assert_eq!(forecast["line"]["dash"], "dash");
        assert_eq!(forecast["line"]["color"], "#f0883e");
    }

    #[test]
    fn test_figure_keeps_ragged_series() {
        let mut data = ChartData::empty(&ChartTheme::default());
        data.labels = labels(&["a"]);
        data.forecast.points = vec![Some(1.0), Some(2.0), Some(3.0)];

        let traces = traces(&data);
        assert_eq!(traces[0]["y"], json!([]));
        assert_eq!(traces[1]["x"], json!(["a", "#2", "#3"]));
        assert_eq!(traces[1]["y"], json!([1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_dispose_returns_to_uninitialized() {
        let mut view = ChartView::new(RecordingBackend::default(), ChartTheme::default());
        view.initialize().expect("init");
        view.dispose();
        view.dispose();

        assert!(!view.is_ready());
        assert_eq!(view.backend().destroyed, 1);

        view.initialize().expect("re-init");
        assert_eq!(view.backend().created, 2);
    }

    #[test]
    fn test_draw_failure_keeps_model() {
        let backend = RecordingBackend {
            fail_draw: true,
            ..RecordingBackend::default()
        };
        let mut view = ChartView::new(backend, ChartTheme::default());

        let err = view
            .update(labels(&["a"]), vec![Some(1.0)], vec![])
            .unwrap_err();
        assert!(matches!(err, DashboardError::Chart(_)));
        assert_eq!(view.data().map(|d| d.labels.len()), Some(1));
    }
}
