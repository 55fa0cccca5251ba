//! Prediction panel controller
//!
//! One call of `generate_prediction` = one `GET /predict/{material}`, mapped
//! onto the panel fields and the price chart. Overlapping calls are
//! sequenced: only the most recent request may touch the panel.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::chart::{ChartBackend, ChartView};
use crate::client::MarketApi;
use crate::error::Result;
use crate::format::{format_currency, format_percent};
use crate::sequence::RequestSequencer;
use crate::types::{Outcome, PredictionResult};

/// Display strings for the prediction panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionView {
    pub current_price: String,
    pub prediction_7d: String,
    pub prediction_30d: String,
    pub trend: String,
    /// `"₱min – ₱max"`
    pub confidence_range: String,
    /// Used both as the bar width and as its text, e.g. `"72%"`
    pub confidence_bar: String,
    pub explanation: Option<String>,
}

impl PredictionView {
    pub fn from_result(result: &PredictionResult) -> Self {
        Self {
            current_price: format_currency(result.current_price),
            prediction_7d: format_currency(result.pred_7d),
            prediction_30d: format_currency(result.pred_30d),
            trend: result.trend.label().to_string(),
            confidence_range: format!(
                "{} – {}",
                format_currency(result.confidence_min),
                format_currency(result.confidence_max)
            ),
            confidence_bar: format_percent(result.confidence_pct.unwrap_or(0.0)),
            explanation: result.explanation.clone().filter(|e| !e.is_empty()),
        }
    }
}

/// Where the prediction panel renders
pub trait PredictionSink {
    fn set_loading_visible(&mut self, visible: bool);
    fn set_error_visible(&mut self, visible: bool);
    fn set_results_visible(&mut self, visible: bool);
    /// Write every panel field. `explanation: None` leaves the old text.
    fn render(&mut self, view: &PredictionView);
}

/// Drives the prediction panel and its chart
pub struct PredictionController<A, S, B> {
    api: Rc<A>,
    sink: RefCell<S>,
    chart: RefCell<ChartView<B>>,
    sequencer: RequestSequencer,
}

impl<A, S, B> PredictionController<A, S, B>
where
    A: MarketApi,
    S: PredictionSink,
    B: ChartBackend,
{
    pub fn new(api: Rc<A>, sink: S, chart: ChartView<B>) -> Self {
        Self {
            api,
            sink: RefCell::new(sink),
            chart: RefCell::new(chart),
            sequencer: RequestSequencer::new(),
        }
    }

    pub fn sink(&self) -> Ref<'_, S> {
        self.sink.borrow()
    }

    pub fn chart(&self) -> Ref<'_, ChartView<B>> {
        self.chart.borrow()
    }

    /// Create the empty chart up front so the plot area is not blank on load
    pub fn initialize_chart(&self) -> Result<()> {
        self.chart.borrow_mut().initialize()
    }

    /// Draw the chart again once its container is shown
    pub fn redraw_chart(&self) -> Result<()> {
        self.chart.borrow_mut().redraw()
    }

    /// Fetch and render the prediction for `material`.
    ///
    /// On failure the error banner is shown and previously rendered values
    /// stay as they were. Returns `Outcome::Superseded` without touching the
    /// panel when a newer call started while this one was in flight.
    pub async fn generate_prediction(&self, material: &str) -> Result<Outcome> {
        let ticket = self.sequencer.begin();
        {
            let mut sink = self.sink.borrow_mut();
            sink.set_loading_visible(true);
            sink.set_error_visible(false);
        }

        let response = self.api.predict(material).await;

        if !self.sequencer.is_current(ticket) {
            log::debug!(
                "Dropping stale prediction for {material} (generation {})",
                ticket.generation()
            );
            return Ok(Outcome::Superseded);
        }

        let result = self.apply(material, response);
        self.sink.borrow_mut().set_loading_visible(false);
        result
    }

    fn apply(&self, material: &str, response: Result<PredictionResult>) -> Result<Outcome> {
        let prediction = match response {
            Ok(p) => p,
            Err(e) => {
                log::error!("❌ Prediction for {material} failed: {e}");
                self.sink.borrow_mut().set_error_visible(true);
                return Err(e);
            }
        };

        let view = PredictionView::from_result(&prediction);
        self.sink.borrow_mut().render(&view);

        let PredictionResult {
            historical_dates,
            historical_prices,
            forecast_prices,
            ..
        } = prediction;

        if let Err(e) =
            self.chart
                .borrow_mut()
                .update(historical_dates, historical_prices, forecast_prices)
        {
            log::error!("❌ Chart update for {material} failed: {e}");
            self.sink.borrow_mut().set_error_visible(true);
            return Err(e);
        }

        self.sink.borrow_mut().set_results_visible(true);
        log::info!("✅ Prediction for {material}: {}", view.trend);
        Ok(Outcome::Applied)
    }
}
