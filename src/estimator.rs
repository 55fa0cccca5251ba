//! Project cost estimator

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::client::MarketApi;
use crate::error::Result;
use crate::format::{format_currency, format_percent, parse_float_or_zero};
use crate::sequence::RequestSequencer;
use crate::types::{EstimateRequest, EstimateResult, Outcome};

/// Raw values of the estimator form fields
#[derive(Debug, Clone, Default)]
pub struct EstimateForm {
    pub project_type: String,
    pub material: String,
    pub quantity: String,
    pub location: String,
    pub timeline: String,
}

impl EstimateForm {
    /// Numeric fields that are empty or not numbers become 0
    pub fn to_request(&self) -> EstimateRequest {
        EstimateRequest {
            project_type: self.project_type.clone(),
            material: self.material.clone(),
            quantity: parse_float_or_zero(&self.quantity),
            location: self.location.clone(),
            timeline: parse_float_or_zero(&self.timeline),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimateView {
    pub current_cost: String,
    pub predicted_cost: String,
    pub recommendation: String,
    /// `"Confidence: 75%"`
    pub confidence: String,
}

impl EstimateView {
    pub fn from_result(result: &EstimateResult) -> Self {
        Self {
            current_cost: format_currency(result.current_cost),
            predicted_cost: format_currency(result.predicted_cost),
            recommendation: result.recommendation.clone().unwrap_or_default(),
            confidence: format!(
                "Confidence: {}",
                format_percent(result.confidence_pct.unwrap_or(0.0))
            ),
        }
    }
}

pub trait EstimateSink {
    fn render(&mut self, view: &EstimateView);
    fn set_results_visible(&mut self, visible: bool);
}

pub struct EstimatorController<A, S> {
    api: Rc<A>,
    sink: RefCell<S>,
    sequencer: RequestSequencer,
}

impl<A: MarketApi, S: EstimateSink> EstimatorController<A, S> {
    pub fn new(api: Rc<A>, sink: S) -> Self {
        Self {
            api,
            sink: RefCell::new(sink),
            sequencer: RequestSequencer::new(),
        }
    }

    pub fn sink(&self) -> Ref<'_, S> {
        self.sink.borrow()
    }

    /// Submit the form and render the estimate
    pub async fn run_estimate(&self, form: &EstimateForm) -> Result<Outcome> {
        let request = form.to_request();
        let ticket = self.sequencer.begin();
        let result = self.api.estimate(&request).await;

        if !self.sequencer.is_current(ticket) {
            return Ok(Outcome::Superseded);
        }

        let result = result?;
        let view = EstimateView::from_result(&result);
        {
            let mut sink = self.sink.borrow_mut();
            sink.render(&view);
            sink.set_results_visible(true);
        }
        log::info!(
            "💰 Estimate for {} x {}: {}",
            request.quantity,
            request.material,
            view.recommendation
        );
        Ok(Outcome::Applied)
    }
}
