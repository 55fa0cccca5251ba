//! DOM-backed display sinks

use web_sys::Document;

use super::dom::{set_style, set_text, set_visible};
use crate::dashboard::ids;
use crate::estimator::{EstimateSink, EstimateView};
use crate::footer::{FooterSink, FooterView};
use crate::insight::{InsightSink, InsightView};
use crate::materials::{MaterialRow, MaterialsSink};
use crate::prediction::{PredictionSink, PredictionView};

pub struct DomPredictionSink {
    doc: Document,
}

impl DomPredictionSink {
    pub fn new(doc: Document) -> Self {
        Self { doc }
    }
}

impl PredictionSink for DomPredictionSink {
    fn set_loading_visible(&mut self, visible: bool) {
        set_visible(&self.doc, ids::LOADING, visible, "block");
    }

    fn set_error_visible(&mut self, visible: bool) {
        set_visible(&self.doc, ids::PREDICTION_ERROR, visible, "block");
    }

    fn set_results_visible(&mut self, visible: bool) {
        set_visible(&self.doc, ids::PREDICTION_RESULTS, visible, "block");
    }

    fn render(&mut self, view: &PredictionView) {
        let doc = &self.doc;
        set_text(doc, ids::PREDICTION_CURRENT, &view.current_price);
        set_text(doc, ids::PREDICTION_7D, &view.prediction_7d);
        set_text(doc, ids::PREDICTION_30D, &view.prediction_30d);
        set_text(doc, ids::PREDICTION_TREND, &view.trend);
        set_text(doc, ids::PREDICTION_CONFIDENCE, &view.confidence_range);

        set_style(doc, ids::CONFIDENCE_BAR, "width", &view.confidence_bar);
        set_text(doc, ids::CONFIDENCE_BAR, &view.confidence_bar);

        if let Some(explanation) = &view.explanation {
            set_text(doc, ids::PREDICTION_EXPLANATION, explanation);
        }
    }
}

pub struct DomInsightSink {
    doc: Document,
}

impl DomInsightSink {
    pub fn new(doc: Document) -> Self {
        Self { doc }
    }
}

impl InsightSink for DomInsightSink {
    fn render(&mut self, view: &InsightView) {
        set_text(&self.doc, ids::MARKET_RISK, &view.risk);
        set_text(&self.doc, ids::MARKET_SENTIMENT, &view.sentiment);
        set_text(&self.doc, ids::MARKET_INSIGHT_TEXT, &view.text);
    }
}

pub struct DomEstimateSink {
    doc: Document,
}

impl DomEstimateSink {
    pub fn new(doc: Document) -> Self {
        Self { doc }
    }
}

impl EstimateSink for DomEstimateSink {
    fn render(&mut self, view: &EstimateView) {
        set_text(&self.doc, ids::EST_CURRENT_COST, &view.current_cost);
        set_text(&self.doc, ids::EST_PREDICTED_COST, &view.predicted_cost);
        set_text(&self.doc, ids::EST_RECOMMENDATION, &view.recommendation);
        set_text(&self.doc, ids::EST_CONFIDENCE, &view.confidence);
    }

    fn set_results_visible(&mut self, visible: bool) {
        set_visible(&self.doc, ids::EST_RESULTS, visible, "grid");
    }
}

pub struct DomMaterialsSink {
    doc: Document,
}

impl DomMaterialsSink {
    pub fn new(doc: Document) -> Self {
        Self { doc }
    }

    fn append_row(&self, body: &web_sys::Element, row: &MaterialRow) -> crate::error::Result<()> {
        let tr = self.doc.create_element("tr")?;
        for cell in [&row.name, &row.price, &row.updated] {
            let td = self.doc.create_element("td")?;
            td.set_text_content(Some(cell.as_str()));
            tr.append_child(&td)?;
        }
        body.append_child(&tr)?;
        Ok(())
    }
}

impl MaterialsSink for DomMaterialsSink {
    fn render_rows(&mut self, rows: &[MaterialRow]) {
        let Some(body) = self.doc.get_element_by_id(ids::MATERIALS_BODY) else {
            log::debug!("materials table not on page");
            return;
        };
        body.set_text_content(None);
        for row in rows {
            if let Err(e) = self.append_row(&body, row) {
                log::warn!("Could not add row for {}: {e}", row.name);
            }
        }
    }
}

pub struct DomFooterSink {
    doc: Document,
}

impl DomFooterSink {
    pub fn new(doc: Document) -> Self {
        Self { doc }
    }
}

impl FooterSink for DomFooterSink {
    fn render(&mut self, view: &FooterView) {
        set_text(&self.doc, ids::FOOTER_DIESEL, &view.diesel);
        set_text(&self.doc, ids::FOOTER_EXCHANGE, &view.exchange);
        set_text(&self.doc, ids::FOOTER_INFLATION, &view.inflation);
        set_text(&self.doc, ids::FOOTER_STATUS, &view.status);
    }
}
