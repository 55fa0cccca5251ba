//! Market insight card
//!
//! Refreshed on page load and whenever the material selector changes.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::client::MarketApi;
use crate::error::Result;
use crate::sequence::RequestSequencer;
use crate::types::{MarketInsight, Outcome};

/// Bullet points shown from `all_insights`
const MAX_BULLETS: usize = 2;

const NO_DATA: &str = "No data available";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightView {
    pub risk: String,
    pub sentiment: String,
    pub text: String,
}

impl InsightView {
    /// Map an API response to display text.
    ///
    /// Up to two `all_insights` entries become bullets. An empty
    /// `all_insights` list counts as absent and falls back to `insight`,
    /// rather than rendering a lone `"• "`.
    pub fn from_insight(insight: &MarketInsight) -> Self {
        let text = match insight.all_insights.as_deref() {
            Some(items) if !items.is_empty() => {
                let bullets: Vec<&str> = items.iter().take(MAX_BULLETS).map(String::as_str).collect();
                format!("• {}", bullets.join("\n• "))
            }
            _ => insight
                .insight
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| NO_DATA.to_string()),
        };

        Self {
            risk: insight.risk.clone(),
            sentiment: insight.sentiment.clone(),
            text,
        }
    }
}

pub trait InsightSink {
    fn render(&mut self, view: &InsightView);
}

pub struct InsightController<A, S> {
    api: Rc<A>,
    sink: RefCell<S>,
    sequencer: RequestSequencer,
}

impl<A: MarketApi, S: InsightSink> InsightController<A, S> {
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

    /// Fetch and render the insight for `material`; failures leave the card as is
    pub async fn fetch_market_insight(&self, material: &str) -> Result<Outcome> {
        let ticket = self.sequencer.begin();
        let insight = self.api.market_insight(material).await;

        if !self.sequencer.is_current(ticket) {
            return Ok(Outcome::Superseded);
        }

        let insight = insight?;
        self.sink
            .borrow_mut()
            .render(&InsightView::from_insight(&insight));
        log::debug!("Market insight for {material}: risk={}", insight.risk);
        Ok(Outcome::Applied)
    }
}
