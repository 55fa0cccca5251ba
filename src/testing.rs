//! In-memory `MarketApi` for controller tests

use std::cell::RefCell;
use std::collections::VecDeque;

use futures::channel::oneshot;

use crate::client::MarketApi;
use crate::error::{DashboardError, Result};
use crate::types::{
    EstimateRequest, EstimateResult, FooterData, MarketInsight, MaterialPrice, PredictionResult,
};

/// Scripted answer for one call
pub(crate) enum Reply<T> {
    Ready(Result<T>),
    /// Resolves when the test sends on the paired sender
    Pending(oneshot::Receiver<Result<T>>),
}

impl<T> Reply<T> {
    async fn resolve(self) -> Result<T> {
        match self {
            Reply::Ready(result) => result,
            Reply::Pending(rx) => rx
                .await
                .unwrap_or_else(|_| Err(DashboardError::Network("reply dropped".into()))),
        }
    }
}

async fn next<T>(queue: &RefCell<VecDeque<Reply<T>>>) -> Result<T> {
    let reply = queue.borrow_mut().pop_front();
    match reply {
        Some(reply) => reply.resolve().await,
        None => Err(DashboardError::Network("no reply queued".into())),
    }
}

/// Answers calls from per-endpoint queues and records what was asked
#[derive(Default)]
pub(crate) struct FakeApi {
    predictions: RefCell<VecDeque<Reply<PredictionResult>>>,
    insights: RefCell<VecDeque<Reply<MarketInsight>>>,
    estimates: RefCell<VecDeque<Reply<EstimateResult>>>,
    materials_today: RefCell<VecDeque<Reply<Vec<MaterialPrice>>>>,
    materials: RefCell<VecDeque<Reply<Vec<MaterialPrice>>>>,
    footer: RefCell<VecDeque<Reply<FooterData>>>,
    calls: RefCell<Vec<String>>,
    estimate_requests: RefCell<Vec<EstimateRequest>>,
}

impl FakeApi {
    pub(crate) fn push_prediction(&self, reply: Reply<PredictionResult>) {
        self.predictions.borrow_mut().push_back(reply);
    }

    pub(crate) fn push_insight(&self, reply: Reply<MarketInsight>) {
        self.insights.borrow_mut().push_back(reply);
    }

    pub(crate) fn push_estimate(&self, reply: Reply<EstimateResult>) {
        self.estimates.borrow_mut().push_back(reply);
    }

    pub(crate) fn push_materials_today(&self, reply: Reply<Vec<MaterialPrice>>) {
        self.materials_today.borrow_mut().push_back(reply);
    }

    pub(crate) fn push_materials(&self, reply: Reply<Vec<MaterialPrice>>) {
        self.materials.borrow_mut().push_back(reply);
    }

    pub(crate) fn push_footer(&self, reply: Reply<FooterData>) {
        self.footer.borrow_mut().push_back(reply);
    }

    /// Endpoints hit so far, e.g. `["predict/cement", "materials-today"]`
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub(crate) fn requested_materials(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| c.strip_prefix("predict/"))
            .map(str::to_string)
            .collect()
    }

    pub(crate) fn estimate_requests(&self) -> Vec<EstimateRequest> {
        self.estimate_requests.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl MarketApi for FakeApi {
    async fn predict(&self, material: &str) -> Result<PredictionResult> {
        self.record(format!("predict/{material}"));
        next(&self.predictions).await
    }

    async fn market_insight(&self, material: &str) -> Result<MarketInsight> {
        self.record(format!("market-insight/{material}"));
        next(&self.insights).await
    }

    async fn estimate(&self, request: &EstimateRequest) -> Result<EstimateResult> {
        self.record("estimate".to_string());
        self.estimate_requests.borrow_mut().push(request.clone());
        next(&self.estimates).await
    }

    async fn materials_today(&self) -> Result<Vec<MaterialPrice>> {
        self.record("materials-today".to_string());
        next(&self.materials_today).await
    }

    async fn materials(&self) -> Result<Vec<MaterialPrice>> {
        self.record("materials".to_string());
        next(&self.materials).await
    }

    async fn footer_data(&self) -> Result<FooterData> {
        self.record("footer-data".to_string());
        next(&self.footer).await
    }
}
