//! Material Price Dashboard - browser client for the construction material
//! price forecasting service.
//!
//! Compiles to WebAssembly and drives a single-page dashboard: AI price
//! forecasts with a historical/forecast chart, market insight, a project cost
//! estimator, today's material prices and a footer with market indicators.
//!
//! # Architecture
//! - Controllers own the fetch → render flow for one dashboard slot each
//! - `MarketApi` abstracts the HTTP service; `ApiClient` is the reqwest implementation
//! - Display sinks and `ChartBackend` abstract the page, so every flow runs natively in tests
//! - The `web` module (wasm32 only) binds all of it to the DOM and renders the chart with plotly.js
//!
//! Overlapping requests for the same slot are sequenced: only the most recent
//! response is rendered.

#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod chart;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod estimator;
pub mod footer;
pub mod format;
pub mod insight;
pub mod materials;
pub mod navigation;
pub mod prediction;
pub mod sequence;
pub mod types;

#[cfg(test)]
mod testing;

#[cfg(target_arch = "wasm32")]
mod web;

pub use chart::{ChartBackend, ChartData, ChartTheme, ChartView};
pub use client::{ApiClient, MarketApi};
pub use config::Config;
pub use error::{DashboardError, Result};
pub use estimator::{EstimateForm, EstimatorController};
pub use footer::FooterController;
pub use insight::InsightController;
pub use materials::MaterialsController;
pub use prediction::PredictionController;
pub use sequence::RequestSequencer;
pub use types::*;
