//! Dashboard module - page markup for the browser client
//!
//! Separated into HTML, CSS, and JS submodules for maintainability.
//!
//! # Architecture
//! - `html.rs`: Page structure and layout
//! - `css.rs`: Styling with CSS custom properties
//! - `js.rs`: wasm module loader and the plotly.js bundle location
//!
//! The client mounts `TEMPLATE` and `STYLES` itself when the host page does
//! not already carry the markup, so a bare `index.html` with the loader is
//! enough to run the dashboard.

mod css;
mod html;
mod js;

pub use css::STYLES;
pub use html::TEMPLATE;
pub use js::{LOADER, PLOTLY_SRC};

/// Element ids the client reads and writes
pub mod ids {
    pub const MATERIAL_SELECTOR: &str = "materialSelector";
    pub const PREDICT_BUTTON: &str = "predictBtn";
    pub const LOADING: &str = "loadingIndicator";
    pub const PREDICTION_ERROR: &str = "predictionError";
    pub const PREDICTION_RESULTS: &str = "predictionResults";
    pub const PREDICTION_CURRENT: &str = "predictionCurrent";
    pub const PREDICTION_7D: &str = "prediction7day";
    pub const PREDICTION_30D: &str = "prediction30day";
    pub const PREDICTION_TREND: &str = "predictionTrend";
    pub const PREDICTION_CONFIDENCE: &str = "predictionConfidence";
    pub const CONFIDENCE_BAR: &str = "confidenceBar";
    pub const PREDICTION_EXPLANATION: &str = "predictionExplanation";
    pub const PRICE_CHART: &str = "priceChart";

    pub const MARKET_RISK: &str = "marketRiskLevel";
    pub const MARKET_SENTIMENT: &str = "marketSentiment";
    pub const MARKET_INSIGHT_TEXT: &str = "marketInsightText";

    pub const EST_PROJECT_TYPE: &str = "proj-type";
    pub const EST_MATERIAL: &str = "est-material";
    pub const EST_QUANTITY: &str = "est-qty";
    pub const EST_LOCATION: &str = "est-location";
    pub const EST_TIMELINE: &str = "est-timeline";
    pub const ESTIMATE_BUTTON: &str = "estimateBtn";
    pub const EST_RESULTS: &str = "estResults";
    pub const EST_CURRENT_COST: &str = "estimateCurrentCost";
    pub const EST_PREDICTED_COST: &str = "estimatePredictedCost";
    pub const EST_RECOMMENDATION: &str = "estimateRecommendation";
    pub const EST_CONFIDENCE: &str = "estimateConfidence";

    pub const MATERIALS_BODY: &str = "materialsBody";

    pub const FOOTER_DIESEL: &str = "footerDiesel";
    pub const FOOTER_EXCHANGE: &str = "footerExchange";
    pub const FOOTER_INFLATION: &str = "footerInflation";
    pub const FOOTER_STATUS: &str = "footerStatus";

    pub const TOAST: &str = "toast";
    pub const MOBILE_MENU: &str = "mobileMenu";
    pub const OVERLAY: &str = "overlay";
    pub const MENU_TOGGLE: &str = "menuToggle";
}

/// Generate a standalone `index.html` for the dashboard.
///
/// `overrides` become `<meta name=KEY content=VALUE>` tags, which the client
/// reads as configuration (see `Config::from_source`).
pub fn dashboard_html(overrides: &[(&str, &str)]) -> String {
    let meta: String = overrides
        .iter()
        .map(|(key, value)| {
            format!(
                "    <meta name=\"{}\" content=\"{}\">\n",
                escape_attr(key),
                escape_attr(value)
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
{meta}    <title>Material Price Dashboard</title>
    <script src="{plotly}" charset="utf-8"></script>
    <style>
{css}
    </style>
</head>
<body>
{html}
    <script type="module">
{js}
    </script>
</body>
</html>"#,
        css = STYLES,
        html = TEMPLATE,
        js = LOADER,
        plotly = PLOTLY_SRC
    )
}

fn escape_attr(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
