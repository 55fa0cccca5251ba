//! Common types for the dashboard client
//!
//! Wire types for every pricing API endpoint plus small shared enums.
//! Numeric fields are optional: the API sends `null` for figures it could
//! not compute, and the display layer renders those as zero.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Qualitative price direction of a prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "Value")]
pub enum Trend {
    Up,
    Down,
    /// Anything that is not explicitly `up` or `down`
    #[default]
    Stable,
}

impl Trend {
    /// Display label shown in the trend field
    pub fn label(self) -> &'static str {
        match self {
            Trend::Up => "⬆ Increasing",
            Trend::Down => "⬇ Decreasing",
            Trend::Stable => "➡ Stable",
        }
    }
}

/// Accepts any JSON value; only the strings `"up"` and `"down"` carry a
/// direction.
impl From<Value> for Trend {
    fn from(raw: Value) -> Self {
        match raw.as_str() {
            Some("up") => Trend::Up,
            Some("down") => Trend::Down,
            _ => Trend::Stable,
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Response of `GET /predict/{material}`
///
/// The three series are parallel by index. Their lengths are not checked;
/// the chart receives them as-is.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictionResult {
    pub current_price: Option<f64>,
    pub pred_7d: Option<f64>,
    pub pred_30d: Option<f64>,
    #[serde(default)]
    pub trend: Trend,
    pub confidence_min: Option<f64>,
    pub confidence_max: Option<f64>,
    pub confidence_pct: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub historical_dates: Vec<String>,
    /// `null` entries are gaps in the plotted line
    #[serde(default, deserialize_with = "null_as_default")]
    pub historical_prices: Vec<Option<f64>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub forecast_prices: Vec<Option<f64>>,
    pub explanation: Option<String>,
}

/// Response of `GET /market-insight/{material}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketInsight {
    #[serde(default, deserialize_with = "null_as_default")]
    pub risk: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sentiment: String,
    pub insight: Option<String>,
    pub all_insights: Option<Vec<String>>,
}

/// Body of `POST /estimate`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateRequest {
    pub project_type: String,
    pub material: String,
    pub quantity: f64,
    pub location: String,
    /// Days until purchase
    pub timeline: f64,
}

/// Response of `POST /estimate`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EstimateResult {
    pub current_cost: Option<f64>,
    pub predicted_cost: Option<f64>,
    pub recommendation: Option<String>,
    pub confidence_pct: Option<f64>,
}

/// One row of `GET /materials-today` (or `/materials`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MaterialPrice {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub price: Option<f64>,
    pub unit: Option<String>,
    /// `YYYY-MM-DD`; absent means "today"
    pub updated: Option<String>,
}

/// Response of `GET /footer-data`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FooterData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub diesel_currency: String,
    pub diesel_price: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub exchange_currency: String,
    pub exchange_rate: Option<f64>,
    pub regional_inflation: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub system_status: String,
    pub last_updated: Option<String>,
}

/// What a controller did with a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Response was rendered
    Applied,
    /// A newer request for the same slot started first; response dropped
    Superseded,
}

/// Treat an explicit JSON `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trend_mapping_is_total() {
        assert_eq!(Trend::from(json!("up")), Trend::Up);
        assert_eq!(Trend::from(json!("down")), Trend::Down);
        assert_eq!(Trend::from(json!("stable")), Trend::Stable);
        assert_eq!(Trend::from(json!("UP")), Trend::Stable);
        assert_eq!(Trend::from(Value::Null), Trend::Stable);

        assert_eq!(Trend::Up.label(), "⬆ Increasing");
        assert_eq!(Trend::Down.label(), "⬇ Decreasing");
        assert_eq!(Trend::Stable.to_string(), "➡ Stable");
    }

    #[test]
    fn test_non_string_trend_is_stable() {
        for raw in [r#"{"trend":0}"#, r#"{"trend":true}"#, r#"{"trend":{"dir":"up"}}"#, r#"{"trend":["up"]}"#] {
            let result: PredictionResult =
                serde_json::from_str(raw).expect("odd trend must not fail the prediction");
            assert_eq!(result.trend, Trend::Stable, "{raw}");
        }
    }

    #[test]
    fn test_prediction_deserialization() {
        let result: PredictionResult = serde_json::from_value(json!({
            "current_price": 265.5,
            "pred_7d": 268.0,
            "pred_30d": 275.25,
            "trend": "up",
            "confidence_min": 255.0,
            "confidence_max": 290.0,
            "confidence_pct": 72,
            "historical_dates": ["2026-01-01", "2026-01-02"],
            "historical_prices": [260.0, null],
            "forecast_prices": [270.0, 271.0, 272.0],
            "explanation": "Seasonal demand"
        }))
        .expect("Prediction should deserialize");

        assert_eq!(result.trend, Trend::Up);
        assert_eq!(result.confidence_pct, Some(72.0));
        assert_eq!(result.historical_prices, vec![Some(260.0), None]);
        // Mismatched lengths are accepted as-is
        assert_eq!(result.forecast_prices.len(), 3);
    }

    #[test]
    fn test_prediction_tolerates_nulls() {
        let result: PredictionResult = serde_json::from_value(json!({
            "current_price": 100.0,
            "pred_7d": null,
            "trend": null,
            "historical_dates": null,
            "historical_prices": null
        }))
        .expect("Sparse prediction should deserialize");

        assert_eq!(result.pred_7d, None);
        assert_eq!(result.trend, Trend::Stable);
        assert!(result.historical_dates.is_empty());
        assert!(result.forecast_prices.is_empty());
        assert!(result.explanation.is_none());
    }

    #[test]
    fn test_estimate_request_serialization() {
        let req = EstimateRequest {
            project_type: "residential".to_string(),
            material: "cement".to_string(),
            quantity: 120.0,
            location: "Davao City".to_string(),
            timeline: 30.0,
        };

        let json = serde_json::to_value(&req).expect("Request serialization should succeed");
        assert_eq!(json["material"], "cement");
        assert_eq!(json["quantity"], 120.0);
        assert_eq!(json["timeline"], 30.0);
    }

    #[test]
    fn test_materials_list() {
        let rows: Vec<MaterialPrice> = serde_json::from_value(json!([
            {"name": "Steel", "price": 52.3, "unit": "kg", "updated": "2026-02-25"},
            {"name": "Sand", "price": null}
        ]))
        .expect("Materials should deserialize");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].updated.as_deref(), Some("2026-02-25"));
        assert!(rows[1].price.is_none());
        assert!(rows[1].updated.is_none());
    }
}
