//! Pricing API client
//!
//! Implements the dashboard's backend calls:
//! - Price predictions and market insight per material
//! - Project cost estimates
//! - Material price list and footer metrics
//!
//! No auth headers, no retries, no explicit timeout.

use reqwest::Url;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{DashboardError, Result};
use crate::types::{
    EstimateRequest, EstimateResult, FooterData, MarketInsight, MaterialPrice, PredictionResult,
};

/// Longest error body kept in `DashboardError::Status`
const MAX_ERROR_BODY: usize = 200;

/// Backend operations the dashboard depends on
#[allow(async_fn_in_trait)] // Single-threaded browser futures, Send is never needed
pub trait MarketApi {
    /// `GET /predict/{material}`
    async fn predict(&self, material: &str) -> Result<PredictionResult>;

    /// `GET /market-insight/{material}`
    async fn market_insight(&self, material: &str) -> Result<MarketInsight>;

    /// `POST /estimate`
    async fn estimate(&self, request: &EstimateRequest) -> Result<EstimateResult>;

    /// `GET /materials-today`
    async fn materials_today(&self) -> Result<Vec<MaterialPrice>>;

    /// `GET /materials`
    async fn materials(&self) -> Result<Vec<MaterialPrice>>;

    /// `GET /footer-data`
    async fn footer_data(&self) -> Result<FooterData>;
}

/// reqwest-backed client (browser fetch on wasm32)
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the API rooted at `base_url`
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| DashboardError::Config(format!("invalid API base URL {base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(DashboardError::Config(format!(
                "API base URL cannot carry a path: {base_url}"
            )));
        }
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    /// Build an endpoint URL; segments are percent-encoded
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| DashboardError::Config(format!("invalid API base URL {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Perform GET request
    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let url = self.endpoint(segments)?;
        log::debug!("GET {url}");

        let response = self.http.get(url.clone()).send().await.inspect_err(|e| {
            log::error!("GET {url} failed: {e}");
        })?;

        Self::handle_response(&url, response).await
    }

    /// Perform POST request with a JSON body
    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<T> {
        let url = self.endpoint(segments)?;
        log::debug!("POST {url}");

        let response = self
            .http
            .post(url.clone())
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .inspect_err(|e| log::error!("POST {url} failed: {e}"))?;

        Self::handle_response(&url, response).await
    }

    /// Read the body and decode it, checking the status first
    async fn handle_response<T: DeserializeOwned>(
        url: &Url,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status().as_u16();
        let body = response.text().await?;

        decode_body(status, &body).inspect_err(|e| log::error!("{url}: {e}"))
    }
}

/// Turn a status code and body into a typed value or a dashboard error
pub fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T> {
    if !(200..300).contains(&status) {
        let mut body = body.trim().to_string();
        if body.len() > MAX_ERROR_BODY {
            let cut = (0..=MAX_ERROR_BODY)
                .rev()
                .find(|&i| body.is_char_boundary(i))
                .unwrap_or(0);
            body.truncate(cut);
        }
        return Err(DashboardError::Status { status, body });
    }

    serde_json::from_str(body).map_err(DashboardError::from)
}

impl MarketApi for ApiClient {
    async fn predict(&self, material: &str) -> Result<PredictionResult> {
        self.get(&["predict", material]).await
    }

    async fn market_insight(&self, material: &str) -> Result<MarketInsight> {
        self.get(&["market-insight", material]).await
    }

    async fn estimate(&self, request: &EstimateRequest) -> Result<EstimateResult> {
        self.post(&["estimate"], request).await
    }

    async fn materials_today(&self) -> Result<Vec<MaterialPrice>> {
        self.get(&["materials-today"]).await
    }

    async fn materials(&self) -> Result<Vec<MaterialPrice>> {
        self.get(&["materials"]).await
    }

    async fn footer_data(&self) -> Result<FooterData> {
        self.get(&["footer-data"]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_building() {
        let client = ApiClient::new("http://127.0.0.1:5000").expect("valid base URL");
        let url = client.endpoint(&["predict", "cement"]).expect("endpoint");
        assert_eq!(url.as_str(), "http://127.0.0.1:5000/predict/cement");

        let url = client.endpoint(&["materials-today"]).expect("endpoint");
        assert_eq!(url.as_str(), "http://127.0.0.1:5000/materials-today");
    }

    #[test]
    fn test_endpoint_keeps_base_path_and_encodes() {
        let client = ApiClient::new("https://api.example.com/v1/").expect("valid base URL");
        let url = client.endpoint(&["market-insight", "ready mix/concrete"]).expect("endpoint");
        assert_eq!(
            url.as_str(),
            "https://api.example.com/v1/market-insight/ready%20mix%2Fconcrete"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            ApiClient::new("not a url"),
            Err(DashboardError::Config(_))
        ));
        assert!(matches!(
            ApiClient::new("mailto:ops@example.com"),
            Err(DashboardError::Config(_))
        ));
    }

    #[test]
    fn test_decode_success() {
        let insight: MarketInsight = decode_body(
            200,
            r#"{"risk":"Low","sentiment":"Bullish","insight":"Steady","all_insights":["a","b","c"]}"#,
        )
        .expect("valid body should decode");
        assert_eq!(insight.risk, "Low");
        assert_eq!(insight.all_insights.map(|v| v.len()), Some(3));
    }

    #[test]
    fn test_decode_status_error() {
        let err = decode_body::<PredictionResult>(404, r#"{"error": "Material not found"}"#)
            .unwrap_err();
        match err {
            DashboardError::Status { status, body } => {
                assert_eq!(status, 404);
                assert!(body.contains("Material not found"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_truncates_long_error_body() {
        let body = "é".repeat(300);
        let err = decode_body::<FooterData>(500, &body).unwrap_err();
        let DashboardError::Status { body, .. } = err else {
            panic!("expected status error");
        };
        assert!(body.len() <= MAX_ERROR_BODY);
    }

    #[test]
    fn test_decode_parse_error() {
        let err = decode_body::<PredictionResult>(200, "<html>oops</html>").unwrap_err();
        assert!(matches!(err, DashboardError::Json(_)));
    }
}
