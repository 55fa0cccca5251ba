//! plotly.js chart backend

use wasm_bindgen::prelude::*;

use crate::chart::{ChartBackend, ChartData, figure};
use crate::error::{DashboardError, Result};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot, catch)]
    fn new_plot(div_id: &str, figure: JsValue) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = Plotly, catch)]
    fn react(div_id: &str, figure: JsValue) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = Plotly, catch)]
    fn purge(div_id: &str) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["Plotly", "Plots"], catch)]
    fn resize(div_id: &str) -> std::result::Result<JsValue, JsValue>;
}

/// Draws into the `<div>` with id `div_id`
pub struct PlotlyChart {
    div_id: String,
}

impl PlotlyChart {
    pub fn new(div_id: impl Into<String>) -> Self {
        Self {
            div_id: div_id.into(),
        }
    }
}

/// Serialize the figure and parse it into a JS object
fn figure_js(data: &ChartData) -> Result<JsValue> {
    let json = figure(data).to_json();
    js_sys::JSON::parse(&json).map_err(|e| DashboardError::Chart(format!("figure JSON: {e:?}")))
}

fn plotly_err(call: &str) -> impl Fn(JsValue) -> DashboardError + '_ {
    move |e| DashboardError::Chart(format!("Plotly.{call}: {e:?}"))
}

impl ChartBackend for PlotlyChart {
    fn create(&mut self, data: &ChartData) -> Result<()> {
        new_plot(&self.div_id, figure_js(data)?).map_err(plotly_err("newPlot"))?;
        Ok(())
    }

    fn draw(&mut self, data: &ChartData) -> Result<()> {
        react(&self.div_id, figure_js(data)?).map_err(plotly_err("react"))?;
        // Picks up the container size if it changed while hidden
        resize(&self.div_id).map_err(plotly_err("Plots.resize"))?;
        Ok(())
    }

    fn destroy(&mut self) {
        if let Err(e) = purge(&self.div_id) {
            log::warn!("Plotly.purge on #{}: {e:?}", self.div_id);
        }
    }
}
