//! Dashboard JavaScript
//!
//! Only the module loader for the wasm-bindgen output; all dashboard logic
//! lives in the Rust client.

/// Loads `pkg/material_price_dashboard.js` and runs its start function
pub const LOADER: &str = r"
import init from './pkg/material_price_dashboard.js';
init().catch((e) => console.error('Dashboard failed to start:', e));
";

/// plotly.js bundle the price chart renders with; must load before the client starts
pub const PLOTLY_SRC: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
