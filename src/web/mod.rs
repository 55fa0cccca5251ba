//! Browser entry point
//!
//! Resolves configuration, mounts the page if needed, builds one controller
//! per dashboard slot and binds DOM events to them. Each event spawns its
//! controller call on the browser event loop; every controller reports
//! through `Result`, and this module decides what the user gets to see.

mod dom;
mod plot;
mod sinks;

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::chart::{ChartTheme, ChartView};
use crate::client::ApiClient;
use crate::config::Config;
use crate::dashboard::ids;
use crate::error::Result;
use crate::estimator::{EstimateForm, EstimatorController};
use crate::footer::FooterController;
use crate::insight::InsightController;
use crate::materials::MaterialsController;
use crate::navigation::{self, NavTarget};
use crate::prediction::PredictionController;
use crate::types::Outcome;

use plot::PlotlyChart;
use sinks::{DomEstimateSink, DomFooterSink, DomInsightSink, DomMaterialsSink, DomPredictionSink};

/// Main wasm entry point
#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = dom::window()?;
    let document = dom::document()?;
    let hostname = window.location().hostname().unwrap_or_default();

    let config = Config::from_source(&hostname, |key| dom::meta_content(&document, key))?;
    wasm_logger::init(wasm_logger::Config::new(config.log_level));

    log::info!("=== Material Price Dashboard v{} ===", env!("CARGO_PKG_VERSION"));
    log::info!("Environment: {}, API: {}", config.environment, config.api_base_url);

    dom::mount_template_if_missing(&document)?;

    let app = Rc::new(Dashboard::new(config, document)?);
    app.bind_events()?;
    app.load_initial();

    log::info!("✅ Dashboard started");
    Ok(())
}

type Prediction = PredictionController<ApiClient, DomPredictionSink, PlotlyChart>;

struct Dashboard {
    config: Config,
    doc: Document,
    prediction: Prediction,
    insight: InsightController<ApiClient, DomInsightSink>,
    estimator: EstimatorController<ApiClient, DomEstimateSink>,
    materials: MaterialsController<ApiClient, DomMaterialsSink>,
    footer: FooterController<ApiClient, DomFooterSink>,
    menu_open: Cell<bool>,
}

impl Dashboard {
    fn new(config: Config, doc: Document) -> Result<Self> {
        let api = Rc::new(ApiClient::new(&config.api_base_url)?);

        let _container: HtmlElement = dom::by_id(&doc, ids::PRICE_CHART)?;
        let theme = ChartTheme::from_properties(
            dom::css_variable(&doc, "--primary-color").as_deref(),
            dom::css_variable(&doc, "--accent-color").as_deref(),
        );
        let chart = ChartView::new(PlotlyChart::new(ids::PRICE_CHART), theme);

        Ok(Self {
            prediction: PredictionController::new(
                Rc::clone(&api),
                DomPredictionSink::new(doc.clone()),
                chart,
            ),
            insight: InsightController::new(Rc::clone(&api), DomInsightSink::new(doc.clone())),
            estimator: EstimatorController::new(Rc::clone(&api), DomEstimateSink::new(doc.clone())),
            materials: MaterialsController::new(Rc::clone(&api), DomMaterialsSink::new(doc.clone())),
            footer: FooterController::new(api, DomFooterSink::new(doc.clone())),
            config,
            doc,
            menu_open: Cell::new(false),
        })
    }

    fn selected_material(&self) -> String {
        let value = dom::field_value(&self.doc, ids::MATERIAL_SELECTOR);
        if value.trim().is_empty() {
            self.config.default_material.clone()
        } else {
            value
        }
    }

    fn estimate_form(&self) -> EstimateForm {
        EstimateForm {
            project_type: dom::field_value(&self.doc, ids::EST_PROJECT_TYPE),
            material: dom::field_value(&self.doc, ids::EST_MATERIAL),
            quantity: dom::field_value(&self.doc, ids::EST_QUANTITY),
            location: dom::field_value(&self.doc, ids::EST_LOCATION),
            timeline: dom::field_value(&self.doc, ids::EST_TIMELINE),
        }
    }

    fn bind_events(self: &Rc<Self>) -> Result<()> {
        let app = Rc::clone(self);
        dom::listen_id(&self.doc, ids::PREDICT_BUTTON, "click", move |_| {
            let app = Rc::clone(&app);
            spawn_local(async move { app.refresh_prediction().await });
        })?;

        let app = Rc::clone(self);
        dom::listen_id(&self.doc, ids::MATERIAL_SELECTOR, "change", move |_| {
            let app = Rc::clone(&app);
            spawn_local(async move { app.refresh_insight().await });
        })?;

        let app = Rc::clone(self);
        dom::listen_id(&self.doc, ids::ESTIMATE_BUTTON, "click", move |_| {
            let app = Rc::clone(&app);
            spawn_local(async move { app.run_estimate().await });
        })?;

        let app = Rc::clone(self);
        dom::listen_id(&self.doc, ids::MENU_TOGGLE, "click", move |_| app.toggle_mobile_menu())?;

        let app = Rc::clone(self);
        dom::listen_id(&self.doc, ids::OVERLAY, "click", move |_| {
            if app.menu_open.get() {
                app.toggle_mobile_menu();
            }
        })?;

        for link in dom::select_all(&self.doc, "[data-nav]") {
            let Some(page_id) = link.get_attribute("data-nav") else {
                continue;
            };
            let app = Rc::clone(self);
            dom::listen(&link, "click", move |event| {
                event.prevent_default();
                if app.menu_open.get() {
                    app.toggle_mobile_menu();
                }
                app.navigate_to(&page_id);
            })?;
        }

        Ok(())
    }

    /// Page-load fetches, fired independently of each other
    fn load_initial(self: &Rc<Self>) {
        if let Err(e) = self.prediction.initialize_chart() {
            log::error!("❌ Chart init failed: {e}");
        }

        let app = Rc::clone(self);
        spawn_local(async move { app.refresh_insight().await });

        let app = Rc::clone(self);
        spawn_local(async move {
            let today = chrono::Local::now().date_naive();
            if let Err(e) = app.materials.load_materials(today).await {
                log::error!("Materials fetch failed: {e}");
            }
        });

        let app = Rc::clone(self);
        spawn_local(async move {
            if let Err(e) = app.footer.load_footer().await {
                log::error!("Footer data fetch failed: {e}");
            }
        });

        let app = Rc::clone(self);
        spawn_local(async move { app.refresh_prediction().await });

        self.navigate_to("home");
    }

    async fn refresh_prediction(&self) {
        let material = self.selected_material();
        // Error banner and logging are handled by the controller
        if let Ok(Outcome::Superseded) = self.prediction.generate_prediction(&material).await {
            log::debug!("Prediction for {material} superseded");
        }
    }

    async fn refresh_insight(&self) {
        let material = self.selected_material();
        if let Err(e) = self.insight.fetch_market_insight(&material).await {
            log::error!("Market insight for {material} failed: {e}");
        }
    }

    async fn run_estimate(&self) {
        let form = self.estimate_form();
        if let Err(e) = self.estimator.run_estimate(&form).await {
            log::error!("Estimate error: {e}");
            self.show_toast("Estimate unavailable, please try again.");
        }
    }

    fn navigate_to(&self, page_id: &str) {
        let target = navigation::resolve(page_id, |id| self.doc.get_element_by_id(id).is_some());

        for link in dom::select_all(&self.doc, ".nav__links .link a") {
            let _ = link.class_list().remove_1("active");
        }

        match target {
            NavTarget::Page(page) => {
                for el in dom::select_all(&self.doc, ".page") {
                    let _ = el.class_list().remove_1("active");
                }
                if let Some(el) = self.doc.get_element_by_id(&page) {
                    let _ = el.class_list().add_1("active");
                }
                if let Some(link) = self.doc.get_element_by_id(&navigation::link_element_id(page_id)) {
                    let _ = link.class_list().add_1("active");
                }
                if self.page_hosts_chart(&page) {
                    if let Err(e) = self.prediction.redraw_chart() {
                        log::warn!("Chart redraw on {page_id} failed: {e}");
                    }
                }
                if let Ok(window) = dom::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
            }
            NavTarget::Section(section) => {
                let Some(el) = self.doc.get_element_by_id(&section) else {
                    log::debug!("No page or section for {page_id}");
                    return;
                };
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                el.scroll_into_view_with_scroll_into_view_options(&options);

                for link in dom::select_all(&self.doc, ".nav__links .link a") {
                    let matches = link
                        .get_attribute("data-nav")
                        .is_some_and(|nav| nav == page_id || navigation::section_for(&nav) == section);
                    if matches {
                        let _ = link.class_list().add_1("active");
                    }
                }
            }
        }
    }

    /// True when the price chart lives inside the page element `page`
    fn page_hosts_chart(&self, page: &str) -> bool {
        let (Some(page), Some(chart)) = (
            self.doc.get_element_by_id(page),
            self.doc.get_element_by_id(ids::PRICE_CHART),
        ) else {
            return false;
        };
        page.contains(Some(chart.as_ref()))
    }

    fn toggle_mobile_menu(&self) {
        let open = !self.menu_open.get();
        self.menu_open.set(open);

        if let Some(menu) = self.doc.get_element_by_id(ids::MOBILE_MENU) {
            let _ = if open {
                menu.class_list().add_1("open")
            } else {
                menu.class_list().remove_1("open")
            };
        }
        dom::set_visible(&self.doc, ids::OVERLAY, open, "block");
    }

    fn show_toast(&self, message: &str) {
        dom::set_text(&self.doc, ids::TOAST, message);
        dom::set_visible(&self.doc, ids::TOAST, true, "block");

        let doc = self.doc.clone();
        Timeout::new(self.config.toast_duration_ms, move || {
            dom::set_visible(&doc, ids::TOAST, false, "block");
        })
        .forget();
    }
}
