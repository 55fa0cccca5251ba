//! Material price table
//!
//! Reads today's prices, falling back to the plain list when the
//! `/materials-today` endpoint fails.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use chrono::NaiveDate;

use crate::client::MarketApi;
use crate::error::Result;
use crate::format::format_currency;
use crate::types::{MaterialPrice, Outcome};

/// One rendered table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialRow {
    pub name: String,
    pub price: String,
    pub updated: String,
}

/// Map API rows to display rows; a missing `updated` date becomes `today`
pub fn material_rows(list: &[MaterialPrice], today: NaiveDate) -> Vec<MaterialRow> {
    let today = today.format("%Y-%m-%d").to_string();
    list.iter()
        .map(|m| MaterialRow {
            name: m.name.clone(),
            price: format_currency(m.price),
            updated: m
                .updated
                .clone()
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| today.clone()),
        })
        .collect()
}

pub trait MaterialsSink {
    /// Replace the whole table body
    fn render_rows(&mut self, rows: &[MaterialRow]);
}

pub struct MaterialsController<A, S> {
    api: Rc<A>,
    sink: RefCell<S>,
}

impl<A: MarketApi, S: MaterialsSink> MaterialsController<A, S> {
    pub fn new(api: Rc<A>, sink: S) -> Self {
        Self {
            api,
            sink: RefCell::new(sink),
        }
    }

    pub fn sink(&self) -> Ref<'_, S> {
        self.sink.borrow()
    }

    pub async fn load_materials(&self, today: NaiveDate) -> Result<Outcome> {
        let list = match self.api.materials_today().await {
            Ok(list) => list,
            Err(e) => {
                log::warn!("⚠️ materials-today unavailable ({e}), using /materials");
                self.api.materials().await?
            }
        };

        let rows = material_rows(&list, today);
        self.sink.borrow_mut().render_rows(&rows);
        log::debug!("Rendered {} material rows", rows.len());
        Ok(Outcome::Applied)
    }
}
