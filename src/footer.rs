//! Footer metrics strip (diesel, exchange rate, inflation, system status)

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::client::MarketApi;
use crate::error::Result;
use crate::format::{format_number, format_percent};
use crate::types::{FooterData, Outcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterView {
    /// `"₱60.25"`
    pub diesel: String,
    /// `"₱/USD 56.12"`
    pub exchange: String,
    /// `"3.5%"`
    pub inflation: String,
    pub status: String,
}

impl FooterView {
    pub fn from_data(data: &FooterData) -> Self {
        Self {
            diesel: format!("{}{}", data.diesel_currency, format_number(data.diesel_price)),
            exchange: format!("{} {}", data.exchange_currency, format_number(data.exchange_rate)),
            inflation: format_percent(data.regional_inflation.unwrap_or(0.0)),
            status: data.system_status.clone(),
        }
    }
}

pub trait FooterSink {
    fn render(&mut self, view: &FooterView);
}

pub struct FooterController<A, S> {
    api: Rc<A>,
    sink: RefCell<S>,
}

impl<A: MarketApi, S: FooterSink> FooterController<A, S> {
    pub fn new(api: Rc<A>, sink: S) -> Self {
        Self {
            api,
            sink: RefCell::new(sink),
        }
    }

    pub fn sink(&self) -> Ref<'_, S> {
        self.sink.borrow()
    }

    /// Failures keep the placeholder values baked into the page
    pub async fn load_footer(&self) -> Result<Outcome> {
        let data = self.api.footer_data().await?;
        self.sink.borrow_mut().render(&FooterView::from_data(&data));
        Ok(Outcome::Applied)
    }
}
