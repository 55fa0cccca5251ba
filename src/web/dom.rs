//! Small DOM helpers over web-sys

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement, Window};

use crate::dashboard::{STYLES, TEMPLATE, ids};
use crate::error::{DashboardError, Result};

pub(crate) fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| DashboardError::Dom("no global `window`".into()))
}

pub(crate) fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| DashboardError::Dom("window has no document".into()))
}

/// Typed element lookup
pub(crate) fn by_id<T: JsCast>(doc: &Document, id: &str) -> Result<T> {
    doc.get_element_by_id(id)
        .ok_or_else(|| DashboardError::Dom(format!("#{id} not found")))?
        .dyn_into::<T>()
        .map_err(|_| DashboardError::Dom(format!("#{id} has an unexpected element type")))
}

/// Write text into an element; missing elements are skipped
pub(crate) fn set_text(doc: &Document, id: &str, text: &str) {
    match doc.get_element_by_id(id) {
        Some(el) => el.set_text_content(Some(text)),
        None => log::debug!("set_text: #{id} not on page"),
    }
}

pub(crate) fn set_style(doc: &Document, id: &str, property: &str, value: &str) {
    let Ok(el) = by_id::<HtmlElement>(doc, id) else {
        log::debug!("set_style: #{id} not on page");
        return;
    };
    if let Err(e) = el.style().set_property(property, value) {
        log::warn!("set_style #{id} {property}: {e:?}");
    }
}

pub(crate) fn set_visible(doc: &Document, id: &str, visible: bool, shown_as: &str) {
    set_style(doc, id, "display", if visible { shown_as } else { "none" });
}

/// Current value of an `<input>` or `<select>`, empty when absent
pub(crate) fn field_value(doc: &Document, id: &str) -> String {
    let Some(el) = doc.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        return select.value();
    }
    String::new()
}

/// `content` of `<meta name="{name}">`
pub(crate) fn meta_content(doc: &Document, name: &str) -> Option<String> {
    doc.query_selector(&format!("meta[name=\"{name}\"]"))
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"))
        .filter(|v| !v.trim().is_empty())
}

/// Read a CSS custom property from the document root
pub(crate) fn css_variable(doc: &Document, name: &str) -> Option<String> {
    let root = doc.document_element()?;
    let style = window().ok()?.get_computed_style(&root).ok().flatten()?;
    style.get_property_value(name).ok()
}

/// Inject the dashboard markup and styles unless the host page has them
pub(crate) fn mount_template_if_missing(doc: &Document) -> Result<()> {
    if doc.get_element_by_id(ids::MATERIAL_SELECTOR).is_some() {
        return Ok(());
    }

    let head = doc
        .head()
        .ok_or_else(|| DashboardError::Dom("document has no <head>".into()))?;
    let style = doc.create_element("style")?;
    style.set_text_content(Some(STYLES));
    head.append_child(&style)?;

    let body = doc
        .body()
        .ok_or_else(|| DashboardError::Dom("document has no <body>".into()))?;
    body.insert_adjacent_html("afterbegin", TEMPLATE)?;

    log::debug!("Mounted dashboard template");
    Ok(())
}

/// Attach a listener for the lifetime of the page
pub(crate) fn listen<F>(target: &Element, event: &str, handler: F) -> Result<()>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Attach a listener to the element with `id`, if present
pub(crate) fn listen_id<F>(doc: &Document, id: &str, event: &str, handler: F) -> Result<()>
where
    F: FnMut(web_sys::Event) + 'static,
{
    match doc.get_element_by_id(id) {
        Some(el) => listen(&el, event, handler),
        None => {
            log::warn!("⚠️ #{id} missing, {event} handler not attached");
            Ok(())
        }
    }
}

/// Every element matching `selector`
pub(crate) fn select_all(doc: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
