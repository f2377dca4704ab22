//! Document reads: element lookups, section geometry, form values.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, FormData, HtmlElement, HtmlFormElement, Window};

use super::DomError;
use crate::bindings::{ACTIVE_CLASS, SECTION_SELECTOR, TAB_ATTRIBUTE, TAB_BUTTON_SELECTOR};
use crate::config::CONFIG_ELEMENT_ID;
use crate::state::inquiry::InquiryForm;
use crate::state::navigation::Section;
use crate::state::tabs::TabSet;

/// Every element matching `selector`, in document order.
pub(super) fn elements(document: &Document, selector: &str) -> Result<Vec<Element>, DomError> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub(super) fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or_default()
}

/// Measure every `section[id]`.
pub(super) fn sections(document: &Document) -> Vec<Section> {
    match elements(document, SECTION_SELECTOR) {
        Ok(found) => found
            .iter()
            .filter_map(|el| el.dyn_ref::<HtmlElement>())
            .map(|el| Section::new(el.id(), f64::from(el.offset_top()), f64::from(el.offset_height())))
            .collect(),
        Err(err) => {
            log::warn!("section lookup failed: {err}");
            Vec::new()
        }
    }
}

/// Tab ids from `.tab-btn[data-tab]`, with the one marked `.active` selected.
pub(super) fn tab_set(document: &Document) -> Result<TabSet, DomError> {
    let buttons = elements(document, TAB_BUTTON_SELECTOR)?;
    let active = buttons
        .iter()
        .find(|b| b.class_list().contains(ACTIVE_CLASS))
        .and_then(|b| b.get_attribute(TAB_ATTRIBUTE));
    let ids = buttons.iter().filter_map(|b| b.get_attribute(TAB_ATTRIBUTE)).collect::<Vec<_>>();
    Ok(TabSet::new(ids, active.as_deref()))
}

/// Text of the inline config block, if the page has one.
pub(super) fn config_json(document: &Document) -> Option<String> {
    document.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()
}

pub(super) fn inquiry_form(form: &HtmlFormElement) -> Result<InquiryForm, DomError> {
    let data = FormData::new_with_form(form)?;
    Ok(InquiryForm::from_fields(|key| data.get(key).as_string()))
}
