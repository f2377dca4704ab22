//! Effect execution against the live document.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::{DomError, Runtime, query};
use crate::bindings::{
    ACTIVE_CLASS, HEADER_ID, ICON_SELECTOR, INQUIRY_FORM_ID, MOBILE_MENU_BUTTON_ID, MOBILE_MENU_ID, NAV_LINK_SELECTOR,
    SCROLLED_CLASS, SERVICE_PANEL_SELECTOR, TAB_ATTRIBUTE, TAB_BUTTON_SELECTOR, THEME_ATTRIBUTE, THEME_ICON_SELECTOR,
    THEME_MOBILE_LABEL_SELECTOR,
};
use crate::controller::{Effect, SiteEvent};
use crate::state::navigation::link_targets;
use crate::util::reveal;

pub(super) fn apply(runtime: &Rc<Runtime>, effect: Effect) -> Result<(), DomError> {
    let document = &runtime.document;
    match effect {
        Effect::SetHeaderScrolled(scrolled) => {
            if let Some(header) = document.get_element_by_id(HEADER_ID) {
                set_class(&header, SCROLLED_CLASS, scrolled)?;
            }
        }
        Effect::SetActiveNavLink { section } => {
            for link in query::elements(document, NAV_LINK_SELECTOR)? {
                let targets = link.get_attribute("href").is_some_and(|href| link_targets(&href, &section));
                set_class(&link, ACTIVE_CLASS, targets)?;
            }
        }
        Effect::SetMobileMenu { open, icon } => {
            if let Some(menu) = document.get_element_by_id(MOBILE_MENU_ID) {
                set_class(&menu, ACTIVE_CLASS, open)?;
            }
            if let Some(button) = document.get_element_by_id(MOBILE_MENU_BUTTON_ID) {
                if let Some(glyph) = button.query_selector(ICON_SELECTOR)? {
                    glyph.set_text_content(Some(icon));
                }
            }
        }
        Effect::ActivateTab { tab } => {
            for button in query::elements(document, TAB_BUTTON_SELECTOR)? {
                let selected = button.get_attribute(TAB_ATTRIBUTE).as_deref() == Some(tab.as_str());
                set_class(&button, ACTIVE_CLASS, selected)?;
            }
            for panel in query::elements(document, SERVICE_PANEL_SELECTOR)? {
                set_class(&panel, ACTIVE_CLASS, panel.id() == tab)?;
            }
        }
        Effect::ApplyTheme(view) => {
            if let Some(root) = document.document_element() {
                root.set_attribute(THEME_ATTRIBUTE, view.attribute)?;
            }
            for icon in query::elements(document, THEME_ICON_SELECTOR)? {
                icon.set_text_content(Some(view.icon));
            }
            if let Some(label) = document.query_selector(THEME_MOBILE_LABEL_SELECTOR)? {
                label.set_text_content(Some(view.mobile_label));
            }
        }
        Effect::ShowNotification { notification, dwell_ms } => {
            log::debug!("notification {} ({})", notification.token.get(), notification.kind.as_str());
            runtime.sync_toast();
            runtime.schedule(dwell_ms, SiteEvent::NotificationDwellElapsed(notification.token));
        }
        Effect::BeginNotificationExit { token, exit_ms } => {
            runtime.sync_toast();
            runtime.schedule(exit_ms, SiteEvent::NotificationExitElapsed(token));
        }
        Effect::RemoveNotification { .. } => runtime.sync_toast(),
        Effect::ResetInquiryForm => {
            let form = document.get_element_by_id(INQUIRY_FORM_ID).and_then(|el| el.dyn_into::<HtmlFormElement>().ok());
            if let Some(form) = form {
                form.reset();
            }
        }
        Effect::ScrollIntoView { id } => {
            if let Some(target) = document.get_element_by_id(&id) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
        Effect::InitReveal(config) => reveal::init(&config)?,
        Effect::RefreshReveal => reveal::refresh()?,
    }
    Ok(())
}

fn set_class(element: &Element, class: &str, on: bool) -> Result<(), DomError> {
    element.class_list().toggle_with_force(class, on)?;
    Ok(())
}
