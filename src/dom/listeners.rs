//! Listener installation from the binding table.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, EventTarget, HtmlFormElement};

use super::{DomError, Runtime, query};
use crate::bindings::{Action, BINDINGS, Binding, TAB_ATTRIBUTE, Target, missed_lifecycle};
use crate::controller::SiteEvent;

pub(super) fn attach(runtime: &Rc<Runtime>) -> Result<(), DomError> {
    for binding in BINDINGS {
        let targets = resolve(runtime, binding.target)?;
        if targets.is_empty() {
            if !binding.optional {
                log::warn!("no element for {:?}; {:?} not bound", binding.target, binding.action);
            }
            continue;
        }
        for target in &targets {
            listen(runtime, target, *binding)?;
        }
    }

    for action in missed_lifecycle(&runtime.document.ready_state()) {
        if let Some(event) = lifecycle_event(runtime, *action) {
            runtime.dispatch(event);
        }
    }
    Ok(())
}

fn resolve(runtime: &Runtime, target: Target) -> Result<Vec<EventTarget>, DomError> {
    Ok(match target {
        Target::Window => vec![runtime.window.clone().into()],
        Target::Document => vec![runtime.document.clone().into()],
        Target::Id(id) => runtime.document.get_element_by_id(id).map(EventTarget::from).into_iter().collect(),
        Target::All(selector) => {
            query::elements(&runtime.document, selector)?.into_iter().map(EventTarget::from).collect()
        }
    })
}

fn listen(runtime: &Rc<Runtime>, target: &EventTarget, binding: Binding) -> Result<(), DomError> {
    let runtime = Rc::clone(runtime);
    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Some(site_event) = site_event(&runtime, binding.action, &event) {
            runtime.dispatch(site_event);
        }
    });
    target.add_event_listener_with_callback(binding.event.as_str(), closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    closure.forget();
    Ok(())
}

fn site_event(runtime: &Runtime, action: Action, event: &Event) -> Option<SiteEvent> {
    match action {
        Action::Ready => Some(ready_event(runtime)),
        Action::Loaded => Some(SiteEvent::Loaded),
        Action::Scroll => Some(SiteEvent::Scrolled {
            scroll_y: query::scroll_y(&runtime.window),
            sections: query::sections(&runtime.document),
        }),
        Action::ToggleMobileMenu => Some(SiteEvent::MenuButtonClicked),
        Action::CloseMobileMenu => Some(SiteEvent::MobileLinkClicked),
        Action::SelectTab => {
            current_element(event)?.get_attribute(TAB_ATTRIBUTE).map(|tab| SiteEvent::TabClicked { tab })
        }
        Action::SubmitInquiry => {
            event.prevent_default();
            let form = current_element(event)?.dyn_into::<HtmlFormElement>().ok()?;
            match query::inquiry_form(&form) {
                Ok(form) => Some(SiteEvent::InquirySubmitted { form, now_ms: js_sys::Date::now() }),
                Err(err) => {
                    log::warn!("could not read inquiry form: {err}");
                    None
                }
            }
        }
        Action::SmoothScroll => {
            event.prevent_default();
            current_element(event)?.get_attribute("href").map(|href| SiteEvent::AnchorClicked { href })
        }
        Action::ToggleTheme => Some(SiteEvent::ThemeToggleClicked),
    }
}

fn lifecycle_event(runtime: &Runtime, action: Action) -> Option<SiteEvent> {
    match action {
        Action::Ready => Some(ready_event(runtime)),
        Action::Loaded => Some(SiteEvent::Loaded),
        _ => None,
    }
}

fn ready_event(runtime: &Runtime) -> SiteEvent {
    SiteEvent::Ready { scroll_y: query::scroll_y(&runtime.window), sections: query::sections(&runtime.document) }
}

fn current_element(event: &Event) -> Option<Element> {
    event.current_target()?.dyn_into::<Element>().ok()
}
