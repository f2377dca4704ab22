//! Browser runtime: DOM events in, controller effects out.
//!
//! SYSTEM CONTEXT
//! ==============
//! `start` builds the single `Runtime`, applies the initial theme, mounts the
//! toast component, and walks the binding table to install listeners. Every
//! listener funnels into `Runtime::dispatch`, which runs the controller and
//! then executes the returned effects.
//!
//! ERROR HANDLING
//! ==============
//! A failing effect is logged and the remaining effects still run. Missing
//! optional elements are skipped before any error can arise.

mod effects;
mod listeners;
mod query;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

use crate::components::notification_toast::NotificationToast;
use crate::config::SiteConfig;
use crate::controller::{Effect, SiteController, SiteEvent};
use crate::state::notification::Notification;
use crate::util::persistence::LocalStore;

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("javascript error: {0}")]
    Js(String),
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

pub(crate) struct Runtime {
    window: Window,
    document: Document,
    controller: RefCell<SiteController<LocalStore>>,
    toast: RwSignal<Option<Notification>>,
    /// Pending notification timer. Replacing it cancels the previous one.
    timer: RefCell<Option<Timeout>>,
}

/// Wire the site behavior into the current document.
///
/// # Errors
///
/// Returns an error when there is no window/document or a listener cannot be
/// attached.
pub fn start() -> Result<(), DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let document = window.document().ok_or(DomError::NoDocument)?;

    let config = SiteConfig::from_json_or_default(query::config_json(&document).as_deref());
    let tabs = query::tab_set(&document)?;
    let (controller, initial) = SiteController::new(config, LocalStore, tabs);

    let toast = RwSignal::new(None);
    let runtime =
        Rc::new(Runtime { window, document, controller: RefCell::new(controller), toast, timer: RefCell::new(None) });
    runtime.apply_all(initial);

    leptos::mount::mount_to_body(move || view! { <NotificationToast notification=toast/> });
    listeners::attach(&runtime)
}

impl Runtime {
    pub(crate) fn dispatch(self: &Rc<Self>, event: SiteEvent) {
        let effects = self.controller.borrow_mut().handle(event);
        self.apply_all(effects);
    }

    fn apply_all(self: &Rc<Self>, effects: Vec<Effect>) {
        for effect in effects {
            if let Err(err) = effects::apply(self, effect) {
                log::warn!("effect failed: {err}");
            }
        }
    }

    /// Dispatch `event` after `delay_ms`, cancelling any pending timer.
    fn schedule(self: &Rc<Self>, delay_ms: u32, event: SiteEvent) {
        let weak = Rc::downgrade(self);
        let timeout = Timeout::new(delay_ms, move || {
            if let Some(runtime) = weak.upgrade() {
                runtime.dispatch(event);
            }
        });
        *self.timer.borrow_mut() = Some(timeout);
    }

    /// Mirror the controller's notification slot into the toast signal.
    fn sync_toast(&self) {
        let current = self.controller.borrow().notifications().current().cloned();
        self.toast.set(current);
    }
}
