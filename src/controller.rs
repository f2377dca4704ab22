//! Site controller: one owner for all behavior state.
//!
//! DESIGN
//! ======
//! The browser layer turns each DOM event into a `SiteEvent`, hands it to
//! `SiteController::handle`, and executes the returned `Effect`s against the
//! document. The controller never touches the DOM, so every handler runs in
//! native tests.
//!
//! Handlers complete synchronously; no handler observes another half-done.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::SiteConfig;
use crate::state::inquiry::{self, InquiryForm, SUCCESS_MESSAGE};
use crate::state::navigation::{self, MobileMenuState, NavState, Section};
use crate::state::notification::{Notification, NotificationKind, NotificationState, NotificationToken};
use crate::state::tabs::TabSet;
use crate::state::theme::{ThemeManager, ThemeView};
use crate::util::persistence::PreferenceStore;
use crate::util::reveal::RevealConfig;

#[derive(Clone, Debug, PartialEq)]
pub enum SiteEvent {
    /// Document parsed; sections measured.
    Ready { scroll_y: f64, sections: Vec<Section> },
    /// All page resources loaded.
    Loaded,
    Scrolled { scroll_y: f64, sections: Vec<Section> },
    MenuButtonClicked,
    MobileLinkClicked,
    TabClicked { tab: String },
    InquirySubmitted { form: InquiryForm, now_ms: f64 },
    AnchorClicked { href: String },
    ThemeToggleClicked,
    NotificationDwellElapsed(NotificationToken),
    NotificationExitElapsed(NotificationToken),
}

/// A document change or side effect requested by the controller.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    SetHeaderScrolled(bool),
    /// Mark the nav link(s) targeting `section` active, clear the rest.
    SetActiveNavLink { section: String },
    SetMobileMenu { open: bool, icon: &'static str },
    ActivateTab { tab: String },
    ApplyTheme(ThemeView),
    /// Render `notification` and schedule its dwell timer, cancelling any
    /// timers of the notification it replaces.
    ShowNotification { notification: Notification, dwell_ms: u32 },
    /// Start the exit animation and schedule removal.
    BeginNotificationExit { token: NotificationToken, exit_ms: u32 },
    RemoveNotification { token: NotificationToken },
    ResetInquiryForm,
    ScrollIntoView { id: String },
    InitReveal(RevealConfig),
    RefreshReveal,
}

pub struct SiteController<S> {
    config: SiteConfig,
    theme: ThemeManager<S>,
    nav: NavState,
    menu: MobileMenuState,
    tabs: TabSet,
    notifications: NotificationState,
}

impl<S: PreferenceStore> SiteController<S> {
    /// Build the controller and resolve the initial theme.
    ///
    /// Returns the effects that must run before the first paint.
    pub fn new(config: SiteConfig, store: S, tabs: TabSet) -> (Self, Vec<Effect>) {
        let (theme, view) = ThemeManager::initialize(store, &config.theme_storage_key, config.default_theme);
        let controller = Self {
            config,
            theme,
            nav: NavState::default(),
            menu: MobileMenuState::default(),
            tabs,
            notifications: NotificationState::default(),
        };
        (controller, vec![Effect::ApplyTheme(view)])
    }

    pub fn handle(&mut self, event: SiteEvent) -> Vec<Effect> {
        match event {
            SiteEvent::Ready { scroll_y, sections } => {
                let mut effects = vec![Effect::InitReveal(self.config.reveal.clone())];
                effects.extend(self.on_scroll(scroll_y, &sections));
                log::info!("Sri Manjunatheswara Industries website initialized");
                effects
            }
            SiteEvent::Loaded => vec![Effect::RefreshReveal],
            SiteEvent::Scrolled { scroll_y, sections } => self.on_scroll(scroll_y, &sections),
            SiteEvent::MenuButtonClicked => {
                self.menu.toggle();
                vec![self.menu_effect()]
            }
            SiteEvent::MobileLinkClicked => {
                self.menu.close();
                vec![self.menu_effect()]
            }
            SiteEvent::TabClicked { tab } => {
                if self.tabs.select(&tab) { vec![Effect::ActivateTab { tab }] } else { Vec::new() }
            }
            SiteEvent::InquirySubmitted { form, now_ms } => self.submit_inquiry(form, now_ms),
            SiteEvent::AnchorClicked { href } => navigation::anchor_target(&href)
                .map(|id| Effect::ScrollIntoView { id: id.to_owned() })
                .into_iter()
                .collect(),
            SiteEvent::ThemeToggleClicked => vec![Effect::ApplyTheme(self.theme.toggle())],
            SiteEvent::NotificationDwellElapsed(token) => {
                if self.notifications.begin_exit(token) {
                    vec![Effect::BeginNotificationExit { token, exit_ms: self.config.notification_exit_ms }]
                } else {
                    Vec::new()
                }
            }
            SiteEvent::NotificationExitElapsed(token) => {
                if self.notifications.dismiss(token) {
                    vec![Effect::RemoveNotification { token }]
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Show a toast, replacing any visible one.
    pub fn notify(&mut self, message: &str, kind: NotificationKind, now_ms: f64) -> Effect {
        let notification = self.notifications.show(message, kind, now_ms).clone();
        Effect::ShowNotification { notification, dwell_ms: self.config.notification_dwell_ms }
    }

    fn on_scroll(&mut self, scroll_y: f64, sections: &[Section]) -> Vec<Effect> {
        let outcome = self.nav.on_scroll(
            scroll_y,
            sections,
            self.config.scrolled_threshold_px,
            self.config.active_section_offset_px,
        );
        let mut effects = vec![Effect::SetHeaderScrolled(outcome.header_scrolled)];
        if let Some(section) = outcome.active_section {
            effects.push(Effect::SetActiveNavLink { section });
        }
        effects
    }

    fn submit_inquiry(&mut self, form: InquiryForm, now_ms: f64) -> Vec<Effect> {
        match inquiry::validate(&form) {
            Err(err) => {
                log::debug!("inquiry rejected: {err:?}");
                vec![self.notify(&err.to_string(), NotificationKind::Error, now_ms)]
            }
            Ok(()) => {
                let shown = self.notify(SUCCESS_MESSAGE, NotificationKind::Success, now_ms);
                let effects = vec![shown, Effect::ResetInquiryForm];
                match serde_json::to_string(&form) {
                    Ok(json) => log::info!("Inquiry submitted: {json}"),
                    Err(err) => log::warn!("Inquiry submitted (unserializable: {err})"),
                }
                effects
            }
        }
    }

    fn menu_effect(&self) -> Effect {
        Effect::SetMobileMenu { open: self.menu.open, icon: self.menu.icon() }
    }

    pub fn theme(&self) -> &ThemeManager<S> {
        &self.theme
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn menu(&self) -> MobileMenuState {
        self.menu
    }

    pub fn tabs(&self) -> &TabSet {
        &self.tabs
    }

    pub fn notifications(&self) -> &NotificationState {
        &self.notifications
    }
}
