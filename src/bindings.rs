//! Static table of DOM listener bindings.
//!
//! DESIGN
//! ======
//! Every listener the site installs is one row here: which event, on which
//! target, triggers which `Action`. The browser layer walks the table once at
//! startup; tests drive `SiteController` with the matching `SiteEvent`s
//! directly.
//!
//! Rows marked `optional` name elements the page may omit; a missing optional
//! target is skipped silently, a missing required one is logged.

#[cfg(test)]
#[path = "bindings_test.rs"]
mod bindings_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    DomContentLoaded,
    Load,
    Scroll,
    Click,
    Submit,
}

impl EventKind {
    /// DOM event type name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DomContentLoaded => "DOMContentLoaded",
            Self::Load => "load",
            Self::Scroll => "scroll",
            Self::Click => "click",
            Self::Submit => "submit",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Window,
    Document,
    /// Single element by id.
    Id(&'static str),
    /// Every element matching a CSS selector.
    All(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Ready,
    Loaded,
    Scroll,
    ToggleMobileMenu,
    CloseMobileMenu,
    SelectTab,
    SubmitInquiry,
    SmoothScroll,
    ToggleTheme,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Binding {
    pub event: EventKind,
    pub target: Target,
    pub action: Action,
    pub optional: bool,
}

const fn bind(event: EventKind, target: Target, action: Action) -> Binding {
    Binding { event, target, action, optional: false }
}

const fn bind_optional(event: EventKind, target: Target, action: Action) -> Binding {
    Binding { event, target, action, optional: true }
}

// Element ids and selectors the page markup provides.
pub const HEADER_ID: &str = "header";
pub const MOBILE_MENU_BUTTON_ID: &str = "mobileMenuBtn";
pub const MOBILE_MENU_ID: &str = "mobileMenu";
pub const INQUIRY_FORM_ID: &str = "inquiryForm";
pub const THEME_TOGGLE_ID: &str = "themeToggle";
pub const THEME_TOGGLE_MOBILE_ID: &str = "themeToggleMobile";
pub const NAV_LINK_SELECTOR: &str = ".nav-link, .mobile-nav-link";
pub const MOBILE_CLOSE_SELECTOR: &str = ".mobile-nav-link, .mobile-cta";
pub const TAB_BUTTON_SELECTOR: &str = ".tab-btn";
pub const SERVICE_PANEL_SELECTOR: &str = ".service-panel";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const THEME_ICON_SELECTOR: &str = ".theme-icon, .theme-icon-mobile";
pub const THEME_MOBILE_LABEL_SELECTOR: &str = ".theme-toggle-mobile span:last-child";
pub const ICON_SELECTOR: &str = ".material-symbols-outlined";
/// Attribute on tab buttons naming their panel id.
pub const TAB_ATTRIBUTE: &str = "data-tab";
pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const ACTIVE_CLASS: &str = "active";
pub const SCROLLED_CLASS: &str = "scrolled";

pub const BINDINGS: &[Binding] = &[
    bind(EventKind::DomContentLoaded, Target::Document, Action::Ready),
    bind(EventKind::Load, Target::Window, Action::Loaded),
    bind(EventKind::Scroll, Target::Window, Action::Scroll),
    bind(EventKind::Click, Target::Id(MOBILE_MENU_BUTTON_ID), Action::ToggleMobileMenu),
    bind(EventKind::Click, Target::All(MOBILE_CLOSE_SELECTOR), Action::CloseMobileMenu),
    bind(EventKind::Click, Target::All(TAB_BUTTON_SELECTOR), Action::SelectTab),
    bind(EventKind::Submit, Target::Id(INQUIRY_FORM_ID), Action::SubmitInquiry),
    bind(EventKind::Click, Target::All(ANCHOR_SELECTOR), Action::SmoothScroll),
    bind_optional(EventKind::Click, Target::Id(THEME_TOGGLE_ID), Action::ToggleTheme),
    bind_optional(EventKind::Click, Target::Id(THEME_TOGGLE_MOBILE_ID), Action::ToggleTheme),
];

/// Lifecycle actions whose events already fired before listeners were
/// attached, given `document.readyState`.
///
/// The module usually starts after `DOMContentLoaded` (`"interactive"`) and
/// sometimes after `load` (`"complete"`).
pub fn missed_lifecycle(ready_state: &str) -> &'static [Action] {
    match ready_state {
        "loading" => &[],
        "complete" => &[Action::Ready, Action::Loaded],
        _ => &[Action::Ready],
    }
}
