//! Header scroll flag, active nav link, and the mobile menu.
//!
//! DESIGN
//! ======
//! The active section is the one whose `[top, top + height)` range contains
//! the scroll offset plus a fixed look-ahead. When no section contains it
//! (e.g. inside the footer) the previous link stays active.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

pub const DEFAULT_SCROLLED_THRESHOLD_PX: f64 = 50.0;
pub const DEFAULT_ACTIVE_SECTION_OFFSET_PX: f64 = 100.0;

/// A page section measured from the document top.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

pub fn header_is_scrolled(scroll_y: f64, threshold_px: f64) -> bool {
    scroll_y > threshold_px
}

/// Section containing `probe_y`. Later sections win when ranges overlap.
pub fn current_section(sections: &[Section], probe_y: f64) -> Option<&Section> {
    sections.iter().rev().find(|s| s.contains(probe_y))
}

/// Whether a nav link `href` points at `section_id`.
pub fn link_targets(href: &str, section_id: &str) -> bool {
    href.strip_prefix('#') == Some(section_id)
}

/// Element id named by an in-page anchor, if any.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Result of one scroll recomputation.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollOutcome {
    pub header_scrolled: bool,
    /// Newly resolved section, `None` when no section contains the probe.
    pub active_section: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    pub header_scrolled: bool,
    pub active_section: Option<String>,
    pub last_scroll_y: f64,
}

impl NavState {
    pub fn on_scroll(
        &mut self,
        scroll_y: f64,
        sections: &[Section],
        scrolled_threshold_px: f64,
        active_offset_px: f64,
    ) -> ScrollOutcome {
        self.last_scroll_y = scroll_y;
        self.header_scrolled = header_is_scrolled(scroll_y, scrolled_threshold_px);

        let resolved = current_section(sections, scroll_y + active_offset_px).map(|s| s.id.clone());
        if let Some(id) = &resolved {
            if self.active_section.as_deref() != Some(id.as_str()) {
                log::debug!("active section -> {id}");
            }
            self.active_section = Some(id.clone());
        }

        ScrollOutcome { header_scrolled: self.header_scrolled, active_section: resolved }
    }
}

/// Open/closed state of the mobile navigation drawer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenuState {
    pub open: bool,
}

impl MobileMenuState {
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Material icon on the menu button.
    pub fn icon(self) -> &'static str {
        if self.open { "close" } else { "menu" }
    }
}
