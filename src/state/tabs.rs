//! Exclusive selection over the service tabs.

#[cfg(test)]
#[path = "tabs_test.rs"]
mod tabs_test;

/// Tab ids double as the ids of their panels.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TabSet {
    tabs: Vec<String>,
    active: Option<String>,
}

impl TabSet {
    pub fn new<I, T>(tabs: I, active: Option<&str>) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self { tabs: tabs.into_iter().map(Into::into).collect(), active: active.map(str::to_owned) }
    }

    /// Make `tab` the only active tab. Returns `true` if the selection changed.
    ///
    /// Unknown ids are still selected; every known tab and panel then
    /// renders inactive.
    pub fn select(&mut self, tab: &str) -> bool {
        if self.active.as_deref() == Some(tab) {
            return false;
        }
        if !self.tabs.iter().any(|t| t == tab) {
            log::warn!("selected tab {tab} has no matching panel");
        }
        self.active = Some(tab.to_owned());
        true
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, tab: &str) -> bool {
        self.active.as_deref() == Some(tab)
    }
}
