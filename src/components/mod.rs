//! Leptos components the site mounts over the static page.

pub mod notification_toast;
