//! Bottom-right toast for the current notification.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once into `<body>` by the browser layer. The `For` is keyed by
//! notification token, so a superseding toast always gets a fresh element and
//! replays its entry animation; the old element is removed without a
//! transition.

#[cfg(test)]
#[path = "notification_toast_test.rs"]
mod notification_toast_test;

use leptos::prelude::*;

use crate::state::notification::{Notification, NotificationKind, NotificationPhase, NotificationToken};

pub const TOAST_KEYFRAMES: &str = "\
@keyframes slideInRight {
    from { opacity: 0; transform: translateX(100px); }
    to { opacity: 1; transform: translateX(0); }
}
@keyframes slideOutRight {
    from { opacity: 1; transform: translateX(0); }
    to { opacity: 0; transform: translateX(100px); }
}";

/// Inline style for a toast of `kind` in `phase`.
pub fn toast_style(kind: NotificationKind, phase: NotificationPhase) -> String {
    let animation = match phase {
        NotificationPhase::Entering => "slideInRight",
        NotificationPhase::Exiting => "slideOutRight",
    };
    format!(
        "position: fixed; bottom: 24px; right: 24px; display: flex; align-items: center; gap: 12px; \
         padding: 16px 24px; background: {}; color: white; border-radius: 10px; font-size: 14px; \
         font-weight: 500; box-shadow: 0 4px 20px rgba(0,0,0,0.3); z-index: 10000; \
         animation: {animation} 0.4s ease forwards;",
        kind.background()
    )
}

/// Phase of the toast with `token`, treating a replaced toast as exiting.
pub fn phase_for(current: Option<&Notification>, token: NotificationToken) -> NotificationPhase {
    current.filter(|n| n.token == token).map_or(NotificationPhase::Exiting, |n| n.phase)
}

/// Toast host rendering at most one notification.
#[component]
pub fn NotificationToast(notification: RwSignal<Option<Notification>>) -> impl IntoView {
    view! {
        <style>{TOAST_KEYFRAMES}</style>
        <For
            each=move || notification.get().into_iter()
            key=|n| n.token
            children=move |n| {
                let token = n.token;
                let kind = n.kind;
                let style = move || notification.with(|current| toast_style(kind, phase_for(current.as_ref(), token)));
                view! {
                    <div class=kind.class_name() style=style role="status">
                        <span class="material-symbols-outlined">{kind.icon()}</span>
                        <span>{n.message}</span>
                    </div>
                }
            }
        />
    }
}
