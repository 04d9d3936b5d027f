use gloo_timers::future::TimeoutFuture;
use leptos::mount::mount_to;
use leptos::prelude::*;
use leptos::task::spawn_local;

const BASE_CLASS: &str =
    "fixed top-4 right-4 px-4 py-2 rounded-lg text-white z-50 transition-all duration-300";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn background_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "bg-emerald-600",
            NotificationKind::Error => "bg-rose-600",
            NotificationKind::Info => "bg-indigo-600",
        }
    }

    pub fn class_list(&self) -> String {
        format!("{} {}", BASE_CLASS, self.background_class())
    }
}

#[component]
pub fn Toast(
    #[prop(into)] message: String,
    kind: NotificationKind,
    #[prop(into)] visible: Signal<bool>,
) -> impl IntoView {
    view! {
        <div
            class=kind.class_list()
            role="status"
            style:opacity=move || if visible.get() { "1" } else { "0" }
        >
            {message}
        </div>
    }
}

/// Appends a toast to `<body>`, fades it after `visible_ms`, removes it `fade_ms` later.
/// Without a body the message only reaches the log.
pub fn show_notification(message: &str, kind: NotificationKind, visible_ms: u32, fade_ms: u32) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        log::debug!("no document body for notification: {}", message);
        return;
    };

    // Reference counted so nothing lands in the arena outside the mount's owner.
    let visible = ArcRwSignal::new(true);
    let shown = visible.clone();
    let message = message.to_string();
    let handle = mount_to(body, move || {
        view! { <Toast message=message kind=kind visible=shown /> }
    });

    spawn_local(async move {
        TimeoutFuture::new(visible_ms).await;
        visible.set(false);
        TimeoutFuture::new(fade_ms).await;
        // Dropping the handle unmounts the toast.
        drop(handle);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_maps_to_background_color() {
        assert_eq!(NotificationKind::Success.background_class(), "bg-emerald-600");
        assert_eq!(NotificationKind::Error.background_class(), "bg-rose-600");
        assert_eq!(NotificationKind::Info.background_class(), "bg-indigo-600");
    }

    #[test]
    fn class_list_keeps_fixed_positioning() {
        let classes = NotificationKind::Error.class_list();
        assert!(classes.starts_with("fixed top-4 right-4"));
        assert!(classes.ends_with("bg-rose-600"));
    }

    #[test]
    fn visibility_is_shared_without_a_reactive_owner() {
        assert!(Owner::current().is_none());
        let visible = ArcRwSignal::new(true);
        let shown = visible.clone();

        visible.set(false);

        assert!(!shown.get_untracked());
    }
}
