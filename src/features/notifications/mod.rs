pub mod toast;

pub use toast::{show_notification, NotificationKind, Toast};
