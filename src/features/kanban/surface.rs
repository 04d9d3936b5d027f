use web_sys::Element;

use crate::core::config::UiConfig;
use crate::core::dom;
use crate::features::notifications::{show_notification, NotificationKind};

const DRAGGING_CLASS: &str = "dragging";
const DROP_TARGET_CLASS: &str = "drag-over";

/// Everything the board controller does to the page. The browser implementation
/// works on live DOM elements; tests substitute an in-memory board.
pub trait BoardSurface {
    type Card: Clone;
    type Column: Clone;

    fn task_id(&self, card: &Self::Card) -> Option<String>;
    fn column_status(&self, column: &Self::Column) -> Option<String>;

    fn set_dragging(&self, card: &Self::Card, dragging: bool);
    fn set_drop_target(&self, column: &Self::Column, active: bool);

    /// Appends the card to the column.
    fn move_card(&self, card: &Self::Card, column: &Self::Column);

    /// Recounts cards per column from the current page and updates each badge.
    fn refresh_column_counts(&self);

    fn notify(&self, kind: NotificationKind, message: &str);

    /// Restores a view consistent with the server after a failed update.
    fn resync(&self);
}

pub struct DomBoardSurface {
    config: UiConfig,
}

impl DomBoardSurface {
    pub fn new(config: UiConfig) -> Self {
        Self { config }
    }
}

impl BoardSurface for DomBoardSurface {
    type Card = Element;
    type Column = Element;

    fn task_id(&self, card: &Element) -> Option<String> {
        dom::data_attr(card, "task-id")
    }

    fn column_status(&self, column: &Element) -> Option<String> {
        dom::data_attr(column, "status")
    }

    fn set_dragging(&self, card: &Element, dragging: bool) {
        dom::set_class(card, DRAGGING_CLASS, dragging);
    }

    fn set_drop_target(&self, column: &Element, active: bool) {
        dom::set_class(column, DROP_TARGET_CLASS, active);
    }

    fn move_card(&self, card: &Element, column: &Element) {
        if let Err(e) = column.append_child(card) {
            log::error!("failed to move card into column: {:?}", e);
        }
    }

    fn refresh_column_counts(&self) {
        let Some(document) = dom::document() else {
            return;
        };
        for column in dom::query_all(&document, &self.config.column_selector) {
            let count = dom::query_all_in(&column, &self.config.card_selector).len();
            let badge = column
                .parent_element()
                .and_then(|parent| {
                    parent
                        .query_selector(&self.config.count_badge_selector)
                        .ok()
                        .flatten()
                });
            match badge {
                Some(badge) => badge.set_text_content(Some(&count.to_string())),
                None => log::debug!("column without count badge skipped"),
            }
        }
    }

    fn notify(&self, kind: NotificationKind, message: &str) {
        show_notification(
            message,
            kind,
            self.config.notification_visible_ms,
            self.config.notification_fade_ms,
        );
    }

    fn resync(&self) {
        dom::reload_page();
    }
}
