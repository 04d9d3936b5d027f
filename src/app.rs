use crate::core::config::UiConfig;
use crate::features::confirm::{install_confirm_dialog, setup_delete_confirmations};
use crate::features::kanban::install_board;

/// Wires both page components. They share no state: the board only touches
/// columns and cards, the confirmation helper only delete affordances.
pub fn boot(config: &UiConfig) {
    match install_board(config) {
        Some(_) => log::debug!("kanban board controller installed"),
        None => log::debug!("no kanban columns on this page, board controller skipped"),
    }

    match install_confirm_dialog() {
        Some(dialog) => setup_delete_confirmations(&dialog),
        None => {
            log::warn!("delete confirmation modal unavailable, delete affordances left unbound")
        }
    }
}
