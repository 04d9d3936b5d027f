use std::rc::Rc;

use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Element, Event};

use crate::core::config::UiConfig;
use crate::core::dom;
use crate::core::services::HttpTaskApi;

use super::controller::BoardController;
use super::surface::DomBoardSurface;

pub type DomBoardController = BoardController<DomBoardSurface, HttpTaskApi>;

/// Wires every card and column on the page to a fresh controller. Returns `None`
/// when the page has no board.
pub fn install_board(config: &UiConfig) -> Option<Rc<DomBoardController>> {
    let document = dom::document()?;
    dom::query_one(&document, &config.column_selector)?;

    let controller = Rc::new(BoardController::new(
        DomBoardSurface::new(config.clone()),
        HttpTaskApi::new(config.api_base.clone()),
    ));

    let cards = dom::query_all(&document, &config.card_selector);
    let columns = dom::query_all(&document, &config.column_selector);
    log::debug!("binding {} cards across {} columns", cards.len(), columns.len());

    for card in cards {
        bind_card(&controller, card);
    }
    for column in columns {
        bind_column(&controller, column);
    }

    Some(controller)
}

fn bind_card(controller: &Rc<DomBoardController>, card: Element) {
    {
        let controller = controller.clone();
        let card_for_handler = card.clone();
        dom::listen(&card, "dragstart", move |ev: Event| {
            if let Some(transfer) = ev.dyn_ref::<DragEvent>().and_then(|ev| ev.data_transfer()) {
                transfer.set_effect_allowed("move");
                if let Err(e) = transfer.set_data("text/html", &card_for_handler.outer_html()) {
                    log::debug!("drag payload not set: {:?}", e);
                }
            }
            controller.drag_start(card_for_handler.clone());
        });
    }

    {
        let controller = controller.clone();
        let card_for_handler = card.clone();
        dom::listen(&card, "dragend", move |_| {
            controller.drag_end(&card_for_handler);
        });
    }

    let controller = controller.clone();
    let card_for_handler = card.clone();
    dom::listen(&card, "dblclick", move |_| {
        controller.edit_task(&card_for_handler);
    });
}

fn bind_column(controller: &Rc<DomBoardController>, column: Element) {
    {
        let controller = controller.clone();
        let column_for_handler = column.clone();
        dom::listen(&column, "dragover", move |ev: Event| {
            ev.prevent_default();
            if let Some(transfer) = ev.dyn_ref::<DragEvent>().and_then(|ev| ev.data_transfer()) {
                transfer.set_drop_effect("move");
            }
            controller.drag_over(&column_for_handler);
        });
    }

    {
        let controller = controller.clone();
        let column_for_handler = column.clone();
        dom::listen(&column, "dragleave", move |_| {
            controller.drag_leave(&column_for_handler);
        });
    }

    let controller = controller.clone();
    let column_for_handler = column.clone();
    dom::listen(&column, "drop", move |ev: Event| {
        ev.prevent_default();
        // The card moves now; only the server round trip is deferred.
        if let Some(pending) = controller.drop_on(&column_for_handler) {
            let controller = controller.clone();
            spawn_local(async move {
                // Failures were already logged, notified and resynced inside.
                let _ = controller.commit_move(pending).await;
            });
        }
    });
}
