use leptos::prelude::*;
use web_sys::Element;

use crate::core::dom;

use super::dialog::{ModalSurface, DEFAULT_MESSAGE, DEFAULT_TITLE};

pub const MODAL_ID: &str = "deleteModal";
pub const TITLE_ID: &str = "deleteModalTitle";
pub const MESSAGE_ID: &str = "deleteModalMessage";
pub const CONFIRM_BUTTON_ID: &str = "deleteConfirmBtn";
pub const CANCEL_BUTTON_ID: &str = "deleteCancelBtn";

const HIDDEN_CLASS: &str = "hidden";
const OPEN_CLASS: &str = "flex";

/// Fallback markup for pages whose template does not ship the delete modal.
/// Uses the same element ids, so `DomModal` drives either one.
#[component]
pub fn DeleteConfirmModal() -> impl IntoView {
    view! {
        <div
            id=MODAL_ID
            class="fixed inset-0 z-50 hidden items-center justify-center bg-black/50"
            role="dialog"
            aria-modal="true"
            aria-labelledby=TITLE_ID
        >
            <div class="bg-white rounded-lg shadow-xl p-6 w-full max-w-md">
                <h3 id=TITLE_ID class="text-lg font-semibold text-gray-900">{DEFAULT_TITLE}</h3>
                <p id=MESSAGE_ID class="mt-2 text-sm text-gray-600">{DEFAULT_MESSAGE}</p>
                <div class="mt-6 flex justify-end gap-3">
                    <button
                        id=CANCEL_BUTTON_ID
                        type="button"
                        class="px-4 py-2 rounded-lg bg-gray-100 text-gray-700 hover:bg-gray-200"
                    >
                        "Annuler"
                    </button>
                    <button
                        id=CONFIRM_BUTTON_ID
                        type="button"
                        class="px-4 py-2 rounded-lg bg-rose-600 text-white hover:bg-rose-700"
                    >
                        "Supprimer"
                    </button>
                </div>
            </div>
        </div>
    }
}

fn by_id(id: &str) -> Option<Element> {
    dom::document()?.get_element_by_id(id)
}

/// Mounts `DeleteConfirmModal` unless the page already has one.
pub fn ensure_modal_present() {
    if by_id(MODAL_ID).is_some() {
        return;
    }
    log::debug!("no #{} in page, mounting fallback modal", MODAL_ID);
    leptos::mount::mount_to_body(DeleteConfirmModal);
}

pub fn confirm_button() -> Option<Element> {
    by_id(CONFIRM_BUTTON_ID)
}

pub fn cancel_button() -> Option<Element> {
    by_id(CANCEL_BUTTON_ID)
}

/// Modal elements are looked up on every call; a missing one is skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct DomModal;

impl ModalSurface for DomModal {
    fn show(&self, title: &str, message: &str) {
        if let Some(el) = by_id(TITLE_ID) {
            el.set_text_content(Some(title));
        }
        if let Some(el) = by_id(MESSAGE_ID) {
            el.set_text_content(Some(message));
        }
        if let Some(modal) = by_id(MODAL_ID) {
            dom::set_class(&modal, HIDDEN_CLASS, false);
            dom::set_class(&modal, OPEN_CLASS, true);
        }
    }

    fn hide(&self) {
        if let Some(modal) = by_id(MODAL_ID) {
            dom::set_class(&modal, OPEN_CLASS, false);
            dom::set_class(&modal, HIDDEN_CLASS, true);
        }
    }
}
