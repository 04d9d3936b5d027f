use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::channel::oneshot;

pub const DEFAULT_TITLE: &str = "Supprimer cet élément ?";
pub const DEFAULT_MESSAGE: &str = "Cette action ne peut pas être annulée.";

/// The visible part of a confirmation: one reusable modal.
pub trait ModalSurface {
    fn show(&self, title: &str, message: &str);
    fn hide(&self);
}

/// Resolves to `true` on confirm, `false` on cancel or when a newer request took the modal over.
#[must_use = "a confirmation does nothing unless awaited"]
pub struct Confirmation {
    answer: oneshot::Receiver<bool>,
}

impl Future for Confirmation {
    type Output = bool;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<bool> {
        Pin::new(&mut self.answer).poll(cx).map(|answer| answer.unwrap_or(false))
    }
}

/// Non-blocking replacement for `window.confirm`. Only one request is open at a
/// time; a new request declines the one it replaces.
pub struct ConfirmDialog<M: ModalSurface> {
    modal: M,
    pending: RefCell<Option<oneshot::Sender<bool>>>,
}

impl<M: ModalSurface> ConfirmDialog<M> {
    pub fn new(modal: M) -> Self {
        Self {
            modal,
            pending: RefCell::new(None),
        }
    }

    pub fn modal(&self) -> &M {
        &self.modal
    }

    pub fn is_open(&self) -> bool {
        self.pending.borrow().is_some()
    }

    pub fn confirm(&self, title: &str, message: &str) -> Confirmation {
        let (tx, rx) = oneshot::channel();
        let superseded = self.pending.replace(Some(tx));
        if let Some(previous) = superseded {
            log::warn!("confirmation superseded by \"{}\", previous request declined", title);
            let _ = previous.send(false);
        }
        self.modal.show(title, message);
        Confirmation { answer: rx }
    }

    /// Called by the modal's buttons. Hides the modal even when nothing is pending.
    pub fn resolve(&self, confirmed: bool) {
        self.modal.hide();
        let pending = self.pending.borrow_mut().take();
        match pending {
            Some(tx) => {
                let _ = tx.send(confirmed);
            }
            None => log::debug!("confirmation answered with nothing pending"),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::RecordingModal;
    use super::*;
    use futures::executor::block_on;
    use futures::join;

    #[test]
    fn confirm_resolves_true_and_closes_modal() {
        let dialog = ConfirmDialog::new(RecordingModal::default());

        let (answer, ()) = block_on(async {
            join!(dialog.confirm(DEFAULT_TITLE, DEFAULT_MESSAGE), async { dialog.resolve(true) })
        });

        assert!(answer);
        assert!(!dialog.is_open());
        assert!(!dialog.modal().visible.get());
        assert_eq!(
            *dialog.modal().shown.borrow(),
            vec![(DEFAULT_TITLE.to_string(), DEFAULT_MESSAGE.to_string())]
        );
    }

    #[test]
    fn cancel_resolves_false_and_closes_modal() {
        let dialog = ConfirmDialog::new(RecordingModal::default());

        let (answer, ()) = block_on(async {
            join!(dialog.confirm("Titre", "Message"), async {
                dialog.resolve(false)
            })
        });

        assert!(!answer);
        assert_eq!(dialog.modal().hides.get(), 1);
        assert!(!dialog.modal().visible.get());
    }

    #[test]
    fn newer_request_declines_the_one_it_replaces() {
        let dialog = ConfirmDialog::new(RecordingModal::default());

        let first = dialog.confirm("Premier", "un");
        let second = dialog.confirm("Second", "deux");
        assert!(dialog.is_open());
        dialog.resolve(true);

        assert!(!block_on(first));
        assert!(block_on(second));
        let shown = dialog.modal().shown.borrow();
        assert_eq!(shown.last().map(|(t, _)| t.as_str()), Some("Second"));
    }

    #[test]
    fn resolve_without_request_only_hides() {
        let dialog = ConfirmDialog::new(RecordingModal::default());

        dialog.resolve(true);

        assert_eq!(dialog.modal().hides.get(), 1);
        assert!(!dialog.is_open());
    }

    #[test]
    fn dropped_dialog_declines_open_request() {
        let dialog = ConfirmDialog::new(RecordingModal::default());
        let pending = dialog.confirm("Titre", "Message");
        drop(dialog);

        assert!(!block_on(pending));
    }
}
