pub mod bindings;
pub mod dialog;
pub mod modal;

pub use bindings::{
    bind_button, bind_form, bind_unbound, claim, confirm_delete, confirm_submission, confirm_then,
    handle_delete_button, handle_delete_form, install_confirm_dialog, setup_delete_confirmations,
    Bindable, DeleteTrigger, DomConfirmDialog, Submittable,
};
pub use dialog::{Confirmation, ConfirmDialog, ModalSurface};
pub use modal::{DeleteConfirmModal, DomModal};
