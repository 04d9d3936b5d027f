use std::rc::Rc;

use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlFormElement};

use crate::core::dom;

use super::dialog::{ConfirmDialog, ModalSurface};
use super::modal::{self, DomModal};

pub type DomConfirmDialog = ConfirmDialog<DomModal>;

pub const PROJECT_DELETE_FORM_SELECTOR: &str = r#"form[action*="/delete"]"#;
pub const PROJECT_DELETE_TITLE: &str = "Supprimer ce projet ?";
pub const PROJECT_DELETE_MESSAGE: &str =
    "Toutes les tâches et données du projet seront définitivement supprimées.";

pub const DELETE_TRIGGER_SELECTOR: &str = "[data-delete-task]";
pub const TASK_DELETE_MESSAGE: &str = "Cette tâche sera définitivement supprimée.";
const TASK_TITLE_FALLBACK: &str = "cette tâche";

/// Set on every element already wired, so a second setup pass skips it.
const BOUND_ATTR: &str = "data-confirm-bound";

/// Something a confirmation handler can be attached to at most once.
pub trait Bindable {
    fn is_bound(&self) -> bool;
    fn mark_bound(&self);
}

impl Bindable for Element {
    fn is_bound(&self) -> bool {
        self.has_attribute(BOUND_ATTR)
    }

    fn mark_bound(&self) {
        if let Err(e) = self.set_attribute(BOUND_ATTR, "") {
            log::debug!("could not mark element as bound: {:?}", e);
        }
    }
}

impl<T: Bindable + ?Sized> Bindable for &T {
    fn is_bound(&self) -> bool {
        (**self).is_bound()
    }

    fn mark_bound(&self) {
        (**self).mark_bound()
    }
}

/// Marks `item` as bound; `false` if it already was.
pub fn claim<T: Bindable + ?Sized>(item: &T) -> bool {
    if item.is_bound() {
        return false;
    }
    item.mark_bound();
    true
}

/// Wires every item not bound yet and returns how many were wired.
pub fn bind_unbound<T, I, F>(items: I, mut wire: F) -> usize
where
    T: Bindable,
    I: IntoIterator<Item = T>,
    F: FnMut(T),
{
    let mut wired = 0;
    for item in items {
        if claim(&item) {
            wire(item);
            wired += 1;
        }
    }
    wired
}

/// A form whose submission can be completed after it was intercepted.
pub trait Submittable {
    fn submit_now(&self);
}

impl Submittable for HtmlFormElement {
    fn submit_now(&self) {
        // `submit()` does not fire `submit` again, so the handler is not re-entered.
        if let Err(e) = self.submit() {
            log::error!("confirmed form submission failed: {:?}", e);
        }
    }
}

/// What a delete trigger carries, read at click time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteTrigger {
    pub task_title: Option<String>,
    pub delete_url: Option<String>,
    pub href: Option<String>,
}

impl DeleteTrigger {
    pub fn from_element(element: &Element) -> Self {
        Self {
            task_title: dom::data_attr(element, "task-title"),
            delete_url: dom::data_attr(element, "delete-url"),
            href: element.get_attribute("href"),
        }
    }

    pub fn question(&self) -> String {
        delete_task_title(self.task_title.as_deref())
    }

    pub fn target(&self) -> Option<String> {
        delete_target(self.delete_url.clone(), self.href.clone())
    }
}

pub fn delete_task_title(task_title: Option<&str>) -> String {
    let subject = task_title
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(TASK_TITLE_FALLBACK);
    format!("Supprimer {subject} ?")
}

/// `data-delete-url` wins over the element's own `href`; empty values count as missing.
pub fn delete_target(delete_url: Option<String>, href: Option<String>) -> Option<String> {
    delete_url
        .filter(|u| !u.is_empty())
        .or_else(|| href.filter(|h| !h.is_empty()))
}

/// Waits for the user's answer and runs `action` only on confirm. Returns whether it ran.
pub async fn confirm_then<M, F>(
    dialog: &ConfirmDialog<M>,
    title: &str,
    message: &str,
    action: F,
) -> bool
where
    M: ModalSurface,
    F: FnOnce(),
{
    if dialog.confirm(title, message).await {
        action();
        true
    } else {
        false
    }
}

pub async fn confirm_submission<M, S>(
    dialog: &ConfirmDialog<M>,
    form: &S,
    title: &str,
    message: &str,
) -> bool
where
    M: ModalSurface,
    S: Submittable + ?Sized,
{
    confirm_then(dialog, title, message, || form.submit_now()).await
}

/// Asks about `trigger` and hands its target to `navigate` on confirm.
pub async fn confirm_delete<M, F>(
    dialog: &ConfirmDialog<M>,
    trigger: &DeleteTrigger,
    navigate: F,
) -> bool
where
    M: ModalSurface,
    F: FnOnce(&str),
{
    let target = trigger.target();
    confirm_then(dialog, &trigger.question(), TASK_DELETE_MESSAGE, || match target {
        Some(url) => navigate(&url),
        None => log::warn!("delete confirmed but trigger has no target url"),
    })
    .await
}

/// Makes the dialog answer the modal's buttons. Mounts the fallback modal when the
/// page has none. `None` if the buttons still cannot be found.
pub fn install_confirm_dialog() -> Option<Rc<DomConfirmDialog>> {
    modal::ensure_modal_present();
    let confirm = modal::confirm_button()?;
    let cancel = modal::cancel_button()?;

    let dialog = Rc::new(ConfirmDialog::new(DomModal));

    if claim(&confirm) {
        let dialog = dialog.clone();
        dom::listen(&confirm, "click", move |ev: Event| {
            ev.prevent_default();
            dialog.resolve(true);
        });
    }
    if claim(&cancel) {
        let dialog = dialog.clone();
        dom::listen(&cancel, "click", move |ev: Event| {
            ev.prevent_default();
            dialog.resolve(false);
        });
    }

    Some(dialog)
}

/// Suspends the form's submission until confirmed. A declined submission is dropped.
pub fn bind_form(
    dialog: &Rc<DomConfirmDialog>,
    form: HtmlFormElement,
    title: &str,
    message: &str,
) -> bool {
    if !claim::<Element>(&form) {
        return false;
    }
    let dialog = dialog.clone();
    let title = title.to_string();
    let message = message.to_string();
    let target = form.clone();
    dom::listen(&target, "submit", move |ev: Event| {
        ev.prevent_default();
        let dialog = dialog.clone();
        let form = form.clone();
        let title = title.clone();
        let message = message.clone();
        spawn_local(async move {
            confirm_submission(&dialog, &form, &title, &message).await;
        });
    });
    true
}

pub fn bind_button(
    dialog: &Rc<DomConfirmDialog>,
    button: Element,
    title: &str,
    message: &str,
    action: Rc<dyn Fn()>,
) -> bool {
    if !claim(&button) {
        return false;
    }
    let dialog = dialog.clone();
    let title = title.to_string();
    let message = message.to_string();
    dom::listen(&button, "click", move |ev: Event| {
        ev.prevent_default();
        let dialog = dialog.clone();
        let title = title.clone();
        let message = message.clone();
        let action = action.clone();
        spawn_local(async move {
            confirm_then(&dialog, &title, &message, || action()).await;
        });
    });
    true
}

pub fn handle_delete_form(
    dialog: &Rc<DomConfirmDialog>,
    selector: &str,
    title: &str,
    message: &str,
) -> bool {
    let form = dom::document()
        .and_then(|d| dom::query_one(&d, selector))
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok());
    match form {
        Some(form) => bind_form(dialog, form, title, message),
        None => false,
    }
}

pub fn handle_delete_button(
    dialog: &Rc<DomConfirmDialog>,
    selector: &str,
    action: Rc<dyn Fn()>,
    title: &str,
    message: &str,
) -> bool {
    match dom::document().and_then(|d| dom::query_one(&d, selector)) {
        Some(button) => bind_button(dialog, button, title, message, action),
        None => false,
    }
}

/// Attributes are read when clicked, so changes made after load are honoured.
/// The caller has already claimed `trigger`.
fn wire_delete_trigger(dialog: &Rc<DomConfirmDialog>, trigger: Element) {
    let dialog = dialog.clone();
    let target = trigger.clone();
    dom::listen(&target, "click", move |ev: Event| {
        ev.prevent_default();
        let details = DeleteTrigger::from_element(&trigger);
        let dialog = dialog.clone();
        spawn_local(async move {
            confirm_delete(&dialog, &details, dom::navigate_to).await;
        });
    });
}

/// Binds the project delete form and every task delete trigger on the page.
/// Already-bound elements are skipped, so calling this again is harmless.
pub fn setup_delete_confirmations(dialog: &Rc<DomConfirmDialog>) {
    handle_delete_form(
        dialog,
        PROJECT_DELETE_FORM_SELECTOR,
        PROJECT_DELETE_TITLE,
        PROJECT_DELETE_MESSAGE,
    );

    let Some(document) = dom::document() else {
        return;
    };
    let triggers = dom::query_all(&document, DELETE_TRIGGER_SELECTOR);
    let bound = bind_unbound(triggers, |trigger| wire_delete_trigger(dialog, trigger));
    log::debug!("{} delete triggers bound", bound);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::confirm::dialog::test_support::RecordingModal;
    use futures::executor::block_on;
    use futures::join;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct FakeElement {
        bound: Cell<bool>,
    }

    impl Bindable for FakeElement {
        fn is_bound(&self) -> bool {
            self.bound.get()
        }

        fn mark_bound(&self) {
            self.bound.set(true);
        }
    }

    #[derive(Default)]
    struct FakeForm {
        submissions: Cell<u32>,
    }

    impl Submittable for FakeForm {
        fn submit_now(&self) {
            self.submissions.set(self.submissions.get() + 1);
        }
    }

    fn fix_bug_trigger() -> DeleteTrigger {
        DeleteTrigger {
            task_title: Some("Fix bug".to_string()),
            delete_url: Some("/tasks/42/delete".to_string()),
            href: Some("#".to_string()),
        }
    }

    #[test]
    fn task_title_is_embedded_in_question() {
        assert_eq!(delete_task_title(Some("Fix bug")), "Supprimer Fix bug ?");
    }

    #[test]
    fn missing_task_title_falls_back() {
        assert_eq!(delete_task_title(None), "Supprimer cette tâche ?");
        assert_eq!(delete_task_title(Some("  ")), "Supprimer cette tâche ?");
    }

    #[test]
    fn delete_url_takes_precedence_over_href() {
        assert_eq!(
            delete_target(Some("/tasks/42/delete".into()), Some("#".into())),
            Some("/tasks/42/delete".to_string())
        );
        assert_eq!(
            delete_target(Some(String::new()), Some("/t/1".into())),
            Some("/t/1".to_string())
        );
        assert_eq!(delete_target(None, None), None);
    }

    #[test]
    fn second_binding_pass_wires_nothing() {
        let triggers: Vec<FakeElement> = (0..3).map(|_| FakeElement::default()).collect();
        let mut wired = 0;

        let first = bind_unbound(triggers.iter(), |_| wired += 1);
        let second = bind_unbound(triggers.iter(), |_| wired += 1);

        assert_eq!(first, 3);
        assert_eq!(second, 0);
        assert_eq!(wired, 3);
        assert!(triggers.iter().all(|t| t.is_bound()));
    }

    #[test]
    fn binding_pass_only_wires_new_elements() {
        let triggers: Vec<FakeElement> = (0..2).map(|_| FakeElement::default()).collect();
        triggers[0].mark_bound();

        assert_eq!(bind_unbound(triggers.iter(), |_| {}), 1);
        assert!(!claim(&triggers[1]));
    }

    #[test]
    fn confirming_delete_trigger_navigates_once() {
        let dialog = ConfirmDialog::new(RecordingModal::default());
        let visited = RefCell::new(Vec::new());
        let trigger = fix_bug_trigger();

        let (ran, ()) = block_on(async {
            join!(
                confirm_delete(&dialog, &trigger, |url| visited.borrow_mut().push(url.to_string())),
                async {
                    dialog.resolve(true);
                    dialog.resolve(true);
                }
            )
        });

        assert!(ran);
        assert_eq!(*visited.borrow(), vec!["/tasks/42/delete".to_string()]);
        assert_eq!(
            dialog.modal().shown.borrow()[0],
            ("Supprimer Fix bug ?".to_string(), TASK_DELETE_MESSAGE.to_string())
        );
        assert!(!dialog.modal().visible.get());
    }

    #[test]
    fn cancelling_delete_trigger_stays_on_page() {
        let dialog = ConfirmDialog::new(RecordingModal::default());
        let visited = RefCell::new(Vec::<String>::new());
        let trigger = fix_bug_trigger();

        let (ran, ()) = block_on(async {
            join!(
                confirm_delete(&dialog, &trigger, |url| visited.borrow_mut().push(url.to_string())),
                async { dialog.resolve(false) }
            )
        });

        assert!(!ran);
        assert!(visited.borrow().is_empty());
        assert!(!dialog.modal().visible.get());
    }

    #[test]
    fn confirmed_form_is_submitted_once() {
        let dialog = ConfirmDialog::new(RecordingModal::default());
        let form = FakeForm::default();

        let (ran, ()) = block_on(async {
            join!(
                confirm_submission(&dialog, &form, PROJECT_DELETE_TITLE, PROJECT_DELETE_MESSAGE),
                async { dialog.resolve(true) }
            )
        });

        assert!(ran);
        assert_eq!(form.submissions.get(), 1);
        assert_eq!(dialog.modal().shown.borrow()[0].0, PROJECT_DELETE_TITLE);
    }

    #[test]
    fn declined_form_is_never_submitted() {
        let dialog = ConfirmDialog::new(RecordingModal::default());
        let form = FakeForm::default();

        let (ran, ()) = block_on(async {
            join!(
                confirm_submission(&dialog, &form, PROJECT_DELETE_TITLE, PROJECT_DELETE_MESSAGE),
                async { dialog.resolve(false) }
            )
        });

        assert!(!ran);
        assert_eq!(form.submissions.get(), 0);
        assert!(!dialog.modal().visible.get());
    }

    #[test]
    fn cancelling_never_runs_action() {
        let dialog = ConfirmDialog::new(RecordingModal::default());
        let runs = Cell::new(0);

        let (ran, ()) = block_on(async {
            join!(
                confirm_then(&dialog, PROJECT_DELETE_TITLE, PROJECT_DELETE_MESSAGE, || {
                    runs.set(runs.get() + 1)
                }),
                async { dialog.resolve(false) }
            )
        });

        assert!(!ran);
        assert_eq!(runs.get(), 0);
        assert!(!dialog.modal().visible.get());
    }
}
