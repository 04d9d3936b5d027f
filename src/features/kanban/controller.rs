use std::cell::RefCell;

use crate::core::error::UiError;
use crate::core::models::TaskStatus;
use crate::core::services::TaskApi;
use crate::features::notifications::NotificationKind;

use super::surface::BoardSurface;

pub const MOVE_SUCCESS_MESSAGE: &str = "Task moved successfully";
pub const MOVE_REJECTED_MESSAGE: &str = "Failed to move task";
pub const MOVE_ERROR_MESSAGE: &str = "Error moving task";

/// A card that has already been moved on screen and still has to be confirmed
/// by the server. `task_id` is `None` when the card carries no id; the commit
/// then fails without a request.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingMove<C> {
    pub card: C,
    pub task_id: Option<String>,
    pub status: TaskStatus,
}

impl<C> PendingMove<C> {
    fn task_label(&self) -> &str {
        self.task_id.as_deref().unwrap_or("<no id>")
    }
}

/// Drag-and-drop state for one board. Holds at most one dragged card at a time.
pub struct BoardController<S: BoardSurface, A: TaskApi> {
    surface: S,
    api: A,
    dragged: RefCell<Option<S::Card>>,
}

impl<S: BoardSurface, A: TaskApi> BoardController<S, A> {
    pub fn new(surface: S, api: A) -> Self {
        Self {
            surface,
            api,
            dragged: RefCell::new(None),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn dragged_card(&self) -> Option<S::Card> {
        self.dragged.borrow().clone()
    }

    pub fn drag_start(&self, card: S::Card) {
        // Last writer wins; a card left over from a lost dragend loses its marker.
        if let Some(previous) = self.dragged.replace(Some(card.clone())) {
            self.surface.set_dragging(&previous, false);
        }
        self.surface.set_dragging(&card, true);
    }

    /// Always clears, whether or not the gesture ended on a column.
    pub fn drag_end(&self, card: &S::Card) {
        self.surface.set_dragging(card, false);
        let previous = self.dragged.borrow_mut().take();
        if let Some(previous) = previous {
            self.surface.set_dragging(&previous, false);
        }
    }

    pub fn drag_over(&self, column: &S::Column) {
        self.surface.set_drop_target(column, true);
    }

    pub fn drag_leave(&self, column: &S::Column) {
        self.surface.set_drop_target(column, false);
    }

    /// Synchronous half of a drop: clears the target marker and, when a card is
    /// being dragged, moves it into the column before the server has answered.
    /// Whether the column's status is acceptable is the server's call.
    pub fn drop_on(&self, column: &S::Column) -> Option<PendingMove<S::Card>> {
        self.surface.set_drop_target(column, false);

        let card = self.dragged.borrow().clone()?;
        let task_id = self.surface.task_id(&card);
        let status = self
            .surface
            .column_status(column)
            .map(|raw| TaskStatus::from(raw.as_str()))
            .unwrap_or_else(|| TaskStatus::Other(String::new()));
        if !status.is_known() {
            log::warn!("drop on column with unrecognized status \"{}\"", status);
        }

        self.surface.move_card(&card, column);

        let pending = PendingMove {
            card,
            task_id,
            status,
        };
        log::debug!("task {} moved to {} locally", pending.task_label(), pending.status);
        Some(pending)
    }

    /// Asynchronous half of a drop. Any failure resyncs the whole board; there is
    /// no per-card undo.
    pub async fn commit_move(&self, pending: PendingMove<S::Card>) -> Result<(), UiError> {
        let outcome = match pending.task_id.as_deref() {
            Some(task_id) => self.api.move_task(task_id, &pending.status).await,
            None => Err(UiError::Dom("dropped card has no task id".to_string())),
        };

        match outcome {
            Ok(resp) if resp.success => {
                log::info!("task {} moved to {}", pending.task_label(), pending.status);
                self.surface.notify(NotificationKind::Success, MOVE_SUCCESS_MESSAGE);
                self.surface.refresh_column_counts();
                Ok(())
            }
            Ok(resp) => {
                let err = UiError::Rejected(resp.error);
                log::warn!("move of task {} failed: {}", pending.task_label(), err);
                self.surface.notify(NotificationKind::Error, MOVE_REJECTED_MESSAGE);
                self.surface.resync();
                Err(err)
            }
            Err(err) => {
                log::error!("Error moving task {}: {}", pending.task_label(), err);
                self.surface.notify(NotificationKind::Error, MOVE_ERROR_MESSAGE);
                self.surface.resync();
                Err(err)
            }
        }
    }

    /// Whole drop handling; `None` when nothing was moved.
    pub async fn handle_drop(&self, column: &S::Column) -> Option<Result<(), UiError>> {
        let pending = self.drop_on(column)?;
        Some(self.commit_move(pending).await)
    }

    /// Double-click hook. No editor exists yet; only the request is logged.
    pub fn edit_task(&self, card: &S::Card) {
        match self.surface.task_id(card) {
            Some(id) => log::info!("Edit task: {}", id),
            None => log::info!("Edit task: <no id>"),
        }
    }
}
