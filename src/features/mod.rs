pub mod confirm;
pub mod kanban;
pub mod notifications;
