pub mod task;

pub use task::{MoveTaskRequest, MoveTaskResponse, TaskStatus};
