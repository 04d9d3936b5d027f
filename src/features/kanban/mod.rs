pub mod bindings;
pub mod controller;
pub mod surface;

pub use bindings::{install_board, DomBoardController};
pub use controller::{BoardController, PendingMove};
pub use surface::{BoardSurface, DomBoardSurface};
