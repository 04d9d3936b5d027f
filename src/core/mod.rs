pub mod config;
pub mod dom;
pub mod error;
pub mod models;
pub mod runtime;
pub mod services;

pub use config::UiConfig;
pub use error::UiError;
