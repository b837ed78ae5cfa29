pub mod models;
pub mod config;
pub mod error;
pub mod backend_service;
pub mod picker;
pub mod view;

pub use models::*;
pub use config::ClientConfig;
pub use error::{BackendError, ConfigError, PickError, ViewError};
pub use backend_service::{ChatbotBackend, HttpBackend};
pub use picker::pick_pdf;
pub use view::{ChatbotView, Status, ViewState};
