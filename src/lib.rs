pub mod api;
pub mod config;
pub mod error;
pub mod food;
pub mod llm;
pub mod providers;

// Re-export commonly used items
pub use api::create_api;
pub use config::ProviderConfig;
pub use error::{ApiError, ApiResult};
pub use providers::{ChatProvider, GroqProvider};
