pub mod types;
pub mod settings;
pub mod error;
pub mod events;
pub mod emit;


// Re-export for convenience
pub use error::{AppError, AppResult};
