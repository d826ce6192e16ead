pub mod config;
pub mod error;
pub mod model;
pub mod queries;
pub mod repository;
pub mod schema;

// Re-export commonly used types
pub use config::StoreConfig;
pub use error::{RowError, StoreError};
pub use model::*;
pub use repository::MoodLog;
pub use schema::{COLUMNS, TIMESTAMP_FORMAT};
