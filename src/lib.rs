pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod resources;
pub mod types;

pub use error::ProjectionError;
pub use types::Relation;
