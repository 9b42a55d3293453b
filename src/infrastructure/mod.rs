//! Infrastructure layer - Persistence and process setup

pub mod config;
pub mod logging;
pub mod repository;

pub use repository::{FileSystemRepository, TrackerRepository};
