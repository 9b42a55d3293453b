//! wtrack - Personal weight tracker
//!
//! Logs dated weight measurements and derives BMI, weekly and total change,
//! and a windowed trend graph from them.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::WtrackError;
