//! Domain layer - Weight entries, profile settings and derived statistics

pub mod date_ref;
pub mod entry;
pub mod format;
pub mod graph;
pub mod settings;
pub mod store;
pub mod unit;
pub mod window;

pub use date_ref::DateReference;
pub use entry::WeightEntry;
pub use graph::{Canvas, GraphLayout, GraphPoint, Padding};
pub use settings::{Gender, Settings};
pub use store::WeightStore;
pub use unit::UnitSystem;
pub use window::TimeWindow;
