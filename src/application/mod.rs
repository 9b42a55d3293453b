//! Application layer - Use cases and orchestration

pub mod add_entry;
pub mod graph;
pub mod history;
pub mod init;
pub mod manage_settings;
pub mod remove_entry;
pub mod summary;

pub use add_entry::AddEntryService;
pub use graph::{GraphService, GraphView};
pub use history::{HistoryRow, HistoryService};
pub use init::InitService;
pub use manage_settings::SettingsService;
pub use remove_entry::RemoveEntryService;
pub use summary::{Summary, SummaryService};
