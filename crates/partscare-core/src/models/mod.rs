//! Data models: canonical records, fleet records, documents, configuration.

pub mod config;
pub mod document;
pub mod fleet;
pub mod record;

pub use config::PartscareConfig;
pub use document::Document;
pub use fleet::{FleetRecord, YearCell};
pub use record::{PartialRecord, Record};
