//! CLI subcommands.

use partscare_core::PartscareConfig;

pub mod batch;
pub mod fleet;
pub mod process;

/// Load configuration from `--config`, falling back to defaults.
pub(crate) fn load_config(path: Option<&str>) -> anyhow::Result<PartscareConfig> {
    match path {
        Some(p) => Ok(PartscareConfig::from_file(std::path::Path::new(p))?),
        None => Ok(PartscareConfig::default()),
    }
}
