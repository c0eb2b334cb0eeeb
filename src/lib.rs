pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig};

pub use crate::core::emails::{dedupe_emails, domain_counts, first_with_domain};
pub use crate::core::{engine::RosterEngine, pipeline::RosterPipeline};
pub use crate::domain::model::{DomainCount, FirstMatch, Roster, RosterReport};
pub use crate::utils::error::{Result, RosterError};
