pub mod emails;
pub mod engine;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{DomainCount, FirstMatch, Roster, RosterReport};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
