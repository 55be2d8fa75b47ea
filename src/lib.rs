pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{MemoryDom, WebhookClient};
pub use crate::config::SiteConfig;
pub use crate::core::{DispatchOutcome, PageEvent, Site};
pub use crate::domain::model::{EnquiryRecord, FormState};
pub use crate::utils::error::{Result, SiteError};
