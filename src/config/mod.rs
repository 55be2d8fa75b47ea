#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::SiteConfig;

/// Deployed Google Apps Script web app that appends enquiries to the sheet.
pub const GOOGLE_SCRIPT_URL: &str = "https://script.google.com/macros/s/AKfycbxtRK8JQDtCJDFYqqgbQFc4onifH90iQjwuSSeQigKD4XY3PduHXI4IBZj2mEzv5-g3/exec";
