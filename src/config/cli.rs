use crate::config::SiteConfig;
use crate::utils::error::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "harmony-academy")]
#[command(about = "Submit a Harmony Music Academy enquiry through the landing page form")]
pub struct CliConfig {
    #[arg(long, help = "Site configuration file (TOML)")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Override the enquiry webhook URL")]
    pub endpoint: Option<String>,

    #[arg(long)]
    pub full_name: String,

    #[arg(long)]
    pub phone: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long)]
    pub instrument: String,

    #[arg(long, default_value = "")]
    pub message: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Loads the site config file if given, then applies command-line overrides.
    pub fn site_config(&self) -> Result<SiteConfig> {
        let config = match &self.config {
            Some(path) => SiteConfig::from_file(path)?,
            None => SiteConfig::default(),
        };

        Ok(match &self.endpoint {
            Some(url) => config.with_endpoint(url.clone()),
            None => config,
        })
    }

    /// Input values keyed by form field name.
    pub fn form_values(&self) -> [(&'static str, &str); 5] {
        [
            ("fullName", self.full_name.as_str()),
            ("phone", self.phone.as_str()),
            ("email", self.email.as_str()),
            ("instrument", self.instrument.as_str()),
            ("message", self.message.as_str()),
        ]
    }
}
