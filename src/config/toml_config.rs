use crate::config::GOOGLE_SCRIPT_URL;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Site settings. Every section and field falls back to the page's constants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub endpoint: EndpointConfig,
    pub navigation: NavigationConfig,
    pub header: HeaderConfig,
    pub reveal: RevealConfig,
    pub form: FormConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub url: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: GOOGLE_SCRIPT_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Distance kept between the viewport top and a scrolled-to section.
    pub scroll_offset: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self { scroll_offset: 80.0 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub sticky_threshold: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            sticky_threshold: 100.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    /// How far the bottom edge of the observed root is pulled up.
    pub bottom_margin: f64,
    pub selectors: Vec<String>,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin: 100.0,
            selectors: ["feature-card", "course-card", "testimonial-card", "contact-item"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub success_lock_ms: u64,
    pub message_ttl_ms: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            success_lock_ms: 2000,
            message_ttl_ms: 5000,
        }
    }
}

impl SiteConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the value of the environment variable `VAR`.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SiteError::Config {
            message: e.to_string(),
        })?;

        let mut missing = Vec::new();
        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| {
                missing.push(var_name.to_string());
                String::new()
            })
        });

        if !missing.is_empty() {
            return Err(SiteError::Config {
                message: format!("Undefined environment variables: {}", missing.join(", ")),
            });
        }

        Ok(result.into_owned())
    }

    /// True once a real webhook URL has replaced the placeholder.
    pub fn endpoint_configured(&self) -> bool {
        is_endpoint_configured(&self.endpoint.url)
    }

    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint.url = url.into();
        self
    }
}

pub fn is_endpoint_configured(url: &str) -> bool {
    !url.is_empty() && !url.contains("PASTE")
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        if self.endpoint_configured() {
            validation::validate_url("endpoint.url", &self.endpoint.url)?;
        }
        validation::validate_range("navigation.scroll_offset", self.navigation.scroll_offset, 0.0, 10_000.0)?;
        validation::validate_range("header.sticky_threshold", self.header.sticky_threshold, 0.0, 100_000.0)?;
        validation::validate_range("reveal.threshold", self.reveal.threshold, 0.0, 1.0)?;
        validation::validate_range("reveal.bottom_margin", self.reveal.bottom_margin, 0.0, 10_000.0)?;
        for selector in &self.reveal.selectors {
            validation::validate_non_empty_string("reveal.selectors", selector)?;
        }
        validation::validate_positive_number("form.success_lock_ms", self.form.success_lock_ms, 1)?;
        validation::validate_positive_number("form.message_ttl_ms", self.form.message_ttl_ms, 1)?;
        Ok(())
    }
}
