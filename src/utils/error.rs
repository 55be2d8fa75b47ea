use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Webhook request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Enquiry endpoint is not configured")]
    EndpointNotConfigured,

    #[error("Required page element not found: {selector}")]
    MissingElement { selector: String },

    #[error("Validation error on '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("Webhook rejected the enquiry with status '{status}'")]
    Rejected { status: String },

    #[error("A submission is already in progress")]
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Validation,
    Submission,
    Page,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::Config { .. }
            | SiteError::InvalidConfigValue { .. }
            | SiteError::EndpointNotConfigured
            | SiteError::Toml(_)
            | SiteError::Io(_) => ErrorCategory::Configuration,
            SiteError::Validation { .. } => ErrorCategory::Validation,
            SiteError::Http(_) | SiteError::Serialization(_) | SiteError::Rejected { .. } => {
                ErrorCategory::Submission
            }
            SiteError::MissingElement { .. } | SiteError::Busy => ErrorCategory::Page,
        }
    }

    /// The text shown in the form message area. Causes stay in the logs.
    pub fn user_friendly_message(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => "Google Sheet URL not configured!",
            ErrorCategory::Validation => "Please enter valid form details",
            ErrorCategory::Submission => "Submission failed. Try again later.",
            ErrorCategory::Page => match self {
                SiteError::Busy => "Your enquiry is still being sent",
                _ => "The page could not be prepared",
            },
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SiteError::EndpointNotConfigured => {
                "Set [endpoint].url in the site config or pass --endpoint".to_string()
            }
            SiteError::Config { .. } | SiteError::InvalidConfigValue { .. } | SiteError::Toml(_) => {
                "Check the site configuration file".to_string()
            }
            SiteError::Io(_) => "Check that the configuration file exists and is readable".to_string(),
            SiteError::Validation { field, .. } => format!("Correct the '{}' field and submit again", field),
            SiteError::Http(_) | SiteError::Serialization(_) | SiteError::Rejected { .. } => {
                "Try again later; the spreadsheet webhook did not accept the enquiry".to_string()
            }
            SiteError::MissingElement { selector } => {
                format!("Make sure the page contains '{}'", selector)
            }
            SiteError::Busy => "Wait for the current submission to finish".to_string(),
        }
    }

    pub fn is_recoverable(&self) -> bool {
        !matches!(self, SiteError::MissingElement { .. })
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
