use crate::domain::model::EnquiryRecord;
use crate::utils::error::{Result, SiteError};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// A pattern rule applied to a single form field when it is non-empty.
pub struct FieldRule {
    pub field: &'static str,
    pub pattern: &'static LazyLock<Regex>,
    pub message: &'static str,
}

static FULL_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]{2,50}$").expect("valid fullName pattern"));
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10,12}$").expect("valid phone pattern"));
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

pub static FIELD_RULES: [FieldRule; 3] = [
    FieldRule {
        field: "fullName",
        pattern: &FULL_NAME_PATTERN,
        message: "Please enter a valid name",
    },
    FieldRule {
        field: "phone",
        pattern: &PHONE_PATTERN,
        message: "Please enter a valid phone number",
    },
    FieldRule {
        field: "email",
        pattern: &EMAIL_PATTERN,
        message: "Please enter a valid email address",
    },
];

pub const REQUIRED_FIELDS: [&str; 3] = ["fullName", "phone", "instrument"];

/// Fields without a rule always pass.
pub fn validate_field(field_name: &str, value: &str) -> bool {
    FIELD_RULES
        .iter()
        .find(|rule| rule.field == field_name)
        .map_or(true, |rule| rule.pattern.is_match(value))
}

impl Validate for EnquiryRecord {
    fn validate(&self) -> Result<()> {
        for rule in &FIELD_RULES {
            let value = self.field(rule.field).unwrap_or_default();
            if !value.is_empty() && !rule.pattern.is_match(value) {
                return Err(SiteError::Validation {
                    field: rule.field.to_string(),
                    message: rule.message.to_string(),
                });
            }
        }

        for field in REQUIRED_FIELDS {
            if self.field(field).unwrap_or_default().is_empty() {
                return Err(SiteError::Validation {
                    field: field.to_string(),
                    message: "This field is required".to_string(),
                });
            }
        }

        Ok(())
    }
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SiteError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SiteError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SiteError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(SiteError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SiteError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // Written as a negated containment check so NaN is rejected.
    if !(value >= min && value <= max) {
        return Err(SiteError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
