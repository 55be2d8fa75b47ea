use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Names of the five enquiry form inputs, in page order.
pub const FORM_FIELDS: [&str; 5] = ["fullName", "phone", "email", "instrument", "message"];

/// The payload sent to the spreadsheet webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryRecord {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub instrument: String,
    pub message: String,
    pub timestamp: String,
}

impl EnquiryRecord {
    /// Builds a record from raw input values, trimming each one and stamping
    /// the current UTC time. `read` is called once per name in [`FORM_FIELDS`].
    pub fn collect<F>(mut read: F) -> Self
    where
        F: FnMut(&str) -> String,
    {
        let mut value = |name: &str| read(name).trim().to_string();
        Self {
            full_name: value("fullName"),
            phone: value("phone"),
            email: value("email"),
            instrument: value("instrument"),
            message: value("message"),
            timestamp: iso_timestamp(),
        }
    }

    /// Looks a value up by its form field name.
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "fullName" => Some(&self.full_name),
            "phone" => Some(&self.phone),
            "email" => Some(&self.email),
            "instrument" => Some(&self.instrument),
            "message" => Some(&self.message),
            "timestamp" => Some(&self.timestamp),
            _ => None,
        }
    }
}

/// `YYYY-MM-DDTHH:MM:SS.sssZ`
pub fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
    Success,
    Failure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn css_class(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBox {
    pub top: f64,
    pub height: f64,
}

/// Opaque handle to an element owned by a [`crate::domain::ports::Dom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementHandle(pub usize);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub target: ElementHandle,
    pub is_intersecting: bool,
    pub ratio: f64,
}

/// Reply body of the spreadsheet webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    #[serde(default)]
    pub status: String,
}

impl SubmissionReceipt {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}
