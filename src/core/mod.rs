pub mod enquiry;
pub mod message;
pub mod mobile_menu;
pub mod navigation;
pub mod reveal;
pub mod site;
pub mod sticky_header;

pub use crate::domain::model::{EnquiryRecord, FormState, MessageKind};
pub use crate::domain::ports::{Dom, EnquirySink};
pub use crate::utils::error::Result;
pub use site::{DispatchOutcome, PageEvent, Site};
