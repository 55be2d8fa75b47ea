use crate::domain::model::{
    ElementHandle, EnquiryRecord, ScrollBehavior, SubmissionReceipt, Viewport,
};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The page the components are bound to.
///
/// Methods take `&self`; implementations own their mutability so handlers can
/// share one page across timers and the in-flight submission.
pub trait Dom: Send + Sync + 'static {
    fn element_by_id(&self, id: &str) -> Option<ElementHandle>;
    /// First element carrying `class`.
    fn query_selector(&self, class: &str) -> Option<ElementHandle>;
    /// Every element carrying any of `classes`, in document order.
    fn query_selector_all(&self, classes: &[&str]) -> Vec<ElementHandle>;
    /// Every link whose `href` starts with `#`, paired with that `href`.
    fn anchors(&self) -> Vec<(ElementHandle, String)>;

    fn has_class(&self, el: ElementHandle, class: &str) -> bool;
    fn add_class(&self, el: ElementHandle, class: &str);
    fn remove_class(&self, el: ElementHandle, class: &str);
    /// Returns whether the class is present afterwards.
    fn toggle_class(&self, el: ElementHandle, class: &str) -> bool;
    /// Replaces the whole class list with the whitespace-separated `classes`.
    fn set_class_name(&self, el: ElementHandle, classes: &str);

    fn set_style(&self, el: ElementHandle, property: &str, value: &str);
    fn set_text(&self, el: ElementHandle, text: &str);

    fn offset_top(&self, el: ElementHandle) -> f64;
    fn offset_height(&self, el: ElementHandle) -> f64;
    fn viewport(&self) -> Viewport;
    fn scroll_to(&self, top: f64, behavior: ScrollBehavior);

    /// Raw value of the named input inside `form`; empty when absent.
    fn field_value(&self, form: ElementHandle, name: &str) -> String;
    fn reset_form(&self, form: ElementHandle);

    fn set_disabled(&self, el: ElementHandle, disabled: bool);
    fn is_disabled(&self, el: ElementHandle) -> bool;
}

/// Destination for a validated enquiry.
#[async_trait]
pub trait EnquirySink: Send + Sync {
    async fn submit(&self, record: &EnquiryRecord) -> Result<SubmissionReceipt>;
}
