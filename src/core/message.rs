use crate::domain::model::{ElementHandle, MessageKind};
use crate::domain::ports::Dom;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::AbortHandle;

pub const BASE_CLASS: &str = "form-message";

/// The status line under the enquiry form.
///
/// Each message fades after `ttl`. Showing a new message cancels the previous
/// message's pending clear, so only the latest timer can hide the area.
pub struct MessageArea<D: Dom> {
    dom: Arc<D>,
    element: ElementHandle,
    ttl: Duration,
    pending_clear: Mutex<Option<AbortHandle>>,
}

impl<D: Dom> MessageArea<D> {
    pub fn new(dom: Arc<D>, element: ElementHandle, ttl: Duration) -> Self {
        Self {
            dom,
            element,
            ttl,
            pending_clear: Mutex::new(None),
        }
    }

    /// Must be called from within a tokio runtime.
    pub fn show(&self, text: &str, kind: MessageKind) {
        self.dom.set_text(self.element, text);
        self.dom
            .set_class_name(self.element, &format!("{} {}", BASE_CLASS, kind.css_class()));

        let dom = Arc::clone(&self.dom);
        let element = self.element;
        let ttl = self.ttl;
        let clear = tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            dom.set_class_name(element, BASE_CLASS);
        });

        let previous = self
            .pending_clear
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(clear.abort_handle());
        if let Some(previous) = previous {
            previous.abort();
        }
    }
}

impl<D: Dom> Drop for MessageArea<D> {
    fn drop(&mut self) {
        if let Some(pending) = self
            .pending_clear
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            pending.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryDom;

    fn area() -> (Arc<MemoryDom>, ElementHandle, MessageArea<MemoryDom>) {
        let dom = Arc::new(MemoryDom::landing_page());
        let el = dom.element_by_id("formMessage").unwrap();
        let area = MessageArea::new(Arc::clone(&dom), el, Duration::from_millis(5000));
        (dom, el, area)
    }

    #[tokio::test(start_paused = true)]
    async fn test_message_clears_after_ttl() {
        let (dom, el, area) = area();

        area.show("Enquiry sent successfully ✅", MessageKind::Success);
        assert_eq!(dom.text(el), "Enquiry sent successfully ✅");
        assert_eq!(dom.classes(el), vec!["form-message", "success"]);

        tokio::time::sleep(Duration::from_millis(4999)).await;
        assert_eq!(dom.classes(el), vec!["form-message", "success"]);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(dom.classes(el), vec!["form-message"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_message_resets_timer() {
        let (dom, el, area) = area();

        area.show("Please enter valid form details", MessageKind::Error);
        tokio::time::sleep(Duration::from_millis(3000)).await;
        area.show("Submission failed. Try again later.", MessageKind::Error);

        // The first message's timer would have fired here.
        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert_eq!(dom.classes(el), vec!["form-message", "error"]);

        tokio::time::sleep(Duration::from_millis(2600)).await;
        assert_eq!(dom.classes(el), vec!["form-message"]);
        assert_eq!(dom.text(el), "Submission failed. Try again later.");
    }
}
