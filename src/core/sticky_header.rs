use crate::domain::model::ElementHandle;
use crate::domain::ports::Dom;
use std::sync::Arc;

pub const SCROLLED_CLASS: &str = "scrolled";

pub struct StickyHeader<D: Dom> {
    dom: Arc<D>,
    navbar: ElementHandle,
    threshold: f64,
}

impl<D: Dom> StickyHeader<D> {
    pub fn new(dom: Arc<D>, navbar: ElementHandle, threshold: f64) -> Self {
        Self {
            dom,
            navbar,
            threshold,
        }
    }

    /// Derives the header style from the scroll offset alone.
    pub fn on_scroll(&self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > self.threshold;
        if scrolled {
            self.dom.add_class(self.navbar, SCROLLED_CLASS);
        } else {
            self.dom.remove_class(self.navbar, SCROLLED_CLASS);
        }
        scrolled
    }
}
