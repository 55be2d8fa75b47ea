use crate::core::mobile_menu::MobileMenu;
use crate::domain::model::ScrollBehavior;
use crate::domain::ports::Dom;
use std::sync::Arc;

/// Smooth scrolling for in-page `#fragment` links.
pub struct NavigationController<D: Dom> {
    dom: Arc<D>,
    menu: MobileMenu<D>,
    scroll_offset: f64,
}

impl<D: Dom> NavigationController<D> {
    pub fn new(dom: Arc<D>, menu: MobileMenu<D>, scroll_offset: f64) -> Self {
        Self {
            dom,
            menu,
            scroll_offset,
        }
    }

    /// Handles a click on a link with the given `href`.
    ///
    /// Returns whether the browser's default jump is suppressed, which is the
    /// case for every same-page link even when its target does not exist.
    pub fn on_anchor_click(&self, href: &str) -> bool {
        let Some(fragment) = href.strip_prefix('#') else {
            return false;
        };

        let target = if fragment.is_empty() {
            None
        } else {
            self.dom.element_by_id(fragment)
        };

        let Some(target) = target else {
            tracing::debug!("No scroll target for {}", href);
            return true;
        };

        let top = self.dom.offset_top(target) - self.scroll_offset;
        self.dom.scroll_to(top, ScrollBehavior::Smooth);

        if self.menu.is_open() {
            self.menu.close();
        }

        true
    }
}
