use crate::domain::model::ElementHandle;
use crate::domain::ports::Dom;
use std::sync::Arc;

pub const ACTIVE_CLASS: &str = "active";

/// The hamburger button and the navigation panel it opens.
pub struct MobileMenu<D: Dom> {
    dom: Arc<D>,
    toggle: ElementHandle,
    panel: ElementHandle,
}

impl<D: Dom> Clone for MobileMenu<D> {
    fn clone(&self) -> Self {
        Self {
            dom: Arc::clone(&self.dom),
            toggle: self.toggle,
            panel: self.panel,
        }
    }
}

impl<D: Dom> MobileMenu<D> {
    pub fn new(dom: Arc<D>, toggle: ElementHandle, panel: ElementHandle) -> Self {
        Self { dom, toggle, panel }
    }

    /// Flips the open state of the button and the panel together.
    pub fn toggle(&self) -> bool {
        self.dom.toggle_class(self.toggle, ACTIVE_CLASS);
        let open = self.dom.toggle_class(self.panel, ACTIVE_CLASS);
        tracing::debug!(open, "Mobile menu toggled");
        open
    }

    pub fn is_open(&self) -> bool {
        self.dom.has_class(self.panel, ACTIVE_CLASS)
    }

    pub fn close(&self) {
        self.dom.remove_class(self.panel, ACTIVE_CLASS);
        self.dom.remove_class(self.toggle, ACTIVE_CLASS);
    }
}
