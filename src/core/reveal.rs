//! Fade-and-slide cards into place as they scroll into view.
//!
//! [`IntersectionWatcher`] reproduces the browser's intersection bookkeeping:
//! an element is reported only when its intersecting state changes, measured
//! against a viewport whose bottom edge is pulled up by a margin.
//! [`RevealAnimator`] owns the cards and applies the settled style to every
//! element reported as intersecting.

use crate::domain::model::{ElementBox, ElementHandle, IntersectionEntry, Viewport};
use crate::domain::ports::Dom;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

const HIDDEN_STYLE: [(&str, &str); 3] = [
    ("opacity", "0"),
    ("transform", "translateY(30px)"),
    ("transition", "opacity 0.6s ease-out, transform 0.6s ease-out"),
];
const SETTLED_STYLE: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0)")];

#[derive(Debug, Clone)]
pub struct IntersectionWatcher {
    threshold: f64,
    bottom_margin: f64,
    last: HashMap<ElementHandle, bool>,
}

impl IntersectionWatcher {
    pub fn new(threshold: f64, bottom_margin: f64) -> Self {
        Self {
            threshold,
            bottom_margin,
            last: HashMap::new(),
        }
    }

    /// Fraction of `element` inside the margin-adjusted `viewport`.
    pub fn ratio(&self, viewport: Viewport, element: ElementBox) -> f64 {
        let root_top = viewport.scroll_y;
        let root_bottom = viewport.scroll_y + viewport.height - self.bottom_margin;
        let overlap = (element.top + element.height).min(root_bottom) - element.top.max(root_top);

        if overlap < 0.0 {
            return 0.0;
        }
        if element.height <= 0.0 {
            // A zero-height element counts as fully visible when it sits inside the root.
            return 1.0;
        }
        (overlap / element.height).min(1.0)
    }

    fn is_intersecting(&self, viewport: Viewport, element: ElementBox, ratio: f64) -> bool {
        let inside = element.top < viewport.scroll_y + viewport.height - self.bottom_margin
            && element.top + element.height > viewport.scroll_y;
        inside && ratio >= self.threshold
    }

    /// Entries for the elements whose intersecting state changed since the
    /// previous call. An element's first observation is always reported.
    pub fn observe(
        &mut self,
        viewport: Viewport,
        elements: impl IntoIterator<Item = (ElementHandle, ElementBox)>,
    ) -> Vec<IntersectionEntry> {
        let mut entries = Vec::new();
        for (target, element) in elements {
            let ratio = self.ratio(viewport, element);
            let is_intersecting = self.is_intersecting(viewport, element, ratio);
            if self.last.insert(target, is_intersecting) != Some(is_intersecting) {
                entries.push(IntersectionEntry {
                    target,
                    is_intersecting,
                    ratio,
                });
            }
        }
        entries
    }
}

pub struct RevealAnimator<D: Dom> {
    dom: Arc<D>,
    targets: Vec<ElementHandle>,
    watcher: Mutex<IntersectionWatcher>,
}

impl<D: Dom> RevealAnimator<D> {
    pub fn new(dom: Arc<D>, selectors: &[&str], threshold: f64, bottom_margin: f64) -> Self {
        let targets = dom.query_selector_all(selectors);
        Self {
            dom,
            targets,
            watcher: Mutex::new(IntersectionWatcher::new(threshold, bottom_margin)),
        }
    }

    pub fn targets(&self) -> &[ElementHandle] {
        &self.targets
    }

    /// Puts every card in its hidden, offset resting style.
    pub fn prepare(&self) {
        for &el in &self.targets {
            for (property, value) in HIDDEN_STYLE {
                self.dom.set_style(el, property, value);
            }
        }
        tracing::debug!("Prepared {} cards for reveal", self.targets.len());
    }

    /// Applies the settled style to intersecting entries and returns how many were revealed.
    pub fn on_intersection(&self, entries: &[IntersectionEntry]) -> usize {
        let mut revealed = 0;
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            for (property, value) in SETTLED_STYLE {
                self.dom.set_style(entry.target, property, value);
            }
            revealed += 1;
        }
        revealed
    }

    /// Measures the cards against the current viewport and reveals those that crossed in.
    pub fn on_viewport_change(&self) -> usize {
        let viewport = self.dom.viewport();
        let boxes = self.targets.iter().map(|&el| {
            (
                el,
                ElementBox {
                    top: self.dom.offset_top(el),
                    height: self.dom.offset_height(el),
                },
            )
        });

        let entries = self
            .watcher
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .observe(viewport, boxes);
        self.on_intersection(&entries)
    }
}
