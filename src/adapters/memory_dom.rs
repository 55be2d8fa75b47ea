//! In-memory page used when running headless and in tests.

use crate::domain::model::{ElementHandle, ScrollBehavior, Viewport, FORM_FIELDS};
use crate::domain::ports::Dom;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A single node of the in-memory page.
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub href: Option<String>,
    pub name: Option<String>,
    pub value: String,
    pub text: String,
    pub style: BTreeMap<String, String>,
    pub parent: Option<ElementHandle>,
    pub top: f64,
    pub height: f64,
    pub disabled: bool,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn within(mut self, parent: ElementHandle) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn at(mut self, top: f64, height: f64) -> Self {
        self.top = top;
        self.height = height;
        self
    }
}

#[derive(Debug)]
struct Inner {
    elements: Vec<Element>,
    viewport: Viewport,
    scrolls: Vec<(f64, ScrollBehavior)>,
}

#[derive(Debug)]
pub struct MemoryDom {
    inner: Mutex<Inner>,
}

impl MemoryDom {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            inner: Mutex::new(Inner {
                elements: Vec::new(),
                viewport: Viewport {
                    scroll_y: 0.0,
                    height: viewport_height,
                },
                scrolls: Vec::new(),
            }),
        }
    }

    /// The academy landing page: header, menu, sections, cards and the enquiry form.
    pub fn landing_page() -> Self {
        let dom = Self::new(800.0);

        dom.insert(Element::new("nav").id("navbar").class("navbar").at(0.0, 80.0));
        let links = dom.insert(Element::new("ul").class("nav-links").at(0.0, 80.0));
        for target in ["#about", "#courses", "#testimonials", "#contact"] {
            dom.insert(Element::new("a").href(target).within(links));
        }
        dom.insert(Element::new("button").class("mobile-toggle").at(0.0, 40.0));

        dom.insert(Element::new("section").id("home").class("hero").at(0.0, 900.0));
        dom.insert(Element::new("a").href("#contact").class("btn-primary").at(500.0, 50.0));

        let sections = [
            ("about", "feature-card", 900.0, 3),
            ("courses", "course-card", 1800.0, 3),
            ("testimonials", "testimonial-card", 2700.0, 2),
            ("contact", "contact-item", 3600.0, 3),
        ];
        for (id, card, top, count) in sections {
            let section = dom.insert(Element::new("section").id(id).at(top, 900.0));
            for i in 0..count {
                dom.insert(
                    Element::new("div")
                        .class(card)
                        .within(section)
                        .at(top + 100.0 + f64::from(i) * 250.0, 200.0),
                );
            }
        }

        let form = dom.insert(Element::new("form").id("enquiryForm").at(3700.0, 600.0));
        for field in FORM_FIELDS {
            let tag = if field == "message" { "textarea" } else { "input" };
            dom.insert(Element::new(tag).name(field).within(form));
        }
        dom.insert(Element::new("button").class("btn-submit").within(form));
        dom.insert(Element::new("div").id("formMessage").class("form-message"));

        dom
    }

    pub fn insert(&self, element: Element) -> ElementHandle {
        let mut inner = self.lock();
        inner.elements.push(element);
        ElementHandle(inner.elements.len() - 1)
    }

    pub fn set_field_value(&self, form: ElementHandle, name: &str, value: &str) {
        let mut inner = self.lock();
        if let Some(input) = inner
            .elements
            .iter_mut()
            .find(|el| el.parent == Some(form) && el.name.as_deref() == Some(name))
        {
            input.value = value.to_string();
        }
    }

    pub fn set_scroll_y(&self, scroll_y: f64) {
        self.lock().viewport.scroll_y = scroll_y;
    }

    pub fn set_viewport_height(&self, height: f64) {
        self.lock().viewport.height = height;
    }

    pub fn classes(&self, el: ElementHandle) -> Vec<String> {
        self.with(el, |e| e.classes.clone()).unwrap_or_default()
    }

    pub fn style(&self, el: ElementHandle, property: &str) -> Option<String> {
        self.with(el, |e| e.style.get(property).cloned()).flatten()
    }

    pub fn text(&self, el: ElementHandle) -> String {
        self.with(el, |e| e.text.clone()).unwrap_or_default()
    }

    /// Every `scroll_to` call so far, oldest first.
    pub fn scroll_history(&self) -> Vec<(f64, ScrollBehavior)> {
        self.lock().scrolls.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn with<T>(&self, el: ElementHandle, f: impl FnOnce(&Element) -> T) -> Option<T> {
        self.lock().elements.get(el.0).map(f)
    }

    fn with_mut(&self, el: ElementHandle, f: impl FnOnce(&mut Element)) {
        if let Some(element) = self.lock().elements.get_mut(el.0) {
            f(element);
        }
    }
}

impl Dom for MemoryDom {
    fn element_by_id(&self, id: &str) -> Option<ElementHandle> {
        self.lock()
            .elements
            .iter()
            .position(|el| el.id.as_deref() == Some(id))
            .map(ElementHandle)
    }

    fn query_selector(&self, class: &str) -> Option<ElementHandle> {
        self.lock()
            .elements
            .iter()
            .position(|el| el.classes.iter().any(|c| c == class))
            .map(ElementHandle)
    }

    fn query_selector_all(&self, classes: &[&str]) -> Vec<ElementHandle> {
        self.lock()
            .elements
            .iter()
            .enumerate()
            .filter(|(_, el)| el.classes.iter().any(|c| classes.contains(&c.as_str())))
            .map(|(i, _)| ElementHandle(i))
            .collect()
    }

    fn anchors(&self) -> Vec<(ElementHandle, String)> {
        self.lock()
            .elements
            .iter()
            .enumerate()
            .filter_map(|(i, el)| match &el.href {
                Some(href) if el.tag == "a" && href.starts_with('#') => {
                    Some((ElementHandle(i), href.clone()))
                }
                _ => None,
            })
            .collect()
    }

    fn has_class(&self, el: ElementHandle, class: &str) -> bool {
        self.with(el, |e| e.classes.iter().any(|c| c == class))
            .unwrap_or(false)
    }

    fn add_class(&self, el: ElementHandle, class: &str) {
        self.with_mut(el, |e| {
            if !e.classes.iter().any(|c| c == class) {
                e.classes.push(class.to_string());
            }
        });
    }

    fn remove_class(&self, el: ElementHandle, class: &str) {
        self.with_mut(el, |e| e.classes.retain(|c| c != class));
    }

    fn toggle_class(&self, el: ElementHandle, class: &str) -> bool {
        let mut present = false;
        self.with_mut(el, |e| {
            if e.classes.iter().any(|c| c == class) {
                e.classes.retain(|c| c != class);
            } else {
                e.classes.push(class.to_string());
                present = true;
            }
        });
        present
    }

    fn set_class_name(&self, el: ElementHandle, classes: &str) {
        self.with_mut(el, |e| {
            e.classes = classes.split_whitespace().map(String::from).collect();
        });
    }

    fn set_style(&self, el: ElementHandle, property: &str, value: &str) {
        self.with_mut(el, |e| {
            e.style.insert(property.to_string(), value.to_string());
        });
    }

    fn set_text(&self, el: ElementHandle, text: &str) {
        self.with_mut(el, |e| e.text = text.to_string());
    }

    fn offset_top(&self, el: ElementHandle) -> f64 {
        self.with(el, |e| e.top).unwrap_or_default()
    }

    fn offset_height(&self, el: ElementHandle) -> f64 {
        self.with(el, |e| e.height).unwrap_or_default()
    }

    fn viewport(&self) -> Viewport {
        self.lock().viewport
    }

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
        let mut inner = self.lock();
        inner.viewport.scroll_y = top.max(0.0);
        inner.scrolls.push((top, behavior));
    }

    fn field_value(&self, form: ElementHandle, name: &str) -> String {
        self.lock()
            .elements
            .iter()
            .find(|el| el.parent == Some(form) && el.name.as_deref() == Some(name))
            .map(|el| el.value.clone())
            .unwrap_or_default()
    }

    fn reset_form(&self, form: ElementHandle) {
        let mut inner = self.lock();
        for el in inner
            .elements
            .iter_mut()
            .filter(|el| el.parent == Some(form) && el.name.is_some())
        {
            el.value.clear();
        }
    }

    fn set_disabled(&self, el: ElementHandle, disabled: bool) {
        self.with_mut(el, |e| e.disabled = disabled);
    }

    fn is_disabled(&self, el: ElementHandle) -> bool {
        self.with(el, |e| e.disabled).unwrap_or(false)
    }
}
