use crate::config::SiteConfig;
use crate::core::enquiry::{EnquiryForm, EnquiryFormParts};
use crate::core::message::MessageArea;
use crate::core::mobile_menu::MobileMenu;
use crate::core::navigation::NavigationController;
use crate::core::reveal::RevealAnimator;
use crate::core::sticky_header::StickyHeader;
use crate::domain::model::{ElementHandle, EnquiryRecord, FormState, IntersectionEntry};
use crate::domain::ports::{Dom, EnquirySink};
use crate::utils::error::{Result, SiteError};
use std::sync::Arc;
use std::time::Duration;

/// Events the page delivers to the site.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    AnchorClick { href: String },
    /// The window scrolled; the new offset is read from the page.
    Scroll,
    MenuToggle,
    /// The viewport was resized or the layout moved without scrolling.
    ViewportChanged,
    /// Intersection entries computed by the host page.
    Intersection(Vec<IntersectionEntry>),
    Submit,
}

#[derive(Debug)]
pub enum DispatchOutcome {
    Navigated { default_prevented: bool },
    Scrolled { sticky: bool, revealed: usize },
    MenuToggled { open: bool },
    Revealed(usize),
    Submitted(Result<EnquiryRecord>),
}

/// Composition root: resolves the page's elements once and wires every component.
pub struct Site<D: Dom, S: EnquirySink> {
    dom: Arc<D>,
    navigation: NavigationController<D>,
    header: StickyHeader<D>,
    menu: MobileMenu<D>,
    reveal: RevealAnimator<D>,
    enquiry: EnquiryForm<D, S>,
}

fn require_id<D: Dom>(dom: &D, id: &str) -> Result<ElementHandle> {
    dom.element_by_id(id).ok_or_else(|| SiteError::MissingElement {
        selector: format!("#{}", id),
    })
}

fn require_class<D: Dom>(dom: &D, class: &str) -> Result<ElementHandle> {
    dom.query_selector(class).ok_or_else(|| SiteError::MissingElement {
        selector: format!(".{}", class),
    })
}

impl<D: Dom, S: EnquirySink> Site<D, S> {
    /// Binds the site to `dom`, hides the animated cards and applies the
    /// header state for the current scroll offset.
    pub fn mount(dom: Arc<D>, config: &SiteConfig, sink: S) -> Result<Self> {
        let navbar = require_id(dom.as_ref(), "navbar")?;
        let form = require_id(dom.as_ref(), "enquiryForm")?;
        let message = require_id(dom.as_ref(), "formMessage")?;
        let panel = require_class(dom.as_ref(), "nav-links")?;
        let toggle = require_class(dom.as_ref(), "mobile-toggle")?;
        let submit_button = require_class(dom.as_ref(), "btn-submit")?;

        let menu = MobileMenu::new(Arc::clone(&dom), toggle, panel);
        let navigation = NavigationController::new(
            Arc::clone(&dom),
            menu.clone(),
            config.navigation.scroll_offset,
        );
        let header = StickyHeader::new(Arc::clone(&dom), navbar, config.header.sticky_threshold);

        let selectors: Vec<&str> = config.reveal.selectors.iter().map(String::as_str).collect();
        let reveal = RevealAnimator::new(
            Arc::clone(&dom),
            &selectors,
            config.reveal.threshold,
            config.reveal.bottom_margin,
        );

        let messages = MessageArea::new(
            Arc::clone(&dom),
            message,
            Duration::from_millis(config.form.message_ttl_ms),
        );
        let enquiry = EnquiryForm::new(
            EnquiryFormParts {
                dom: Arc::clone(&dom),
                form,
                submit_button,
                messages,
                endpoint: config.endpoint.url.clone(),
                success_lock: Duration::from_millis(config.form.success_lock_ms),
            },
            sink,
        );

        let site = Self {
            dom,
            navigation,
            header,
            menu,
            reveal,
            enquiry,
        };

        site.reveal.prepare();
        site.header.on_scroll(site.dom.viewport().scroll_y);
        site.reveal.on_viewport_change();

        tracing::info!("🎵 Harmony Music Academy");
        if config.endpoint_configured() {
            tracing::info!("Google Sheets Connected Ready ✔");
        } else {
            tracing::warn!("Enquiry endpoint not configured; submissions will be refused");
        }
        tracing::debug!(
            "Mounted with {} in-page links and {} animated cards",
            site.dom.anchors().len(),
            site.reveal.targets().len()
        );

        Ok(site)
    }

    pub async fn dispatch(&self, event: PageEvent) -> DispatchOutcome {
        match event {
            PageEvent::AnchorClick { href } => DispatchOutcome::Navigated {
                default_prevented: self.navigation.on_anchor_click(&href),
            },
            PageEvent::Scroll => {
                let sticky = self.header.on_scroll(self.dom.viewport().scroll_y);
                let revealed = self.reveal.on_viewport_change();
                DispatchOutcome::Scrolled { sticky, revealed }
            }
            PageEvent::MenuToggle => DispatchOutcome::MenuToggled {
                open: self.menu.toggle(),
            },
            PageEvent::ViewportChanged => {
                DispatchOutcome::Revealed(self.reveal.on_viewport_change())
            }
            PageEvent::Intersection(entries) => {
                DispatchOutcome::Revealed(self.reveal.on_intersection(&entries))
            }
            PageEvent::Submit => DispatchOutcome::Submitted(self.enquiry.submit().await),
        }
    }

    pub async fn submit(&self) -> Result<EnquiryRecord> {
        self.enquiry.submit().await
    }

    pub fn form_state(&self) -> FormState {
        self.enquiry.state()
    }

    pub fn dom(&self) -> &Arc<D> {
        &self.dom
    }
}
