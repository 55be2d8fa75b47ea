use anyhow::Result;
use chrono::DateTime;
use harmony_academy::core::Dom;
use harmony_academy::domain::model::ScrollBehavior;
use harmony_academy::{
    DispatchOutcome, FormState, MemoryDom, PageEvent, Site, SiteConfig, SiteError, WebhookClient,
};
use httpmock::prelude::*;
use std::sync::Arc;
use std::time::Duration;

fn mount(endpoint: &str) -> Result<(Arc<MemoryDom>, Site<MemoryDom, WebhookClient>)> {
    let dom = Arc::new(MemoryDom::landing_page());
    let config = SiteConfig::default().with_endpoint(endpoint);
    let site = Site::mount(Arc::clone(&dom), &config, WebhookClient::new(endpoint))?;
    Ok((dom, site))
}

fn fill(dom: &MemoryDom, values: &[(&str, &str)]) {
    let form = dom.element_by_id("enquiryForm").unwrap();
    for (name, value) in values {
        dom.set_field_value(form, name, value);
    }
}

fn message(dom: &MemoryDom) -> (String, Vec<String>) {
    let el = dom.element_by_id("formMessage").unwrap();
    (dom.text(el), dom.classes(el))
}

#[tokio::test]
async fn test_valid_enquiry_posts_once() -> Result<()> {
    let server = MockServer::start();
    let hook = server.mock(|when, then| {
        when.method(POST)
            .path("/exec")
            .header("content-type", "application/json")
            .json_body_partial(
                r#"{"fullName":"John Smith","phone":"9876543210","instrument":"Guitar","email":"","message":""}"#,
            );
        then.status(200).json_body(serde_json::json!({"status": "success"}));
    });

    let (dom, site) = mount(&server.url("/exec"))?;
    fill(
        &dom,
        &[("fullName", "John Smith"), ("phone", "9876543210"), ("instrument", "Guitar")],
    );

    let before = chrono::Utc::now();
    let DispatchOutcome::Submitted(outcome) = site.dispatch(PageEvent::Submit).await else {
        panic!("submit must produce a submission outcome");
    };
    let record = outcome?;

    hook.assert_hits(1);
    let sent_at = DateTime::parse_from_rfc3339(&record.timestamp)?.with_timezone(&chrono::Utc);
    assert!(sent_at >= before - chrono::Duration::seconds(1));
    assert!(record.timestamp.ends_with('Z'));

    let (text, classes) = message(&dom);
    assert_eq!(text, "Enquiry sent successfully ✅");
    assert_eq!(classes, vec!["form-message", "success"]);
    assert_eq!(site.form_state(), FormState::Idle);
    Ok(())
}

#[tokio::test]
async fn test_short_name_never_reaches_webhook() -> Result<()> {
    let server = MockServer::start();
    let hook = server.mock(|when, then| {
        when.method(POST).path("/exec");
        then.status(200).json_body(serde_json::json!({"status": "success"}));
    });

    let (dom, site) = mount(&server.url("/exec"))?;
    fill(&dom, &[("fullName", "J"), ("phone", "9876543210"), ("instrument", "Guitar")]);

    let err = site.submit().await.unwrap_err();

    assert!(matches!(err, SiteError::Validation { .. }));
    hook.assert_hits(0);
    assert_eq!(message(&dom).0, "Please enter valid form details");
    Ok(())
}

#[tokio::test]
async fn test_missing_required_field_fails_with_valid_email() -> Result<()> {
    let server = MockServer::start();
    let hook = server.mock(|when, then| {
        when.method(POST).path("/exec");
        then.status(200).json_body(serde_json::json!({"status": "success"}));
    });

    let (dom, site) = mount(&server.url("/exec"))?;
    fill(
        &dom,
        &[("fullName", "John Smith"), ("phone", "9876543210"), ("email", "john@example.com")],
    );

    assert!(matches!(site.submit().await, Err(SiteError::Validation { .. })));
    hook.assert_hits(0);
    Ok(())
}

#[tokio::test]
async fn test_failed_status_shows_generic_failure() -> Result<()> {
    let server = MockServer::start();
    let hook = server.mock(|when, then| {
        when.method(POST).path("/exec");
        then.status(200).json_body(serde_json::json!({"status": "failed"}));
    });

    let (dom, site) = mount(&server.url("/exec"))?;
    fill(
        &dom,
        &[("fullName", "John Smith"), ("phone", "9876543210"), ("instrument", "Guitar")],
    );
    let button = dom.query_selector("btn-submit").unwrap();

    let err = site.submit().await.unwrap_err();

    hook.assert_hits(1);
    assert!(matches!(err, SiteError::Rejected { ref status } if status == "failed"));
    assert_eq!(message(&dom).0, "Submission failed. Try again later.");
    assert!(!dom.has_class(button, "loading"));
    assert!(!dom.is_disabled(button));
    Ok(())
}

#[tokio::test]
async fn test_non_json_reply_shows_generic_failure() -> Result<()> {
    let server = MockServer::start();
    let hook = server.mock(|when, then| {
        when.method(POST).path("/exec");
        then.status(200).body("<html>Moved</html>");
    });

    let (dom, site) = mount(&server.url("/exec"))?;
    fill(
        &dom,
        &[("fullName", "John Smith"), ("phone", "9876543210"), ("instrument", "Guitar")],
    );
    let button = dom.query_selector("btn-submit").unwrap();
    let form = dom.element_by_id("enquiryForm").unwrap();

    let err = site.submit().await.unwrap_err();

    hook.assert_hits(1);
    assert!(matches!(err, SiteError::Serialization(_)));
    assert_eq!(message(&dom).0, "Submission failed. Try again later.");
    assert!(!dom.has_class(button, "loading"));
    assert!(!dom.is_disabled(button));
    assert_eq!(site.form_state(), FormState::Idle);
    assert_eq!(dom.field_value(form, "fullName"), "John Smith");
    assert_eq!(dom.field_value(form, "instrument"), "Guitar");
    Ok(())
}

#[tokio::test]
async fn test_unreachable_webhook_shows_generic_failure() -> Result<()> {
    let (dom, site) = mount("http://127.0.0.1:1/exec")?;
    fill(
        &dom,
        &[("fullName", "John Smith"), ("phone", "9876543210"), ("instrument", "Guitar")],
    );
    let button = dom.query_selector("btn-submit").unwrap();

    let err = site.submit().await.unwrap_err();

    assert!(matches!(err, SiteError::Http(_)));
    assert_eq!(message(&dom).0, "Submission failed. Try again later.");
    assert!(!dom.has_class(button, "loading"));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_message_auto_clears() -> Result<()> {
    let (dom, site) = mount("PASTE_YOUR_WEB_APP_URL_HERE")?;

    let err = site.submit().await.unwrap_err();
    assert!(matches!(err, SiteError::EndpointNotConfigured));
    assert_eq!(
        message(&dom),
        (
            "Google Sheet URL not configured!".to_string(),
            vec!["form-message".to_string(), "error".to_string()]
        )
    );

    tokio::time::sleep(Duration::from_millis(5001)).await;
    assert_eq!(message(&dom).1, vec!["form-message"]);
    Ok(())
}

#[tokio::test]
async fn test_scroll_toggles_sticky_header() -> Result<()> {
    let (dom, site) = mount("https://hooks.example.com/exec")?;
    let navbar = dom.element_by_id("navbar").unwrap();

    dom.set_scroll_y(90.0);
    site.dispatch(PageEvent::Scroll).await;
    assert!(!dom.has_class(navbar, "scrolled"));

    dom.set_scroll_y(110.0);
    let outcome = site.dispatch(PageEvent::Scroll).await;
    assert!(matches!(outcome, DispatchOutcome::Scrolled { sticky: true, .. }));
    assert!(dom.has_class(navbar, "scrolled"));

    dom.set_scroll_y(90.0);
    site.dispatch(PageEvent::Scroll).await;
    assert!(!dom.has_class(navbar, "scrolled"));
    Ok(())
}

#[tokio::test]
async fn test_scrolling_reveals_cards() -> Result<()> {
    let (dom, site) = mount("https://hooks.example.com/exec")?;
    let cards = dom.query_selector_all(&["feature-card"]);
    assert!(cards
        .iter()
        .all(|&card| dom.style(card, "opacity").as_deref() == Some("0")));

    dom.set_scroll_y(900.0);
    let outcome = site.dispatch(PageEvent::Scroll).await;

    assert!(matches!(outcome, DispatchOutcome::Scrolled { revealed, .. } if revealed >= 2));
    assert_eq!(dom.style(cards[0], "opacity").as_deref(), Some("1"));
    assert_eq!(dom.style(cards[0], "transform").as_deref(), Some("translateY(0)"));
    Ok(())
}

#[tokio::test]
async fn test_viewport_resize_reveals_cards() -> Result<()> {
    let (dom, site) = mount("https://hooks.example.com/exec")?;
    let cards = dom.query_selector_all(&["feature-card"]);

    // Root now ends at 1220: the first card (1000..1200) is inside, the second starts at 1250.
    dom.set_viewport_height(1320.0);
    let outcome = site.dispatch(PageEvent::ViewportChanged).await;

    assert!(matches!(outcome, DispatchOutcome::Revealed(1)));
    assert_eq!(dom.style(cards[0], "opacity").as_deref(), Some("1"));
    assert_eq!(dom.style(cards[1], "opacity").as_deref(), Some("0"));
    assert!(dom.scroll_history().is_empty());

    let outcome = site.dispatch(PageEvent::ViewportChanged).await;
    assert!(matches!(outcome, DispatchOutcome::Revealed(0)));
    Ok(())
}

#[tokio::test]
async fn test_menu_and_anchor_navigation() -> Result<()> {
    let (dom, site) = mount("https://hooks.example.com/exec")?;
    let panel = dom.query_selector("nav-links").unwrap();

    let outcome = site.dispatch(PageEvent::MenuToggle).await;
    assert!(matches!(outcome, DispatchOutcome::MenuToggled { open: true }));
    assert!(dom.has_class(panel, "active"));

    let outcome = site
        .dispatch(PageEvent::AnchorClick {
            href: "#contact".to_string(),
        })
        .await;
    assert!(matches!(
        outcome,
        DispatchOutcome::Navigated {
            default_prevented: true
        }
    ));
    assert_eq!(dom.scroll_history(), vec![(3520.0, ScrollBehavior::Smooth)]);
    assert!(!dom.has_class(panel, "active"));
    Ok(())
}

#[tokio::test]
async fn test_mount_requires_enquiry_form() {
    let dom = Arc::new(MemoryDom::new(800.0));
    dom.insert(harmony_academy::adapters::Element::new("nav").id("navbar"));

    let result = Site::mount(
        dom,
        &SiteConfig::default(),
        WebhookClient::new("https://hooks.example.com/exec"),
    );

    match result {
        Err(SiteError::MissingElement { selector }) => assert_eq!(selector, "#enquiryForm"),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("mount should fail without the enquiry form"),
    }
}

#[tokio::test]
async fn test_site_config_from_file() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    let path = temp_dir.path().join("site.toml");
    tokio::fs::write(
        &path,
        r#"
[navigation]
scroll_offset = 60.0

[header]
sticky_threshold = 40.0
"#,
    )
    .await?;

    let config = SiteConfig::from_file(&path)?.with_endpoint("https://hooks.example.com/exec");
    let dom = Arc::new(MemoryDom::landing_page());
    let site = Site::mount(
        Arc::clone(&dom),
        &config,
        WebhookClient::new("https://hooks.example.com/exec"),
    )?;

    site.dispatch(PageEvent::AnchorClick {
        href: "#about".to_string(),
    })
    .await;
    assert_eq!(dom.scroll_history(), vec![(840.0, ScrollBehavior::Smooth)]);

    dom.set_scroll_y(50.0);
    site.dispatch(PageEvent::Scroll).await;
    assert!(dom.has_class(dom.element_by_id("navbar").unwrap(), "scrolled"));
    Ok(())
}
