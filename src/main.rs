use clap::Parser;
use harmony_academy::core::Dom;
use harmony_academy::utils::error::ErrorCategory;
use harmony_academy::utils::{logger, validation::Validate};
use harmony_academy::{CliConfig, MemoryDom, SiteError, Site, WebhookClient};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting harmony-academy CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.site_config().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let dom = Arc::new(MemoryDom::landing_page());
    let sink = WebhookClient::new(config.endpoint.url.clone());
    let site = Site::mount(Arc::clone(&dom), &config, sink)?;

    let form = dom
        .element_by_id("enquiryForm")
        .ok_or_else(|| SiteError::MissingElement {
            selector: "#enquiryForm".to_string(),
        })?;
    for (name, value) in cli.form_values() {
        dom.set_field_value(form, name, value);
    }

    match site.submit().await {
        Ok(record) => {
            println!("✅ Enquiry sent successfully");
            println!("🕒 Recorded at: {}", record.timestamp);
        }
        Err(e) => {
            tracing::error!(
                "❌ Enquiry failed: {} (Category: {:?})",
                e,
                e.category()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.category() {
                ErrorCategory::Configuration => 1,
                ErrorCategory::Validation => 2,
                ErrorCategory::Submission => 3,
                ErrorCategory::Page => 4,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
