use anyhow::{bail, Context, Result};
use listing_wizard::api::PropertyService;
use listing_wizard::models::{DraftRecord, PropertyRecord};
use listing_wizard::wizard::{describe, normalize, violations};
use listing_wizard::{ApiConfig, HttpPropertyService, NextOutcome, Stage, Wizard, WizardError};
use std::env;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const PAYLOAD_FILE: &str = "normalized_payload.json";

const USAGE: &str = "usage:
  listing-wizard check <draft.json>
  listing-wizard submit <draft.json> [--id <propertyId>]
  listing-wizard edit <propertyId>";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["check", path] => check(Path::new(path)).await,
        ["submit", path] => submit(Path::new(path), None).await,
        ["submit", path, "--id", id] => submit(Path::new(path), Some(id.to_string())).await,
        ["edit", id] => edit(id).await,
        _ => {
            eprintln!("{USAGE}");
            bail!("unrecognised arguments: {}", args.join(" "));
        }
    }
}

async fn load_draft(path: &Path) -> Result<DraftRecord> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read draft file {}", path.display()))?;
    let record: PropertyRecord = serde_json::from_str(&raw)
        .with_context(|| format!("Draft file {} is not a JSON object", path.display()))?;
    Ok(DraftRecord::from_record(&record))
}

/// Step through every stage, printing what blocks each one.
/// Returns true when the draft reaches the review stage and passes it.
fn walk<S: PropertyService>(wizard: &mut Wizard<S>) -> Result<bool> {
    loop {
        let stage = wizard.stage();
        match wizard.next()? {
            NextOutcome::Advanced { stage: to, notice } => {
                if let Some(notice) = notice {
                    warn!("{}", notice);
                }
                if to == stage {
                    println!("✅ {}", stage);
                    return Ok(true);
                }
                println!("✅ {}", stage);
            }
            NextOutcome::Rejected(message) => {
                println!("❌ {}", stage);
                println!("   {}", message);
                for item in wizard.checklist(stage).iter().skip(1) {
                    println!("   - {}", item.detail);
                }
                return Ok(false);
            }
        }
    }
}

async fn write_payload(draft: &DraftRecord) -> Result<()> {
    let payload = normalize(draft);
    let json = serde_json::to_string_pretty(&payload)?;
    tokio::fs::write(PAYLOAD_FILE, json).await?;
    info!("💾 Saved {} attributes to {}", payload.len(), PAYLOAD_FILE);
    Ok(())
}

fn http_service() -> Result<HttpPropertyService> {
    let config = ApiConfig::from_env().context("Listing API is not configured")?;
    info!("Using listing API at {}", config.base_url);
    HttpPropertyService::new(config)
}

/// Print the unmet conditions of every stage; true when nothing blocks
fn report(draft: &DraftRecord) -> bool {
    let mut ready = true;
    for stage in Stage::ALL {
        let blockers = violations(stage, draft);
        if blockers.is_empty() {
            println!("✅ {}", stage);
            continue;
        }
        ready = false;
        println!("❌ {}", stage);
        for violation in &blockers {
            println!("   - {}", describe(violation));
        }
    }
    ready
}

async fn check(path: &Path) -> Result<()> {
    let draft = load_draft(path).await?;
    info!("🏠 Checking draft {}", path.display());

    let ready = report(&draft);
    write_payload(&draft).await?;

    if ready {
        info!("Draft is ready to submit");
    }
    Ok(())
}

async fn submit(path: &Path, id: Option<String>) -> Result<()> {
    let draft = load_draft(path).await?;
    let service = http_service()?;

    let mut wizard = match id {
        Some(id) => Wizard::with_draft(service, draft, Some(id)),
        None => {
            let mut wizard = Wizard::start_create(service).await?;
            *wizard.draft_mut() = draft;
            wizard
        }
    };

    if !walk(&mut wizard)? {
        bail!("Draft is incomplete; fix the fields above and try again");
    }
    write_payload(wizard.draft()).await?;

    match wizard.submit().await {
        Ok(report) => {
            println!(
                "🎉 Listed {} (slug: {}) at {}",
                report.property.id.as_deref().unwrap_or("-"),
                report.property.slug.as_deref().unwrap_or("-"),
                report.submitted_at.to_rfc3339()
            );
            if let Some(warning) = report.photo_warning {
                warn!("{}", warning);
            }
            Ok(())
        }
        Err(WizardError::Validation(message)) => bail!("{}", message),
        Err(e) => Err(e.into()),
    }
}

async fn edit(id: &str) -> Result<()> {
    let wizard = Wizard::start_edit(http_service()?, id).await?;
    info!("Checking stored property {}", id);
    report(wizard.draft());
    Ok(())
}
