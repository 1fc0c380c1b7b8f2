//! Subcommand handlers

use anyhow::{Context, Result};
use gasyway_store::{Credential, TokenStoreClient};
use gasyway_studio::{
    load_and_apply, run_diagnostics, DiagnosticReport, SaveOutcome, ThemeStudio, TracingNotifier,
};
use gasyway_theme::{to_stylesheet, DocumentStyle, TokenBus, TokenSet};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::config::{GasywayConfig, CONFIG_FILE};

fn connect(config_path: &Path) -> Result<(GasywayConfig, TokenStoreClient)> {
    let config = GasywayConfig::load_from_dir(config_path)?;
    let client = TokenStoreClient::new(config.store_config())
        .context("Failed to create the token store client")?;
    Ok((config, client))
}

fn credential(token: Option<String>) -> Result<Credential> {
    let credential = Credential::new(token.unwrap_or_default());
    if credential.is_empty() {
        anyhow::bail!("This command needs an access token: pass --token or set GASYWAY_ACCESS_TOKEN");
    }
    Ok(credential)
}

fn print_tokens(tokens: &TokenSet) -> Result<()> {
    let json = serde_json::to_string_pretty(tokens).context("Failed to serialize tokens")?;
    println!("{json}");
    Ok(())
}

/// Write a default gasyway.toml into `path`
pub fn init(path: &Path, base_url: &str, public_key: &str, force: bool) -> Result<()> {
    let config_path = path.join(CONFIG_FILE);
    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it.",
            config_path.display()
        );
    }

    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let config = GasywayConfig::new(base_url, public_key);
    fs::write(&config_path, config.to_toml()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    tracing::info!("wrote {}", config_path.display());
    Ok(())
}

/// Fail only when no probe succeeded or warned
fn check_report(report: &DiagnosticReport) -> Result<()> {
    if report.all_failed() {
        anyhow::bail!("All diagnostic probes failed");
    }
    Ok(())
}

pub async fn diagnose(config_path: &Path, json: bool) -> Result<()> {
    let (_, client) = connect(config_path)?;
    let document = DocumentStyle::global();
    tracing::debug!(store = %client.config().base_url, "running diagnostics");

    // Apply first so the style probe checks what the applier produced.
    load_and_apply(&client, document).await;
    let report = run_diagnostics(&client, document).await;

    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{out}");
    } else {
        for result in &report.results {
            println!("[{}] {}: {}", result.status, result.probe.label(), result.message);
            if let Some(details) = &result.details {
                println!("    {details}");
            }
        }
    }

    check_report(&report)
}

pub async fn active(config_path: &Path) -> Result<()> {
    let (_, client) = connect(config_path)?;
    let tokens = client
        .fetch_active_tokens()
        .await
        .context("Failed to load the active design tokens")?;
    print_tokens(&tokens)
}

pub async fn current(config_path: &Path, token: Option<String>) -> Result<()> {
    let credential = credential(token)?;
    let (_, client) = connect(config_path)?;
    let tokens = client
        .fetch_current_tokens(&credential)
        .await
        .context("Failed to load the current design tokens")?;
    print_tokens(&tokens)
}

pub async fn css(config_path: &Path, defaults: bool, write: bool) -> Result<()> {
    let config = if defaults && !write {
        None
    } else {
        Some(connect(config_path)?)
    };

    let tokens = match (&config, defaults) {
        (Some((_, client)), false) => client
            .fetch_active_tokens()
            .await
            .context("Failed to load the active design tokens")?,
        _ => TokenSet::default(),
    };
    let stylesheet = to_stylesheet(&tokens);

    match config {
        Some((config, _)) if write => {
            fs::write(&config.export.stylesheet, &stylesheet)
                .with_context(|| format!("Failed to write {}", config.export.stylesheet))?;
            tracing::info!("wrote {}", config.export.stylesheet);
        }
        _ => print!("{stylesheet}"),
    }
    Ok(())
}

/// Read a JSON object of wire-key edits, e.g. `{"primary": "#ff0000"}`
fn read_token_fields(file: &Path) -> Result<Map<String, Value>> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("{} must contain a JSON object of token fields", file.display()))
}

pub async fn push(
    config_path: &Path,
    token: Option<String>,
    file: &Path,
    dry_run: bool,
) -> Result<()> {
    let credential = credential(token)?;
    let fields = read_token_fields(file)?;

    let (_, client) = connect(config_path)?;
    let notifier = TracingNotifier;
    let mut studio = ThemeStudio::new(
        &client,
        credential,
        DocumentStyle::global(),
        TokenBus::global(),
        &notifier,
    );

    if !studio.load().await {
        anyhow::bail!("Could not load the current design tokens");
    }

    studio
        .import(&fields)
        .with_context(|| format!("Rejected token fields in {}", file.display()))?;
    let changed = studio.editor().unsaved_fields();
    if changed.is_empty() {
        println!("No changes");
        return Ok(());
    }
    println!("Changed: {}", changed.join(", "));
    if dry_run {
        return Ok(());
    }

    match studio.save().await? {
        SaveOutcome::Saved { .. } => println!("Saved"),
        SaveOutcome::Unchanged => println!("No changes"),
    }
    Ok(())
}

pub async fn cleanup(config_path: &Path, token: Option<String>) -> Result<()> {
    let credential = credential(token)?;
    let (_, client) = connect(config_path)?;
    let report = client
        .cleanup_duplicates(&credential)
        .await
        .context("Duplicate cleanup failed")?;
    println!("{}", report.message);
    Ok(())
}
