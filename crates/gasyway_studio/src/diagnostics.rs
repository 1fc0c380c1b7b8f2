//! Theme diagnostics
//!
//! Four independent probes, run one after the other. A failing probe never
//! stops the ones after it.
//!
//! | probe              | success                | warning              | error                |
//! |--------------------|------------------------|----------------------|----------------------|
//! | store reachability | tokens returned        | reachable, no tokens | anything else        |
//! | health             | 2xx                    | -                    | anything else        |
//! | style variables    | all probed vars set    | some missing         | read failed          |
//! | full path          | loaded and applied     | -                    | load or apply failed |

use crate::loader::load_design_tokens;
use gasyway_store::{StoreError, TokenStoreClient, Transport};
use gasyway_theme::{apply, StyleTarget};
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Variables read back by the style-variable probe
pub const PROBED_VARIABLES: [&str; 3] = ["--primary", "--font-size", "--font-family"];

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Probe {
    StoreReachability,
    Health,
    StyleVariables,
    FullPath,
}

impl Probe {
    pub fn label(self) -> &'static str {
        match self {
            Probe::StoreReachability => "Token store",
            Probe::Health => "Health endpoint",
            Probe::StyleVariables => "Style variables",
            Probe::FullPath => "Load and apply",
        }
    }
}

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStatus {
    Success,
    Warning,
    Error,
}

impl Display for ProbeStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ProbeStatus::Success => "success",
            ProbeStatus::Warning => "warning",
            ProbeStatus::Error => "error",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    pub probe: Probe,
    pub status: ProbeStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ProbeResult {
    fn new(probe: Probe, status: ProbeStatus, message: impl Into<String>) -> Self {
        Self {
            probe,
            status,
            message: message.into(),
            details: None,
        }
    }

    fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Overall verdict, for display only
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Health {
    AllPassed,
    Failing,
    Mixed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DiagnosticReport {
    pub results: Vec<ProbeResult>,
}

impl DiagnosticReport {
    pub fn result(&self, probe: Probe) -> Option<&ProbeResult> {
        self.results.iter().find(|result| result.probe == probe)
    }

    pub fn count(&self, status: ProbeStatus) -> usize {
        self.results
            .iter()
            .filter(|result| result.status == status)
            .count()
    }

    /// True when there was at least one probe and every probe errored
    pub fn all_failed(&self) -> bool {
        !self.results.is_empty() && self.count(ProbeStatus::Error) == self.results.len()
    }

    /// Display rollup: any error is `Failing`
    pub fn health(&self) -> Health {
        if self.count(ProbeStatus::Error) > 0 {
            Health::Failing
        } else if self.count(ProbeStatus::Success) == self.results.len() {
            Health::AllPassed
        } else {
            Health::Mixed
        }
    }
}

async fn probe_store<T: Transport>(client: &TokenStoreClient<T>) -> ProbeResult {
    let probe = Probe::StoreReachability;
    match client.fetch_active_envelope().await {
        Ok(envelope) if envelope.success && envelope.tokens.is_some() => {
            ProbeResult::new(probe, ProbeStatus::Success, "Active design tokens found")
        }
        Ok(envelope) if envelope.success => {
            ProbeResult::new(probe, ProbeStatus::Warning, "Store reachable but no tokens stored")
        }
        Ok(envelope) => ProbeResult::new(probe, ProbeStatus::Error, "Store reported a failure")
            .with_details(envelope.error.unwrap_or_else(|| "no message".to_string())),
        Err(e) if e.is_transport() => {
            ProbeResult::new(probe, ProbeStatus::Error, "Token store unreachable")
                .with_details(e.to_string())
        }
        Err(e @ StoreError::Status { .. }) => {
            ProbeResult::new(probe, ProbeStatus::Error, "Token store returned an error")
                .with_details(e.to_string())
        }
        Err(e) => ProbeResult::new(probe, ProbeStatus::Error, "Token store returned an invalid response")
            .with_details(e.to_string()),
    }
}

async fn probe_health<T: Transport>(client: &TokenStoreClient<T>) -> ProbeResult {
    let probe = Probe::Health;
    match client.check_health().await {
        Ok(()) => ProbeResult::new(probe, ProbeStatus::Success, "Health endpoint responding"),
        Err(e @ StoreError::Status { .. }) => {
            ProbeResult::new(probe, ProbeStatus::Error, "Health endpoint returned an error")
                .with_details(e.to_string())
        }
        Err(e) => ProbeResult::new(probe, ProbeStatus::Error, "Health endpoint unreachable")
            .with_details(e.to_string()),
    }
}

fn probe_style_variables(target: &dyn StyleTarget) -> ProbeResult {
    let probe = Probe::StyleVariables;
    let mut found = Vec::new();
    let mut missing = Vec::new();

    for name in PROBED_VARIABLES {
        match target.get_property(name) {
            Ok(Some(value)) if !value.trim().is_empty() => found.push(format!("{name}: {value}")),
            Ok(_) => missing.push(name),
            Err(e) => {
                return ProbeResult::new(probe, ProbeStatus::Error, "Could not read style variables")
                    .with_details(e.to_string())
            }
        }
    }

    if missing.is_empty() {
        ProbeResult::new(probe, ProbeStatus::Success, "Style variables present")
            .with_details(found.join(", "))
    } else {
        ProbeResult::new(probe, ProbeStatus::Warning, "Some style variables are missing")
            .with_details(format!("missing: {}", missing.join(", ")))
    }
}

async fn probe_full_path<T: Transport>(
    client: &TokenStoreClient<T>,
    target: &dyn StyleTarget,
) -> ProbeResult {
    let probe = Probe::FullPath;
    let Some(tokens) = load_design_tokens(client).await else {
        return ProbeResult::new(probe, ProbeStatus::Error, "No design tokens could be loaded");
    };
    match apply(&tokens, target) {
        Ok(count) => ProbeResult::new(probe, ProbeStatus::Success, "Design tokens loaded and applied")
            .with_details(format!("{count} variables written")),
        Err(e) => ProbeResult::new(probe, ProbeStatus::Error, "Design tokens could not be applied")
            .with_details(e.to_string()),
    }
}

/// Run every probe in order
pub async fn run_diagnostics<T: Transport>(
    client: &TokenStoreClient<T>,
    target: &dyn StyleTarget,
) -> DiagnosticReport {
    let mut report = DiagnosticReport::default();

    report.results.push(probe_store(client).await);
    report.results.push(probe_health(client).await);
    report.results.push(probe_style_variables(target));
    report.results.push(probe_full_path(client, target).await);

    for result in &report.results {
        tracing::info!(
            probe = result.probe.label(),
            status = %result.status,
            "{}",
            result.message
        );
    }
    tracing::debug!(health = ?report.health(), "diagnostics finished");

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(status: ProbeStatus) -> ProbeResult {
        ProbeResult::new(Probe::Health, status, "")
    }

    #[test]
    fn rollup_classifies_reports() {
        let all_ok = DiagnosticReport {
            results: vec![result(ProbeStatus::Success), result(ProbeStatus::Success)],
        };
        let warned = DiagnosticReport {
            results: vec![result(ProbeStatus::Success), result(ProbeStatus::Warning)],
        };
        let failed = DiagnosticReport {
            results: vec![result(ProbeStatus::Warning), result(ProbeStatus::Error)],
        };

        assert_eq!(all_ok.health(), Health::AllPassed);
        assert_eq!(warned.health(), Health::Mixed);
        assert_eq!(failed.health(), Health::Failing);
    }

    #[test]
    fn all_failed_needs_every_probe_to_error() {
        let one_error = DiagnosticReport {
            results: vec![
                result(ProbeStatus::Success),
                result(ProbeStatus::Success),
                result(ProbeStatus::Success),
                result(ProbeStatus::Error),
            ],
        };
        let all_errors = DiagnosticReport {
            results: vec![result(ProbeStatus::Error); 4],
        };

        assert_eq!(one_error.health(), Health::Failing);
        assert!(!one_error.all_failed());
        assert!(all_errors.all_failed());
        assert!(!DiagnosticReport::default().all_failed());
    }

    #[test]
    fn empty_document_warns_on_style_probe() {
        let document = gasyway_theme::DocumentStyle::new();
        let result = probe_style_variables(&document);
        assert_eq!(result.status, ProbeStatus::Warning);
        assert_eq!(
            result.details.as_deref(),
            Some("missing: --primary, --font-size, --font-family")
        );
    }
}
