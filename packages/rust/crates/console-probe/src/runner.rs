//! Sequential console probe: homepage, API overview, script, stylesheet.
//!
//! Each check owns its failure boundary. Request errors become printed
//! diagnostics and the next check always runs.

use std::io::Write;
use std::time::Instant;

use crate::check::CheckKind;
use crate::client::{ConsoleClient, ConsoleResponse};
use crate::error::ProbeError;
use crate::report::{BANNER, ProbeReport, ReportLine};
use crate::target::ProbeTarget;

const VERSION_KEY: &str = "rabbitmq_version";
const UNKNOWN_VERSION: &str = "Unknown";

/// Runs the four console checks in fixed order.
pub struct ProbeRunner {
    client: ConsoleClient,
}

impl ProbeRunner {
    pub fn new(target: ProbeTarget) -> Result<Self, ProbeError> {
        Ok(Self {
            client: ConsoleClient::new(target)?,
        })
    }

    /// Print the banner and every check's lines to `out` as they complete.
    ///
    /// Only a write failure on `out` is returned as an error.
    pub async fn run<W: Write>(&self, out: &mut W) -> std::io::Result<ProbeReport> {
        let started = Instant::now();
        writeln!(out, "{BANNER}")?;
        let mut report = ProbeReport::default();
        for kind in CheckKind::ALL {
            for line in self.run_check(kind).await {
                writeln!(out, "{line}")?;
                report.push(line);
            }
            out.flush()?;
        }
        tracing::info!(
            event = "probe.run.completed",
            passed = report.passed(),
            failed = report.failed(),
            elapsed_ms = started.elapsed().as_millis(),
            "console probe finished"
        );
        Ok(report)
    }

    /// Run one check and return the lines it prints.
    pub async fn run_check(&self, kind: CheckKind) -> Vec<ReportLine> {
        let started = Instant::now();
        let result = self.client.get(kind.path(), kind.auth()).await;
        match result {
            Ok(resp) => {
                tracing::debug!(
                    event = "probe.check.response",
                    check = kind.event_key(),
                    status = resp.status.as_u16(),
                    elapsed_ms = started.elapsed().as_millis(),
                    "console responded"
                );
                match kind {
                    CheckKind::Homepage => self.homepage_lines(&resp),
                    CheckKind::ApiOverview => self.api_overview_lines(&resp),
                    CheckKind::Script | CheckKind::Stylesheet => {
                        vec![status_line(kind.label(), &resp)]
                    }
                }
            }
            Err(error) => {
                tracing::warn!(
                    event = "probe.check.request_failed",
                    check = kind.event_key(),
                    elapsed_ms = started.elapsed().as_millis(),
                    error = %error,
                    "console request failed"
                );
                vec![error_line(kind.label(), &error)]
            }
        }
    }

    fn homepage_lines(&self, resp: &ConsoleResponse) -> Vec<ReportLine> {
        let title = if resp.body.contains(&self.client.target().title_marker) {
            ReportLine::pass("Page title found")
        } else {
            ReportLine::fail("Page title missing")
        };
        vec![status_line(CheckKind::Homepage.label(), resp), title]
    }

    fn api_overview_lines(&self, resp: &ConsoleResponse) -> Vec<ReportLine> {
        let label = format!(
            "{} ({})",
            CheckKind::ApiOverview.label(),
            self.client.target().username
        );
        let mut lines = vec![status_line(&label, resp)];
        if !resp.is_ok() {
            lines.push(ReportLine::fail(format!("API Error: {}", resp.body)));
            return lines;
        }
        match resp.json().and_then(|overview| overview_version(&overview)) {
            Ok(version) => lines.push(ReportLine::pass(format!("RabbitMQ Version: {version}"))),
            Err(error) => {
                tracing::warn!(
                    event = "probe.api_overview.decode_failed",
                    error = %error,
                    "api overview body could not be decoded"
                );
                lines.push(error_line(CheckKind::ApiOverview.label(), &error));
            }
        }
        lines
    }
}

/// Broker version from an `/api/overview` body.
///
/// An object without the key yields `Unknown`; any other JSON shape is an
/// error. Scalars print the way the console tooling spells them (`None`,
/// `True`, `False`).
pub fn overview_version(overview: &serde_json::Value) -> Result<String, ProbeError> {
    let serde_json::Value::Object(fields) = overview else {
        return Err(ProbeError::NotAnObject(json_kind(overview)));
    };
    let version = match fields.get(VERSION_KEY) {
        None => UNKNOWN_VERSION.to_string(),
        Some(serde_json::Value::String(version)) => version.clone(),
        Some(serde_json::Value::Null) => "None".to_string(),
        Some(serde_json::Value::Bool(true)) => "True".to_string(),
        Some(serde_json::Value::Bool(false)) => "False".to_string(),
        Some(other) => other.to_string(),
    };
    Ok(version)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

fn status_line(label: &str, resp: &ConsoleResponse) -> ReportLine {
    ReportLine::pass(format!("{label}: {}", resp.status.as_u16()))
}

fn error_line(label: &str, error: &ProbeError) -> ReportLine {
    ReportLine::fail(format!("{label} error: {error}"))
}

#[cfg(test)]
#[path = "../tests/unit/runner.rs"]
mod tests;
