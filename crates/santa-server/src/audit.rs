//! Append-only audit trail: JSONL file plus mirrored tracing stream.
//!
//! Write-only sink. Append failures are logged at `warn` and never fail the
//! request that produced the record.

use std::io::Write;
use std::path::PathBuf;

use chrono::Utc;
use serde::Serialize;

use crate::observability::ExchangeEvent;
use crate::sms::DispatchReport;

/// One audit record.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuditRecord {
    /// A roster was drawn into assignments.
    AssignmentsGenerated {
        /// Roster size.
        participants: usize,
    },
    /// A dispatch run finished; carries the full report.
    SmsDispatched {
        /// Aggregate counts plus per-giver outcomes.
        #[serde(flatten)]
        report: DispatchReport,
    },
    /// The session slot was cleared.
    SessionReset,
}

#[derive(Serialize)]
struct AuditLine<'a> {
    ts: String,
    #[serde(flatten)]
    record: &'a AuditRecord,
}

/// Audit sink. With no path configured only the log mirror is kept.
#[derive(Clone, Debug, Default)]
pub struct AuditLog {
    path: Option<PathBuf>,
}

impl AuditLog {
    /// Build a sink appending to `path`, or log-mirror-only when `None`.
    #[must_use]
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Append one timestamped record and mirror it to the log stream.
    pub fn append(&self, record: &AuditRecord) {
        let line = AuditLine {
            ts: Utc::now().to_rfc3339(),
            record,
        };
        let json = match serde_json::to_string(&line) {
            Ok(json) => json,
            Err(error) => {
                tracing::warn!(error = %error, "failed to serialize audit record");
                return;
            }
        };
        tracing::info!(record = %json, "audit");

        let Some(path) = &self.path else { return };
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
        {
            Ok(mut file) => {
                if let Err(error) = writeln!(file, "{json}") {
                    tracing::warn!(
                        event = ExchangeEvent::AuditAppendFailed.as_str(),
                        path = %path.display(),
                        error = %error,
                        "failed to append audit record"
                    );
                }
            }
            Err(error) => {
                tracing::warn!(
                    event = ExchangeEvent::AuditAppendFailed.as_str(),
                    path = %path.display(),
                    error = %error,
                    "failed to open audit log"
                );
            }
        }
    }
}
