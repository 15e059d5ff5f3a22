//! Sequential fan-out of assignment notifications with per-giver outcomes.

use serde::Serialize;
use thiserror::Error;

use santa_core::Assignment;

use crate::observability::ExchangeEvent;

use super::message::compose_sms;
use super::send_api::SmsGateway;

/// Recorded reason when a giver has no contact address.
pub(crate) const SKIP_NO_PHONE: &str = "No phone number";

/// Why a dispatch run refused to start. Checked before any per-giver work.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// No SMS gateway credentials configured.
    #[error("SMS gateway is not configured")]
    GatewayNotConfigured,
    /// Nothing generated in this session yet.
    #[error("no assignments available; generate assignments first")]
    NoAssignmentsAvailable,
}

/// What happened to one giver's notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeliveryStatus {
    /// Message accepted by the gateway.
    Sent {
        /// Contact the message went to.
        phone: String,
    },
    /// Transport or gateway-reported failure; the batch continued.
    Failed {
        /// Contact the send was addressed to.
        phone: String,
        /// Error detail as recorded at send time.
        error: String,
    },
    /// No gateway call was made.
    Skipped {
        /// Policy reason, e.g. a missing phone number.
        reason: String,
    },
}

/// One giver's outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeliveryOutcome {
    /// Giver the message was (or would have been) addressed to.
    pub giver: String,
    /// What happened.
    #[serde(flatten)]
    pub status: DeliveryStatus,
}

/// Aggregate counts over one dispatch run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DispatchSummary {
    /// Assignments processed.
    pub total: usize,
    /// Deliveries the gateway accepted.
    pub sent: usize,
    /// Deliveries that errored.
    pub failed: usize,
    /// Givers skipped without a gateway call.
    pub skipped: usize,
}

/// Full dispatch result: one outcome per assignment plus the aggregate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DispatchReport {
    /// Post-hoc tally of `results`.
    pub summary: DispatchSummary,
    /// Outcomes in assignment order.
    pub results: Vec<DeliveryOutcome>,
}

impl DispatchReport {
    /// Tally a finalized outcome list.
    ///
    /// Pure function of the list, so the report is reproducible from the
    /// outcomes alone; `sent + failed + skipped == total` always holds.
    #[must_use]
    pub fn from_outcomes(results: Vec<DeliveryOutcome>) -> Self {
        let mut summary = DispatchSummary {
            total: results.len(),
            ..DispatchSummary::default()
        };
        for outcome in &results {
            match outcome.status {
                DeliveryStatus::Sent { .. } => summary.sent += 1,
                DeliveryStatus::Failed { .. } => summary.failed += 1,
                DeliveryStatus::Skipped { .. } => summary.skipped += 1,
            }
        }
        Self { summary, results }
    }
}

/// Notify every giver in assignment order, one gateway call at a time.
///
/// Sequential by design: report and log ordering match assignment order.
/// A failed delivery is recorded and never aborts the rest of the batch.
pub async fn dispatch_assignments(
    gateway: &SmsGateway,
    assignments: &[Assignment],
) -> DispatchReport {
    let mut results = Vec::with_capacity(assignments.len());
    for assignment in assignments {
        let status = match &assignment.giver_phone {
            None => {
                tracing::info!(
                    event = ExchangeEvent::SmsSkipped.as_str(),
                    giver = %assignment.giver,
                    "no phone number; skipping"
                );
                DeliveryStatus::Skipped {
                    reason: SKIP_NO_PHONE.to_string(),
                }
            }
            Some(phone) => {
                let message = compose_sms(&assignment.giver, &assignment.receiver);
                match gateway.send_sms(phone, &message).await {
                    Ok(()) => {
                        tracing::info!(
                            event = ExchangeEvent::SmsSent.as_str(),
                            giver = %assignment.giver,
                            "notification sent"
                        );
                        DeliveryStatus::Sent {
                            phone: phone.clone(),
                        }
                    }
                    Err(error) => {
                        tracing::warn!(
                            event = ExchangeEvent::SmsFailed.as_str(),
                            giver = %assignment.giver,
                            error = %error,
                            "delivery failed; continuing with remaining givers"
                        );
                        DeliveryStatus::Failed {
                            phone: phone.clone(),
                            error: error.to_string(),
                        }
                    }
                }
            }
        };
        results.push(DeliveryOutcome {
            giver: assignment.giver.clone(),
            status,
        });
    }
    DispatchReport::from_outcomes(results)
}
