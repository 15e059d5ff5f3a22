//! Structured event names attached as the `event` field on tracing calls.

/// Event names for the exchange lifecycle and dispatch pipeline.
#[derive(Clone, Copy, Debug)]
pub(crate) enum ExchangeEvent {
    AssignmentsGenerated,
    ExchangeStored,
    ExchangeCleared,
    DispatchStarted,
    DispatchCompleted,
    SmsSent,
    SmsFailed,
    SmsSkipped,
    AuditAppendFailed,
}

impl ExchangeEvent {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::AssignmentsGenerated => "assignments_generated",
            Self::ExchangeStored => "exchange_stored",
            Self::ExchangeCleared => "exchange_cleared",
            Self::DispatchStarted => "dispatch_started",
            Self::DispatchCompleted => "dispatch_completed",
            Self::SmsSent => "sms_sent",
            Self::SmsFailed => "sms_failed",
            Self::SmsSkipped => "sms_skipped",
            Self::AuditAppendFailed => "audit_append_failed",
        }
    }
}
