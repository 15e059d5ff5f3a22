//! santa-server: HTTP gateway, session slot, and SMS dispatch for the draw.
//!
//! `POST /api/generate` validates a roster and draws assignments into the
//! session slot; `POST /api/send-sms` fans the held assignments out to the
//! SMS gateway one giver at a time and reports per-recipient outcomes.

mod audit;
mod config;
mod gateway;
mod observability;
mod session;
mod sms;

pub use audit::{AuditLog, AuditRecord};
pub use config::{
    AuditSettings, RuntimeSettings, ServerSettings, SmsSettings, load_runtime_settings,
    load_runtime_settings_from_paths, set_config_home_override,
};
pub use gateway::{
    GatewayState, GenerateRequest, GenerateResponse, HealthResponse, ResetResponse,
    SendSmsResponse, router, run_http,
};
pub use session::{Exchange, ExchangeSlot};
pub use sms::{
    DeliveryOutcome, DeliveryStatus, DispatchError, DispatchReport, DispatchSummary, SmsGateway,
    SmsGatewayConfig, compose_sms, dispatch_assignments,
};
