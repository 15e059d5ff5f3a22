//! SMS delivery: gateway client, per-giver dispatch, outcome reporting.

mod client;
mod dispatch;
mod error;
mod message;
mod send_api;

pub use dispatch::{
    DeliveryOutcome, DeliveryStatus, DispatchError, DispatchReport, DispatchSummary,
    dispatch_assignments,
};
pub use message::compose_sms;
pub use send_api::{SmsGateway, SmsGatewayConfig};
