//! Gateway namespace: the JSON HTTP entrypoint.

mod http;

pub use http::{
    GatewayState, GenerateRequest, GenerateResponse, HealthResponse, ResetResponse,
    SendSmsResponse, router, run_http,
};
