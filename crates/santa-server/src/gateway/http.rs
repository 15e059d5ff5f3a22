//! HTTP gateway: POST /api/generate → draw into the session slot,
//! POST /api/send-sms → dispatch over the held assignments.
//!
//! Request validation (400 for malformed rosters), client errors for missing
//! dispatch preconditions, 500 only for unexpected internal failures.

use anyhow::Result;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::net::TcpListener;

use santa_core::{Assignment, Participant, Roster, draw};

use crate::audit::{AuditLog, AuditRecord};
use crate::observability::ExchangeEvent;
use crate::session::{Exchange, ExchangeSlot};
use crate::sms::{DispatchError, DispatchReport, SmsGateway, dispatch_assignments};

/// Request body for POST /api/generate.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Roster entries; at least two required.
    pub participants: Vec<Participant>,
}

/// Response body for POST /api/generate.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    /// Drawn assignments in cycle order.
    pub assignments: Vec<Assignment>,
}

/// Response body for POST /api/send-sms.
#[derive(Debug, Serialize)]
pub struct SendSmsResponse {
    /// Whether the dispatch run completed.
    pub success: bool,
    /// Per-giver outcomes and their aggregate.
    #[serde(flatten)]
    pub report: DispatchReport,
}

/// Response body for POST /api/reset.
#[derive(Debug, Serialize)]
pub struct ResetResponse {
    /// Always true; reset cannot fail.
    pub success: bool,
}

/// Response body for the gateway health endpoint.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Fixed "healthy" marker.
    pub status: &'static str,
    /// Whether SMS gateway credentials are configured.
    pub sms_configured: bool,
    /// Whether the session slot currently holds assignments.
    pub assignments_held: bool,
}

/// Shared state for the HTTP server: session slot + optional SMS gateway + audit sink.
#[derive(Clone)]
pub struct GatewayState {
    /// Single slot holding the last generated exchange.
    pub slot: ExchangeSlot,
    /// SMS gateway client; `None` until credentials are configured.
    pub sms: Option<Arc<SmsGateway>>,
    /// Audit sink for generation and dispatch records.
    pub audit: Arc<AuditLog>,
}

fn client_error(error: &DispatchError) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, error.to_string())
}

async fn handle_generate(
    State(state): State<GatewayState>,
    Json(body): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, (StatusCode, String)> {
    let roster = Roster::from_entries(body.participants)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
    let assignments = draw(&roster).map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let participants = roster.len();
    state
        .slot
        .store(Exchange::new(roster.entries().to_vec(), assignments.clone()))
        .await;
    state
        .audit
        .append(&AuditRecord::AssignmentsGenerated { participants });
    tracing::info!(
        event = ExchangeEvent::AssignmentsGenerated.as_str(),
        participants,
        "assignments generated"
    );
    Ok(Json(GenerateResponse { assignments }))
}

async fn handle_send_sms(
    State(state): State<GatewayState>,
) -> Result<Json<SendSmsResponse>, (StatusCode, String)> {
    let gateway = state
        .sms
        .as_ref()
        .ok_or_else(|| client_error(&DispatchError::GatewayNotConfigured))?;
    let exchange = state
        .slot
        .snapshot()
        .await
        .ok_or_else(|| client_error(&DispatchError::NoAssignmentsAvailable))?;

    tracing::info!(
        event = ExchangeEvent::DispatchStarted.as_str(),
        assignments = exchange.assignments.len(),
        "dispatching notifications"
    );
    let report = dispatch_assignments(gateway, &exchange.assignments).await;
    state.audit.append(&AuditRecord::SmsDispatched {
        report: report.clone(),
    });
    tracing::info!(
        event = ExchangeEvent::DispatchCompleted.as_str(),
        total = report.summary.total,
        sent = report.summary.sent,
        failed = report.summary.failed,
        skipped = report.summary.skipped,
        "dispatch finished"
    );
    Ok(Json(SendSmsResponse {
        success: true,
        report,
    }))
}

async fn handle_reset(State(state): State<GatewayState>) -> Json<ResetResponse> {
    state.slot.clear().await;
    state.audit.append(&AuditRecord::SessionReset);
    Json(ResetResponse { success: true })
}

async fn handle_health(State(state): State<GatewayState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        sms_configured: state.sms.is_some(),
        assignments_held: !state.slot.is_empty().await,
    })
}

/// Build the gateway router.
pub fn router(state: GatewayState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/api/generate", post(handle_generate))
        .route("/api/send-sms", post(handle_send_sms))
        .route("/api/reset", post(handle_reset))
        .with_state(state)
}

/// Run the HTTP server; binds to `bind_addr` (e.g. `0.0.0.0:8080`).
/// Graceful shutdown on Ctrl+C (SIGINT) and SIGTERM (Unix); in-flight requests complete before exit.
pub async fn run_http(state: GatewayState, bind_addr: &str) -> Result<()> {
    let app = router(state);
    let listener = TcpListener::bind(bind_addr).await?;
    tracing::info!(
        "gateway listening on {} (Ctrl+C/SIGTERM to stop)",
        bind_addr
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        let ctrl_c = tokio::signal::ctrl_c();
        let mut sigterm = signal(SignalKind::terminate()).expect("failed to listen for SIGTERM");
        tokio::select! {
            _ = ctrl_c => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for Ctrl+C");
    }
}
