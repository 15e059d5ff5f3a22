//! Session slot: the most recent draw, held for the process lifetime.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use santa_core::{Assignment, Participant};

use crate::observability::ExchangeEvent;

/// The most recent generation result.
#[derive(Clone, Debug)]
pub struct Exchange {
    /// Validated roster the draw ran over.
    pub roster: Vec<Participant>,
    /// Drawn assignments in cycle order.
    pub assignments: Vec<Assignment>,
    /// When the draw happened.
    pub generated_at: DateTime<Utc>,
}

impl Exchange {
    /// Build an exchange stamped with the current time.
    #[must_use]
    pub fn new(roster: Vec<Participant>, assignments: Vec<Assignment>) -> Self {
        Self {
            roster,
            assignments,
            generated_at: Utc::now(),
        }
    }
}

/// Single-slot store for the last generated exchange.
///
/// Overwritten wholesale by each generation and never mutated in place.
/// Dispatch reads via [`ExchangeSlot::snapshot`], so a generation landing
/// mid-dispatch cannot corrupt the batch already in flight.
#[derive(Clone, Default)]
pub struct ExchangeSlot {
    inner: Arc<RwLock<Option<Exchange>>>,
}

impl ExchangeSlot {
    /// Create an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the slot contents with a fresh exchange.
    pub async fn store(&self, exchange: Exchange) {
        let participants = exchange.roster.len();
        let mut g = self.inner.write().await;
        *g = Some(exchange);
        tracing::debug!(
            event = ExchangeEvent::ExchangeStored.as_str(),
            participants,
            "exchange stored"
        );
    }

    /// Value copy of the held exchange, if any.
    pub async fn snapshot(&self) -> Option<Exchange> {
        self.inner.read().await.clone()
    }

    /// Drop the held exchange.
    pub async fn clear(&self) {
        let mut g = self.inner.write().await;
        *g = None;
        tracing::debug!(
            event = ExchangeEvent::ExchangeCleared.as_str(),
            "exchange cleared"
        );
    }

    /// Whether nothing has been generated (or the last reset cleared it).
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_none()
    }
}
