//! Session slot semantics: wholesale overwrite, snapshot-on-read, clear.

#![allow(missing_docs)]

use anyhow::Result;
use santa_core::{Participant, Roster, draw};
use santa_server::{Exchange, ExchangeSlot};

fn exchange_of(names: &[&str]) -> Result<Exchange> {
    let roster = Roster::from_entries(
        names
            .iter()
            .map(|name| Participant::new(*name, None))
            .collect(),
    )?;
    let assignments = draw(&roster)?;
    Ok(Exchange::new(roster.entries().to_vec(), assignments))
}

#[tokio::test]
async fn starts_empty_and_fills_on_store() -> Result<()> {
    let slot = ExchangeSlot::new();
    assert!(slot.is_empty().await);
    assert!(slot.snapshot().await.is_none());

    slot.store(exchange_of(&["Alice", "Bob"])?).await;
    assert!(!slot.is_empty().await);
    let held = slot
        .snapshot()
        .await
        .ok_or_else(|| anyhow::anyhow!("slot empty after store"))?;
    assert_eq!(held.assignments.len(), 2);
    Ok(())
}

#[tokio::test]
async fn store_overwrites_wholesale() -> Result<()> {
    let slot = ExchangeSlot::new();
    slot.store(exchange_of(&["Alice", "Bob"])?).await;
    slot.store(exchange_of(&["Dave", "Eve", "Mallory"])?).await;

    let held = slot
        .snapshot()
        .await
        .ok_or_else(|| anyhow::anyhow!("slot empty"))?;
    assert_eq!(held.roster.len(), 3);
    assert_eq!(held.assignments.len(), 3);
    Ok(())
}

#[tokio::test]
async fn snapshot_is_unaffected_by_later_overwrite() -> Result<()> {
    // The snapshot an in-flight dispatch iterates must not change when a new
    // generation lands mid-run.
    let slot = ExchangeSlot::new();
    slot.store(exchange_of(&["Alice", "Bob"])?).await;
    let snapshot = slot
        .snapshot()
        .await
        .ok_or_else(|| anyhow::anyhow!("slot empty"))?;

    slot.store(exchange_of(&["Dave", "Eve", "Mallory"])?).await;
    assert_eq!(snapshot.assignments.len(), 2);
    let names: Vec<&str> = snapshot.roster.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Alice", "Bob"]);
    Ok(())
}

#[tokio::test]
async fn clear_empties_the_slot() -> Result<()> {
    let slot = ExchangeSlot::new();
    slot.store(exchange_of(&["Alice", "Bob"])?).await;
    slot.clear().await;
    assert!(slot.is_empty().await);
    assert!(slot.snapshot().await.is_none());
    Ok(())
}
