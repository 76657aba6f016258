// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::sync::Arc;
use std::time::Duration;

#[test]
fn new_barrier_is_clear() {
    let barrier = WriteBarrier::new();
    assert!(barrier.is_clear());
    assert_eq!(barrier.pending(), 0);
}

#[test]
fn tickets_count_pending_writes() {
    let barrier = WriteBarrier::new();
    let first = barrier.raise();
    let second = barrier.raise();
    assert_eq!(barrier.pending(), 2);

    drop(first);
    assert_eq!(barrier.pending(), 1);
    assert!(!barrier.is_clear());

    drop(second);
    assert!(barrier.is_clear());
}

#[tokio::test]
async fn wait_clear_returns_immediately_when_clear() {
    let barrier = WriteBarrier::new();
    barrier.wait_clear().await;
}

#[tokio::test(start_paused = true)]
async fn wait_clear_blocks_until_ticket_dropped() {
    let barrier = Arc::new(WriteBarrier::new());
    let (raised_tx, raised_rx) = tokio::sync::oneshot::channel();
    let (lower_tx, lower_rx) = tokio::sync::oneshot::channel::<()>();

    let writer = tokio::spawn({
        let barrier = Arc::clone(&barrier);
        async move {
            let _ticket = barrier.raise();
            raised_tx.send(()).unwrap();
            lower_rx.await.unwrap();
        }
    });
    raised_rx.await.unwrap();

    let reader = tokio::spawn({
        let barrier = Arc::clone(&barrier);
        async move { barrier.wait_clear().await }
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!reader.is_finished());

    lower_tx.send(()).unwrap();
    writer.await.unwrap();
    reader.await.unwrap();
    assert!(barrier.is_clear());
}
