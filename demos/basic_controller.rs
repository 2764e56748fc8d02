//! Basic Controller
//!
//! This example walks an operation through its full lifecycle: idle,
//! pending, resolved, then a re-run that fails and lands in rejected.
//!
//! Key concepts:
//! - `run` emits `started` synchronously before returning
//! - Operation failure is state, not a controller error
//! - Settled states are not terminal; a new run always reaches pending
//!
//! Run with: cargo run --example basic_controller

use inflight::{Controller, Status};
use std::time::Duration;

async fn fetch_answer() -> Result<u32, String> {
    tokio::time::sleep(Duration::from_millis(50)).await;
    Ok(42)
}

async fn fetch_broken() -> Result<u32, String> {
    tokio::time::sleep(Duration::from_millis(50)).await;
    Err("upstream unavailable".to_string())
}

#[tokio::main]
async fn main() {
    println!("=== Basic Controller Example ===\n");

    let controller: Controller<u32, String> = Controller::new();
    println!("Initial status: {}", controller.status());

    let driver = controller.run(fetch_answer());
    println!("After run():   {}", controller.status());

    driver.await;
    let state = controller.state();
    println!("After settle:  {} (data: {:?})", state.status(), state.data());

    // Re-run with a failing operation: the failure comes back as state.
    controller.run(fetch_broken()).await;
    let state = controller.state();
    println!("After re-run:  {} (error: {:?})", state.status(), state.error());
    assert_eq!(state.status(), Status::Rejected);

    println!("\nTraversed path: {:?}", controller.log().path());

    println!("\n=== Example Complete ===");
}
