//! Teardown In Flight
//!
//! This example retires a controller while its operation is still running.
//! The operation completes anyway, but its settlement is dropped by the
//! lifecycle guard: the state observed at retirement stays frozen.
//!
//! Run with: cargo run --example teardown_in_flight

use inflight::{Controller, Status};
use std::time::Duration;

async fn slow_fetch() -> Result<&'static str, String> {
    tokio::time::sleep(Duration::from_millis(200)).await;
    Ok("late result")
}

#[tokio::main]
async fn main() {
    println!("=== Teardown In Flight Example ===\n");

    let controller: Controller<&'static str, String> = Controller::builder()
        .status(Status::Pending) // the consumer knows a run starts immediately
        .build()
        .unwrap();

    let driver = tokio::spawn(controller.run(slow_fetch()));
    println!("In flight:        {}", controller.status());

    // The owning scope ends while the operation is still running.
    controller.retire();
    controller.retire(); // idempotent
    println!("After retirement: {} (active: {})", controller.status(), controller.is_active());

    driver.await.unwrap();
    println!("After settlement: {} (data: {:?})", controller.status(), controller.state().data());
    assert_eq!(controller.status(), Status::Pending);

    println!("\n=== Example Complete ===");
}
