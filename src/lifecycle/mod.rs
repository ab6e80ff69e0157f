//! Orchestration: actor startup, gating, notifications, shutdown.

pub mod machine;
pub mod tracing;

pub use machine::CoffeeMachine;
pub use tracing::setup_tracing;
