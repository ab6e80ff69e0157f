//! # Smart Coffee Machine
//!
//! A simulated smart coffee machine exposed as a set of typed, scope-gated
//! operations: resource levels, a served counter, a maintenance flag, and a
//! registry of scheduled brews.
//!
//! ## Concurrency Model
//!
//! The whole appliance is a single aggregate owned by one actor task.
//! Requests arrive over a channel and are processed sequentially, so the
//! depletion check-then-commit of a brew is atomic without locks, and no
//! interleaving can ever observe a negative resource level. Notifications
//! (property changes, out-of-resource events) are broadcast best-effort to
//! zero or more subscribers and never block the emitting operation.
//!
//! ## Module Tour
//!
//! - [`model`]: pure data types: resource ids and the ledger, drink recipes
//!   and size multipliers, brew/schedule parameters with their defaults.
//! - [`appliance`]: the state machine and the actor that owns it.
//! - [`clients`]: the [`ApplianceOps`](clients::ApplianceOps) operation
//!   surface and the raw actor client behind it.
//! - [`gate`]: the access gate. Resolved scope sets are checked per
//!   operation; [`GatedClient`](gate::GatedClient) is the only public path
//!   to the appliance.
//! - [`notify`]: notification types and the broadcast fan-out.
//! - [`lifecycle`]: starts the actor, hands out gated clients, shuts down.
//!
//! ## Quick Start
//!
//! ```ignore
//! let machine = CoffeeMachine::new();
//! let client = machine.gate(ScopeSet::parse("coffee_user"));
//! let outcome = client.make_drink(BrewParams::default()).await?;
//! assert!(outcome.result);
//! ```

pub mod appliance;
pub mod clients;
pub mod gate;
pub mod lifecycle;
pub mod model;
pub mod notify;
