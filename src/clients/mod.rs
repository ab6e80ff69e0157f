//! Type-safe clients over the appliance actor's message channel.

pub(crate) mod appliance_client;
pub mod ops;

pub(crate) use appliance_client::ApplianceClient;
pub use ops::ApplianceOps;
