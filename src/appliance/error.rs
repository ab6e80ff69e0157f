//! Error types for appliance operations.

use thiserror::Error;

/// Errors surfaced by the appliance's operation surface.
///
/// Validation variants mean the caller's input failed the fixed enumerations;
/// they are reported synchronously and leave no partial effect. The channel
/// variants mean the actor task is gone. Depletion failures and missing
/// schedule fields are *not* errors; they come back as an
/// [`ActionOutcome`](crate::model::ActionOutcome) with `result: false`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApplianceError {
    /// The drink identifier is not a registered recipe.
    #[error("Unknown drink: {0}")]
    UnknownDrink(String),

    /// The size label is not one of s / m / l.
    #[error("Unknown size: {0}")]
    UnknownSize(String),

    /// Quantity outside the accepted 1..=5 range.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u8),

    /// A present `id` parameter names no known resource.
    #[error("Invalid resource id: {0}")]
    InvalidResourceId(String),

    /// The uri-style `id` parameter was absent.
    #[error("Missing or invalid 'id'")]
    MissingOrInvalidId,

    /// A level write outside `[0, 100]`. Writes are rejected, never clamped.
    #[error("Resource level {0} outside [0, 100]")]
    LevelOutOfRange(i64),

    #[error("Appliance actor closed")]
    ActorClosed,

    #[error("Appliance actor dropped response channel")]
    ActorDropped,
}
