//! Structured action results.

use serde::{Deserialize, Serialize};

/// Result of `makeDrink` / `setSchedule`.
///
/// `result == false` is a normal business outcome (out of a resource, missing
/// schedule fields), not an error; callers branch on the field rather than on
/// a failed call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub result: bool,
    pub message: String,
}

impl ActionOutcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            result: true,
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            result: false,
            message: message.into(),
        }
    }
}
