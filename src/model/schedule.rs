//! Scheduled brews and their recurrence modes.

use super::recipe::{Drink, Size};
use serde::{Deserialize, Serialize};

/// When a scheduled brew recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    #[serde(rename = "once")]
    Once,
    #[serde(rename = "everyday")]
    Everyday,
    #[serde(rename = "everyMo")]
    EveryMonday,
    #[serde(rename = "everyTu")]
    EveryTuesday,
    #[serde(rename = "everyWe")]
    EveryWednesday,
    #[serde(rename = "everyTh")]
    EveryThursday,
    #[serde(rename = "everyFr")]
    EveryFriday,
    #[serde(rename = "everySat")]
    EverySaturday,
    #[serde(rename = "everySun")]
    EverySunday,
}

/// Raw `setSchedule` input as parsed by the transport layer.
///
/// `time` and `mode` are required; a request missing either is reported back
/// as a soft failure, not an error. The other fields default like a brew
/// request's.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleParams {
    pub drink_id: Option<String>,
    pub size: Option<String>,
    pub quantity: Option<u8>,
    pub time: Option<String>,
    pub mode: Option<Mode>,
}

/// A recorded future brew.
///
/// Entries are append-only: once registered they are never mutated or
/// removed, and duplicates may coexist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub drink_id: Drink,
    pub size: Size,
    pub quantity: u8,
    pub time: String,
    pub mode: Mode,
}
