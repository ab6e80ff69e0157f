//! Resource identifiers and the consumable-resource ledger.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The fixed set of consumables tracked by the machine.
///
/// Declaration order matters: a failed depletion reports the first resource
/// (in this order) that would drop below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ResourceId {
    #[serde(rename = "water")]
    Water,
    #[serde(rename = "milk")]
    Milk,
    #[serde(rename = "chocolate")]
    Chocolate,
    #[serde(rename = "coffeeBeans")]
    CoffeeBeans,
}

impl ResourceId {
    /// Every resource, in enumeration order.
    pub const ALL: [ResourceId; 4] = [
        ResourceId::Water,
        ResourceId::Milk,
        ResourceId::Chocolate,
        ResourceId::CoffeeBeans,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceId::Water => "water",
            ResourceId::Milk => "milk",
            ResourceId::Chocolate => "chocolate",
            ResourceId::CoffeeBeans => "coffeeBeans",
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "water" => Ok(ResourceId::Water),
            "milk" => Ok(ResourceId::Milk),
            "chocolate" => Ok(ResourceId::Chocolate),
            "coffeeBeans" => Ok(ResourceId::CoffeeBeans),
            _ => Err(()),
        }
    }
}

/// A point-in-time copy of every resource level.
pub type ResourceSnapshot = BTreeMap<ResourceId, u8>;

/// Units of each resource a brew consumes.
pub type Consumption = BTreeMap<ResourceId, u32>;

/// Reported when a depletion would take a resource below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepletionFailure {
    pub resource: ResourceId,
    /// The level the resource would have reached.
    pub level: i32,
}

/// Current levels of all consumables, each a percentage in `[0, 100]`.
///
/// The levels themselves are never handed out for external mutation; readers
/// get a [`ResourceSnapshot`] copy.
#[derive(Debug, Clone)]
pub struct ResourceLedger {
    levels: BTreeMap<ResourceId, u8>,
}

/// Level every resource starts at.
pub const FULL_LEVEL: u8 = 100;

impl ResourceLedger {
    /// A ledger with every resource at 100%.
    pub fn full() -> Self {
        Self {
            levels: ResourceId::ALL.iter().map(|&r| (r, FULL_LEVEL)).collect(),
        }
    }

    /// Snapshot copy of every level.
    pub fn snapshot(&self) -> ResourceSnapshot {
        self.levels.clone()
    }

    pub fn level(&self, id: ResourceId) -> u8 {
        self.levels[&id]
    }

    /// Sets a single level. Range validation happens at the operation
    /// boundary; the ledger only ever stores values in `[0, 100]`.
    pub fn set_level(&mut self, id: ResourceId, level: u8) {
        self.levels.insert(id, level);
    }

    /// Check-then-subtract across all resources as one unit.
    ///
    /// If any level would go negative the ledger is left untouched and the
    /// first failing resource in enumeration order is reported, along with
    /// the level it would have reached. On success the whole candidate is
    /// committed at once; no partial depletion is ever observable.
    pub fn try_deplete(&mut self, consumption: &Consumption) -> Result<(), DepletionFailure> {
        let mut candidate = self.levels.clone();
        for id in ResourceId::ALL {
            let delta = consumption.get(&id).copied().unwrap_or(0);
            let level = i32::from(candidate[&id]) - delta as i32;
            if level < 0 {
                return Err(DepletionFailure { resource: id, level });
            }
            candidate.insert(id, level as u8);
        }
        self.levels = candidate;
        Ok(())
    }
}
