//! The appliance aggregate: resource ledger, served counter, maintenance
//! flag, and schedule registry.
//!
//! Everything here is synchronous and single-owner; the actor loop in
//! [`super::actor`] is the only code that holds a mutable handle, which is
//! what makes the depletion check-then-commit atomic.

use super::error::ApplianceError;
use crate::model::{
    consumption_for, BrewParams, BrewRequest, DepletionFailure, Drink, ResourceLedger,
    ResourceSnapshot, ScheduleEntry, ScheduleParams, Size, DEFAULT_DRINK, DEFAULT_QUANTITY,
    DEFAULT_SIZE, MAX_QUANTITY, MIN_QUANTITY,
};

/// Served-counter threshold beyond which maintenance is flagged.
pub const MAINTENANCE_THRESHOLD: u64 = 1000;

/// How a brew attempt ended. Depletion is a normal outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrewResult {
    Brewed { drink: Drink },
    Depleted(DepletionFailure),
}

/// How a schedule request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleResult {
    Scheduled,
    MissingTimeOrMode,
}

/// The single appliance aggregate. Created once at startup; never persisted.
#[derive(Debug)]
pub struct Appliance {
    ledger: ResourceLedger,
    served_counter: u64,
    maintenance_needed: bool,
    schedules: Vec<ScheduleEntry>,
}

impl Appliance {
    /// A fresh machine: every resource full, nothing served, no schedules.
    pub fn new() -> Self {
        Self {
            ledger: ResourceLedger::full(),
            served_counter: 0,
            maintenance_needed: false,
            schedules: Vec::new(),
        }
    }

    // --- Snapshot reads ---

    pub fn all_resources(&self) -> ResourceSnapshot {
        self.ledger.snapshot()
    }

    pub fn resource_level(&self, id: Option<&str>) -> Result<u8, ApplianceError> {
        Ok(self.ledger.level(resolve_resource_id(id)?))
    }

    pub fn served_counter(&self) -> u64 {
        self.served_counter
    }

    pub fn maintenance_needed(&self) -> bool {
        self.maintenance_needed
    }

    pub fn schedules(&self) -> Vec<ScheduleEntry> {
        self.schedules.clone()
    }

    // --- Mutations ---

    /// Writes one resource level. Values outside `[0, 100]` are rejected
    /// before any mutation.
    pub fn write_resource_level(
        &mut self,
        id: Option<&str>,
        level: i64,
    ) -> Result<(), ApplianceError> {
        let id = resolve_resource_id(id)?;
        if !(0..=i64::from(crate::model::FULL_LEVEL)).contains(&level) {
            return Err(ApplianceError::LevelOutOfRange(level));
        }
        self.ledger.set_level(id, level as u8);
        Ok(())
    }

    /// Sets the served counter to an externally supplied value.
    ///
    /// Returns `true` when the write pushed the counter over the threshold,
    /// which also latches the maintenance flag. The flag is never cleared
    /// here; only an external reset can do that.
    pub fn write_served_counter(&mut self, value: u64) -> bool {
        self.served_counter = value;
        if value > MAINTENANCE_THRESHOLD {
            self.maintenance_needed = true;
            true
        } else {
            false
        }
    }

    /// Resolves defaults, charges the ledger, and counts the served drinks.
    ///
    /// The depletion is all-or-nothing: on failure the ledger and the served
    /// counter are untouched and the first failing resource is reported.
    pub fn make_drink(&mut self, params: &BrewParams) -> Result<BrewResult, ApplianceError> {
        let request = resolve_brew(params)?;
        let consumption = consumption_for(request.drink, request.size, request.quantity);
        match self.ledger.try_deplete(&consumption) {
            Ok(()) => {
                self.served_counter += u64::from(request.quantity);
                Ok(BrewResult::Brewed {
                    drink: request.drink,
                })
            }
            Err(failure) => Ok(BrewResult::Depleted(failure)),
        }
    }

    /// Appends a schedule entry. Missing `time` or `mode` is a soft failure
    /// and leaves the registry unchanged; no overlap detection is done.
    pub fn set_schedule(
        &mut self,
        params: &ScheduleParams,
    ) -> Result<ScheduleResult, ApplianceError> {
        let (Some(time), Some(mode)) = (params.time.as_deref(), params.mode) else {
            return Ok(ScheduleResult::MissingTimeOrMode);
        };
        let drink_id = resolve_drink(params.drink_id.as_deref())?;
        let size = resolve_size(params.size.as_deref())?;
        let quantity = resolve_quantity(params.quantity)?;
        self.schedules.push(ScheduleEntry {
            drink_id,
            size,
            quantity,
            time: time.to_string(),
            mode,
        });
        Ok(ScheduleResult::Scheduled)
    }
}

impl Default for Appliance {
    fn default() -> Self {
        Self::new()
    }
}

// --- Parameter resolution ---

fn resolve_resource_id(id: Option<&str>) -> Result<crate::model::ResourceId, ApplianceError> {
    let id = id.ok_or(ApplianceError::MissingOrInvalidId)?;
    id.parse()
        .map_err(|()| ApplianceError::InvalidResourceId(id.to_string()))
}

fn resolve_drink(id: Option<&str>) -> Result<Drink, ApplianceError> {
    match id {
        None => Ok(DEFAULT_DRINK),
        Some(s) => s
            .parse()
            .map_err(|()| ApplianceError::UnknownDrink(s.to_string())),
    }
}

fn resolve_size(label: Option<&str>) -> Result<Size, ApplianceError> {
    match label {
        None => Ok(DEFAULT_SIZE),
        Some(s) => s
            .parse()
            .map_err(|()| ApplianceError::UnknownSize(s.to_string())),
    }
}

fn resolve_quantity(quantity: Option<u8>) -> Result<u8, ApplianceError> {
    let quantity = quantity.unwrap_or(DEFAULT_QUANTITY);
    if (MIN_QUANTITY..=MAX_QUANTITY).contains(&quantity) {
        Ok(quantity)
    } else {
        Err(ApplianceError::InvalidQuantity(quantity))
    }
}

/// Resolves raw brew parameters, substituting defaults for absent fields.
fn resolve_brew(params: &BrewParams) -> Result<BrewRequest, ApplianceError> {
    Ok(BrewRequest {
        drink: resolve_drink(params.drink_id.as_deref())?,
        size: resolve_size(params.size.as_deref())?,
        quantity: resolve_quantity(params.quantity)?,
    })
}
