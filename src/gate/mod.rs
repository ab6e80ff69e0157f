//! The access gate.
//!
//! Every inbound operation carries a credential that the authorization layer
//! has already resolved into a [`ScopeSet`]. The gate checks the set against
//! the operation's required scope and either forwards the call to the
//! appliance or rejects it; the appliance itself never sees an unauthorized
//! request.

pub mod scope;

pub use scope::{ScopeSet, COFFEE_SCOPE};

use crate::appliance::ApplianceError;
use crate::clients::{ApplianceClient, ApplianceOps};
use crate::model::{ActionOutcome, BrewParams, ResourceSnapshot, ScheduleEntry, ScheduleParams};
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;
use tracing::warn;

/// The operations a credential can be granted, named for denial reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ReadAllResources,
    ReadResourceLevel,
    WriteResourceLevel,
    ReadServedCounter,
    WriteServedCounter,
    ReadMaintenance,
    ReadSchedules,
    MakeDrink,
    SetSchedule,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::ReadAllResources => "allAvailableResources",
            Operation::ReadResourceLevel => "availableResourceLevel",
            Operation::WriteResourceLevel => "availableResourceLevel",
            Operation::ReadServedCounter => "servedCounter",
            Operation::WriteServedCounter => "servedCounter",
            Operation::ReadMaintenance => "maintenanceNeeded",
            Operation::ReadSchedules => "schedules",
            Operation::MakeDrink => "makeDrink",
            Operation::SetSchedule => "setSchedule",
        }
    }

    /// Scope a credential must carry to invoke this operation.
    ///
    /// The machine grants its whole surface under a single scope, matching
    /// the Thing's security definition; the mapping is per-operation so the
    /// check stays a real capability test if that ever changes.
    pub fn required_scope(&self) -> &'static str {
        COFFEE_SCOPE
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced by the gated client.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccessError {
    /// The credential's scopes do not cover the operation. Nothing was
    /// forwarded to the appliance.
    #[error("Operation '{operation}' requires scope '{scope}'")]
    Forbidden {
        operation: Operation,
        scope: &'static str,
    },

    #[error(transparent)]
    Appliance(#[from] ApplianceError),
}

/// A client whose every call is authorized against a granted scope set.
///
/// Holding a `GatedClient` is the proof-of-authorization the appliance's
/// operations require: the raw actor client is crate-private, so this is the
/// only path to them from outside.
#[derive(Clone)]
pub struct GatedClient {
    scopes: ScopeSet,
    inner: ApplianceClient,
}

impl GatedClient {
    pub(crate) fn new(scopes: ScopeSet, inner: ApplianceClient) -> Self {
        Self { scopes, inner }
    }

    fn authorize(&self, operation: Operation) -> Result<(), AccessError> {
        let scope = operation.required_scope();
        if self.scopes.contains(scope) {
            Ok(())
        } else {
            warn!(%operation, scope, "Operation denied: missing scope");
            Err(AccessError::Forbidden { operation, scope })
        }
    }
}

#[async_trait]
impl ApplianceOps for GatedClient {
    type Error = AccessError;

    async fn read_all_resources(&self) -> Result<ResourceSnapshot, AccessError> {
        self.authorize(Operation::ReadAllResources)?;
        Ok(self.inner.read_all_resources().await?)
    }

    async fn read_resource_level(&self, id: Option<&str>) -> Result<u8, AccessError> {
        self.authorize(Operation::ReadResourceLevel)?;
        Ok(self.inner.read_resource_level(id).await?)
    }

    async fn write_resource_level(&self, id: Option<&str>, level: i64) -> Result<(), AccessError> {
        self.authorize(Operation::WriteResourceLevel)?;
        Ok(self.inner.write_resource_level(id, level).await?)
    }

    async fn read_served_counter(&self) -> Result<u64, AccessError> {
        self.authorize(Operation::ReadServedCounter)?;
        Ok(self.inner.read_served_counter().await?)
    }

    async fn write_served_counter(&self, value: u64) -> Result<(), AccessError> {
        self.authorize(Operation::WriteServedCounter)?;
        Ok(self.inner.write_served_counter(value).await?)
    }

    async fn read_maintenance(&self) -> Result<bool, AccessError> {
        self.authorize(Operation::ReadMaintenance)?;
        Ok(self.inner.read_maintenance().await?)
    }

    async fn read_schedules(&self) -> Result<Vec<ScheduleEntry>, AccessError> {
        self.authorize(Operation::ReadSchedules)?;
        Ok(self.inner.read_schedules().await?)
    }

    async fn make_drink(&self, params: BrewParams) -> Result<ActionOutcome, AccessError> {
        self.authorize(Operation::MakeDrink)?;
        Ok(self.inner.make_drink(params).await?)
    }

    async fn set_schedule(&self, params: ScheduleParams) -> Result<ActionOutcome, AccessError> {
        self.authorize(Operation::SetSchedule)?;
        Ok(self.inner.set_schedule(params).await?)
    }
}
