//! The typed operation surface of the appliance.

use crate::model::{ActionOutcome, BrewParams, ResourceSnapshot, ScheduleEntry, ScheduleParams};
use async_trait::async_trait;

/// Every operation the coffee machine exposes.
///
/// Implemented by the raw actor client and by the access-gated client, so
/// callers program against one surface regardless of where in the pipeline
/// they sit. All operations complete without indefinite blocking; the core
/// is computation-bound.
#[async_trait]
pub trait ApplianceOps: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Snapshot of every resource level.
    async fn read_all_resources(&self) -> Result<ResourceSnapshot, Self::Error>;

    /// Level of one resource, addressed by its uri-style `id` parameter.
    async fn read_resource_level(&self, id: Option<&str>) -> Result<u8, Self::Error>;

    /// Writes one resource level. Values outside `[0, 100]` are rejected.
    async fn write_resource_level(&self, id: Option<&str>, level: i64)
        -> Result<(), Self::Error>;

    async fn read_served_counter(&self) -> Result<u64, Self::Error>;

    /// Sets the served counter; crossing the maintenance threshold raises a
    /// property-change notification.
    async fn write_served_counter(&self, value: u64) -> Result<(), Self::Error>;

    async fn read_maintenance(&self) -> Result<bool, Self::Error>;

    async fn read_schedules(&self) -> Result<Vec<ScheduleEntry>, Self::Error>;

    /// Brews drinks. Depletion comes back as `result: false`, not an error.
    async fn make_drink(&self, params: BrewParams) -> Result<ActionOutcome, Self::Error>;

    /// Registers a future brew. Missing `time`/`mode` comes back as
    /// `result: false`, not an error.
    async fn set_schedule(&self, params: ScheduleParams) -> Result<ActionOutcome, Self::Error>;
}
