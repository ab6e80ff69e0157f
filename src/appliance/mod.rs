//! The appliance state machine and its actor wrapper.

pub mod actor;
pub mod error;
pub mod state;

pub use actor::{ApplianceActor, ApplianceRequest, Response};
pub use error::ApplianceError;
pub use state::{Appliance, BrewResult, ScheduleResult, MAINTENANCE_THRESHOLD};

use crate::clients::ApplianceClient;
use crate::notify::NotificationSink;

/// Creates a new appliance actor and its client.
pub(crate) fn new(notifications: NotificationSink) -> (ApplianceActor, ApplianceClient) {
    let (actor, sender) = ApplianceActor::new(32, notifications);
    let client = ApplianceClient::new(sender);
    (actor, client)
}
