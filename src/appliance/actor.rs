//! The appliance actor: exclusive owner of the aggregate.
//!
//! Requests arrive over an mpsc channel and are processed one at a time,
//! which serializes every mutation with respect to reads and makes the
//! depletion check-then-commit atomic without locks. Notifications go out on
//! the broadcast sink and never block the loop.

use super::error::ApplianceError;
use super::state::{Appliance, BrewResult, ScheduleResult};
use crate::model::{ActionOutcome, BrewParams, ResourceSnapshot, ScheduleEntry, ScheduleParams};
use crate::notify::{Notification, NotificationSink, Property};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

/// One-shot response channel carried by every request.
pub type Response<T> = oneshot::Sender<Result<T, ApplianceError>>;

/// Requests accepted by the appliance actor, one per operation on the
/// appliance's surface. The transport layer maps protocol requests onto
/// these; the gate authorizes them before they are sent.
#[derive(Debug)]
pub enum ApplianceRequest {
    ReadAllResources {
        respond_to: Response<ResourceSnapshot>,
    },
    ReadResourceLevel {
        id: Option<String>,
        respond_to: Response<u8>,
    },
    WriteResourceLevel {
        id: Option<String>,
        level: i64,
        respond_to: Response<()>,
    },
    ReadServedCounter {
        respond_to: Response<u64>,
    },
    WriteServedCounter {
        value: u64,
        respond_to: Response<()>,
    },
    ReadMaintenance {
        respond_to: Response<bool>,
    },
    ReadSchedules {
        respond_to: Response<Vec<ScheduleEntry>>,
    },
    MakeDrink {
        params: BrewParams,
        respond_to: Response<ActionOutcome>,
    },
    SetSchedule {
        params: ScheduleParams,
        respond_to: Response<ActionOutcome>,
    },
}

/// The server half of the appliance. Owns the state; nothing else touches it.
pub struct ApplianceActor {
    receiver: mpsc::Receiver<ApplianceRequest>,
    appliance: Appliance,
    notifications: NotificationSink,
}

impl ApplianceActor {
    pub fn new(
        buffer_size: usize,
        notifications: NotificationSink,
    ) -> (Self, mpsc::Sender<ApplianceRequest>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            appliance: Appliance::new(),
            notifications,
        };
        (actor, sender)
    }

    /// Runs the event loop until every client handle is dropped.
    pub async fn run(mut self) {
        info!("Appliance actor started");
        while let Some(msg) = self.receiver.recv().await {
            self.handle(msg);
        }
        info!(served = self.appliance.served_counter(), "Appliance actor shutdown");
    }

    fn handle(&mut self, msg: ApplianceRequest) {
        match msg {
            ApplianceRequest::ReadAllResources { respond_to } => {
                debug!("ReadAllResources");
                let _ = respond_to.send(Ok(self.appliance.all_resources()));
            }
            ApplianceRequest::ReadResourceLevel { id, respond_to } => {
                let result = self.appliance.resource_level(id.as_deref());
                debug!(?id, ?result, "ReadResourceLevel");
                let _ = respond_to.send(result);
            }
            ApplianceRequest::WriteResourceLevel { id, level, respond_to } => {
                let result = self.appliance.write_resource_level(id.as_deref(), level);
                match &result {
                    Ok(()) => info!(?id, level, "Resource level written"),
                    Err(e) => warn!(?id, level, error = %e, "Resource write rejected"),
                }
                let _ = respond_to.send(result);
            }
            ApplianceRequest::ReadServedCounter { respond_to } => {
                debug!("ReadServedCounter");
                let _ = respond_to.send(Ok(self.appliance.served_counter()));
            }
            ApplianceRequest::WriteServedCounter { value, respond_to } => {
                let crossed_threshold = self.appliance.write_served_counter(value);
                info!(value, crossed_threshold, "Served counter written");
                if crossed_threshold {
                    self.notifications.publish(Notification::PropertyChanged {
                        property: Property::MaintenanceNeeded,
                    });
                }
                let _ = respond_to.send(Ok(()));
            }
            ApplianceRequest::ReadMaintenance { respond_to } => {
                debug!("ReadMaintenance");
                let _ = respond_to.send(Ok(self.appliance.maintenance_needed()));
            }
            ApplianceRequest::ReadSchedules { respond_to } => {
                debug!("ReadSchedules");
                let _ = respond_to.send(Ok(self.appliance.schedules()));
            }
            ApplianceRequest::MakeDrink { params, respond_to } => {
                debug!(?params, "MakeDrink");
                let result = self.appliance.make_drink(&params).map(|brew| match brew {
                    BrewResult::Brewed { drink } => {
                        info!(%drink, served = self.appliance.served_counter(), "Brewing");
                        ActionOutcome::ok(format!("Your {drink} is brewing!"))
                    }
                    BrewResult::Depleted(failure) => {
                        warn!(resource = %failure.resource, level = failure.level, "Out of resource");
                        self.notifications.publish(Notification::OutOfResource {
                            resource: failure.resource,
                            level: failure.level,
                        });
                        ActionOutcome::rejected(format!("{} too low", failure.resource))
                    }
                });
                if let Err(e) = &result {
                    warn!(error = %e, "MakeDrink rejected");
                }
                let _ = respond_to.send(result);
            }
            ApplianceRequest::SetSchedule { params, respond_to } => {
                debug!(?params, "SetSchedule");
                let result = self
                    .appliance
                    .set_schedule(&params)
                    .map(|schedule| match schedule {
                        ScheduleResult::Scheduled => {
                            info!("Schedule added");
                            ActionOutcome::ok("Schedule set!")
                        }
                        ScheduleResult::MissingTimeOrMode => {
                            debug!("Schedule missing time/mode");
                            ActionOutcome::rejected("Missing required time/mode")
                        }
                    });
                if let Err(e) = &result {
                    warn!(error = %e, "SetSchedule rejected");
                }
                let _ = respond_to.send(result);
            }
        }
    }
}
