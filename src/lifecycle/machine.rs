//! Runtime orchestration for the coffee machine.

use crate::clients::ApplianceClient;
use crate::gate::{GatedClient, ScopeSet};
use crate::notify::{Notification, NotificationSink};
use tokio::sync::broadcast;
use tracing::info;

/// The running coffee machine: one appliance actor plus its notification
/// fan-out.
///
/// `CoffeeMachine` owns the actor task and the raw client. Callers obtain an
/// operation handle by resolving a scope set through [`CoffeeMachine::gate`];
/// there is no other way to reach the appliance's operations.
pub struct CoffeeMachine {
    client: ApplianceClient,
    notifications: NotificationSink,
    handle: tokio::task::JoinHandle<()>,
}

impl CoffeeMachine {
    /// Starts the appliance actor with a full machine.
    pub fn new() -> Self {
        let notifications = NotificationSink::new(16);
        let (actor, client) = crate::appliance::new(notifications.clone());
        let handle = tokio::spawn(actor.run());
        Self {
            client,
            notifications,
            handle,
        }
    }

    /// Resolves a granted scope set into an authorized client.
    pub fn gate(&self, scopes: ScopeSet) -> GatedClient {
        GatedClient::new(scopes, self.client.clone())
    }

    /// Subscribes to property-change and out-of-resource notifications.
    /// Delivery is best-effort; a lagging receiver misses, never blocks.
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.notifications.subscribe()
    }

    /// Gracefully shuts the machine down.
    ///
    /// Dropping the internal client closes the actor's channel once every
    /// gated client handed out by [`CoffeeMachine::gate`] is dropped too; the
    /// actor then drains its queue and exits.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down coffee machine...");
        drop(self.client);
        drop(self.notifications);
        self.handle
            .await
            .map_err(|e| format!("Appliance actor task failed: {e}"))?;
        info!("Shutdown complete");
        Ok(())
    }
}

impl Default for CoffeeMachine {
    fn default() -> Self {
        Self::new()
    }
}
