//! The raw client for the appliance actor.

use super::ops::ApplianceOps;
use crate::appliance::{ApplianceError, ApplianceRequest, Response};
use crate::model::{ActionOutcome, BrewParams, ResourceSnapshot, ScheduleEntry, ScheduleParams};
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Type-safe client for the appliance actor.
///
/// Deliberately crate-private: code outside the crate reaches the appliance
/// only through [`GatedClient`](crate::gate::GatedClient), which makes the
/// "already authorized" precondition structural rather than a convention.
#[derive(Clone)]
pub(crate) struct ApplianceClient {
    sender: mpsc::Sender<ApplianceRequest>,
}

impl ApplianceClient {
    pub(crate) fn new(sender: mpsc::Sender<ApplianceRequest>) -> Self {
        Self { sender }
    }

    async fn request<T: Send>(
        &self,
        build: impl FnOnce(Response<T>) -> ApplianceRequest + Send,
    ) -> Result<T, ApplianceError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| ApplianceError::ActorClosed)?;
        response.await.map_err(|_| ApplianceError::ActorDropped)?
    }
}

#[async_trait]
impl ApplianceOps for ApplianceClient {
    type Error = ApplianceError;

    #[instrument(skip(self))]
    async fn read_all_resources(&self) -> Result<ResourceSnapshot, ApplianceError> {
        debug!("Sending request");
        self.request(|respond_to| ApplianceRequest::ReadAllResources { respond_to })
            .await
    }

    #[instrument(skip(self))]
    async fn read_resource_level(&self, id: Option<&str>) -> Result<u8, ApplianceError> {
        debug!("Sending request");
        let id = id.map(str::to_string);
        self.request(|respond_to| ApplianceRequest::ReadResourceLevel { id, respond_to })
            .await
    }

    #[instrument(skip(self))]
    async fn write_resource_level(
        &self,
        id: Option<&str>,
        level: i64,
    ) -> Result<(), ApplianceError> {
        debug!("Sending request");
        let id = id.map(str::to_string);
        self.request(|respond_to| ApplianceRequest::WriteResourceLevel { id, level, respond_to })
            .await
    }

    #[instrument(skip(self))]
    async fn read_served_counter(&self) -> Result<u64, ApplianceError> {
        debug!("Sending request");
        self.request(|respond_to| ApplianceRequest::ReadServedCounter { respond_to })
            .await
    }

    #[instrument(skip(self))]
    async fn write_served_counter(&self, value: u64) -> Result<(), ApplianceError> {
        debug!("Sending request");
        self.request(|respond_to| ApplianceRequest::WriteServedCounter { value, respond_to })
            .await
    }

    #[instrument(skip(self))]
    async fn read_maintenance(&self) -> Result<bool, ApplianceError> {
        debug!("Sending request");
        self.request(|respond_to| ApplianceRequest::ReadMaintenance { respond_to })
            .await
    }

    #[instrument(skip(self))]
    async fn read_schedules(&self) -> Result<Vec<ScheduleEntry>, ApplianceError> {
        debug!("Sending request");
        self.request(|respond_to| ApplianceRequest::ReadSchedules { respond_to })
            .await
    }

    #[instrument(skip(self, params))]
    async fn make_drink(&self, params: BrewParams) -> Result<ActionOutcome, ApplianceError> {
        debug!(?params, "Sending request");
        self.request(|respond_to| ApplianceRequest::MakeDrink { params, respond_to })
            .await
    }

    #[instrument(skip(self, params))]
    async fn set_schedule(&self, params: ScheduleParams) -> Result<ActionOutcome, ApplianceError> {
        debug!(?params, "Sending request");
        self.request(|respond_to| ApplianceRequest::SetSchedule { params, respond_to })
            .await
    }
}
