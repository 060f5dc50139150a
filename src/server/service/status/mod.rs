//! Car status retrieval through the device installed in the car.
//!
//! The generic request/reply machinery lives in [`bridge`] and [`correlation`]; this
//! module binds it to cars and their stored push tokens.

pub mod bridge;
pub mod correlation;

#[cfg(test)]
mod test;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::car::CarRepository,
    error::AppError,
    model::status::DeviceStatus,
    service::push::PushMessage,
};

use bridge::{StatusBridge, StatusOutcome};

/// Bridge correlating status requests and device replies by car id.
pub type CarStatusBridge = StatusBridge<i32, DeviceStatus>;

pub struct StatusService<'a> {
    db: &'a DatabaseConnection,
    bridge: &'a CarStatusBridge,
}

impl<'a> StatusService<'a> {
    pub fn new(db: &'a DatabaseConnection, bridge: &'a CarStatusBridge) -> Self {
        Self { db, bridge }
    }

    /// Asks the device in a car for its status and waits for the reply.
    ///
    /// A car without a registered push token still waits out the timeout, since the
    /// device might register and answer in the meantime. The failed push is logged by
    /// the bridge.
    ///
    /// # Returns
    /// - `Ok(StatusOutcome::Resolved(status))` - Device replied in time
    /// - `Ok(StatusOutcome::TimedOut)` - Device did not reply in time
    /// - `Err(AppError::BadRequest)` - Car does not exist
    /// - `Err(AppError::StatusConflict)` - A request for this car is already waiting
    pub async fn request_status(
        &self,
        car_id: i32,
    ) -> Result<StatusOutcome<DeviceStatus>, AppError> {
        let car_repo = CarRepository::new(self.db);

        // Callers check ownership first, so this only fires when the car was deleted
        // between that check and this lookup.
        let Some(car) = car_repo.find_by_id(car_id).await? else {
            return Err(AppError::BadRequest("Car does not exist".to_string()));
        };

        let message = PushMessage::status_command(car.firebase_token, car.username);
        let outcome = self.bridge.request_status(car.id, message).await?;

        Ok(outcome)
    }

    /// Hands a status reported by a device to the request waiting for it.
    ///
    /// # Returns
    /// - `true` - A pending request received the status
    /// - `false` - No request was waiting; the status was dropped
    pub fn submit_status(&self, status: DeviceStatus) -> bool {
        let car_id = status.car_id;
        self.bridge.submit_result(&car_id, status)
    }
}
