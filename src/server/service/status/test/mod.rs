use std::{collections::BTreeMap, sync::Arc, sync::Mutex, time::Duration};

use async_trait::async_trait;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::status::DeviceStatus,
    service::{
        push::{DisabledDispatcher, PushDispatcher, PushError, PushMessage},
        status::{
            bridge::{StatusBridge, StatusOutcome},
            correlation::CorrelationTable,
            CarStatusBridge, StatusService,
        },
    },
};

mod request_status;
mod submit_status;

fn sample_status(car_id: i32) -> DeviceStatus {
    let mut utils = BTreeMap::new();
    utils.insert("gps".to_string(), true);
    utils.insert("alarm".to_string(), false);

    DeviceStatus {
        car_id,
        battery: 0.82,
        is_charging: false,
        is_power_save_mode: true,
        utils,
        time: 1_712_300_000_000,
    }
}

/// Dispatcher standing in for the device: records each push and answers it at once.
struct DeviceStub {
    table: Arc<CorrelationTable<i32, DeviceStatus>>,
    car_id: i32,
    sent: Mutex<Vec<PushMessage>>,
}

#[async_trait]
impl PushDispatcher for DeviceStub {
    async fn send(&self, message: PushMessage) -> Result<(), PushError> {
        self.sent.lock().unwrap().push(message);
        self.table.deliver(&self.car_id, sample_status(self.car_id));
        Ok(())
    }
}

/// Dispatcher recording every push and refusing blank tokens like the FCM dispatcher.
#[derive(Default)]
struct RecordingDispatcher {
    sent: Mutex<Vec<PushMessage>>,
}

#[async_trait]
impl PushDispatcher for RecordingDispatcher {
    async fn send(&self, message: PushMessage) -> Result<(), PushError> {
        let blank = message.token.trim().is_empty();
        self.sent.lock().unwrap().push(message);
        if blank {
            return Err(PushError::MissingToken);
        }
        Ok(())
    }
}

fn disabled_bridge(timeout: Duration) -> CarStatusBridge {
    StatusBridge::new(
        Arc::new(CorrelationTable::new()),
        Arc::new(DisabledDispatcher),
        timeout,
    )
}
