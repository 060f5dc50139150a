use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Status snapshot reported by the device installed in a car.
///
/// Sent by the device to `POST /status` and relayed verbatim to whoever is
/// waiting on `GET /status` for the same car.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct DeviceStatusDto {
    /// Battery level of the device.
    pub battery: f32,
    pub is_charging: bool,
    pub is_power_save_mode: bool,
    /// Enabled state of each security util on the device, keyed by util name.
    pub utils: BTreeMap<String, bool>,
    /// Device-side timestamp of the snapshot, milliseconds since the Unix epoch.
    pub time: i64,
    pub car_id: i32,
}
