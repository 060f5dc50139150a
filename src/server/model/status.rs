//! Device status domain model.

use std::collections::BTreeMap;

use crate::model::status::DeviceStatusDto;

/// Status snapshot reported by a car's device.
///
/// The bridge treats it as an opaque payload; it is only converted at the controller
/// boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceStatus {
    pub car_id: i32,
    pub battery: f32,
    pub is_charging: bool,
    pub is_power_save_mode: bool,
    pub utils: BTreeMap<String, bool>,
    /// Device-side timestamp, milliseconds since the Unix epoch.
    pub time: i64,
}

impl DeviceStatus {
    pub fn from_dto(dto: DeviceStatusDto) -> Self {
        Self {
            car_id: dto.car_id,
            battery: dto.battery,
            is_charging: dto.is_charging,
            is_power_save_mode: dto.is_power_save_mode,
            utils: dto.utils,
            time: dto.time,
        }
    }

    pub fn into_dto(self) -> DeviceStatusDto {
        DeviceStatusDto {
            battery: self.battery,
            is_charging: self.is_charging,
            is_power_save_mode: self.is_power_save_mode,
            utils: self.utils,
            time: self.time,
            car_id: self.car_id,
        }
    }
}
