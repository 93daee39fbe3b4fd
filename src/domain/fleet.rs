// Fleet domain models
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[allow(dead_code)] // Offline is never seeded
pub enum DeviceStatus {
    Online,
    Offline,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: String,
    pub location: String,
    pub status: DeviceStatus,
    pub current_temp: f64,
    pub set_point: f64,
    pub humidity: u8,
    pub health_score: u8,
    pub last_sync: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[allow(dead_code)] // Only Normal is seeded
pub enum GridLoadStatus {
    Normal,
    Peak,
    Critical,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridStatus {
    /// MW
    pub load: u32,
    /// Celsius
    pub temp: i32,
    pub status: GridLoadStatus,
    pub region: String,
}
