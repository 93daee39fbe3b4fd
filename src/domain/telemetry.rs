// Telemetry data domain models
use serde::Serialize;

/// One hourly sample of the synthetic motor/pressure series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryPoint {
    pub time: String,
    pub motor_amps: f64,
    pub static_pressure: f64,
    pub limit: f64,
}

impl TelemetryPoint {
    pub fn new(time: String, motor_amps: f64, static_pressure: f64, limit: f64) -> Self {
        Self {
            time,
            motor_amps,
            static_pressure,
            limit,
        }
    }

    pub fn exceeds_limit(&self) -> bool {
        self.static_pressure > self.limit
    }
}
