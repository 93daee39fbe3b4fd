// Fleet service - Devices, grid status and partner financial tools
use crate::domain::fleet::{Device, DeviceStatus, GridLoadStatus, GridStatus};
use crate::domain::partner::{RebateProgram, RebateSummary, RoiError, RoiEstimate, RoiInputs};

#[derive(Clone)]
pub struct FleetService {
    devices: Vec<Device>,
    grid: GridStatus,
    rebates: Vec<RebateProgram>,
}

impl FleetService {
    pub fn new(devices: Vec<Device>, grid: GridStatus, rebates: Vec<RebateProgram>) -> Self {
        Self {
            devices,
            grid,
            rebates,
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_devices(), seed_grid(), seed_rebates())
    }

    pub fn list_devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn grid_status(&self) -> &GridStatus {
        &self.grid
    }

    pub fn estimate_roi(&self, inputs: RoiInputs) -> Result<RoiEstimate, RoiError> {
        inputs.estimate()
    }

    pub fn rebate_summary(&self) -> RebateSummary {
        RebateSummary::from_programs(self.rebates.clone())
    }
}

fn device(
    id: &str,
    name: &str,
    device_type: &str,
    location: &str,
    status: DeviceStatus,
    (current_temp, set_point): (f64, f64),
    humidity: u8,
    health_score: u8,
    last_sync: &str,
) -> Device {
    Device {
        id: id.to_string(),
        name: name.to_string(),
        device_type: device_type.to_string(),
        location: location.to_string(),
        status,
        current_temp,
        set_point,
        humidity,
        health_score: health_score.min(100),
        last_sync: last_sync.to_string(),
    }
}

fn seed_devices() -> Vec<Device> {
    vec![
        device(
            "dev_01",
            "Smith Residence Main",
            "Ecobee Smart",
            "Etobicoke, ON",
            DeviceStatus::Online,
            (21.5, 22.0),
            35,
            98,
            "2 mins ago",
        ),
        device(
            "dev_02",
            "High Park Rental Unit 4",
            "Google Nest",
            "Toronto (High Park)",
            DeviceStatus::Warning,
            (19.2, 23.0),
            28,
            64,
            "5 mins ago",
        ),
        device(
            "dev_03",
            "Vaughan Logistics Hub",
            "Honeywell Home",
            "Vaughan, ON",
            DeviceStatus::Online,
            (20.0, 20.0),
            40,
            92,
            "1 min ago",
        ),
    ]
}

fn seed_grid() -> GridStatus {
    GridStatus {
        load: 18450,
        temp: -4,
        status: GridLoadStatus::Normal,
        region: "IESO Ontario Zone 1".to_string(),
    }
}

fn seed_rebates() -> Vec<RebateProgram> {
    vec![
        RebateProgram::new("Attic Insulation", 1200, 2500, "R-60"),
        RebateProgram::new("ASHP (Heat Pump)", 6500, 6500, "H-HER+"),
        RebateProgram::new("Air Sealing", 325, 2000, "A-SEAL"),
        RebateProgram::new("Solar PV", 0, 5000, "S-RES"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::alert_store::AlertStore;

    #[test]
    fn test_seeded_rebates_total() {
        let summary = FleetService::seeded().rebate_summary();
        assert_eq!(summary.total_secured, 8025);
        assert_eq!(summary.programs.iter().filter(|p| p.maxed).count(), 1);
    }

    #[test]
    fn test_every_alert_targets_a_known_device() {
        let fleet = FleetService::seeded();
        for alert in AlertStore::seeded().list_alerts() {
            assert!(
                fleet.list_devices().iter().any(|d| d.id == alert.device_id),
                "alert {} points at unknown device {}",
                alert.id,
                alert.device_id
            );
        }
    }
}
