// Partner tooling: truck-roll ROI and rebate tracking
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use thiserror::Error;

pub const TRUCK_ROLL_COST_RANGE: RangeInclusive<u32> = 150..=500;
pub const HOURLY_RATE_RANGE: RangeInclusive<u32> = 60..=250;
pub const AVOIDED_ROLLS_RANGE: RangeInclusive<u32> = 1..=20;

/// Labour hours billed per truck roll (travel plus on-site)
const LABOUR_HOURS_PER_ROLL: f64 = 1.5;

#[derive(Debug, Error, PartialEq)]
pub enum RoiError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RoiInputs {
    /// CAD per dispatch
    pub truck_roll_cost: u32,
    /// CAD per hour
    pub hourly_rate: u32,
    /// Remote fixes per month
    pub avoided_rolls: u32,
}

impl Default for RoiInputs {
    fn default() -> Self {
        Self {
            truck_roll_cost: 250,
            hourly_rate: 120,
            avoided_rolls: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiEstimate {
    pub cost_per_roll: f64,
    pub monthly_savings: f64,
    pub annual_savings: f64,
}

impl RoiInputs {
    pub fn validate(&self) -> Result<(), RoiError> {
        check("truck_roll_cost", self.truck_roll_cost, &TRUCK_ROLL_COST_RANGE)?;
        check("hourly_rate", self.hourly_rate, &HOURLY_RATE_RANGE)?;
        check("avoided_rolls", self.avoided_rolls, &AVOIDED_ROLLS_RANGE)
    }

    pub fn estimate(&self) -> Result<RoiEstimate, RoiError> {
        self.validate()?;
        let cost_per_roll = self.truck_roll_cost as f64 + self.hourly_rate as f64 * LABOUR_HOURS_PER_ROLL;
        let monthly_savings = cost_per_roll * self.avoided_rolls as f64;
        Ok(RoiEstimate {
            cost_per_roll,
            monthly_savings,
            annual_savings: monthly_savings * 12.0,
        })
    }
}

fn check(field: &'static str, value: u32, range: &RangeInclusive<u32>) -> Result<(), RoiError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(RoiError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RebateProgram {
    pub name: String,
    /// CAD secured so far
    pub current: u32,
    /// CAD ceiling for the program
    pub max: u32,
    pub code: String,
}

impl RebateProgram {
    pub fn new(name: &str, current: u32, max: u32, code: &str) -> Self {
        Self {
            name: name.to_string(),
            current: current.min(max),
            max,
            code: code.to_string(),
        }
    }

    pub fn is_maxed(&self) -> bool {
        self.current == self.max
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RebateSummary {
    pub programs: Vec<RebateEntry>,
    pub total_secured: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RebateEntry {
    #[serde(flatten)]
    pub program: RebateProgram,
    pub maxed: bool,
}

impl RebateSummary {
    pub fn from_programs(programs: Vec<RebateProgram>) -> Self {
        let total_secured = programs.iter().map(|p| p.current).sum();
        let programs = programs
            .into_iter()
            .map(|program| RebateEntry {
                maxed: program.is_maxed(),
                program,
            })
            .collect();
        Self {
            programs,
            total_secured,
        }
    }
}
