// Telemetry provider - Synthetic motor current / static pressure series
use crate::domain::telemetry::TelemetryPoint;
use chrono::{DateTime, Duration, Local, Timelike};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::OnceLock;

pub const SERIES_LEN: usize = 24;
/// Index from which the developing fault shows up
pub const SPIKE_START: usize = 18;

const MOTOR_AMPS_BASELINE: f64 = 4.2;
const MOTOR_AMPS_JITTER: f64 = 0.3;
const MOTOR_AMPS_SPIKE: f64 = 1.8;

pub const PRESSURE_BASELINE_MIN: f64 = 0.4;
pub const PRESSURE_BASELINE_MAX: f64 = 0.6;
const PRESSURE_JITTER: f64 = 0.03;
/// Largest extra static pressure at the end of the series
pub const PRESSURE_SPIKE_MAX: f64 = 0.45;

/// Static pressure limit, inches of water column
pub const PRESSURE_LIMIT: f64 = 0.8;

/// Generates the series once per session and hands out the same points afterwards.
pub struct TelemetryProvider {
    seed: Option<u64>,
    start: DateTime<Local>,
    series: OnceLock<Vec<TelemetryPoint>>,
}

impl TelemetryProvider {
    /// `seed` makes the values reproducible; `None` draws from entropy
    pub fn new(seed: Option<u64>) -> Self {
        let now = Local::now();
        let hour = now.with_minute(0).and_then(|t| t.with_second(0)).unwrap_or(now);
        Self::starting_at(seed, hour - Duration::hours(SERIES_LEN as i64 - 1))
    }

    pub fn starting_at(seed: Option<u64>, start: DateTime<Local>) -> Self {
        Self {
            seed,
            start,
            series: OnceLock::new(),
        }
    }

    pub fn series_for_session(&self) -> &[TelemetryPoint] {
        self.series.get_or_init(|| {
            let mut rng = match self.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let series = generate_series(&mut rng, self.start);
            if let Some(first) = series.iter().find(|p| p.exceeds_limit()) {
                tracing::info!("Synthetic static pressure crosses limit at {}", first.time);
            }
            series
        })
    }
}

fn generate_series<R: Rng>(rng: &mut R, start: DateTime<Local>) -> Vec<TelemetryPoint> {
    (0..SERIES_LEN)
        .map(|i| {
            let time = (start + Duration::hours(i as i64)).format("%H:%M").to_string();

            // 0.0 before the fault develops, ramping to 1.0 at the last sample
            let fault = if i >= SPIKE_START {
                (i - SPIKE_START + 1) as f64 / (SERIES_LEN - SPIKE_START) as f64
            } else {
                0.0
            };

            let motor_amps = MOTOR_AMPS_BASELINE
                + rng.gen_range(-MOTOR_AMPS_JITTER..=MOTOR_AMPS_JITTER)
                + MOTOR_AMPS_SPIKE * fault;

            let static_pressure = rng.gen_range(PRESSURE_BASELINE_MIN..=PRESSURE_BASELINE_MAX)
                + rng.gen_range(-PRESSURE_JITTER..=PRESSURE_JITTER)
                + PRESSURE_SPIKE_MAX * fault;

            TelemetryPoint::new(
                time,
                round2(motor_amps.max(0.0)),
                round2(static_pressure),
                PRESSURE_LIMIT,
            )
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
