use std::env;
use std::path::PathBuf;

use shared::constants::{MIN_EXTRA_TURNS, MAX_EXTRA_TURNS, SPIN_DURATION_MS};
use shared::{options_from_labels, WheelConfig, WheelOption};

use crate::error::AppError;

const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;
const DEFAULT_STORE_PATH: &str = "wheel_progress.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub options: Vec<WheelOption>,
    pub elimination: bool,
    pub spins: u32,
    pub frame_interval_ms: u64,
    pub store_path: PathBuf,
    /// Fixed seed for reproducible runs; OS randomness when unset.
    pub seed: Option<u64>,
    pub wheel: WheelConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests need not touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_options = lookup("WHEEL_OPTIONS")
            .ok_or_else(|| AppError::Config("WHEEL_OPTIONS must be set".to_string()))?;
        let labels: Vec<&str> = raw_options
            .split(',')
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if labels.is_empty() {
            return Err(AppError::Config("WHEEL_OPTIONS has no labels".to_string()));
        }

        let wheel = WheelConfig {
            spin_duration_ms: parse_or(&lookup, "WHEEL_SPIN_DURATION_MS", SPIN_DURATION_MS)?,
            min_extra_turns: parse_or(&lookup, "WHEEL_MIN_TURNS", MIN_EXTRA_TURNS)?,
            max_extra_turns: parse_or(&lookup, "WHEEL_MAX_TURNS", MAX_EXTRA_TURNS)?,
            ..WheelConfig::default()
        };
        if wheel.min_extra_turns < MIN_EXTRA_TURNS || wheel.max_extra_turns < wheel.min_extra_turns {
            return Err(AppError::Config(format!(
                "turn range {}..={} is invalid (minimum {} turns)",
                wheel.min_extra_turns, wheel.max_extra_turns, MIN_EXTRA_TURNS
            )));
        }

        let frame_interval_ms = parse_or(&lookup, "WHEEL_FRAME_INTERVAL_MS", DEFAULT_FRAME_INTERVAL_MS)?;
        if frame_interval_ms == 0 {
            return Err(AppError::Config("WHEEL_FRAME_INTERVAL_MS must be positive".to_string()));
        }

        Ok(Self {
            options: options_from_labels(labels),
            elimination: parse_or(&lookup, "WHEEL_ELIMINATION", false)?,
            spins: parse_or(&lookup, "WHEEL_SPINS", 1)?,
            frame_interval_ms,
            store_path: lookup("WHEEL_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH)),
            seed: match lookup("WHEEL_SEED") {
                Some(raw) => Some(parse_value("WHEEL_SEED", &raw)?),
                None => None,
            },
            wheel,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => parse_value(key, &raw),
        None => Ok(default),
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, AppError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| AppError::Config(format!("{} has an invalid value: {:?}", key, raw)))
}
