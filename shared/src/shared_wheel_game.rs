use serde::{Serialize, Deserialize};

use crate::constants::*;
use crate::easing::Easing;
use crate::error::WheelError;
use crate::validation::{validate_option_label, validation_message};

/// Display colour of a wheel option. The engine never inspects it.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

pub const DEFAULT_PALETTE: [Rgb; 8] = [
    Rgb::new(0xf9, 0x73, 0x16), // orange
    Rgb::new(0x06, 0xb6, 0xd4), // cyan
    Rgb::new(0x8b, 0x5c, 0xf6), // violet
    Rgb::new(0xec, 0x48, 0x99), // pink
    Rgb::new(0x22, 0xc5, 0x5e), // green
    Rgb::new(0xea, 0xb3, 0x08), // yellow
    Rgb::new(0x3b, 0x82, 0xf6), // blue
    Rgb::new(0xef, 0x44, 0x44), // red
];

/// One labelled wedge on the wheel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WheelOption {
    pub label: String,
    pub color: Rgb,
}

impl WheelOption {
    pub fn new(label: impl Into<String>, color: Rgb) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }
}

/// Builds options from plain labels, cycling through the default palette.
pub fn options_from_labels<I, S>(labels: I) -> Vec<WheelOption>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            WheelOption::new(label.as_ref().trim(), DEFAULT_PALETTE[i % DEFAULT_PALETTE.len()])
        })
        .collect()
}

/// Snapshot of the option set taken when a spin starts.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinRequest {
    options: Vec<WheelOption>,
}

impl SpinRequest {
    /// Validates labels and the minimum option count.
    pub fn new(options: Vec<WheelOption>, min_options: usize) -> Result<Self, WheelError> {
        if options.is_empty() || options.len() < min_options {
            return Err(WheelError::InvalidInput(format!(
                "{} ({} given)",
                TOO_FEW_OPTIONS_ERROR,
                options.len()
            )));
        }
        for option in &options {
            validate_option_label(&option.label)
                .map_err(|e| WheelError::InvalidInput(validation_message(&e)))?;
        }
        Ok(Self { options })
    }

    pub fn options(&self) -> &[WheelOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// Outcome of one completed spin.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinResult {
    pub winner_index: usize,
    pub winner_label: String,
    /// Degrees swept from the start of the spin to where it settled.
    pub total_rotation_degrees: f64,
    /// Epoch millis.
    pub completed_at: i64,
}

/// Fired when the pointer enters a new wedge mid-spin.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct TickEvent {
    pub segment_index: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HistoryEntry {
    pub id: String,
    pub winner_label: String,
    pub timestamp: i64,
}

impl HistoryEntry {
    pub fn from_result(result: &SpinResult) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            winner_label: result.winner_label.clone(),
            timestamp: result.completed_at,
        }
    }
}

/// Tunables for a single wheel instance.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WheelConfig {
    pub spin_duration_ms: u32,
    pub min_extra_turns: u32,
    pub max_extra_turns: u32,
    pub min_spin_options: usize,
    pub easing: Easing,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            spin_duration_ms: SPIN_DURATION_MS,
            min_extra_turns: MIN_EXTRA_TURNS,
            max_extra_turns: MAX_EXTRA_TURNS,
            min_spin_options: MIN_SPIN_OPTIONS,
            easing: Easing::default(),
        }
    }
}
