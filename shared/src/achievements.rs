use once_cell::sync::Lazy;
use serde::{Serialize, Deserialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AchievementDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub threshold_spins: u64,
}

impl AchievementDefinition {
    pub fn new(id: &str, name: &str, description: &str, threshold_spins: u64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            threshold_spins,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AchievementState {
    pub id: String,
    pub unlocked: bool,
    pub unlocked_at: Option<i64>,
}

impl AchievementState {
    pub fn locked(id: &str) -> Self {
        Self {
            id: id.to_string(),
            unlocked: false,
            unlocked_at: None,
        }
    }
}

pub static DEFAULT_ACHIEVEMENTS: Lazy<Vec<AchievementDefinition>> = Lazy::new(|| {
    vec![
        AchievementDefinition::new("first_spin", "First Spin", "Spin the wheel for the first time", 1),
        AchievementDefinition::new("getting_started", "Getting Started", "Spin the wheel 10 times", 10),
        AchievementDefinition::new("wheel_enthusiast", "Wheel Enthusiast", "Spin the wheel 50 times", 50),
        AchievementDefinition::new("spin_master", "Spin Master", "Spin the wheel 100 times", 100),
        AchievementDefinition::new("wheel_legend", "Wheel Legend", "Spin the wheel 500 times", 500),
        AchievementDefinition::new("spin_deity", "Spin Deity", "Spin the wheel 1000 times", 1000),
    ]
});

/// Lines stored state up with the catalogue: one state per definition, in
/// catalogue order. Stored unlocks are kept; unknown ids are dropped.
pub fn reconcile(
    definitions: &[AchievementDefinition],
    stored: Vec<AchievementState>,
) -> Vec<AchievementState> {
    definitions
        .iter()
        .map(|def| {
            stored
                .iter()
                .find(|s| s.id == def.id)
                .cloned()
                .unwrap_or_else(|| AchievementState::locked(&def.id))
        })
        .collect()
}

/// Unlocks every locked achievement whose threshold `total_spins` has reached.
/// Returns the newly unlocked definitions; earlier unlocks are never revisited.
pub fn evaluate(
    definitions: &[AchievementDefinition],
    states: &mut [AchievementState],
    total_spins: u64,
    now: i64,
) -> Vec<AchievementDefinition> {
    let mut unlocked = Vec::new();
    for def in definitions {
        if def.threshold_spins > total_spins {
            continue;
        }
        if let Some(state) = states.iter_mut().find(|s| s.id == def.id && !s.unlocked) {
            state.unlocked = true;
            state.unlocked_at = Some(now);
            unlocked.push(def.clone());
        }
    }
    unlocked
}
