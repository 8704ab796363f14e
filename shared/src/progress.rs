use std::collections::VecDeque;

use serde::de::DeserializeOwned;
use serde::{Serialize, Deserialize};

use crate::achievements::{self, AchievementDefinition, AchievementState, DEFAULT_ACHIEVEMENTS};
use crate::clock::{Clock, SystemClock};
use crate::constants::{ACHIEVEMENT_STATE_KEY, HISTORY_CAPACITY, PROGRESS_STATS_KEY, SPIN_HISTORY_KEY};
use crate::error::StorageError;
use crate::shared_wheel_game::{HistoryEntry, SpinResult};
use crate::storage::StorageBackend;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ProgressStats {
    pub total_spins: u64,
    pub total_wheels_created: u64,
    pub total_shares: u64,
    pub first_spin_at: Option<i64>,
}

/// What a single `record_spin` changed.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordOutcome {
    pub new_history_entry: HistoryEntry,
    pub unlocked_achievements: Vec<AchievementDefinition>,
}

/// Persisted spin counters, recent-spin log and achievement unlocks.
///
/// Storage failures never reach the caller: unreadable state loads as the
/// default and failed writes are logged, leaving the in-memory copy current.
pub struct ProgressStore<B: StorageBackend, C: Clock = SystemClock> {
    backend: B,
    clock: C,
    definitions: Vec<AchievementDefinition>,
    stats: ProgressStats,
    history: VecDeque<HistoryEntry>,
    achievements: Vec<AchievementState>,
}

impl<B: StorageBackend> ProgressStore<B, SystemClock> {
    pub fn open(backend: B) -> Self {
        Self::with_definitions(backend, DEFAULT_ACHIEVEMENTS.clone(), SystemClock)
    }
}

impl<B: StorageBackend, C: Clock> ProgressStore<B, C> {
    pub fn with_definitions(backend: B, definitions: Vec<AchievementDefinition>, clock: C) -> Self {
        let stats: ProgressStats = load_or_default(&backend, PROGRESS_STATS_KEY);
        let mut history: VecDeque<HistoryEntry> = load_or_default(&backend, SPIN_HISTORY_KEY);
        history.truncate(HISTORY_CAPACITY);
        let stored: Vec<AchievementState> = load_or_default(&backend, ACHIEVEMENT_STATE_KEY);
        let achievements = achievements::reconcile(&definitions, stored);

        Self {
            backend,
            clock,
            definitions,
            stats,
            history,
            achievements,
        }
    }

    pub fn record_spin(&mut self, result: &SpinResult) -> RecordOutcome {
        let entry = HistoryEntry::from_result(result);
        self.history.push_front(entry.clone());
        self.history.truncate(HISTORY_CAPACITY);

        self.stats.total_spins = self.stats.total_spins.saturating_add(1);
        if self.stats.first_spin_at.is_none() {
            self.stats.first_spin_at = Some(result.completed_at);
        }

        let now = self.clock.now_millis();
        let unlocked = achievements::evaluate(
            &self.definitions,
            &mut self.achievements,
            self.stats.total_spins,
            now,
        );
        for def in &unlocked {
            log::info!("achievement unlocked: {} ({} spins)", def.name, def.threshold_spins);
        }

        persist(&mut self.backend, PROGRESS_STATS_KEY, &self.stats);
        persist(&mut self.backend, SPIN_HISTORY_KEY, &self.history);
        if !unlocked.is_empty() {
            persist(&mut self.backend, ACHIEVEMENT_STATE_KEY, &self.achievements);
        }

        RecordOutcome {
            new_history_entry: entry,
            unlocked_achievements: unlocked,
        }
    }

    pub fn record_wheel_created(&mut self) {
        self.stats.total_wheels_created = self.stats.total_wheels_created.saturating_add(1);
        persist(&mut self.backend, PROGRESS_STATS_KEY, &self.stats);
    }

    pub fn record_share(&mut self) {
        self.stats.total_shares = self.stats.total_shares.saturating_add(1);
        persist(&mut self.backend, PROGRESS_STATS_KEY, &self.stats);
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        persist(&mut self.backend, SPIN_HISTORY_KEY, &self.history);
    }

    /// Zeroes the counters. Unlocked achievements stay unlocked.
    pub fn reset_stats(&mut self) {
        self.stats = ProgressStats::default();
        persist(&mut self.backend, PROGRESS_STATS_KEY, &self.stats);
    }

    pub fn stats(&self) -> &ProgressStats {
        &self.stats
    }

    /// Newest first.
    pub fn history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn achievements(&self) -> &[AchievementState] {
        &self.achievements
    }

    pub fn definitions(&self) -> &[AchievementDefinition] {
        &self.definitions
    }

    pub fn is_unlocked(&self, id: &str) -> bool {
        self.achievements.iter().any(|s| s.id == id && s.unlocked)
    }

    pub fn unlocked_count(&self) -> usize {
        self.achievements.iter().filter(|s| s.unlocked).count()
    }

    /// Fraction of the way to an achievement, `1.0` once unlocked.
    pub fn progress_toward(&self, id: &str) -> Option<f64> {
        let def = self.definitions.iter().find(|d| d.id == id)?;
        if self.is_unlocked(id) || def.threshold_spins == 0 {
            return Some(1.0);
        }
        Some((self.stats.total_spins as f64 / def.threshold_spins as f64).min(1.0))
    }

    pub fn into_backend(self) -> B {
        self.backend
    }
}

fn persist<B, T>(backend: &mut B, key: &str, value: &T)
where
    B: StorageBackend,
    T: Serialize + ?Sized,
{
    let result = serde_json::to_string(value)
        .map_err(StorageError::from)
        .and_then(|json| backend.write(key, &json));
    if let Err(e) = result {
        log::warn!("failed to persist {}: {}", key, e);
    }
}

fn load_or_default<B, T>(backend: &B, key: &str) -> T
where
    B: StorageBackend,
    T: DeserializeOwned + Default,
{
    match backend.read(key) {
        Ok(Some(json)) => match serde_json::from_str(&json) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("discarding corrupt {}: {}", key, e);
                T::default()
            }
        },
        Ok(None) => T::default(),
        Err(e) => {
            log::warn!("could not read {}: {}", key, e);
            T::default()
        }
    }
}
