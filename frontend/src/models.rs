use shared::achievements::AchievementDefinition;
use shared::clock::Clock;
use shared::progress::{ProgressStats, ProgressStore};
use shared::storage::StorageBackend;
use shared::HistoryEntry;

use crate::events::dispatch_progress_update;
use crate::storage::LocalStorageBackend;

#[derive(Debug, Clone, PartialEq)]
pub struct AchievementView {
    pub definition: AchievementDefinition,
    pub unlocked: bool,
    pub unlocked_at: Option<i64>,
    pub progress: f64,
}

/// Read-only copy of the progress store for rendering.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProgressSnapshot {
    pub stats: ProgressStats,
    pub history: Vec<HistoryEntry>,
    pub achievements: Vec<AchievementView>,
}

impl ProgressSnapshot {
    pub fn from_store<B: StorageBackend, C: Clock>(store: &ProgressStore<B, C>) -> Self {
        let achievements = store
            .definitions()
            .iter()
            .zip(store.achievements())
            .map(|(definition, state)| AchievementView {
                definition: definition.clone(),
                unlocked: state.unlocked,
                unlocked_at: state.unlocked_at,
                progress: store.progress_toward(&definition.id).unwrap_or(0.0),
            })
            .collect();
        Self {
            stats: store.stats().clone(),
            history: store.history().cloned().collect(),
            achievements,
        }
    }

    pub fn load() -> Self {
        Self::from_store(&ProgressStore::open(LocalStorageBackend))
    }

    pub fn unlocked_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.unlocked).count()
    }
}

/// Runs `f` against the stored progress and tells listeners it changed.
pub fn update_progress<T>(f: impl FnOnce(&mut ProgressStore<LocalStorageBackend>) -> T) -> T {
    let mut store = ProgressStore::open(LocalStorageBackend);
    let out = f(&mut store);
    dispatch_progress_update();
    out
}

pub fn format_timestamp(millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}
