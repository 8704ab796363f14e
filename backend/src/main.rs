use tokio::task::LocalSet;
use tracing::{info, warn};

use shared::progress::ProgressStore;
use shared::storage::{MemoryStorage, StorageBackend};
use shared::WheelError;

use crate::config::Config;
use crate::error::AppError;
use crate::file_store::FileStorage;
use crate::session::WheelSession;

mod config;
mod error;
mod file_store;
mod logging;
mod session;
mod timer_scheduler;

fn open_storage(config: &Config) -> Box<dyn StorageBackend> {
    match FileStorage::open(&config.store_path) {
        Ok(storage) => {
            info!("Progress file: {}", storage.path().display());
            Box::new(storage)
        }
        Err(e) => {
            warn!("Progress file unusable ({}), keeping progress in memory for this run", e);
            Box::new(MemoryStorage::new())
        }
    }
}

async fn run(config: Config) -> Result<(), AppError> {
    let mut progress = ProgressStore::open(open_storage(&config));
    progress.record_wheel_created();

    let labels: Vec<&str> = config.options.iter().map(|o| o.label.as_str()).collect();
    info!(
        "🎡 Wheel ready with {} options: {}{}",
        labels.len(),
        labels.join(", "),
        if config.elimination { " (elimination mode)" } else { "" }
    );

    let mut session = WheelSession::new(&config, progress);
    let mut round = 0;
    loop {
        let more = if config.elimination {
            session.active_options().len() > 1
        } else {
            round < config.spins
        };
        if !more {
            break;
        }
        round += 1;

        let outcome = tokio::select! {
            result = session.spin_once() => Some(result),
            _ = tokio::signal::ctrl_c() => None,
        };
        let result = match outcome {
            Some(Ok(result)) => result,
            Some(Err(AppError::Wheel(WheelError::AlreadySpinning))) => continue,
            Some(Err(e)) => return Err(e),
            None => {
                if session.is_spinning() && session.cancel() {
                    info!("Interrupted, spin {} cancelled", round);
                } else {
                    info!("Interrupted, stopping the wheel");
                }
                break;
            }
        };
        info!(
            "🎡 Round {}: '{}' wins after {:.0}° of rotation",
            round, result.winner_label, result.total_rotation_degrees
        );

        if config.elimination {
            match session.eliminate_winner() {
                Ok(remaining) if remaining.len() == 1 => {
                    info!("🏁 Last option standing: '{}'", remaining[0].label);
                }
                Ok(remaining) => info!("✂️ '{}' eliminated, {} options left", result.winner_label, remaining.len()),
                Err(e) => {
                    tracing::debug!("elimination skipped: {}", e);
                    break;
                }
            }
        }
    }

    let progress = session.progress();
    let stats = progress.stats();
    info!(
        "📊 {} total spins, {} wheels created, {}/{} achievements unlocked",
        stats.total_spins,
        stats.total_wheels_created,
        progress.unlocked_count(),
        progress.definitions().len()
    );
    for entry in progress.history() {
        info!("  • {}", entry.winner_label);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::from_path(".env").ok();
    logging::setup();

    let config = Config::from_env()?;
    LocalSet::new().run_until(run(config)).await?;
    Ok(())
}
