pub mod constants;
pub mod error;
pub mod validation;
pub mod clock;
pub mod shared_wheel_game;
pub mod selector;
pub mod rotation;
pub mod easing;
pub mod tick;
pub mod animator;
pub mod elimination;
pub mod achievements;
pub mod storage;
pub mod progress;
pub mod scheduler;
pub mod engine;

pub use error::{StorageError, WheelError};
pub use shared_wheel_game::*;
pub use engine::{WheelEngine, WheelEvent};
pub use progress::{ProgressStore, RecordOutcome};
