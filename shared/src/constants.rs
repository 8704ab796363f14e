// Spin animation
pub const SPIN_DURATION_MS: u32 = 6000;
pub const MIN_EXTRA_TURNS: u32 = 3;
pub const MAX_EXTRA_TURNS: u32 = 8;
pub const FULL_TURN_DEGREES: f64 = 360.0;

// Option sets
pub const MIN_SPIN_OPTIONS: usize = 2;
pub const MAX_LABEL_LENGTH: usize = 40;

// Progress tracking
pub const HISTORY_CAPACITY: usize = 10;

pub const PROGRESS_STATS_KEY: &str = "wheel_progress_stats";
pub const SPIN_HISTORY_KEY: &str = "wheel_spin_history";
pub const ACHIEVEMENT_STATE_KEY: &str = "wheel_achievements";

pub const EMPTY_LABEL_ERROR: &str = "Option labels cannot be empty";
pub const LABEL_TOO_LONG_ERROR: &str = "Option labels must be 40 characters or fewer";
pub const TOO_FEW_OPTIONS_ERROR: &str = "Add at least two options to spin the wheel";
