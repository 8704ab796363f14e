pub mod use_progress;
