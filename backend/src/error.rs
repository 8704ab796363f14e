use std::fmt;

use shared::WheelError;

#[derive(Debug)]
pub enum AppError {
    Config(String),
    Io(std::io::Error),
    Wheel(WheelError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::Wheel(e) => write!(f, "Wheel error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Wheel(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<WheelError> for AppError {
    fn from(err: WheelError) -> Self {
        Self::Wheel(err)
    }
}
