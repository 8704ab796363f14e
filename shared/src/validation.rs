use validator::ValidationError;

use crate::constants::{EMPTY_LABEL_ERROR, LABEL_TOO_LONG_ERROR, MAX_LABEL_LENGTH};

pub fn validate_option_label(label: &str) -> Result<(), ValidationError> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        let mut err = ValidationError::new("empty_option_label");
        err.message = Some(EMPTY_LABEL_ERROR.into());
        return Err(err);
    }
    if trimmed.chars().count() > MAX_LABEL_LENGTH {
        let mut err = ValidationError::new("option_label_too_long");
        err.message = Some(LABEL_TOO_LONG_ERROR.into());
        return Err(err);
    }
    Ok(())
}

/// Human readable message for a failed validation, falling back to the code.
pub fn validation_message(err: &ValidationError) -> String {
    err.message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| err.code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_blank_labels() {
        assert!(validate_option_label("").is_err());
        let err = validate_option_label("   ").unwrap_err();
        assert_eq!(validation_message(&err), EMPTY_LABEL_ERROR);
    }

    #[test]
    fn test_label_length_limit() {
        assert!(validate_option_label(&"a".repeat(MAX_LABEL_LENGTH)).is_ok());
        let err = validate_option_label(&"a".repeat(MAX_LABEL_LENGTH + 1)).unwrap_err();
        assert_eq!(err.code, "option_label_too_long");
    }

    #[test]
    fn test_accepts_padded_label() {
        assert!(validate_option_label("  Pizza night ").is_ok());
    }
}
