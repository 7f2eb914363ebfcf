use thiserror::Error;

/// Boundary failures. None of these reach the user; they are logged and the
/// affected component degrades to a no-op.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UiError {
    #[error("Storage error: {key} - {reason}")]
    Storage { key: String, reason: String },

    #[error("Element not found: #{id}")]
    ElementMissing { id: String },

    #[error("Soft dependency failed: {name} - {reason}")]
    SoftDependency { name: String, reason: String },

    #[error("Configuration error: {field} - {message}")]
    Configuration { field: String, message: String },
}

pub type UiResult<T> = Result<T, UiError>;

impl UiError {
    pub fn element_missing(id: &str) -> Self {
        UiError::ElementMissing { id: id.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_missing() {
        let missing = UiError::element_missing("sidebar");
        assert_eq!(missing, UiError::ElementMissing { id: "sidebar".to_string() });
        assert_eq!(missing.to_string(), "Element not found: #sidebar");
    }

    #[test]
    fn test_display_messages() {
        let err = UiError::SoftDependency {
            name: "checkPasswordStrength".to_string(),
            reason: "not a function".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Soft dependency failed: checkPasswordStrength - not a function"
        );
    }
}
