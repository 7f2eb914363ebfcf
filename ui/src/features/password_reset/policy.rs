use thiserror::Error;

/// The two inputs of the reset form
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ResetField {
    Password,
    Confirmation,
}

impl ResetField {
    /// DOM id of the input
    pub fn element_id(&self) -> &'static str {
        match self {
            ResetField::Password => "password",
            ResetField::Confirmation => "confirm_password",
        }
    }
}

/// A reset attempt that must not be submitted. The message is shown inline
/// under the offending field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Por favor, digite a nova senha.")]
    MissingPassword,

    #[error("Por favor, confirme a nova senha.")]
    MissingConfirmation,

    #[error("A senha deve ter pelo menos {min_length} caracteres.")]
    TooShort { min_length: usize },

    #[error("As senhas não coincidem.")]
    Mismatch,
}

impl PasswordPolicyError {
    /// Field that receives focus and the invalid marker
    pub fn field(&self) -> ResetField {
        match self {
            PasswordPolicyError::MissingConfirmation | PasswordPolicyError::Mismatch => {
                ResetField::Confirmation
            }
            PasswordPolicyError::MissingPassword | PasswordPolicyError::TooShort { .. } => {
                ResetField::Password
            }
        }
    }
}

/// Checks run in order; the first failure wins.
pub fn validate_reset(
    password: &str,
    confirmation: &str,
    min_length: usize,
) -> Result<(), PasswordPolicyError> {
    if password.is_empty() {
        return Err(PasswordPolicyError::MissingPassword);
    }

    if confirmation.is_empty() {
        return Err(PasswordPolicyError::MissingConfirmation);
    }

    if password.chars().count() < min_length {
        return Err(PasswordPolicyError::TooShort { min_length });
    }

    if password != confirmation {
        return Err(PasswordPolicyError::Mismatch);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_order() {
        assert_eq!(validate_reset("", "", 8), Err(PasswordPolicyError::MissingPassword));
        assert_eq!(
            validate_reset("short", "", 8),
            Err(PasswordPolicyError::MissingConfirmation)
        );
        // Length is checked before the match
        assert_eq!(
            validate_reset("short", "other", 8),
            Err(PasswordPolicyError::TooShort { min_length: 8 })
        );
        assert_eq!(
            validate_reset("longenough1", "different1", 8),
            Err(PasswordPolicyError::Mismatch)
        );
        assert_eq!(validate_reset("longenough1", "longenough1", 8), Ok(()));
    }

    #[test]
    fn test_messages() {
        let err = validate_reset("short", "short", 8).unwrap_err();
        assert_eq!(err.to_string(), "A senha deve ter pelo menos 8 caracteres.");

        let err = validate_reset("longenough1", "different1", 8).unwrap_err();
        assert_eq!(err.to_string(), "As senhas não coincidem.");
    }

    #[test]
    fn test_length_counts_characters() {
        // 8 characters, more than 8 bytes
        assert_eq!(validate_reset("senhaçãé", "senhaçãé", 8), Ok(()));
        assert!(validate_reset("1234567", "1234567", 8).is_err());
        assert_eq!(validate_reset("12345678", "12345678", 8), Ok(()));
    }

    #[test]
    fn test_error_fields() {
        assert_eq!(PasswordPolicyError::MissingPassword.field(), ResetField::Password);
        assert_eq!(
            PasswordPolicyError::TooShort { min_length: 8 }.field(),
            ResetField::Password
        );
        assert_eq!(
            PasswordPolicyError::MissingConfirmation.field(),
            ResetField::Confirmation
        );
        assert_eq!(PasswordPolicyError::Mismatch.field(), ResetField::Confirmation);
        assert_eq!(ResetField::Confirmation.element_id(), "confirm_password");
    }
}
