use tracing::{debug, info};

use super::policy::{validate_reset, PasswordPolicyError, ResetField};

#[derive(Clone, PartialEq, Debug, Default)]
pub struct PasswordField {
    pub value: String,
    pub error: Option<PasswordPolicyError>,
}

impl PasswordField {
    pub fn css_class(&self) -> &'static str {
        if self.error.is_some() {
            "form-control is-invalid"
        } else {
            "form-control"
        }
    }
}

#[derive(Clone, Debug)]
pub enum PasswordResetAction {
    SetPassword(String),
    SetConfirmation(String),
}

#[derive(Clone, PartialEq, Debug)]
pub enum ResetOutcome {
    /// Let the native submission go ahead
    Proceed,
    /// Submission cancelled; focus this field
    Rejected(ResetField),
    /// A submission is already on its way
    InFlight,
}

#[derive(Clone, PartialEq, Debug)]
pub struct PasswordResetState {
    pub password: PasswordField,
    pub confirmation: PasswordField,
    /// Submit button shows the loading indicator and stays disabled
    pub is_submitting: bool,
    min_length: usize,
}

impl PasswordResetState {
    pub fn new(min_length: usize) -> Self {
        Self {
            password: PasswordField::default(),
            confirmation: PasswordField::default(),
            is_submitting: false,
            min_length,
        }
    }

    /// Typing clears that field's invalid marker
    pub fn reduce_in_place(&mut self, action: PasswordResetAction) {
        match action {
            PasswordResetAction::SetPassword(value) => {
                self.password.value = value;
                self.password.error = None;
            }
            PasswordResetAction::SetConfirmation(value) => {
                self.confirmation.value = value;
                self.confirmation.error = None;
            }
        }
    }

    pub fn submit(&mut self) -> ResetOutcome {
        if self.is_submitting {
            return ResetOutcome::InFlight;
        }

        match validate_reset(&self.password.value, &self.confirmation.value, self.min_length) {
            Ok(()) => {
                info!("password reset submission allowed");
                self.is_submitting = true;
                ResetOutcome::Proceed
            }
            Err(error) => {
                let field = error.field();
                debug!(?field, %error, "password reset submission blocked");
                self.field_mut(field).error = Some(error);
                ResetOutcome::Rejected(field)
            }
        }
    }

    pub fn field(&self, field: ResetField) -> &PasswordField {
        match field {
            ResetField::Password => &self.password,
            ResetField::Confirmation => &self.confirmation,
        }
    }

    fn field_mut(&mut self, field: ResetField) -> &mut PasswordField {
        match field {
            ResetField::Password => &mut self.password,
            ResetField::Confirmation => &mut self.confirmation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(password: &str, confirmation: &str) -> PasswordResetState {
        let mut state = PasswordResetState::new(8);
        state.reduce_in_place(PasswordResetAction::SetPassword(password.to_string()));
        state.reduce_in_place(PasswordResetAction::SetConfirmation(confirmation.to_string()));
        state
    }

    #[test]
    fn test_short_password_is_rejected() {
        let mut state = filled("short", "short");
        assert_eq!(state.submit(), ResetOutcome::Rejected(ResetField::Password));

        let error = state.password.error.as_ref().unwrap();
        assert_eq!(error.to_string(), "A senha deve ter pelo menos 8 caracteres.");
        assert_eq!(state.password.css_class(), "form-control is-invalid");
        assert!(state.confirmation.error.is_none());
        assert!(!state.is_submitting);
    }

    #[test]
    fn test_mismatch_is_rejected() {
        let mut state = filled("longenough1", "different1");
        assert_eq!(state.submit(), ResetOutcome::Rejected(ResetField::Confirmation));
        assert_eq!(
            state.confirmation.error.as_ref().unwrap().to_string(),
            "As senhas não coincidem."
        );
    }

    #[test]
    fn test_matching_passwords_enter_loading_state() {
        let mut state = filled("longenough1", "longenough1");
        assert_eq!(state.submit(), ResetOutcome::Proceed);
        assert!(state.is_submitting);
        assert!(state.password.error.is_none());
        assert!(state.confirmation.error.is_none());

        assert_eq!(state.submit(), ResetOutcome::InFlight);
    }

    #[test]
    fn test_empty_fields_rejected_in_order() {
        let mut state = PasswordResetState::new(8);
        assert_eq!(state.submit(), ResetOutcome::Rejected(ResetField::Password));

        state.reduce_in_place(PasswordResetAction::SetPassword("longenough1".to_string()));
        assert_eq!(state.submit(), ResetOutcome::Rejected(ResetField::Confirmation));
        assert_eq!(
            state.field(ResetField::Confirmation).error,
            Some(PasswordPolicyError::MissingConfirmation)
        );
    }

    #[test]
    fn test_typing_clears_only_that_field() {
        let mut state = filled("", "");
        state.submit();
        state.confirmation.error = Some(PasswordPolicyError::Mismatch);

        state.reduce_in_place(PasswordResetAction::SetPassword("x".to_string()));
        assert!(state.password.error.is_none());
        assert!(state.confirmation.error.is_some());

        state.reduce_in_place(PasswordResetAction::SetConfirmation("x".to_string()));
        assert!(state.confirmation.error.is_none());
    }

    #[test]
    fn test_min_length_comes_from_config() {
        let mut state = PasswordResetState::new(12);
        state.reduce_in_place(PasswordResetAction::SetPassword("longenough1".to_string()));
        state.reduce_in_place(PasswordResetAction::SetConfirmation("longenough1".to_string()));
        assert_eq!(state.submit(), ResetOutcome::Rejected(ResetField::Password));
        assert_eq!(
            state.password.error,
            Some(PasswordPolicyError::TooShort { min_length: 12 })
        );
    }
}
