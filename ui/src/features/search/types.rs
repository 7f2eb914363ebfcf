// Search fallback guard state - no dioxus imports needed here
use tracing::{debug, info};

use super::classifier::{classify, is_valid_target, TargetKind};

pub const INVALID_TARGET_MESSAGE: &str = "Por favor, insira um IP, domínio ou URL válido.";

/// Validation status of a single text input
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FieldValidation {
    #[default]
    Untouched,
    Valid,
    Invalid,
}

impl FieldValidation {
    /// Status for the raw value of an `input` event
    pub fn from_input(raw: &str) -> Self {
        let value = raw.trim();
        if value.is_empty() {
            FieldValidation::Untouched
        } else if is_valid_target(value) {
            FieldValidation::Valid
        } else {
            FieldValidation::Invalid
        }
    }

    /// Bootstrap validity class, empty when untouched
    pub fn css_class(&self) -> &'static str {
        match self {
            FieldValidation::Untouched => "",
            FieldValidation::Valid => "is-valid",
            FieldValidation::Invalid => "is-invalid",
        }
    }
}

/// A transient notification waiting for its dismiss timer
#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

#[derive(Clone, PartialEq, Debug)]
pub enum SubmitOutcome {
    /// The native submission may proceed with this trimmed value
    Allowed(String),
    /// Submission cancelled; carries the id of the toast that was raised
    Blocked { toast_id: u64 },
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum SearchAction {
    Input(String),
    Clear,
    DismissToast(u64),
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct SearchState {
    pub query: String,
    pub validation: FieldValidation,
    pub toasts: Vec<Toast>,
    next_toast_id: u64,
}

impl SearchState {
    pub fn reduce_in_place(&mut self, action: SearchAction) {
        match action {
            SearchAction::Input(value) => {
                self.validation = FieldValidation::from_input(&value);
                self.query = value;
            }
            SearchAction::Clear => {
                self.query.clear();
                self.validation = FieldValidation::Untouched;
            }
            SearchAction::DismissToast(id) => {
                self.toasts.retain(|toast| toast.id != id);
            }
        }
    }

    /// Re-run the classifier on the trimmed query. A rejection leaves the
    /// field invalid and queues a notification.
    pub fn submit(&mut self) -> SubmitOutcome {
        let value = self.query.trim();

        if is_valid_target(value) {
            info!(query = %value, "search submission allowed");
            return SubmitOutcome::Allowed(value.to_string());
        }

        debug!(query = %value, "search submission blocked");
        self.validation = FieldValidation::Invalid;
        let toast_id = self.push_toast(INVALID_TARGET_MESSAGE);
        SubmitOutcome::Blocked { toast_id }
    }

    /// Which shape the current query matches, for the hint under the field
    pub fn target_kind(&self) -> Option<TargetKind> {
        match self.validation {
            FieldValidation::Valid => classify(self.query.trim()),
            _ => None,
        }
    }

    fn push_toast(&mut self, message: &str) -> u64 {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.to_string(),
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(value: &str) -> SearchState {
        let mut state = SearchState::default();
        state.reduce_in_place(SearchAction::Input(value.to_string()));
        state
    }

    #[test]
    fn test_input_transitions() {
        assert_eq!(typed("").validation, FieldValidation::Untouched);
        assert_eq!(typed("   ").validation, FieldValidation::Untouched);
        assert_eq!(typed("8.8.8.8").validation, FieldValidation::Valid);
        assert_eq!(typed(" example.com ").validation, FieldValidation::Valid);
        assert_eq!(typed("not a domain!").validation, FieldValidation::Invalid);
    }

    #[test]
    fn test_css_classes() {
        assert_eq!(FieldValidation::Untouched.css_class(), "");
        assert_eq!(FieldValidation::Valid.css_class(), "is-valid");
        assert_eq!(FieldValidation::Invalid.css_class(), "is-invalid");
    }

    #[test]
    fn test_valid_ip_submits() {
        let mut state = typed("8.8.8.8");
        assert_eq!(state.submit(), SubmitOutcome::Allowed("8.8.8.8".to_string()));
        assert!(state.toasts.is_empty());
        assert_eq!(state.target_kind(), Some(TargetKind::Ipv4));
    }

    #[test]
    fn test_submit_uses_trimmed_value() {
        let mut state = typed("  https://example.com/a  ");
        assert_eq!(
            state.submit(),
            SubmitOutcome::Allowed("https://example.com/a".to_string())
        );
    }

    #[test]
    fn test_invalid_target_blocks_and_notifies() {
        let mut state = typed("not a domain!");
        let outcome = state.submit();

        assert_eq!(outcome, SubmitOutcome::Blocked { toast_id: 0 });
        assert_eq!(state.validation, FieldValidation::Invalid);
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].message, INVALID_TARGET_MESSAGE);
    }

    #[test]
    fn test_empty_query_submits() {
        // The classifier accepts "", so an empty search goes through.
        let mut state = SearchState::default();
        assert_eq!(state.submit(), SubmitOutcome::Allowed(String::new()));
    }

    #[test]
    fn test_toasts_dismiss_independently() {
        let mut state = typed("bad value!");
        state.submit();
        state.submit();
        assert_eq!(state.toasts.len(), 2);

        state.reduce_in_place(SearchAction::DismissToast(0));
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].id, 1);

        // A stale timer for an already dismissed toast is harmless
        state.reduce_in_place(SearchAction::DismissToast(0));
        assert_eq!(state.toasts.len(), 1);
    }

    #[test]
    fn test_clear_resets_to_untouched() {
        let mut state = typed("not a domain!");
        state.submit();
        state.reduce_in_place(SearchAction::Clear);

        assert_eq!(state.query, "");
        assert_eq!(state.validation, FieldValidation::Untouched);
        // Notifications run out their own timers
        assert_eq!(state.toasts.len(), 1);
    }
}
