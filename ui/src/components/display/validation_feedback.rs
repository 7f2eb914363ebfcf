use dioxus::prelude::*;

use crate::features::password_reset::PasswordPolicyError;
use crate::features::search::{FieldValidation, TargetKind};

#[derive(Props, PartialEq, Clone)]
pub struct TargetFeedbackProps {
    pub validation: FieldValidation,
    #[props(!optional)]
    pub kind: Option<TargetKind>,
}

#[component]
pub fn TargetFeedback(props: TargetFeedbackProps) -> Element {
    match (props.validation, props.kind) {
        (FieldValidation::Valid, Some(kind)) => rsx! {
            div {
                class: "valid-feedback",
                "✓ {kind.label()} reconhecido"
            }
        },
        (FieldValidation::Invalid, _) => rsx! {
            div {
                class: "invalid-feedback",
                "Informe um IP, domínio ou URL (http/https)."
            }
        },
        _ => rsx! {},
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct FieldErrorProps {
    #[props(!optional)]
    pub error: Option<PasswordPolicyError>,
}

/// Inline message under a password input
#[component]
pub fn FieldError(props: FieldErrorProps) -> Element {
    match props.error {
        Some(error) => rsx! {
            div {
                class: "invalid-feedback",
                "{error}"
            }
        },
        None => rsx! {},
    }
}
