use dioxus::prelude::*;

use crate::components::{
    display::{FieldError, LoadingIndicator},
    inputs::{InputType, ValidatedInput},
};
use crate::features::password_reset::{
    PasswordResetAction, PasswordResetState, ResetField, ResetOutcome, SoftHooks,
};
use crate::services::config::UiConfig;
use crate::utils::{focus_element, submit_form};
use crate::{console_debug, console_warn};

pub const RESET_FORM_ID: &str = "reset-form";
pub const RESET_BUTTON_ID: &str = "reset-btn";

#[derive(Props, PartialEq, Clone)]
pub struct PasswordResetFormProps {
    /// Server endpoint receiving the new password
    pub action: String,
    /// Reset token forwarded as a hidden field
    #[props(!optional)]
    pub token: Option<String>,
    /// Strength/match helpers; defaults to whatever the page defines on `window`
    #[props(default = SoftHooks::window())]
    pub hooks: SoftHooks,
}

#[component]
pub fn PasswordResetForm(props: PasswordResetFormProps) -> Element {
    let config = try_use_context::<UiConfig>().unwrap_or_default();
    let min_length = config.password.min_length;

    let mut state = use_signal(move || PasswordResetState::new(min_length));
    let hooks = props.hooks.clone();

    let mut dispatch = move |action: PasswordResetAction| {
        state.with_mut(|s| s.reduce_in_place(action));
        let current = state.read();
        for e in hooks.run(&current.password.value, &current.confirmation.value) {
            console_warn!("[PasswordReset] Page helper failed: {}", e);
        }
    };
    let mut dispatch_confirmation = dispatch.clone();

    let current = state();

    rsx! {
        form {
            id: RESET_FORM_ID,
            class: "reset-form",
            action: "{props.action}",
            method: "post",
            novalidate: true,
            onsubmit: move |event: FormEvent| {
                event.prevent_default();

                match state.with_mut(|s| s.submit()) {
                    ResetOutcome::Proceed => {
                        if let Err(e) = submit_form(RESET_FORM_ID) {
                            console_warn!("[PasswordReset] Native submit unavailable: {}", e);
                        }
                    }
                    ResetOutcome::Rejected(field) => {
                        console_debug!("[PasswordReset] Rejected at {:?}", field);
                        if let Err(e) = focus_element(field.element_id()) {
                            console_warn!("[PasswordReset] Could not focus field: {}", e);
                        }
                    }
                    ResetOutcome::InFlight => {}
                }
            },

            if let Some(token) = props.token.clone() {
                input {
                    r#type: "hidden",
                    name: "token",
                    value: "{token}",
                }
            }

            div {
                class: "mb-3",
                label {
                    class: "form-label",
                    r#for: ResetField::Password.element_id(),
                    "Nova senha"
                }
                ValidatedInput {
                    id: ResetField::Password.element_id().to_string(),
                    name: "password".to_string(),
                    value: current.password.value.clone(),
                    placeholder: format!("Mínimo de {} caracteres", min_length),
                    input_type: InputType::Password,
                    input_class: current.password.css_class().to_string(),
                    autocomplete: "new-password".to_string(),
                    on_change: move |value: String| {
                        dispatch(PasswordResetAction::SetPassword(value));
                    }
                }
                FieldError { error: current.password.error.clone() }
            }

            div {
                class: "mb-3",
                label {
                    class: "form-label",
                    r#for: ResetField::Confirmation.element_id(),
                    "Confirme a nova senha"
                }
                ValidatedInput {
                    id: ResetField::Confirmation.element_id().to_string(),
                    name: "confirm_password".to_string(),
                    value: current.confirmation.value.clone(),
                    placeholder: "Repita a senha".to_string(),
                    input_type: InputType::Password,
                    input_class: current.confirmation.css_class().to_string(),
                    autocomplete: "new-password".to_string(),
                    on_change: move |value: String| {
                        dispatch_confirmation(PasswordResetAction::SetConfirmation(value));
                    }
                }
                FieldError { error: current.confirmation.error.clone() }
            }

            button {
                id: RESET_BUTTON_ID,
                class: "btn btn-primary w-100",
                r#type: "submit",
                disabled: current.is_submitting,
                span {
                    class: if current.is_submitting { "btn-text d-none" } else { "btn-text" },
                    "Redefinir senha"
                }
                LoadingIndicator {
                    message: "Enviando...".to_string(),
                    visible: current.is_submitting,
                }
            }
        }
    }
}
