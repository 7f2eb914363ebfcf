use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::components::{
    display::{TargetFeedback, ToastStack},
    inputs::{InputType, ValidatedInput},
};
use crate::features::search::{SearchAction, SearchState, SubmitOutcome};
use crate::services::config::UiConfig;
use crate::utils::{focus_element, submit_form};
use crate::{console_info, console_warn};

pub const SEARCH_INPUT_ID: &str = "search-ip";
pub const SEARCH_FORM_ID: &str = "search-form";
pub const CLEAR_BUTTON_ID: &str = "clear-form";

#[derive(Props, PartialEq, Clone)]
pub struct SearchFormProps {
    /// Where the native submission goes
    pub action: String,
}

/// Fallback guard for the target search box
#[component]
pub fn SearchForm(props: SearchFormProps) -> Element {
    let config = try_use_context::<UiConfig>().unwrap_or_default();
    let dismiss_after_ms = config.search.notification_timeout_ms;

    let mut state = use_signal(SearchState::default);

    let dispatch = EventHandler::new(move |action: SearchAction| {
        state.with_mut(|s| s.reduce_in_place(action));
    });

    let input_class = format!("form-control {}", state().validation.css_class());

    rsx! {
        form {
            id: SEARCH_FORM_ID,
            class: "search-form",
            action: "{props.action}",
            method: "get",
            novalidate: true,
            onsubmit: move |event: FormEvent| {
                event.prevent_default();

                match state.with_mut(|s| s.submit()) {
                    SubmitOutcome::Allowed(target) => {
                        console_info!("[Search] Submitting target {}", target);
                        if let Err(e) = submit_form(SEARCH_FORM_ID) {
                            console_warn!("[Search] Native submit unavailable: {}", e);
                        }
                    }
                    SubmitOutcome::Blocked { toast_id } => {
                        spawn(async move {
                            TimeoutFuture::new(dismiss_after_ms).await;
                            dispatch.call(SearchAction::DismissToast(toast_id));
                        });
                    }
                }
            },

            div {
                class: "input-group has-validation",
                ValidatedInput {
                    id: SEARCH_INPUT_ID.to_string(),
                    name: "ip".to_string(),
                    value: state().query,
                    placeholder: "IP, domínio ou URL".to_string(),
                    input_type: InputType::Text,
                    input_class: input_class,
                    on_change: move |value: String| {
                        dispatch.call(SearchAction::Input(value));
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    "Pesquisar"
                }
                button {
                    id: CLEAR_BUTTON_ID,
                    class: "btn btn-outline-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        dispatch.call(SearchAction::Clear);
                        if let Err(e) = focus_element(SEARCH_INPUT_ID) {
                            console_warn!("[Search] Could not refocus input: {}", e);
                        }
                    },
                    "Limpar"
                }
                TargetFeedback {
                    validation: state().validation,
                    kind: state().target_kind(),
                }
            }
        }

        ToastStack {
            toasts: state().toasts,
            on_dismiss: move |id: u64| {
                dispatch.call(SearchAction::DismissToast(id));
            }
        }
    }
}
