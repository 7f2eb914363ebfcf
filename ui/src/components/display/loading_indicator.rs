use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct LoadingIndicatorProps {
    pub message: String,
    pub visible: bool,
}

/// Spinner shown in place of a button label while a form is submitting
#[component]
pub fn LoadingIndicator(props: LoadingIndicatorProps) -> Element {
    rsx! {
        span {
            class: if props.visible { "btn-loading" } else { "btn-loading d-none" },
            "aria-hidden": "{!props.visible}",
            span {
                class: "spinner-border spinner-border-sm me-2",
                role: "status",
            }
            "{props.message}"
        }
    }
}
