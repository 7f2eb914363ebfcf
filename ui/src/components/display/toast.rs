use dioxus::prelude::*;

use crate::features::search::Toast;

#[derive(Props, PartialEq, Clone)]
pub struct ToastStackProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: EventHandler<u64>,
}

/// Bottom-right stack of warning notifications. Timers live with the owner;
/// this only renders and offers a manual close.
#[component]
pub fn ToastStack(props: ToastStackProps) -> Element {
    rsx! {
        div {
            class: "toast-container position-fixed bottom-0 end-0 p-3",
            for toast in props.toasts.iter().cloned() {
                div {
                    key: "{toast.id}",
                    class: "toast show align-items-center text-bg-warning border-0",
                    role: "alert",
                    "aria-live": "assertive",
                    "aria-atomic": "true",
                    div {
                        class: "d-flex",
                        div {
                            class: "toast-body",
                            "⚠ {toast.message}"
                        }
                        button {
                            r#type: "button",
                            class: "btn-close me-2 m-auto",
                            "aria-label": "Fechar",
                            onclick: move |_| props.on_dismiss.call(toast.id),
                        }
                    }
                }
            }
        }
    }
}
