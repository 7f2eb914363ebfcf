use dioxus::prelude::*;

use crate::components::forms::{PasswordResetForm, SearchForm};

#[component]
pub fn SearchPage() -> Element {
    rsx! {
        section {
            class: "search-page",
            h1 { class: "h4 mb-3", "Pesquisar alvo" }
            p {
                class: "text-muted",
                "Digite um endereço IP, um domínio ou uma URL completa."
            }
            SearchForm { action: "/search".to_string() }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct PasswordResetPageProps {
    #[props(!optional)]
    pub token: Option<String>,
}

#[component]
pub fn PasswordResetPage(props: PasswordResetPageProps) -> Element {
    rsx! {
        section {
            class: "reset-page",
            style: "max-width: 28rem;",
            h1 { class: "h4 mb-3", "Redefinir senha" }
            PasswordResetForm {
                action: "/reset-password".to_string(),
                token: props.token.clone(),
            }
        }
    }
}
