use dioxus::prelude::*;

use crate::components::layout::Sidebar;
use crate::console_warn;
use crate::services::config::UiConfig;

const UI_CSS: Asset = asset!("/assets/styling/ui.css");

#[derive(Props, PartialEq, Clone)]
pub struct AppShellProps {
    /// JSON overrides for [`UiConfig`]; invalid documents fall back to defaults
    #[props(default)]
    pub config_json: Option<String>,
    pub children: Element,
}

/// Provides configuration and wraps every page in the sidebar layout
#[component]
pub fn AppShell(props: AppShellProps) -> Element {
    use_context_provider(|| match props.config_json.as_deref() {
        Some(json) => UiConfig::from_json(json).unwrap_or_else(|e| {
            console_warn!("[AppShell] Ignoring configuration: {}", e);
            UiConfig::default()
        }),
        None => UiConfig::default(),
    });

    rsx! {
        document::Link { rel: "stylesheet", href: UI_CSS }

        div {
            class: "app-shell d-flex",
            Sidebar {
                title: "Menu".to_string(),
                ul {
                    class: "nav flex-column",
                    li {
                        class: "nav-item",
                        a { class: "nav-link", href: "/", title: "Pesquisa", "🔎 Pesquisa" }
                    }
                    li {
                        class: "nav-item",
                        a { class: "nav-link", href: "/reset-password", title: "Redefinir senha", "🔑 Redefinir senha" }
                    }
                }
            }
            main {
                class: "app-content flex-grow-1 p-4",
                {props.children}
            }
        }
    }
}
