use dioxus::prelude::*;
use std::rc::Rc;

use crate::features::sidebar::{SidebarAction, SidebarEffect, SidebarState};
use crate::services::config::UiConfig;
use crate::services::storage::{LocalPreferenceStore, PreferenceStore};
use crate::utils::{viewport_width, ResizeListener};
use crate::{console_debug, console_warn};

pub const SIDEBAR_ID: &str = "sidebar";
pub const SIDEBAR_TOGGLE_ID: &str = "sidebarCollapseBtn";

#[derive(Props, PartialEq, Clone)]
pub struct SidebarProps {
    pub title: String,
    pub children: Element,
}

/// Collapsible navigation sidebar.
///
/// One window `resize` listener for the component's lifetime and one pair of
/// pointer handlers; both consult the current viewport class instead of being
/// re-registered when the desktop threshold is crossed.
#[component]
pub fn Sidebar(props: SidebarProps) -> Element {
    let config = try_use_context::<UiConfig>().unwrap_or_default();
    let breakpoint = config.sidebar.mobile_breakpoint_px;

    let store = use_hook(|| -> Rc<dyn PreferenceStore> {
        Rc::new(LocalPreferenceStore::new(config.sidebar.storage_key.clone()))
    });

    let mut state = use_signal({
        let store = store.clone();
        move || {
            // Unknown width counts as desktop so the stored preference applies
            let width = viewport_width().unwrap_or(breakpoint);
            SidebarState::restore(store.load_collapsed(), width, breakpoint)
        }
    });

    use_hook(move || {
        let listener = ResizeListener::install(move |width| {
            state.with_mut(|s| {
                s.reduce_in_place(SidebarAction::Resize(width));
            });
        });
        match listener {
            Ok(listener) => Some(Rc::new(listener)),
            Err(e) => {
                console_warn!("[Sidebar] Resize tracking disabled: {}", e);
                None
            }
        }
    });

    let current = state();

    rsx! {
        aside {
            id: SIDEBAR_ID,
            class: "{current.css_class()}",
            onmouseenter: move |_| {
                state.with_mut(|s| {
                    s.reduce_in_place(SidebarAction::PointerEnter);
                });
            },
            onmouseleave: move |_| {
                state.with_mut(|s| {
                    s.reduce_in_place(SidebarAction::PointerLeave);
                });
            },

            div {
                class: "sidebar-header",
                span {
                    class: "sidebar-title",
                    "{props.title}"
                }
                button {
                    id: SIDEBAR_TOGGLE_ID,
                    class: "btn btn-sm btn-outline-light",
                    r#type: "button",
                    "aria-controls": SIDEBAR_ID,
                    "aria-expanded": "{!current.collapsed}",
                    onclick: move |_| {
                        let effect = state.with_mut(|s| s.reduce_in_place(SidebarAction::Toggle));
                        if let Some(SidebarEffect::PersistCollapsed(collapsed)) = effect {
                            console_debug!("[Sidebar] Persisting collapsed={}", collapsed);
                            if let Err(e) = store.save_collapsed(collapsed) {
                                console_warn!("[Sidebar] Preference not saved: {}", e);
                            }
                        }
                    },
                    i { class: "{current.icon_class()}" }
                }
            }

            nav {
                class: "sidebar-body",
                {props.children}
            }
        }
    }
}
