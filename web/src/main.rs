use dioxus::prelude::*;
use ui::{AppShell, PasswordResetPage, SearchPage};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        // Bootstrap and its icon font are loaded from web/index.html

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/reset-password?:token")]
    ResetPassword { token: String },
}

#[component]
fn Home() -> Element {
    rsx! {
        AppShell {
            SearchPage {}
        }
    }
}

#[component]
fn ResetPassword(token: String) -> Element {
    let token = if token.is_empty() { None } else { Some(token) };

    rsx! {
        AppShell {
            PasswordResetPage { token: token }
        }
    }
}
