use dioxus::prelude::*;

use ui::{use_session, Navigation, Page, Phase, SessionProvider, Toaster};
use views::{Home, Journal, Login, Stats};

mod views;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Toaster {
            SessionProvider {
                Shell {}
            }
        }
    }
}

/// Routes between the boot screen, the login page and the app itself based
/// on the session phase. Page switching is plain in-app state; logging out
/// snaps it back to the wheel.
#[component]
fn Shell() -> Element {
    let session = use_session();
    let mut page = use_signal(Page::default);

    let (phase, user) = {
        let state = session.state.read();
        (state.phase, state.user.clone())
    };

    match phase {
        Phase::CheckingAuth => rsx! {
            div { class: "boot-screen",
                div { class: "spinner" }
                p { class: "muted", "Načítám aplikaci..." }
            }
        },
        Phase::Unauthenticated | Phase::Authenticating => rsx! {
            Login {}
        },
        Phase::Authenticated => {
            let body = match page() {
                Page::Home => rsx! { Home {} },
                Page::Journal => rsx! { Journal {} },
                Page::Stats => rsx! { Stats {} },
            };
            rsx! {
                div { class: "app-shell",
                    Navigation {
                        current: page(),
                        on_change: move |next: Page| page.set(next),
                        user,
                        on_logout: {
                            let session = session.clone();
                            move |_| {
                                page.set(Page::Home);
                                let session = session.clone();
                                spawn(async move {
                                    session.logout().await;
                                });
                            }
                        },
                    }
                    main { class: "app-main", {body} }
                }
            }
        }
    }
}
