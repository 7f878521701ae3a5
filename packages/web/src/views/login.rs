//! Login page view with OAuth buttons and the demo login form.

use dioxus::prelude::*;
use ui::icons::brands::{FaApple, FaChrome};
use ui::icons::{FaEnvelope, FaLeaf, FaSpinner};
use ui::{use_session, Icon, Phase};

/// The demo button stays disabled until both fields have something in them.
/// Whitespace counts; trimming is the backend's problem.
fn can_submit(authenticating: bool, email: &str, name: &str) -> bool {
    !authenticating && !email.is_empty() && !name.is_empty()
}

/// Login page component.
#[component]
pub fn Login() -> Element {
    let session = use_session();
    let mut email = use_signal(|| "demo@example.com".to_string());
    let mut name = use_signal(|| "Demo Uživatel".to_string());

    let authenticating = session.state.read().phase == Phase::Authenticating;

    let submit = {
        let session = session.clone();
        move |_| {
            let session = session.clone();
            let email = email.peek().clone();
            let name = name.peek().clone();
            spawn(async move {
                session.demo_login(&email, &name).await;
            });
        }
    };

    rsx! {
        div { class: "login-screen",
            div { class: "login-column",
                div { class: "login-hero",
                    div { class: "login-leaf",
                        Icon { icon: FaLeaf, width: 32, height: 32 }
                    }
                    h1 { "Kolo pohody" }
                    p { class: "muted", "Váš průvodce k holistickému životu" }
                }

                div { class: "card login-card",
                    div { class: "login-card-head",
                        h2 { "Přihlášení" }
                        p { class: "muted", "Vyberte způsob přihlášení do aplikace" }
                    }

                    div { class: "oauth-buttons",
                        button {
                            class: "btn btn-outline btn-block",
                            disabled: authenticating,
                            onclick: {
                                let session = session.clone();
                                move |_| session.oauth_login("google")
                            },
                            Icon { icon: FaChrome, width: 16, height: 16 }
                            span { "Pokračovat s Google" }
                        }
                        button {
                            class: "btn btn-outline btn-block",
                            disabled: authenticating,
                            onclick: {
                                let session = session.clone();
                                move |_| session.oauth_login("microsoft")
                            },
                            Icon { icon: FaEnvelope, width: 16, height: 16 }
                            span { "Pokračovat s Microsoft" }
                        }
                        button {
                            class: "btn btn-outline btn-block",
                            disabled: authenticating,
                            onclick: {
                                let session = session.clone();
                                move |_| session.oauth_login("apple")
                            },
                            Icon { icon: FaApple, width: 16, height: 16 }
                            span { "Pokračovat s Apple" }
                        }
                    }

                    div { class: "separator",
                        span { "Nebo" }
                    }

                    div { class: "field",
                        label { r#for: "demo-email", "Demo přihlášení" }
                        input {
                            id: "demo-email",
                            r#type: "email",
                            placeholder: "váš@email.cz",
                            value: "{email}",
                            disabled: authenticating,
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }
                    div { class: "field",
                        label { r#for: "demo-name", "Jméno" }
                        input {
                            id: "demo-name",
                            r#type: "text",
                            placeholder: "Vaše jméno",
                            value: "{name}",
                            disabled: authenticating,
                            oninput: move |evt: FormEvent| name.set(evt.value()),
                        }
                    }
                    button {
                        class: "btn btn-primary btn-block",
                        disabled: !can_submit(authenticating, &email.read(), &name.read()),
                        onclick: submit,
                        if authenticating {
                            span { class: "spin",
                                Icon { icon: FaSpinner, width: 14, height: 14 }
                            }
                            span { "Přihlašuji..." }
                        } else {
                            span { "Demo přihlášení" }
                        }
                    }
                }

                div { class: "card features-card",
                    h3 { "Co vás čeká:" }
                    ul {
                        li { "Interaktivní kolo pohody pro sledování vašich potřeb" }
                        li { "Deník pro zaznamenání drobných radostí" }
                        li { "Jemná připomenutí a inspirace" }
                        li { "Přehled vašeho růstu a pokroku" }
                    }
                }

                p { class: "login-footer muted",
                    "Přihlášením souhlasíte s našimi podmínkami použití a zásadami ochrany osobních údajů."
                }
            }
        }
    }
}
