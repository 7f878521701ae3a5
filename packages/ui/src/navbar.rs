//! Top navigation bar and the in-memory page switch.

use api::User;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBookOpen, FaChartColumn, FaHouse, FaLeaf};
use dioxus_free_icons::Icon;

/// The three app screens. Navigation is a plain enum in a signal rather than
/// URL routing; the selection deliberately does not survive a reload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Journal,
    Stats,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Journal, Page::Stats];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Domů",
            Page::Journal => "Deník",
            Page::Stats => "Statistiky",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Journal => "journal",
            Page::Stats => "stats",
        }
    }

    fn from_key(key: &str) -> Page {
        Page::ALL
            .into_iter()
            .find(|p| p.key() == key)
            .unwrap_or_default()
    }
}

#[component]
fn PageIcon(page: Page) -> Element {
    match page {
        Page::Home => rsx! { Icon { icon: FaHouse, width: 16, height: 16 } },
        Page::Journal => rsx! { Icon { icon: FaBookOpen, width: 16, height: 16 } },
        Page::Stats => rsx! { Icon { icon: FaChartColumn, width: 16, height: 16 } },
    }
}

/// Sticky header: product mark, page tabs, welcome line and logout. Mobile
/// widths collapse the tabs into a select plus an icon bar.
#[component]
pub fn Navigation(
    current: Page,
    on_change: EventHandler<Page>,
    user: Option<User>,
    on_logout: EventHandler<()>,
) -> Element {
    let user_name = user.map(|u| u.name).unwrap_or_default();

    rsx! {
        header { class: "navbar",
            div { class: "navbar-inner",
                div { class: "navbar-brand",
                    div { class: "navbar-logo",
                        Icon { icon: FaLeaf, width: 18, height: 18 }
                    }
                    div {
                        h1 { class: "navbar-title", "Kolo pohody" }
                        p { class: "navbar-subtitle", "Vítejte, {user_name}" }
                    }
                }

                nav { class: "navbar-tabs",
                    for page in Page::ALL {
                        button {
                            key: "{page.key()}",
                            class: if page == current { "nav-tab nav-tab-active" } else { "nav-tab" },
                            onclick: move |_| on_change.call(page),
                            PageIcon { page }
                            span { "{page.label()}" }
                        }
                    }
                }

                div { class: "navbar-mobile-select",
                    select {
                        value: "{current.key()}",
                        onchange: move |evt| on_change.call(Page::from_key(&evt.value())),
                        for page in Page::ALL {
                            option { key: "{page.key()}", value: "{page.key()}", "{page.label()}" }
                        }
                    }
                }

                div { class: "navbar-user",
                    button {
                        class: "nav-logout",
                        onclick: move |_| on_logout.call(()),
                        "Odhlásit se"
                    }
                }
            }

            div { class: "navbar-mobile-bar",
                for page in Page::ALL {
                    button {
                        key: "{page.key()}",
                        class: if page == current { "nav-tab nav-tab-active" } else { "nav-tab" },
                        onclick: move |_| on_change.call(page),
                        PageIcon { page }
                    }
                }
            }
        }
    }
}
