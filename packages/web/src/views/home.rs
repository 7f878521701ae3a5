//! Home view: greeting, daily inspiration and the wellness wheel.

use dioxus::prelude::*;
use ui::{use_session, use_toasts, InspirationCard, WellnessWheel};

#[component]
pub fn Home() -> Element {
    let session = use_session();
    let mut toasts = use_toasts();

    let (categories, scores) = {
        let state = session.state.read();
        (state.categories.clone(), state.scores())
    };

    rsx! {
        div { class: "page home-page",
            div { class: "page-head",
                h2 { "Jak se dnes cítíte?" }
                p { class: "muted",
                    "Aktualizujte své kolo pohody a sledujte svůj pokrok v různých oblastech života."
                }
            }

            div { class: "inspo-slot",
                InspirationCard {}
            }

            WellnessWheel {
                categories,
                scores,
                on_score_change: {
                    let session = session.clone();
                    move |(category_id, score): (i64, u8)| {
                        let session = session.clone();
                        spawn(async move {
                            session.record_score(category_id, score).await;
                        });
                    }
                },
                // Category editing is not built yet.
                on_category_edit: move |_| {
                    toasts.info(
                        "Funkce v přípravě",
                        "Úprava kategorií bude dostupná v další verzi.",
                    );
                },
            }
        }
    }
}
