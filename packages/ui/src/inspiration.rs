//! Daily inspiration card.
//!
//! The daily piece loads silently on mount; a missing inspiration is never
//! worth an error toast, the card just offers a retry. Generating a new one
//! is explicit and does toast.

use api::{ApiClient, Inspiration, InspirationKind};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaArrowsRotate, FaComment, FaHeart, FaLightbulb, FaSpinner, FaStar, FaWandMagicSparkles,
};
use dioxus_free_icons::Icon;

use crate::toast::use_toasts;

fn kind_label(kind: InspirationKind) -> &'static str {
    match kind {
        InspirationKind::DailyQuote => "Citát dne",
        InspirationKind::WellnessTip => "Wellness tip",
        InspirationKind::ReflectionPrompt => "Zamyšlení",
        InspirationKind::Affirmation => "Afirmace",
    }
}

fn kind_button_label(kind: InspirationKind) -> &'static str {
    match kind {
        InspirationKind::DailyQuote => "Citát",
        InspirationKind::WellnessTip => "Tip",
        InspirationKind::ReflectionPrompt => "Zamyšlení",
        InspirationKind::Affirmation => "Afirmace",
    }
}

fn kind_class(kind: InspirationKind) -> &'static str {
    match kind {
        InspirationKind::DailyQuote => "kind-quote",
        InspirationKind::WellnessTip => "kind-tip",
        InspirationKind::ReflectionPrompt => "kind-reflection",
        InspirationKind::Affirmation => "kind-affirmation",
    }
}

#[component]
fn KindIcon(kind: InspirationKind, #[props(default = 16)] size: u32) -> Element {
    match kind {
        InspirationKind::DailyQuote => rsx! { Icon { icon: FaComment, width: size, height: size } },
        InspirationKind::WellnessTip => {
            rsx! { Icon { icon: FaLightbulb, width: size, height: size } }
        }
        InspirationKind::ReflectionPrompt => {
            rsx! { Icon { icon: FaHeart, width: size, height: size } }
        }
        InspirationKind::Affirmation => rsx! { Icon { icon: FaStar, width: size, height: size } },
    }
}

#[component]
pub fn InspirationCard() -> Element {
    let client = use_context::<ApiClient>();
    let toasts = use_toasts();
    let mut inspiration = use_signal(|| Option::<Inspiration>::None);
    let mut loading = use_signal(|| true);
    let mut generating = use_signal(|| false);

    let _daily = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                match client.daily_inspiration().await {
                    Ok(piece) => inspiration.set(Some(piece)),
                    Err(err) => tracing::debug!("daily inspiration unavailable: {err}"),
                }
                loading.set(false);
            }
        }
    });

    let generate = {
        let client = client.clone();
        move |wanted: Option<InspirationKind>| {
            let client = client.clone();
            let current = inspiration.peek().as_ref().map(|piece| piece.kind);
            spawn(async move {
                let mut toasts = toasts;
                generating.set(true);
                let kind = wanted.or(current).unwrap_or(InspirationKind::DailyQuote);
                match client.generate_inspiration(kind).await {
                    Ok(piece) => {
                        inspiration.set(Some(piece));
                        toasts.success("Nová inspirace", "Vygenerovali jsme pro vás novou inspiraci.");
                    }
                    Err(err) => {
                        tracing::warn!("generate inspiration failed: {err}");
                        toasts.error("Chyba při generování", "Nepodařilo se vygenerovat novou inspiraci.");
                    }
                }
                generating.set(false);
            });
        }
    };

    if loading() {
        return rsx! {
            div { class: "card inspo-card",
                div { class: "spinner" }
            }
        };
    }

    let Some(piece) = inspiration() else {
        return rsx! {
            div { class: "card inspo-card inspo-empty",
                Icon { icon: FaWandMagicSparkles, width: 48, height: 48 }
                p { class: "muted", "Nepodařilo se načíst dnešní inspiraci." }
                button {
                    class: "btn btn-outline",
                    onclick: {
                        let generate = generate.clone();
                        move |_| generate(None)
                    },
                    Icon { icon: FaArrowsRotate, width: 14, height: 14 }
                    span { "Zkusit znovu" }
                }
            }
        };
    };

    rsx! {
        div { class: "card inspo-card",
            div { class: "inspo-head",
                div { class: "inspo-kind",
                    span { class: "kind-circle {kind_class(piece.kind)}",
                        KindIcon { kind: piece.kind }
                    }
                    div {
                        h3 { "Inspirace dne" }
                        span { class: "badge", "{kind_label(piece.kind)}" }
                    }
                }
                button {
                    class: "btn-icon",
                    disabled: generating(),
                    onclick: {
                        let generate = generate.clone();
                        move |_| generate(None)
                    },
                    if generating() {
                        span { class: "spin", Icon { icon: FaSpinner, width: 16, height: 16 } }
                    } else {
                        Icon { icon: FaArrowsRotate, width: 16, height: 16 }
                    }
                }
            }

            blockquote { "\"{piece.content}\"" }

            if piece.is_cached {
                p { class: "muted inspo-cached", "Vaše dnešní inspirace" }
            }

            div { class: "inspo-actions",
                for kind in InspirationKind::ALL {
                    button {
                        key: "{kind.as_str()}",
                        class: "btn btn-outline btn-sm",
                        disabled: generating(),
                        onclick: {
                            let generate = generate.clone();
                            move |_| generate(Some(kind))
                        },
                        KindIcon { kind, size: 12 }
                        span { "{kind_button_label(kind)}" }
                    }
                }
            }
        }
    }
}
