//! The wellness wheel: SVG dial, per-category sliders and the day summary.

use api::Category;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBrain, FaBriefcase, FaFaceSmile, FaHeart, FaLightbulb, FaPencil, FaPlus, FaUsers,
};
use dioxus_free_icons::Icon;

use crate::geometry;

/// Icon for a category's `icon` key; unknown keys fall back to a plus.
fn category_icon(key: &str) -> Element {
    match key {
        "body" => rsx! { Icon { icon: FaHeart, width: 16, height: 16 } },
        "mind" => rsx! { Icon { icon: FaBrain, width: 16, height: 16 } },
        "relationships" => rsx! { Icon { icon: FaUsers, width: 16, height: 16 } },
        "inspiration" => rsx! { Icon { icon: FaLightbulb, width: 16, height: 16 } },
        "work" => rsx! { Icon { icon: FaBriefcase, width: 16, height: 16 } },
        "fun" => rsx! { Icon { icon: FaFaceSmile, width: 16, height: 16 } },
        _ => rsx! { Icon { icon: FaPlus, width: 16, height: 16 } },
    }
}

#[derive(Clone, PartialEq)]
struct Wedge {
    category: Category,
    score: u8,
    path: String,
    label_x: String,
    label_y: String,
    score_y: String,
}

/// Radial dial over today's scores plus the slider controls that change
/// them. `scores` is aligned with `categories`; `on_score_change` fires with
/// `(category_id, score)` when a slider commits, `on_category_edit` with the
/// category being edited (`None` for "add").
#[component]
pub fn WellnessWheel(
    categories: Vec<Category>,
    scores: Vec<u8>,
    on_score_change: EventHandler<(i64, u8)>,
    on_category_edit: EventHandler<Option<Category>>,
) -> Element {
    let mut selected = use_signal(|| Option::<i64>::None);

    if categories.is_empty() {
        return rsx! {
            div { class: "card empty-wheel",
                div { class: "empty-wheel-icon",
                    Icon { icon: FaPlus, width: 48, height: 48 }
                }
                h3 { "Vítejte v Kole pohody" }
                p { "Začněte svou cestu k lepší pohodě vytvořením svých prvních kategorií." }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_category_edit.call(None),
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    span { "Přidat kategorii" }
                }
            }
        };
    }

    let total = categories.len();
    let summary = geometry::summarize(&scores);
    let wedges: Vec<Wedge> = categories
        .iter()
        .enumerate()
        .map(|(index, category)| {
            let score = scores.get(index).copied().unwrap_or(0);
            let (x, y) = geometry::label_position(index, total);
            Wedge {
                category: category.clone(),
                score,
                path: geometry::wedge_path(index, total, score),
                label_x: format!("{x:.1}"),
                label_y: format!("{y:.1}"),
                score_y: format!("{:.1}", y + 16.0),
            }
        })
        .collect();

    rsx! {
        div { class: "wheel-layout",
            div { class: "card wheel-card",
                div { class: "wheel-flex",
                    svg {
                        class: "wheel-svg",
                        width: "400",
                        height: "400",
                        view_box: "0 0 400 400",

                        circle {
                            class: "wheel-ring",
                            cx: "200",
                            cy: "200",
                            r: "150",
                            fill: "none",
                            stroke_width: "2",
                            opacity: "0.3",
                        }

                        for wedge in wedges.clone() {
                            g { key: "{wedge.category.id}",
                                path {
                                    class: "wheel-segment",
                                    d: "{wedge.path}",
                                    fill: "{wedge.category.color}",
                                    opacity: if selected() == Some(wedge.category.id) { "0.9" } else { "0.7" },
                                    onclick: {
                                        let id = wedge.category.id;
                                        move |_| {
                                            let next = if selected() == Some(id) { None } else { Some(id) };
                                            selected.set(next);
                                        }
                                    },
                                }
                                text {
                                    class: "wheel-label",
                                    x: "{wedge.label_x}",
                                    y: "{wedge.label_y}",
                                    text_anchor: "middle",
                                    dominant_baseline: "middle",
                                    "{wedge.category.name}"
                                }
                                text {
                                    class: "wheel-score",
                                    x: "{wedge.label_x}",
                                    y: "{wedge.score_y}",
                                    text_anchor: "middle",
                                    dominant_baseline: "middle",
                                    "{wedge.score}/10"
                                }
                            }
                        }

                        circle { class: "wheel-hub", cx: "200", cy: "200", r: "35", stroke_width: "3" }
                        text {
                            class: "wheel-hub-label",
                            x: "200",
                            y: "200",
                            text_anchor: "middle",
                            dominant_baseline: "middle",
                            "Pohoda"
                        }
                    }

                    div { class: "wheel-controls",
                        div {
                            h3 { "Vaše kolo pohody" }
                            p { class: "muted",
                                "Klikněte na segment pro úpravu nebo použijte ovládací prvky níže."
                            }
                        }

                        div { class: "category-rows",
                            for wedge in wedges.clone() {
                                div {
                                    key: "{wedge.category.id}",
                                    class: if selected() == Some(wedge.category.id) { "category-row category-row-selected" } else { "category-row" },

                                    div { class: "category-row-head",
                                        span {
                                            class: "category-dot",
                                            style: "background-color: {wedge.category.color};",
                                            {category_icon(&wedge.category.icon)}
                                        }
                                        span { class: "category-name", "{wedge.category.name}" }
                                        span { class: "category-badge", "{wedge.score}/10" }
                                        button {
                                            class: "btn-icon",
                                            onclick: {
                                                let category = wedge.category.clone();
                                                move |_| on_category_edit.call(Some(category.clone()))
                                            },
                                            Icon { icon: FaPencil, width: 14, height: 14 }
                                        }
                                    }

                                    input {
                                        r#type: "range",
                                        class: "score-slider",
                                        min: "0",
                                        max: "10",
                                        step: "1",
                                        value: "{wedge.score}",
                                        onchange: {
                                            let id = wedge.category.id;
                                            move |evt: FormEvent| {
                                                if let Ok(score) = evt.value().parse::<u8>() {
                                                    on_score_change.call((id, score));
                                                }
                                            }
                                        },
                                    }
                                    div { class: "range-ends",
                                        span { "Nízká" }
                                        span { "Vysoká" }
                                    }
                                }
                            }
                        }

                        button {
                            class: "btn btn-outline btn-block",
                            onclick: move |_| on_category_edit.call(None),
                            Icon { icon: FaPlus, width: 14, height: 14 }
                            span { "Přidat kategorii" }
                        }
                    }
                }
            }

            div { class: "card summary-card",
                h4 { "Přehled dnešního dne" }
                div { class: "summary-grid",
                    div { class: "summary-cell",
                        div { class: "summary-value summary-primary", "{summary.average}" }
                        div { class: "summary-label", "Průměr" }
                    }
                    div { class: "summary-cell",
                        div { class: "summary-value summary-accent", "{summary.highest}" }
                        div { class: "summary-label", "Nejvyšší" }
                    }
                    div { class: "summary-cell",
                        div { class: "summary-value summary-muted", "{summary.lowest}" }
                        div { class: "summary-label", "Nejnižší" }
                    }
                    div { class: "summary-cell",
                        div { class: "summary-value summary-secondary", "{summary.filled}" }
                        div { class: "summary-label", "Vyplněno" }
                    }
                }
            }
        }
    }
}
