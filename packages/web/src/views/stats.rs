//! Stats view: overview cards, score charts and journal aggregates over a
//! selectable time range.

use api::{ApiClient, JournalStats, WellnessStats};
use dioxus::prelude::*;
use ui::icons::{
    FaArrowTrendDown, FaArrowTrendUp, FaCalendar, FaChartColumn, FaChartPie, FaDownload,
};
use ui::{use_toasts, CategoryAverageChart, Icon, MoodPieChart, ScoreTrendChart};

/// "7.3" style, with the backend's absences rendered as a flat zero.
fn fmt_score(value: Option<f64>) -> String {
    value
        .map(|v| format!("{v:.1}"))
        .unwrap_or_else(|| "0.0".to_string())
}

/// Signed percentage; only gains get an explicit plus.
fn trend_label(trend: Option<f64>) -> String {
    let t = trend.unwrap_or(0.0);
    if t > 0.0 {
        format!("+{t:.1}%")
    } else {
        format!("{t:.1}%")
    }
}

/// Bar width for the tag ranking, relative to the most used tag.
fn tag_bar_width(count: u32, top: u32) -> u32 {
    (count * 100 / top.max(1)).min(100)
}

fn overview_cards(
    wellness: &WellnessStats,
    journal: Option<&JournalStats>,
    window: u32,
) -> Element {
    let average = fmt_score(wellness.average_score);
    let trend = trend_label(wellness.score_trend);
    let trend_dir = wellness.score_trend.unwrap_or(0.0);
    let active_days = wellness.active_days.unwrap_or(0);
    let best_name = wellness
        .best_category
        .as_ref()
        .map(|best| best.name.clone())
        .unwrap_or_else(|| "Žádná".to_string());
    let best_average = fmt_score(wellness.best_category.as_ref().map(|best| best.average));
    let entry_count = journal.map(|j| j.total_entries).unwrap_or(0);
    let week_count = journal.and_then(|j| j.entries_this_week).unwrap_or(0);

    rsx! {
        div { class: "stat-grid",
            div { class: "card stat-card",
                div { class: "stat-row",
                    div {
                        p { class: "stat-label", "Průměrné skóre" }
                        p { class: "stat-value", "{average}" }
                    }
                    span { class: "stat-bubble",
                        Icon { icon: FaChartColumn, width: 22, height: 22 }
                    }
                }
                div { class: "stat-trend",
                    if trend_dir > 0.0 {
                        span { class: "trend-up",
                            Icon { icon: FaArrowTrendUp, width: 14, height: 14 }
                        }
                    } else if trend_dir < 0.0 {
                        span { class: "trend-down",
                            Icon { icon: FaArrowTrendDown, width: 14, height: 14 }
                        }
                    }
                    span { class: "muted", "{trend}" }
                }
            }

            div { class: "card stat-card",
                div { class: "stat-row",
                    div {
                        p { class: "stat-label", "Aktivních dní" }
                        p { class: "stat-value", "{active_days}" }
                    }
                    span { class: "stat-bubble",
                        Icon { icon: FaCalendar, width: 22, height: 22 }
                    }
                }
                p { class: "muted", "z {window} dní" }
            }

            div { class: "card stat-card",
                div { class: "stat-row",
                    div {
                        p { class: "stat-label", "Nejlepší kategorie" }
                        p { class: "stat-value stat-value-sm", "{best_name}" }
                    }
                    span { class: "stat-bubble",
                        Icon { icon: FaArrowTrendUp, width: 22, height: 22 }
                    }
                }
                p { class: "muted", "{best_average}/10" }
            }

            div { class: "card stat-card",
                div { class: "stat-row",
                    div {
                        p { class: "stat-label", "Záznamy v deníku" }
                        p { class: "stat-value", "{entry_count}" }
                    }
                    span { class: "stat-bubble",
                        Icon { icon: FaChartPie, width: 22, height: 22 }
                    }
                }
                p { class: "muted", "{week_count} tento týden" }
            }
        }
    }
}

fn wellness_charts(wellness: &WellnessStats) -> Element {
    let trend_chart = wellness.daily_scores.clone().map(|data| {
        rsx! {
            div { class: "card chart-card",
                h3 { "Vývoj wellness skóre" }
                ScoreTrendChart { data }
            }
        }
    });
    let average_chart = wellness.category_averages.clone().map(|data| {
        rsx! {
            div { class: "card chart-card",
                h3 { "Průměr podle kategorií" }
                CategoryAverageChart { data }
            }
        }
    });

    rsx! {
        div { class: "chart-grid",
            {trend_chart}
            {average_chart}
        }
    }
}

fn journal_charts(journal: &JournalStats) -> Element {
    let mood_chart = journal.mood_distribution.clone().map(|data| {
        rsx! {
            div { class: "card chart-card",
                h3 { "Rozložení nálad" }
                MoodPieChart { data }
            }
        }
    });

    let tag_card = journal.popular_tags.as_ref().map(|tags| {
        let top = tags.first().map(|tag| tag.count).unwrap_or(0);
        let rows: Vec<(usize, String, u32, u32)> = tags
            .iter()
            .take(10)
            .enumerate()
            .map(|(index, tag)| {
                (
                    index + 1,
                    tag.name.clone(),
                    tag_bar_width(tag.count, top),
                    tag.count,
                )
            })
            .collect();
        rsx! {
            div { class: "card chart-card",
                h3 { "Nejčastější štítky" }
                div { class: "tag-ranking",
                    for (rank, name, width, count) in rows {
                        div { key: "{name}", class: "tag-rank-row",
                            div { class: "tag-rank-name",
                                span { class: "badge", "{rank}" }
                                span { "{name}" }
                            }
                            div { class: "tag-rank-meter",
                                div { class: "meter",
                                    div { class: "meter-fill", style: "width: {width}%;" }
                                }
                                span { class: "muted tag-count", "{count}" }
                            }
                        }
                    }
                }
            }
        }
    });

    rsx! {
        div { class: "chart-grid",
            {mood_chart}
            {tag_card}
        }
    }
}

#[component]
pub fn Stats() -> Element {
    let client = use_context::<ApiClient>();
    let toasts = use_toasts();

    let mut wellness = use_signal(|| Option::<WellnessStats>::None);
    let mut journal = use_signal(|| Option::<JournalStats>::None);
    let mut loading = use_signal(|| true);
    let mut days = use_signal(|| 30u32);

    // Re-runs when the range changes; a stale in-flight load is dropped.
    let _load = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let window = days();
            async move {
                let mut toasts = toasts;
                loading.set(true);
                let (wellness_result, journal_result) = futures::join!(
                    client.wellness_stats(window),
                    client.journal_stats(window)
                );
                match (wellness_result, journal_result) {
                    (Ok(w), Ok(j)) => {
                        wellness.set(Some(w));
                        journal.set(Some(j));
                    }
                    (wellness_result, journal_result) => {
                        if let Err(err) = wellness_result {
                            tracing::warn!("wellness stats load failed: {err}");
                        }
                        if let Err(err) = journal_result {
                            tracing::warn!("journal stats load failed: {err}");
                        }
                        toasts.error(
                            "Chyba při načítání statistik",
                            "Nepodařilo se načíst statistiky.",
                        );
                    }
                }
                loading.set(false);
            }
        }
    });

    if loading() {
        return rsx! {
            div { class: "loading-state",
                div { class: "spinner" }
                p { class: "muted", "Načítám statistiky..." }
            }
        };
    }

    let wellness_now = wellness();
    let journal_now = journal();
    let overview = wellness_now
        .as_ref()
        .map(|w| overview_cards(w, journal_now.as_ref(), days()));
    let score_section = wellness_now.as_ref().map(wellness_charts);
    let journal_section = journal_now.as_ref().map(journal_charts);
    let no_data = wellness_now.is_none() || journal_now.is_none();

    rsx! {
        div { class: "page stats-page",
            div { class: "stats-head",
                div {
                    h2 { "Přehled vašeho pokroku" }
                    p { class: "muted", "Sledujte svůj růst a vývoj v různých oblastech života." }
                }
                div { class: "stats-tools",
                    select {
                        value: "{days}",
                        onchange: move |evt| days.set(evt.value().parse().unwrap_or(30)),
                        option { value: "7", "Posledních 7 dní" }
                        option { value: "30", "Posledních 30 dní" }
                        option { value: "90", "Posledních 90 dní" }
                        option { value: "365", "Poslední rok" }
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| {
                            let mut toasts = toasts;
                            toasts.info("Export dat", "Funkce exportu bude dostupná v další verzi.");
                        },
                        Icon { icon: FaDownload, width: 14, height: 14 }
                        span { "Export" }
                    }
                }
            }

            {overview}
            {score_section}
            {journal_section}

            if no_data {
                div { class: "card empty-state",
                    Icon { icon: FaChartColumn, width: 64, height: 64 }
                    h3 { "Zatím žádná data" }
                    p { class: "muted",
                        "Začněte používat aplikaci pro zobrazení statistik vašeho pokroku."
                    }
                }
            }
        }
    }
}
