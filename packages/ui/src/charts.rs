//! SVG charts for the stats page.
//!
//! Layout math lives in plain functions so the interesting parts are
//! testable without a renderer. All charts draw into a fixed view box and
//! scale with their card via CSS.

use api::{CategoryAverage, DailyScore, MoodCount};
use dioxus::prelude::*;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::dates;
use crate::journal_editor::mood_label;

const PLOT_LEFT: f64 = 40.0;
const PLOT_RIGHT: f64 = 584.0;
const PLOT_TOP: f64 = 10.0;
const PLOT_BOTTOM: f64 = 276.0;
const SCORE_MAX: f64 = 10.0;

const PIE_CX: f64 = 150.0;
const PIE_CY: f64 = 150.0;
const PIE_R: f64 = 80.0;
const PIE_LABEL_R: f64 = 104.0;

const PALETTE: [&str; 5] = ["#6B7F6B", "#A8B4A0", "#C8A89A", "#8C7B6F", "#5A6A70"];

/// Horizontal position of point `index` out of `len`, evenly spread across
/// the plot. A lone point sits in the middle.
fn point_x(index: usize, len: usize) -> f64 {
    if len <= 1 {
        return (PLOT_LEFT + PLOT_RIGHT) / 2.0;
    }
    PLOT_LEFT + (PLOT_RIGHT - PLOT_LEFT) * index as f64 / (len - 1) as f64
}

/// Vertical position for a score on the fixed 0 to 10 axis.
fn score_y(score: f64) -> f64 {
    let clamped = score.clamp(0.0, SCORE_MAX);
    PLOT_BOTTOM - (PLOT_BOTTOM - PLOT_TOP) * clamped / SCORE_MAX
}

fn trend_points(data: &[DailyScore]) -> String {
    data.iter()
        .enumerate()
        .map(|(index, day)| {
            format!(
                "{:.1},{:.1}",
                point_x(index, data.len()),
                score_y(day.average_score)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Label every n-th tick so at most `most` labels are drawn.
fn tick_step(len: usize, most: usize) -> usize {
    if most == 0 || len <= most {
        1
    } else {
        len.div_ceil(most)
    }
}

/// Left edge and width of bar `index` out of `len`, with bars filling 60%
/// of their band.
fn bar_geometry(index: usize, len: usize) -> (f64, f64) {
    let band = (PLOT_RIGHT - PLOT_LEFT) / len as f64;
    let width = band * 0.6;
    let x = PLOT_LEFT + band * index as f64 + (band - width) / 2.0;
    (x, width)
}

fn pie_point(angle: f64, radius: f64) -> (f64, f64) {
    (
        PIE_CX + radius * angle.cos(),
        PIE_CY + radius * angle.sin(),
    )
}

fn pie_slice_path(start: f64, end: f64) -> String {
    let (x1, y1) = pie_point(start, PIE_R);
    let (x2, y2) = pie_point(end, PIE_R);
    let large = if end - start > PI { 1 } else { 0 };
    format!("M {PIE_CX} {PIE_CY} L {x1:.2} {y1:.2} A {PIE_R} {PIE_R} 0 {large} 1 {x2:.2} {y2:.2} Z")
}

// A wedge whose start and end coincide renders as nothing, so a lone mood
// gets the whole disc drawn as two half arcs.
fn full_disc_path() -> String {
    let top = PIE_CY - PIE_R;
    let bottom = PIE_CY + PIE_R;
    format!(
        "M {PIE_CX} {top} A {PIE_R} {PIE_R} 0 1 1 {PIE_CX} {bottom} A {PIE_R} {PIE_R} 0 1 1 {PIE_CX} {top} Z"
    )
}

/// Czech label for a mood key off the wire; unknown keys pass through.
fn mood_label_for(key: &str) -> String {
    api::Mood::ALL
        .into_iter()
        .find(|mood| mood.as_str() == key)
        .map(|mood| mood_label(mood).to_string())
        .unwrap_or_else(|| key.to_string())
}

#[derive(Clone, PartialEq)]
struct PieSlice {
    label: String,
    pct: u32,
    path: String,
    color: &'static str,
    label_x: String,
    label_y: String,
    anchor: &'static str,
}

fn pie_slices(data: &[MoodCount]) -> Vec<PieSlice> {
    let total: u32 = data.iter().map(|mood| mood.count).sum();
    if total == 0 {
        return Vec::new();
    }
    let counted: Vec<&MoodCount> = data.iter().filter(|mood| mood.count > 0).collect();

    let mut start = -FRAC_PI_2;
    counted
        .iter()
        .enumerate()
        .map(|(index, mood)| {
            let fraction = mood.count as f64 / total as f64;
            let end = start + fraction * TAU;
            let mid = (start + end) / 2.0;
            let (lx, ly) = pie_point(mid, PIE_LABEL_R);
            let path = if counted.len() == 1 {
                full_disc_path()
            } else {
                pie_slice_path(start, end)
            };
            let label = match mood.name.as_deref() {
                Some(key) => mood_label_for(key),
                None => "Neznámá".to_string(),
            };
            start = end;
            PieSlice {
                label,
                pct: (fraction * 100.0).round() as u32,
                path,
                color: PALETTE[index % PALETTE.len()],
                label_x: format!("{lx:.1}"),
                label_y: format!("{ly:.1}"),
                anchor: if mid.cos() >= 0.0 { "start" } else { "end" },
            }
        })
        .collect()
}

#[derive(Clone, PartialEq)]
struct GridLine {
    y: String,
    label: String,
}

fn grid_lines() -> Vec<GridLine> {
    [0u32, 2, 4, 6, 8, 10]
        .into_iter()
        .map(|level| GridLine {
            y: format!("{:.1}", score_y(level as f64)),
            label: level.to_string(),
        })
        .collect()
}

/// Average score per day as a line over a fixed 0 to 10 axis.
#[component]
pub fn ScoreTrendChart(data: Vec<DailyScore>) -> Element {
    if data.is_empty() {
        return rsx! {
            p { class: "muted", "Zatím žádná data" }
        };
    }

    let len = data.len();
    let points = trend_points(&data);
    let step = tick_step(len, 6);
    let dots: Vec<(String, String)> = data
        .iter()
        .enumerate()
        .map(|(index, day)| {
            (
                format!("{:.1}", point_x(index, len)),
                format!("{:.1}", score_y(day.average_score)),
            )
        })
        .collect();
    let ticks: Vec<(String, String)> = data
        .iter()
        .enumerate()
        .filter(|(index, _)| index % step == 0)
        .map(|(index, day)| {
            (
                format!("{:.1}", point_x(index, len)),
                dates::format_day_month(&day.date),
            )
        })
        .collect();

    rsx! {
        svg { class: "chart", view_box: "0 0 600 300",
            for grid in grid_lines() {
                line {
                    class: "grid-line",
                    x1: "{PLOT_LEFT}",
                    x2: "{PLOT_RIGHT}",
                    y1: "{grid.y}",
                    y2: "{grid.y}",
                }
                text {
                    class: "chart-tick",
                    x: "{PLOT_LEFT - 8.0}",
                    y: "{grid.y}",
                    text_anchor: "end",
                    dominant_baseline: "middle",
                    "{grid.label}"
                }
            }

            polyline {
                class: "chart-line",
                points: "{points}",
                fill: "none",
                stroke: "#6B7F6B",
                stroke_width: "2",
            }
            for (cx, cy) in dots {
                circle { cx: "{cx}", cy: "{cy}", r: "4", fill: "#6B7F6B" }
            }

            for (x, label) in ticks {
                text {
                    class: "chart-tick",
                    x: "{x}",
                    y: "292",
                    text_anchor: "middle",
                    "{label}"
                }
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct Bar {
    x: String,
    y: String,
    width: String,
    height: String,
    center: String,
    value_y: String,
    value: String,
    name: String,
}

/// Per-category averages as a bar chart on the same 0 to 10 axis.
#[component]
pub fn CategoryAverageChart(data: Vec<CategoryAverage>) -> Element {
    if data.is_empty() {
        return rsx! {
            p { class: "muted", "Zatím žádná data" }
        };
    }

    let len = data.len();
    let bars: Vec<Bar> = data
        .iter()
        .enumerate()
        .map(|(index, category)| {
            let (x, width) = bar_geometry(index, len);
            let y = score_y(category.average);
            Bar {
                x: format!("{x:.1}"),
                y: format!("{y:.1}"),
                width: format!("{width:.1}"),
                height: format!("{:.1}", PLOT_BOTTOM - y),
                center: format!("{:.1}", x + width / 2.0),
                value_y: format!("{:.1}", y - 6.0),
                value: format!("{:.1}", category.average),
                name: category.name.clone(),
            }
        })
        .collect();

    rsx! {
        svg { class: "chart", view_box: "0 0 600 300",
            for grid in grid_lines() {
                line {
                    class: "grid-line",
                    x1: "{PLOT_LEFT}",
                    x2: "{PLOT_RIGHT}",
                    y1: "{grid.y}",
                    y2: "{grid.y}",
                }
                text {
                    class: "chart-tick",
                    x: "{PLOT_LEFT - 8.0}",
                    y: "{grid.y}",
                    text_anchor: "end",
                    dominant_baseline: "middle",
                    "{grid.label}"
                }
            }

            for bar in bars {
                rect {
                    class: "chart-bar",
                    x: "{bar.x}",
                    y: "{bar.y}",
                    width: "{bar.width}",
                    height: "{bar.height}",
                    rx: "4",
                    fill: "#A8B4A0",
                }
                text {
                    class: "chart-value",
                    x: "{bar.center}",
                    y: "{bar.value_y}",
                    text_anchor: "middle",
                    "{bar.value}"
                }
                text {
                    class: "chart-tick",
                    x: "{bar.center}",
                    y: "292",
                    text_anchor: "middle",
                    "{bar.name}"
                }
            }
        }
    }
}

/// Mood distribution as a pie with percentage labels.
#[component]
pub fn MoodPieChart(data: Vec<MoodCount>) -> Element {
    let slices = pie_slices(&data);
    if slices.is_empty() {
        return rsx! {
            p { class: "muted", "Zatím žádná data" }
        };
    }

    rsx! {
        svg { class: "chart chart-pie", view_box: "0 0 300 300",
            for slice in slices {
                path { d: "{slice.path}", fill: "{slice.color}" }
                text {
                    class: "chart-pie-label",
                    x: "{slice.label_x}",
                    y: "{slice.label_y}",
                    text_anchor: "{slice.anchor}",
                    dominant_baseline: "middle",
                    "{slice.label} {slice.pct}%"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn day(date: &str, score: f64) -> DailyScore {
        DailyScore {
            date: date.to_string(),
            average_score: score,
        }
    }

    fn mood(name: &str, count: u32) -> MoodCount {
        MoodCount {
            name: Some(name.to_string()),
            count,
        }
    }

    #[test]
    fn points_spread_across_the_plot() {
        assert!(close(point_x(0, 2), PLOT_LEFT));
        assert!(close(point_x(1, 2), PLOT_RIGHT));
        assert!(close(point_x(2, 5), 312.0));
    }

    #[test]
    fn lone_point_sits_in_the_middle() {
        assert!(close(point_x(0, 1), 312.0));
    }

    #[test]
    fn scores_map_onto_the_fixed_axis() {
        assert!(close(score_y(0.0), PLOT_BOTTOM));
        assert!(close(score_y(10.0), PLOT_TOP));
        assert!(close(score_y(5.0), 143.0));
        assert!(close(score_y(12.0), PLOT_TOP));
    }

    #[test]
    fn trend_points_render_as_svg_pairs() {
        let data = vec![day("2025-01-01", 0.0), day("2025-01-02", 10.0)];
        assert_eq!(trend_points(&data), "40.0,276.0 584.0,10.0");
    }

    #[test]
    fn tick_step_caps_label_count() {
        assert_eq!(tick_step(30, 6), 5);
        assert_eq!(tick_step(7, 6), 2);
        assert_eq!(tick_step(6, 6), 1);
        assert_eq!(tick_step(0, 6), 1);
    }

    #[test]
    fn bars_center_in_their_band() {
        let (x, width) = bar_geometry(0, 4);
        assert!(close(width, 81.6));
        assert!(close(x, 67.2));
        let (last_x, _) = bar_geometry(3, 4);
        assert!(close(last_x, 67.2 + 3.0 * 136.0));
    }

    #[test]
    fn pie_starts_at_twelve_oclock() {
        let (x, y) = pie_point(-FRAC_PI_2, PIE_R);
        assert!(close(x, 150.0));
        assert!(close(y, 70.0));
    }

    #[test]
    fn pie_percentages_round_to_integers() {
        let slices = pie_slices(&[mood("happy", 1), mood("excited", 2)]);
        assert_eq!(slices[0].pct, 33);
        assert_eq!(slices[1].pct, 67);
    }

    #[test]
    fn majority_slice_takes_the_long_arc() {
        let slices = pie_slices(&[mood("happy", 3), mood("excited", 1)]);
        assert_eq!(slices[0].pct, 75);
        assert!(slices[0].path.contains(" 1 1 "));
        assert!(slices[1].path.contains(" 0 1 "));
    }

    #[test]
    fn lone_mood_fills_the_disc() {
        let slices = pie_slices(&[mood("content", 0), mood("peaceful", 5)]);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].path, full_disc_path());
        assert_eq!(slices[0].pct, 100);
        assert_eq!(slices[0].label, "Klidný");
    }

    #[test]
    fn empty_distribution_yields_no_slices() {
        assert!(pie_slices(&[]).is_empty());
        assert!(pie_slices(&[mood("happy", 0)]).is_empty());
    }

    #[test]
    fn mood_keys_get_czech_labels() {
        assert_eq!(mood_label_for("happy"), "Šťastný");
        assert_eq!(mood_label_for("grumpy"), "grumpy");
    }
}
