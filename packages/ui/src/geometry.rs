//! Radial geometry for the wellness wheel.
//!
//! Pure math, no UI types. The wheel is an annulus between [`INNER_RADIUS`]
//! and [`OUTER_RADIUS`] split into equal wedges, one per category; a wedge's
//! outer edge grows with its score. [`crate::WellnessWheel`] turns these
//! numbers into SVG.

use std::f64::consts::PI;

pub const CENTER_X: f64 = 200.0;
pub const CENTER_Y: f64 = 200.0;
/// Radius of the hub disc; a score of 0 collapses the wedge onto it.
pub const INNER_RADIUS: f64 = 40.0;
/// Radius a score of 10 reaches.
pub const OUTER_RADIUS: f64 = 150.0;
/// Distance of category labels from the center.
pub const LABEL_RADIUS: f64 = 120.0;
pub const MAX_SCORE: u8 = 10;

/// Angular span `[start, end)` of wedge `index` of `total`, in radians.
/// Wedge 0 starts at 12 o'clock (−π/2) and wedges proceed clockwise;
/// together they cover `[−π/2, 3π/2)`. Callers guarantee `total > 0`.
pub fn wedge_angles(index: usize, total: usize) -> (f64, f64) {
    debug_assert!(total > 0);
    let step = 2.0 * PI / total as f64;
    let start = index as f64 * step - PI / 2.0;
    (start, start + step)
}

/// Outer radius for a score: linear between hub and rim, so 7 sits at 70%
/// of the annulus.
pub fn score_radius(score: u8) -> f64 {
    let score = score.min(MAX_SCORE);
    INNER_RADIUS + (OUTER_RADIUS - INNER_RADIUS) * f64::from(score) / f64::from(MAX_SCORE)
}

/// SVG large-arc flag for one wedge; only a lone category spans more than π.
pub fn large_arc_flag(total: usize) -> u8 {
    debug_assert!(total > 0);
    if 2.0 * PI / total as f64 > PI {
        1
    } else {
        0
    }
}

fn polar(radius: f64, angle: f64) -> (f64, f64) {
    (
        CENTER_X + radius * angle.cos(),
        CENTER_Y + radius * angle.sin(),
    )
}

/// SVG path of one annular wedge: along the inner arc, out to the score
/// radius, back along the outer arc.
pub fn wedge_path(index: usize, total: usize, score: u8) -> String {
    let (start, end) = wedge_angles(index, total);
    let outer = score_radius(score);
    let large_arc = large_arc_flag(total);

    let (x1, y1) = polar(INNER_RADIUS, start);
    let (x2, y2) = polar(INNER_RADIUS, end);
    let (x3, y3) = polar(outer, end);
    let (x4, y4) = polar(outer, start);

    format!(
        "M {x1:.2} {y1:.2} \
         A {INNER_RADIUS} {INNER_RADIUS} 0 {large_arc} 1 {x2:.2} {y2:.2} \
         L {x3:.2} {y3:.2} \
         A {outer:.2} {outer:.2} 0 {large_arc} 0 {x4:.2} {y4:.2} Z"
    )
}

/// Anchor point of a wedge's label, at the angular midpoint.
pub fn label_position(index: usize, total: usize) -> (f64, f64) {
    let (start, end) = wedge_angles(index, total);
    polar(LABEL_RADIUS, (start + end) / 2.0)
}

/// Summary numbers shown under the wheel.
///
/// `lowest` considers only nonzero scores and reports 10 when there are
/// none, while `average` divides by every category, rated or not. The
/// asymmetry is intentional and part of the product's behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WheelSummary {
    pub average: u8,
    pub highest: u8,
    pub lowest: u8,
    pub filled: usize,
}

pub fn summarize(scores: &[u8]) -> WheelSummary {
    let sum: u32 = scores.iter().map(|&s| u32::from(s)).sum();
    let average = if scores.is_empty() {
        0
    } else {
        (sum as f64 / scores.len() as f64).round() as u8
    };
    WheelSummary {
        average,
        highest: scores.iter().copied().max().unwrap_or(0),
        lowest: scores.iter().copied().filter(|&s| s > 0).min().unwrap_or(10),
        filled: scores.iter().filter(|&&s| s > 0).count(),
    }
}
