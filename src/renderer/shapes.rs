//! Primitive shapes issued against a [`Surface`]

use glam::DVec2;
use std::f64::consts::TAU;

use super::Surface;

/// Filled circle
pub fn circle(surface: &mut impl Surface, center: DVec2, radius: f64, color: &str) {
    surface.begin_path();
    surface.arc(center.x, center.y, radius, 0.0, TAU);
    surface.set_fill_style(color);
    surface.fill();
}

/// Stroked straight segment using the current stroke style
pub fn segment(surface: &mut impl Surface, from: DVec2, to: DVec2) {
    surface.begin_path();
    surface.move_to(from.x, from.y);
    surface.line_to(to.x, to.y);
    surface.stroke();
}

/// Stroked open polyline through `points` (nothing for an empty slice)
pub fn polyline(surface: &mut impl Surface, points: impl IntoIterator<Item = DVec2>) {
    let mut points = points.into_iter();
    let Some(first) = points.next() else {
        return;
    };

    surface.begin_path();
    surface.move_to(first.x, first.y);
    for p in points {
        surface.line_to(p.x, p.y);
    }
    surface.stroke();
}
