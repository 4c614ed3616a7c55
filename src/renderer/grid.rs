//! Background grid and world axes

use glam::DVec2;

use super::Surface;
use super::shapes::segment;
use crate::consts::GRID_SPACING;
use crate::transform::CoordinateTransformer;

/// Grid line and axis colors
#[derive(Debug, Clone, Copy)]
pub struct GridStyle<'a> {
    pub grid_color: &'a str,
    pub axes_color: &'a str,
}

pub fn draw_grid(
    surface: &mut impl Surface,
    transformer: &CoordinateTransformer,
    range: i32,
    style: GridStyle<'_>,
) {
    draw_grid_lines(surface, transformer, range, style.grid_color);
    draw_axes(surface, transformer, style.axes_color);
}

/// Thin full-canvas lines at every whole grid step in `[-range, range]`
pub fn draw_grid_lines(
    surface: &mut impl Surface,
    transformer: &CoordinateTransformer,
    range: i32,
    color: &str,
) {
    surface.set_stroke_style(color);
    surface.set_line_width(1.0);

    let (w, h) = (transformer.width(), transformer.height());

    for i in -range..=range {
        let x = transformer.world_to_canvas(DVec2::new(i as f64 * GRID_SPACING, 0.0)).x;
        segment(surface, DVec2::new(x, 0.0), DVec2::new(x, h));
    }

    for i in -range..=range {
        let y = transformer.world_to_canvas(DVec2::new(0.0, i as f64 * GRID_SPACING)).y;
        segment(surface, DVec2::new(0.0, y), DVec2::new(w, y));
    }
}

/// Bold x and y axes through the world origin
pub fn draw_axes(surface: &mut impl Surface, transformer: &CoordinateTransformer, color: &str) {
    surface.set_stroke_style(color);
    surface.set_line_width(2.0);

    let origin = transformer.world_to_canvas(DVec2::ZERO);
    let (w, h) = (transformer.width(), transformer.height());

    segment(surface, DVec2::new(0.0, origin.y), DVec2::new(w, origin.y));
    segment(surface, DVec2::new(origin.x, 0.0), DVec2::new(origin.x, h));
}
