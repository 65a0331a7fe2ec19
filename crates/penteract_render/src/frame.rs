//! Drawing the projected penteract
//!
//! Edges go down first, then vertex points on top, both in the colors of
//! the frame's resolved palette.

use penteract_core::{Palette, Rgb};
use penteract_math::{Edge, Point2};

use crate::canvas::Canvas;

/// Default vertex disc radius in pixels
pub const DEFAULT_POINT_RADIUS: i32 = 5;

/// Default motion-blur fade strength
pub const DEFAULT_BLUR_ALPHA: u8 = 40;

/// Prepare the canvas for a new visualization frame
///
/// With motion blur the previous frame is darkened rather than erased, so
/// moving geometry leaves trails.
pub fn begin_frame(canvas: &mut Canvas, motion_blur: bool, blur_alpha: u8) {
    if motion_blur {
        canvas.fade(blur_alpha);
    } else {
        canvas.clear(Rgb::BLACK);
    }
}

/// Draw edges then points
///
/// `points` is indexed like the vertex list. A `None` point (degenerate
/// projection) is skipped along with every edge touching it.
pub fn draw_penteract(
    canvas: &mut Canvas,
    points: &[Option<Point2>],
    edges: &[Edge],
    palette: &Palette,
    point_radius: i32,
) {
    let edge_color = palette.edge();
    for edge in edges {
        let (Some(Some(a)), Some(Some(b))) = (points.get(edge.a), points.get(edge.b)) else {
            continue;
        };
        canvas.draw_line(a.x, a.y, b.x, b.y, edge_color);
    }

    let point_color = palette.point();
    let limit = canvas.size() as f32 + point_radius as f32;
    for p in points.iter().flatten() {
        let on_canvas = p.x.is_finite()
            && p.y.is_finite()
            && p.x > -(point_radius as f32)
            && p.y > -(point_radius as f32)
            && p.x < limit
            && p.y < limit;
        if !on_canvas {
            continue;
        }
        let (x, y) = p.to_pixel();
        canvas.fill_circle(x, y, point_radius, point_color);
    }
}
