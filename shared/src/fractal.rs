//! CPU reference for the mapping and escape-time recurrence the fragment
//! shader evaluates per pixel. The shader implements the same formulas in
//! WGSL; this module is where they are exercised by tests.

use crate::Params;

pub const MAX_ITERATIONS: u32 = 256;
pub const ESCAPE_RADIUS: f32 = 2.0;

/// Scale from clamped navigation space onto the complex plane. At zoom 1.0
/// the viewport spans 5 units vertically, which frames the whole set.
pub const FRAME_SCALE: f32 = 2.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Escape {
    Inside,
    Outside {
        iterations: u32,
        /// Continuous escape value, `n + 1 - log2(ln |z|)`, for band-free
        /// coloring.
        smooth: f32,
    },
}

/// Maps a viewport position to its complex-plane sample point:
/// normalize to [-1, 1], correct for aspect ratio, scale by zoom, offset by
/// the view center.
pub fn pixel_to_point(x: f32, y: f32, params: &Params) -> (f32, f32) {
    let width = params.width as f32;
    let height = params.height as f32;
    let u = ((x / width) * 2.0 - 1.0) * (width / height);
    let v = (y / height) * 2.0 - 1.0;
    (
        (params.center_x + u * params.zoom) * FRAME_SCALE,
        (params.center_y + v * params.zoom) * FRAME_SCALE,
    )
}

/// Iterates `z ← z² + c` from zero until `|z|` exceeds [`ESCAPE_RADIUS`] or
/// `limit` iterations have run.
pub fn escape_time(cx: f32, cy: f32, limit: u32) -> Escape {
    let mut zx = 0.0f32;
    let mut zy = 0.0f32;
    for i in 0..limit {
        let next_x = zx * zx - zy * zy + cx;
        let next_y = 2.0 * zx * zy + cy;
        zx = next_x;
        zy = next_y;

        let magnitude_sq = zx * zx + zy * zy;
        if magnitude_sq > ESCAPE_RADIUS * ESCAPE_RADIUS {
            let smooth = i as f32 + 1.0 - magnitude_sq.sqrt().ln().log2();
            return Escape::Outside {
                iterations: i,
                smooth,
            };
        }
    }
    Escape::Inside
}
