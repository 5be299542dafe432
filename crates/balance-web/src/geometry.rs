// Bar-area layout in CSS pixels. Everything except the indicator is expressed
// in the bar's unrotated frame; the renderer applies the tilt about `pivot`.

use crate::constants::*;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

#[inline]
pub fn pivot(area: Vec2) -> Vec2 {
    Vec2::new(area.x * 0.5, area.y)
}

#[inline]
pub fn slot_width(len: usize, area: Vec2) -> f32 {
    area.x / len.max(1) as f32
}

#[inline]
pub fn slot_block(index: usize, len: usize, area: Vec2) -> Rect {
    let w = slot_width(len, area);
    Rect {
        min: Vec2::new(index as f32 * w, 0.0),
        size: Vec2::new(w, SLOT_BLOCK_PX),
    }
}

#[inline]
pub fn glyph_font_px(len: usize) -> f32 {
    if len > DENSE_CHARSET_LEN {
        GLYPH_FONT_DENSE_PX
    } else {
        GLYPH_FONT_PX
    }
}

/// Baseline-centre anchor for a slot's glyph, just below its block.
#[inline]
pub fn glyph_anchor(index: usize, len: usize, area: Vec2) -> Vec2 {
    let w = slot_width(len, area);
    Vec2::new(
        (index as f32 + 0.5) * w,
        SLOT_BLOCK_PX + GLYPH_GAP_PX + glyph_font_px(len),
    )
}

#[inline]
pub fn bar_rect(area: Vec2) -> Rect {
    Rect {
        min: Vec2::new(0.0, area.y - BAR_BOTTOM_PX - BAR_THICKNESS_PX),
        size: Vec2::new(area.x, BAR_THICKNESS_PX),
    }
}

#[inline]
pub fn ball_center(position: f32, area: Vec2) -> Vec2 {
    Vec2::new(
        position.clamp(0.0, 1.0) * area.x,
        area.y - BALL_BOTTOM_PX - BALL_RADIUS_PX,
    )
}

/// Unrotated marker line at a normalised slot centre: (top, bottom).
#[inline]
pub fn indicator(center: f32, area: Vec2) -> (Vec2, Vec2) {
    let x = center * area.x;
    (
        Vec2::new(x, area.y - INDICATOR_HEIGHT_PX),
        Vec2::new(x, area.y),
    )
}

/// Screen position of a point after tilting the bar about its pivot.
/// Canvas y grows downward, so a positive tilt turns clockwise on screen.
#[inline]
pub fn tilt_point(point: Vec2, area: Vec2, tilt_deg: f32) -> Vec2 {
    let p = pivot(area);
    p + Vec2::from_angle(tilt_deg.to_radians()).rotate(point - p)
}
