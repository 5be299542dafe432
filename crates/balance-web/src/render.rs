use crate::constants::*;
use crate::geometry::{
    ball_center, bar_rect, glyph_anchor, glyph_font_px, indicator, pivot, slot_block, tilt_point,
};
use balance_core::BalanceWidget;
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct BarRenderer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl BarRenderer {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }

    /// CSS-pixel size of the bar area.
    fn area(&self) -> Vec2 {
        Vec2::new(
            self.canvas.client_width() as f32,
            self.canvas.client_height() as f32,
        )
    }

    pub fn draw(&self, widget: &BalanceWidget) {
        let area = self.area();
        if area.x <= 0.0 || area.y <= 0.0 {
            return;
        }
        let c = &self.ctx;
        // backing store is CSS size * dpr; draw in CSS pixels
        let scale = self.canvas.width() as f64 / area.x as f64;
        _ = c.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0);
        c.set_fill_style_str(COLOR_BACKGROUND);
        c.fill_rect(0.0, 0.0, area.x as f64, area.y as f64);

        let tilt = widget.tilt_deg();
        let charset = widget.charset();
        let len = charset.len();
        let active = widget.current_index();

        c.save();
        let p = pivot(area);
        _ = c.translate(p.x as f64, p.y as f64);
        _ = c.rotate(tilt.to_radians() as f64);
        _ = c.translate(-p.x as f64, -p.y as f64);

        c.set_font(&format!("{}px monospace", glyph_font_px(len)));
        c.set_text_align("center");
        let mut glyph = [0u8; 4];
        for (i, ch) in charset.chars().iter().enumerate() {
            let on = i == active;
            let block = slot_block(i, len, area);
            c.set_fill_style_str(if on { COLOR_SLOT_ACTIVE } else { COLOR_SLOT });
            // 1px gutter between blocks
            c.fill_rect(
                block.min.x as f64,
                block.min.y as f64,
                (block.size.x - 1.0).max(0.5) as f64,
                block.size.y as f64,
            );
            let at = glyph_anchor(i, len, area);
            c.set_fill_style_str(if on { COLOR_GLYPH_ACTIVE } else { COLOR_GLYPH });
            _ = c.fill_text(ch.encode_utf8(&mut glyph), at.x as f64, at.y as f64);
        }

        let bar = bar_rect(area);
        c.set_fill_style_str(COLOR_BAR);
        c.fill_rect(
            bar.min.x as f64,
            bar.min.y as f64,
            bar.size.x as f64,
            bar.size.y as f64,
        );
        c.restore();

        let ball = tilt_point(ball_center(widget.ball().position, area), area, tilt);
        c.begin_path();
        _ = c.arc(ball.x as f64, ball.y as f64, BALL_RADIUS_PX as f64, 0.0, TAU);
        c.set_fill_style_str(COLOR_BALL);
        c.fill();

        let (top, bottom) = indicator(charset.slot_center(active), area);
        c.begin_path();
        c.move_to(top.x as f64, top.y as f64);
        c.line_to(bottom.x as f64, bottom.y as f64);
        c.set_line_width(1.0);
        c.set_stroke_style_str(COLOR_INDICATOR);
        c.stroke();
    }
}
