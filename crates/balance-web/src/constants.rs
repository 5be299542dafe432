// Layout, colour and DOM constants for the web frontend.

// Default mount point for the auto-start path
pub const DEFAULT_ROOT_ID: &str = "password-balancer";

// Bar area (CSS px)
pub const CANVAS_HEIGHT_PX: f32 = 128.0;
pub const SLOT_BLOCK_PX: f32 = 24.0; // highlight block at the top of each slot
pub const BAR_BOTTOM_PX: f32 = 24.0; // bar's lower edge above the canvas bottom
pub const BAR_THICKNESS_PX: f32 = 8.0;
pub const BALL_RADIUS_PX: f32 = 12.0;
pub const BALL_BOTTOM_PX: f32 = 8.0; // ball's lowest point above the canvas bottom
pub const INDICATOR_HEIGHT_PX: f32 = 48.0;
pub const GLYPH_GAP_PX: f32 = 2.0;

// Glyphs shrink once a layout has more characters than this
pub const DENSE_CHARSET_LEN: usize = 40;
pub const GLYPH_FONT_PX: f32 = 12.0;
pub const GLYPH_FONT_DENSE_PX: f32 = 8.0;

// Palette
pub const COLOR_BACKGROUND: &str = "#e5e7eb";
pub const COLOR_SLOT: &str = "#d1d5db";
pub const COLOR_SLOT_ACTIVE: &str = "#93c5fd";
pub const COLOR_GLYPH: &str = "#374151";
pub const COLOR_GLYPH_ACTIVE: &str = "#2563eb";
pub const COLOR_BAR: &str = "#4b5563";
pub const COLOR_BALL: &str = "#ef4444";
pub const COLOR_INDICATOR: &str = "#3b82f6";

pub const STYLESHEET: &str = "
.pb-widget{display:flex;flex-direction:column;align-items:center;max-width:28rem;margin:0 auto;background:#f3f4f6;padding:1.5rem;border-radius:.5rem;font-family:system-ui,sans-serif}
.pb-widget h2{font-size:1.25rem;font-weight:700;margin:0 0 1rem;color:#1f2937}
.pb-help{margin:0 0 1.5rem;font-size:.875rem;color:#4b5563}
.pb-button{padding:.5rem 1rem;border-radius:.375rem;color:#fff;cursor:pointer;user-select:none;font-size:.875rem}
.pb-audio{background:#a855f7;margin-bottom:1rem}
.pb-password{width:100%;box-sizing:border-box;margin-bottom:1rem;background:#fff;padding:.75rem;border-radius:.375rem;border:1px solid #d1d5db;font:1.5rem monospace;height:3.5rem;color:#1f2937}
.pb-password.pb-empty{color:#9ca3af}
.pb-bar{width:100%;height:128px;margin-bottom:1.5rem;border-radius:.375rem;cursor:move;display:block}
.pb-actions{width:100%;display:flex;justify-content:space-between;margin-bottom:1rem}
.pb-submit{background:#22c55e}
.pb-submit.pb-disabled{opacity:.6;cursor:not-allowed}
.pb-layout{background:#3b82f6}
.pb-selector{width:100%;box-sizing:border-box;margin-bottom:1rem;background:#fff;padding:.75rem;border-radius:.375rem;border:1px solid #d1d5db;display:flex;flex-wrap:wrap;justify-content:center}
.pb-option{margin:.25rem;padding:.25rem .75rem;border-radius:.375rem;cursor:pointer;background:#e5e7eb}
.pb-option.pb-active{background:#3b82f6;color:#fff}
.pb-success{text-align:center;padding:2rem 0}
.pb-success .pb-check{font-size:1.875rem;color:#22c55e;margin-bottom:1rem}
.pb-hidden{display:none}
";

pub const FORM_TITLE: &str = "Enter Password";
pub const HELP_TEXT: &str = "Tilt the bar with your mouse to control the ball. Press SPACE to select the character. \
Press BACKSPACE to delete a character. Click \"Sound Torture\" to make things even worse.";
pub const SUCCESS_CHECK: &str = "✓";
pub const SUCCESS_TITLE: &str = "Password Accepted";
pub const SUCCESS_TEXT: &str =
    "Congratulations on having the patience to use this ridiculous input method.";
