//! Shared colors and surface styling for panels and buttons.

/// RGBA color, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba(pub [u8; 4]);

/// Sticky-note color shared by all panels and buttons: translucent
/// reddish-pink (alpha 0.75).
pub const STICKY: Rgba = Rgba([255, 40, 85, 191]);

/// Opaque black.
pub const BLACK: Rgba = Rgba([0, 0, 0, 255]);

/// Button border width in pixels.
pub const BORDER_PX: f32 = 4.0;
/// Button corner radius in pixels.
pub const CORNER_PX: f32 = 8.0;
/// Button label font size in pixels (bold).
pub const BUTTON_FONT_PX: f32 = 32.0;
/// Panel body font size in pixels (bold).
pub const PANEL_FONT_PX: f32 = 30.0;

/// Visual styling for one surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceStyle {
    pub background: Rgba,
    pub text_color: Rgba,
    pub border: Rgba,
    pub border_px: f32,
    pub corner_px: f32,
}

/// Button styling as a pure function of the active flag.
///
/// Active: black border and text on the sticky background.
/// Inactive: sticky border and text on black.
pub fn button_style(active: bool) -> SurfaceStyle {
    if active {
        SurfaceStyle {
            background: STICKY,
            text_color: BLACK,
            border: BLACK,
            border_px: BORDER_PX,
            corner_px: CORNER_PX,
        }
    } else {
        SurfaceStyle {
            background: BLACK,
            text_color: STICKY,
            border: STICKY,
            border_px: BORDER_PX,
            corner_px: CORNER_PX,
        }
    }
}

/// Content panel styling: black text on the sticky background, no border.
pub fn panel_style() -> SurfaceStyle {
    SurfaceStyle {
        background: STICKY,
        text_color: BLACK,
        border: STICKY,
        border_px: 0.0,
        corner_px: 0.0,
    }
}
