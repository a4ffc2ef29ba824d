//! Pure geometry builders for the anchored panel and buttons.
//!
//! Stateless: each call returns a freshly built node positioned in
//! anchor-local coordinates. The scene graph discards the previous nodes and
//! replaces them wholesale on every rebuild.

use super::style;
use super::{ButtonNode, PanelNode, Quad, Surface};
use crate::scene::content;
use crate::scene::{MarkerSize, PaneState};
use glam::Vec3;

/// Button width in meters.
pub const BUTTON_WIDTH_M: f32 = 0.02;
/// Button height in meters.
pub const BUTTON_HEIGHT_M: f32 = 0.01;
/// Vertical offset of the button row from the marker center (meters).
pub const BUTTON_ROW_Y_M: f32 = -0.0475;
/// Horizontal spacing between adjacent button slots (meters).
pub const BUTTON_SLOT_SPACING_M: f32 = 0.0275;
/// Gap between the marker area and the panel center (meters).
pub const PANEL_MARGIN_M: f32 = 0.015;

/// Build the content panel for `state`, sized to the marker's physical size
/// and offset below the root plane so it never overlaps the marker itself.
pub fn build_panel(state: PaneState, size: MarkerSize) -> PanelNode {
    let content = content::content_for(state);
    PanelNode {
        state,
        title: content.title,
        surface: Surface {
            quad: Quad {
                center: Vec3::new(0.0, -(size.height + PANEL_MARGIN_M), 0.0),
                half_width: size.width * 0.5,
                half_height: size.height * 0.5,
            },
            style: style::panel_style(),
            text: content.body,
            font_px: style::PANEL_FONT_PX,
        },
    }
}

/// Build the button for `state`, styled by whether it matches the current
/// selection.
pub fn build_button(state: PaneState, current: PaneState) -> ButtonNode {
    let active = state == current;
    ButtonNode {
        state,
        active,
        surface: Surface {
            quad: Quad {
                center: Vec3::new(slot_x(state), BUTTON_ROW_Y_M, 0.0),
                half_width: BUTTON_WIDTH_M * 0.5,
                half_height: BUTTON_HEIGHT_M * 0.5,
            },
            style: style::button_style(active),
            text: state.label(),
            font_px: style::BUTTON_FONT_PX,
        },
    }
}

/// Fixed horizontal slot for a pane's button: Details, Description, Time
/// left to right.
fn slot_x(state: PaneState) -> f32 {
    match state {
        PaneState::Details => -BUTTON_SLOT_SPACING_M,
        PaneState::Description => 0.0,
        PaneState::Time => BUTTON_SLOT_SPACING_M,
    }
}
