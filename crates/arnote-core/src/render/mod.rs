//! Renderable node types and frame composition.
//!
//! Node geometry lives in anchor-local coordinates; `compose` flattens the
//! live subtree into world-space quad commands for the platform compositor.

pub mod camera;
pub mod geometry;
pub mod style;

use crate::scene::{PaneState, SceneSubtree};
use arnote_hal::{Compositor, QuadCommand};
use glam::{Mat4, Vec3};
use style::SurfaceStyle;

/// Axis-aligned rectangle in the anchor-local X-Y plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quad {
    /// Center in anchor-local coordinates (meters).
    pub center: Vec3,
    /// Half extent along local X (meters).
    pub half_width: f32,
    /// Half extent along local Y (meters).
    pub half_height: f32,
}

impl Quad {
    /// Corner positions in counter-clockwise order starting bottom-left.
    pub fn corners(&self) -> [Vec3; 4] {
        let (w, h) = (self.half_width, self.half_height);
        [
            self.center + Vec3::new(-w, -h, 0.0),
            self.center + Vec3::new(w, -h, 0.0),
            self.center + Vec3::new(w, h, 0.0),
            self.center + Vec3::new(-w, h, 0.0),
        ]
    }
}

/// A renderable rectangle: geometry, styling, and the text drawn onto it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub quad: Quad,
    pub style: SurfaceStyle,
    pub text: &'static str,
    pub font_px: f32,
}

/// The content panel for the currently selected pane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelNode {
    pub state: PaneState,
    pub title: &'static str,
    pub surface: Surface,
}

/// One selection button. Carries its own pane tag so input routing compares
/// tags rather than node identity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonNode {
    pub state: PaneState,
    /// Derived: `state == current` at the time of the last rebuild.
    pub active: bool,
    pub surface: Surface,
}

/// Collect the draw list for one frame: panel first, then the three buttons.
pub fn draw_list(subtree: &SceneSubtree) -> Vec<QuadCommand> {
    let pose = subtree.pose();
    let mut list = Vec::with_capacity(4);
    list.push(quad_command(&subtree.panel().surface, &pose));
    for button in subtree.buttons() {
        list.push(quad_command(&button.surface, &pose));
    }
    list
}

/// Emit one frame to the compositor. Read-only with respect to the scene;
/// an absent subtree produces an empty frame.
pub fn compose<C: Compositor>(
    subtree: Option<&SceneSubtree>,
    compositor: &mut C,
) -> Result<(), C::Error> {
    compositor.begin_frame()?;
    if let Some(subtree) = subtree {
        for quad in draw_list(subtree) {
            compositor.draw_quad(&quad)?;
        }
    }
    compositor.end_frame()
}

/// Flatten one surface into a world-space draw command.
fn quad_command(surface: &Surface, pose: &Mat4) -> QuadCommand {
    let corners = surface
        .quad
        .corners()
        .map(|c| pose.transform_point3(c).to_array());
    QuadCommand {
        corners,
        fill_rgba: surface.style.background.0,
        border_rgba: surface.style.border.0,
        text_rgba: surface.style.text_color.0,
        border_px: surface.style.border_px,
        corner_px: surface.style.corner_px,
        font_px: surface.font_px,
        text: surface.text,
    }
}
