//! Anchor scene graph and pane state machine.

pub mod content;

use crate::render::geometry;
use crate::render::{ButtonNode, PanelNode, Quad};
use glam::Mat4;

/// Active content pane selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaneState {
    #[default]
    Details,
    Description,
    Time,
}

impl PaneState {
    /// All panes in button-slot order (left to right).
    pub const ALL: [PaneState; 3] = [
        PaneState::Details,
        PaneState::Description,
        PaneState::Time,
    ];

    /// On-button label text.
    pub fn label(self) -> &'static str {
        match self {
            PaneState::Details => "Details",
            PaneState::Description => "Description",
            PaneState::Time => "Time",
        }
    }
}

/// Physical size of the tracked marker in meters, discovered at detection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerSize {
    pub width: f32,
    pub height: f32,
}

/// What a hit-test candidate quad belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    Button(PaneState),
    Panel,
}

/// Error type for scene graph operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneError {
    /// Selection was routed while no anchor subtree is attached.
    NoAnchor,
}

impl core::fmt::Display for SceneError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SceneError::NoAnchor => write!(f, "no anchor subtree attached"),
        }
    }
}

impl std::error::Error for SceneError {}

/// The renderable nodes rigidly attached to one tracked anchor.
///
/// All geometry is in anchor-local coordinates: the marker spans the X-Y
/// plane centered on the origin with normal +Z, so the subtree moves rigidly
/// with the tracked pose.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneSubtree {
    pose: Mat4,
    size: MarkerSize,
    panel: PanelNode,
    buttons: [ButtonNode; 3],
}

impl SceneSubtree {
    /// Latest world-from-anchor transform.
    pub fn pose(&self) -> Mat4 {
        self.pose
    }

    /// Physical marker size discovered at detection.
    pub fn size(&self) -> MarkerSize {
        self.size
    }

    /// The single live content panel.
    pub fn panel(&self) -> &PanelNode {
        &self.panel
    }

    /// The three selection buttons, in `PaneState::ALL` order.
    pub fn buttons(&self) -> &[ButtonNode; 3] {
        &self.buttons
    }

    /// Hit-test candidates: every content quad with its owning tag.
    /// Panel first, then buttons in slot order.
    pub fn hit_candidates(&self) -> impl Iterator<Item = (HitTarget, Quad)> + '_ {
        core::iter::once((HitTarget::Panel, self.panel.surface.quad)).chain(
            self.buttons
                .iter()
                .map(|b| (HitTarget::Button(b.state), b.surface.quad)),
        )
    }
}

/// Owner of the anchor subtree and the current pane selection.
///
/// Single-owner contract: `attach_anchor`, `handle_selection`, and pose
/// updates must not run concurrently with each other or with subtree reads.
/// Multi-threaded embeddings must serialize all of them through one owner.
#[derive(Debug, Default)]
pub struct AnchorSceneGraph {
    current: PaneState,
    subtree: Option<SceneSubtree>,
}

impl AnchorSceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a newly detected anchor and build the initial subtree.
    ///
    /// Resets the selection to `PaneState::Details`. Callers must not attach
    /// a second anchor while one is live; this is a documented precondition,
    /// not a runtime-checked error.
    pub fn attach_anchor(&mut self, pose: Mat4, size: MarkerSize) {
        self.current = PaneState::Details;
        self.subtree = Some(SceneSubtree {
            pose,
            size,
            panel: geometry::build_panel(self.current, size),
            buttons: PaneState::ALL.map(|s| geometry::build_button(s, self.current)),
        });
    }

    /// Select a pane and rebuild the subtree.
    ///
    /// Reselecting the current pane still rebuilds (visually a no-op).
    /// Fails only when no anchor is attached, which is a collaborator bug.
    pub fn handle_selection(&mut self, state: PaneState) -> Result<(), SceneError> {
        if self.subtree.is_none() {
            return Err(SceneError::NoAnchor);
        }
        self.current = state;
        self.rebuild();
        Ok(())
    }

    /// Store the latest tracked pose. Returns false when no subtree is live
    /// (a stale pose event arriving after tracking loss is ignored).
    pub fn update_pose(&mut self, pose: Mat4) -> bool {
        match self.subtree.as_mut() {
            Some(subtree) => {
                subtree.pose = pose;
                true
            }
            None => false,
        }
    }

    /// Tear down the subtree atomically. Returns whether one was live.
    pub fn detach(&mut self) -> bool {
        self.subtree.take().is_some()
    }

    /// Currently selected pane. Meaningful only while an anchor is attached.
    pub fn current_state(&self) -> PaneState {
        self.current
    }

    pub fn subtree(&self) -> Option<&SceneSubtree> {
        self.subtree.as_ref()
    }

    /// Replace the panel and all three buttons from the current selection.
    /// Wholesale replacement, never a partial update: after every rebuild
    /// exactly one panel and three freshly styled buttons are attached.
    fn rebuild(&mut self) {
        let Some(subtree) = self.subtree.as_mut() else {
            return;
        };
        subtree.panel = geometry::build_panel(self.current, subtree.size);
        subtree.buttons = PaneState::ALL.map(|s| geometry::build_button(s, self.current));
    }
}
