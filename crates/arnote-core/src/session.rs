//! Session event pump: the single owner of the anchor scene graph.
//!
//! Tracking and touch events are drained serially through `pump`, which is
//! the sole mutator; `compose` is the read-only render path. Embeddings with
//! multiple execution threads must serialize both through one owner.

use crate::input;
use crate::render;
use crate::render::camera::Camera;
use crate::scene::{AnchorSceneGraph, MarkerSize};
use arnote_hal::{Compositor, TrackingEvent, TrackingSource};
use glam::Mat4;

/// One AR session: a tracking source funneled into the scene graph.
pub struct Session<T: TrackingSource> {
    tracking: T,
    graph: AnchorSceneGraph,
}

impl<T: TrackingSource> Session<T> {
    /// Create a session and initialize the tracking subsystem.
    pub fn new(mut tracking: T) -> Self {
        tracking.init();
        Self {
            tracking,
            graph: AnchorSceneGraph::new(),
        }
    }

    /// Drain pending tracking events and apply them in arrival order.
    ///
    /// `camera` is the projection used to route touch events this frame.
    /// Events queued before an `AnchorLost` teardown resolve against the
    /// state they arrive in: a pending touch after loss is a no-selection.
    pub fn pump(&mut self, camera: &Camera) {
        while let Some(event) = self.tracking.poll() {
            self.dispatch(event, camera);
        }
    }

    /// Emit the current frame to the compositor. Read-only.
    pub fn compose<C: Compositor>(&self, compositor: &mut C) -> Result<(), C::Error> {
        render::compose(self.graph.subtree(), compositor)
    }

    /// The owned scene graph, for state inspection.
    pub fn graph(&self) -> &AnchorSceneGraph {
        &self.graph
    }

    fn dispatch(&mut self, event: TrackingEvent, camera: &Camera) {
        match event {
            TrackingEvent::AnchorDetected {
                pose,
                width_m,
                height_m,
            } => {
                log::info!("anchor detected: {}x{} m", width_m, height_m);
                self.graph.attach_anchor(
                    Mat4::from_cols_array(&pose),
                    MarkerSize {
                        width: width_m,
                        height: height_m,
                    },
                );
            }
            TrackingEvent::AnchorMoved { pose } => {
                if !self.graph.update_pose(Mat4::from_cols_array(&pose)) {
                    log::debug!("pose update ignored: no anchor attached");
                }
            }
            TrackingEvent::AnchorLost => {
                if self.graph.detach() {
                    log::info!("tracking lost: subtree detached");
                }
            }
            TrackingEvent::Touch { x_px, y_px } => {
                let Some(subtree) = self.graph.subtree() else {
                    log::debug!("touch ignored: no anchor attached");
                    return;
                };
                match input::resolve_touch(x_px, y_px, camera, subtree) {
                    Some(state) => {
                        log::info!("button touched: selecting {:?}", state);
                        if let Err(err) = self.graph.handle_selection(state) {
                            log::error!("selection rejected: {}", err);
                        }
                    }
                    None => log::debug!("touch at ({}, {}) hit no button", x_px, y_px),
                }
            }
        }
    }
}
