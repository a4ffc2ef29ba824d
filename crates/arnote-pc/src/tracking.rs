//! Scripted tracking source for desktop debugging.
//!
//! No camera or tracker exists on the desktop, so the host replays a fixed
//! event script: detect the marker, touch two buttons, drift, lose tracking.

use arnote_core::render::camera::Camera;
use arnote_hal::{TrackingEvent, TrackingSource};
use glam::{Mat4, Vec3};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Tracking source fed from a shared queue. The host keeps a clone as a
/// handle for pushing events while the session owns the source itself.
#[derive(Clone, Default)]
pub struct ScriptedTracking {
    events: Rc<RefCell<VecDeque<TrackingEvent>>>,
}

impl ScriptedTracking {
    pub fn new() -> Self {
        Self::default()
    }

    /// A second handle onto the same event queue.
    pub fn handle(&self) -> Self {
        self.clone()
    }

    pub fn push(&self, event: TrackingEvent) {
        self.events.borrow_mut().push_back(event);
    }
}

impl TrackingSource for ScriptedTracking {
    fn init(&mut self) {
        log::info!("scripted tracking source ready");
    }

    fn poll(&mut self) -> Option<TrackingEvent> {
        self.events.borrow_mut().pop_front()
    }
}

const IDENTITY_POSE: [f32; 16] = [
    1.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, //
    0.0, 0.0, 0.0, 1.0,
];

/// The demo script: one event per frame.
///
/// Touch coordinates are computed through the camera so the script stays
/// valid if the projection changes.
pub fn demo_script(camera: &Camera) -> Vec<TrackingEvent> {
    let mut moved_pose = IDENTITY_POSE;
    moved_pose[12] = 0.02;

    vec![
        TrackingEvent::AnchorDetected {
            pose: IDENTITY_POSE,
            width_m: 0.1,
            height_m: 0.08,
        },
        // Description button slot, then Time.
        touch_at(camera, Vec3::new(0.0, -0.0475, 0.0)),
        touch_at(camera, Vec3::new(0.0275, -0.0475, 0.0)),
        TrackingEvent::AnchorMoved { pose: moved_pose },
        TrackingEvent::AnchorLost,
    ]
}

/// Touch event aimed at an anchor-local point under the identity pose.
fn touch_at(camera: &Camera, local: Vec3) -> TrackingEvent {
    let [x_px, y_px] = camera
        .project(local)
        .expect("script point should be in front of the camera");
    TrackingEvent::Touch { x_px, y_px }
}
