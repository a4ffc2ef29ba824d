//! Desktop Debug Host for the arnote AR overlay
//!
//! Single-threaded application that replays a scripted tracking session
//! through the core scene graph and logs the composed frames. Exercises the
//! same event pump the mobile host drives from a real tracker.

mod compositor;
mod tracking;

#[allow(dead_code)]
mod markers {
    include!(concat!(env!("OUT_DIR"), "/markers/manifest.rs"));
}

use arnote_core::render::camera::{look_at, perspective, Camera};
use arnote_core::session::Session;
use glam::Vec3;

fn main() {
    env_logger::init();
    log::info!("arnote-pc: desktop debug host starting");

    log::info!("{} reference marker(s) in manifest", markers::MARKER_COUNT);
    for marker in &markers::MARKERS {
        log::info!(
            "  {}: {}x{} px, {}x{} m",
            marker.name,
            marker.px_width,
            marker.px_height,
            marker.width_m,
            marker.height_m
        );
    }

    // Fixed camera half a meter back from the marker plane.
    let camera = Camera::new(
        look_at(Vec3::new(0.0, 0.0, 0.5), Vec3::ZERO, Vec3::Y),
        perspective(60.0_f32.to_radians(), 640.0 / 480.0, 0.01, 10.0),
        640.0,
        480.0,
    );

    let tracking = tracking::ScriptedTracking::new();
    let handle = tracking.handle();
    let mut session = Session::new(tracking);
    let mut compositor = compositor::ConsoleCompositor::default();

    // One scripted event per frame, then one drain-down frame.
    for event in tracking::demo_script(&camera) {
        handle.push(event);
        session.pump(&camera);
        log::info!("current pane: {:?}", session.graph().current_state());
        if let Err(err) = session.compose(&mut compositor) {
            log::error!("compose failed: {:?}", err);
        }
    }
    if let Err(err) = session.compose(&mut compositor) {
        log::error!("compose failed: {:?}", err);
    }

    log::info!("arnote-pc: script complete");
}
