//! Touch hit testing: screen point -> anchor-local ray -> pane selection.

use crate::render::camera::Camera;
use crate::render::Quad;
use crate::scene::{HitTarget, PaneState, SceneSubtree};
use glam::Vec3;

/// Minimum ray parameter accepted as a hit (rejects intersections at or
/// behind the ray origin).
const T_MIN: f32 = 1e-4;
/// Rays closer to parallel with the content plane than this are misses.
const DENOM_MIN: f32 = 1e-6;

/// Resolve a 2-D touch to the pane whose button it hit, if any.
///
/// Casts a ray through the camera projection, transforms it into
/// anchor-local space, and keeps the nearest intersection among the
/// subtree's tagged quads. Only a button hit selects a pane; panel hits and
/// misses are the normal no-selection outcome, never an error.
pub fn resolve_touch(
    x_px: f32,
    y_px: f32,
    camera: &Camera,
    subtree: &SceneSubtree,
) -> Option<PaneState> {
    let ray = camera.screen_ray(x_px, y_px);

    // Hit testing runs in anchor-local space, where every quad is an
    // axis-aligned rectangle in the Z=0 plane.
    let inv_pose = subtree.pose().inverse();
    let origin = inv_pose.transform_point3(ray.origin);
    let dir = inv_pose.transform_vector3(ray.dir);

    let mut nearest: Option<(f32, HitTarget)> = None;
    for (target, quad) in subtree.hit_candidates() {
        let Some(t) = intersect_quad(origin, dir, &quad) else {
            continue;
        };
        if nearest.map_or(true, |(best, _)| t < best) {
            nearest = Some((t, target));
        }
    }

    match nearest {
        Some((_, HitTarget::Button(state))) => Some(state),
        _ => None,
    }
}

/// Ray/rectangle intersection in anchor-local space.
///
/// Returns the ray parameter of the hit, or None when the ray is parallel
/// to the quad's plane, intersects behind the origin, or lands outside the
/// rectangle.
fn intersect_quad(origin: Vec3, dir: Vec3, quad: &Quad) -> Option<f32> {
    if dir.z.abs() < DENOM_MIN {
        return None;
    }
    let t = (quad.center.z - origin.z) / dir.z;
    if t <= T_MIN {
        return None;
    }
    let x = origin.x + t * dir.x;
    let y = origin.y + t * dir.y;
    if (x - quad.center.x).abs() <= quad.half_width
        && (y - quad.center.y).abs() <= quad.half_height
    {
        Some(t)
    } else {
        None
    }
}
