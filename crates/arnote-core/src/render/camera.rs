//! Camera projection and screen-point unprojection.
//!
//! The forward path (world -> clip -> NDC -> viewport) positions overlay
//! content on screen; hit testing runs the same mapping in reverse to cast a
//! ray from a touched pixel into the scene.

use glam::{Mat4, Vec3, Vec4};

/// Camera state for one frame: view, projection, and viewport in pixels.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub view: Mat4,
    pub proj: Mat4,
    pub viewport_w: f32,
    pub viewport_h: f32,
}

/// A world-space ray with normalized direction.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Camera {
    pub fn new(view: Mat4, proj: Mat4, viewport_w: f32, viewport_h: f32) -> Self {
        Self {
            view,
            proj,
            viewport_w,
            viewport_h,
        }
    }

    /// Cast a ray from a screen point through the camera projection.
    ///
    /// Maps pixels to NDC, unprojects the near- and far-plane points, and
    /// returns the world ray between them. Requires a non-singular
    /// view-projection product.
    pub fn screen_ray(&self, x_px: f32, y_px: f32) -> Ray {
        // Viewport -> NDC. Screen Y grows downward, NDC Y upward.
        let ndc_x = (x_px / self.viewport_w) * 2.0 - 1.0;
        let ndc_y = 1.0 - (y_px / self.viewport_h) * 2.0;

        let inv = (self.proj * self.view).inverse();
        let near = unproject(&inv, ndc_x, ndc_y, -1.0);
        let far = unproject(&inv, ndc_x, ndc_y, 1.0);

        Ray {
            origin: near,
            dir: (far - near).normalize_or_zero(),
        }
    }

    /// Project a world point to screen pixels. Returns None for points at or
    /// behind the camera plane. Used by hosts and tests to aim touches.
    pub fn project(&self, world: Vec3) -> Option<[f32; 2]> {
        let clip = self.proj * self.view * world.extend(1.0);
        if clip.w <= 1e-6 {
            return None;
        }
        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;
        Some([
            (ndc_x + 1.0) * 0.5 * self.viewport_w,
            (1.0 - ndc_y) * 0.5 * self.viewport_h,
        ])
    }
}

/// Inverse viewport mapping at one NDC depth.
fn unproject(inv_view_proj: &Mat4, ndc_x: f32, ndc_y: f32, ndc_z: f32) -> Vec3 {
    let p = *inv_view_proj * Vec4::new(ndc_x, ndc_y, ndc_z, 1.0);
    Vec3::new(p.x, p.y, p.z) / p.w
}

/// Build a perspective projection matrix (right-handed).
/// fov_y: vertical field of view in radians.
/// aspect: width / height.
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    Mat4::perspective_rh(fov_y, aspect, near, far)
}

/// Build a look-at view matrix (right-handed).
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    Mat4::look_at_rh(eye, target, up)
}
