#![no_std]

/// Column-major world-from-anchor transform, as produced by the tracker.
pub type PoseMatrix = [f32; 16];

/// Platform-agnostic tracking events.
///
/// Carries poses as plain arrays rather than importing math types from
/// arnote-core to avoid a circular dependency (core depends on hal).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackingEvent {
    /// A reference marker was recognized for the first time. `width_m` and
    /// `height_m` are the marker's physical size in meters.
    AnchorDetected {
        pose: PoseMatrix,
        width_m: f32,
        height_m: f32,
    },
    /// The tracked marker's pose changed.
    AnchorMoved { pose: PoseMatrix },
    /// Tracking of the marker was lost.
    AnchorLost,
    /// The user touched the camera view at the given pixel coordinates.
    Touch { x_px: f32, y_px: f32 },
}

/// Abstracts the AR tracking subsystem across platforms.
pub trait TrackingSource {
    /// Initialize the tracking subsystem.
    fn init(&mut self);

    /// Poll for tracking events. Non-blocking.
    fn poll(&mut self) -> Option<TrackingEvent>;
}

/// One textured rectangle, flattened for the platform renderer.
///
/// Corners are world-space positions in counter-clockwise order starting at
/// the bottom-left. Pixel quantities (`border_px`, `corner_px`, `font_px`)
/// apply to the texture the renderer rasterizes the text into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadCommand {
    pub corners: [[f32; 3]; 4],
    pub fill_rgba: [u8; 4],
    pub border_rgba: [u8; 4],
    pub text_rgba: [u8; 4],
    pub border_px: f32,
    pub corner_px: f32,
    pub font_px: f32,
    pub text: &'static str,
}

/// Abstracts the overlay renderer. Implementations draw each frame's quads
/// between `begin_frame` and `end_frame`; an empty frame clears the overlay.
pub trait Compositor {
    type Error: core::fmt::Debug;

    /// Start a new frame.
    fn begin_frame(&mut self) -> Result<(), Self::Error>;

    /// Draw one textured quad.
    fn draw_quad(&mut self, quad: &QuadCommand) -> Result<(), Self::Error>;

    /// Finish the frame and present it.
    fn end_frame(&mut self) -> Result<(), Self::Error>;
}
