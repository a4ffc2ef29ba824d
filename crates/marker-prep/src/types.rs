use std::path::PathBuf;

/// Configuration for a manifest build.
#[derive(Debug, Clone)]
pub struct MarkerBuildConfig {
    /// Directory scanned for `.png` marker images.
    pub source_dir: PathBuf,
    /// Directory the generated manifest is written into.
    pub out_dir: PathBuf,
    /// Physical width assigned to every marker, in meters. The height is
    /// derived from each image's aspect ratio.
    pub width_m: f32,
}

/// One validated reference marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerAsset {
    /// Source image path.
    pub source: PathBuf,
    /// Rust identifier generated from the file name.
    pub identifier: String,
    /// Image width in pixels.
    pub px_width: u32,
    /// Image height in pixels.
    pub px_height: u32,
    /// Physical width in meters.
    pub width_m: f32,
    /// Physical height in meters, from the image aspect ratio.
    pub height_m: f32,
}
