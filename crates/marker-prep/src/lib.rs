/// Error types for marker preparation.
pub mod error;

/// Core type definitions for markers.
pub mod types;

/// Identifier generation and sanitization.
pub mod identifier;

/// Marker image loading and trackability validation.
pub mod loader;

/// Manifest generation.
pub mod output_gen;

pub use error::MarkerError;
pub use types::{MarkerAsset, MarkerBuildConfig};

use std::fs;
use std::path::{Path, PathBuf};

/// Validate every marker in `config.source_dir` and write `manifest.rs` to
/// `config.out_dir`.
///
/// Scans for `.png` files (non-recursive, sorted for determinism). Returns
/// the validated markers, for `cargo:rerun-if-changed` directives. A missing
/// or empty source directory succeeds with an empty manifest, so host crates
/// build before any marker art exists.
pub fn build_manifest(config: &MarkerBuildConfig) -> Result<Vec<MarkerAsset>, MarkerError> {
    fs::create_dir_all(&config.out_dir)?;

    let markers = check_markers(&config.source_dir, config.width_m)?;
    output_gen::write_manifest(&markers, &config.out_dir)?;

    Ok(markers)
}

/// Validate every marker image in `source_dir` without writing output.
pub fn check_markers(source_dir: &Path, width_m: f32) -> Result<Vec<MarkerAsset>, MarkerError> {
    let mut png_files = collect_files(source_dir, "png");
    png_files.sort();

    let all_paths: Vec<&Path> = png_files.iter().map(|p| p.as_path()).collect();
    identifier::check_collisions(&all_paths)?;

    let mut markers = Vec::with_capacity(png_files.len());
    for path in &png_files {
        log::info!("Validating marker: {}", path.display());
        markers.push(loader::load_marker(path, width_m)?);
    }

    Ok(markers)
}

/// Collect files with a given extension from a directory (non-recursive).
fn collect_files(dir: &Path, extension: &str) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }
    let mut files = Vec::new();
    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            let matches = path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
            if matches {
                files.push(path);
            }
        }
    }
    files
}
