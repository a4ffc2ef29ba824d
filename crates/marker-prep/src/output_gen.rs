use crate::error::MarkerError;
use crate::types::MarkerAsset;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Format an f32 as a valid Rust literal (always includes decimal point).
fn f32_literal(v: f32) -> String {
    let s = format!("{}", v);
    if s.contains('.') || s.contains("inf") || s.contains("NaN") {
        s
    } else {
        format!("{}.0", s)
    }
}

/// Write `manifest.rs` describing every validated marker.
///
/// The manifest is included into host crates via `include!` and carries one
/// descriptor per marker plus the full table. An empty marker list still
/// produces a valid (empty-table) manifest.
pub fn write_manifest(markers: &[MarkerAsset], out_dir: &Path) -> Result<(), MarkerError> {
    let mut source = String::new();

    source.push_str("// Generated marker manifest. Do not edit.\n\n");
    source.push_str(
        "#[derive(Debug, Clone, Copy, PartialEq)]\n\
         pub struct MarkerDescriptor {\n\
         \x20   pub name: &'static str,\n\
         \x20   pub px_width: u32,\n\
         \x20   pub px_height: u32,\n\
         \x20   pub width_m: f32,\n\
         \x20   pub height_m: f32,\n\
         }\n\n",
    );

    let _ = writeln!(source, "pub const MARKER_COUNT: usize = {};\n", markers.len());

    let _ = writeln!(
        source,
        "pub const MARKERS: [MarkerDescriptor; {}] = [",
        markers.len()
    );
    for marker in markers {
        let _ = writeln!(
            source,
            "    MarkerDescriptor {{\n\
             \x20       name: \"{}\",\n\
             \x20       px_width: {},\n\
             \x20       px_height: {},\n\
             \x20       width_m: {},\n\
             \x20       height_m: {},\n\
             \x20   }},",
            marker.identifier,
            marker.px_width,
            marker.px_height,
            f32_literal(marker.width_m),
            f32_literal(marker.height_m),
        );
    }
    source.push_str("];\n");

    fs::write(out_dir.join("manifest.rs"), source)?;
    Ok(())
}
