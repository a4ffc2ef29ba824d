use marker_prep::MarkerBuildConfig;
use std::env;
use std::path::PathBuf;

fn main() {
    // Validate marker images and generate the descriptor manifest. A missing
    // markers/ directory still produces a valid empty manifest.
    let out = PathBuf::from(env::var_os("OUT_DIR").unwrap()).join("markers");
    let config = MarkerBuildConfig {
        source_dir: PathBuf::from("markers"),
        out_dir: out,
        width_m: 0.1,
    };
    let markers = marker_prep::build_manifest(&config).expect("marker manifest build failed");

    println!("cargo:rerun-if-changed=markers");
    for marker in &markers {
        println!("cargo:rerun-if-changed={}", marker.source.display());
    }
}
