use clap::{Parser, Subcommand};
use marker_prep::{build_manifest, check_markers, MarkerBuildConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "marker-prep")]
#[command(about = "Reference marker preparation tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress all non-error output
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate marker images without writing output
    Check {
        /// Directory of marker PNGs
        input: PathBuf,

        /// Physical width assigned to each marker, in meters
        #[arg(long, default_value = "0.1")]
        width_m: f32,
    },
    /// Validate markers and write manifest.rs
    Manifest {
        /// Directory of marker PNGs
        input: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output: PathBuf,

        /// Physical width assigned to each marker, in meters
        #[arg(long, default_value = "0.1")]
        width_m: f32,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if !cli.quiet {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .init();
    }

    match cli.command {
        Commands::Check { input, width_m } => {
            let markers = check_markers(&input, width_m)?;
            eprintln!("✓ {} marker(s) valid", markers.len());
            Ok(())
        }
        Commands::Manifest {
            input,
            output,
            width_m,
        } => {
            let config = MarkerBuildConfig {
                source_dir: input,
                out_dir: output.clone(),
                width_m,
            };
            let markers = build_manifest(&config)?;
            eprintln!(
                "✓ wrote manifest for {} marker(s) to {}",
                markers.len(),
                output.display()
            );
            Ok(())
        }
    }
}
