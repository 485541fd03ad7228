//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Strip the solid background from a logo and export transparent icon sizes.
///
/// With no arguments, reads `assets/icons/logo.png` and writes
/// `assets/icons/app_logo_{1024,512,256}.png`.
#[derive(Parser, Debug, Clone, Default)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: nobg.toml, if present)
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Source logo image
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Output directory for the generated icons
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Max RGB distance (sum of channel differences) from the background color
    #[arg(short, long)]
    pub threshold: Option<u32>,

    /// Output size in pixels; repeat for several sizes (largest is rendered first)
    #[arg(short, long = "size", value_name = "PX")]
    pub sizes: Vec<u32>,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}
