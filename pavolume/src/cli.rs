//! Command-line arguments for pavolume

use clap::Parser;

use crate::command::{MuteAction, VolumeSpec};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " [", env!("GIT_HASH"), "]");

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "pavolume")]
#[command(about = "Query and set volume/mute of the default PulseAudio sink")]
#[command(version = VERSION)]
pub struct Args {
    /// Output template; its `%s` is replaced by the volume percentage
    /// (or `---` while muted)
    #[arg(short, long, env = "PAVOLUME_FORMAT", value_name = "FORMAT")]
    pub format: Option<String>,

    /// Set muting on or off, or toggle the current state
    #[arg(short, long, value_enum, value_name = "ACTION")]
    pub mute: Option<MuteAction>,

    /// Volume percentage, absolute (N) or relative (+N / -N); the result
    /// is clamped to 0-100
    #[arg(
        short,
        long,
        value_name = "[+|-]N",
        allow_hyphen_values = true,
        value_parser = parse_volume_spec
    )]
    pub volume: Option<VolumeSpec>,

    /// Stay running and reprint the volume on every change
    #[arg(short = 's', long = "monitor")]
    pub monitor: bool,

    /// List all sinks instead of reporting the default one
    #[arg(short, long, conflicts_with_all = ["volume", "mute", "monitor"])]
    pub list: bool,
}

fn parse_volume_spec(s: &str) -> Result<VolumeSpec, String> {
    s.parse::<VolumeSpec>().map_err(|e| e.to_string())
}
