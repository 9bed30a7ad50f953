//! Command intent
//!
//! One `Command` is built from arguments and configuration at startup and
//! only read afterwards. `plan()` turns the intent plus the sink's current
//! state into the writes to issue against the server.

use std::str::FromStr;

use clap::ValueEnum;

use crate::cli::Args;
use crate::config::{self, FileConfig};
use crate::error::Error;
use crate::sink::Sink;
use crate::volume;

/// Mute directive from `-m`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MuteAction {
    On,
    Off,
    Toggle,
}

/// Volume target from `-v`: absolute percentage, or a signed delta when the
/// argument carries an explicit `+`/`-` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeSpec {
    Absolute(i32),
    Delta(i32),
}

impl VolumeSpec {
    /// Resolve the target percentage against the sink's current volume.
    /// The result is clamped to [0, 100].
    pub fn apply(&self, current_percent: u32) -> u32 {
        match self {
            VolumeSpec::Absolute(v) => volume::constrain(*v as i64),
            VolumeSpec::Delta(d) => volume::constrain(current_percent as i64 + *d as i64),
        }
    }
}

impl FromStr for VolumeSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i32 = s
            .parse()
            .map_err(|_| Error::InvalidVolume(s.to_string()))?;
        if s.starts_with('+') || s.starts_with('-') {
            Ok(VolumeSpec::Delta(value))
        } else {
            Ok(VolumeSpec::Absolute(value))
        }
    }
}

/// Fully resolved command intent
#[derive(Debug, Clone)]
pub struct Command {
    /// Output template; its `%s` receives the volume report
    pub format: String,
    pub volume: Option<VolumeSpec>,
    pub mute: Option<MuteAction>,
    pub monitor: bool,
    pub list: bool,
}

/// Writes to issue for one command against one sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mutation {
    /// New mute state, if any write is needed
    pub mute: Option<bool>,
    /// New volume percentage, already delta-resolved and clamped
    pub volume: Option<u32>,
}

impl Command {
    /// Merge CLI arguments with file configuration into a command intent.
    pub fn from_args(args: &Args, file: &FileConfig) -> Self {
        Self {
            format: config::resolve_format(args.format.as_deref(), file),
            volume: args.volume,
            mute: args.mute,
            monitor: args.monitor,
            list: args.list,
        }
    }

    /// Plan the server writes for this command given the sink's current
    /// state.
    ///
    /// Mute directives resolve first (`toggle` against the current state).
    /// Any volume change also unmutes the sink, unless muting was explicitly
    /// turned on or toggled by the same command.
    pub fn plan(&self, current: &Sink) -> Mutation {
        let mut mute = match self.mute {
            Some(MuteAction::On) => Some(true),
            Some(MuteAction::Off) => Some(false),
            Some(MuteAction::Toggle) => Some(!current.muted),
            None => None,
        };

        let volume = self.volume.map(|spec| spec.apply(current.volume_percent));

        if volume.is_some() && !matches!(self.mute, Some(MuteAction::On) | Some(MuteAction::Toggle)) {
            mute = Some(false);
        }

        Mutation { mute, volume }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sink(volume_percent: u32, muted: bool) -> Sink {
        Sink {
            index: 0,
            name: "test".to_string(),
            description: None,
            channels: 2,
            volume_percent,
            muted,
            is_default: true,
        }
    }

    fn command(volume: Option<VolumeSpec>, mute: Option<MuteAction>) -> Command {
        Command {
            format: "%s".to_string(),
            volume,
            mute,
            monitor: false,
            list: false,
        }
    }

    #[test]
    fn parse_absolute() {
        assert_eq!("50".parse::<VolumeSpec>().unwrap(), VolumeSpec::Absolute(50));
        assert_eq!("0".parse::<VolumeSpec>().unwrap(), VolumeSpec::Absolute(0));
    }

    #[test]
    fn parse_delta() {
        assert_eq!("+5".parse::<VolumeSpec>().unwrap(), VolumeSpec::Delta(5));
        assert_eq!("-12".parse::<VolumeSpec>().unwrap(), VolumeSpec::Delta(-12));
        assert_eq!("+0".parse::<VolumeSpec>().unwrap(), VolumeSpec::Delta(0));
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!("abc".parse::<VolumeSpec>().is_err());
        assert!("".parse::<VolumeSpec>().is_err());
        assert!("+".parse::<VolumeSpec>().is_err());
        assert!("5%".parse::<VolumeSpec>().is_err());
        assert!("1.5".parse::<VolumeSpec>().is_err());
    }

    #[test]
    fn delta_applies_against_current() {
        assert_eq!(VolumeSpec::Delta(10).apply(45), 55);
        assert_eq!(VolumeSpec::Delta(-10).apply(45), 35);
    }

    #[test]
    fn delta_clamps_at_both_ends() {
        assert_eq!(VolumeSpec::Delta(20).apply(95), 100);
        assert_eq!(VolumeSpec::Delta(-20).apply(5), 0);
    }

    #[test]
    fn absolute_clamps_above_full() {
        assert_eq!(VolumeSpec::Absolute(150).apply(30), 100);
    }

    #[test]
    fn volume_change_clears_mute() {
        let plan = command(Some(VolumeSpec::Absolute(40)), None).plan(&sink(70, true));
        assert_eq!(plan.mute, Some(false));
        assert_eq!(plan.volume, Some(40));
    }

    #[test]
    fn volume_change_with_explicit_mute_off() {
        let plan =
            command(Some(VolumeSpec::Delta(5)), Some(MuteAction::Off)).plan(&sink(50, true));
        assert_eq!(plan.mute, Some(false));
        assert_eq!(plan.volume, Some(55));
    }

    #[test]
    fn mute_on_survives_volume_change() {
        let plan =
            command(Some(VolumeSpec::Absolute(40)), Some(MuteAction::On)).plan(&sink(70, false));
        assert_eq!(plan.mute, Some(true));
        assert_eq!(plan.volume, Some(40));
    }

    #[test]
    fn toggle_survives_volume_change() {
        let plan =
            command(Some(VolumeSpec::Absolute(40)), Some(MuteAction::Toggle)).plan(&sink(70, false));
        assert_eq!(plan.mute, Some(true));

        let plan =
            command(Some(VolumeSpec::Absolute(40)), Some(MuteAction::Toggle)).plan(&sink(70, true));
        assert_eq!(plan.mute, Some(false));
    }

    #[test]
    fn mute_only_leaves_volume_alone() {
        let plan = command(None, Some(MuteAction::On)).plan(&sink(70, false));
        assert_eq!(plan.mute, Some(true));
        assert_eq!(plan.volume, None);
    }

    #[test]
    fn query_only_plans_nothing() {
        let plan = command(None, None).plan(&sink(70, true));
        assert_eq!(plan, Mutation { mute: None, volume: None });
    }
}
