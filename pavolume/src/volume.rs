//! Volume scale conversion
//!
//! PulseAudio volumes are linear fixed-point with 100% = `Volume::NORMAL`
//! (0x10000). The user-facing scale is 0-100 percent. Conversion rounds to
//! nearest in both directions.
//!
//! Sinks may legitimately sit above 100% (software boost); queries report
//! the real percentage. Clamping applies only to values about to be written.

use libpulse_binding::volume::Volume;

/// Convert a native volume to the 0-100 percent scale.
pub fn normalize(volume: Volume) -> u32 {
    ((volume.0 as f64) * 100.0 / (Volume::NORMAL.0 as f64)).round() as u32
}

/// Convert a 0-100 percentage to the native scale.
pub fn denormalize(percent: u32) -> Volume {
    Volume(((percent as f64) * (Volume::NORMAL.0 as f64) / 100.0).round() as u32)
}

/// Clamp a percentage target to [0, 100]. Applied after delta arithmetic,
/// so the input may be negative or above 100.
pub fn constrain(percent: i64) -> u32 {
    percent.clamp(0, 100) as u32
}
