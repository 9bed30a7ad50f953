//! Plain-data sink snapshot
//!
//! Captured from introspection callbacks so the rest of the program never
//! holds server handles or callback-borrowed references.

use libpulse_binding::context::introspect::SinkInfo;

use crate::volume;

/// State of one sink at query time
#[derive(Debug, Clone)]
pub struct Sink {
    /// Server-assigned sink index
    pub index: u32,
    /// Sink name (the stable identifier used for lookups)
    pub name: String,
    /// Human-readable description
    pub description: Option<String>,
    /// Channel count, needed when writing a new volume
    pub channels: u8,
    /// Channel-average volume on the 0-100 scale (may exceed 100)
    pub volume_percent: u32,
    /// Mute state
    pub muted: bool,
    /// Whether this is the server's default sink
    pub is_default: bool,
}

impl Sink {
    /// Snapshot a sink from the introspection callback payload.
    pub fn from_info(info: &SinkInfo<'_>, is_default: bool) -> Self {
        Self {
            index: info.index,
            name: info
                .name
                .as_ref()
                .map(|n| n.to_string())
                .unwrap_or_default(),
            description: info.description.as_ref().map(|d| d.to_string()),
            channels: info.volume.len(),
            volume_percent: volume::normalize(info.volume.avg()),
            muted: info.mute,
            is_default,
        }
    }
}
