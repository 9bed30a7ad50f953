//! # pavolume
//!
//! Query and mutate the volume/mute state of the default PulseAudio sink,
//! list sinks, and optionally stream volume-change notifications.
//!
//! All audio-server work is delegated to the PulseAudio client library via
//! `libpulse-binding`; this crate is intent parsing, percentage/native-scale
//! conversion, and a blocking driver around the library's standard mainloop.

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod output;
pub mod pulse;
pub mod sink;
pub mod volume;

pub use error::{Error, Result};
pub use sink::Sink;
