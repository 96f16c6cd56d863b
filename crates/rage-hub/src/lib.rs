#![cfg_attr(not(test), no_std)]

//! Core of the rage sensor hub: periodic shake/yell sensing on a fixed
//! interval, interleaved with non-blocking command polling on a shared
//! serial line.
//!
//! Hardware access goes through trait seams (`embedded-hal` for the bus and
//! pins, `embedded-io` for the serial channel, [`time::Monotonic`] for the
//! uptime clock), so the whole loop runs unmodified under host tests.

// Must come first so the log shims are visible to the rest of the crate.
#[macro_use]
mod fmt;

pub mod audio;
pub mod classify;
pub mod config;
pub mod hub;
pub mod time;
pub mod tone;
pub mod transport;

pub use rage_hub_icd as icd;

pub mod prelude {
    pub use crate::audio::AmplitudeSource;
    pub use crate::config::{HubConfig, ToneSpec};
    pub use crate::hub::{Hub, HubStats};
    pub use crate::time::{Monotonic, Uptime};
    pub use crate::tone::ToneOutput;
    pub use crate::transport::{LineReader, LineSink, LineSource, LineWriter};
    pub use rage_hub_icd::{Command, Event, Line, READY_BANNER};
}
