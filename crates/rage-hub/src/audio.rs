//! Audio envelope sampling.
//!
//! `embedded-hal` 1.0 has no ADC trait, so amplitude acquisition is a small
//! seam of our own; on hardware it wraps whatever one-shot ADC read the HAL
//! provides for the microphone pin.

use embassy_time::Duration;

use crate::time::Monotonic;

/// One-shot amplitude reads from the microphone line, in ADC counts.
pub trait AmplitudeSource {
    type Error;

    fn read(&mut self) -> Result<u16, Self::Error>;
}

/// Busy-poll `source` for `window` and return the peak-to-peak amplitude.
///
/// This blocks for the whole window; nothing else runs meanwhile. That is
/// the one deliberate scheduling compromise in the hub, and the window must
/// stay short relative to the sensing interval.
///
/// The running extrema start outside the representable sample range, so the
/// first sample always updates both bounds. Failed reads are skipped; a
/// window with no usable samples reports 0.
pub fn measure_peak_to_peak<A, M>(
    source: &mut A,
    clock: &M,
    window: Duration,
) -> u16
where
    A: AmplitudeSource,
    M: Monotonic,
{
    let mut min: i32 = i32::MAX;
    let mut max: i32 = i32::MIN;

    let deadline = clock.now() + window;
    while clock.now() < deadline {
        if let Ok(sample) = source.read() {
            let sample = sample as i32;
            min = min.min(sample);
            max = max.max(sample);
        }
    }

    if max < min {
        0
    } else {
        (max - min) as u16
    }
}
