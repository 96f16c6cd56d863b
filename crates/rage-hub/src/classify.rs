//! Threshold classification of one sensing cycle.

use heapless::Vec;
use mpu_6050::AccelSample;
use rage_hub_icd::Event;

use crate::config::HubConfig;

/// Classify one cycle's readings against the configured thresholds.
///
/// Pure. Shake fires iff the accelerometer magnitude strictly exceeds
/// `shake_threshold`; yell fires iff the peak-to-peak amplitude strictly
/// exceeds `yell_threshold`. The checks are independent and may both fire.
pub fn classify(
    sample: &AccelSample,
    peak_to_peak: u16,
    config: &HubConfig,
) -> Vec<Event, 2> {
    let mut events = Vec::new();
    if sample.magnitude() > config.shake_threshold {
        let _ = events.push(Event::Shake);
    }
    if peak_to_peak > config.yell_threshold {
        let _ = events.push(Event::Yell);
    }
    events
}
