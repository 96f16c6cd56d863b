use embassy_time::Duration;

/// A frequency/duration pair for the tone output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToneSpec {
    pub freq_hz: u32,
    pub duration_ms: u32,
}

/// Hub-wide configuration, constructed once at startup and passed by
/// reference. Nothing mutates it at runtime.
///
/// The default threshold values are tuning constants carried over from the
/// deployed hub, not derived quantities; adjust them per enclosure and
/// microphone placement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HubConfig {
    /// Accelerometer magnitude (raw LSB, Euclidean norm of all three axes)
    /// above which a cycle counts as a shake. At the default ±2 g range,
    /// 40000 LSB is roughly 2.4 g.
    pub shake_threshold: f32,
    /// Peak-to-peak microphone amplitude (ADC counts) above which a cycle
    /// counts as a yell.
    pub yell_threshold: u16,
    /// How long each audio envelope window busy-polls the microphone. The
    /// loop is blocked for this entire window, so it also bounds worst-case
    /// command latency together with `sense_interval`.
    pub audio_window: Duration,
    /// Spacing between sensing cycles.
    pub sense_interval: Duration,
    /// Tone played for a bare `BEEP` command.
    pub default_tone: ToneSpec,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            shake_threshold: 40_000.0,
            yell_threshold: 150,
            audio_window: Duration::from_millis(50),
            sense_interval: Duration::from_millis(200),
            default_tone: ToneSpec { freq_hz: 1_000, duration_ms: 200 },
        }
    }
}
