use embassy_time::Instant;

/// Source of monotonic time for the scheduler loop and the audio window.
///
/// Production code uses [`Uptime`]; tests script the clock instead of
/// sleeping through real windows.
pub trait Monotonic {
    fn now(&self) -> Instant;
}

/// Reads the system uptime clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uptime;

impl Monotonic for Uptime {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
