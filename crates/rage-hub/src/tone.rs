//! Tone output.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

/// Drives an audible tone and returns when it finishes.
///
/// Frequency and duration are taken as-is; 0 Hz or 0 ms produces no output.
pub trait ToneOutput {
    fn play(&mut self, freq_hz: u32, duration_ms: u32);
}

/// Square-wave tone on a plain GPIO pin, timed by busy delays.
///
/// Runs to completion before returning, like everything else in the loop.
pub struct BitBangTone<P, D> {
    pin: P,
    delay: D,
}

impl<P: OutputPin, D: DelayNs> BitBangTone<P, D> {
    pub fn new(pin: P, delay: D) -> Self {
        Self { pin, delay }
    }

    pub fn free(self) -> (P, D) {
        (self.pin, self.delay)
    }
}

impl<P: OutputPin, D: DelayNs> ToneOutput for BitBangTone<P, D> {
    fn play(&mut self, freq_hz: u32, duration_ms: u32) {
        if freq_hz == 0 || duration_ms == 0 {
            return;
        }
        let half_period_us = 500_000 / freq_hz;
        if half_period_us == 0 {
            return;
        }
        let cycles =
            (duration_ms as u64 * 1_000) / (2 * half_period_us as u64);
        for _ in 0..cycles {
            let _ = self.pin.set_high();
            self.delay.delay_us(half_period_us);
            let _ = self.pin.set_low();
            self.delay.delay_us(half_period_us);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    #[derive(Default)]
    struct TestPin {
        edges: u32,
    }

    impl embedded_hal::digital::ErrorType for TestPin {
        type Error = Infallible;
    }

    impl OutputPin for TestPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.edges += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.edges += 1;
            Ok(())
        }
    }

    #[derive(Default)]
    struct TestDelay {
        total_us: u64,
    }

    impl DelayNs for TestDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_us += ns as u64 / 1_000;
        }
    }

    #[test]
    fn tone_toggles_at_requested_rate() {
        let mut tone = BitBangTone::new(TestPin::default(), TestDelay::default());
        // 1 kHz for 10 ms: ten full cycles, 500 us per half period.
        tone.play(1_000, 10);
        let (pin, delay) = tone.free();
        assert_eq!(pin.edges, 20);
        assert_eq!(delay.total_us, 10_000);
    }

    #[test]
    fn zero_frequency_is_silent() {
        let mut tone = BitBangTone::new(TestPin::default(), TestDelay::default());
        tone.play(0, 500);
        assert_eq!(tone.free().0.edges, 0);
    }

    #[test]
    fn zero_duration_is_silent() {
        let mut tone = BitBangTone::new(TestPin::default(), TestDelay::default());
        tone.play(440, 0);
        assert_eq!(tone.free().0.edges, 0);
    }

    #[test]
    fn ultrasonic_request_rounds_to_nothing() {
        // Above 500 kHz the half period underflows to zero; stay silent
        // rather than spinning with no delay.
        let mut tone = BitBangTone::new(TestPin::default(), TestDelay::default());
        tone.play(600_000, 100);
        assert_eq!(tone.free().0.edges, 0);
    }
}
