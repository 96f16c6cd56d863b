//! The cooperative scheduler loop tying the hub together.

use embassy_time::Instant;
use embedded_hal::i2c;
use mpu_6050::{AccelSample, Mpu6050};
use rage_hub_icd::{Command, READY_BANNER};

use crate::audio::{measure_peak_to_peak, AmplitudeSource};
use crate::classify::classify;
use crate::config::HubConfig;
use crate::time::Monotonic;
use crate::tone::ToneOutput;
use crate::transport::{LineSink, LineSource};

/// Drop counters for everything the hub swallows silently.
///
/// Nothing here changes protocol behavior; the wire stays exactly as quiet
/// as the original hub. The counters exist so a build with logging enabled
/// (or a debugger) can see what a silent hub is discarding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HubStats {
    /// Accelerometer bus transactions that failed; the previous sample was
    /// reused for that cycle.
    pub accel_bus_errors: u32,
    /// Non-empty inbound lines that matched no command.
    pub unrecognized_lines: u32,
    /// Serial read faults while polling for a line.
    pub link_read_faults: u32,
    /// Serial write faults while emitting a line.
    pub link_write_faults: u32,
}

/// The hub: one accelerometer, one microphone line, one serial channel,
/// one tone output, one single-threaded loop.
///
/// Within a pass, sensing (when due) always runs before inbound command
/// handling. The audio window inside a sensing cycle is the only blocking
/// stretch; command latency is bounded by it plus the same-cycle work.
pub struct Hub<'a, I2C, A, RX, TX, T, M> {
    config: &'a HubConfig,
    accel: Mpu6050<I2C>,
    mic: A,
    rx: RX,
    tx: TX,
    tone: T,
    clock: M,
    last_cycle: Instant,
    last_sample: AccelSample,
    stats: HubStats,
}

impl<'a, I2C, A, RX, TX, T, M> Hub<'a, I2C, A, RX, TX, T, M>
where
    I2C: i2c::I2c,
    A: AmplitudeSource,
    RX: LineSource,
    TX: LineSink,
    T: ToneOutput,
    M: Monotonic,
{
    pub fn new(
        config: &'a HubConfig,
        accel: Mpu6050<I2C>,
        mic: A,
        rx: RX,
        tx: TX,
        tone: T,
        clock: M,
    ) -> Self {
        let last_cycle = clock.now();
        Self {
            config,
            accel,
            mic,
            rx,
            tx,
            tone,
            clock,
            last_cycle,
            last_sample: AccelSample::default(),
            stats: HubStats::default(),
        }
    }

    pub fn stats(&self) -> &HubStats {
        &self.stats
    }

    /// Emit the startup banner the host watches for.
    pub fn announce_ready(&mut self) {
        info!("hub initialized, announcing readiness");
        if self.tx.send_line(READY_BANNER).is_err() {
            self.stats.link_write_faults += 1;
        }
    }

    /// Announce readiness, then run the loop until power-off.
    pub fn run(&mut self) -> ! {
        self.announce_ready();
        loop {
            self.poll();
        }
    }

    /// One scheduler pass: sense if the interval has elapsed, then poll for
    /// one inbound command.
    pub fn poll(&mut self) {
        let now = self.clock.now();
        if now - self.last_cycle >= self.config.sense_interval {
            self.last_cycle = now;
            self.sense();
        }
        self.poll_command();
    }

    fn sense(&mut self) {
        let sample = match self.accel.read_accel() {
            Ok(sample) => {
                self.last_sample = sample;
                sample
            }
            Err(_) => {
                // No error channel exists on the wire; carry the previous
                // sample through this cycle.
                self.stats.accel_bus_errors += 1;
                warn!("accel bus transaction failed, reusing last sample");
                self.last_sample
            }
        };

        let peak_to_peak = measure_peak_to_peak(
            &mut self.mic,
            &self.clock,
            self.config.audio_window,
        );

        for event in classify(&sample, peak_to_peak, self.config) {
            if self.tx.send_line(event.as_line()).is_err() {
                self.stats.link_write_faults += 1;
            }
        }
    }

    fn poll_command(&mut self) {
        let line = match self.rx.try_read_line() {
            Ok(Some(line)) => line,
            Ok(None) => return,
            Err(_) => {
                self.stats.link_read_faults += 1;
                return;
            }
        };

        match Command::parse(&line) {
            Some(Command::Beep) => {
                let tone = self.config.default_tone;
                self.tone.play(tone.freq_hz, tone.duration_ms);
            }
            Some(Command::Tone { freq_hz, duration_ms }) => {
                self.tone.play(freq_hz, duration_ms);
            }
            None => {
                if !line.is_empty() {
                    self.stats.unrecognized_lines += 1;
                    debug!("ignoring unrecognized line");
                }
            }
        }
    }
}
