//! Newline-delimited line framing over one serial byte channel.
//!
//! The channel has exactly one writer (event emission) and one reader
//! (command polling), so the two directions are split into separate
//! capability traits rather than one transport object: a [`LineSink`] for
//! hub-to-host lines and a [`LineSource`] for host-to-hub lines.

use embedded_io::{Read, ReadReady, Write};
use rage_hub_icd::{Line, LINE_TERMINATOR, MAX_LINE_LEN};

/// Non-blocking supply of complete inbound lines.
pub trait LineSource {
    type Error;

    /// Return the next complete, whitespace-trimmed line, or `None` if no
    /// terminated line has arrived yet. Never blocks; calling repeatedly
    /// with no new bytes keeps returning `None`.
    fn try_read_line(&mut self) -> Result<Option<Line>, Self::Error>;
}

/// Outbound line emission.
pub trait LineSink {
    type Error;

    /// Send `line` followed by the terminator. Blocks only as far as the
    /// underlying channel does when its buffer is full.
    fn send_line(&mut self, line: &str) -> Result<(), Self::Error>;
}

/// [`LineSource`] over any non-blocking-readable byte stream.
///
/// Accumulates into a bounded buffer. Lines longer than
/// [`MAX_LINE_LEN`] and lines that are not valid UTF-8 are discarded whole
/// and counted, never truncated into a shorter bogus line.
pub struct LineReader<R> {
    rx: R,
    buf: heapless::Vec<u8, MAX_LINE_LEN>,
    overrun: bool,
    discarded: u32,
}

impl<R: Read + ReadReady> LineReader<R> {
    pub fn new(rx: R) -> Self {
        Self { rx, buf: heapless::Vec::new(), overrun: false, discarded: 0 }
    }

    /// Lines dropped for being overlong or non-UTF-8.
    pub fn discarded(&self) -> u32 {
        self.discarded
    }

    pub fn free(self) -> R {
        self.rx
    }
}

impl<R: Read + ReadReady> LineSource for LineReader<R> {
    type Error = R::Error;

    fn try_read_line(&mut self) -> Result<Option<Line>, R::Error> {
        while self.rx.read_ready()? {
            let mut byte = [0u8; 1];
            if self.rx.read(&mut byte)? == 0 {
                break;
            }
            let byte = byte[0];

            if byte != LINE_TERMINATOR {
                if self.overrun || self.buf.push(byte).is_err() {
                    self.overrun = true;
                }
                continue;
            }

            let overrun = core::mem::take(&mut self.overrun);
            let line = if overrun {
                None
            } else {
                core::str::from_utf8(&self.buf).ok().map(trimmed_line)
            };
            self.buf.clear();
            match line {
                Some(line) => return Ok(Some(line)),
                None => self.discarded += 1,
            }
        }
        Ok(None)
    }
}

fn trimmed_line(s: &str) -> Line {
    let mut line = Line::new();
    // The trimmed text can never exceed the buffer it came from.
    let _ = line.push_str(s.trim());
    line
}

/// [`LineSink`] over any writable byte stream.
pub struct LineWriter<W> {
    tx: W,
}

impl<W: Write> LineWriter<W> {
    pub fn new(tx: W) -> Self {
        Self { tx }
    }

    pub fn free(self) -> W {
        self.tx
    }
}

impl<W: Write> LineSink for LineWriter<W> {
    type Error = W::Error;

    fn send_line(&mut self, line: &str) -> Result<(), W::Error> {
        self.tx.write_all(line.as_bytes())?;
        self.tx.write_all(&[LINE_TERMINATOR])?;
        self.tx.flush()
    }
}
