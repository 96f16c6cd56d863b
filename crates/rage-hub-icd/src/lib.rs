#![cfg_attr(not(test), no_std)]

//! Interface control document for the rage hub serial link.
//!
//! Everything on the wire is an ASCII line terminated by `\n`. The hub emits
//! [`Event`] notifications and the startup banner; the host sends [`Command`]
//! lines. Both sides share this crate so the vocabulary cannot drift.

/// Longest inbound line the hub will buffer. Anything longer is dropped whole.
pub const MAX_LINE_LEN: usize = 64;

/// One whitespace-trimmed inbound line.
pub type Line = heapless::String<MAX_LINE_LEN>;

/// Byte that terminates every message in both directions.
pub const LINE_TERMINATOR: u8 = b'\n';

/// Startup banner, sent exactly once after hub initialization.
///
/// The wording is a compatibility contract: the host pipeline matches this
/// string verbatim to detect that the hub has come up.
pub const READY_BANNER: &str = "ARDUINO_READY";

/// A discrete hub-to-host notification. At most one per type per sensing
/// cycle; the two are independent and may both fire in the same cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    Shake,
    Yell,
}

impl Event {
    /// Wire text for this event, without the terminator.
    pub fn as_line(&self) -> &'static str {
        match self {
            Event::Shake => "SHAKE",
            Event::Yell => "YELL",
        }
    }
}

/// A parsed host-to-hub directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Play the hub's default tone.
    Beep,
    /// Play `freq_hz` for `duration_ms`. Values are passed to the tone
    /// output as-is, with no clamping.
    Tone { freq_hz: u32, duration_ms: u32 },
}

impl Command {
    /// Parse one inbound line.
    ///
    /// Grammar: exact `BEEP`, or `TONE:<int>:<int>`. Field parsing mirrors
    /// the original firmware's lenient integer conversion: a missing second
    /// colon leaves the duration at 0, and a non-numeric field parses to 0
    /// rather than rejecting the command. Anything else is not a command.
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        if line == "BEEP" {
            return Some(Command::Beep);
        }
        let fields = line.strip_prefix("TONE:")?;
        let (freq_hz, duration_ms) = match fields.split_once(':') {
            Some((freq, dur)) => (parse_field(freq), parse_field(dur)),
            None => (parse_field(fields), 0),
        };
        Some(Command::Tone { freq_hz, duration_ms })
    }
}

fn parse_field(field: &str) -> u32 {
    field.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_beep() {
        assert_eq!(Command::parse("BEEP"), Some(Command::Beep));
    }

    #[test]
    fn beep_is_case_sensitive() {
        assert_eq!(Command::parse("beep"), None);
        assert_eq!(Command::parse("Beep"), None);
    }

    #[test]
    fn parses_full_tone() {
        assert_eq!(
            Command::parse("TONE:440:500"),
            Some(Command::Tone { freq_hz: 440, duration_ms: 500 })
        );
    }

    #[test]
    fn tone_missing_second_colon_defaults_duration() {
        assert_eq!(
            Command::parse("TONE:1000"),
            Some(Command::Tone { freq_hz: 1000, duration_ms: 0 })
        );
    }

    #[test]
    fn tone_non_numeric_fields_parse_to_zero() {
        assert_eq!(
            Command::parse("TONE:loud:long"),
            Some(Command::Tone { freq_hz: 0, duration_ms: 0 })
        );
        assert_eq!(
            Command::parse("TONE:880:"),
            Some(Command::Tone { freq_hz: 880, duration_ms: 0 })
        );
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(Command::parse("  BEEP \r"), Some(Command::Beep));
        assert_eq!(
            Command::parse(" TONE:2000:100 "),
            Some(Command::Tone { freq_hz: 2000, duration_ms: 100 })
        );
    }

    #[test]
    fn garbage_is_not_a_command() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("TONEDEAF"), None);
        assert_eq!(Command::parse("SHAKE"), None);
        assert_eq!(Command::parse("BEEP BEEP"), None);
    }

    #[test]
    fn event_wire_text() {
        assert_eq!(Event::Shake.as_line(), "SHAKE");
        assert_eq!(Event::Yell.as_line(), "YELL");
    }
}
