//! Infrared remote decoding.
//!
//! The panel is driven by a 21-key NEC remote. Each press arrives as a
//! 32-bit code; holding a key sends the repeat code instead.

use std::fmt;

use crate::modes::Action;

/// Error returned for a code that no key on the remote sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown remote code {0:#08X}")]
pub struct UnknownKeyCode(pub u32);

/// A key on the remote, or the held-key repeat signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteKey {
    Power,
    FuncStop,
    VolUp,
    Rewind,
    Pause,
    FastForward,
    Down,
    VolDown,
    Up,
    Eq,
    StRept,
    Digit(u8),
    Repeat,
}

const CODES: [(u32, RemoteKey); 22] = [
    (0xFFA25D, RemoteKey::Power),
    (0xFFE21D, RemoteKey::FuncStop),
    (0xFF629D, RemoteKey::VolUp),
    (0xFF22DD, RemoteKey::Rewind),
    (0xFF02FD, RemoteKey::Pause),
    (0xFFC23D, RemoteKey::FastForward),
    (0xFFE01F, RemoteKey::Down),
    (0xFFA857, RemoteKey::VolDown),
    (0xFF906F, RemoteKey::Up),
    (0xFF9867, RemoteKey::Eq),
    (0xFFB04F, RemoteKey::StRept),
    (0xFF6897, RemoteKey::Digit(0)),
    (0xFF30CF, RemoteKey::Digit(1)),
    (0xFF18E7, RemoteKey::Digit(2)),
    (0xFF7A85, RemoteKey::Digit(3)),
    (0xFF10EF, RemoteKey::Digit(4)),
    (0xFF38C7, RemoteKey::Digit(5)),
    (0xFF5AA5, RemoteKey::Digit(6)),
    (0xFF42BD, RemoteKey::Digit(7)),
    (0xFF4AB5, RemoteKey::Digit(8)),
    (0xFF52AD, RemoteKey::Digit(9)),
    (0xFFFFFFFF, RemoteKey::Repeat),
];

impl RemoteKey {
    /// Decode a received code.
    pub fn decode(code: u32) -> Result<Self, UnknownKeyCode> {
        CODES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, key)| *key)
            .ok_or(UnknownKeyCode(code))
    }

    /// The code this key sends.
    pub fn code(self) -> u32 {
        CODES
            .iter()
            .find(|(_, key)| *key == self)
            .map(|(c, _)| *c)
            .unwrap_or(0)
    }

    /// What pressing this key does to the panel.
    pub fn action(self) -> Action {
        match self {
            RemoteKey::Power => Action::TogglePower,
            RemoteKey::Up => Action::NextMode,
            RemoteKey::Down => Action::PreviousMode,
            RemoteKey::Digit(n) => Action::Submode(n),
            RemoteKey::Repeat => Action::Repeat,
            _ => Action::Ignore,
        }
    }

    /// Label printed on the key.
    pub fn label(self) -> &'static str {
        match self {
            RemoteKey::Power => "POWER",
            RemoteKey::FuncStop => "FUNC/STOP",
            RemoteKey::VolUp => "VOL+",
            RemoteKey::Rewind => "REWIND",
            RemoteKey::Pause => "PAUSE",
            RemoteKey::FastForward => "FFWD",
            RemoteKey::Down => "DOWN",
            RemoteKey::VolDown => "VOL-",
            RemoteKey::Up => "UP",
            RemoteKey::Eq => "EQ",
            RemoteKey::StRept => "ST/REPT",
            RemoteKey::Digit(n) => DIGIT_LABELS.get(usize::from(n)).copied().unwrap_or("?"),
            RemoteKey::Repeat => "REPEAT",
        }
    }
}

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

impl fmt::Display for RemoteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
