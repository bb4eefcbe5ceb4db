//! Render modes for the diagram.
//!
//! Each mode owns its animation state; the [`ModeController`] owns the
//! current mode and drives it once per frame through [`Mode::render`].

mod controller;
mod lines;
mod routes;
mod twinkle;

pub use colour_test::ColourTest;
pub use controller::{Action, ModeController};
pub use lines::Lines;
pub use routes::RouteAnimation;
pub use twinkle::Twinkle;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use rand::Rng;
use serde::Serialize;

use crate::diagram::Frame;
use crate::planner::PathFinder;

/// Error returned when parsing an unknown mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode: {0}")]
pub struct UnknownMode(pub String);

/// Which render mode is active, without its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeKind {
    Twinkle,
    Lines,
    ColourTest,
    Routes,
}

impl ModeKind {
    /// Modes in remote-control order.
    pub const ALL: [ModeKind; 4] = [
        ModeKind::Twinkle,
        ModeKind::Lines,
        ModeKind::ColourTest,
        ModeKind::Routes,
    ];

    pub fn index(self) -> usize {
        match self {
            ModeKind::Twinkle => 0,
            ModeKind::Lines => 1,
            ModeKind::ColourTest => 2,
            ModeKind::Routes => 3,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ModeKind::Twinkle => "twinkle",
            ModeKind::Lines => "lines",
            ModeKind::ColourTest => "colour_test",
            ModeKind::Routes => "routes",
        }
    }
}

impl FromStr for ModeKind {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        ModeKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s || k.index().to_string() == s)
            .ok_or(UnknownMode(s))
    }
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A render mode together with its state.
#[derive(Debug, Clone)]
pub enum Mode {
    Twinkle(Twinkle),
    Lines(Lines),
    ColourTest(ColourTest),
    Routes(RouteAnimation),
}

impl Mode {
    /// A mode in its initial state.
    pub fn new(kind: ModeKind) -> Self {
        match kind {
            ModeKind::Twinkle => Mode::Twinkle(Twinkle::default()),
            ModeKind::Lines => Mode::Lines(Lines::default()),
            ModeKind::ColourTest => Mode::ColourTest(ColourTest::default()),
            ModeKind::Routes => Mode::Routes(RouteAnimation::default()),
        }
    }

    pub fn kind(&self) -> ModeKind {
        match self {
            Mode::Twinkle(_) => ModeKind::Twinkle,
            Mode::Lines(_) => ModeKind::Lines,
            Mode::ColourTest(_) => ModeKind::ColourTest,
            Mode::Routes(_) => ModeKind::Routes,
        }
    }

    pub fn submode(&self) -> u8 {
        match self {
            Mode::Twinkle(m) => m.submode(),
            Mode::Lines(m) => m.submode(),
            Mode::ColourTest(m) => m.submode(),
            Mode::Routes(m) => m.submode(),
        }
    }

    /// Switch submode. Returns false, leaving the mode untouched, if the
    /// mode has no such submode.
    pub fn set_submode(&mut self, submode: u8) -> bool {
        match self {
            Mode::Twinkle(m) => m.set_submode(submode),
            Mode::Lines(m) => m.set_submode(submode),
            Mode::ColourTest(m) => m.set_submode(submode),
            Mode::Routes(m) => m.set_submode(submode),
        }
    }

    /// Draw one frame. `now` is the time since the controller started.
    pub fn render<R: Rng>(
        &mut self,
        frame: &mut Frame,
        now: Duration,
        finder: &PathFinder<'_>,
        rng: &mut R,
    ) {
        match self {
            Mode::Twinkle(m) => m.render(frame, now, rng),
            Mode::Lines(m) => m.render(frame),
            Mode::ColourTest(m) => m.render(frame, now, rng),
            Mode::Routes(m) => m.render(frame, now, finder, rng),
        }
    }
}
