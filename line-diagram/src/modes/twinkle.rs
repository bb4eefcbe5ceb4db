//! Random stations fading in and out red.

use std::time::Duration;

use rand::Rng;

use crate::diagram::Frame;
use crate::domain::{Rgb, STATION_COUNT, Station};

/// Length of one fade-in/fade-out cycle.
pub const CYCLE: Duration = Duration::from_millis(4000);

const STATIC_RED: Rgb = Rgb::new(130, 0, 0);

/// Mode 0 state.
///
/// Submode 0 picks a fresh random set of stations every [`CYCLE`] and fades
/// them red and back. Submode 1 lights every other station a steady red.
#[derive(Debug, Clone, Default)]
pub struct Twinkle {
    submode: u8,
    cycle_start: Option<Duration>,
    lit: u64,
}

impl Twinkle {
    pub const SUBMODES: u8 = 2;

    pub fn submode(&self) -> u8 {
        self.submode
    }

    pub fn set_submode(&mut self, submode: u8) -> bool {
        if submode >= Self::SUBMODES {
            return false;
        }
        self.submode = submode;
        self.cycle_start = None;
        true
    }

    pub fn render<R: Rng>(&mut self, frame: &mut Frame, now: Duration, rng: &mut R) {
        frame.clear();
        match self.submode {
            0 => self.render_fade(frame, now, rng),
            _ => render_static(frame),
        }
    }

    fn render_fade<R: Rng>(&mut self, frame: &mut Frame, now: Duration, rng: &mut R) {
        let elapsed = match self.cycle_start {
            Some(start) if now.saturating_sub(start) < CYCLE => now.saturating_sub(start),
            _ => {
                self.cycle_start = Some(now);
                self.lit = rng.r#gen();
                return;
            }
        };

        let red = fade_level(elapsed);
        let colour = Rgb::new(red, 0, 0);
        // The mask only covers the first 64 lights.
        for station in Station::all().take(STATION_COUNT.min(64)) {
            if (self.lit >> station.index()) & 1 == 1 {
                frame.set_station(station, colour);
            }
        }
    }

    /// Stations picked for the current cycle.
    pub fn lit(&self) -> u64 {
        self.lit
    }
}

/// Triangle ramp 0 → 255 → 0 across one cycle.
fn fade_level(elapsed: Duration) -> u8 {
    let half = CYCLE.as_millis() / 2;
    let t = elapsed.as_millis().min(CYCLE.as_millis());
    let level = if t > half {
        255 - (t - half) * 255 / half
    } else {
        t * 255 / half
    };
    level as u8
}

fn render_static(frame: &mut Frame) {
    for station in Station::all().step_by(2) {
        frame.set_station(station, STATIC_RED);
    }
}
