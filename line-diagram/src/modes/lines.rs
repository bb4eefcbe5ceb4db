//! Static test patterns.

use crate::diagram::Frame;
use crate::domain::{Line, Rgb, Station};

/// Mode 1 state.
///
/// Submode 0 drives every pixel on the strip grey without gamma correction.
/// Submode 1 paints each station in its line colour.
#[derive(Debug, Clone, Default)]
pub struct Lines {
    submode: u8,
}

impl Lines {
    pub const SUBMODES: u8 = 2;

    pub fn submode(&self) -> u8 {
        self.submode
    }

    pub fn set_submode(&mut self, submode: u8) -> bool {
        if submode >= Self::SUBMODES {
            return false;
        }
        self.submode = submode;
        true
    }

    pub fn render(&self, frame: &mut Frame) {
        frame.clear();
        match self.submode {
            0 => {
                for pixel in 0..frame.len() {
                    frame.set(pixel, Rgb::GREY, false);
                }
            }
            _ => {
                for station in Station::all() {
                    frame.set_station(station, Line::of(station).colour());
                }
            }
        }
    }
}
