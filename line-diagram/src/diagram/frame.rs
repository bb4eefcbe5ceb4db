//! LED strip frame buffer.

use tracing::warn;

use super::order::pixel_index;
use crate::domain::{Rgb, STATION_COUNT, Station};

/// One snapshot of every light on the strip, in data order.
///
/// The strip may carry more pixels than there are stations (decorative
/// lights past the last station), never fewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pixels: Vec<Rgb>,
}

impl Frame {
    /// Create a dark frame. `pixel_count` is raised to the station count if
    /// smaller.
    pub fn new(pixel_count: usize) -> Self {
        Self {
            pixels: vec![Rgb::BLACK; pixel_count.max(STATION_COUNT)],
        }
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Turn every light off.
    pub fn clear(&mut self) {
        self.pixels.fill(Rgb::BLACK);
    }

    /// Set one pixel, optionally gamma-correcting the colour first.
    ///
    /// Writes past the end of the strip are dropped.
    pub fn set(&mut self, pixel: usize, colour: Rgb, gamma: bool) {
        let colour = if gamma { colour.gamma() } else { colour };
        match self.pixels.get_mut(pixel) {
            Some(slot) => *slot = colour,
            None => warn!(pixel, len = self.pixels.len(), "pixel out of range"),
        }
    }

    /// Light a station, gamma-corrected.
    pub fn set_station(&mut self, station: Station, colour: Rgb) {
        self.set(pixel_index(station), colour, true);
    }

    pub fn get(&self, pixel: usize) -> Option<Rgb> {
        self.pixels.get(pixel).copied()
    }

    pub fn station(&self, station: Station) -> Rgb {
        self.pixels[pixel_index(station)]
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new(STATION_COUNT)
    }
}
