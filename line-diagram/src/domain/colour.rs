//! Packed RGB colours and the line palette.

use std::fmt;

/// A 24-bit colour packed as `0xRRGGBB`, the layout the LED driver takes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb(u32);

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const GREY: Rgb = Rgb::new(127, 127, 127);

    pub const STATION_GREEN: Rgb = Rgb::new(0, 127, 0);
    pub const STATION_RED: Rgb = Rgb::new(127, 0, 0);
    pub const STATION_YELLOW: Rgb = Rgb::new(252, 208, 6);

    pub const EXPO: Rgb = Rgb::new(30, 89, 174);
    pub const MILLENNIUM: Rgb = Rgb::new(252, 208, 6);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Wrap an already packed value; bits above the low 24 are dropped.
    pub const fn from_packed(packed: u32) -> Self {
        Rgb(packed & 0x00FF_FFFF)
    }

    pub const fn packed(self) -> u32 {
        self.0
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Gamma-correct each channel for display on the LEDs.
    pub fn gamma(self) -> Self {
        Rgb::new(gamma8(self.r()), gamma8(self.g()), gamma8(self.b()))
    }

    /// Colour for a hue on a 16-bit wheel at full saturation and value.
    ///
    /// `0` and `65535` are both red; a sixth of the wheel is one primary step.
    pub fn from_hue(hue: u16) -> Self {
        // Map 0..=65535 onto 0..1530 (six ramps of 255).
        let h = (u32::from(hue) * 1530 + 32768) / 65536;
        let ramp = |v: u32| v as u8;
        match h {
            0..=254 => Rgb::new(255, ramp(h), 0),
            255..=509 => Rgb::new(ramp(510 - h), 255, 0),
            510..=764 => Rgb::new(0, 255, ramp(h - 510)),
            765..=1019 => Rgb::new(0, ramp(1020 - h), 255),
            1020..=1274 => Rgb::new(ramp(h - 1020), 0, 255),
            1275..=1529 => Rgb::new(255, 0, ramp(1530 - h)),
            _ => Rgb::new(255, 0, 0),
        }
    }

    /// Hex form used by the HTTP layer, e.g. `#1e59ae`.
    pub fn to_hex(self) -> String {
        format!("#{:06x}", self.0)
    }
}

/// Gamma 2.6 curve matching the LED driver's correction table.
fn gamma8(x: u8) -> u8 {
    let normalised = f64::from(x) / 255.0;
    (normalised.powf(2.6) * 255.0 + 0.5) as u8
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgb({})", self.to_hex())
    }
}
