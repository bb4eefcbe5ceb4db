//! The physical line diagram: one light per station on an LED strip.

mod frame;
mod order;

pub use frame::Frame;
pub use order::{X_ORDER, pixel_index, x_position};
