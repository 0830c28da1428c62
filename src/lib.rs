#![no_std]

pub mod color;
pub mod farm;
pub mod pods;
pub mod protocol;
pub mod timebase;

pub use color::{
    COLOR_BLUE, COLOR_GREEN, COLOR_OFF, COLOR_RED, COLOR_WHITE, PulseColour, Rgb, pack_rgb,
    rgb_from_u32, scale_channels, u32_from_rgb, unpack_blue, unpack_green, unpack_red,
};
pub use farm::{Farm, FarmConfig, FarmError};
pub use pods::{EmitterRange, pod_range, pod_to_emitter_index};
pub use protocol::{CapacityError, LightProtocol, Step};
pub use timebase::{TimeBase, minutes_to_duration, to_minutes};

pub use embassy_time::Duration;

/// Abstract emitter strip driver trait
///
/// Implement this trait to support different strip hardware.
/// Writes are buffered: nothing reaches the hardware until [`show`].
///
/// [`show`]: StripDriver::show
pub trait StripDriver {
    /// Write a buffered pixel as a packed `0xRRGGBB` color
    fn set_pixel(&mut self, index: usize, color: u32);

    /// Flush the buffer to the hardware
    fn show(&mut self);

    /// Zero the buffer without flushing
    fn clear(&mut self);
}
