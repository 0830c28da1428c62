//! Packed color codec shared by the protocol and the strip driver.
//!
//! Colors cross the driver boundary as 24-bit `0xRRGGBB` integers.
//! Channels are masked to 8 bits when packing, so out-of-range values
//! wrap instead of clamping.

use smart_leds::RGB8;

pub type Rgb = RGB8;

/// All emitters off.
pub const COLOR_OFF: u32 = 0x00_0000;
/// Full red channel.
pub const COLOR_RED: u32 = 0xFF_0000;
/// Full green channel.
pub const COLOR_GREEN: u32 = 0x00_FF00;
/// Full blue channel.
pub const COLOR_BLUE: u32 = 0x00_00FF;
/// All channels full.
pub const COLOR_WHITE: u32 = 0xFF_FFFF;

const COLOUR_NAME_BLUE: &str = "B";
const COLOUR_NAME_GREEN: &str = "G";
const COLOUR_NAME_RED: &str = "R";
const COLOUR_NAME_NEAR_INFRARED: &str = "N";

const COLOUR_ID_BLUE: u8 = 1;
const COLOUR_ID_GREEN: u8 = 2;
const COLOUR_ID_RED: u8 = 3;
const COLOUR_ID_NEAR_INFRARED: u8 = 4;

/// Emitter channels a pulse can address.
///
/// Pods currently carry RGB emitters; near-infrared is reserved for
/// strips with a fourth emitter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PulseColour {
    Blue = COLOUR_ID_BLUE,
    Green = COLOUR_ID_GREEN,
    Red = COLOUR_ID_RED,
    NearInfrared = COLOUR_ID_NEAR_INFRARED,
}

impl PulseColour {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            COLOUR_ID_BLUE => Self::Blue,
            COLOUR_ID_GREEN => Self::Green,
            COLOUR_ID_RED => Self::Red,
            COLOUR_ID_NEAR_INFRARED => Self::NearInfrared,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blue => COLOUR_NAME_BLUE,
            Self::Green => COLOUR_NAME_GREEN,
            Self::Red => COLOUR_NAME_RED,
            Self::NearInfrared => COLOUR_NAME_NEAR_INFRARED,
        }
    }
}

/// Pack three channel values into a `0xRRGGBB` integer.
///
/// Each channel is masked to its low 8 bits before packing.
#[inline]
pub const fn pack_rgb(r: u32, g: u32, b: u32) -> u32 {
    ((r & 0xFF) << 16) | ((g & 0xFF) << 8) | (b & 0xFF)
}

/// Extract the red channel of a packed color.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn unpack_red(color: u32) -> u8 {
    ((color >> 16) & 0xFF) as u8
}

/// Extract the green channel of a packed color.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn unpack_green(color: u32) -> u8 {
    ((color >> 8) & 0xFF) as u8
}

/// Extract the blue channel of a packed color.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn unpack_blue(color: u32) -> u8 {
    (color & 0xFF) as u8
}

/// Scale every channel of a packed color by a percentage.
///
/// Integer math. Percentages above 100 can push a channel past 255,
/// which wraps through the pack mask.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale_channels(color: u32, percent: u8) -> u32 {
    let scale = percent as u32;
    pack_rgb(
        unpack_red(color) as u32 * scale / 100,
        unpack_green(color) as u32 * scale / 100,
        unpack_blue(color) as u32 * scale / 100,
    )
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: unpack_red(color),
        g: unpack_green(color),
        b: unpack_blue(color),
    }
}

/// Pack an RGB color into a u32 value (0xRRGGBB format)
#[allow(clippy::cast_lossless)]
pub const fn u32_from_rgb(color: Rgb) -> u32 {
    pack_rgb(color.r as u32, color.g as u32, color.b as u32)
}
