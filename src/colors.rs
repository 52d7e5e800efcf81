//! Color constants and blending for widget rendering.
//!
//! # Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! It is native to the small SPI panels this crate targets and needs no
//! conversion when written to a frame buffer.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::IntoStorage;

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black (0, 0, 0).
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31).
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red (31, 0, 0). Default needle color.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green (0, 63, 0).
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure blue (0, 0, 31).
pub const BLUE: Rgb565 = Rgb565::BLUE;

/// Pure yellow (31, 63, 0).
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Cyan (0, 63, 31).
pub const CYAN: Rgb565 = Rgb565::CYAN;

// =============================================================================
// Custom Colors
// =============================================================================

/// Orange, used as the hot end of the default tick gradient.
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);

/// Dark gray for inactive tick lines.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Light gray for dial faces.
pub const SILVER: Rgb565 = Rgb565::new(24, 48, 24);

/// Dark slate for dial faces on dark screens.
pub const SLATE: Rgb565 = Rgb565::new(4, 9, 6);

/// Needle color used when a gauge is given no explicit colors.
pub const DEFAULT_NEEDLE_COLOR: Rgb565 = RED;

// =============================================================================
// Blending
// =============================================================================

/// Mix two colors: `ratio` 255 gives `c1`, 0 gives `c2`.
///
/// Channel-wise integer blend, the same weighting the tick gradient uses.
pub fn mix(
    c1: Rgb565,
    c2: Rgb565,
    ratio: u8,
) -> Rgb565 {
    let (r1, g1, b1) = channels(c1);
    let (r2, g2, b2) = channels(c2);
    let mix = u16::from(ratio);
    let inv = 255 - mix;

    let blend = |a: u16, b: u16| -> u8 { ((a * mix + b * inv) / 255) as u8 };

    Rgb565::new(blend(r1, r2), blend(g1, g2), blend(b1, b2))
}

#[inline]
fn channels(color: Rgb565) -> (u16, u16, u16) {
    let raw = color.into_storage();
    ((raw >> 11) & 0x1F, (raw >> 5) & 0x3F, raw & 0x1F)
}

// =============================================================================
// Tests
// =============================================================================
