//! Fixed-point trigonometry over integer degrees.
//!
//! Sine values are scaled to [`SIN_MAX`] so that `sin(90) == 32767`. A
//! quarter-wave table covers 0..=90 degrees; the other quadrants are folded
//! onto it. No floating point is involved, which keeps needle geometry
//! bit-exact across host tests and the target.
//!
//! Angles follow screen coordinates: 0 degrees points right and angles grow
//! clockwise because y grows downward, so 90 degrees points straight down.

use embedded_graphics::prelude::Point;
use embedded_graphics::primitives::Rectangle;

/// Value of `sin(90)` in the fixed-point domain.
pub const SIN_MAX: i32 = 32767;

/// Bit shift matching [`SIN_MAX`] (`1 << SHIFT` is `SIN_MAX + 1`).
pub const SHIFT: u32 = 15;

/// `round(sin(deg) * 32767)` for deg in 0..=90.
const SIN_TABLE: [i16; 91] = [
    0, 572, 1144, 1715, 2286, 2856, 3425, 3993,
    4560, 5126, 5690, 6252, 6813, 7371, 7927, 8481,
    9032, 9580, 10126, 10668, 11207, 11743, 12275, 12803,
    13328, 13848, 14364, 14876, 15383, 15886, 16383, 16876,
    17364, 17846, 18323, 18794, 19260, 19720, 20173, 20621,
    21062, 21497, 21925, 22347, 22762, 23170, 23571, 23964,
    24351, 24730, 25101, 25465, 25821, 26169, 26509, 26841,
    27165, 27481, 27788, 28087, 28377, 28659, 28932, 29196,
    29451, 29697, 29934, 30162, 30381, 30591, 30791, 30982,
    31163, 31335, 31498, 31650, 31794, 31927, 32051, 32165,
    32269, 32364, 32448, 32523, 32587, 32642, 32687, 32722,
    32747, 32762, 32767,
];

/// Fixed-point sine of `angle` degrees. Any angle is accepted.
pub fn sin(angle: i32) -> i16 {
    let angle = angle.rem_euclid(360) as usize;

    match angle {
        0..=90 => SIN_TABLE[angle],
        91..=180 => SIN_TABLE[180 - angle],
        181..=270 => -SIN_TABLE[angle - 180],
        _ => -SIN_TABLE[360 - angle],
    }
}

/// Fixed-point cosine of `angle` degrees.
#[inline]
pub fn cos(angle: i32) -> i16 { sin(angle + 90) }

/// Point at `radius` pixels from `center` in direction `angle`.
///
/// Division truncates toward zero so opposite directions stay symmetric.
/// The offset never exceeds `radius`; coordinates saturate at the `i32` limits.
pub fn polar(
    center: Point,
    radius: i32,
    angle: i32,
) -> Point {
    let offset = |unit: i16| {
        let d = i64::from(unit) * i64::from(radius) / i64::from(SIN_MAX);
        i32::try_from(d).unwrap_or(if d < 0 { i32::MIN } else { i32::MAX })
    };
    Point::new(
        center.x.saturating_add(offset(cos(angle))),
        center.y.saturating_add(offset(sin(angle))),
    )
}

/// Radius of the arc inscribed in `area`: half its width.
#[inline]
pub fn inscribed_radius(area: Rectangle) -> i32 {
    i32::try_from(area.size.width / 2).unwrap_or(i32::MAX)
}

// =============================================================================
// Tests
// =============================================================================
