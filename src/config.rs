//! Compile-time configuration for the widget core.
//!
//! All storage in the crate is fixed-capacity, so the limits below decide how
//! many objects, needles and log lines fit. Defaults for freshly created
//! widgets live here too.
//!
//! # Compile-Time Validation
//!
//! Each group carries `const` assertions. A misconfigured default (for example
//! a range whose minimum is above its maximum) fails the build instead of
//! producing a gauge that cannot be drawn.

// =============================================================================
// Capacities
// =============================================================================

/// Maximum number of live objects in one tree, including the screen.
pub const MAX_OBJECTS: usize = 32;

/// Maximum number of needles a single gauge can hold.
pub const MAX_NEEDLES: usize = 8;

/// Maximum depth of a widget's type chain (`gauge` -> `line_meter` -> `obj`).
pub const MAX_TYPE_DEPTH: usize = 4;

/// Maximum characters of a rendered scale numeral (`-32768` plus slack).
pub const LABEL_TEXT_LEN: usize = 8;

const _: () = assert!(MAX_OBJECTS > 1);
const _: () = assert!(MAX_OBJECTS <= u16::MAX as usize);
const _: () = assert!(MAX_NEEDLES >= 1);
const _: () = assert!(MAX_NEEDLES <= u8::MAX as usize);
const _: () = assert!(MAX_TYPE_DEPTH >= 3);

// =============================================================================
// Event Log
// =============================================================================

/// Number of log entries kept by an object tree.
pub const LOG_ENTRIES: usize = 16;

/// Maximum characters per log message.
pub const LOG_MSG_LEN: usize = 48;

const _: () = assert!(LOG_ENTRIES > 0);
const _: () = assert!(LOG_MSG_LEN > 1);

// =============================================================================
// Line Meter / Gauge Defaults
// =============================================================================

/// Default lower bound of a meter's range.
pub const DEFAULT_RANGE_MIN: i16 = 0;

/// Default upper bound of a meter's range.
pub const DEFAULT_RANGE_MAX: i16 = 100;

/// Default opening of the scale arc in degrees.
pub const DEFAULT_SCALE_ANGLE: u16 = 220;

/// Largest scale angle accepted; wider requests are clamped.
pub const MAX_SCALE_ANGLE: u16 = 360;

/// Default number of tick lines along the arc.
pub const DEFAULT_LINE_COUNT: u8 = 21;

/// Default number of numerals (and major ticks) along the arc.
pub const DEFAULT_LABEL_COUNT: u8 = 6;

/// Default number of needles on a new gauge.
pub const DEFAULT_NEEDLE_COUNT: u8 = 1;

const _: () = assert!(DEFAULT_RANGE_MIN < DEFAULT_RANGE_MAX);
const _: () = assert!(DEFAULT_SCALE_ANGLE <= MAX_SCALE_ANGLE);
const _: () = assert!(DEFAULT_NEEDLE_COUNT as usize <= MAX_NEEDLES);
const _: () = assert!(DEFAULT_LABEL_COUNT <= DEFAULT_LINE_COUNT);

// =============================================================================
// Default Geometry
// =============================================================================

/// Edge length of a new gauge (square).
pub const DEFAULT_GAUGE_SIZE: u32 = 120;

/// Edge length of a new line meter (square).
pub const DEFAULT_METER_SIZE: u32 = 80;

/// Edge length of a new plain object.
pub const DEFAULT_OBJ_SIZE: u32 = 40;

// =============================================================================
// Tests
// =============================================================================
