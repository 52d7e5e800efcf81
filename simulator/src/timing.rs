//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration`, which the `no_std` library
//! cannot, so they live here rather than in `dialkit::config`.

use std::time::Duration;

/// Target frame time (~50 FPS). The main loop sleeps if frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Signal time advanced per frame.
pub const T_STEP: f32 = 0.05;

/// Value change of the lead gauge per Up/Down key press.
pub const NUDGE_STEP: i16 = 5;
