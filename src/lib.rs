//! Needle gauges and line meters for `embedded-graphics` displays.
//!
//! The crate is split into a small object system and the widgets built on it:
//!
//! - [`obj`]: object tree, generational handles, signal dispatch, redraw tracking
//! - [`widgets`]: plain objects, line meters and gauges
//! - [`draw`]: the [`Painter`] seam and its `embedded-graphics` implementation
//! - [`trigo`]: fixed-point sine/cosine over integer degrees
//! - [`colors`]: RGB565 palette and color mixing
//! - [`styles`]: per-object [`Style`] presets and text styles
//! - [`config`]: capacities and widget defaults
//! - [`log_buffer`]: levelled event log kept by every tree
//! - [`error`]: crate [`Error`] type
//!
//! # Example
//!
//! ```ignore
//! let mut tree = ObjTree::new(Rectangle::new(Point::zero(), Size::new(320, 240)));
//! let gauge = tree.create_gauge(tree.screen(), None)?;
//!
//! let mut g = tree.gauge_mut(gauge)?;
//! g.set_needle_count(2, &[colors::RED, colors::CYAN])?;
//! g.set_value(1, 75)?;
//!
//! tree.refresh(&mut DisplayPainter::new(&mut display))?;
//! ```
//!
//! # no_std Compatibility
//!
//! The library is `no_std` and needs no allocator: objects, needles and log
//! lines live in fixed-capacity `heapless` storage sized in [`config`].

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod draw;
pub mod error;
pub mod log_buffer;
pub mod obj;
pub mod styles;
pub mod trigo;
pub mod widgets;

// Re-export commonly used items
pub use draw::{DisplayPainter, Painter};
pub use error::{Error, Result};
pub use log_buffer::{LogBuffer, LogEntry, LogLevel};
pub use obj::{ObjHandle, ObjTree, Signal, SignalHandler, TypeChain, Validity};
pub use styles::Style;
pub use widgets::{Gauge, GaugeMut, LineMeter, LineMeterMut, Needle};
