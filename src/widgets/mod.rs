//! Widget kinds and their signal handlers.
//!
//! - [`base`]: plain objects (containers, the screen)
//! - [`line_meter`]: arc of ticks over a value range
//! - [`gauge`]: line meter with needles, numerals and a hub
//!
//! # Architecture
//!
//! Each kind stores its data in one [`Ext`](crate::obj::Ext) variant and
//! registers one zero-sized [`SignalHandler`](crate::obj::SignalHandler).
//! Handlers chain explicitly, most derived first:
//!
//! ```text
//! GaugeSignal -> LineMeterSignal -> BaseSignal
//! ```
//!
//! A gauge holds its line meter by value, so every line-meter accessor works
//! on a gauge handle too.

pub mod base;
pub mod gauge;
pub mod line_meter;

pub use base::BaseSignal;
pub use gauge::{Gauge, GaugeMut, GaugeSignal, Needle};
pub use line_meter::{LineMeter, LineMeterMut, LineMeterSignal};
