//! Line meter: an arc of tick lines over a value range.
//!
//! The arc opens downward and is symmetric around the vertical axis. With a
//! scale angle `a`, it starts at `90 + (360 - a) / 2` degrees and sweeps
//! clockwise by `a` degrees (screen coordinates, 90 degrees pointing down).
//! The default 220 degree scale therefore runs from 160 to 380 degrees.
//!
//! Ticks below the meter's current value are drawn with a gradient from
//! `body_main` to `body_grad`; the rest use `line_color`.
//!
//! The gauge builds on this widget: it owns a [`LineMeter`] and forwards its
//! range and scale accessors to it.

use core::ops::Deref;

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::colors::mix;
use crate::config::{
    DEFAULT_LINE_COUNT,
    DEFAULT_METER_SIZE,
    DEFAULT_RANGE_MAX,
    DEFAULT_RANGE_MIN,
    DEFAULT_SCALE_ANGLE,
    MAX_SCALE_ANGLE,
};
use crate::draw::Painter;
use crate::error::{Error, Result};
use crate::log_buffer::{LogBuffer, log_debug, log_warn};
use crate::obj::{Dirty, Ext, ExtMut, Obj, ObjHandle, ObjTree, Signal, SignalHandler, Validity};
use crate::styles::Style;
use crate::trigo::{inscribed_radius, polar};
use crate::widgets::base::BaseSignal;

// =============================================================================
// Line Meter Data
// =============================================================================

/// Range, value and scale of a line meter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineMeter {
    min: i16,
    max: i16,
    value: i16,
    scale_angle: u16,
    line_count: u8,
}

impl LineMeter {
    /// Meter with the default range, scale and tick count; value at minimum.
    pub const fn new() -> Self {
        Self {
            min: DEFAULT_RANGE_MIN,
            max: DEFAULT_RANGE_MAX,
            value: DEFAULT_RANGE_MIN,
            scale_angle: DEFAULT_SCALE_ANGLE,
            line_count: DEFAULT_LINE_COUNT,
        }
    }

    /// Lower bound of the range.
    #[inline]
    pub const fn min_value(&self) -> i16 { self.min }

    /// Upper bound of the range.
    #[inline]
    pub const fn max_value(&self) -> i16 { self.max }

    /// Current value, always within the range.
    #[inline]
    pub const fn value(&self) -> i16 { self.value }

    /// Opening of the arc in degrees.
    #[inline]
    pub const fn scale_angle(&self) -> u16 { self.scale_angle }

    /// Number of tick lines.
    #[inline]
    pub const fn line_count(&self) -> u8 { self.line_count }

    /// Clamp `value` into the current range.
    #[inline]
    pub fn clamp(
        &self,
        value: i16,
    ) -> i16 {
        value.clamp(self.min, self.max)
    }

    /// Set the range; bounds given in the wrong order are swapped.
    /// The meter's own value is clamped into the new range.
    pub(crate) fn set_range(
        &mut self,
        min: i16,
        max: i16,
    ) {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        self.min = min;
        self.max = max;
        self.value = self.clamp(self.value);
    }

    /// Set the value, clamped into the range. Returns the stored value.
    pub(crate) fn set_value(
        &mut self,
        value: i16,
    ) -> i16 {
        self.value = self.clamp(value);
        self.value
    }

    /// Set the scale. Angles above 360 degrees are clamped.
    pub(crate) fn set_scale(
        &mut self,
        angle: u16,
        line_count: u8,
    ) {
        self.scale_angle = angle.min(MAX_SCALE_ANGLE);
        self.line_count = line_count;
    }

    // -------------------------------------------------------------------------
    // Geometry
    // -------------------------------------------------------------------------

    /// Angle of the range minimum, in degrees.
    #[inline]
    pub fn start_angle(&self) -> i32 { 90 + (360 - i32::from(self.scale_angle)) / 2 }

    /// Angle of the range maximum, in degrees.
    #[inline]
    pub fn end_angle(&self) -> i32 { self.start_angle() + i32::from(self.scale_angle) }

    /// Map `value` linearly from the range onto the arc.
    ///
    /// Values outside the range map outside the arc; an empty range maps
    /// everything to the start.
    pub fn angle_of(
        &self,
        value: i16,
    ) -> i32 {
        let span = i32::from(self.max) - i32::from(self.min);
        if span == 0 {
            return self.start_angle();
        }
        let offset = i32::from(value) - i32::from(self.min);
        self.start_angle() + offset * i32::from(self.scale_angle) / span
    }

    /// Angle of division `index` when `count` divisions are spread over the arc.
    pub fn division_angle(
        &self,
        index: u8,
        count: u8,
    ) -> i32 {
        if count <= 1 {
            return self.start_angle();
        }
        self.start_angle() + i32::from(index) * i32::from(self.scale_angle) / (i32::from(count) - 1)
    }

    /// Number of ticks (out of `line_count`) lit by the current value.
    pub fn active_level(
        &self,
        line_count: u8,
    ) -> i32 {
        let span = i32::from(self.max) - i32::from(self.min);
        if span == 0 {
            return i32::from(line_count);
        }
        (i32::from(self.value) - i32::from(self.min)) * i32::from(line_count) / span
    }

    // -------------------------------------------------------------------------
    // Drawing
    // -------------------------------------------------------------------------

    /// Draw `line_count` ticks spread over the arc inscribed in `coords`.
    ///
    /// Tick length is `style.pad_hor`, measured inward from the edge.
    pub(crate) fn draw_ticks(
        &self,
        painter: &mut dyn Painter,
        coords: Rectangle,
        style: &Style,
        line_count: u8,
    ) {
        let center = coords.center();
        let r_out = inscribed_radius(coords);
        let r_in = r_out.saturating_sub(style.pad_hor).max(1);
        let level = self.active_level(line_count);

        for i in 0..line_count {
            let angle = self.division_angle(i, line_count);
            let p_out = polar(center, r_out, angle);
            let p_in = polar(center, r_in, angle);

            let color = if i32::from(i) >= level {
                style.line_color
            } else {
                let ratio = (255 * u32::from(i) / u32::from(line_count)) as u8;
                mix(style.body_grad, style.body_main, ratio)
            };
            painter.line(p_in, p_out, color, style.line_width);
        }
    }
}

impl Default for LineMeter {
    fn default() -> Self { Self::new() }
}

impl Ext {
    /// The line meter of this object, for line meters and every kind built on one.
    pub fn line_meter(&self) -> Option<&LineMeter> {
        match self {
            Self::LineMeter(meter) => Some(meter),
            Self::Gauge(gauge) => Some(gauge.meter()),
            Self::Base => None,
        }
    }
}

// =============================================================================
// Signal Handler
// =============================================================================

/// Signal handler for line meters. Chains to [`BaseSignal`].
pub struct LineMeterSignal;

impl SignalHandler for LineMeterSignal {
    fn signal(
        &self,
        obj: &mut Obj,
        signal: Signal<'_>,
    ) -> Validity {
        match signal {
            Signal::DrawMain(painter) => {
                let res = BaseSignal.signal(obj, Signal::DrawMain(&mut *painter));
                if !res.is_valid() {
                    return res;
                }
                if let Some(meter) = obj.ext().line_meter() {
                    meter.draw_ticks(painter, obj.coords(), obj.style(), meter.line_count());
                }
                Validity::Valid
            }
            Signal::GetType(chain) => {
                chain.push("line_meter");
                BaseSignal.signal(obj, Signal::GetType(chain))
            }
            other => BaseSignal.signal(obj, other),
        }
    }
}

// =============================================================================
// Handle API
// =============================================================================

/// Mutable access to a line meter; every setter schedules a redraw.
pub struct LineMeterMut<'a> {
    meter: &'a mut LineMeter,
    dirty: Dirty<'a>,
    log: &'a mut LogBuffer,
    handle: ObjHandle,
}

impl LineMeterMut<'_> {
    /// Set the range (swapped if given in the wrong order).
    pub fn set_range(
        &mut self,
        min: i16,
        max: i16,
    ) {
        self.meter.set_range(min, max);
        self.dirty.mark();
        log_debug!(
            self.log,
            "#{} range {}..{}",
            self.handle.index(),
            self.meter.min_value(),
            self.meter.max_value()
        );
    }

    /// Set the value, clamped into the range.
    pub fn set_value(
        &mut self,
        value: i16,
    ) {
        let stored = self.meter.set_value(value);
        if stored != value {
            log_warn!(self.log, "#{} value {} clamped to {}", self.handle.index(), value, stored);
        }
        self.dirty.mark();
    }

    /// Set the scale angle (clamped to 360) and tick count.
    pub fn set_scale(
        &mut self,
        angle: u16,
        line_count: u8,
    ) {
        self.meter.set_scale(angle, line_count);
        self.dirty.mark();
    }
}

impl Deref for LineMeterMut<'_> {
    type Target = LineMeter;

    fn deref(&self) -> &LineMeter { &*self.meter }
}

impl ObjTree {
    /// Create a line meter under `parent`, optionally copying `copy`.
    pub fn create_line_meter(
        &mut self,
        parent: ObjHandle,
        copy: Option<ObjHandle>,
    ) -> Result<ObjHandle> {
        let meter = match copy {
            Some(src) => self.line_meter(src)?.clone(),
            None => LineMeter::new(),
        };
        let size = Size::new(DEFAULT_METER_SIZE, DEFAULT_METER_SIZE);
        self.insert(parent, &LineMeterSignal, Ext::LineMeter(meter), Style::METER, size, copy)
    }

    /// Line meter data of `handle` (also the base meter of a gauge).
    pub fn line_meter(
        &self,
        handle: ObjHandle,
    ) -> Result<&LineMeter> {
        self.obj(handle)?
            .ext()
            .line_meter()
            .ok_or(Error::WrongKind { expected: "line_meter" })
    }

    /// Setters of the line meter `handle`.
    ///
    /// Gauges are refused: their scale is changed through
    /// [`ObjTree::gauge_mut`], which keeps the gradient pinned to the maximum.
    pub fn line_meter_mut(
        &mut self,
        handle: ObjHandle,
    ) -> Result<LineMeterMut<'_>> {
        let ExtMut { ext, dirty, log, handle } = self.ext_mut(handle)?;
        let Ext::LineMeter(meter) = ext else {
            return Err(Error::WrongKind { expected: "line_meter" });
        };
        Ok(LineMeterMut { meter, dirty, log, handle })
    }
}

// =============================================================================
// Tests
// =============================================================================
