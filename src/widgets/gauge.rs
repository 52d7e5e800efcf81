//! Needle gauge: a line meter with needles and scale numerals.
//!
//! # Layering
//!
//! A gauge owns a [`LineMeter`] for its range and scale and adds a list of
//! needles plus a label count. Its signal handler chains to the line meter's,
//! so one draw pass paints, back to front:
//!
//! 1. body (plain object, when the style makes it visible)
//! 2. scale ticks with the value gradient (line meter)
//! 3. major ticks: `label_count` ticks at double width and double length
//! 4. numerals at the major ticks
//! 5. needles in ascending index order, so later needles overlay earlier ones
//! 6. hub: a filled circle over the needle roots
//!
//! # Geometry
//!
//! All radii derive from the object width `w` and the style paddings:
//!
//! | Element | Radius |
//! |---------|--------|
//! | Ticks (outer end) | `w / 2` |
//! | Needles | `w / 2 - pad_hor`, at least 1 |
//! | Numerals | `w / 2 - 3 * pad_hor - pad_inner`, at least 1 |
//! | Hub | diameter `2 * pad_ver + 1` |
//!
//! # Needle Values
//!
//! Writes are clamped into the range. Changing the range later does not
//! re-clamp stored values: a needle may point past the end of a narrowed
//! scale until it is written again.

use core::fmt::Write as _;
use core::ops::Deref;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::{String, Vec};

use crate::colors::DEFAULT_NEEDLE_COLOR;
use crate::config::{DEFAULT_GAUGE_SIZE, DEFAULT_LABEL_COUNT, LABEL_TEXT_LEN, MAX_NEEDLES};
use crate::draw::Painter;
use crate::error::{Error, Result};
use crate::log_buffer::{LogBuffer, log_debug, log_error, log_info, log_warn};
use crate::obj::{Dirty, Ext, ExtMut, Obj, ObjHandle, ObjTree, Signal, SignalHandler, Validity};
use crate::styles::Style;
use crate::trigo::{inscribed_radius, polar};
use crate::widgets::line_meter::{LineMeter, LineMeterSignal};

// =============================================================================
// Gauge Data
// =============================================================================

/// One needle: its value and color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Needle {
    /// Value the needle points at.
    pub value: i16,
    /// Stroke color.
    pub color: Rgb565,
}

/// Widget data of a gauge.
///
/// Values and colors live together in one list, so every needle always has
/// both.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gauge {
    meter: LineMeter,
    needles: Vec<Needle, MAX_NEEDLES>,
    label_count: u8,
}

impl Gauge {
    /// Default gauge: one red needle at the range minimum, 220 degree scale,
    /// 21 ticks, 6 numerals, range 0..100.
    pub fn new() -> Self {
        let mut meter = LineMeter::new();
        meter.set_value(meter.max_value());

        let mut needles = Vec::new();
        needles
            .push(Needle {
                value: meter.min_value(),
                color: DEFAULT_NEEDLE_COLOR,
            })
            .ok();

        Self {
            meter,
            needles,
            label_count: DEFAULT_LABEL_COUNT,
        }
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Number of needles.
    #[inline]
    pub fn needle_count(&self) -> u8 { self.needles.len() as u8 }

    /// Value of needle `needle_id`, `None` if the gauge has no such needle.
    pub fn value(
        &self,
        needle_id: u8,
    ) -> Option<i16> {
        self.needles.get(usize::from(needle_id)).map(|n| n.value)
    }

    /// Color of needle `needle_id`.
    pub fn needle_color(
        &self,
        needle_id: u8,
    ) -> Option<Rgb565> {
        self.needles.get(usize::from(needle_id)).map(|n| n.color)
    }

    /// All needles in drawing order.
    #[inline]
    pub fn needles(&self) -> &[Needle] { &self.needles }

    /// Number of numerals (and major ticks).
    #[inline]
    pub const fn label_count(&self) -> u8 { self.label_count }

    /// The underlying scale.
    #[inline]
    pub const fn meter(&self) -> &LineMeter { &self.meter }

    /// Lower bound of the range.
    #[inline]
    pub const fn min_value(&self) -> i16 { self.meter.min_value() }

    /// Upper bound of the range.
    #[inline]
    pub const fn max_value(&self) -> i16 { self.meter.max_value() }

    /// Number of scale ticks.
    #[inline]
    pub const fn line_count(&self) -> u8 { self.meter.line_count() }

    /// Opening of the scale arc in degrees.
    #[inline]
    pub const fn scale_angle(&self) -> u16 { self.meter.scale_angle() }

    // -------------------------------------------------------------------------
    // Geometry
    // -------------------------------------------------------------------------

    /// Angle of needle `needle_id` in degrees.
    pub fn needle_angle(
        &self,
        needle_id: u8,
    ) -> Option<i32> {
        self.value(needle_id).map(|v| self.meter.angle_of(v))
    }

    /// Value shown by numeral `index`, spread evenly from min to max.
    pub fn label_value(
        &self,
        index: u8,
    ) -> i16 {
        let min = i32::from(self.min_value());
        if self.label_count <= 1 {
            return self.min_value();
        }
        let span = i32::from(self.max_value()) - min;
        (min + span * i32::from(index) / (i32::from(self.label_count) - 1)) as i16
    }

    /// Angle of numeral `index` (and of the matching major tick).
    pub fn label_angle(
        &self,
        index: u8,
    ) -> i32 {
        self.meter.division_angle(index, self.label_count)
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Resize the needle list. Surviving needles keep their values; new ones
    /// start at the range minimum.
    ///
    /// `colors` must be empty (every needle gets the default color) or hold
    /// one color per needle. On error nothing changes.
    fn set_needle_count(
        &mut self,
        count: u8,
        colors: &[Rgb565],
    ) -> Result<()> {
        if usize::from(count) > MAX_NEEDLES {
            return Err(Error::TooManyNeedles {
                requested: count,
                capacity: MAX_NEEDLES,
            });
        }
        if !colors.is_empty() && colors.len() != usize::from(count) {
            return Err(Error::ColorCount {
                needles: count,
                colors: colors.len(),
            });
        }

        let mut needles = Vec::new();
        for i in 0..usize::from(count) {
            let value = self.needles.get(i).map_or(self.min_value(), |n| n.value);
            let color = colors.get(i).copied().unwrap_or(DEFAULT_NEEDLE_COLOR);
            needles.push(Needle { value, color }).ok();
        }
        self.needles = needles;
        Ok(())
    }

    /// Store a clamped value. Returns the stored value.
    fn set_value(
        &mut self,
        needle_id: u8,
        value: i16,
    ) -> Result<i16> {
        let clamped = self.meter.clamp(value);
        let needle_count = self.needle_count();
        let needle = self
            .needles
            .get_mut(usize::from(needle_id))
            .ok_or(Error::NeedleOutOfRange { needle_id, needle_count })?;
        needle.value = clamped;
        Ok(clamped)
    }

    fn set_scale(
        &mut self,
        angle: u16,
        line_count: u8,
        label_count: u8,
    ) {
        self.meter.set_scale(angle, line_count);
        self.label_count = label_count;
    }

    /// Forward the range to the scale and keep its gradient full.
    fn set_range(
        &mut self,
        min: i16,
        max: i16,
    ) {
        self.meter.set_range(min, max);
        self.meter.set_value(self.meter.max_value());
    }

    fn release_needles(&mut self) { self.needles.clear(); }

    // -------------------------------------------------------------------------
    // Drawing
    // -------------------------------------------------------------------------

    /// Paint major ticks, numerals, needles and hub over the scale.
    fn draw(
        &self,
        painter: &mut dyn Painter,
        coords: Rectangle,
        style: &Style,
    ) {
        let center = coords.center();
        let half = inscribed_radius(coords);

        let major = Style {
            line_width: style.line_width.saturating_mul(2),
            pad_hor: style.pad_hor.saturating_mul(2),
            ..*style
        };
        self.meter.draw_ticks(painter, coords, &major, self.label_count);

        let label_radius = half
            .saturating_sub(style.pad_hor.saturating_mul(3))
            .saturating_sub(style.pad_inner)
            .max(1);
        for i in 0..self.label_count {
            let mut text: String<LABEL_TEXT_LEN> = String::new();
            write!(text, "{}", self.label_value(i)).ok();
            let at = polar(center, label_radius, self.label_angle(i));
            painter.text(&text, at, style.text_color);
        }

        let needle_radius = half.saturating_sub(style.pad_hor).max(1);
        for needle in &self.needles {
            let tip = polar(center, needle_radius, self.meter.angle_of(needle.value));
            painter.line(center, tip, needle.color, style.line_width);
        }

        let hub = style.pad_ver.saturating_mul(2).saturating_add(1).max(1) as u32;
        painter.fill_circle(center, hub, style.border_color);
    }
}

impl Default for Gauge {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Signal Handler
// =============================================================================

/// Signal handler for gauges. Chains to [`LineMeterSignal`].
pub struct GaugeSignal;

impl SignalHandler for GaugeSignal {
    fn signal(
        &self,
        obj: &mut Obj,
        signal: Signal<'_>,
    ) -> Validity {
        match signal {
            Signal::Cleanup => {
                if let Ext::Gauge(gauge) = &mut obj.ext {
                    gauge.release_needles();
                }
                LineMeterSignal.signal(obj, Signal::Cleanup)
            }
            Signal::DrawMain(painter) => {
                let res = LineMeterSignal.signal(obj, Signal::DrawMain(&mut *painter));
                if !res.is_valid() {
                    return res;
                }
                if let Ext::Gauge(gauge) = obj.ext() {
                    gauge.draw(painter, obj.coords(), obj.style());
                }
                Validity::Valid
            }
            Signal::GetType(chain) => {
                chain.push("gauge");
                LineMeterSignal.signal(obj, Signal::GetType(chain))
            }
            other => LineMeterSignal.signal(obj, other),
        }
    }
}

// =============================================================================
// Handle API
// =============================================================================

/// Mutable access to a gauge. Every successful setter schedules a redraw.
pub struct GaugeMut<'a> {
    gauge: &'a mut Gauge,
    dirty: Dirty<'a>,
    log: &'a mut LogBuffer,
    handle: ObjHandle,
}

impl GaugeMut<'_> {
    /// Set the number of needles and their colors.
    ///
    /// Pass an empty `colors` slice to give every needle the default color.
    pub fn set_needle_count(
        &mut self,
        count: u8,
        colors: &[Rgb565],
    ) -> Result<()> {
        if let Err(err) = self.gauge.set_needle_count(count, colors) {
            log_error!(
                self.log,
                "#{} rejected {} needles ({} colors)",
                self.handle.index(),
                count,
                colors.len()
            );
            return Err(err);
        }
        self.dirty.mark();
        log_info!(self.log, "#{} has {} needles", self.handle.index(), count);
        Ok(())
    }

    /// Point needle `needle_id` at `value`, clamped into the range.
    pub fn set_value(
        &mut self,
        needle_id: u8,
        value: i16,
    ) -> Result<()> {
        match self.gauge.set_value(needle_id, value) {
            Ok(stored) => {
                if stored != value {
                    log_warn!(
                        self.log,
                        "#{} needle {}: {} clamped to {}",
                        self.handle.index(),
                        needle_id,
                        value,
                        stored
                    );
                }
                self.dirty.mark();
                Ok(())
            }
            Err(err) => {
                log_error!(
                    self.log,
                    "#{} has no needle {}",
                    self.handle.index(),
                    needle_id
                );
                Err(err)
            }
        }
    }

    /// Set scale angle (clamped to 360), tick count and numeral count.
    pub fn set_scale(
        &mut self,
        angle: u16,
        line_count: u8,
        label_count: u8,
    ) {
        self.gauge.set_scale(angle, line_count, label_count);
        self.dirty.mark();
        log_debug!(
            self.log,
            "#{} scale {} deg, {} lines, {} labels",
            self.handle.index(),
            self.gauge.scale_angle(),
            line_count,
            label_count
        );
    }

    /// Set the range (swapped if given in the wrong order).
    ///
    /// Needle values are left as they are; only later writes are clamped
    /// into the new range.
    pub fn set_range(
        &mut self,
        min: i16,
        max: i16,
    ) {
        self.gauge.set_range(min, max);
        self.dirty.mark();
        log_debug!(
            self.log,
            "#{} range {}..{}",
            self.handle.index(),
            self.gauge.min_value(),
            self.gauge.max_value()
        );
    }
}

impl Deref for GaugeMut<'_> {
    type Target = Gauge;

    fn deref(&self) -> &Gauge { &*self.gauge }
}

impl ObjTree {
    /// Create a gauge under `parent`.
    ///
    /// With `copy`, needles, numerals, range and scale are duplicated from
    /// that gauge; the two gauges share nothing afterwards.
    pub fn create_gauge(
        &mut self,
        parent: ObjHandle,
        copy: Option<ObjHandle>,
    ) -> Result<ObjHandle> {
        let gauge = match copy {
            Some(src) => self.gauge(src)?.clone(),
            None => Gauge::new(),
        };
        let size = Size::new(DEFAULT_GAUGE_SIZE, DEFAULT_GAUGE_SIZE);
        self.insert(parent, &GaugeSignal, Ext::Gauge(gauge), Style::METER, size, copy)
    }

    /// Gauge data of `handle`.
    pub fn gauge(
        &self,
        handle: ObjHandle,
    ) -> Result<&Gauge> {
        match self.obj(handle)?.ext() {
            Ext::Gauge(gauge) => Ok(gauge),
            _ => Err(Error::WrongKind { expected: "gauge" }),
        }
    }

    /// Setters of the gauge `handle`.
    pub fn gauge_mut(
        &mut self,
        handle: ObjHandle,
    ) -> Result<GaugeMut<'_>> {
        let ExtMut { ext, dirty, log, handle } = self.ext_mut(handle)?;
        match ext {
            Ext::Gauge(gauge) => Ok(GaugeMut { gauge, dirty, log, handle }),
            _ => Err(Error::WrongKind { expected: "gauge" }),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLUE, GREEN, RED, SILVER, YELLOW};
    use crate::config::{DEFAULT_LINE_COUNT, DEFAULT_NEEDLE_COUNT};
    use crate::draw::{Op, Recorder};
    use crate::log_buffer::LogLevel;

    fn tree() -> ObjTree { ObjTree::new(Rectangle::new(Point::zero(), Size::new(320, 240))) }

    fn gauge_in(tree: &mut ObjTree) -> ObjHandle { tree.create_gauge(tree.screen(), None).unwrap() }

    // -------------------------------------------------------------------------
    // Creation
    // -------------------------------------------------------------------------

    #[test]
    fn test_default_gauge() {
        let mut tree = tree();
        let g = gauge_in(&mut tree);
        let gauge = tree.gauge(g).unwrap();

        assert_eq!(gauge.needle_count(), DEFAULT_NEEDLE_COUNT);
        assert_eq!(gauge.value(0), Some(0));
        assert_eq!(gauge.needle_color(0), Some(RED));
        assert_eq!(gauge.scale_angle(), 220);
        assert_eq!(gauge.line_count(), DEFAULT_LINE_COUNT);
        assert_eq!(gauge.label_count(), DEFAULT_LABEL_COUNT);
        assert_eq!((gauge.min_value(), gauge.max_value()), (0, 100));
        assert_eq!(gauge.meter().value(), 100, "scale gradient pinned to max");
        assert_eq!(tree.coords(g).unwrap().size, Size::new(DEFAULT_GAUGE_SIZE, DEFAULT_GAUGE_SIZE));
    }

    #[test]
    fn test_type_chain() {
        let mut tree = tree();
        let g = gauge_in(&mut tree);
        assert_eq!(tree.type_chain(g).unwrap().as_slice(), ["gauge", "line_meter", "obj"]);
    }

    #[test]
    fn test_gauge_is_a_line_meter() {
        let mut tree = tree();
        let g = gauge_in(&mut tree);
        tree.gauge_mut(g).unwrap().set_scale(180, 9, 3);

        let meter = tree.line_meter(g).unwrap();
        assert_eq!(meter.scale_angle(), 180);
        assert_eq!(meter.line_count(), 9);
    }

    #[test]
    fn test_wrong_kind() {
        let mut tree = tree();
        let meter = tree.create_line_meter(tree.screen(), None).unwrap();
        assert_eq!(tree.gauge(meter).err(), Some(Error::WrongKind { expected: "gauge" }));
        assert!(tree.gauge_mut(meter).is_err());
        assert!(tree.create_gauge(tree.screen(), Some(meter)).is_err(), "copy source must be a gauge");
    }

    #[test]
    fn test_copy_is_deep_and_independent() {
        let mut tree = tree();
        let a = gauge_in(&mut tree);
        {
            let mut ga = tree.gauge_mut(a).unwrap();
            ga.set_needle_count(3, &[RED, GREEN, BLUE]).unwrap();
            ga.set_range(-20, 80);
            ga.set_value(0, -5).unwrap();
            ga.set_value(1, 40).unwrap();
            ga.set_value(2, 75).unwrap();
            ga.set_scale(270, 28, 5);
        }

        let b = tree.create_gauge(tree.screen(), Some(a)).unwrap();
        assert_eq!(tree.gauge(b).unwrap(), tree.gauge(a).unwrap());

        tree.gauge_mut(b).unwrap().set_value(1, 0).unwrap();
        assert_eq!(tree.gauge(b).unwrap().value(1), Some(0));
        assert_eq!(tree.gauge(a).unwrap().value(1), Some(40), "source unchanged");
    }

    // -------------------------------------------------------------------------
    // Needles
    // -------------------------------------------------------------------------

    #[test]
    fn test_needle_count_roundtrip() {
        let mut tree = tree();
        let g = gauge_in(&mut tree);
        for n in 0..=MAX_NEEDLES as u8 {
            tree.gauge_mut(g).unwrap().set_needle_count(n, &[]).unwrap();
            let gauge = tree.gauge(g).unwrap();
            assert_eq!(gauge.needle_count(), n);
            assert_eq!(gauge.needles().len(), usize::from(n));
        }
    }

    #[test]
    fn test_needle_count_keeps_survivors() {
        let mut tree = tree();
        let g = gauge_in(&mut tree);
        let mut gm = tree.gauge_mut(g).unwrap();
        gm.set_range(10, 90);
        gm.set_value(0, 55).unwrap();

        gm.set_needle_count(3, &[YELLOW, GREEN, BLUE]).unwrap();
        assert_eq!(gm.value(0), Some(55), "survivor keeps value");
        assert_eq!(gm.needle_color(0), Some(YELLOW), "survivor takes new color");
        assert_eq!(gm.value(1), Some(10), "new needle starts at min");
        assert_eq!(gm.value(2), Some(10));

        gm.set_needle_count(1, &[]).unwrap();
        assert_eq!(gm.value(0), Some(55));
        assert_eq!(gm.needle_color(0), Some(DEFAULT_NEEDLE_COLOR));
        assert_eq!(gm.value(1), None);
    }

    #[test]
    fn test_too_many_needles_is_atomic() {
        let mut tree = tree();
        let g = gauge_in(&mut tree);
        let before = tree.gauge(g).unwrap().clone();

        let res = tree.gauge_mut(g).unwrap().set_needle_count(MAX_NEEDLES as u8 + 1, &[]);
        assert_eq!(
            res,
            Err(Error::TooManyNeedles {
                requested: MAX_NEEDLES as u8 + 1,
                capacity: MAX_NEEDLES,
            })
        );
        assert_eq!(tree.gauge(g).unwrap(), &before);
    }

    #[test]
    fn test_color_count_mismatch() {
        let mut tree = tree();
        let g = gauge_in(&mut tree);
        let res = tree.gauge_mut(g).unwrap().set_needle_count(3, &[RED, GREEN]);
        assert_eq!(res, Err(Error::ColorCount { needles: 3, colors: 2 }));
        assert_eq!(tree.gauge(g).unwrap().needle_count(), 1);
        assert_eq!(tree.log().last().map(|e| e.level), Some(LogLevel::Error));
    }

    #[test]
    fn test_value_clamped_into_range() {
        let mut tree = tree();
        let g = gauge_in(&mut tree);
        let ranges = [(0, 100), (-50, 50), (-300, -200), (7, 7)];
        let values = [i16::MIN, -250, -1, 0, 42, 150, i16::MAX];

        for (lo, hi) in ranges {
            for v in values {
                let mut gm = tree.gauge_mut(g).unwrap();
                gm.set_range(lo, hi);
                gm.set_value(0, v).unwrap();
                assert_eq!(gm.value(0), Some(v.clamp(lo, hi)), "range {lo}..{hi}, value {v}");
            }
        }
    }

    #[test]
    fn test_clamp_logs_warning() {
        let mut tree = tree();
        let g = gauge_in(&mut tree);
        tree.gauge_mut(g).unwrap().set_value(0, 150).unwrap();

        let last = tree.log().last().unwrap();
        assert_eq!(last.level, LogLevel::Warn);
        assert_eq!(last.message.as_str(), "#1 needle 0: 150 clamped to 100");
    }

    #[test]
    fn test_bad_needle_id_is_guarded() {
        let mut tree = tree();
        let g = gauge_in(&mut tree);
        let res = tree.gauge_mut(g).unwrap().set_value(1, 10);

        assert_eq!(res, Err(Error::NeedleOutOfRange { needle_id: 1, needle_count: 1 }));
        let gauge = tree.gauge(g).unwrap();
        assert_eq!(gauge.value(1), None);
        assert_eq!(gauge.needle_angle(1), None);
        assert_eq!(gauge.needle_count(), 1);
        assert_eq!(tree.log().last().map(|e| e.level), Some(LogLevel::Error));
    }

    #[test]
    fn test_range_change_does_not_reclamp() {
        let mut tree = tree();
        let g = gauge_in(&mut tree);
        let mut gm = tree.gauge_mut(g).unwrap();
        gm.set_value(0, 80).unwrap();
        gm.set_range(0, 50);

        assert_eq!(gm.value(0), Some(80), "stale until written again");
        assert_eq!(gm.meter().value(), 50);
        gm.set_value(0, 80).unwrap();
        assert_eq!(gm.value(0), Some(50));
    }

    #[test]
    fn test_range_swapped() {
        let mut tree = tree();
        let g = gauge_in(&mut tree);
        tree.gauge_mut(g).unwrap().set_range(60, -60);
        let gauge = tree.gauge(g).unwrap();
        assert_eq!((gauge.min_value(), gauge.max_value()), (-60, 60));
    }

    // -------------------------------------------------------------------------
    // Scale
    // -------------------------------------------------------------------------

    #[test]
    fn test_set_scale_idempotent() {
        let mut tree = tree();
        let g = gauge_in(&mut tree);
        let read = |tree: &ObjTree| {
            let gauge = tree.gauge(g).unwrap();
            (gauge.scale_angle(), gauge.line_count(), gauge.label_count())
        };

        tree.gauge_mut(g).unwrap().set_scale(240, 25, 7);
        let first = read(&tree);
        tree.gauge_mut(g).unwrap().set_scale(240, 25, 7);
        assert_eq!(read(&tree), first);
        assert_eq!(first, (240, 25, 7));
    }

    #[test]
    fn test_oversized_scale_angle_clamped() {
        let mut tree = tree();
        let g = gauge_in(&mut tree);
        tree.gauge_mut(g).unwrap().set_scale(u16::MAX, 10, 4);
        assert_eq!(tree.gauge(g).unwrap().scale_angle(), 360);
    }

    #[test]
    fn test_needle_angle_boundaries() {
        let mut tree = tree();
        let g = gauge_in(&mut tree);
        let mut gm = tree.gauge_mut(g).unwrap();
        gm.set_needle_count(3, &[]).unwrap();
        gm.set_value(0, 0).unwrap();
        gm.set_value(1, 100).unwrap();
        gm.set_value(2, 50).unwrap();

        let start = gm.meter().start_angle();
        let end = start + i32::from(gm.scale_angle());
        assert_eq!(gm.needle_angle(0), Some(start));
        assert_eq!(gm.needle_angle(1), Some(end));
        assert_eq!(gm.needle_angle(2), Some((start + end) / 2));
    }

    #[test]
    fn test_needle_angle_odd_range() {
        let mut tree = tree();
        let g = gauge_in(&mut tree);
        let mut gm = tree.gauge_mut(g).unwrap();
        gm.set_range(-7, 6);
        gm.set_scale(300, 14, 2);

        gm.set_value(0, -7).unwrap();
        assert_eq!(gm.needle_angle(0), Some(120));
        gm.set_value(0, 6).unwrap();
        assert_eq!(gm.needle_angle(0), Some(420));
        gm.set_value(0, 0).unwrap();
        let mid = gm.needle_angle(0).unwrap();
        assert!((mid - 270).abs() <= 12, "midpoint {mid} within one step");
    }

    #[test]
    fn test_label_values() {
        let mut gauge = Gauge::new();
        let values: Vec<i16, 8> = (0..gauge.label_count()).map(|i| gauge.label_value(i)).collect();
        assert_eq!(values.as_slice(), [0, 20, 40, 60, 80, 100]);

        gauge.set_range(-40, 120);
        gauge.set_scale(220, 21, 5);
        let values: Vec<i16, 8> = (0..5).map(|i| gauge.label_value(i)).collect();
        assert_eq!(values.as_slice(), [-40, 0, 40, 80, 120]);

        gauge.set_scale(220, 21, 1);
        assert_eq!(gauge.label_value(0), -40);
        assert_eq!(gauge.label_angle(0), gauge.meter().start_angle());
    }

    // -------------------------------------------------------------------------
    // Drawing
    // -------------------------------------------------------------------------

    fn draw(tree: &mut ObjTree, g: ObjHandle) -> Recorder {
        let mut rec = Recorder::default();
        let res = tree.signal(g, Signal::DrawMain(&mut rec)).unwrap();
        assert!(res.is_valid());
        rec
    }

    #[test]
    fn test_draw_order_and_needles() {
        let mut tree = tree();
        let g = gauge_in(&mut tree);
        {
            let mut gm = tree.gauge_mut(g).unwrap();
            gm.set_needle_count(3, &[RED, GREEN, BLUE]).unwrap();
            gm.set_value(0, 0).unwrap();
            gm.set_value(1, 50).unwrap();
            gm.set_value(2, 100).unwrap();
        }
        let rec = draw(&mut tree, g);

        let lines: std::vec::Vec<_> = rec.lines().collect();
        let ticks = usize::from(DEFAULT_LINE_COUNT) + usize::from(DEFAULT_LABEL_COUNT);
        assert_eq!(lines.len(), ticks + 3);

        // 120x120 at the origin: center (59, 59), needle radius 60 - 8
        let center = Point::new(59, 59);
        let needles = &lines[ticks..];
        let expected = [(160, RED), (270, GREEN), (380, BLUE)];
        for ((from, to, color, _), (angle, want)) in needles.iter().zip(expected) {
            assert_eq!(*from, center);
            assert_eq!(*to, polar(center, 52, angle));
            assert_eq!(*color, want);
        }
        assert_eq!(needles[1].1, Point::new(59, 7), "mid value points straight up");

        // Hub last, over the needle roots
        assert_eq!(
            rec.ops.last(),
            Some(&Op::Circle {
                center,
                diameter: 9,
                color: SILVER,
            })
        );
    }

    #[test]
    fn test_major_ticks_are_doubled() {
        let mut tree = tree();
        let g = gauge_in(&mut tree);
        let rec = draw(&mut tree, g);

        let lines: std::vec::Vec<_> = rec.lines().collect();
        let major = &lines[usize::from(DEFAULT_LINE_COUNT)..][..usize::from(DEFAULT_LABEL_COUNT)];
        for (_, _, _, width) in major {
            assert_eq!(*width, 2);
        }
        // First major tick: 16 px long, pointing at 160 degrees
        let center = Point::new(59, 59);
        assert_eq!(major[0].0, polar(center, 60 - 16, 160));
        assert_eq!(major[0].1, polar(center, 60, 160));
    }

    #[test]
    fn test_draw_labels() {
        let mut tree = tree();
        let g = gauge_in(&mut tree);
        let rec = draw(&mut tree, g);
        assert_eq!(rec.texts().collect::<std::vec::Vec<_>>(), ["0", "20", "40", "60", "80", "100"]);

        tree.gauge_mut(g).unwrap().set_range(-1000, 1000);
        tree.gauge_mut(g).unwrap().set_scale(220, 21, 3);
        let rec = draw(&mut tree, g);
        assert_eq!(rec.texts().collect::<std::vec::Vec<_>>(), ["-1000", "0", "1000"]);
    }

    #[test]
    fn test_draw_without_needles() {
        let mut tree = tree();
        let g = gauge_in(&mut tree);
        tree.gauge_mut(g).unwrap().set_needle_count(0, &[]).unwrap();
        let rec = draw(&mut tree, g);

        let expected = usize::from(DEFAULT_LINE_COUNT) + usize::from(DEFAULT_LABEL_COUNT);
        assert_eq!(rec.lines().count(), expected);
    }

    #[test]
    fn test_small_gauge_keeps_needles_outward() {
        let mut tree = tree();
        let g = gauge_in(&mut tree);
        tree.set_size(g, Size::new(10, 10)).unwrap();
        tree.gauge_mut(g).unwrap().set_value(0, 50).unwrap();
        let rec = draw(&mut tree, g);

        // Paddings exceed the radius: needle and numerals sit 1 px out
        let center = tree.coords(g).unwrap().center();
        let needle = rec.lines().last().unwrap();
        assert_eq!(needle.1, center - Point::new(0, 1), "mid value still points up");

        let first_label = rec.ops.iter().find_map(|op| match op {
            Op::Text { center, .. } => Some(*center),
            _ => None,
        });
        assert_eq!(first_label, Some(polar(center, 1, 160)));
    }

    #[test]
    fn test_oversized_gauge_refreshes() {
        let mut tree = tree();
        let g = gauge_in(&mut tree);
        tree.set_size(g, Size::new(140_000, 140_000)).unwrap();
        tree.gauge_mut(g).unwrap().set_value(0, 50).unwrap();

        let mut rec = Recorder::default();
        assert_eq!(tree.refresh(&mut rec), Ok(2));

        // 70000 px radius, needle 8 px shorter, straight up
        let center = tree.coords(g).unwrap().center();
        let needle = rec.lines().last().unwrap();
        assert_eq!((needle.0, needle.1), (center, center - Point::new(0, 69_992)));
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    #[test]
    fn test_setters_mark_dirty() {
        let mut tree = tree();
        let g = gauge_in(&mut tree);
        tree.take_invalid_area();

        tree.gauge_mut(g).unwrap().set_value(0, 30).unwrap();
        assert!(tree.is_invalid(g).unwrap());
        assert_eq!(tree.take_invalid_area(), tree.coords(g).ok());

        // Rejected calls leave nothing to redraw
        let _ = tree.gauge_mut(g).unwrap().set_value(9, 30);
        assert!(!tree.is_dirty());
    }

    #[test]
    fn test_cleanup_releases_gauge() {
        let mut tree = tree();
        let g = gauge_in(&mut tree);
        tree.gauge_mut(g).unwrap().set_needle_count(4, &[]).unwrap();

        assert_eq!(tree.signal(g, Signal::Cleanup), Ok(Validity::Invalid));
        assert_eq!(tree.gauge(g).err(), Some(Error::StaleHandle));
    }

    #[test]
    fn test_release_needles() {
        let mut gauge = Gauge::new();
        gauge.set_needle_count(3, &[]).unwrap();
        gauge.release_needles();
        assert_eq!(gauge.needle_count(), 0);
        assert!(gauge.needles().is_empty());
    }

    #[test]
    fn test_scenario() {
        let mut tree = tree();
        let g = gauge_in(&mut tree);
        assert_eq!(tree.gauge(g).unwrap().needle_count(), 1);

        let mut gm = tree.gauge_mut(g).unwrap();
        gm.set_needle_count(3, &[RED, GREEN, BLUE]).unwrap();
        assert_eq!(gm.needle_count(), 3);

        gm.set_value(1, 50).unwrap();
        assert_eq!(gm.value(1), Some(50));

        gm.set_value(1, 150).unwrap();
        assert_eq!(gm.value(1), Some(100));
    }
}
