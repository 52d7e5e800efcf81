//! Object arena, parent/child tree, invalidation and signal dispatch.
//!
//! # Layout
//!
//! Objects live in a fixed array of slots. A slot holds at most one object
//! and a generation counter; [`ObjHandle`]s carry both, so a deleted object's
//! handle never resolves to the slot's next occupant.
//!
//! # Redraw Strategy
//!
//! | Event | Effect |
//! |-------|--------|
//! | Widget setter | object marked dirty, its area joined into the dirty area |
//! | Move / resize | old and new areas joined |
//! | Delete | area joined, parent notified |
//! | [`ObjTree::refresh`] | objects overlapping the dirty area redrawn in tree order |
//!
//! Tree order is parent before children, siblings in creation order, so later
//! siblings paint over earlier ones.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;

use super::handle::ObjHandle;
use super::signal::{Signal, SignalHandler, TypeChain, Validity};
use crate::config::{DEFAULT_OBJ_SIZE, MAX_OBJECTS};
use crate::draw::Painter;
use crate::error::{Error, Result};
use crate::log_buffer::{LogBuffer, log_debug, log_info, log_trace};
use crate::styles::Style;
use crate::widgets::base::BaseSignal;
use crate::widgets::gauge::Gauge;
use crate::widgets::line_meter::LineMeter;

/// Handles of an object's children, in creation order.
pub type Children = Vec<ObjHandle, MAX_OBJECTS>;

// =============================================================================
// Object
// =============================================================================

/// Widget-kind specific data attached to an object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Ext {
    /// Plain object (containers, the screen).
    Base,
    /// Scale-meter: arc of ticks over a value range.
    LineMeter(LineMeter),
    /// Needle gauge built on a line meter.
    Gauge(Gauge),
}

/// One node of the tree.
pub struct Obj {
    pub(crate) coords: Rectangle,
    pub(crate) style: Style,
    pub(crate) parent: Option<ObjHandle>,
    pub(crate) ext: Ext,
    pub(crate) invalid: bool,
    handler: &'static dyn SignalHandler,
    order: u32,
}

impl Obj {
    /// Absolute screen coordinates.
    #[inline]
    pub const fn coords(&self) -> Rectangle { self.coords }

    /// Current style.
    #[inline]
    pub const fn style(&self) -> &Style { &self.style }

    /// Parent handle; `None` for the screen.
    #[inline]
    pub const fn parent(&self) -> Option<ObjHandle> { self.parent }

    /// Widget data.
    #[inline]
    pub const fn ext(&self) -> &Ext { &self.ext }

    /// Center of the object's area.
    #[inline]
    pub fn center(&self) -> Point { self.coords.center() }
}

/// Everything a widget setter needs: its data plus a way to mark it dirty.
pub(crate) struct ExtMut<'a> {
    pub ext: &'a mut Ext,
    pub dirty: Dirty<'a>,
    pub log: &'a mut LogBuffer,
    pub handle: ObjHandle,
}

/// Marks one object (and the tree's dirty area) for redraw.
pub struct Dirty<'a> {
    flag: &'a mut bool,
    coords: Rectangle,
    area: &'a mut Option<Rectangle>,
}

impl Dirty<'_> {
    /// Schedule the object for the next refresh.
    pub fn mark(&mut self) {
        *self.flag = true;
        join(self.area, self.coords);
    }
}

struct Slot {
    generation: u16,
    obj: Option<Obj>,
}

impl Slot {
    const EMPTY: Self = Self { generation: 0, obj: None };
}

// =============================================================================
// Tree
// =============================================================================

/// Owner of every object: arena, hierarchy, dirty tracking and event log.
///
/// All calls happen on one thread (the UI loop); the tree holds no locks.
pub struct ObjTree {
    slots: [Slot; MAX_OBJECTS],
    screen: ObjHandle,
    next_order: u32,
    invalid_area: Option<Rectangle>,
    log: LogBuffer,
}

impl ObjTree {
    /// Create a tree whose screen covers `screen_area`.
    pub fn new(screen_area: Rectangle) -> Self {
        let mut slots = [const { Slot::EMPTY }; MAX_OBJECTS];
        slots[0].obj = Some(Obj {
            coords: screen_area,
            style: Style::SCREEN,
            parent: None,
            ext: Ext::Base,
            invalid: true,
            handler: &BaseSignal,
            order: 0,
        });

        Self {
            slots,
            screen: ObjHandle::new(0, 0),
            next_order: 1,
            invalid_area: Some(screen_area),
            log: LogBuffer::new(),
        }
    }

    /// The root object.
    #[inline]
    pub const fn screen(&self) -> ObjHandle { self.screen }

    /// Event log of this tree.
    #[inline]
    pub const fn log(&self) -> &LogBuffer { &self.log }

    /// Number of live objects, including the screen.
    pub fn len(&self) -> usize { self.slots.iter().filter(|s| s.obj.is_some()).count() }

    /// Always `false`: the screen cannot be deleted.
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Whether `handle` still refers to a live object.
    pub fn contains(
        &self,
        handle: ObjHandle,
    ) -> bool {
        self.obj(handle).is_ok()
    }

    /// Look up an object.
    pub fn obj(
        &self,
        handle: ObjHandle,
    ) -> Result<&Obj> {
        let slot = self.slots.get(handle.index()).ok_or(Error::StaleHandle)?;
        if slot.generation != handle.generation {
            return Err(Error::StaleHandle);
        }
        slot.obj.as_ref().ok_or(Error::StaleHandle)
    }

    fn obj_mut(
        &mut self,
        handle: ObjHandle,
    ) -> Result<&mut Obj> {
        let slot = self.slots.get_mut(handle.index()).ok_or(Error::StaleHandle)?;
        if slot.generation != handle.generation {
            return Err(Error::StaleHandle);
        }
        slot.obj.as_mut().ok_or(Error::StaleHandle)
    }

    /// Widget data of `handle` with a dirty marker and the log, borrowed together.
    pub(crate) fn ext_mut(
        &mut self,
        handle: ObjHandle,
    ) -> Result<ExtMut<'_>> {
        self.obj(handle)?;
        let Self {
            slots,
            invalid_area,
            log,
            ..
        } = self;
        let obj = slots[handle.index()].obj.as_mut().ok_or(Error::StaleHandle)?;

        Ok(ExtMut {
            ext: &mut obj.ext,
            dirty: Dirty {
                flag: &mut obj.invalid,
                coords: obj.coords,
                area: invalid_area,
            },
            log,
            handle,
        })
    }

    // -------------------------------------------------------------------------
    // Creation / deletion
    // -------------------------------------------------------------------------

    /// Create a plain object under `parent`, optionally copying `copy`'s
    /// geometry and style.
    pub fn create_obj(
        &mut self,
        parent: ObjHandle,
        copy: Option<ObjHandle>,
    ) -> Result<ObjHandle> {
        let size = Size::new(DEFAULT_OBJ_SIZE, DEFAULT_OBJ_SIZE);
        self.insert(parent, &BaseSignal, Ext::Base, Style::PRETTY, size, copy)
    }

    /// Allocate a slot and attach a new object to `parent`.
    ///
    /// New objects sit at the parent's top-left corner. With `copy`, the
    /// size, style and parent-relative position of the source are taken over
    /// instead. Fails without side effects if the arena is full.
    pub(crate) fn insert(
        &mut self,
        parent: ObjHandle,
        handler: &'static dyn SignalHandler,
        ext: Ext,
        style: Style,
        size: Size,
        copy: Option<ObjHandle>,
    ) -> Result<ObjHandle> {
        let parent_origin = self.obj(parent)?.coords.top_left;

        let (offset, size, style) = match copy {
            Some(src) => {
                let src_obj = self.obj(src)?;
                let src_origin = match src_obj.parent {
                    Some(p) => self.obj(p)?.coords.top_left,
                    None => Point::zero(),
                };
                (src_obj.coords.top_left - src_origin, src_obj.coords.size, src_obj.style)
            }
            None => (Point::zero(), size, style),
        };

        let index = self
            .slots
            .iter()
            .position(|s| s.obj.is_none())
            .ok_or(Error::OutOfObjects)?;

        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        let slot = &mut self.slots[index];
        slot.obj = Some(Obj {
            coords: Rectangle::new(parent_origin + offset, size),
            style,
            parent: Some(parent),
            ext,
            invalid: false,
            handler,
            order,
        });
        let handle = ObjHandle::new(index as u16, slot.generation);

        self.invalidate(handle)?;
        self.dispatch(parent, Signal::ChildChanged)?;

        let kind = self.type_chain(handle)?.kind().unwrap_or("?");
        log_info!(self.log, "{} #{} created", kind, index);

        Ok(handle)
    }

    /// Delete an object and all of its descendants.
    ///
    /// Children go first. Each object receives `Cleanup` before its slot is
    /// freed; its area is invalidated and the parent is notified.
    pub fn delete(
        &mut self,
        handle: ObjHandle,
    ) -> Result<()> {
        if handle == self.screen {
            return Err(Error::ScreenDeletion);
        }
        let parent = self.obj(handle)?.parent;

        self.delete_subtree(handle)?;

        if let Some(parent) = parent {
            self.dispatch(parent, Signal::ChildChanged)?;
        }
        Ok(())
    }

    fn delete_subtree(
        &mut self,
        handle: ObjHandle,
    ) -> Result<()> {
        for child in self.children(handle)? {
            self.delete_subtree(child)?;
        }

        self.invalidate(handle)?;
        let validity = self.dispatch(handle, Signal::Cleanup)?;

        let slot = &mut self.slots[handle.index()];
        slot.obj = None;
        slot.generation = slot.generation.wrapping_add(1);

        log_info!(
            self.log,
            "#{} deleted ({})",
            handle.index(),
            if validity.is_valid() { "kept" } else { "released" }
        );
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Hierarchy
    // -------------------------------------------------------------------------

    /// Parent of `handle` (`None` for the screen).
    pub fn parent(
        &self,
        handle: ObjHandle,
    ) -> Result<Option<ObjHandle>> {
        Ok(self.obj(handle)?.parent)
    }

    /// Children of `handle` in creation order.
    pub fn children(
        &self,
        handle: ObjHandle,
    ) -> Result<Children> {
        self.obj(handle)?;

        let mut found: Vec<(u32, ObjHandle), MAX_OBJECTS> = Vec::new();
        for (index, slot) in self.slots.iter().enumerate() {
            let Some(obj) = &slot.obj else {
                continue;
            };
            if obj.parent == Some(handle) {
                found.push((obj.order, ObjHandle::new(index as u16, slot.generation))).ok();
            }
        }
        found.sort_unstable_by_key(|(order, _)| *order);

        Ok(found.into_iter().map(|(_, h)| h).collect())
    }

    /// Number of direct children.
    pub fn child_count(
        &self,
        handle: ObjHandle,
    ) -> Result<usize> {
        Ok(self.children(handle)?.len())
    }

    // -------------------------------------------------------------------------
    // Geometry / style
    // -------------------------------------------------------------------------

    /// Absolute coordinates of `handle`.
    pub fn coords(
        &self,
        handle: ObjHandle,
    ) -> Result<Rectangle> {
        Ok(self.obj(handle)?.coords)
    }

    /// Move `handle` to `pos`, relative to its parent. Descendants move along.
    pub fn set_pos(
        &mut self,
        handle: ObjHandle,
        pos: Point,
    ) -> Result<()> {
        let origin = match self.obj(handle)?.parent {
            Some(p) => self.obj(p)?.coords.top_left,
            None => Point::zero(),
        };
        let delta = origin + pos - self.obj(handle)?.coords.top_left;
        if delta == Point::zero() {
            return Ok(());
        }
        self.shift(handle, delta)
    }

    fn shift(
        &mut self,
        handle: ObjHandle,
        delta: Point,
    ) -> Result<()> {
        self.invalidate(handle)?;
        let old = self.obj(handle)?.coords;
        self.obj_mut(handle)?.coords = old.translate(delta);
        self.invalidate(handle)?;
        self.dispatch(handle, Signal::CoordsChanged(old))?;

        for child in self.children(handle)? {
            self.shift(child, delta)?;
        }
        Ok(())
    }

    /// Resize `handle`, keeping its top-left corner.
    pub fn set_size(
        &mut self,
        handle: ObjHandle,
        size: Size,
    ) -> Result<()> {
        let old = self.obj(handle)?.coords;
        if old.size == size {
            return Ok(());
        }
        self.invalidate(handle)?;
        self.obj_mut(handle)?.coords = Rectangle::new(old.top_left, size);
        self.invalidate(handle)?;
        self.dispatch(handle, Signal::CoordsChanged(old))?;
        Ok(())
    }

    /// Style of `handle`.
    pub fn style(
        &self,
        handle: ObjHandle,
    ) -> Result<Style> {
        Ok(self.obj(handle)?.style)
    }

    /// Replace the style of `handle` and schedule a redraw.
    pub fn set_style(
        &mut self,
        handle: ObjHandle,
        style: Style,
    ) -> Result<()> {
        self.obj_mut(handle)?.style = style;
        self.dispatch(handle, Signal::StyleChanged)?;
        self.invalidate(handle)?;
        log_debug!(self.log, "#{} style changed", handle.index());
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Signals
    // -------------------------------------------------------------------------

    /// Deliver `signal` to the handler registered for `handle`.
    ///
    /// `Cleanup` is routed through [`delete`](Self::delete) so the slot and
    /// the descendants are released together; it always reports `Invalid`.
    pub fn signal(
        &mut self,
        handle: ObjHandle,
        signal: Signal<'_>,
    ) -> Result<Validity> {
        if let Signal::Cleanup = signal {
            self.delete(handle)?;
            return Ok(Validity::Invalid);
        }
        self.dispatch(handle, signal)
    }

    fn dispatch(
        &mut self,
        handle: ObjHandle,
        signal: Signal<'_>,
    ) -> Result<Validity> {
        let obj = self.obj_mut(handle)?;
        let handler = obj.handler;
        Ok(handler.signal(obj, signal))
    }

    /// Type names of `handle`, most derived first.
    pub fn type_chain(
        &mut self,
        handle: ObjHandle,
    ) -> Result<TypeChain> {
        let mut chain = TypeChain::new();
        let _ = self.dispatch(handle, Signal::GetType(&mut chain))?;
        Ok(chain)
    }

    // -------------------------------------------------------------------------
    // Invalidation / refresh
    // -------------------------------------------------------------------------

    /// Schedule `handle` for redraw.
    pub fn invalidate(
        &mut self,
        handle: ObjHandle,
    ) -> Result<()> {
        let obj = self.obj_mut(handle)?;
        obj.invalid = true;
        let coords = obj.coords;
        join(&mut self.invalid_area, coords);
        Ok(())
    }

    /// Whether `handle` changed since the last refresh.
    pub fn is_invalid(
        &self,
        handle: ObjHandle,
    ) -> Result<bool> {
        Ok(self.obj(handle)?.invalid)
    }

    /// Whether anything waits to be redrawn.
    pub fn is_dirty(&self) -> bool { self.invalid_area.is_some() }

    /// Take the dirty area and clear every object's dirty flag without drawing.
    pub fn take_invalid_area(&mut self) -> Option<Rectangle> {
        for obj in self.slots.iter_mut().filter_map(|s| s.obj.as_mut()) {
            obj.invalid = false;
        }
        self.invalid_area.take()
    }

    /// Redraw every object overlapping the dirty area, in tree order.
    ///
    /// The painter is clipped to the dirty area for the whole pass.
    ///
    /// Returns the number of objects drawn (0 when nothing was dirty).
    pub fn refresh(
        &mut self,
        painter: &mut dyn Painter,
    ) -> Result<usize> {
        let Some(area) = self.take_invalid_area() else {
            return Ok(0);
        };

        painter.set_clip(area);
        let mut drawn = 0;
        self.draw_subtree(self.screen, area, painter, &mut drawn)?;
        log_trace!(self.log, "refresh: {} drawn", drawn);
        Ok(drawn)
    }

    fn draw_subtree(
        &mut self,
        handle: ObjHandle,
        area: Rectangle,
        painter: &mut dyn Painter,
        drawn: &mut usize,
    ) -> Result<()> {
        let coords = self.obj(handle)?.coords;
        if !overlaps(coords, area) {
            return Ok(());
        }

        let _ = self.dispatch(handle, Signal::DrawMain(&mut *painter))?;
        *drawn += 1;

        for child in self.children(handle)? {
            self.draw_subtree(child, area, painter, drawn)?;
        }
        Ok(())
    }
}

// =============================================================================
// Area Helpers
// =============================================================================

/// Grow `area` to also cover `rect`. Empty rectangles are ignored.
fn join(
    area: &mut Option<Rectangle>,
    rect: Rectangle,
) {
    let Some(rect_br) = rect.bottom_right() else {
        return;
    };

    *area = Some(match area.and_then(|a| a.bottom_right().map(|br| (a.top_left, br))) {
        Some((tl, br)) => Rectangle::with_corners(
            Point::new(tl.x.min(rect.top_left.x), tl.y.min(rect.top_left.y)),
            Point::new(br.x.max(rect_br.x), br.y.max(rect_br.y)),
        ),
        None => rect,
    });
}

fn overlaps(
    a: Rectangle,
    b: Rectangle,
) -> bool {
    !a.intersection(&b).is_zero_sized()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Recorder;
    use crate::log_buffer::LogLevel;

    fn screen_area() -> Rectangle { Rectangle::new(Point::zero(), Size::new(320, 240)) }

    #[test]
    fn test_new_tree_has_screen() {
        let tree = ObjTree::new(screen_area());
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.parent(tree.screen()), Ok(None));
        assert!(tree.is_dirty(), "first frame should draw the screen");
    }

    #[test]
    fn test_create_attaches_to_parent() {
        let mut tree = ObjTree::new(screen_area());
        let screen = tree.screen();
        let a = tree.create_obj(screen, None).unwrap();
        let b = tree.create_obj(screen, None).unwrap();
        let c = tree.create_obj(a, None).unwrap();

        assert_eq!(tree.children(screen).unwrap().as_slice(), [a, b]);
        assert_eq!(tree.children(a).unwrap().as_slice(), [c]);
        assert_eq!(tree.parent(c), Ok(Some(a)));
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn test_copy_takes_geometry_and_style() {
        let mut tree = ObjTree::new(screen_area());
        let screen = tree.screen();
        let src = tree.create_obj(screen, None).unwrap();
        tree.set_pos(src, Point::new(10, 20)).unwrap();
        tree.set_size(src, Size::new(30, 15)).unwrap();
        tree.set_style(src, Style::METER).unwrap();

        let copy = tree.create_obj(screen, Some(src)).unwrap();
        assert_eq!(tree.coords(copy), tree.coords(src));
        assert_eq!(tree.style(copy), Ok(Style::METER));
    }

    #[test]
    fn test_delete_removes_subtree_and_stales_handles() {
        let mut tree = ObjTree::new(screen_area());
        let screen = tree.screen();
        let a = tree.create_obj(screen, None).unwrap();
        let child = tree.create_obj(a, None).unwrap();

        tree.delete(a).unwrap();
        assert_eq!(tree.len(), 1);
        assert!(!tree.contains(a));
        assert!(!tree.contains(child));
        assert_eq!(tree.coords(child), Err(Error::StaleHandle));

        // Slot reuse does not revive the old handle
        let fresh = tree.create_obj(screen, None).unwrap();
        assert_eq!(fresh.index(), a.index());
        assert_ne!(fresh, a);
        assert!(!tree.contains(a));
    }

    #[test]
    fn test_screen_cannot_be_deleted() {
        let mut tree = ObjTree::new(screen_area());
        assert_eq!(tree.delete(tree.screen()), Err(Error::ScreenDeletion));
    }

    #[test]
    fn test_cleanup_signal_deletes() {
        let mut tree = ObjTree::new(screen_area());
        let a = tree.create_obj(tree.screen(), None).unwrap();
        assert_eq!(tree.signal(a, Signal::Cleanup), Ok(Validity::Invalid));
        assert!(!tree.contains(a));
    }

    #[test]
    fn test_out_of_objects_is_atomic() {
        let mut tree = ObjTree::new(screen_area());
        let screen = tree.screen();
        for _ in 1..MAX_OBJECTS {
            tree.create_obj(screen, None).unwrap();
        }
        assert_eq!(tree.create_obj(screen, None), Err(Error::OutOfObjects));
        assert_eq!(tree.len(), MAX_OBJECTS);
        assert_eq!(tree.child_count(screen), Ok(MAX_OBJECTS - 1));
    }

    #[test]
    fn test_set_pos_moves_descendants() {
        let mut tree = ObjTree::new(screen_area());
        let screen = tree.screen();
        let panel = tree.create_obj(screen, None).unwrap();
        let inner = tree.create_obj(panel, None).unwrap();
        tree.set_pos(inner, Point::new(2, 3)).unwrap();

        tree.set_pos(panel, Point::new(50, 60)).unwrap();
        assert_eq!(tree.coords(panel).unwrap().top_left, Point::new(50, 60));
        assert_eq!(tree.coords(inner).unwrap().top_left, Point::new(52, 63));
    }

    #[test]
    fn test_invalidation_joins_areas() {
        let mut tree = ObjTree::new(screen_area());
        let screen = tree.screen();
        let a = tree.create_obj(screen, None).unwrap();
        let b = tree.create_obj(screen, None).unwrap();
        tree.set_pos(a, Point::new(10, 10)).unwrap();
        tree.set_pos(b, Point::new(100, 50)).unwrap();
        tree.take_invalid_area();

        tree.invalidate(a).unwrap();
        tree.invalidate(b).unwrap();
        assert!(tree.is_invalid(a).unwrap());

        let area = tree.take_invalid_area().unwrap();
        assert_eq!(area.top_left, Point::new(10, 10));
        assert_eq!(area.bottom_right(), Some(Point::new(139, 89)));
        assert!(!tree.is_invalid(a).unwrap());
        assert!(!tree.is_dirty());
    }

    #[test]
    fn test_refresh_draws_dirty_objects_once() {
        let mut tree = ObjTree::new(screen_area());
        let screen = tree.screen();
        let a = tree.create_obj(screen, None).unwrap();
        tree.set_pos(a, Point::new(200, 200)).unwrap();

        let mut rec = Recorder::default();
        assert_eq!(tree.refresh(&mut rec), Ok(2), "screen and panel on first frame");
        assert_eq!(tree.refresh(&mut rec), Ok(0), "nothing dirty afterwards");

        // Only the panel's corner of the screen is dirty: both overlap it
        tree.invalidate(a).unwrap();
        assert_eq!(tree.refresh(&mut rec), Ok(2));
    }

    #[test]
    fn test_refresh_skips_objects_outside_dirty_area() {
        let mut tree = ObjTree::new(screen_area());
        let screen = tree.screen();
        let a = tree.create_obj(screen, None).unwrap();
        let b = tree.create_obj(screen, None).unwrap();
        tree.set_pos(b, Point::new(200, 150)).unwrap();
        tree.take_invalid_area();

        tree.invalidate(a).unwrap();
        let mut rec = Recorder::default();
        assert_eq!(tree.refresh(&mut rec), Ok(2), "screen and a, not b");
    }

    #[test]
    fn test_type_chain_of_plain_object() {
        let mut tree = ObjTree::new(screen_area());
        let a = tree.create_obj(tree.screen(), None).unwrap();
        assert_eq!(tree.type_chain(a).unwrap().as_slice(), ["obj"]);
    }

    #[test]
    fn test_lifecycle_is_logged() {
        let mut tree = ObjTree::new(screen_area());
        let a = tree.create_obj(tree.screen(), None).unwrap();
        tree.delete(a).unwrap();

        let messages: std::vec::Vec<_> = tree.log().iter().map(|e| (e.level, e.message.as_str())).collect();
        assert!(messages.contains(&(LogLevel::Info, "obj #1 created")));
        assert!(messages.contains(&(LogLevel::Info, "#1 deleted (released)")));
    }

    #[test]
    fn test_stale_handle_everywhere() {
        let mut tree = ObjTree::new(screen_area());
        let a = tree.create_obj(tree.screen(), None).unwrap();
        tree.delete(a).unwrap();

        assert_eq!(tree.set_pos(a, Point::zero()), Err(Error::StaleHandle));
        assert_eq!(tree.invalidate(a), Err(Error::StaleHandle));
        assert_eq!(tree.delete(a), Err(Error::StaleHandle));
        assert!(tree.create_obj(a, None).is_err());
    }
}
