//! Signals delivered to widget handlers.
//!
//! # Dispatch Contract
//!
//! The tree looks up the handler registered for an object and calls
//! [`SignalHandler::signal`]. A handler performs its own reaction and passes
//! the same signal on to its ancestor's handler, so every level of the type
//! chain sees it:
//!
//! | Signal | Derived widget | Ancestor |
//! |--------|----------------|----------|
//! | `DrawMain` | draws after the ancestor returns | draws first |
//! | `Cleanup` | releases its data first | releases after, reports `Invalid` |
//! | `GetType` | pushes its name first | pushes after |
//! | anything else | no action | forwarded unchanged |
//!
//! The return value tells the caller whether the object is still usable.

use embedded_graphics::primitives::Rectangle;
use heapless::Vec;

use super::tree::Obj;
use crate::config::MAX_TYPE_DEPTH;
use crate::draw::Painter;

/// Event delivered by the tree to an object's handler.
pub enum Signal<'a> {
    /// The object is being deleted; release widget data.
    Cleanup,
    /// Paint the object. Ancestors paint before descendants in the type chain.
    DrawMain(&'a mut dyn Painter),
    /// The object's style was replaced.
    StyleChanged,
    /// The object moved or resized; carries the previous coordinates.
    CoordsChanged(Rectangle),
    /// A child was added to or removed from the object.
    ChildChanged,
    /// Collect the type names of the object, most derived first.
    GetType(&'a mut TypeChain),
}

impl Signal<'_> {
    /// Short name for logging.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Cleanup => "cleanup",
            Self::DrawMain(_) => "draw",
            Self::StyleChanged => "style",
            Self::CoordsChanged(_) => "coords",
            Self::ChildChanged => "child",
            Self::GetType(_) => "get_type",
        }
    }
}

/// Whether the object survived a signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum Validity {
    /// The object is still alive.
    Valid,
    /// The object released itself; its handle must not be used again.
    Invalid,
}

impl Validity {
    /// `true` if the object is still alive.
    #[inline]
    pub const fn is_valid(self) -> bool { matches!(self, Self::Valid) }
}

/// Type names of an object, most derived first (`["gauge", "line_meter", "obj"]`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeChain {
    names: Vec<&'static str, MAX_TYPE_DEPTH>,
}

impl TypeChain {
    /// Create an empty chain.
    pub const fn new() -> Self { Self { names: Vec::new() } }

    /// Append a type name. Names past `MAX_TYPE_DEPTH` are dropped.
    pub fn push(
        &mut self,
        name: &'static str,
    ) {
        self.names.push(name).ok();
    }

    /// Most derived type name.
    pub fn kind(&self) -> Option<&'static str> { self.names.first().copied() }

    /// Whether any level of the chain is `name`.
    pub fn is(
        &self,
        name: &str,
    ) -> bool {
        self.names.iter().any(|n| *n == name)
    }

    /// All names, most derived first.
    pub fn as_slice(&self) -> &[&'static str] { &self.names }
}

/// Reaction of one widget kind to signals.
///
/// One zero-sized implementation exists per widget kind; the tree stores a
/// `&'static dyn SignalHandler` per object.
pub trait SignalHandler {
    /// React to `signal` and forward it to the ancestor's handler.
    fn signal(
        &self,
        obj: &mut Obj,
        signal: Signal<'_>,
    ) -> Validity;
}
