//! Generational object handles.

/// Copyable reference to an object in an [`ObjTree`](super::ObjTree).
///
/// The generation is bumped whenever a slot is freed, so a handle kept past
/// its object's deletion is detected as stale instead of aliasing whatever
/// object reuses the slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjHandle {
    pub(crate) index: u16,
    pub(crate) generation: u16,
}

impl ObjHandle {
    pub(crate) const fn new(
        index: u16,
        generation: u16,
    ) -> Self {
        Self { index, generation }
    }

    /// Arena slot of this handle.
    #[inline]
    pub const fn index(self) -> usize { self.index as usize }
}
