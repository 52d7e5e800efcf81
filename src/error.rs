//! Error type shared by the object system and the widgets.
//!
//! Range violations on needle values are not errors: they are clamped
//! silently. Everything here leaves the widget untouched when returned.

use thiserror::Error;

/// Failures reported by [`ObjTree`](crate::obj::ObjTree) and the widget APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The handle refers to an object that was deleted (or never existed).
    #[error("stale object handle")]
    StaleHandle,

    /// The object exists but is not the widget kind the call needs.
    #[error("object is not a {expected}")]
    WrongKind { expected: &'static str },

    /// The object arena is full.
    #[error("object capacity exhausted")]
    OutOfObjects,

    /// More needles were requested than a gauge can store.
    #[error("{requested} needles requested, capacity is {capacity}")]
    TooManyNeedles { requested: u8, capacity: usize },

    /// The color list does not supply one color per needle.
    #[error("{colors} colors given for {needles} needles")]
    ColorCount { needles: u8, colors: usize },

    /// A per-needle call named a needle the gauge does not have.
    #[error("needle {needle_id} out of range (count {needle_count})")]
    NeedleOutOfRange { needle_id: u8, needle_count: u8 },

    /// The screen is the root of the tree and cannot be deleted.
    #[error("the screen cannot be deleted")]
    ScreenDeletion,
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, Error>;
