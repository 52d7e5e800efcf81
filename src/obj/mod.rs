//! Object system: handles, the object tree and signal dispatch.
//!
//! - [`ObjHandle`]: generational reference to an object
//! - [`ObjTree`]: arena, hierarchy, dirty tracking, refresh
//! - [`Signal`] / [`SignalHandler`]: per-kind event handling with explicit
//!   forwarding to the ancestor kind

mod handle;
mod signal;
mod tree;

pub use handle::ObjHandle;
pub use signal::{Signal, SignalHandler, TypeChain, Validity};
pub(crate) use tree::ExtMut;
pub use tree::{Children, Dirty, Ext, Obj, ObjTree};
