//! The [`Owner`] trait: the seam between a sequence and the reclamation
//! mechanism of its referents.
//!
//! A sequence never decides when a referent dies. It only needs two
//! primitives from whoever does: "make a non-owning handle" and
//! "dereference the handle, or report that the referent is gone". Both
//! `Rc` and `Arc` provide them natively.

use std::rc::{self, Rc};
use std::sync::{self, Arc};

/// A strong, owning pointer whose referent can be observed through a
/// non-owning handle.
///
/// Implementations must guarantee that holding a [`Owner::Handle`] never
/// keeps the referent alive, and that [`Owner::upgrade`] either returns a
/// fully valid owner or `None`, never a partially destroyed value.
pub trait Owner: Clone {
    /// The non-owning handle type.
    type Handle: Clone;

    /// Create a non-owning handle to `this`'s referent.
    fn downgrade(this: &Self) -> Self::Handle;

    /// Recover an owning pointer if the referent is still alive.
    fn upgrade(handle: &Self::Handle) -> Option<Self>;

    /// Whether the referent is still alive, without producing an owner.
    fn is_alive(handle: &Self::Handle) -> bool;

    /// Whether `handle` observes the same live referent as `this`.
    fn points_to(handle: &Self::Handle, this: &Self) -> bool;
}

impl<T: ?Sized> Owner for Rc<T> {
    type Handle = rc::Weak<T>;

    fn downgrade(this: &Self) -> rc::Weak<T> {
        Rc::downgrade(this)
    }

    fn upgrade(handle: &rc::Weak<T>) -> Option<Self> {
        handle.upgrade()
    }

    fn is_alive(handle: &rc::Weak<T>) -> bool {
        handle.strong_count() > 0
    }

    fn points_to(handle: &rc::Weak<T>, this: &Self) -> bool {
        // The allocation outlives the handle, so a live address match cannot
        // be a reused allocation.
        Self::is_alive(handle) && std::ptr::addr_eq(handle.as_ptr(), Rc::as_ptr(this))
    }
}

impl<T: ?Sized> Owner for Arc<T> {
    type Handle = sync::Weak<T>;

    fn downgrade(this: &Self) -> sync::Weak<T> {
        Arc::downgrade(this)
    }

    fn upgrade(handle: &sync::Weak<T>) -> Option<Self> {
        handle.upgrade()
    }

    fn is_alive(handle: &sync::Weak<T>) -> bool {
        handle.strong_count() > 0
    }

    fn points_to(handle: &sync::Weak<T>, this: &Self) -> bool {
        Self::is_alive(handle) && std::ptr::addr_eq(handle.as_ptr(), Arc::as_ptr(this))
    }
}
