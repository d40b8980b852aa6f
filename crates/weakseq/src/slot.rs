//! A single non-owning slot.
//!
//! A [`WeakSlot`] stores either a non-owning handle or nothing. Liveness is
//! never cached: every read goes back to the handle.

use std::fmt;

use crate::config::SequenceConfig;
use crate::owner::Owner;

/// One position in a [`WeakSequence`](crate::WeakSequence).
///
/// A slot constructed empty and a slot whose referent has been reclaimed
/// read the same way: [`WeakSlot::upgrade`] returns `None`.
pub struct WeakSlot<P: Owner> {
    handle: Option<P::Handle>,
}

impl<P: Owner> WeakSlot<P> {
    /// Create a slot that observes `item` without owning it.
    pub fn new(item: &P) -> Self {
        Self {
            handle: Some(P::downgrade(item)),
        }
    }

    /// Create an explicitly empty slot.
    pub fn empty() -> Self {
        Self { handle: None }
    }

    /// Create a slot from an optional referent.
    pub fn from_option(item: Option<&P>) -> Self {
        item.map_or_else(Self::empty, Self::new)
    }

    /// The referent, if some owner elsewhere still keeps it alive.
    ///
    /// The returned pointer is a new owning reference held by the caller;
    /// the slot itself keeps nothing.
    pub fn upgrade(&self) -> Option<P> {
        self.handle.as_ref().and_then(P::upgrade)
    }

    /// Whether the referent is alive right now.
    pub fn is_live(&self) -> bool {
        self.handle.as_ref().is_some_and(P::is_alive)
    }

    /// Whether this slot currently observes `item`.
    pub fn points_to(&self, item: &P) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| P::points_to(handle, item))
    }

    /// Write the referent's text, or `absent_token` if there is none.
    pub(crate) fn render_into(
        &self,
        f: &mut fmt::Formatter<'_>,
        absent_token: &str,
    ) -> fmt::Result
    where
        P: fmt::Display,
    {
        match self.upgrade() {
            Some(item) => write!(f, "{item}"),
            None => f.write_str(absent_token),
        }
    }
}

impl<P: Owner> Clone for WeakSlot<P> {
    fn clone(&self) -> Self {
        Self {
            handle: self.handle.clone(),
        }
    }
}

impl<P: Owner> Default for WeakSlot<P> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<P: Owner + fmt::Display> fmt::Display for WeakSlot<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render_into(f, SequenceConfig::DEFAULT_ABSENT_TOKEN)
    }
}

impl<P: Owner + fmt::Debug> fmt::Debug for WeakSlot<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WeakSlot").field(&self.upgrade()).finish()
    }
}
