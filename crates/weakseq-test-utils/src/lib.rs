//! Test fixtures for weakseq development.
//!
//! Provides a [`Listener`] referent with observable destruction, so tests
//! can assert both what a sequence reads and that it never kept anything
//! alive.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Counts how many [`Listener`]s sharing it have been dropped.
///
/// Cloning shares the underlying counter.
#[derive(Clone, Debug, Default)]
pub struct DropCounter {
    dropped: Arc<AtomicUsize>,
}

impl DropCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of drops recorded so far.
    pub fn count(&self) -> usize {
        self.dropped.load(Ordering::SeqCst)
    }
}

/// A named referent that records its own destruction.
///
/// `Display` prints the name, which is what a sequence renders for a live
/// slot.
#[derive(Debug)]
pub struct Listener {
    pub name: String,
    counter: DropCounter,
}

impl Listener {
    pub fn new(name: impl Into<String>, counter: &DropCounter) -> Self {
        Self {
            name: name.into(),
            counter: counter.clone(),
        }
    }
}

impl PartialEq for Listener {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.counter.dropped.fetch_add(1, Ordering::SeqCst);
    }
}

/// Build an `Rc`-owned listener.
pub fn listener(name: &str, counter: &DropCounter) -> Rc<Listener> {
    Rc::new(Listener::new(name, counter))
}

/// Build an `Arc`-owned listener.
pub fn shared_listener(name: &str, counter: &DropCounter) -> Arc<Listener> {
    Arc::new(Listener::new(name, counter))
}

/// Build `n` `Rc`-owned listeners named `l0`, `l1`, ...
pub fn listeners(n: usize, counter: &DropCounter) -> Vec<Rc<Listener>> {
    (0..n).map(|i| listener(&format!("l{i}"), counter)).collect()
}
