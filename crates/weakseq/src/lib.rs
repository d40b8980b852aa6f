//! Ordered sequences of non-owning references.
//!
//! A [`WeakSequence`] holds weak handles to `Rc`- or `Arc`-managed objects.
//! Reading a slot yields the object if some owner elsewhere still keeps it
//! alive, or `None` once the last owner has let go. Observer and listener
//! lists built on it never need manual deregistration and never hold their
//! entries alive.
//!
//! # Architecture
//!
//! ```text
//! WeakSequence<P: Owner>
//! ├── SmallVec<[WeakSlot<P>; 4]>   (insertion order, never compacted)
//! │   └── WeakSlot → Option<P::Handle>   (liveness recomputed per read)
//! └── absent token                 (from SequenceConfig, used by render)
//! ```
//!
//! [`Owner`] is the seam to the reclamation mechanism. It is implemented
//! for `Rc<T>` and `Arc<T>`; the sequence only ever calls `downgrade` and
//! `upgrade` through it.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use weakseq::RcWeakSequence;
//!
//! let a = Rc::new("a");
//! let b = Rc::new("b");
//! let mut seq = RcWeakSequence::from_list([Some(&a), None]);
//! seq.push(&b);
//! assert_eq!(seq.render(), "[a, nil, b]");
//!
//! drop(b);
//! assert_eq!(seq.len(), 3);
//! assert!(seq.get(2).is_none());
//! assert_eq!(seq.render(), "[a, nil, nil]");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod iter;
pub mod owner;
pub mod sequence;
pub mod slot;

// Public re-exports for the primary API surface.
pub use config::SequenceConfig;
pub use error::SequenceError;
pub use iter::Iter;
pub use owner::Owner;
pub use sequence::{ArcWeakSequence, RcWeakSequence, WeakSequence};
pub use slot::WeakSlot;
