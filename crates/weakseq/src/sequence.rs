//! The [`WeakSequence`] container.
//!
//! An ordered, growable list of [`WeakSlot`]s. The sequence owns its slots
//! but none of the referents behind them: object lifetime is governed
//! entirely by strong pointers held elsewhere. When the last of those is
//! dropped the slot reads as `None` from then on; the sequence is not told
//! and does nothing about it.
//!
//! Slots are never removed or compacted. `len()` grows through
//! [`push`](WeakSequence::push) and `extend`, and stays fixed under
//! [`set`](WeakSequence::set), so an index handed out once keeps naming
//! the same position for the sequence's whole life.

use std::fmt;
use std::ops::Range;
use std::rc::Rc;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::config::SequenceConfig;
use crate::error::SequenceError;
use crate::iter::Iter;
use crate::owner::Owner;
use crate::slot::WeakSlot;

/// Slot storage. Four inline slots cover typical observer lists.
type Slots<P> = SmallVec<[WeakSlot<P>; 4]>;

/// A sequence of non-owning references to `Rc`-managed objects.
pub type RcWeakSequence<T> = WeakSequence<Rc<T>>;

/// A sequence of non-owning references to `Arc`-managed objects.
pub type ArcWeakSequence<T> = WeakSequence<Arc<T>>;

/// An ordered sequence of non-owning references.
///
/// `P` is the owning pointer type of the referents (`Rc<T>` or `Arc<T>`).
/// Every read hands back `Option<P>`: a fresh owner if the referent is
/// still alive, `None` otherwise. Two reads of the same index may disagree
/// if the referent was reclaimed in between.
///
/// The panicking accessors ([`get`](Self::get), [`set`](Self::set),
/// [`is_live`](Self::is_live), [`clear_slot`](Self::clear_slot)) treat an
/// out-of-range index as a precondition violation, like slice indexing.
/// The `try_` variants report it as [`SequenceError::IndexOutOfRange`].
pub struct WeakSequence<P: Owner> {
    slots: Slots<P>,
    absent_token: &'static str,
}

impl<P: Owner> WeakSequence<P> {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::with_config(SequenceConfig::default())
    }

    /// Create an empty sequence with room for `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(SequenceConfig::new().with_initial_capacity(capacity))
    }

    /// Create an empty sequence from a config.
    pub fn with_config(config: SequenceConfig) -> Self {
        Self {
            slots: SmallVec::with_capacity(config.initial_capacity),
            absent_token: config.absent_token,
        }
    }

    /// Create a sequence with one slot per entry of `items`, in order.
    ///
    /// A `None` entry becomes an explicitly empty slot. None of the
    /// referents gain an owner.
    pub fn from_list<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a P>>,
        P: 'a,
    {
        let mut seq = Self::new();
        seq.slots.extend(items.into_iter().map(WeakSlot::from_option));
        seq
    }

    /// Append a slot observing `item`.
    ///
    /// The new slot is last and live for as long as the caller (or anyone
    /// else) keeps `item` alive.
    pub fn push(&mut self, item: &P) {
        self.slots.push(WeakSlot::new(item));
    }

    /// Append an explicitly empty slot.
    pub fn push_empty(&mut self) {
        self.slots.push(WeakSlot::empty());
    }

    /// Read slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[track_caller]
    pub fn get(&self, index: usize) -> Option<P> {
        self.slot_or_panic(index).upgrade()
    }

    /// Read slot `index`, reporting an out-of-range index as an error.
    pub fn try_get(&self, index: usize) -> Result<Option<P>, SequenceError> {
        self.checked_slot(index)
            .inspect_err(|err| log::debug!("rejected slot read: {err}"))
            .map(WeakSlot::upgrade)
    }

    /// Replace slot `index` with a handle to `item`, or an empty handle.
    ///
    /// Only slot `index` changes; `len()` is unaffected.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[track_caller]
    pub fn set(&mut self, index: usize, item: Option<&P>) {
        if let Err(err) = self.replace(index, item) {
            panic!("{err}");
        }
    }

    /// Replace slot `index`, reporting an out-of-range index as an error.
    pub fn try_set(&mut self, index: usize, item: Option<&P>) -> Result<(), SequenceError> {
        self.replace(index, item).inspect_err(|err| {
            log::debug!("rejected slot write: {err}");
        })
    }

    /// Empty slot `index`. Equivalent to `set(index, None)`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[track_caller]
    pub fn clear_slot(&mut self, index: usize) {
        self.set(index, None);
    }

    /// Whether slot `index` is live, without handing out an owner.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[track_caller]
    pub fn is_live(&self, index: usize) -> bool {
        self.slot_or_panic(index).is_live()
    }

    /// Number of slots, live or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the sequence has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Valid indices: `0..len()`.
    pub fn bounds(&self) -> Range<usize> {
        0..self.slots.len()
    }

    /// First valid index. Always 0.
    pub fn start_index(&self) -> usize {
        0
    }

    /// One past the last valid index. Equal to `len()`.
    pub fn end_index(&self) -> usize {
        self.slots.len()
    }

    /// The index following `index`.
    ///
    /// Only valid positions can be stepped from, so the result is at most
    /// `end_index()`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[track_caller]
    pub fn index_after(&self, index: usize) -> usize {
        self.slot_or_panic(index);
        index + 1
    }

    /// Number of slots allocated for, inline or on the heap.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// The referent of slot 0, or `None` if the sequence is empty or the
    /// slot is absent.
    pub fn first(&self) -> Option<P> {
        self.slots.first().and_then(WeakSlot::upgrade)
    }

    /// The referent of the last slot, or `None` if the sequence is empty
    /// or the slot is absent.
    pub fn last(&self) -> Option<P> {
        self.slots.last().and_then(WeakSlot::upgrade)
    }

    /// Iterate over every slot in index order, absent slots included.
    pub fn iter(&self) -> Iter<'_, P> {
        Iter::new(&self.slots)
    }

    /// Iterate over the referents that are alive when reached.
    pub fn iter_live(&self) -> impl Iterator<Item = P> + '_ {
        self.iter().flatten()
    }

    /// Number of slots live right now.
    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_live()).count()
    }

    /// Index of the first slot currently observing `item`.
    pub fn position(&self, item: &P) -> Option<usize> {
        self.slots.iter().position(|slot| slot.points_to(item))
    }

    /// Whether any slot currently observes `item`.
    pub fn contains(&self, item: &P) -> bool {
        self.position(item).is_some()
    }

    /// The textual form of every slot: `[a, nil, b]`.
    ///
    /// Live slots use the referent's `Display` text; absent slots use the
    /// configured absent token.
    pub fn render(&self) -> String
    where
        P: fmt::Display,
    {
        self.to_string()
    }

    fn checked_slot(&self, index: usize) -> Result<&WeakSlot<P>, SequenceError> {
        self.slots.get(index).ok_or(SequenceError::IndexOutOfRange {
            index,
            len: self.slots.len(),
        })
    }

    #[track_caller]
    fn slot_or_panic(&self, index: usize) -> &WeakSlot<P> {
        match self.checked_slot(index) {
            Ok(slot) => slot,
            Err(err) => panic!("{err}"),
        }
    }

    fn replace(&mut self, index: usize, item: Option<&P>) -> Result<(), SequenceError> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(SequenceError::IndexOutOfRange { index, len })?;
        *slot = WeakSlot::from_option(item);
        log::trace!(
            "slot {index} replaced with {} handle",
            if item.is_some() { "live" } else { "empty" }
        );
        Ok(())
    }
}

impl<P: Owner> Default for WeakSequence<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Owner> Clone for WeakSequence<P> {
    /// Copies the handles. The clone observes the same referents and, like
    /// the original, owns none of them.
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            absent_token: self.absent_token,
        }
    }
}

impl<P: Owner> From<Vec<Option<P>>> for WeakSequence<P> {
    fn from(items: Vec<Option<P>>) -> Self {
        items.into_iter().collect()
    }
}

impl<P: Owner> FromIterator<Option<P>> for WeakSequence<P> {
    /// Builds one slot per item. The owners passed in are dropped once
    /// downgraded, so a referent with no other owner reads as absent.
    fn from_iter<I: IntoIterator<Item = Option<P>>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

impl<'a, P: Owner + 'a> FromIterator<Option<&'a P>> for WeakSequence<P> {
    fn from_iter<I: IntoIterator<Item = Option<&'a P>>>(iter: I) -> Self {
        Self::from_list(iter)
    }
}

impl<P: Owner> Extend<Option<P>> for WeakSequence<P> {
    fn extend<I: IntoIterator<Item = Option<P>>>(&mut self, iter: I) {
        self.slots
            .extend(iter.into_iter().map(|item| WeakSlot::from_option(item.as_ref())));
    }
}

impl<'a, P: Owner + 'a> Extend<&'a P> for WeakSequence<P> {
    fn extend<I: IntoIterator<Item = &'a P>>(&mut self, iter: I) {
        self.slots.extend(iter.into_iter().map(WeakSlot::new));
    }
}

impl<'a, P: Owner> IntoIterator for &'a WeakSequence<P> {
    type Item = Option<P>;
    type IntoIter = Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<P: Owner + fmt::Display> fmt::Display for WeakSequence<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            slot.render_into(f, self.absent_token)?;
        }
        f.write_str("]")
    }
}

impl<P: Owner + fmt::Debug> fmt::Debug for WeakSequence<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
