//! Lazy iteration over a sequence's slots.

use std::iter::FusedIterator;
use std::slice;

use crate::owner::Owner;
use crate::slot::WeakSlot;

/// Iterator over the slots of a [`WeakSequence`](crate::WeakSequence).
///
/// Yields one `Option<P>` per slot in index order. Each slot is upgraded
/// when it is reached, not when the iterator is created, so a referent
/// reclaimed mid-iteration reads as `None` from that point on. Calling
/// `iter()` again starts a fresh pass that re-evaluates every slot.
pub struct Iter<'a, P: Owner> {
    slots: slice::Iter<'a, WeakSlot<P>>,
}

impl<'a, P: Owner> Iter<'a, P> {
    pub(crate) fn new(slots: &'a [WeakSlot<P>]) -> Self {
        Self {
            slots: slots.iter(),
        }
    }
}

impl<P: Owner> Iterator for Iter<'_, P> {
    type Item = Option<P>;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().map(WeakSlot::upgrade)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.slots.nth(n).map(WeakSlot::upgrade)
    }
}

impl<P: Owner> DoubleEndedIterator for Iter<'_, P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().map(WeakSlot::upgrade)
    }
}

impl<P: Owner> ExactSizeIterator for Iter<'_, P> {}

impl<P: Owner> FusedIterator for Iter<'_, P> {}

impl<P: Owner> Clone for Iter<'_, P> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn upgrades_each_slot_when_reached() {
        let a = Rc::new(1);
        let b = Rc::new(2);
        let slots = vec![WeakSlot::new(&a), WeakSlot::new(&b)];
        let mut iter = Iter::new(&slots);
        assert_eq!(iter.next(), Some(Some(Rc::clone(&a))));
        drop(b);
        assert_eq!(iter.next(), Some(None));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn reports_exact_length() {
        let slots: Vec<WeakSlot<Rc<u8>>> = vec![WeakSlot::empty(); 3];
        let mut iter = Iter::new(&slots);
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
    }

    #[test]
    fn iterates_backwards() {
        let a = Rc::new('a');
        let slots = vec![WeakSlot::empty(), WeakSlot::new(&a)];
        let rev: Vec<_> = Iter::new(&slots).rev().collect();
        assert_eq!(rev, vec![Some(Rc::clone(&a)), None]);
    }
}
