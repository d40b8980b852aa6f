use std::rc::Rc;

use weakseq::{RcWeakSequence, SequenceError, WeakSequence};
use weakseq_test_utils::{listener, listeners, shared_listener, DropCounter, Listener};

#[test]
fn appended_listener_goes_absent_when_its_owner_leaves_scope() {
    let counter = DropCounter::new();
    let mut seq: RcWeakSequence<Listener> = WeakSequence::new();

    let a = listener("a", &counter);
    seq.push(&a);
    {
        let b = listener("b", &counter);
        seq.push(&b);
    }

    assert_eq!(seq.len(), 2);
    assert!(Rc::ptr_eq(&seq.get(0).unwrap(), &a));
    assert!(seq.get(1).is_none());
    assert_eq!(counter.count(), 1);

    drop(a);
    assert!(seq.get(0).is_none());
    assert_eq!(seq.len(), 2);
    assert_eq!(counter.count(), 2);
}

#[test]
fn list_with_gap_renders_nil_between_names() {
    let counter = DropCounter::new();
    let a = listener("alpha", &counter);
    let b = listener("beta", &counter);
    let seq = RcWeakSequence::from_list([Some(&a), None, Some(&b)]);

    assert_eq!(seq.len(), 3);
    assert!(seq.get(1).is_none());
    assert_eq!(seq.render(), "[alpha, nil, beta]");
    assert_eq!(seq.to_string(), seq.render());
}

#[test]
fn dead_slots_are_never_compacted() {
    let counter = DropCounter::new();
    let mut owners = listeners(5, &counter);
    let seq: RcWeakSequence<Listener> = owners.iter().map(Some).collect();

    owners.remove(1);
    owners.remove(2);

    assert_eq!(seq.len(), 5);
    assert_eq!(seq.render(), "[l0, nil, l2, nil, l4]");
    assert_eq!(seq.live_count(), 3);
}

#[test]
fn notifying_live_listeners_skips_dead_ones() {
    let counter = DropCounter::new();
    let owners = listeners(4, &counter);
    let seq: RcWeakSequence<Listener> = owners.iter().map(Some).collect();
    let (even, _odd): (Vec<_>, Vec<_>) = owners
        .into_iter()
        .enumerate()
        .partition(|(i, _)| i % 2 == 0);
    drop(even);

    let notified: Vec<String> = seq.iter_live().map(|l| l.name.clone()).collect();
    assert_eq!(notified, ["l1", "l3"]);
}

#[test]
fn reads_never_extend_lifetime() {
    let counter = DropCounter::new();
    let a = listener("a", &counter);
    let seq = RcWeakSequence::from_list([Some(&a)]);

    for _ in 0..3 {
        let _ = seq.get(0);
        let _ = seq.first();
        let _ = seq.render();
        let _ = seq.iter().count();
    }
    assert_eq!(Rc::strong_count(&a), 1);

    drop(a);
    assert_eq!(counter.count(), 1);
    assert!(seq.first().is_none());
}

#[test]
fn restarting_iteration_observes_new_deaths() {
    let counter = DropCounter::new();
    let a = listener("a", &counter);
    let b = listener("b", &counter);
    let seq = RcWeakSequence::from_list([Some(&a), Some(&b)]);

    assert_eq!(seq.iter().flatten().count(), 2);
    drop(a);
    assert_eq!(seq.iter().flatten().count(), 1);
    drop(b);
    assert!(seq.iter().all(|item| item.is_none()));
}

#[test]
fn replacing_a_dead_slot_revives_the_position_only() {
    let counter = DropCounter::new();
    let a = listener("a", &counter);
    let mut seq = RcWeakSequence::from_list([Some(&listener("gone", &counter)), Some(&a)]);
    assert!(seq.get(0).is_none());

    let c = listener("c", &counter);
    seq.set(0, Some(&c));
    assert_eq!(seq.render(), "[c, a]");

    seq.clear_slot(1);
    assert_eq!(seq.render(), "[c, nil]");
    assert_eq!(seq.len(), 2);
}

#[test]
fn out_of_range_access_is_reported() {
    let counter = DropCounter::new();
    let a = listener("a", &counter);
    let mut seq = RcWeakSequence::from_list([Some(&a)]);

    assert_eq!(
        seq.try_get(1).unwrap_err(),
        SequenceError::IndexOutOfRange { index: 1, len: 1 }
    );
    assert!(seq.try_set(usize::MAX, None).is_err());
    assert!(seq.try_set(0, None).is_ok());
    assert!(seq.try_get(0).unwrap().is_none());
}

#[test]
fn arc_listeners_follow_the_same_contract() {
    let counter = DropCounter::new();
    let a = shared_listener("a", &counter);
    let mut seq = WeakSequence::new();
    seq.push(&a);
    seq.push(&shared_listener("b", &counter));

    assert_eq!(seq.render(), "[a, nil]");
    drop(a);
    assert_eq!(seq.render(), "[nil, nil]");
    assert_eq!(counter.count(), 2);
}
