use super::*;

fn handle(url: &str) -> ImageHandle {
    ImageHandle::object_url(url.to_owned())
}

// =============================================================
// LoadSequence
// =============================================================

#[test]
fn begin_stamps_monotonic_generations() {
    let mut sequence = LoadSequence::default();
    let first = sequence.begin();
    let second = sequence.begin();
    assert!(second > first);
    assert!(sequence.is_current(second));
    assert!(!sequence.is_current(first));
}

#[test]
fn detach_stales_all_outstanding_generations() {
    let mut sequence = LoadSequence::default();
    let generation = sequence.begin();
    sequence.detach();
    assert!(!sequence.is_current(generation));
}

// =============================================================
// settle: only the newest fetch installs
// =============================================================

#[test]
fn current_fetch_installs_into_empty_slot() {
    let mut sequence = LoadSequence::default();
    let mut slot = None;
    let generation = sequence.begin();

    let outcome = settle(&sequence, generation, handle("blob:a"), &mut slot);
    assert!(outcome.was_installed());
    match outcome {
        Settled::Installed { superseded } => assert!(superseded.is_none()),
        Settled::Discarded(_) => panic!("expected install"),
    }
    assert_eq!(slot.as_ref().map(ImageHandle::url), Some("blob:a"));
    assert!(!slot.as_ref().map_or(true, ImageHandle::is_revoked));
}

#[test]
fn installing_revokes_the_superseded_handle() {
    let mut sequence = LoadSequence::default();
    let mut slot = None;

    let first = sequence.begin();
    settle(&sequence, first, handle("blob:a"), &mut slot);

    let second = sequence.begin();
    let outcome = settle(&sequence, second, handle("blob:b"), &mut slot);
    match outcome {
        Settled::Installed { superseded } => {
            let previous = superseded.expect("slot held a handle");
            assert_eq!(previous.url(), "blob:a");
            assert!(previous.is_revoked());
        }
        Settled::Discarded(_) => panic!("expected install"),
    }
    assert_eq!(slot.as_ref().map(ImageHandle::url), Some("blob:b"));
}

#[test]
fn stale_fetch_is_discarded_and_revoked() {
    let mut sequence = LoadSequence::default();
    let mut slot = None;

    let stale_generation = sequence.begin();
    let newest_generation = sequence.begin();

    // Newest request resolves first and installs.
    settle(&sequence, newest_generation, handle("blob:new"), &mut slot);

    // The older request resolves afterwards: discarded, slot untouched.
    let outcome = settle(&sequence, stale_generation, handle("blob:old"), &mut slot);
    match outcome {
        Settled::Discarded(discarded) => {
            assert_eq!(discarded.url(), "blob:old");
            assert!(discarded.is_revoked());
        }
        Settled::Installed { .. } => panic!("stale fetch must not install"),
    }
    assert_eq!(slot.as_ref().map(ImageHandle::url), Some("blob:new"));
    assert!(!slot.as_ref().map_or(true, ImageHandle::is_revoked));
}

#[test]
fn out_of_order_arrivals_leave_newest_installed() {
    let mut sequence = LoadSequence::default();
    let mut slot = None;

    let g1 = sequence.begin();
    let g2 = sequence.begin();
    let g3 = sequence.begin();

    // Arrival order: g2, g3, g1.
    assert!(!settle(&sequence, g2, handle("blob:2"), &mut slot).was_installed());
    assert!(settle(&sequence, g3, handle("blob:3"), &mut slot).was_installed());
    assert!(!settle(&sequence, g1, handle("blob:1"), &mut slot).was_installed());

    assert_eq!(slot.as_ref().map(ImageHandle::url), Some("blob:3"));
}

#[test]
fn fetch_resolving_after_detach_is_discarded() {
    let mut sequence = LoadSequence::default();
    let mut slot = None;

    let generation = sequence.begin();
    sequence.detach();

    let outcome = settle(&sequence, generation, handle("blob:late"), &mut slot);
    assert!(!outcome.was_installed());
    assert!(slot.is_none());
}

// =============================================================
// release
// =============================================================

#[test]
fn release_revokes_and_empties_the_slot() {
    let mut sequence = LoadSequence::default();
    let mut slot = None;
    let generation = sequence.begin();
    settle(&sequence, generation, handle("blob:a"), &mut slot);

    let released = release(&mut slot).expect("slot held a handle");
    assert!(released.is_revoked());
    assert!(slot.is_none());
}

#[test]
fn release_on_empty_slot_is_a_no_op() {
    let mut slot = None;
    assert!(release(&mut slot).is_none());
}
