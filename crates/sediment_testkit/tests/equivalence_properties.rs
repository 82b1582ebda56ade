//! End-to-end equivalence properties, driven through the fake store.

use proptest::prelude::*;
use sediment_core::{
    fast_equals, record_hash, CoreError, RelocationIndex, RelocationTable, SegmentId,
};
use sediment_testkit::prelude::*;

const SEGMENTS: usize = 4;

fn arena() -> (FakeStore, Vec<SegmentId>) {
    let store = FakeStore::new();
    let segments = (0..SEGMENTS).map(|_| store.fresh_segment()).collect();
    (store, segments)
}

proptest! {
    #[test]
    fn reflexive_without_index((segment, offset) in record_coords_strategy(SEGMENTS)) {
        let (store, segments) = arena();
        let record = store.record(&segments[segment], offset);
        prop_assert!(fast_equals(&record, &record, &store).unwrap());
    }

    #[test]
    fn reflexive_with_index((segment, offset) in record_coords_strategy(SEGMENTS)) {
        let (store, segments) = arena();
        let record = store.record(&segments[segment], offset);

        let mut table = RelocationTable::new();
        table.insert(&record.id(), canonical_of(&segments[segment], u64::from(offset)));
        store.install_index(table);

        prop_assert!(fast_equals(&record, &record, &store).unwrap());
    }

    #[test]
    fn symmetric_without_index(
        (seg_a, off_a) in record_coords_strategy(SEGMENTS),
        (seg_b, off_b) in record_coords_strategy(SEGMENTS),
    ) {
        let (store, segments) = arena();
        let a = store.record(&segments[seg_a], off_a);
        let b = store.record(&segments[seg_b], off_b);

        prop_assert_eq!(
            fast_equals(&a, &b, &store).unwrap(),
            fast_equals(&b, &a, &store).unwrap()
        );
    }

    #[test]
    fn symmetric_with_index(
        (seg_a, off_a) in record_coords_strategy(SEGMENTS),
        (seg_b, off_b) in record_coords_strategy(SEGMENTS),
    ) {
        let (store, segments) = arena();
        let a = store.record(&segments[seg_a], off_a);
        let b = store.record(&segments[seg_b], off_b);

        // Identity relocation: every record maps to its own address.
        let mut table = RelocationTable::new();
        table.insert(&a.id(), canonical_of(&segments[seg_a], u64::from(off_a)));
        table.insert(&b.id(), canonical_of(&segments[seg_b], u64::from(off_b)));
        store.install_index(table);

        prop_assert_eq!(
            fast_equals(&a, &b, &store).unwrap(),
            fast_equals(&b, &a, &store).unwrap()
        );
    }

    #[test]
    fn no_index_equality_is_raw_address_equality(
        (seg_a, off_a) in record_coords_strategy(SEGMENTS),
        (seg_b, off_b) in record_coords_strategy(SEGMENTS),
    ) {
        let (store, segments) = arena();
        let a = store.record(&segments[seg_a], off_a);
        let b = store.record(&segments[seg_b], off_b);

        let expected = seg_a == seg_b && off_a == off_b;
        prop_assert_eq!(fast_equals(&a, &b, &store).unwrap(), expected);
    }

    #[test]
    fn table_returns_exactly_the_inserted_canonical(
        (segment, offset) in record_coords_strategy(SEGMENTS),
        canonical in canonical_id_strategy(),
    ) {
        let (store, segments) = arena();
        let id = store.record(&segments[segment], offset).id();

        let mut table = RelocationTable::new();
        table.insert(&id, canonical);
        prop_assert_eq!(table.lookup(&id).unwrap(), canonical);
    }

    #[test]
    fn equal_records_hash_equal_without_index(
        (seg_a, off_a) in record_coords_strategy(SEGMENTS),
        (seg_b, off_b) in record_coords_strategy(SEGMENTS),
    ) {
        let (store, segments) = arena();
        let a = store.record(&segments[seg_a], off_a);
        let b = store.record(&segments[seg_b], off_b);

        if fast_equals(&a, &b, &store).unwrap() {
            prop_assert_eq!(record_hash(&a), record_hash(&b));
        }
    }
}

#[test]
fn compaction_merges_relocated_addresses() {
    let store = FakeStore::new();
    let old_a = store.fresh_segment();
    let old_b = store.fresh_segment();
    let target = store.fresh_segment();

    let a = store.record(&old_a, 5);
    let b = store.record(&old_b, 9);
    let c = store.record(&old_b, 17);

    // Before compaction the three are pairwise distinct.
    assert!(!fast_equals(&a, &b, &store).unwrap());

    // a and b were copies of one logical record; compaction wrote it once.
    let mut table = RelocationTable::new();
    table.insert(&a.id(), canonical_of(&target, 100));
    table.insert(&b.id(), canonical_of(&target, 100));
    table.insert(&c.id(), canonical_of(&target, 300));
    store.install_index(table);

    assert!(fast_equals(&a, &b, &store).unwrap());
    assert!(!fast_equals(&a, &c, &store).unwrap());
    assert!(!fast_equals(&b, &c, &store).unwrap());
}

#[test]
fn clearing_index_restores_raw_semantics() {
    let store = FakeStore::new();
    let old = store.fresh_segment();
    let target = store.fresh_segment();

    let a = store.record(&old, 5);
    let b = store.record(&old, 9);

    let mut table = RelocationTable::new();
    table.insert(&a.id(), canonical_of(&target, 100));
    table.insert(&b.id(), canonical_of(&target, 100));
    store.install_index(table);
    assert!(fast_equals(&a, &b, &store).unwrap());

    store.clear_index();
    assert!(!fast_equals(&a, &b, &store).unwrap());
}

#[test]
fn hash_divergence_under_relocation_is_preserved() {
    let store = FakeStore::new();
    let old = store.fresh_segment();
    let target = store.fresh_segment();

    let a = store.record(&old, 5);
    let b = store.record(&old, 9);

    let mut table = RelocationTable::new();
    table.insert(&a.id(), canonical_of(&target, 100));
    table.insert(&b.id(), canonical_of(&target, 100));
    store.install_index(table);

    // Equal through the index, hashed by raw address: the documented
    // contract of record_hash, pinned down here.
    assert!(fast_equals(&a, &b, &store).unwrap());
    assert_ne!(record_hash(&a), record_hash(&b));
}

#[test]
fn index_miss_surfaces_as_typed_error() {
    with_fake_store(|store| {
        let old = store.fresh_segment();
        let target = store.fresh_segment();

        let known = store.record(&old, 5);
        let unknown = store.record(&old, 9);

        let mut table = RelocationTable::new();
        table.insert(&known.id(), canonical_of(&target, 100));
        store.install_index(table);

        let result = fast_equals(&known, &unknown, store);
        assert!(matches!(result, Err(CoreError::RelocationMiss { .. })));
    });
}
