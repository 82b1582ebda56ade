//! Benchmarks for the equality fast and slow paths.

use criterion::{criterion_group, criterion_main, Criterion};
use sediment_core::{
    fast_equals, CanonicalId, CoreError, CoreResult, Record, RelocationIndex, RelocationTable,
    Segment, SegmentId, SegmentStore,
};
use std::hint::black_box;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Default)]
struct BenchStore {
    segments: Vec<Arc<Segment>>,
    index: Option<Arc<RelocationTable>>,
}

impl BenchStore {
    fn segment(&mut self) -> SegmentId {
        let id = SegmentId::new(Uuid::new_v4());
        self.segments.push(Arc::new(Segment::new(id.clone())));
        id
    }
}

impl SegmentStore for BenchStore {
    fn relocation_index(&self) -> Option<Arc<dyn RelocationIndex>> {
        self.index
            .clone()
            .map(|table| table as Arc<dyn RelocationIndex>)
    }

    fn resolve_segment(&self, id: &SegmentId) -> CoreResult<Arc<Segment>> {
        self.segments
            .iter()
            .find(|segment| segment.id == *id)
            .cloned()
            .ok_or_else(|| CoreError::segment_not_found(id.clone()))
    }
}

fn bench_fast_path(c: &mut Criterion) {
    let mut store = BenchStore::default();
    let segment = store.segment();
    let a = Record::new(segment.clone(), 128);
    let b = Record::new(segment, 128);

    c.bench_function("equals/no_index", |bencher| {
        bencher.iter(|| fast_equals(black_box(&a), black_box(&b), &store).unwrap());
    });
}

fn bench_slow_path(c: &mut Criterion) {
    let mut store = BenchStore::default();
    let segment = store.segment();

    let mut table = RelocationTable::new();
    let mut records = Vec::new();
    for i in 0..10_000u32 {
        let record = Record::new(segment.clone(), i * 8);
        table.insert(&record.id(), CanonicalId::new(1, 1, u64::from(i)));
        records.push(record);
    }
    store.index = Some(Arc::new(table));

    let a = &records[17];
    let b = &records[4_242];

    c.bench_function("equals/relocation_index_10k", |bencher| {
        bencher.iter(|| fast_equals(black_box(a), black_box(b), &store).unwrap());
    });
}

criterion_group!(benches, bench_fast_path, bench_slow_path);
criterion_main!(benches);
