// Benchmarks for selection rectangle computation and membership queries

use chrono::NaiveDate;
use chronos_board::grid::selection::rectangle;
use chronos_board::grid::{CellRef, DayLabels, SelectionState};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
}

fn bench_rectangle(c: &mut Criterion) {
    let labels = DayLabels::for_week(monday());
    let a = CellRef::new(labels.date_at(0).unwrap(), 0);
    let b = CellRef::new(labels.date_at(6).unwrap(), 23);

    c.bench_function("rectangle_full_board", |bencher| {
        bencher.iter(|| rectangle(black_box(&labels), black_box(a), black_box(b)))
    });
}

fn bench_membership(c: &mut Criterion) {
    let labels = DayLabels::for_week(monday());
    let mut state = SelectionState::new();
    state.begin_gesture(CellRef::new(labels.date_at(0).unwrap(), 0));
    state.extend_to(CellRef::new(labels.date_at(6).unwrap(), 23), &labels);

    let probe = CellRef::new(labels.date_at(3).unwrap(), 12);
    c.bench_function("membership_query_full_board", |bencher| {
        bencher.iter(|| state.is_selected(black_box(probe)))
    });
}

criterion_group!(benches, bench_rectangle, bench_membership);
criterion_main!(benches);
