// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use understory_disclosure::document::{DocumentListeners, ListenerKind, Subscription};
use understory_disclosure::lookup::contains;
use understory_disclosure::state::DisclosureState;

/// A chain `depth -> depth-1 -> ... -> 0`.
fn chain_parent(n: &u32) -> Option<u32> {
    n.checked_sub(1)
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_disclosure/contains");
    for &depth in &[4_u32, 32, 256] {
        group.bench_with_input(BenchmarkId::new("inside", depth), &depth, |b, &depth| {
            b.iter(|| contains(&chain_parent, black_box(0), black_box(depth)));
        });
        // The root sits below the target, so the walk runs to the top.
        group.bench_with_input(BenchmarkId::new("outside", depth), &depth, |b, &depth| {
            b.iter(|| contains(&chain_parent, black_box(depth + 1), black_box(depth)));
        });
    }
    group.finish();
}

fn bench_outside_press(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_disclosure/outside_press");
    for &cards in &[8_usize, 64, 512] {
        group.bench_with_input(BenchmarkId::from_parameter(cards), &cards, |b, &cards| {
            let mut doc = DocumentListeners::new();
            let mut states: Vec<DisclosureState<u32>> = (0..cards)
                .map(|i| {
                    let mut s = DisclosureState::new();
                    s.set_root(Some(1000 + i as u32));
                    s
                })
                .collect();
            let mut subs: Vec<Subscription> = (0..cards).map(|_| Subscription::new()).collect();
            for (i, sub) in subs.iter_mut().enumerate() {
                sub.attach(&mut doc, i);
            }
            b.iter(|| {
                for state in &mut states {
                    state.on_pointer_enter();
                }
                for owner in doc.owners_for(ListenerKind::PointerDown) {
                    black_box(states[owner].on_document_pointer_down(Some(7), &chain_parent));
                }
            });
        });
    }
    group.finish();
}

fn bench_subscription_churn(c: &mut Criterion) {
    c.bench_function("understory_disclosure/attach_detach", |b| {
        let mut doc = DocumentListeners::new();
        let mut sub = Subscription::new();
        b.iter(|| {
            sub.attach(&mut doc, black_box(1_u32));
            black_box(sub.detach(&mut doc));
        });
    });
}

criterion_group!(
    benches,
    bench_contains,
    bench_outside_press,
    bench_subscription_churn
);
criterion_main!(benches);
