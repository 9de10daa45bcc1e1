// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the toast notification queue.
//!
//! Measures the cost of:
//! - Pushing a toast (entry append + timer spawn)
//! - Dismissing a toast (timer abort + entry removal)
//! - Snapshotting a busy queue for rendering

use admin_console::ui::notifications::{NotificationQueue, ToastKind};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()
        .expect("Failed to build tokio runtime")
}

/// Push then dismiss, so the queue does not grow across iterations.
fn bench_push_dismiss(c: &mut Criterion) {
    let rt = runtime();
    let _guard = rt.enter();
    let queue = NotificationQueue::new();

    let mut group = c.benchmark_group("notification_queue");
    group.bench_function("push_dismiss", |b| {
        b.iter(|| {
            let id = queue.push(black_box("User updated successfully"), ToastKind::Success);
            black_box(queue.dismiss(id));
        });
    });
    group.finish();
}

/// Snapshot of a queue holding many visible toasts. No runtime is entered,
/// so the toasts never expire mid-run.
fn bench_visible(c: &mut Criterion) {
    let queue = NotificationQueue::new();
    for i in 0..100 {
        queue.push(format!("toast {i}"), ToastKind::Info);
    }

    let mut group = c.benchmark_group("notification_queue");
    group.bench_function("visible_100", |b| {
        b.iter(|| black_box(queue.visible()));
    });
    group.finish();
}

criterion_group!(benches, bench_push_dismiss, bench_visible);
criterion_main!(benches);
