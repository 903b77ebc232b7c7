//! Benchmarks for braille_chord chord throughput.

use braille_chord::{ChordEngine, ChordMode, EventSource};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::collections::VecDeque;
use std::time::Duration;

/// Queued keys that always arrive inside the window, then silence.
struct QueuedKeys {
    keys: VecDeque<char>,
}

impl QueuedKeys {
    fn new(text: &str) -> Self {
        Self {
            keys: text.chars().collect(),
        }
    }
}

impl EventSource for QueuedKeys {
    fn wait_for_event(&mut self, _timeout: Duration) -> Option<char> {
        self.keys.pop_front()
    }
}

fn benchmark_single_dot(c: &mut Criterion) {
    let engine = ChordEngine::new();

    c.bench_function("single dot chord", |b| {
        b.iter(|| {
            let outcome = engine.handle_char(black_box('f'), &mut QueuedKeys::new(""));
            black_box(outcome);
        });
    });
}

fn benchmark_full_cell(c: &mut Criterion) {
    let engine = ChordEngine::new();

    c.bench_function("eight dot chord", |b| {
        b.iter(|| {
            let outcome = engine.handle_char(black_box('f'), &mut QueuedKeys::new("dsjkla;"));
            black_box(outcome);
        });
    });
}

fn benchmark_exit_key(c: &mut Criterion) {
    let engine = ChordEngine::new();

    c.bench_function("chord ended by unmapped key", |b| {
        b.iter(|| {
            let outcome = engine.handle_char(black_box('f'), &mut QueuedKeys::new("dsx"));
            black_box(outcome);
        });
    });
}

fn benchmark_session(c: &mut Criterion) {
    // One word per chord, separated by blank cells.
    let words = ["fdj", " ", "fk", " ", "sdfj", " ", "kl", " ", "a;"];

    c.bench_function("mode session", |b| {
        b.iter(|| {
            let mut mode = ChordMode::new(ChordEngine::new());
            mode.enable();
            let mut out = Vec::new();
            for word in &words {
                let mut chars = word.chars();
                let Some(first) = chars.next() else { continue };
                let mut keys = QueuedKeys::new(chars.as_str());
                out.extend(mode.feed(black_box(first), &mut keys));
            }
            black_box(out);
        });
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(10))
        .sample_size(100);
    targets = benchmark_single_dot,
              benchmark_full_cell,
              benchmark_exit_key,
              benchmark_session
}
criterion_main!(benches);
