//! The harness must search each backend exactly once.
//!
//! Lives in its own test binary because it installs a global logger.

use std::sync::atomic::{AtomicUsize, Ordering};

use knight_demos::{BenchConfig, run};
use knight_paths::Backend;

/// Counts the line `knight_distance` traces when a search finishes.
struct SearchCounter {
    finished: AtomicUsize,
}

impl log::Log for SearchCounter {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if record.target() == "knight_paths::bfs" {
            self.finished.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn flush(&self) {}
}

static COUNTER: SearchCounter = SearchCounter {
    finished: AtomicUsize::new(0),
};

#[test]
fn each_backend_is_searched_once() {
    log::set_logger(&COUNTER).unwrap();
    log::set_max_level(log::LevelFilter::Trace);

    let report = run(&BenchConfig::default());

    assert_eq!(report.runs.len(), Backend::ALL.len());
    assert_eq!(COUNTER.finished.load(Ordering::SeqCst), Backend::ALL.len());
}
