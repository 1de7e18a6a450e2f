//! Single-shot timing harness comparing the three frontier backends.
//!
//! [`run`] times one [`knight_distance`](knight_paths::knight_distance) call
//! per [`Backend`] on the same input and returns a [`Report`], whose
//! `Display` impl is what the `knight-bench` binary prints.

use std::fmt;
use std::time::{Duration, Instant};

use knight_core::{CoordError, Square};
use knight_paths::Backend;

/// Which search the harness times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    pub start: Square,
    pub end: Square,
}

impl Default for BenchConfig {
    /// Corner to corner, `A1` to `H8`.
    fn default() -> Self {
        Self {
            start: Square::A1,
            end: Square::H8,
        }
    }
}

impl BenchConfig {
    /// Parse both squares from algebraic notation.
    pub fn from_algebraic(start: &str, end: &str) -> Result<Self, CoordError> {
        Ok(Self {
            start: start.parse()?,
            end: end.parse()?,
        })
    }
}

/// Outcome of one timed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub backend: Backend,
    pub distance: i32,
    /// Nodes the search enqueued.
    pub pushes: usize,
    pub elapsed: Duration,
}

/// All runs for one [`BenchConfig`], in [`Backend::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub config: BenchConfig,
    pub runs: Vec<Run>,
}

impl Report {
    /// Whether every backend returned the same distance.
    pub fn agree(&self) -> bool {
        self.runs.windows(2).all(|w| w[0].distance == w[1].distance)
    }

    /// Runs ordered fastest first. Ties keep reporting order.
    pub fn ranking(&self) -> Vec<&Run> {
        let mut ranked: Vec<&Run> = self.runs.iter().collect();
        ranked.sort_by_key(|r| r.elapsed);
        ranked
    }
}

fn micros(d: Duration) -> String {
    format!("{:.3} µs", d.as_secs_f64() * 1e6)
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for run in &self.runs {
            writeln!(f, "Minimum moves ({}): {}", run.backend, run.distance)?;
            writeln!(f, "Elapsed ({}): {}", run.backend, micros(run.elapsed))?;
        }
        writeln!(f)?;
        writeln!(f, "Performance comparison:")?;
        for (i, run) in self.ranking().into_iter().enumerate() {
            writeln!(f, "{}. {}: {}", i + 1, run.backend, micros(run.elapsed))?;
        }
        Ok(())
    }
}

/// Time one search per backend, sequentially, on `config`.
///
/// Each backend is searched exactly once. Only the search call sits inside
/// the timed window; every backend pays the same push-counting cost.
pub fn run(config: &BenchConfig) -> Report {
    let BenchConfig { start, end } = *config;
    let runs: Vec<Run> = Backend::ALL
        .into_iter()
        .map(|backend| {
            let t0 = Instant::now();
            let (distance, pushes) = backend.distance_counted(start, end);
            let elapsed = t0.elapsed();

            log::debug!(
                "{backend}: {start} -> {end} = {distance} moves, {pushes} enqueued, {elapsed:?}"
            );
            Run {
                backend,
                distance,
                pushes,
                elapsed,
            }
        })
        .collect();

    let report = Report {
        config: *config,
        runs,
    };
    if !report.agree() {
        log::warn!("backends disagree on {start} -> {end}: {:?}", report.runs);
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_report() -> Report {
        Report {
            config: BenchConfig::default(),
            runs: vec![
                Run {
                    backend: Backend::Array,
                    distance: 6,
                    pushes: 40,
                    elapsed: Duration::from_nanos(2_500),
                },
                Run {
                    backend: Backend::Linked,
                    distance: 6,
                    pushes: 40,
                    elapsed: Duration::from_nanos(4_000),
                },
                Run {
                    backend: Backend::Deque,
                    distance: 6,
                    pushes: 40,
                    elapsed: Duration::from_nanos(1_250),
                },
            ],
        }
    }

    #[test]
    fn default_config_is_corner_to_corner() {
        let c = BenchConfig::default();
        assert_eq!(c, BenchConfig::from_algebraic("A1", "H8").unwrap());
    }

    #[test]
    fn from_algebraic_rejects_bad_square() {
        let err = BenchConfig::from_algebraic("A1", "J8").unwrap_err();
        assert_eq!(
            err,
            CoordError::InvalidCoordinate {
                input: "J8".to_string()
            }
        );
    }

    #[test]
    fn run_times_every_backend_once() {
        let report = run(&BenchConfig::default());
        let backends: Vec<Backend> = report.runs.iter().map(|r| r.backend).collect();
        assert_eq!(backends, Backend::ALL);
        assert!(report.agree());
        assert!(report.runs.iter().all(|r| r.distance == 6));
        assert!(report.runs.iter().all(|r| r.pushes > 0 && r.pushes <= 64));
        assert!(report.runs.windows(2).all(|w| w[0].pushes == w[1].pushes));
    }

    #[test]
    fn run_on_other_input() {
        let config = BenchConfig::from_algebraic("A1", "B1").unwrap();
        let report = run(&config);
        assert!(report.runs.iter().all(|r| r.distance == 3));
    }

    #[test]
    fn ranking_is_fastest_first() {
        let report = fixed_report();
        let order: Vec<Backend> = report.ranking().iter().map(|r| r.backend).collect();
        assert_eq!(order, [Backend::Deque, Backend::Array, Backend::Linked]);
    }

    #[test]
    fn disagreement_is_detected() {
        let mut report = fixed_report();
        assert!(report.agree());
        report.runs[1].distance = 5;
        assert!(!report.agree());
    }

    #[test]
    fn report_layout() {
        let text = fixed_report().to_string();
        let expected = "\
Minimum moves (array): 6
Elapsed (array): 2.500 µs
Minimum moves (linked list): 6
Elapsed (linked list): 4.000 µs
Minimum moves (VecDeque): 6
Elapsed (VecDeque): 1.250 µs

Performance comparison:
1. VecDeque: 1.250 µs
2. array: 2.500 µs
3. linked list: 4.000 µs
";
        assert_eq!(text, expected);
    }
}
