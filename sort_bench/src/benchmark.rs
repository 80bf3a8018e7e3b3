use std::hint::black_box;

use log::{debug, info};
use rayon::ThreadPool;
use serde::Serialize;

use dnc_sort::{Algorithm, Parallelism};

use crate::error::BenchError;
use crate::measure::{measure_duration, Summary};
use crate::patterns::Pattern;

/// What to run. Every algorithm sees the same `input`.
pub struct Plan<'a> {
    pub algorithms: &'a [Algorithm],
    pub pattern: Pattern,
    pub input: &'a [i32],
    pub parallelism: Parallelism,
    pub runs: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Measurement {
    pub algorithm: &'static str,
    #[serde(flatten)]
    pub summary: Summary,
    pub tasks_spawned: usize,
}

/// Times every algorithm of `plan` inside `pool`, `plan.runs` times each on a fresh copy of the
/// input.
///
/// The first run's output is checked, a sort that fails to sort aborts the whole comparison.
pub fn run(plan: &Plan<'_>, pool: &ThreadPool) -> Result<Vec<Measurement>, BenchError> {
    let mut measurements = Vec::with_capacity(plan.algorithms.len());

    for &algorithm in plan.algorithms {
        let mut samples = Vec::with_capacity(plan.runs);
        let mut tasks_spawned = 0;

        for run_idx in 0..plan.runs {
            let (elapsed, (sorted, stats)) = pool.install(|| {
                measure_duration(|| algorithm.run(black_box(plan.input), plan.parallelism))
            });

            if run_idx == 0 {
                verify(algorithm, plan, &sorted)?;
                tasks_spawned = stats.tasks_spawned;
            }

            debug!("{algorithm} run {run_idx}: {elapsed:?}");
            samples.push(elapsed);
        }

        let summary = Summary::analyze(&mut samples);
        info!(
            "{algorithm}: median {:?} spread {:.2} tasks {tasks_spawned}",
            summary.median, summary.spread
        );

        measurements.push(Measurement {
            algorithm: algorithm.name(),
            summary,
            tasks_spawned,
        });
    }

    Ok(measurements)
}

fn verify(algorithm: Algorithm, plan: &Plan<'_>, sorted: &[i32]) -> Result<(), BenchError> {
    let in_order = sorted.windows(2).all(|w| w[0] <= w[1]);

    if !in_order || sorted.len() != plan.input.len() {
        return Err(BenchError::Unsorted {
            algorithm: algorithm.name(),
            pattern: plan.pattern.to_string(),
            len: plan.input.len(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use dnc_sort::SortConfig;
    use rand::prelude::*;

    #[test]
    fn measures_every_algorithm() {
        let parallelism = Parallelism::new(2).unwrap();
        let pool = SortConfig::with_parallelism(parallelism).build_pool().unwrap();
        let input = Pattern::RandomBounded.generate(500, &mut StdRng::seed_from_u64(1));

        let plan = Plan {
            algorithms: &Algorithm::ALL,
            pattern: Pattern::RandomBounded,
            input: &input,
            parallelism,
            runs: 3,
        };
        let measurements = run(&plan, &pool).unwrap();

        let names = measurements.iter().map(|m| m.algorithm).collect::<Vec<_>>();
        assert_eq!(names, Algorithm::ALL.map(Algorithm::name));

        assert_eq!(measurements[0].tasks_spawned, 0);
        assert_eq!(measurements[1].tasks_spawned, 2 * 499);
        assert_eq!(measurements[2].tasks_spawned, 2);
        assert_eq!(measurements[3].tasks_spawned, 0);
    }

    #[test]
    fn rejects_unsorted_output() {
        let input = [3, 1, 2];
        let plan = Plan {
            algorithms: &[Algorithm::QuicksortSequential],
            pattern: Pattern::Random,
            input: &input,
            parallelism: Parallelism::new(1).unwrap(),
            runs: 3,
        };

        let err = verify(Algorithm::QuicksortSequential, &plan, &[1, 3, 2]).unwrap_err();
        assert!(matches!(err, BenchError::Unsorted { len: 3, .. }));

        let err = verify(Algorithm::QuicksortSequential, &plan, &[1, 2]).unwrap_err();
        assert!(matches!(err, BenchError::Unsorted { .. }));

        assert!(verify(Algorithm::QuicksortSequential, &plan, &[1, 2, 3]).is_ok());
    }
}
