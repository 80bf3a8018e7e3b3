use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::benchmark::Measurement;
use crate::error::BenchError;

const BAR_WIDTH: usize = 50;

#[derive(Debug, Serialize)]
pub struct Report {
    pub pattern: String,
    pub len: usize,
    pub parallelism: usize,
    pub runs: usize,
    pub seed: u64,
    pub measurements: Vec<Measurement>,
}

impl Report {
    /// One line per algorithm, in run order.
    pub fn table(&self) -> String {
        let mut out = String::new();

        for m in &self.measurements {
            let _ = writeln!(
                out,
                "{:<24} {:>12.3} ms  spread {:>5.2}  tasks {}",
                m.algorithm,
                m.summary.median.as_secs_f64() * 1e3,
                m.summary.spread,
                m.tasks_spawned
            );
        }

        out
    }

    /// Horizontal bar chart of the median times, bars scaled to the slowest algorithm.
    pub fn bar_chart(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Median sort time, {} x {} on {} workers ({} runs, seed {})",
            self.len, self.pattern, self.parallelism, self.runs, self.seed
        );
        let _ = writeln!(out);

        let slowest = self
            .measurements
            .iter()
            .map(|m| m.summary.median.as_secs_f64())
            .fold(0.0, f64::max);

        for m in &self.measurements {
            let secs = m.summary.median.as_secs_f64();
            let bar_len = if slowest > 0.0 {
                ((secs / slowest) * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };

            let _ = writeln!(
                out,
                "{:<24} |{:<width$}| {:.3} ms",
                m.algorithm,
                "#".repeat(bar_len),
                secs * 1e3,
                width = BAR_WIDTH
            );
        }

        out
    }

    pub fn write_bar_chart(&self, path: &Path) -> Result<(), BenchError> {
        write_file(path, self.bar_chart())
    }

    pub fn write_json(&self, path: &Path) -> Result<(), BenchError> {
        let json = serde_json::to_string_pretty(self)?;
        write_file(path, json)
    }
}

fn write_file(path: &Path, contents: String) -> Result<(), BenchError> {
    fs::write(path, contents).map_err(|source| BenchError::Io {
        path: path.to_owned(),
        source,
    })
}
