//! Parallelism degree and worker pool configuration.

use std::env;
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use log::info;
use once_cell::sync::OnceCell;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::ConfigError;

pub const PARALLELISM_ENV: &str = "DNC_SORT_PARALLELISM";
pub const STACK_SIZE_ENV: &str = "DNC_SORT_STACK_SIZE";

/// Worker stack size used unless overridden. Unbalanced in-place quicksort recursion is O(n) deep
/// and every level lives on a worker stack.
pub const DEFAULT_STACK_SIZE: usize = 64 * 1024 * 1024;

/// Number of chunks, and therefore tasks, the bounded merge sort dispatches. Also used as the
/// worker count of pools built from a [`SortConfig`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Parallelism(NonZeroUsize);

impl Parallelism {
    pub fn new(degree: usize) -> Result<Self, ConfigError> {
        NonZeroUsize::new(degree)
            .map(Self)
            .ok_or(ConfigError::ZeroParallelism)
    }

    /// The number of execution units available on this host.
    pub fn available() -> Self {
        // num_cpus never reports 0, but don't rely on it.
        Self(NonZeroUsize::new(num_cpus::get()).unwrap_or(NonZeroUsize::MIN))
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for Parallelism {
    fn default() -> Self {
        Self::available()
    }
}

impl fmt::Display for Parallelism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Parallelism {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let degree = usize::from_str(s.trim()).map_err(|_| ConfigError::InvalidEnv {
            var: PARALLELISM_ENV,
            value: s.to_owned(),
        })?;

        Self::new(degree)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortConfig {
    pub parallelism: Parallelism,
    pub stack_size: usize,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            parallelism: Parallelism::available(),
            stack_size: DEFAULT_STACK_SIZE,
        }
    }
}

impl SortConfig {
    pub fn with_parallelism(parallelism: Parallelism) -> Self {
        Self {
            parallelism,
            ..Self::default()
        }
    }

    /// Defaults, overridden by `DNC_SORT_PARALLELISM` and `DNC_SORT_STACK_SIZE` if set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(val) = lookup(PARALLELISM_ENV) {
            config.parallelism = val.parse()?;
        }

        if let Some(val) = lookup(STACK_SIZE_ENV) {
            config.stack_size = match usize::from_str(val.trim()) {
                Ok(stack_size) if stack_size > 0 => stack_size,
                _ => {
                    return Err(ConfigError::InvalidEnv {
                        var: STACK_SIZE_ENV,
                        value: val,
                    })
                }
            };
        }

        Ok(config)
    }

    pub fn build_pool(&self) -> Result<ThreadPool, ConfigError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(self.parallelism.get())
            .stack_size(self.stack_size)
            .thread_name(|i| format!("dnc-sort-{i}"))
            .build()?;

        Ok(pool)
    }
}

struct SharedPool {
    config: SortConfig,
    pool: ThreadPool,
}

fn shared() -> Result<&'static SharedPool, ConfigError> {
    static SHARED: OnceCell<SharedPool> = OnceCell::new();

    SHARED.get_or_try_init(|| {
        let config = SortConfig::from_env()?;
        let pool = config.build_pool()?;

        info!(
            "built shared sort pool: {} workers, {} byte stacks",
            config.parallelism, config.stack_size
        );

        Ok(SharedPool { config, pool })
    })
}

/// The process-wide worker pool, built on first use from [`SortConfig::from_env`].
pub fn shared_pool() -> Result<&'static ThreadPool, ConfigError> {
    shared().map(|shared| &shared.pool)
}

/// The configuration the shared pool was built with.
pub fn shared_config() -> Result<&'static SortConfig, ConfigError> {
    shared().map(|shared| &shared.config)
}

/// Runs `op` inside the shared pool.
///
/// Panics if the pool can't be built, there is nothing sensible a sort can do without workers.
pub fn install<OP, R>(op: OP) -> R
where
    OP: FnOnce() -> R + Send,
    R: Send,
{
    match shared_pool() {
        Ok(pool) => pool.install(op),
        Err(err) => panic!("{err}"),
    }
}
