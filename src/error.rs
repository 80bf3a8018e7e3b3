use thiserror::Error;

/// Errors produced while assembling a [`crate::SortConfig`] or the worker pool it describes.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parallelism degree must be at least 1")]
    ZeroParallelism,

    #[error("environment variable {var} has invalid value '{value}'")]
    InvalidEnv { var: &'static str, value: String },

    #[error("failed to build worker pool: {0}")]
    PoolBuild(#[from] rayon::ThreadPoolBuildError),
}

/// A name that matches none of [`crate::Algorithm::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "unknown algorithm '{0}', expected one of: {known}",
    known = crate::Algorithm::ALL.map(crate::Algorithm::name).join(", ")
)]
pub struct UnknownAlgorithm(pub String);
