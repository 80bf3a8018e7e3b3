//! Top-down merge sorts. All of them are value-producing and stable.

pub mod bounded;
pub mod sequential;
pub mod unbounded;
