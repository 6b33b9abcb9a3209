//! # basket-bench
//!
//! Criterion benchmarks for the mining stages plus deterministic basket
//! generators shared by the benches and by stress tests.

pub mod fixtures;
