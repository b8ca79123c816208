//! Real-world scenario benchmarks.
//!
//! These model the actual render path: the assembled voice and the engine
//! with its control-message drain.

mod voice;

pub use voice::bench_voice;
