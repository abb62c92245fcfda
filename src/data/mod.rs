// mod.rs - Data structures module

pub mod alignment;
pub mod loaders;
pub mod sample;

// Re-export main types for convenience
pub use alignment::{AlignedRow, Alignment, AlignmentInconsistency, BaseCounts};
pub use sample::{AlleleSet, Sample};
