// lib.rs - probefind library root

//! # probefind - Conserved hybridization/PCR probe finder
//!
//! This library identifies short, highly-conserved nucleotide subsequences
//! ("probes") of bounded length within sets of divergent allele sequences.
//! Given a multiple sequence alignment per gene, it derives a per-column
//! conservation profile, scans sliding windows from the largest candidate
//! size down, picks the best-scoring conserved window and extracts the
//! matching subsequence from every allele.
//!
//! ## Features
//!
//! - **Largest probe wins**: candidate sizes are evaluated in descending
//!   order and the search stops at the first size with a passing window
//! - **Deterministic selection**: ties break to the leftmost window with the
//!   best mean identity
//! - **Parallel**: genes are independent pure computations fanned out over a
//!   rayon worker pool
//! - **Reports**: per-gene probe FASTA plus TSV, CSV and JSON summaries
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use probefind::prelude::*;
//! use std::path::Path;
//!
//! let samples = load_samples(Path::new("alleles"), None, None)?;
//! let mut genes = Vec::new();
//! for sample in samples {
//!     let aligned = find_alignment_file(Path::new("aligned"), &sample.name)
//!         .ok_or_else(|| format!("No alignment for {}", sample.name))?;
//!     let alignment = load_alignment(&aligned)?;
//!     genes.push((sample, alignment));
//! }
//!
//! let results = find_probes(&genes, &SearchParams::default());
//! for result in &results {
//!     println!("{}: {}", result.name, result.status());
//! }
//! # Ok::<(), String>(())
//! ```

// Re-export all main modules
pub mod cli;
pub mod core;
pub mod data;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, Config, ValidationResult};
    pub use crate::core::{extract_probes, find_gene_probes, find_probes, resolve_location};
    pub use crate::core::{
        ConservationProfile, GeneResult, ProbeSelection, ProbeSelector, ProbeSet, SearchParams,
        Window, WindowScanner, WindowSizeResult,
    };
    pub use crate::data::loaders::{
        find_alignment_file, load_alignment, load_allele_set, load_samples,
    };
    pub use crate::data::{AlignedRow, Alignment, AlignmentInconsistency, AlleleSet, Sample};
    pub use crate::output::{
        write_json_report, write_probe_fasta, write_report, ReportRecord,
    };
}

// Re-export main types at the root level for convenience
pub use crate::cli::{Args, ValidationResult};
pub use crate::core::{GeneResult, ProbeSelection, ProbeSet, SearchParams};
pub use crate::data::{Alignment, AlignmentInconsistency, AlleleSet, Sample};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "probefind v{} - Conserved probe finder for divergent allele sets",
        VERSION
    )
}
