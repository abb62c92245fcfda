// mod.rs - Input loaders module

pub mod fasta;

pub use fasta::{find_alignment_file, load_alignment, load_allele_set, load_samples};
