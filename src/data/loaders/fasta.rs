// fasta.rs - FASTA loaders for allele sets and alignments

use crate::data::alignment::{AlignedRow, Alignment};
use crate::data::sample::Sample;
use bio::io::fasta;
use regex::Regex;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

const FASTA_EXTENSIONS: [&str; 3] = ["fasta", "fa", "tfa"];

fn is_fasta(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| FASTA_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

fn file_stem(path: &Path) -> Option<String> {
    path.file_stem().map(|stem| stem.to_string_lossy().to_string())
}

/// Load one gene's raw allele FASTA file into a deduplicated sample
pub fn load_allele_set(fasta_path: &Path) -> Result<Sample, String> {
    let name = file_stem(fasta_path)
        .ok_or_else(|| format!("Cannot derive sample name from {}", fasta_path.display()))?;
    let file = File::open(fasta_path)
        .map_err(|e| format!("Failed to open FASTA file {}: {}", fasta_path.display(), e))?;

    let reader = fasta::Reader::new(BufReader::new(file));
    let mut sample = Sample::new(name);
    for record_result in reader.records() {
        let record = record_result
            .map_err(|e| format!("Invalid FASTA record in {}: {}", fasta_path.display(), e))?;
        let sequence = String::from_utf8_lossy(record.seq()).to_uppercase();
        sample.alleles.insert(sequence);
    }

    if sample.alleles.is_empty() {
        return Err(format!("No sequences found in {}", fasta_path.display()));
    }
    Ok(sample)
}

/// Load an aligned allele FASTA file, right-padding ragged rows
pub fn load_alignment(fasta_path: &Path) -> Result<Alignment, String> {
    let file = File::open(fasta_path)
        .map_err(|e| format!("Failed to open FASTA file {}: {}", fasta_path.display(), e))?;

    let reader = fasta::Reader::new(BufReader::new(file));
    let mut rows = Vec::new();
    for record_result in reader.records() {
        let record = record_result
            .map_err(|e| format!("Invalid FASTA record in {}: {}", fasta_path.display(), e))?;
        rows.push(AlignedRow {
            id: record.id().to_string(),
            sequence: record.seq().to_ascii_uppercase(),
        });
    }

    if rows.is_empty() {
        return Err(format!("No sequences found in {}", fasta_path.display()));
    }
    let mut alignment = Alignment::new(rows);
    alignment.pad_rows();
    Ok(alignment)
}

/// Load every allele FASTA file in a directory, one sample per file,
/// applying optional include/exclude regex filters to the sample names.
/// Samples are returned sorted by name for deterministic processing order.
pub fn load_samples(
    alleles_dir: &Path,
    include: Option<&Regex>,
    exclude: Option<&Regex>,
) -> Result<Vec<Sample>, String> {
    let entries = std::fs::read_dir(alleles_dir)
        .map_err(|e| format!("Failed to read allele directory {}: {}", alleles_dir.display(), e))?;

    let mut samples = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| format!("Failed to read directory entry: {}", e))?;
        let path = entry.path();
        if !path.is_file() || !is_fasta(&path) {
            continue;
        }
        let name = match file_stem(&path) {
            Some(name) => name,
            None => continue,
        };
        if let Some(regex) = include {
            if !regex.is_match(&name) {
                continue;
            }
        }
        if let Some(regex) = exclude {
            if regex.is_match(&name) {
                continue;
            }
        }
        samples.push(load_allele_set(&path)?);
    }

    if samples.is_empty() {
        return Err(format!(
            "No allele FASTA files found in {}",
            alleles_dir.display()
        ));
    }
    samples.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(samples)
}

/// Locate the aligned FASTA file matching a sample name
pub fn find_alignment_file(aligned_dir: &Path, sample_name: &str) -> Option<PathBuf> {
    for extension in FASTA_EXTENSIONS {
        let candidate = aligned_dir.join(format!("{}.{}", sample_name, extension));
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_fasta_extensions() {
        assert!(is_fasta(Path::new("gene.fasta")));
        assert!(is_fasta(Path::new("gene.fa")));
        assert!(is_fasta(Path::new("gene_alleles.tfa")));
        assert!(!is_fasta(Path::new("gene.txt")));
        assert!(!is_fasta(Path::new("gene")));
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem(Path::new("/tmp/stx1.fasta")), Some("stx1".to_string()));
        assert_eq!(file_stem(Path::new("stx2_alleles.tfa")), Some("stx2_alleles".to_string()));
    }
}
