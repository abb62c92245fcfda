// extractor.rs - Probe subsequence extraction across alleles

use crate::core::resolver::ProbeSelection;
use crate::data::sample::AlleleSet;
use serde::Serialize;
use std::collections::HashSet;

/// Unique probe substrings extracted for a sample. `expected_length` is the
/// width of the selected column range; any probe shorter than it came from
/// an allele that ended before the range did.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProbeSet {
    pub probes: Vec<String>,
    pub expected_length: usize,
    pub truncated: usize,
}

impl ProbeSet {
    pub fn len(&self) -> usize {
        self.probes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }

    pub fn has_truncation(&self) -> bool {
        self.truncated > 0
    }
}

/// Slice the winning column range out of every raw allele sequence by direct
/// character offset and deduplicate the results. Alleles shorter than the
/// range yield a truncated slice, counted but not treated as an error.
pub fn extract_probes(selection: &ProbeSelection, alleles: &AlleleSet) -> ProbeSet {
    let mut seen = HashSet::new();
    let mut probes = Vec::new();
    let mut truncated = 0;

    for allele in alleles.iter() {
        let stop = selection.stop.min(allele.len());
        if selection.stop > allele.len() {
            truncated += 1;
        }
        let slice = allele.get(selection.start..stop).unwrap_or("");
        if seen.insert(slice.to_string()) {
            probes.push(slice.to_string());
        }
    }

    ProbeSet {
        probes,
        expected_length: selection.stop - selection.start,
        truncated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(start: usize, stop: usize) -> ProbeSelection {
        ProbeSelection {
            start,
            stop,
            size: stop - start,
            min_identity: 100.0,
            mean_identity: 100.0,
            sequence: String::new(),
        }
    }

    fn alleles(sequences: &[&str]) -> AlleleSet {
        let mut set = AlleleSet::new();
        for sequence in sequences {
            set.insert(sequence.to_string());
        }
        set
    }

    #[test]
    fn test_extraction_slices_by_offset() {
        let set = alleles(&["GATTACA", "GATCACA"]);
        let probes = extract_probes(&selection(2, 5), &set);
        assert_eq!(probes.probes, vec!["TTA", "TCA"]);
        assert_eq!(probes.expected_length, 3);
        assert_eq!(probes.truncated, 0);
    }

    #[test]
    fn test_identical_slices_deduplicate() {
        // Alleles differ outside the range, so both slices are identical
        let set = alleles(&["GATTACA", "GATTACT"]);
        let probes = extract_probes(&selection(1, 4), &set);
        assert_eq!(probes.probes, vec!["ATT"]);
    }

    #[test]
    fn test_short_allele_truncates() {
        let set = alleles(&["GATTACA", "GATT"]);
        let probes = extract_probes(&selection(2, 6), &set);
        assert_eq!(probes.probes, vec!["TTAC", "TT"]);
        assert_eq!(probes.truncated, 1);
        assert!(probes.has_truncation());
        assert!(probes.probes[1].len() < probes.expected_length);
    }

    #[test]
    fn test_truncated_slices_deduplicate() {
        let set = alleles(&["GATT", "GATT", "GATTAC"]);
        let probes = extract_probes(&selection(2, 6), &set);
        // The two short alleles collapsed at insertion; "TT" and "TTAC" remain
        assert_eq!(probes.probes, vec!["TT", "TTAC"]);
        assert_eq!(probes.truncated, 1);
    }

    #[test]
    fn test_allele_shorter_than_start_yields_empty_probe() {
        let set = alleles(&["GA"]);
        let probes = extract_probes(&selection(3, 6), &set);
        assert_eq!(probes.probes, vec![""]);
        assert_eq!(probes.truncated, 1);
    }
}
