// finder.rs - Per-gene probe search pipeline

use crate::core::extractor::{extract_probes, ProbeSet};
use crate::core::profile::ConservationProfile;
use crate::core::resolver::{resolve_location, ProbeSelection};
use crate::core::selector::{ProbeSelector, WindowSizeResult};
use crate::data::alignment::Alignment;
use crate::data::sample::Sample;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Search parameters shared by every gene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchParams {
    pub min_size: usize,
    pub max_size: usize,
    pub cutoff: f64,
    pub consensus_threshold: f64,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            min_size: 20,
            max_size: 50,
            cutoff: 70.0,
            consensus_threshold: 0.7,
        }
    }
}

/// Everything computed for one gene. All fields are always present;
/// `selection`/`probes` are None for the "no probe found" outcome and
/// `error` is Some when the gene's alignment was unusable.
#[derive(Debug, Clone)]
pub struct GeneResult {
    pub name: String,
    pub allele_count: usize,
    pub column_count: usize,
    pub consensus: String,
    pub window_results: Vec<WindowSizeResult>,
    pub selection: Option<ProbeSelection>,
    pub probes: Option<ProbeSet>,
    pub error: Option<String>,
}

impl GeneResult {
    /// A gene that could not be processed at all
    pub fn failed(name: String, allele_count: usize, error: String) -> Self {
        Self {
            name,
            allele_count,
            column_count: 0,
            consensus: String::new(),
            window_results: Vec::new(),
            selection: None,
            probes: None,
            error: Some(error),
        }
    }

    pub fn status(&self) -> &'static str {
        if self.error.is_some() {
            "alignment_error"
        } else if self.selection.is_some() {
            "ok"
        } else {
            "no_probe_found"
        }
    }
}

/// Run the full pipeline for one gene: conservation profile, consensus,
/// window scan, location resolution, extraction. Pure apart from its return
/// value; an inconsistent alignment fails only this gene.
pub fn find_gene_probes(sample: &Sample, alignment: &Alignment, params: &SearchParams) -> GeneResult {
    let selector = match ProbeSelector::new(params.min_size, params.max_size, params.cutoff) {
        Ok(selector) => selector,
        Err(error) => return GeneResult::failed(sample.name.clone(), sample.alleles.len(), error),
    };

    let profile = match ConservationProfile::from_alignment(alignment) {
        Ok(profile) => profile,
        Err(error) => {
            return GeneResult::failed(sample.name.clone(), sample.alleles.len(), error.to_string())
        }
    };

    let consensus = alignment.consensus(params.consensus_threshold);
    let window_results = selector.scan(&profile, &consensus);
    let selection = resolve_location(&window_results);
    let probes = selection
        .as_ref()
        .map(|selection| extract_probes(selection, &sample.alleles));

    GeneResult {
        name: sample.name.clone(),
        allele_count: sample.alleles.len(),
        column_count: profile.len(),
        consensus,
        window_results,
        selection,
        probes,
        error: None,
    }
}

/// Process every gene in parallel. Genes are independent pure computations,
/// so they fan out over the rayon worker pool with no shared mutable state.
pub fn find_probes(genes: &[(Sample, Alignment)], params: &SearchParams) -> Vec<GeneResult> {
    let pb = ProgressBar::new(genes.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} genes")
            .unwrap()
            .progress_chars("#>-"),
    );

    let results: Vec<GeneResult> = genes
        .par_iter()
        .map(|(sample, alignment)| {
            let result = find_gene_probes(sample, alignment, params);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_and_clear();
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::alignment::AlignedRow;

    fn gene(name: &str, raw: &[&str], aligned: &[&str]) -> (Sample, Alignment) {
        let mut sample = Sample::new(name.to_string());
        for sequence in raw {
            sample.alleles.insert(sequence.to_string());
        }
        let alignment = Alignment::new(
            aligned
                .iter()
                .enumerate()
                .map(|(i, sequence)| AlignedRow {
                    id: format!("{}_{}", name, i),
                    sequence: sequence.as_bytes().to_vec(),
                })
                .collect(),
        );
        (sample, alignment)
    }

    #[test]
    fn test_pipeline_finds_probe() {
        // First four columns fully conserved, tail divergent
        let (sample, alignment) = gene(
            "stx1",
            &["GATTAC", "GATTGG"],
            &["GATTAC", "GATTGG"],
        );
        let params = SearchParams {
            min_size: 2,
            max_size: 4,
            cutoff: 70.0,
            consensus_threshold: 0.7,
        };
        let result = find_gene_probes(&sample, &alignment, &params);

        assert_eq!(result.status(), "ok");
        let selection = result.selection.unwrap();
        assert_eq!((selection.start, selection.stop), (0, 4));
        let probes = result.probes.unwrap();
        assert_eq!(probes.probes, vec!["GATT"]);
    }

    #[test]
    fn test_pipeline_no_probe_found() {
        let (sample, alignment) = gene("stx2", &["ATAT", "TATA"], &["ATAT", "TATA"]);
        let params = SearchParams {
            min_size: 2,
            max_size: 3,
            cutoff: 70.0,
            consensus_threshold: 0.7,
        };
        let result = find_gene_probes(&sample, &alignment, &params);

        assert_eq!(result.status(), "no_probe_found");
        assert!(result.selection.is_none());
        assert!(result.probes.is_none());
        assert!(result.error.is_none());
    }

    #[test]
    fn test_inconsistent_gene_fails_alone() {
        let (sample, alignment) = gene("bad", &["ATCG"], &["ATCG", "AT"]);
        let (good_sample, good_alignment) = gene("good", &["AAAA", "AAAT"], &["AAAA", "AAAT"]);

        let params = SearchParams {
            min_size: 2,
            max_size: 3,
            cutoff: 70.0,
            consensus_threshold: 0.7,
        };
        let genes = vec![(sample, alignment), (good_sample, good_alignment)];
        let results = find_probes(&genes, &params);

        let bad = results.iter().find(|r| r.name == "bad").unwrap();
        let good = results.iter().find(|r| r.name == "good").unwrap();
        assert_eq!(bad.status(), "alignment_error");
        assert!(bad.error.as_ref().unwrap().contains("columns"));
        assert_eq!(good.status(), "ok");
    }
}
