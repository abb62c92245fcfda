// resolver.rs - Winning window selection and column range resolution

use crate::core::selector::WindowSizeResult;
use serde::{Deserialize, Serialize};

/// Winning half-open column range for a gene, with the statistics of the
/// window that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeSelection {
    pub start: usize,
    pub stop: usize,
    pub size: usize,
    pub min_identity: f64,
    pub mean_identity: f64,
    pub sequence: String,
}

/// Pick one winning window from the per-size results, which arrive in
/// descending-size order. The first size with passing windows supplies the
/// winner: the leftmost window whose mean identity equals that size's
/// maximum. Returns None when no size passed, the normal "no probe found"
/// outcome.
pub fn resolve_location(results: &[WindowSizeResult]) -> Option<ProbeSelection> {
    for result in results {
        if !result.has_passing() {
            continue;
        }
        for window in &result.passing {
            if window.mean_identity == result.max_mean && window.mean_identity >= result.min_mean {
                return Some(ProbeSelection {
                    start: window.offset,
                    stop: window.offset + window.size,
                    size: window.size,
                    min_identity: window.min_identity,
                    mean_identity: window.mean_identity,
                    sequence: window.sequence.clone(),
                });
            }
        }
    }
    None
}
