// selector.rs - Largest-first probe window selection

use crate::core::profile::ConservationProfile;
use crate::core::scanner::{Window, WindowScanner};
use serde::Serialize;

/// Passing windows for one candidate size, with the running mean-identity
/// extremes used later for tie-breaking
#[derive(Debug, Clone, Serialize)]
pub struct WindowSizeResult {
    pub size: usize,
    pub passing: Vec<Window>,
    /// Highest mean identity observed among the passing windows
    pub max_mean: f64,
    /// Lowest mean identity that matched the running maximum when recorded
    pub min_mean: f64,
}

impl WindowSizeResult {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            passing: Vec::new(),
            max_mean: 0.0,
            min_mean: 0.0,
        }
    }

    /// Record a passing window, updating the mean-identity extremes
    pub fn record(&mut self, window: Window) {
        if window.mean_identity >= self.max_mean {
            self.max_mean = window.mean_identity;
            if self.passing.is_empty() || window.mean_identity < self.min_mean {
                self.min_mean = window.mean_identity;
            }
        }
        self.passing.push(window);
    }

    pub fn has_passing(&self) -> bool {
        !self.passing.is_empty()
    }
}

/// Scans candidate probe sizes from largest to smallest and keeps the
/// passing windows of the first size that yields any
#[derive(Debug, Clone)]
pub struct ProbeSelector {
    pub min_size: usize,
    pub max_size: usize,
    pub cutoff: f64,
}

impl ProbeSelector {
    pub fn new(min_size: usize, max_size: usize, cutoff: f64) -> Result<Self, String> {
        if min_size == 0 {
            return Err("Minimum probe size must be at least 1".to_string());
        }
        if min_size > max_size {
            return Err(format!(
                "Minimum probe size {} exceeds maximum probe size {}",
                min_size, max_size
            ));
        }
        if !(0.0..100.0).contains(&cutoff) {
            return Err("Cutoff must be a percentage in [0, 100)".to_string());
        }
        Ok(Self {
            min_size,
            max_size,
            cutoff,
        })
    }

    /// Evaluate sizes in descending order. A window passes iff its minimum
    /// identity strictly exceeds the cutoff. Descent stops at the first size
    /// with at least one passing window: shorter probes are only considered
    /// when no larger size has any.
    pub fn scan(&self, profile: &ConservationProfile, consensus: &str) -> Vec<WindowSizeResult> {
        let mut results = Vec::new();
        for size in (self.min_size..=self.max_size).rev() {
            let mut result = WindowSizeResult::new(size);
            for window in WindowScanner::new(profile, consensus, size) {
                if window.min_identity > self.cutoff {
                    result.record(window);
                }
            }
            let found = result.has_passing();
            results.push(result);
            if found {
                break;
            }
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_validation() {
        assert!(ProbeSelector::new(0, 10, 70.0).is_err());
        assert!(ProbeSelector::new(20, 10, 70.0).is_err());
        assert!(ProbeSelector::new(2, 3, 100.0).is_err());
        assert!(ProbeSelector::new(2, 3, -1.0).is_err());
        assert!(ProbeSelector::new(2, 3, 70.0).is_ok());
    }

    #[test]
    fn test_scenario_a_size_three_passes() {
        let profile = ConservationProfile::from_values(vec![100.0, 100.0, 100.0, 60.0, 60.0]);
        let selector = ProbeSelector::new(2, 3, 70.0).unwrap();
        let results = selector.scan(&profile, "AAATT");

        // Size 3 passes at offset 0, so size 2 is never evaluated
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].size, 3);
        assert_eq!(results[0].passing.len(), 1);
        assert_eq!(results[0].passing[0].offset, 0);
        assert_eq!(results[0].passing[0].min_identity, 100.0);
        assert_eq!(results[0].passing[0].mean_identity, 100.0);
        assert_eq!(results[0].max_mean, 100.0);
    }

    #[test]
    fn test_largest_size_wins() {
        // Size 4 has no passing window, size 3 does; size 2 must be skipped
        let profile = ConservationProfile::from_values(vec![60.0, 90.0, 90.0, 90.0, 60.0]);
        let selector = ProbeSelector::new(2, 4, 70.0).unwrap();
        let results = selector.scan(&profile, "TAAAT");

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].size, 4);
        assert!(!results[0].has_passing());
        assert_eq!(results[1].size, 3);
        assert_eq!(results[1].passing.len(), 1);
        assert_eq!(results[1].passing[0].offset, 1);
    }

    #[test]
    fn test_no_size_passes() {
        let profile = ConservationProfile::from_values(vec![50.0, 50.0, 50.0, 50.0]);
        let selector = ProbeSelector::new(2, 3, 70.0).unwrap();
        let results = selector.scan(&profile, "AAAA");

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|result| !result.has_passing()));
    }

    #[test]
    fn test_cutoff_is_strict() {
        // Minimum identity equal to the cutoff must not pass
        let profile = ConservationProfile::from_values(vec![70.0, 70.0, 70.01, 70.01]);
        let selector = ProbeSelector::new(2, 2, 70.0).unwrap();
        let results = selector.scan(&profile, "AAAA");

        let passing = &results[0].passing;
        assert_eq!(passing.len(), 1);
        assert_eq!(passing[0].offset, 2);
    }

    #[test]
    fn test_mean_extremes_track_running_maximum() {
        let profile = ConservationProfile::from_values(vec![80.0, 80.0, 95.0, 95.0]);
        let selector = ProbeSelector::new(2, 2, 70.0).unwrap();
        let results = selector.scan(&profile, "AAAA");

        // Means per window: 80.0, 87.5, 95.0
        assert_eq!(results[0].passing.len(), 3);
        assert_eq!(results[0].max_mean, 95.0);
        assert_eq!(results[0].min_mean, 80.0);
    }
}
