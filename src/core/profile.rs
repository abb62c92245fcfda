// profile.rs - Per-column conservation profile

use crate::data::alignment::{Alignment, AlignmentInconsistency, BaseCounts};

/// Round to two decimal places, the precision used everywhere identity
/// percentages are reported
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Percent identity per alignment column, each value in [0, 100].
/// Length always equals the alignment column count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConservationProfile {
    values: Vec<f64>,
}

impl ConservationProfile {
    /// Build the profile directly from an alignment
    pub fn from_alignment(alignment: &Alignment) -> Result<Self, AlignmentInconsistency> {
        Ok(Self::from_base_counts(&alignment.base_counts()?))
    }

    /// Build the profile from a per-column frequency table. Identity at a
    /// column is the most frequent base over total observations; gaps count
    /// only toward the denominator. A column with no observations (all
    /// padding) scores 0.0 and can never pass a cutoff.
    pub fn from_base_counts(counts: &[BaseCounts]) -> Self {
        let values = counts
            .iter()
            .map(|column| {
                let total = column.total_observations();
                if total == 0 {
                    0.0
                } else {
                    round2(column.most_frequent_base() as f64 / total as f64 * 100.0)
                }
            })
            .collect();
        Self { values }
    }

    /// Wrap an existing identity series, e.g. one computed externally
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::alignment::{AlignedRow, Alignment};

    fn alignment(rows: &[(&str, &str)]) -> Alignment {
        Alignment::new(
            rows.iter()
                .map(|(id, sequence)| AlignedRow {
                    id: id.to_string(),
                    sequence: sequence.as_bytes().to_vec(),
                })
                .collect(),
        )
    }

    #[test]
    fn test_profile_length_matches_columns() {
        let alignment = alignment(&[("a", "ATCG"), ("b", "ATCG"), ("c", "ATTG")]);
        let profile = ConservationProfile::from_alignment(&alignment).unwrap();
        assert_eq!(profile.len(), 4);
        assert!(profile.values().iter().all(|&v| (0.0..=100.0).contains(&v)));
    }

    #[test]
    fn test_identity_computation() {
        // Column 0: 3/3 A = 100. Column 1: 2 T, 1 C = 66.67.
        let alignment = alignment(&[("a", "AT"), ("b", "AT"), ("c", "AC")]);
        let profile = ConservationProfile::from_alignment(&alignment).unwrap();
        assert_eq!(profile.values(), &[100.0, 66.67]);
    }

    #[test]
    fn test_gaps_dilute_identity() {
        // Column 0: 2 A and 1 gap; numerator 2, denominator 3
        let alignment = alignment(&[("a", "A"), ("b", "A"), ("c", "-")]);
        let profile = ConservationProfile::from_alignment(&alignment).unwrap();
        assert_eq!(profile.values(), &[66.67]);
    }

    #[test]
    fn test_padding_excluded_from_identity() {
        let mut alignment = alignment(&[("a", "AA"), ("b", "A")]);
        alignment.pad_rows();
        let profile = ConservationProfile::from_alignment(&alignment).unwrap();
        // Column 1 sees one A and one padding sentinel: 1/1 = 100
        assert_eq!(profile.values(), &[100.0, 100.0]);
    }

    #[test]
    fn test_inconsistent_alignment_rejected() {
        let alignment = alignment(&[("a", "ATCG"), ("b", "AT")]);
        let error = ConservationProfile::from_alignment(&alignment).unwrap_err();
        assert_eq!(error.row_id, "b");
    }

    #[test]
    fn test_all_padding_column_scores_zero() {
        let counts = vec![BaseCounts::default()];
        let profile = ConservationProfile::from_base_counts(&counts);
        assert_eq!(profile.values(), &[0.0]);
    }
}
