// alignment.rs - Multiple sequence alignment model, padding and consensus

use std::fmt;

/// Gap symbol emitted by the external aligner
pub const GAP: u8 = b'-';

/// Sentinel appended to short rows so every row spans the same columns.
/// Never counted in identity or consensus arithmetic.
pub const PADDING: u8 = b'.';

/// One aligned allele row
#[derive(Debug, Clone)]
pub struct AlignedRow {
    pub id: String,
    pub sequence: Vec<u8>,
}

/// Rows of unequal length after padding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentInconsistency {
    pub row_id: String,
    pub expected: usize,
    pub found: usize,
}

impl fmt::Display for AlignmentInconsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Alignment row '{}' spans {} columns, expected {}",
            self.row_id, self.found, self.expected
        )
    }
}

impl From<AlignmentInconsistency> for String {
    fn from(error: AlignmentInconsistency) -> Self {
        error.to_string()
    }
}

/// Per-column base observation counts.
/// Gaps count toward total observations but never toward the most frequent
/// base; padding and ambiguity codes count toward neither.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaseCounts {
    pub a: usize,
    pub c: usize,
    pub g: usize,
    pub t: usize,
    pub gap: usize,
}

impl BaseCounts {
    pub fn observe(&mut self, symbol: u8) {
        match symbol.to_ascii_uppercase() {
            b'A' => self.a += 1,
            b'C' => self.c += 1,
            b'G' => self.g += 1,
            b'T' => self.t += 1,
            GAP => self.gap += 1,
            _ => {}
        }
    }

    /// Count of the most frequent A/C/G/T base at this column
    pub fn most_frequent_base(&self) -> usize {
        self.a.max(self.c).max(self.g).max(self.t)
    }

    /// Total base observations, gaps included
    pub fn total_observations(&self) -> usize {
        self.a + self.c + self.g + self.t + self.gap
    }
}

/// Column-indexed multiple sequence alignment, one row per allele
#[derive(Debug, Clone, Default)]
pub struct Alignment {
    pub rows: Vec<AlignedRow>,
}

impl Alignment {
    pub fn new(rows: Vec<AlignedRow>) -> Self {
        Self { rows }
    }

    /// Number of columns spanned by the longest row
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|row| row.sequence.len()).max().unwrap_or(0)
    }

    /// Right-pad short rows with the padding sentinel so all rows are equal
    /// length. Aligners occasionally emit ragged rows for single-sequence or
    /// degenerate inputs.
    pub fn pad_rows(&mut self) {
        let columns = self.column_count();
        for row in &mut self.rows {
            while row.sequence.len() < columns {
                row.sequence.push(PADDING);
            }
        }
    }

    /// Verify that every row spans the same number of columns
    pub fn check_consistency(&self) -> Result<(), AlignmentInconsistency> {
        let columns = self.column_count();
        for row in &self.rows {
            if row.sequence.len() != columns {
                return Err(AlignmentInconsistency {
                    row_id: row.id.clone(),
                    expected: columns,
                    found: row.sequence.len(),
                });
            }
        }
        Ok(())
    }

    /// Per-column base/gap frequency table
    pub fn base_counts(&self) -> Result<Vec<BaseCounts>, AlignmentInconsistency> {
        self.check_consistency()?;
        let mut counts = vec![BaseCounts::default(); self.column_count()];
        for row in &self.rows {
            for (column, &symbol) in row.sequence.iter().enumerate() {
                counts[column].observe(symbol);
            }
        }
        Ok(counts)
    }

    /// Majority consensus over all non-padding symbols. A column's most
    /// frequent symbol is reported when its relative frequency strictly
    /// exceeds `threshold`, otherwise the ambiguous symbol 'X'. Ties resolve
    /// to the lowest byte value for determinism.
    pub fn consensus(&self, threshold: f64) -> String {
        let columns = self.column_count();
        let mut consensus = String::with_capacity(columns);
        for column in 0..columns {
            let mut counts = [0usize; 256];
            let mut total = 0usize;
            for row in &self.rows {
                if let Some(&symbol) = row.sequence.get(column) {
                    let symbol = symbol.to_ascii_uppercase();
                    if symbol != PADDING {
                        counts[symbol as usize] += 1;
                        total += 1;
                    }
                }
            }
            let (best_symbol, best_count) = counts
                .iter()
                .enumerate()
                .max_by_key(|&(symbol, &count)| (count, usize::MAX - symbol))
                .map(|(symbol, &count)| (symbol as u8, count))
                .unwrap_or((b'X', 0));
            if total > 0 && best_count as f64 / total as f64 > threshold {
                consensus.push(best_symbol as char);
            } else {
                consensus.push('X');
            }
        }
        consensus
    }
}
