// scanner.rs - Sliding window scanner over a conservation profile

use crate::core::profile::{round2, ConservationProfile};
use serde::Serialize;

/// One window over the conservation profile, covering columns
/// [offset, offset + size)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Window {
    pub offset: usize,
    pub size: usize,
    pub min_identity: f64,
    pub mean_identity: f64,
    /// Consensus slice for the range, reported for human inspection
    pub sequence: String,
}

/// Lazy iterator producing every window of a fixed size, left to right.
/// Pure and restartable: cloning yields an identical fresh sequence, and a
/// profile of length L yields exactly max(0, L - size + 1) windows.
#[derive(Debug, Clone)]
pub struct WindowScanner<'a> {
    profile: &'a [f64],
    consensus: &'a str,
    size: usize,
    offset: usize,
}

impl<'a> WindowScanner<'a> {
    pub fn new(profile: &'a ConservationProfile, consensus: &'a str, size: usize) -> Self {
        Self {
            profile: profile.values(),
            consensus,
            size,
            offset: 0,
        }
    }
}

impl<'a> Iterator for WindowScanner<'a> {
    type Item = Window;

    fn next(&mut self) -> Option<Window> {
        if self.size == 0 || self.offset + self.size > self.profile.len() {
            return None;
        }
        let range = &self.profile[self.offset..self.offset + self.size];
        let min_identity = range.iter().copied().fold(f64::INFINITY, f64::min);
        let mean_identity = round2(range.iter().sum::<f64>() / self.size as f64);
        let sequence = self
            .consensus
            .get(self.offset..self.offset + self.size)
            .unwrap_or("")
            .to_string();
        let window = Window {
            offset: self.offset,
            size: self.size,
            min_identity,
            mean_identity,
            sequence,
        };
        self.offset += 1;
        Some(window)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.size == 0 || self.size > self.profile.len() {
            return (0, Some(0));
        }
        let remaining = self.profile.len() - self.size + 1 - self.offset.min(self.profile.len() - self.size + 1);
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for WindowScanner<'a> {}
