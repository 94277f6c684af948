//! Eligibility mask: which positions are still selectable.

use crate::core::error::{CardinalError, Result};
use crate::core::types::{OutOfRangePolicy, SampleIndex};
use log::warn;

/// Transient marker array, one entry per candidate position.
///
/// Entries start eligible; labeled positions are cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibilityMask {
    eligible: Vec<bool>,
}

impl EligibilityMask {
    /// Create a mask of `len` eligible positions.
    pub fn new(len: usize) -> Self {
        EligibilityMask {
            eligible: vec![true; len],
        }
    }

    /// Number of positions covered by the mask.
    pub fn len(&self) -> usize {
        self.eligible.len()
    }

    /// True if the mask covers no positions.
    pub fn is_empty(&self) -> bool {
        self.eligible.is_empty()
    }

    /// Whether `index` is inside the mask and still eligible.
    pub fn is_eligible(&self, index: SampleIndex) -> bool {
        self.eligible.get(index).copied().unwrap_or(false)
    }

    /// Number of eligible positions.
    pub fn num_eligible(&self) -> usize {
        self.eligible.iter().filter(|&&e| e).count()
    }

    /// Mark every labeled position ineligible.
    ///
    /// Entries `>= len()` are rejected or skipped according to `policy`. With
    /// [`OutOfRangePolicy::Reject`] the mask is left untouched on error.
    /// Returns the number of skipped entries.
    pub fn mark_labeled(
        &mut self,
        labeled: &[SampleIndex],
        policy: OutOfRangePolicy,
    ) -> Result<usize> {
        let len = self.len();

        if policy == OutOfRangePolicy::Reject {
            if let Some(&index) = labeled.iter().find(|&&index| index >= len) {
                return Err(CardinalError::invalid_argument(
                    "labeled_indices",
                    index.to_string(),
                    format!("must be less than the eligibility length {}", len),
                ));
            }
        }

        let mut skipped = 0;
        for &index in labeled {
            match self.eligible.get_mut(index) {
                Some(slot) => *slot = false,
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            warn!(
                "ignored {} labeled index(es) outside the eligibility length {}",
                skipped, len
            );
        }

        Ok(skipped)
    }

    /// Eligible positions in ascending order.
    pub fn candidates(&self) -> Vec<SampleIndex> {
        self.eligible
            .iter()
            .enumerate()
            .filter_map(|(index, &eligible)| eligible.then_some(index))
            .collect()
    }
}
