//! Common test utilities for cardinal-rust integration tests.

#![allow(dead_code)]

use cardinal_rust::*;
use ndarray::Array2;
use rand::prelude::*;
use std::collections::HashSet;

/// Create a feature matrix standing in for an unlabeled pool
pub fn create_test_pool(num_samples: usize, num_features: usize) -> Array2<f32> {
    let mut rng = StdRng::seed_from_u64(42);

    let mut features = Array2::zeros((num_samples, num_features));

    for i in 0..num_samples {
        for j in 0..num_features {
            features[[i, j]] = rng.gen_range(-5.0..5.0);
        }
    }

    features
}

/// Sampler configuration with a fixed seed and the given sizing policy
pub fn seeded_config(seed: u64, sizing: EligibilitySizing) -> SamplerConfig {
    SamplerConfigBuilder::new()
        .seed(seed)
        .eligibility_sizing(sizing)
        .build()
        .expect("valid test configuration")
}

/// Assert the invariants every selection must satisfy
pub fn assert_valid_selection(selection: &Selection, eligible_len: usize, labeled: &[usize]) {
    let unique: HashSet<_> = selection.indices().iter().copied().collect();
    assert_eq!(unique.len(), selection.len(), "duplicate indices in {:?}", selection);
    assert_eq!(selection.indices().len(), selection.indicators().len());

    for (index, indicator) in selection.iter() {
        assert!(index < eligible_len, "index {} out of range {}", index, eligible_len);
        assert!(!labeled.contains(&index), "labeled index {} was selected", index);
        assert!(indicator, "ineligible index {} was selected", index);
    }
}
