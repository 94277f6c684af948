//! Configuration file integration tests.

use cardinal_rust::*;
use tempfile::TempDir;

#[test]
fn test_toml_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cardinal.toml");

    let config = SamplerConfigBuilder::new()
        .seed(17)
        .eligibility_sizing(EligibilitySizing::RequestCount)
        .out_of_range(OutOfRangePolicy::Ignore)
        .default_n_instances(5)
        .build()
        .unwrap();

    config.save_to_file(&path).unwrap();
    let loaded = SamplerConfig::load_from_file(&path).unwrap();

    assert_eq!(loaded, config);
}

#[test]
fn test_json_round_trip_without_seed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cardinal.json");

    let config = SamplerConfig::default();
    config.save_to_file(&path).unwrap();
    let loaded = SamplerConfig::load_from_file(&path).unwrap();

    assert_eq!(loaded, config);
    assert_eq!(loaded.seed, None);
}

#[test]
fn test_partial_toml_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("partial.toml");
    std::fs::write(&path, "eligibility_sizing = \"request_count\"\n").unwrap();

    let loaded = SamplerConfig::load_from_file(&path).unwrap();

    assert_eq!(loaded.eligibility_sizing, EligibilitySizing::RequestCount);
    assert_eq!(loaded.out_of_range, OutOfRangePolicy::Reject);
    assert_eq!(loaded.default_n_instances, DEFAULT_N_INSTANCES);
}

#[test]
fn test_invalid_file_contents() {
    let dir = TempDir::new().unwrap();

    let bad_value = dir.path().join("bad.toml");
    std::fs::write(&bad_value, "out_of_range = \"clamp\"\n").unwrap();
    assert_eq!(
        SamplerConfig::load_from_file(&bad_value).unwrap_err().category(),
        "config"
    );

    let zero_count = dir.path().join("zero.json");
    std::fs::write(&zero_count, r#"{"default_n_instances": 0}"#).unwrap();
    assert!(matches!(
        SamplerConfig::load_from_file(&zero_count),
        Err(CardinalError::InvalidArgument { .. })
    ));
}

#[test]
fn test_unsupported_extension_and_missing_file() {
    let dir = TempDir::new().unwrap();
    let yaml = dir.path().join("cardinal.yaml");

    assert!(SamplerConfig::default().save_to_file(&yaml).is_err());
    assert!(SamplerConfig::load_from_file(&yaml).is_err());

    let missing = SamplerConfig::load_from_file(dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(missing, CardinalError::IO { .. }));
    assert!(missing.is_recoverable());
}

#[test]
fn test_write_into_missing_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no_such_dir").join("cardinal.json");

    let err = SamplerConfig::default().save_to_file(&path).unwrap_err();
    assert_eq!(err.category(), "io");
}

#[test]
fn test_malformed_json_is_json_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ \"seed\": ").unwrap();

    let err = SamplerConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, CardinalError::Json { .. }));
}

#[test]
fn test_largest_seed_round_trips_through_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cardinal.toml");

    let config = SamplerConfigBuilder::new().seed(MAX_SEED).build().unwrap();
    config.save_to_file(&path).unwrap();

    assert_eq!(SamplerConfig::load_from_file(&path).unwrap().seed, Some(MAX_SEED));
}

#[test]
fn test_seed_past_toml_range_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cardinal.toml");

    for seed in [1u64 << 63, u64::MAX] {
        let err = SamplerConfigBuilder::new().seed(seed).build().unwrap_err();
        assert!(matches!(err, CardinalError::InvalidArgument { .. }));

        let config = SamplerConfig {
            seed: Some(seed),
            ..SamplerConfig::default()
        };
        let err = config.save_to_file(&path).unwrap_err();
        assert!(matches!(err, CardinalError::InvalidArgument { .. }));
        assert!(!path.exists());
    }

    std::fs::write(&path, format!("seed = \"{}\"\n", u64::MAX)).unwrap();
    assert!(SamplerConfig::load_from_file(&path).is_err());
}

#[test]
fn test_loaded_config_drives_sampler() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cardinal.toml");
    std::fs::write(&path, "seed = 3\ndefault_n_instances = 2\n").unwrap();

    let config = SamplerConfig::load_from_file(&path).unwrap();
    let mut from_file = RandomSampler::new(config).unwrap();
    let mut direct = RandomSampler::with_seed(3);

    let selection = from_file.query_default(&PoolSize(10), None).unwrap();
    assert_eq!(selection.len(), 2);
    assert_eq!(selection, direct.sample(&PoolSize(10), None, 2).unwrap());
}
