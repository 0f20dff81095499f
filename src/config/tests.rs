use super::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_loads_defaults() {
    let config = DocsiftConfig::load().expect("Should load default config");

    assert_eq!(config.encoded.min_text_length, 1000);
    assert_eq!(config.encoded.base64_run_length, 500);
    assert_eq!(config.sampling.large_file_threshold, 10 * 1024);
    assert_eq!(config.sampling.chunk_count, 5);
    assert_eq!(config.sampling.max_line_chars, 200);
    assert!(config.filtering.enabled);
    assert_eq!(config.parallel.mode, ParallelMode::Auto);
}

#[test]
fn test_embedded_defaults_match_code_defaults() {
    let embedded: DocsiftConfig = Figment::new()
        .merge(Toml::string(DEFAULT_CONFIG))
        .extract()
        .unwrap();
    let code = DocsiftConfig::default();

    assert_eq!(embedded.encoded.hex_run_length, code.encoded.hex_run_length);
    assert_eq!(
        embedded.encoded.escape_sequence_count,
        code.encoded.escape_sequence_count
    );
    assert_eq!(
        embedded.sampling.lines_per_chunk,
        code.sampling.lines_per_chunk
    );
    assert_eq!(
        embedded.sampling.total_sample_budget,
        code.sampling.total_sample_budget
    );
    assert_eq!(
        embedded.parallel.min_files_for_parallel,
        code.parallel.min_files_for_parallel
    );
    assert_eq!(embedded.loader.max_file_size, code.loader.max_file_size);
    assert_eq!(
        embedded.filtering.max_total_size,
        code.filtering.max_total_size
    );
}

#[test]
fn test_custom_toml_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("custom.toml");
    fs::write(
        &path,
        r#"
[sampling]
chunk_count = 3
large_file_threshold = 2048

[filtering]
default_exclude_directories = ["vendor"]
"#,
    )
    .unwrap();

    let config = DocsiftConfig::load_with_custom_config(path.to_str()).unwrap();
    assert_eq!(config.sampling.chunk_count, 3);
    assert_eq!(config.sampling.large_file_threshold, 2048);
    // Untouched keys keep their defaults
    assert_eq!(config.sampling.max_line_chars, 200);
    assert_eq!(config.filtering.default_exclude_directories, vec!["vendor"]);
}

#[test]
fn test_custom_yaml_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("custom.yaml");
    fs::write(&path, "parallel:\n  mode: sequential\n  max_threads: 2\n").unwrap();

    let config = DocsiftConfig::load_with_custom_config(path.to_str()).unwrap();
    assert_eq!(config.parallel.mode, ParallelMode::Sequential);
    assert_eq!(config.parallel.max_threads, 2);
}

#[test]
fn test_missing_custom_config_fails() {
    let result = DocsiftConfig::load_with_custom_config(Some("non_existent.toml"));
    assert!(result.is_err());
}

#[test]
fn test_environment_override() {
    // Only this test touches the loader section, so parallel tests stay unaffected
    unsafe {
        std::env::set_var("DOCSIFT_LOADER__MAX_FILE_SIZE", "4096");
    }
    let config = DocsiftConfig::load().unwrap();
    unsafe {
        std::env::remove_var("DOCSIFT_LOADER__MAX_FILE_SIZE");
    }

    assert_eq!(config.loader.max_file_size, 4096);
}

#[test]
fn test_validate_rejects_zero_chunks() {
    let mut config = DocsiftConfig::default();
    config.sampling.chunk_count = 0;
    assert!(config.validate().is_err());

    let mut config = DocsiftConfig::default();
    config.parallel.thread_percentage = 0;
    assert!(config.validate().is_err());

    assert!(DocsiftConfig::default().validate().is_ok());
}
