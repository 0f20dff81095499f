use super::*;
use crate::files::FileSet;
use std::fs;
use tempfile::TempDir;

fn project_files() -> FileSet {
    [
        ("src/main.py", "import os"),
        ("src/utils.py", "def helper():"),
        ("tests/test_main.py", "def test():"),
        ("tests/fixtures/data.yaml", "data: value"),
        ("tests/cassettes/api.yaml", "recording"),
        ("vendor/lib.js", "console.log()"),
        ("node_modules/pkg/index.js", "module.exports"),
        ("docs/README.md", "# Documentation"),
        (".cache/data", "cached"),
    ]
    .into_iter()
    .map(|(path, content)| (path.to_string(), content.to_string()))
    .collect()
}

fn fixture_decision() -> FileFilterDecision {
    FileFilterDecision::new(
        "Filtering test fixtures and vendor files",
        ["**/*.yaml", ".cache/**"],
        ["node_modules", "vendor"],
        ["tests/test_main.py"],
    )
}

#[test]
fn test_apply_filters() {
    let files = project_files();
    let filtered = apply_filters(&files, &fixture_decision()).unwrap();

    assert!(filtered.contains_key("src/main.py"));
    assert!(filtered.contains_key("src/utils.py"));
    assert!(filtered.contains_key("docs/README.md"));

    assert!(!filtered.contains_key("tests/fixtures/data.yaml"));
    assert!(!filtered.contains_key("tests/cassettes/api.yaml"));
    assert!(!filtered.contains_key("vendor/lib.js"));
    assert!(!filtered.contains_key("node_modules/pkg/index.js"));
    assert!(!filtered.contains_key("tests/test_main.py"));
    assert!(!filtered.contains_key(".cache/data"));

    assert_eq!(filtered.len(), 3);
    // Input is untouched
    assert_eq!(files.len(), 9);
}

#[test]
fn test_outcome_counts_by_rule() {
    let engine = FilterEngine::new(&fixture_decision()).unwrap();
    let outcome = engine.apply(&project_files());

    assert_eq!(outcome.excluded_specific_files, 1);
    assert_eq!(outcome.excluded_by_directory, 2);
    assert_eq!(outcome.excluded_by_pattern, 3);
    assert_eq!(outcome.excluded_total(), 6);
}

#[test]
fn test_verdicts() {
    let engine = FilterEngine::new(&fixture_decision()).unwrap();

    assert_eq!(engine.verdict("src/main.py"), PathVerdict::Keep);
    assert_eq!(
        engine.verdict("tests/test_main.py"),
        PathVerdict::Exclude(ExclusionRule::SpecificFile)
    );
    assert_eq!(
        engine.verdict("vendor/lib.js"),
        PathVerdict::Exclude(ExclusionRule::Directory("vendor".to_string()))
    );
    assert_eq!(
        engine.verdict("tests/fixtures/data.yaml"),
        PathVerdict::Exclude(ExclusionRule::Pattern("**/*.yaml".to_string()))
    );
}

#[test]
fn test_directory_matches_any_segment() {
    let decision = FileFilterDecision::new("", Vec::<String>::new(), vec!["vendor".to_string()], vec![]);
    let engine = FilterEngine::new(&decision).unwrap();

    assert!(engine.is_excluded("vendor/lib.js"));
    assert!(engine.is_excluded("third_party/vendor/lib.js"));
    assert!(engine.is_excluded("a/b/vendor/c/d.js"));
    assert!(!engine.is_excluded("vendored/lib.js"));
    assert!(!engine.is_excluded("src/vendor_utils.js"));
}

#[test]
fn test_multi_segment_directory_entry() {
    let decision = FileFilterDecision::new("", Vec::<String>::new(), vec!["tests/fixtures/".to_string()], vec![]);
    let engine = FilterEngine::new(&decision).unwrap();

    assert!(engine.is_excluded("tests/fixtures/data.json"));
    assert!(engine.is_excluded("pkg/tests/fixtures/deep/data.json"));
    assert!(!engine.is_excluded("tests/unit/fixtures.rs"));
    assert!(!engine.is_excluded("fixtures/tests/data.json"));
}

#[test]
fn test_single_star_stays_in_segment() {
    let decision = FileFilterDecision::new("", ["*.yaml"], Vec::<&str>::new(), Vec::<&str>::new());
    let engine = FilterEngine::new(&decision).unwrap();

    assert!(engine.is_excluded("config.yaml"));
    assert!(!engine.is_excluded("tests/config.yaml"));

    let decision = FileFilterDecision::new("", ["src/**"], Vec::<&str>::new(), Vec::<&str>::new());
    let engine = FilterEngine::new(&decision).unwrap();
    assert!(engine.is_excluded("src/a/b/c.rs"));
    assert!(!engine.is_excluded("lib/src.rs"));
}

#[test]
fn test_specific_file_is_exact() {
    let decision = FileFilterDecision::new(
        "",
        Vec::<&str>::new(),
        Vec::<&str>::new(),
        ["tests/test_main.py"],
    );
    let engine = FilterEngine::new(&decision).unwrap();

    assert!(engine.is_excluded("tests/test_main.py"));
    assert!(!engine.is_excluded("other/tests/test_main.py"));
    assert!(!engine.is_excluded("tests/test_main.pyc"));
}

#[test]
fn test_empty_decision_keeps_everything() {
    let files = project_files();
    let decision = FileFilterDecision::keep_all("nothing to drop");

    assert!(decision.is_empty());
    assert_eq!(apply_filters(&files, &decision).unwrap(), files);
}

#[test]
fn test_idempotent() {
    let decision = fixture_decision();
    let once = apply_filters(&project_files(), &decision).unwrap();
    let twice = apply_filters(&once, &decision).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn test_empty_file_set() {
    assert!(apply_filters(&FileSet::new(), &fixture_decision()).unwrap().is_empty());
}

#[test]
fn test_invalid_glob_fails_fast() {
    let decision = FileFilterDecision::new("", ["src/[unclosed"], Vec::<&str>::new(), Vec::<&str>::new());

    let err = apply_filters(&project_files(), &decision).unwrap_err();
    assert!(err.to_string().contains("Invalid glob pattern 'src/[unclosed'"));
}

#[test]
fn test_blank_entries_are_rejected() {
    let decision = FileFilterDecision::new("", Vec::<&str>::new(), ["  "], Vec::<&str>::new());
    assert!(decision.validate().is_err());

    let decision = FileFilterDecision::new("", Vec::<&str>::new(), ["/"], Vec::<&str>::new());
    assert!(FilterEngine::new(&decision).is_err());
}

#[test]
fn test_with_extra_directories() {
    let decision = fixture_decision().with_extra_directories(&["vendor".to_string(), "dist".to_string()]);

    assert_eq!(decision.exclude_directories(), ["node_modules", "vendor", "dist"]);
    assert_eq!(decision.reasoning(), "Filtering test fixtures and vendor files");
}

#[test]
fn test_decision_from_json_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("decision.json");
    fs::write(
        &path,
        r#"{
            "reasoning": "drop fixtures",
            "exclude_patterns": ["**/*.yaml"],
            "exclude_directories": ["vendor"]
        }"#,
    )
    .unwrap();

    let decision = FileFilterDecision::from_path(&path).unwrap();
    assert_eq!(decision.reasoning(), "drop fixtures");
    assert_eq!(decision.exclude_patterns(), ["**/*.yaml"]);
    assert!(decision.exclude_specific_files().is_empty());
}

#[test]
fn test_decision_from_yaml_and_toml_files() {
    let temp_dir = TempDir::new().unwrap();

    let yaml = temp_dir.path().join("decision.yaml");
    fs::write(
        &yaml,
        "reasoning: yaml\nexclude_directories:\n  - node_modules\nexclude_specific_files:\n  - a.txt\n",
    )
    .unwrap();
    let decision = FileFilterDecision::from_path(&yaml).unwrap();
    assert_eq!(decision.exclude_directories(), ["node_modules"]);
    assert_eq!(decision.exclude_specific_files(), ["a.txt"]);

    let toml_path = temp_dir.path().join("decision.toml");
    fs::write(&toml_path, "reasoning = \"toml\"\nexclude_patterns = [\".cache/**\"]\n").unwrap();
    let decision = FileFilterDecision::from_path(&toml_path).unwrap();
    assert_eq!(decision.exclude_patterns(), [".cache/**"]);
}

#[test]
fn test_decision_file_with_bad_glob_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("decision.json");
    fs::write(&path, r#"{"exclude_patterns": ["a[b"]}"#).unwrap();

    assert!(FileFilterDecision::from_path(&path).is_err());
}

#[test]
fn test_decision_file_with_misspelled_key_is_rejected() {
    let temp_dir = TempDir::new().unwrap();

    let json = temp_dir.path().join("decision.json");
    fs::write(&json, r#"{"exclude_directory": ["vendor"]}"#).unwrap();
    let err = FileFilterDecision::from_path(&json).unwrap_err();
    assert!(format!("{err:#}").contains("exclude_directory"));

    let yaml = temp_dir.path().join("decision.yaml");
    fs::write(&yaml, "exclude_pattern:\n  - \"*.js\"\n").unwrap();
    assert!(FileFilterDecision::from_path(&yaml).is_err());
}
