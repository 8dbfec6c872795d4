use flowscope::config::loader::{load_config_from_yaml, load_fixture_from_yaml, load_script_from_yaml};
use flowscope::config::SourceConfig;
use flowscope::model::{Locale, TaskStatus};
use flowscope::session::UiCommand;
use std::fs;
use std::path::Path;

#[test]
fn test_load_http_config_with_defaults() {
    let yaml_content = r#"
locale: zh
source:
  kind: http
  base_url: "http://detector.local:8000"
"#;
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("review.yaml");
    fs::write(&file_path, yaml_content).expect("Failed to write temp file");

    let config = load_config_from_yaml(&file_path).expect("Failed to load config");
    assert_eq!(config.locale, Locale::Zh);
    assert_eq!(config.page_size, 20);
    assert_eq!(
        config.source,
        SourceConfig::Http {
            base_url: "http://detector.local:8000".to_string(),
            task_path: "/api/task".to_string(),
            flow_path: "/api/flowByTask".to_string(),
            timeout_secs: 10,
        }
    );
}

#[test]
fn test_load_redis_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file_path = temp_dir.path().join("review.yaml");
    fs::write(&file_path, "page_size: 50\nsource:\n  kind: redis\n  url: redis://127.0.0.1:6379/0\n").unwrap();

    let config = load_config_from_yaml(&file_path).unwrap();
    assert_eq!(config.locale, Locale::En);
    assert_eq!(config.page_size, 50);
    assert!(matches!(config.source, SourceConfig::Redis { ref key_prefix, .. } if key_prefix == "flowscope"));
}

#[test]
fn test_missing_file_reports_path() {
    let err = load_config_from_yaml(Path::new("does/not/exist.yaml")).unwrap_err();
    assert!(err.to_string().contains("does/not/exist.yaml"));
}

#[test]
fn test_demo_files_load() {
    let fixture = load_fixture_from_yaml(Path::new("demos/fixture.yaml")).expect("Failed to load fixture");
    assert_eq!(fixture.tasks.len(), 3);
    assert_eq!(fixture.tasks[1].end_time, None);
    assert_eq!(fixture.tasks[2].status, TaskStatus::Error);
    assert_eq!(fixture.flows.len(), 3);

    let config = load_config_from_yaml(Path::new("demos/review.yaml")).expect("Failed to load config");
    assert!(matches!(config.source, SourceConfig::Fixture { .. }));

    let script = load_script_from_yaml(Path::new("demos/replay.yaml")).expect("Failed to load script");
    assert_eq!(script.len(), 5);
    assert_eq!(script[0], UiCommand::Select { task_id: "T-001".to_string() });
    assert_eq!(script[1], UiCommand::Toggle { flow_id: "F1".to_string() });
    assert_eq!(script[4], UiCommand::Clear);
}

#[tokio::test]
async fn test_fixture_source_builds_providers() {
    let providers = SourceConfig::Fixture { path: "demos/fixture.yaml".into() }.build().expect("build should succeed");
    let flows = providers.flows.query("T-001").await.unwrap();
    assert_eq!(flows.data.len(), 2);
    let unknown = providers.flows.query("T-404").await.unwrap();
    assert!(unknown.success && unknown.data.is_empty());
}
