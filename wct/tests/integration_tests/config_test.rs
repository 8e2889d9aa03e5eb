// tests/integration_tests/config_test.rs
use super::common::{create_config_file, create_test_file, setup_test_directory};
use anyhow::Result;
use wct::{WordCountError, load_config};

#[test]
fn test_load_json_config() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let path = create_config_file(temp_dir.path(), &["<p>", "</p>"], &["!"])?;

    let config = load_config(&path)?;
    assert_eq!(config.ignore_tags(), ["<p>", "</p>"]);
    assert_eq!(config.remove_chars(), ["!"]);
    Ok(())
}

#[test]
fn test_load_yaml_and_toml_configs() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let yaml = create_test_file(temp_dir.path(), "rules.yaml", "ignore_tags:\n  - <p>\n")?;
    let toml = create_test_file(temp_dir.path(), "rules.toml", "remove_chars = [\"!\"]\n")?;

    assert_eq!(load_config(&yaml)?.ignore_tags(), ["<p>"]);
    assert_eq!(load_config(&toml)?.remove_chars(), ["!"]);
    Ok(())
}

#[test]
fn test_unrecognized_categories_are_tolerated() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let path = create_test_file(
        temp_dir.path(),
        "config.json",
        r#"{"ignore_tags": ["<p>"], "future_rules": ["x"]}"#,
    )?;

    let config = load_config(&path)?;
    assert_eq!(config.category_count(), 2);
    assert!(config.remove_chars().is_empty());
    Ok(())
}

#[test]
fn test_malformed_configs_fail() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    for (name, content) in [
        ("broken.json", "{"),
        ("numbers.json", r#"{"remove_chars": [1]}"#),
        ("list.json", r#"["<p>"]"#),
    ] {
        let path = create_test_file(temp_dir.path(), name, content)?;
        assert!(
            matches!(load_config(&path), Err(WordCountError::ConfigFormat(_))),
            "{name} should be rejected"
        );
    }
    Ok(())
}
