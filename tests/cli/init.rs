use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["init"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Created .lingorc.json"));

    let content = test.read_file(".lingorc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    for field in ["sourceRoot", "include", "exclude", "functionNames", "localesDir", "sourceLocale"] {
        assert!(parsed.get(field).is_some(), "Config should have '{}' field", field);
    }
    assert_eq!(parsed["functionNames"], serde_json::json!(["$t", "t"]));
    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".lingorc.json", "{}")?;

    let output = test.run(&["init"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".lingorc.json already exists"));
    assert_eq!(test.read_file(".lingorc.json")?, "{}");
    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.run(&["init"])?;
    test.write_file("src/app.js", "t('Ready')")?;

    let output = test.run(&["extract"])?;
    assert!(
        output.status.success(),
        "Extract should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(test.read_file("locales/en.json")?.contains("\"Ready\": \"Ready\""));
    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&[])?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage"));
    Ok(())
}
