use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

fn setup_sources(test: &CliTest) -> Result<()> {
    test.write_file(
        "src/app.ts",
        r#"import { t } from './i18n';

export const greet = (name: string) => t('Bye {name}', { name });
export const title = t('Hello');
"#,
    )?;
    test.write_file(
        "src/App.vue",
        r#"<template>
  <h1>{{ $t('Welcome') }}</h1>
  <p>{{ $t('Hello') }}</p>
</template>
"#,
    )?;
    test.write_file(
        "src/Widget.svelte",
        r#"<script>
  import { t } from '$lib/i18n';
</script>

<button>{$t('Save')}</button>
"#,
    )?;
    // Excluded by default
    test.write_file("node_modules/pkg/index.js", "t('Vendored')")
}

#[test]
fn test_extract_writes_source_catalog() -> Result<()> {
    let test = CliTest::new()?;
    setup_sources(&test)?;

    let output = test.run(&["extract"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Extracted 4 keys from 3 files"));

    insta::assert_snapshot!(test.read_file("locales/en.json")?.trim_end(), @r#"
    {
      "Bye {name}": "Bye {name}",
      "Hello": "Hello",
      "Save": "Save",
      "Welcome": "Welcome"
    }
    "#);
    Ok(())
}

#[test]
fn test_extract_keeps_existing_values() -> Result<()> {
    let test = CliTest::new()?;
    setup_sources(&test)?;
    test.write_file("locales/en.json", r#"{ "Hello": "Hello there", "Stale": "Stale" }"#)?;

    let output = test.run(&["extract"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let catalog: Value = serde_json::from_str(&test.read_file("locales/en.json")?)?;
    assert_eq!(catalog["Hello"], "Hello there");
    assert_eq!(catalog["Stale"], "Stale");
    assert_eq!(catalog["Save"], "Save");
    Ok(())
}

#[test]
fn test_extract_flush_removes_stale_keys() -> Result<()> {
    let test = CliTest::new()?;
    setup_sources(&test)?;
    test.write_file("locales/en.json", r#"{ "Stale": "Stale" }"#)?;

    let output = test.run(&["extract", "--flush"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("added: 4, removed: 1, unchanged: 0"));

    let catalog: Value = serde_json::from_str(&test.read_file("locales/en.json")?)?;
    assert!(catalog.get("Stale").is_none());
    Ok(())
}

#[test]
fn test_extract_report() -> Result<()> {
    let test = CliTest::new()?;
    setup_sources(&test)?;

    let output = test.run(&["extract", "--report", "keys.json"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let report: Value = serde_json::from_str(&test.read_file("keys.json")?)?;
    let entries = report.as_array().expect("report is an array");
    assert_eq!(entries.len(), 4);

    let hello = entries
        .iter()
        .find(|entry| entry["key"] == "Hello")
        .expect("Hello in report");
    assert_eq!(hello["occurrences"].as_array().map(Vec::len), Some(2));
    assert_eq!(hello["hasParams"], false);

    let bye = entries
        .iter()
        .find(|entry| entry["key"] == "Bye {name}")
        .expect("Bye in report");
    assert_eq!(bye["params"], serde_json::json!(["name"]));
    Ok(())
}

#[test]
fn test_extract_honours_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".lingorc.json",
        r#"{
            "sourceRoot": "./web",
            "functionNames": ["translate"],
            "localesDir": "./i18n",
            "sourceLocale": "de",
            "compact": true
        }"#,
    )?;
    test.write_file("web/main.js", "translate('Ja'); t('Ignored');")?;

    let output = test.run(&["extract"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(test.read_file("i18n/de.json")?, "{\"Ja\":\"Ja\"}\n");
    Ok(())
}

#[test]
fn test_extract_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".lingorc.json", r#"{ "include": ["[invalid"] }"#)?;

    let output = test.run(&["extract"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("include"));
    assert!(!test.root().join("locales").exists());
    Ok(())
}

#[test]
fn test_extract_reports_skipped_files_once() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".lingorc.json", r#"{ "fallbackToRegex": false }"#)?;
    test.write_file("src/good.js", "t('Good');\n")?;
    test.write_file("src/bad.js", "t('Bad');\nvar x = 010;\n")?;

    let output = test.run(&["extract"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let err = stderr(&output);
    assert_eq!(err.matches("bad.js").count(), 0, "stderr: {}", err);
    assert_eq!(err.lines().count(), 1, "stderr: {}", err);
    assert!(err.contains("1 file could not be extracted"));

    let catalog = test.read_file("locales/en.json")?;
    assert!(catalog.contains("\"Good\""));
    assert!(!catalog.contains("\"Bad\""));
    Ok(())
}
