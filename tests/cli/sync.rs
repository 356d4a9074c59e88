use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

fn setup_catalogs(test: &CliTest) -> Result<()> {
    test.write_file(
        "locales/en.json",
        r#"{ "Hello": "Hello", "Hi {name}": "Hi {name}", "Save": "Save" }"#,
    )?;
    test.write_file(
        "locales/fr.json",
        r#"{ "Hi {name}": "Salut {nom}", "Save": "Save", "Old": "Vieux" }"#,
    )
}

#[test]
fn test_sync_adds_missing_keys() -> Result<()> {
    let test = CliTest::new()?;
    setup_catalogs(&test)?;

    let output = test.run(&["sync"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("fr: added: 1, removed: 0, unchanged: 2"));

    let fr: Value = serde_json::from_str(&test.read_file("locales/fr.json")?)?;
    assert_eq!(fr["Hello"], "Hello");
    assert_eq!(fr["Old"], "Vieux");
    assert_eq!(fr["Hi {name}"], "Salut {nom}");
    Ok(())
}

#[test]
fn test_sync_all_options() -> Result<()> {
    let test = CliTest::new()?;
    setup_catalogs(&test)?;
    test.write_file("locales/en.json", r#"{ "Hello": "Hello", "Hi {name}": "Hi {name}", "Save": "Save changes" }"#)?;

    let output = test.run(&["sync", "--flush", "--remove-untranslated", "--validate-params"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    insta::assert_snapshot!(test.read_file("locales/fr.json")?.trim_end(), @r#"
    {
      "Hello": "Hello",
      "Hi {name}": "[PARAM_MISMATCH] Salut {nom}",
      "Save": "Save changes"
    }
    "#);

    // A second run changes nothing
    let before = test.read_file("locales/fr.json")?;
    test.run(&["sync", "--flush", "--remove-untranslated", "--validate-params"])?;
    assert_eq!(test.read_file("locales/fr.json")?, before);
    Ok(())
}

#[test]
fn test_sync_without_source_catalog() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/fr.json", "{}")?;

    let output = test.run(&["sync"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("lingo extract"));
    Ok(())
}

#[test]
fn test_sync_malformed_catalog_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    setup_catalogs(&test)?;
    test.write_file("locales/fr.json", r#"{ "nested": { "a": "b" } }"#)?;

    let output = test.run(&["sync"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("fr.json"));
    Ok(())
}
