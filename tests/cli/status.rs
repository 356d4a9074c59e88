use anyhow::Result;

use crate::{CliTest, stderr, stdout};

fn setup_catalogs(test: &CliTest) -> Result<()> {
    test.write_file("locales/en.json", r#"{ "a": "A", "b": "B", "c": "C" }"#)?;
    test.write_file("locales/fr.json", r#"{ "a": "甲" }"#)?;
    test.write_file("locales/de.json", r#"{ "a": "1", "b": "2", "c": "3" }"#)
}

#[test]
fn test_status_reports_coverage() -> Result<()> {
    let test = CliTest::new()?;
    setup_catalogs(&test)?;

    let output = test.run(&["status"])?;
    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("de  100%  3/3"));
    assert!(out.contains("fr   33%  1/3  (2 missing)"));
    assert!(out.contains("2 missing translations"));
    assert!(!out.contains("- b"));
    Ok(())
}

#[test]
fn test_status_verbose_lists_missing_keys() -> Result<()> {
    let test = CliTest::new()?;
    setup_catalogs(&test)?;

    let output = test.run(&["status", "--verbose"])?;
    assert!(stdout(&output).contains("      - b\n      - c\n"));
    Ok(())
}

#[test]
fn test_status_single_complete_locale_succeeds() -> Result<()> {
    let test = CliTest::new()?;
    setup_catalogs(&test)?;

    let output = test.run(&["status", "--locale", "de"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("All locales are fully translated"));
    assert!(!out.contains("fr"));
    Ok(())
}

#[test]
fn test_status_unknown_locale_is_fully_missing() -> Result<()> {
    let test = CliTest::new()?;
    setup_catalogs(&test)?;

    let output = test.run(&["status", "--locale", "ja"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("ja    0%  0/3  (3 missing)"));
    Ok(())
}

#[test]
fn test_status_missing_locales_dir() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["status"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("localesDir"));
    Ok(())
}
