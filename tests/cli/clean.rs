use anyhow::Result;

use crate::{CliTest, stderr, stdout};

fn setup_catalogs(test: &CliTest) -> Result<()> {
    test.write_file("locales/en.json", r#"{ "a": "a", "b": "b", "c": "c" }"#)?;
    test.write_file("locales/fr.json", r#"{ "a": "A", "b": "", "c": "c" }"#)
}

#[test]
fn test_clean_dry_run_leaves_files() -> Result<()> {
    let test = CliTest::new()?;
    setup_catalogs(&test)?;
    let before = test.read_file("locales/fr.json")?;

    let output = test.run(&["clean"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("fr: 1 key"));
    assert!(out.contains("Would remove 1 key in 1 file."));
    assert_eq!(test.read_file("locales/fr.json")?, before);
    Ok(())
}

#[test]
fn test_clean_apply_remove_untranslated() -> Result<()> {
    let test = CliTest::new()?;
    setup_catalogs(&test)?;

    let output = test.run(&["clean", "--remove-untranslated", "--apply"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Removed 2 keys in 1 file."));

    insta::assert_snapshot!(test.read_file("locales/fr.json")?.trim_end(), @r#"
    {
      "a": "A"
    }
    "#);
    // The source locale is never cleaned
    assert_eq!(test.read_file("locales/en.json")?, r#"{ "a": "a", "b": "b", "c": "c" }"#);
    Ok(())
}

#[test]
fn test_clean_nothing_to_do() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/en.json", r#"{ "a": "a" }"#)?;
    test.write_file("locales/fr.json", r#"{ "a": "A" }"#)?;

    let output = test.run(&["clean", "--apply"])?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Nothing to clean"));
    Ok(())
}
