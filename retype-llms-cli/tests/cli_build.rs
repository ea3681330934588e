use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn scaffold(root: &Path) {
    write(root, "retype.yml", "input: docs\nurl: https://example.com/docs/\n");
    write(root, "docs/index.md", "---\ntitle: Welcome\n---\n# Welcome\n\nStart [here](guide/).\n");
    write(root, "docs/guide/index.md", "# Guide\n\n![arch](/docs/img/arch.png)\n");
    write(root, "docs/guide/setup.md", "Install it. See [top](#top).\n");
    write(root, "docs/static/ignored.md", "never included\n");
}

#[test]
fn build_writes_xml_corpus() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    scaffold(dir.path());

    #[allow(deprecated)]
    Command::cargo_bin("retype-llms")?
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total files count: 3"));

    let corpus = fs::read_to_string(dir.path().join("docs/static/llms.txt"))?;
    let expected = "\
<document>
<title>Index</title>
<url>https://example.com/docs/guide/</url>
<content>

# Guide

![arch](https://example.com/docs/img/arch.png)

</content>
</document>

<document>
<title>Setup</title>
<url>https://example.com/docs/guide/setup/</url>
<content>

Install it. See [top](#top).

</content>
</document>

<document>
<title>Welcome</title>
<url>https://example.com/docs/</url>
<content>

# Welcome

Start [here](https://example.com/docs/guide/).

</content>
</document>
";
    assert_eq!(corpus, expected);
    Ok(())
}

#[test]
fn build_with_sections_format_and_source_override() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    scaffold(dir.path());
    write(dir.path(), "other/notes.md", "just notes\n");

    #[allow(deprecated)]
    Command::cargo_bin("retype-llms")?
        .current_dir(dir.path())
        .args(["other", "--format", "sections", "--output", "out/corpus.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total files count: 1"))
        .stdout(predicate::str::contains("Total words: 4"))
        .stdout(predicate::str::contains("Estimated tokens (words * 1.3): 5"));

    let corpus = fs::read_to_string(dir.path().join("out/corpus.txt"))?;
    assert!(corpus.starts_with("# AI INSTRUCTIONS"));
    assert!(corpus.contains(
        "### SECTION: Notes\nSource: notes.md\nURL: https://example.com/docs/notes/\n\
         <<<BEGIN CONTENT>>>\njust notes\n<<<END CONTENT>>>\n"
    ));
    assert!(corpus.ends_with("### SUMMARY\nDocuments: 1\nWords: 4\nEstimated tokens: 5\n"));
    Ok(())
}

#[test]
fn build_fails_outside_project() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    #[allow(deprecated)]
    Command::cargo_bin("retype-llms")?
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a Retype project"));
    Ok(())
}

#[test]
fn build_fails_on_missing_input_dir() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write(dir.path(), "retype.yml", "input: nowhere\n");

    #[allow(deprecated)]
    Command::cargo_bin("retype-llms")?
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    assert!(!dir.path().join("nowhere").exists());
    Ok(())
}
