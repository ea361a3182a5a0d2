use crate::common::command::{repository_dir, run_minigit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn init_repository_successfully(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;

    run_minigit_command(dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Initialized empty minigit repository",
        ));

    let minigit = dir.path().join(".minigit");
    assert!(minigit.is_dir());
    assert!(minigit.join("objects").is_dir());

    // HEAD starts on an unborn master
    let head = std::fs::read_to_string(minigit.join("HEAD"))?;
    assert_eq!(head.trim(), "master:");

    let branches = std::fs::read_to_string(minigit.join("refs").join("branches"))?;
    assert_eq!(branches.trim(), "master:");

    let index = std::fs::read_to_string(minigit.join("index"))?;
    assert_eq!(index, "");

    Ok(())
}

#[rstest]
fn commands_fail_before_init(repository_dir: TempDir) {
    let dir = repository_dir;

    run_minigit_command(dir.path(), &["status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a minigit repository"));
}
