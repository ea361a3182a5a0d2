use crate::common::command::{repository_dir, run_minigit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn log_with_no_commits_prints_nothing(repository_dir: TempDir) {
    let dir = repository_dir;

    run_minigit_command(dir.path(), &["init"]).assert().success();

    run_minigit_command(dir.path(), &["log"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
