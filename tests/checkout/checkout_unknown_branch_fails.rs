use crate::common::command::{committed_repository_dir, run_minigit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn checkout_unknown_branch_fails(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir;

    run_minigit_command(dir.path(), &["checkout", "nonexistent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown branch 'nonexistent'"));
}
