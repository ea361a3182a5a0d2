use crate::common::command::{committed_repository_dir, repository_dir, run_minigit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn merging_an_unknown_branch_fails(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir;

    run_minigit_command(dir.path(), &["merge", "nonexistent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown branch 'nonexistent'"));
}

#[rstest]
fn merging_the_current_branch_fails(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir;

    run_minigit_command(dir.path(), &["merge", "master"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("into itself"));
}

#[rstest]
fn merging_with_staged_changes_fails(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir;

    run_minigit_command(dir.path(), &["branch", "feat"])
        .assert()
        .success();

    write_file(FileSpec::new(dir.path().join("a.txt"), "edit\n".to_string()));
    run_minigit_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success();

    run_minigit_command(dir.path(), &["merge", "feat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("staged changes present"));
}

#[rstest]
fn merging_unborn_branches_reports_nothing_to_merge(repository_dir: TempDir) {
    let dir = repository_dir;

    run_minigit_command(dir.path(), &["init"]).assert().success();
    run_minigit_command(dir.path(), &["branch", "feat"])
        .assert()
        .success();

    run_minigit_command(dir.path(), &["merge", "feat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to merge."));
}
