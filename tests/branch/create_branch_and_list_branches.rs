use crate::common::command::{committed_repository_dir, run_minigit_command};
use crate::common::repo::{read_branches, read_head};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn create_branch_and_list_branches(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir;
    let (_, head_oid) = read_head(dir.path());

    run_minigit_command(dir.path(), &["branch", "feature"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created branch 'feature'"));

    // the new branch points at the current HEAD commit
    let branches = read_branches(dir.path());
    assert_eq!(branches["feature"], head_oid);
    assert_eq!(branches["master"], head_oid);

    run_minigit_command(dir.path(), &["branch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("* master"))
        .stdout(predicate::str::contains("  feature"));
}
