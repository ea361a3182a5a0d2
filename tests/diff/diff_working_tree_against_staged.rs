use crate::common::command::{repository_dir, run_minigit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn diff_working_tree_against_staged(repository_dir: TempDir) {
    let dir = repository_dir;

    run_minigit_command(dir.path(), &["init"]).assert().success();
    write_file(FileSpec::new(
        dir.path().join("a.txt"),
        "one\nthree\n".to_string(),
    ));
    run_minigit_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success();

    write_file(FileSpec::new(
        dir.path().join("a.txt"),
        "one\ntwo\nthree\n".to_string(),
    ));

    run_minigit_command(dir.path(), &["diff"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--- a/a.txt"))
        .stdout(predicate::str::contains("+++ b/a.txt"))
        .stdout(predicate::str::contains("+two"));
}
