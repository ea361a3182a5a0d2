use crate::common::command::{committed_repository_dir, run_minigit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn diff_staged_against_head(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir;

    write_file(FileSpec::new(
        dir.path().join("a.txt"),
        "goodbye\n".to_string(),
    ));
    run_minigit_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success();

    for flag in ["--staged", "--cached"] {
        run_minigit_command(dir.path(), &["diff", flag])
            .assert()
            .success()
            .stdout(predicate::str::contains("-hello"))
            .stdout(predicate::str::contains("+goodbye"));
    }
}
