use crate::common::command::{committed_repository_dir, stage_and_commit, run_minigit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn checkout_removes_files_absent_from_target(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir;

    run_minigit_command(dir.path(), &["branch", "before-b"])
        .assert()
        .success();

    write_file(FileSpec::new(dir.path().join("b.txt"), "B\n".to_string()));
    stage_and_commit(dir.path(), &["b.txt"], "add b");
    assert!(dir.path().join("b.txt").exists());

    run_minigit_command(dir.path(), &["checkout", "before-b"])
        .assert()
        .success();

    // b.txt is not part of the target snapshot
    assert!(!dir.path().join("b.txt").exists());
    assert!(dir.path().join("a.txt").exists());
}
