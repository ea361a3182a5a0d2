use crate::common::command::{minigit_commit, repository_dir, run_minigit_command};
use crate::common::file::{FileSpec, write_file};
use crate::common::repo::{read_commit, read_head};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn vanished_staged_file_is_skipped(repository_dir: TempDir) {
    let dir = repository_dir;

    run_minigit_command(dir.path(), &["init"]).assert().success();
    write_file(FileSpec::new(dir.path().join("kept.txt"), "kept\n".to_string()));
    write_file(FileSpec::new(dir.path().join("gone.txt"), "gone\n".to_string()));

    run_minigit_command(dir.path(), &["add", "kept.txt"])
        .assert()
        .success();
    run_minigit_command(dir.path(), &["add", "gone.txt"])
        .assert()
        .success();

    // the staged file disappears before the commit happens
    std::fs::remove_file(dir.path().join("gone.txt")).unwrap();

    minigit_commit(dir.path(), "partial snapshot").assert().success();

    let (_, head_oid) = read_head(dir.path());
    let commit = read_commit(dir.path(), &head_oid);
    let paths = commit
        .files
        .iter()
        .map(|(path, _)| path.as_str())
        .collect::<Vec<_>>();

    assert_eq!(paths, vec!["kept.txt"]);
}
