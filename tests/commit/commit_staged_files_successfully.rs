use crate::common::command::{minigit_commit, repository_dir, run_minigit_command};
use crate::common::file::{FileSpec, write_file};
use crate::common::repo::{read_blob, read_branches, read_commit, read_head, read_index};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_staged_files_successfully(repository_dir: TempDir) {
    let dir = repository_dir;

    run_minigit_command(dir.path(), &["init"]).assert().success();
    write_file(FileSpec::new(dir.path().join("a.txt"), "hello\n".to_string()));
    run_minigit_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success();

    minigit_commit(dir.path(), "c1")
        .assert()
        .success()
        .stdout(predicate::str::contains("(root-commit)"))
        .stdout(predicate::str::contains("c1"));

    // HEAD and the branch pointer name the same commit
    let (branch, head_oid) = read_head(dir.path());
    assert_eq!(branch, "master");
    assert_eq!(read_branches(dir.path())["master"], head_oid);

    // the commit records the snapshot, with no parent
    let commit = read_commit(dir.path(), &head_oid);
    assert_eq!(commit.message, "c1");
    assert_eq!(commit.parent, "");
    assert_eq!(commit.files.len(), 1);

    let (path, blob_oid) = &commit.files[0];
    assert_eq!(path, "a.txt");
    assert_eq!(read_blob(dir.path(), blob_oid), "hello\n");

    // the index is reset after a successful commit
    assert!(read_index(dir.path()).is_empty());
}
