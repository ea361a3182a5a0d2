use crate::common::command::{repository_dir, run_minigit_command};
use crate::common::file::{FileSpec, write_file};
use crate::common::repo::read_index;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn re_adding_a_file_keeps_one_entry(repository_dir: TempDir) {
    let dir = repository_dir;

    run_minigit_command(dir.path(), &["init"]).assert().success();
    write_file(FileSpec::new(dir.path().join("a.txt"), "v1\n".to_string()));

    run_minigit_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    let first_oid = read_index(dir.path())["a.txt"].clone();

    // restaging after an edit replaces the staged blob
    write_file(FileSpec::new(dir.path().join("a.txt"), "v2\n".to_string()));
    run_minigit_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success();

    let index = read_index(dir.path());
    assert_eq!(index.len(), 1);
    assert_ne!(index["a.txt"], first_oid);
}
