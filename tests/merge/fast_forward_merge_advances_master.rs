use crate::common::command::{committed_repository_dir, stage_and_commit, run_minigit_command};
use crate::common::file::{FileSpec, write_file};
use crate::common::repo::{merge_head_path, read_branches, read_head};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

/// History:
///
///   c1 -- c2        (feat)
///   ^
///   master
///
/// Merging feat into master requires no new commit, only advancing the
/// branch pointer and materialising feat's snapshot.
#[rstest]
fn fast_forward_merge_advances_master(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir;

    run_minigit_command(dir.path(), &["branch", "feat"])
        .assert()
        .success();
    run_minigit_command(dir.path(), &["checkout", "feat"])
        .assert()
        .success();

    write_file(FileSpec::new(dir.path().join("a.txt"), "X\n".to_string()));
    stage_and_commit(dir.path(), &["a.txt"], "c2");
    let feat_tip = read_branches(dir.path())["feat"].clone();

    run_minigit_command(dir.path(), &["checkout", "master"])
        .assert()
        .success();

    run_minigit_command(dir.path(), &["merge", "feat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fast-forward"));

    // master now names the feat tip and the working tree matches it
    let (branch, head_oid) = read_head(dir.path());
    assert_eq!(branch, "master");
    assert_eq!(head_oid, feat_tip);
    assert_eq!(read_branches(dir.path())["master"], feat_tip);

    let content = std::fs::read_to_string(dir.path().join("a.txt")).unwrap();
    assert_eq!(content, "X\n");

    assert!(!merge_head_path(dir.path()).exists());
}
