use crate::common::command::{committed_repository_dir, stage_and_commit, run_minigit_command};
use crate::common::file::{FileSpec, write_file};
use crate::common::repo::{merge_head_path, read_commit, read_head};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

/// History:
///
///       c1 (base)
///      /  \
///    c2    c3
///    |     |
///  master  feat
///
/// master adds b.txt, feat adds c.txt; the three-way merge combines both
/// additions into a new commit on master.
#[rstest]
fn three_way_merge_combines_divergent_snapshots(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir;

    run_minigit_command(dir.path(), &["branch", "feat"])
        .assert()
        .success();

    write_file(FileSpec::new(dir.path().join("b.txt"), "B\n".to_string()));
    stage_and_commit(dir.path(), &["b.txt"], "add b");
    let (_, master_tip) = read_head(dir.path());

    run_minigit_command(dir.path(), &["checkout", "feat"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.path().join("c.txt"), "C\n".to_string()));
    stage_and_commit(dir.path(), &["c.txt"], "add c");

    run_minigit_command(dir.path(), &["checkout", "master"])
        .assert()
        .success();

    run_minigit_command(dir.path(), &["merge", "feat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("three-way"));

    // the merge commit snapshots all three files and parents the old master tip
    let (_, merge_oid) = read_head(dir.path());
    let merge_commit = read_commit(dir.path(), &merge_oid);
    assert_eq!(merge_commit.message, "Merge branch 'feat'");
    assert_eq!(merge_commit.parent, master_tip);

    let paths = merge_commit
        .files
        .iter()
        .map(|(path, _)| path.as_str())
        .collect::<Vec<_>>();
    assert_eq!(paths, vec!["a.txt", "b.txt", "c.txt"]);

    for (file, content) in [("a.txt", "hello\n"), ("b.txt", "B\n"), ("c.txt", "C\n")] {
        assert_eq!(
            std::fs::read_to_string(dir.path().join(file)).unwrap(),
            content
        );
    }

    assert!(!merge_head_path(dir.path()).exists());
}
