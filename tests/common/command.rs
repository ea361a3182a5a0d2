use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// A repository with one root commit: `a.txt` containing `hello\n`
#[fixture]
pub fn committed_repository_dir(repository_dir: TempDir) -> TempDir {
    run_minigit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("a.txt"),
        "hello\n".to_string(),
    ));

    run_minigit_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success();

    minigit_commit(repository_dir.path(), "c1").assert().success();

    repository_dir
}

pub fn run_minigit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("minigit").expect("Failed to find minigit binary");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn minigit_commit(dir: &Path, message: &str) -> Command {
    run_minigit_command(dir, &["commit", "-m", message])
}

/// Stage a path and commit in one step
pub fn stage_and_commit(dir: &Path, paths: &[&str], message: &str) {
    for path in paths {
        run_minigit_command(dir, &["add", path]).assert().success();
    }
    minigit_commit(dir, message).assert().success();
}
