use crate::common::command::{repository_dir, run_minigit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

// `:` and `,` delimit the commit serialisation, so such paths are refused
// at add time instead of silently corrupting the snapshot.
#[rstest]
#[case("we:ird.txt")]
#[case("we,ird.txt")]
fn adding_a_path_with_reserved_characters_fails(
    repository_dir: TempDir,
    #[case] file_name: &str,
) {
    let dir = repository_dir;

    run_minigit_command(dir.path(), &["init"]).assert().success();
    write_file(FileSpec::new(dir.path().join(file_name), "x\n".to_string()));

    run_minigit_command(dir.path(), &["add", file_name])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reserved"));
}
