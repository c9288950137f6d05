use crate::common::SharedBuffer;
use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;
use svc::areas::repository::Repository;
use svc::config::Config;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// A repository with `1.txt` and `a/2.txt` committed on master
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_svc_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two".to_string(),
    ));

    run_svc_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();
    svc_commit(repository_dir.path(), "Initial commit")
        .assert()
        .success();

    repository_dir
}

pub fn run_svc_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("svc").expect("Failed to find svc binary");
    cmd.env_remove("SVC_DIR");
    cmd.env("NO_COLOR", "1");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn svc_commit(dir: &Path, message: &str) -> Command {
    run_svc_command(dir, &["commit", "-m", message])
}

/// Commit and return the new commit id from the summary line
pub fn svc_commit_id(dir: &Path, message: &str) -> String {
    let output = svc_commit(dir, message).assert().success().get_output().stdout.clone();
    let output = String::from_utf8(output).expect("svc output is valid UTF-8");

    // [<branch> <id>] <message>
    output
        .split_whitespace()
        .nth(1)
        .and_then(|id| id.strip_suffix(']'))
        .map(str::to_string)
        .unwrap_or_else(|| panic!("Unexpected commit output: {output}"))
}

/// An initialized in-process repository rooted at `dir`
pub fn open_repository(dir: &Path) -> (Repository, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let mut repository = Repository::new(Config::with_root(dir), Box::new(buffer.clone()));
    repository.init().expect("Failed to initialize repository");
    buffer.take();

    (repository, buffer)
}
