use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use svc::areas::repository::Repository;
use svc::artifacts::merge::resolution::Resolution;
use svc::artifacts::objects::checksum::hash_bytes;
use svc::errors::{ErrorKind, RepositoryError};

mod common;

use common::SharedBuffer;
use common::command::{open_repository, repository_dir};
use common::file::{FileSpec, read_file, write_file};

fn write(dir: &TempDir, path: &str, content: &str) {
    write_file(FileSpec::new(dir.path().join(path), content.to_string()));
}

fn snapshot_paths(repository: &Repository) -> Vec<String> {
    repository
        .head_snapshot()
        .iter()
        .map(|file| file.path.clone())
        .collect()
}

/// History:
///
/// ```text
///       base (shared.txt = "base")
///      /    \
///  master   feature
///  x.txt    y.txt
///  shared.txt = "master"   shared.txt = "feature"
/// ```
///
/// The repository is left on master with a clean index.
#[fixture]
fn diverged(repository_dir: TempDir) -> (TempDir, Repository, SharedBuffer) {
    let (mut repository, buffer) = open_repository(repository_dir.path());
    let dir = repository_dir;

    write(&dir, "shared.txt", "base");
    repository.add("shared.txt").unwrap();
    repository.commit("base").unwrap();
    repository.branch("feature").unwrap();

    write(&dir, "x.txt", "only on master");
    write(&dir, "shared.txt", "master");
    repository.add("x.txt").unwrap();
    repository.commit("master work").unwrap();

    repository.checkout("feature").unwrap();
    write(&dir, "y.txt", "only on feature");
    write(&dir, "shared.txt", "feature");
    repository.add("y.txt").unwrap();
    repository.commit("feature work").unwrap();

    repository.checkout("master").unwrap();
    buffer.take();

    (dir, repository, buffer)
}

#[rstest]
fn merging_diverged_branches_unions_their_files(diverged: (TempDir, Repository, SharedBuffer)) {
    let (_dir, mut repository, buffer) = diverged;
    let master_head = repository.head_commit().unwrap().id().clone();
    let feature_head = repository
        .refs()
        .find_branch("feature")
        .and_then(|branch| branch.head())
        .map(|head| repository.commit_at(head).id().clone())
        .unwrap();

    let merge_id = repository.merge("feature", &[]).unwrap();

    let merge = repository.get_commit(merge_id.as_ref()).unwrap();
    assert!(merge.is_merge());
    assert_eq!(merge.message(), "Merged branch feature");
    assert_eq!(
        repository.parents(merge_id.as_ref()).unwrap(),
        vec![master_head, feature_head]
    );
    assert_eq!(snapshot_paths(&repository), vec!["shared.txt", "x.txt", "y.txt"]);
    assert_eq!(buffer.take(), "Merge successful\n");
}

#[rstest]
fn unresolved_conflicts_keep_the_current_side(diverged: (TempDir, Repository, SharedBuffer)) {
    let (dir, mut repository, _) = diverged;

    repository.merge("feature", &[]).unwrap();

    assert_eq!(read_file(&dir.path().join("shared.txt")), "master");
    assert_eq!(
        repository.head_snapshot()[0].hash,
        hash_bytes("shared.txt", b"master")
    );
}

#[rstest]
fn replacement_overwrites_the_conflicting_file(diverged: (TempDir, Repository, SharedBuffer)) {
    let (dir, mut repository, _) = diverged;
    write(&dir, "fix.txt", "settled");

    let resolutions = [Resolution::new(
        "shared.txt".to_string(),
        Some("fix.txt".to_string()),
    )];
    repository.merge("feature", &resolutions).unwrap();

    assert_eq!(read_file(&dir.path().join("shared.txt")), "settled");
    let shared = repository
        .head_snapshot()
        .iter()
        .find(|file| file.path == "shared.txt")
        .unwrap();
    assert_eq!(shared.hash, hash_bytes("shared.txt", b"settled"));
}

#[rstest]
fn resolution_without_replacement_drops_the_file(diverged: (TempDir, Repository, SharedBuffer)) {
    let (_dir, mut repository, _) = diverged;

    let resolutions = [Resolution::parse("shared.txt")];
    repository.merge("feature", &resolutions).unwrap();

    assert_eq!(snapshot_paths(&repository), vec!["x.txt", "y.txt"]);
}

#[rstest]
fn resolutions_also_apply_to_files_only_on_the_source(
    diverged: (TempDir, Repository, SharedBuffer),
) {
    let (dir, mut repository, _) = diverged;
    write(&dir, "patch.txt", "patched");

    let resolutions = [Resolution::parse("y.txt=patch.txt")];
    repository.merge("feature", &resolutions).unwrap();

    assert_eq!(read_file(&dir.path().join("y.txt")), "patched");
    let y = repository
        .head_snapshot()
        .iter()
        .find(|file| file.path == "y.txt")
        .unwrap();
    assert_eq!(y.hash, hash_bytes("y.txt", b"patched"));
}

#[rstest]
fn source_only_files_can_be_dropped(diverged: (TempDir, Repository, SharedBuffer)) {
    let (_dir, mut repository, _) = diverged;

    let resolutions = [Resolution::parse("shared.txt"), Resolution::parse("y.txt")];
    repository.merge("feature", &resolutions).unwrap();

    assert_eq!(snapshot_paths(&repository), vec!["x.txt"]);
}

#[rstest]
fn source_files_are_materialized_without_clobbering(
    diverged: (TempDir, Repository, SharedBuffer),
) {
    let (dir, mut repository, _) = diverged;
    std::fs::remove_file(dir.path().join("y.txt")).unwrap();

    repository.merge("feature", &[]).unwrap();

    assert_eq!(read_file(&dir.path().join("y.txt")), "only on feature");
    assert_eq!(read_file(&dir.path().join("shared.txt")), "master");
}

#[rstest]
#[case("", "Invalid branch name\n", ErrorKind::Validation)]
#[case("nope", "Branch not found\n", ErrorKind::NotFound)]
#[case("master", "Cannot merge a branch with itself\n", ErrorKind::Conflict)]
fn invalid_merge_targets_are_reported(
    diverged: (TempDir, Repository, SharedBuffer),
    #[case] branch_name: &str,
    #[case] diagnostic: &str,
    #[case] kind: ErrorKind,
) {
    let (_dir, mut repository, buffer) = diverged;
    let commits = repository.commits().len();

    let error = repository.merge(branch_name, &[]).unwrap_err();

    assert_eq!(error.kind(), kind);
    assert_eq!(buffer.take(), diagnostic);
    assert_eq!(repository.commits().len(), commits);
}

#[rstest]
fn merging_with_a_dirty_index_is_refused(diverged: (TempDir, Repository, SharedBuffer)) {
    let (dir, mut repository, buffer) = diverged;
    write(&dir, "x.txt", "uncommitted edit");

    assert!(matches!(
        repository.merge("feature", &[]),
        Err(RepositoryError::UncommittedChanges)
    ));
    assert_eq!(buffer.take(), "Changes must be committed\n");
}

#[rstest]
fn merging_an_ancestor_changes_nothing(repository_dir: TempDir) {
    let (mut repository, buffer) = open_repository(repository_dir.path());
    write(&repository_dir, "a.txt", "a");
    repository.add("a.txt").unwrap();
    repository.commit("base").unwrap();
    repository.branch("behind").unwrap();
    write(&repository_dir, "b.txt", "b");
    repository.add("b.txt").unwrap();
    repository.commit("ahead").unwrap();
    buffer.take();

    let error = repository.merge("behind", &[]).unwrap_err();

    assert!(matches!(error, RepositoryError::NoChanges));
    assert_eq!(buffer.take(), "No changes to merge\n");
    assert_eq!(repository.commits().len(), 2);
}

#[rstest]
fn merging_a_headless_branch_changes_nothing(repository_dir: TempDir) {
    let (mut repository, buffer) = open_repository(repository_dir.path());
    repository.branch("empty").unwrap();
    write(&repository_dir, "a.txt", "a");
    repository.add("a.txt").unwrap();
    repository.commit("m").unwrap();

    assert!(matches!(
        repository.merge("empty", &[]),
        Err(RepositoryError::NoChanges)
    ));
    assert_eq!(buffer.take(), "No changes to merge\n");
}

#[rstest]
fn missing_replacement_files_are_reported(diverged: (TempDir, Repository, SharedBuffer)) {
    let (_dir, mut repository, buffer) = diverged;
    let commits = repository.commits().len();

    let resolutions = [Resolution::parse("shared.txt=missing.txt")];
    let error = repository.merge("feature", &resolutions).unwrap_err();

    assert!(matches!(error, RepositoryError::ResolutionNotFound(ref path) if path == "missing.txt"));
    assert_eq!(error.kind(), ErrorKind::NotFound);
    assert_eq!(buffer.take(), "Resolution file not found\n");
    assert_eq!(repository.commits().len(), commits);
}

#[rstest]
fn unreadable_replacement_files_fail_the_merge(diverged: (TempDir, Repository, SharedBuffer)) {
    let (dir, mut repository, buffer) = diverged;
    std::fs::create_dir(dir.path().join("fixes")).unwrap();

    let resolutions = [Resolution::parse("shared.txt=fixes")];
    let error = repository.merge("feature", &resolutions).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Io);
    assert_eq!(buffer.take(), "Merge failed\n");
}
