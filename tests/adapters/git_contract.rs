use crate::harness::TestContext;
use crate::harness::git_repository::git;
use mergelog::adapters::GitCommandAdapter;
use mergelog::ports::{CommitIdentity, Git};
use std::fs;
use std::path::Path;

fn bot() -> CommitIdentity {
    CommitIdentity { name: "github-actions".into(), email: "github-actions@github.com".into() }
}

#[test]
fn reports_head_and_current_branch() {
    let ctx = TestContext::new();
    let adapter = GitCommandAdapter::new(ctx.work_dir().to_path_buf());

    assert_eq!(adapter.get_current_branch().unwrap(), "main");
    assert_eq!(adapter.get_head_sha().unwrap(), ctx.git(&["rev-parse", "HEAD"]));
}

#[test]
fn current_branch_of_unborn_repository() {
    let dir = tempfile::tempdir().unwrap();
    git(dir.path(), &["init", "--initial-branch=release"]);
    let adapter = GitCommandAdapter::new(dir.path().to_path_buf());

    assert_eq!(adapter.get_current_branch().unwrap(), "release");
}

#[test]
fn detects_uncommitted_changes_per_file() {
    let ctx = TestContext::new();
    let adapter = GitCommandAdapter::new(ctx.work_dir().to_path_buf());
    let changelog = Path::new("CHANGELOG.md");

    assert!(!adapter.has_uncommitted_changes(changelog).unwrap());
    assert!(!adapter.has_uncommitted_changes(Path::new("missing.md")).unwrap());

    fs::write(ctx.work_dir().join("CHANGELOG.md"), "# Changelog\n\n- entry\n").unwrap();
    assert!(adapter.has_uncommitted_changes(changelog).unwrap());
    assert!(adapter.has_uncommitted_changes(&ctx.work_dir().join("CHANGELOG.md")).unwrap());

    fs::write(ctx.work_dir().join("NEW.md"), "new\n").unwrap();
    assert!(adapter.has_uncommitted_changes(Path::new("NEW.md")).unwrap());
}

#[test]
fn commits_only_given_files_with_author() {
    let ctx = TestContext::new();
    let adapter = GitCommandAdapter::new(ctx.work_dir().to_path_buf());
    fs::write(ctx.work_dir().join("CHANGELOG.md"), "# Changelog\n\n- entry\n").unwrap();
    fs::write(ctx.work_dir().join("OTHER.md"), "unrelated\n").unwrap();

    let sha = adapter.commit_files("Update changelog", &[Path::new("CHANGELOG.md")], &bot()).unwrap();

    assert_eq!(sha, ctx.git(&["rev-parse", "HEAD"]));
    assert_eq!(ctx.git(&["log", "-1", "--format=%an <%ae>"]), "github-actions <github-actions@github.com>");
    assert_eq!(ctx.git(&["show", "--name-only", "--format=", "HEAD"]), "CHANGELOG.md");
    assert_eq!(ctx.git(&["status", "--porcelain"]), "?? OTHER.md");
}

#[test]
fn commit_with_nothing_staged_fails() {
    let ctx = TestContext::new();
    let adapter = GitCommandAdapter::new(ctx.work_dir().to_path_buf());

    let err = adapter.commit_files("Update changelog", &[Path::new("CHANGELOG.md")], &bot()).unwrap_err();
    assert!(err.to_string().contains("git commit"));
}

#[test]
fn pushes_head_to_branch() {
    let ctx = TestContext::new();
    let adapter = GitCommandAdapter::new(ctx.work_dir().to_path_buf());
    fs::write(ctx.work_dir().join("CHANGELOG.md"), "# Changelog\n\n- entry\n").unwrap();
    let sha = adapter.commit_files("Update changelog", &[Path::new("CHANGELOG.md")], &bot()).unwrap();

    adapter.push_head("origin", "main", None).unwrap();

    assert_eq!(ctx.remote_head(), sha);
}

#[test]
fn reset_to_remote_replaces_local_commit_with_remote_tip() {
    let ctx = TestContext::new();
    let adapter = GitCommandAdapter::new(ctx.work_dir().to_path_buf());
    ctx.push_concurrent_commit("CHANGELOG.md", "# Changelog\n\n- Other (#20)\n");
    fs::write(ctx.work_dir().join("CHANGELOG.md"), "# Changelog\n\n- Mine (#21)\n").unwrap();
    adapter.commit_files("Update changelog", &[Path::new("CHANGELOG.md")], &bot()).unwrap();
    fs::write(ctx.work_dir().join("LOCAL.md"), "untracked\n").unwrap();

    assert!(adapter.push_head("origin", "main", None).is_err());
    adapter.reset_to_remote("origin", "main", None).unwrap();

    assert_eq!(adapter.get_head_sha().unwrap(), ctx.remote_head());
    assert_eq!(ctx.changelog(), "# Changelog\n\n- Other (#20)\n");
    assert!(ctx.work_dir().join("LOCAL.md").exists());
    assert!(!adapter.has_uncommitted_changes(Path::new("CHANGELOG.md")).unwrap());
}

#[test]
fn counts_commits_ahead_of_tracking_branch() {
    let ctx = TestContext::new();
    let adapter = GitCommandAdapter::new(ctx.work_dir().to_path_buf());

    assert_eq!(adapter.commits_ahead_of("origin", "main").unwrap(), Some(0));

    fs::write(ctx.work_dir().join("CHANGELOG.md"), "# Changelog\n\n- entry\n").unwrap();
    adapter.commit_files("Update changelog", &[Path::new("CHANGELOG.md")], &bot()).unwrap();
    assert_eq!(adapter.commits_ahead_of("origin", "main").unwrap(), Some(1));

    adapter.push_head("origin", "main", None).unwrap();
    assert_eq!(adapter.commits_ahead_of("origin", "main").unwrap(), Some(0));
}

#[test]
fn ahead_count_is_unknown_without_tracking_branch() {
    let ctx = TestContext::new();
    let adapter = GitCommandAdapter::new(ctx.work_dir().to_path_buf());

    assert_eq!(adapter.commits_ahead_of("origin", "release").unwrap(), None);
}
