use super::outcome_json;
use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn rejected_push_fails_without_retries() {
    let ctx = TestContext::new();
    ctx.push_concurrent_commit("NOTES.md", "concurrent\n");
    let event = ctx.write_event("closed", true, Some("Add export"), 16);

    ctx.cli()
        .args(["update", "--event"])
        .arg(&event)
        .assert()
        .failure()
        .stderr(predicate::str::contains("git push origin HEAD:refs/heads/main"));

    assert_eq!(ctx.commit_count(), 2);
}

#[test]
fn rejected_push_is_retried_on_remote_tip() {
    let ctx = TestContext::new();
    ctx.write_config("[push]\nrebase_retries = 1\n");
    ctx.push_concurrent_commit("NOTES.md", "concurrent\n");
    let event = ctx.write_event("closed", true, Some("Add export"), 17);

    let output = ctx.cli().args(["update", "--event"]).arg(&event).output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let head = ctx.git(&["rev-parse", "HEAD"]);
    assert_eq!(ctx.remote_head(), head);
    assert_eq!(outcome_json(&output.stdout)["commit_sha"], head.as_str());
    assert!(ctx.work_dir().join("NOTES.md").exists());
    assert!(ctx.changelog().ends_with("- Add export (#17)\n"));
}

#[test]
fn concurrent_changelog_append_is_rebuilt_not_conflicted() {
    let ctx = TestContext::new();
    ctx.write_config("[push]\nrebase_retries = 3\n");
    ctx.push_concurrent_commit("CHANGELOG.md", "# Changelog\n\n- Other merged PR (#20)\n");
    let event = ctx.write_event("closed", true, Some("Add export"), 22);

    let output = ctx.cli().args(["update", "--event"]).arg(&event).output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let outcome = outcome_json(&output.stdout);
    assert_eq!(outcome["pushed"], true);
    assert_eq!(ctx.changelog(), "# Changelog\n\n- Other merged PR (#20)\n- Add export (#22)\n");
    assert_eq!(ctx.commit_count(), 3);

    let head = ctx.git(&["rev-parse", "HEAD"]);
    assert_eq!(ctx.remote_head(), head);
    assert_eq!(outcome["commit_sha"], head.as_str());
    assert_eq!(ctx.git(&["log", "-1", "--format=%an"]), "github-actions");
    assert!(!ctx.work_dir().join(".git/rebase-merge").exists());
    assert_eq!(ctx.git(&["status", "--porcelain", "--", "CHANGELOG.md"]), "");
}
