use std::path::Path;
use std::process::Command;

/// Run git in `dir` and return trimmed stdout, failing the test on error.
pub(crate) fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run git {}: {}", args.join(" "), e));
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

pub(crate) fn configure_user(repo_dir: &Path) {
    git(repo_dir, &["config", "user.email", "test@example.com"]);
    git(repo_dir, &["config", "user.name", "Test User"]);
    git(repo_dir, &["config", "pull.rebase", "false"]);
}

pub(crate) fn init_bare_repo(path: &Path) {
    git(path, &["init", "--bare", "--initial-branch=main"]);
}
