use crate::harness::TestContext;
use assert_fs::prelude::*;
use predicates::prelude::*;

fn parse(content: &str) -> serde_yaml::Value {
    serde_yaml::from_str(content).expect("workflow should be valid YAML")
}

#[test]
fn prints_workflow_yaml() {
    let ctx = TestContext::new();

    let output = ctx.cli().arg("workflow").output().unwrap();
    assert!(output.status.success());

    let workflow = parse(&String::from_utf8_lossy(&output.stdout));
    let job = &workflow["jobs"]["update-changelog"];
    assert_eq!(job["if"], "github.event.pull_request.merged == true");
    assert_eq!(job["runs-on"], "ubuntu-latest");
    assert_eq!(job["permissions"]["contents"], "write");
    assert_eq!(workflow["on"]["pull_request"]["types"][0], "closed");

    let steps = job["steps"].as_sequence().unwrap();
    assert_eq!(steps[0]["uses"], "actions/checkout@v4");
    assert_eq!(steps[0]["with"]["persist-credentials"], false);
    let last = steps.last().unwrap();
    assert_eq!(last["run"], "mergelog update");
    assert_eq!(last["env"]["GITHUB_TOKEN"], "${{ secrets.GITHUB_TOKEN }}");
}

#[test]
fn runs_on_label_is_rendered() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["wf", "--runs-on", "self-hosted"])
        .assert()
        .success()
        .stdout(predicate::str::contains("runs-on: self-hosted"));
}

#[test]
fn output_writes_workflow_file() {
    let ctx = TestContext::new();
    let out = assert_fs::TempDir::new().unwrap();

    ctx.cli()
        .args(["workflow", "--output"])
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Wrote"));

    let file = out.child(".github/workflows/changelog.yml");
    file.assert(predicate::path::is_file());
    file.assert(predicate::str::contains("mergelog update"));
    file.assert(predicate::str::contains(concat!("--version ", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn blank_runs_on_is_rejected() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["workflow", "--runs-on", " "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("runs-on"));
}
