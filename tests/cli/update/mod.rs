mod push_retry_contract;

/// Parse the one-line JSON outcome `mergelog update` prints.
fn outcome_json(stdout: &[u8]) -> serde_json::Value {
    let text = String::from_utf8_lossy(stdout);
    let line = text.lines().last().expect("update should print one JSON line");
    serde_json::from_str(line).expect("update output should be JSON")
}
