use assert_cmd::{cargo::cargo_bin_cmd, Command};
use serde_json::Value;

/// Get a Command for greedtrace, isolated from any user config
pub fn greedtrace() -> Command {
    let mut cmd = cargo_bin_cmd!("greedtrace");
    cmd.env(
        "GREEDTRACE_CONFIG_DIR",
        std::env::temp_dir().join("greedtrace-tests-no-config"),
    )
    .env_remove("GREEDTRACE_CONFIG")
    .env_remove("GREEDTRACE_LOG");
    cmd
}

/// Parse newline-delimited trace records
pub fn parse_records(stdout: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("trace line is not JSON"))
        .collect()
}

/// Run greedtrace with the given args and return its parsed trace
pub fn trace(args: &[&str]) -> Vec<Value> {
    let output = greedtrace().args(args).output().unwrap();
    assert!(
        output.status.success(),
        "greedtrace {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    parse_records(&output.stdout)
}

pub fn of_type<'a>(records: &'a [Value], kind: &str) -> Vec<&'a Value> {
    records.iter().filter(|r| r["type"] == kind).collect()
}

pub fn final_record(records: &[Value]) -> &Value {
    let finals = of_type(records, "final");
    assert_eq!(finals.len(), 1, "expected exactly one final record");
    finals[0]
}
