use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "petpat-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_scenarios_writes_output() {
    let exe = env!("CARGO_BIN_EXE_petpat-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-scenarios", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available scenarios"));
    assert!(content.contains("giant-veryhigh-buy"));
}

#[test]
fn cli_all_scenarios_pass_with_markdown_report() {
    let exe = env!("CARGO_BIN_EXE_petpat-tester");
    let output_path = temp_path("md");
    let status = Command::new(exe)
        .args(["--report", "markdown", "--scenarios", "all", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("# PetPat Scenario Results"));
    assert!(content.contains("| senior-insurance | ✅"));
}

#[test]
fn cli_json_report_on_stdout() {
    let exe = env!("CARGO_BIN_EXE_petpat-tester");
    let output = Command::new(exe)
        .args(["--report", "json", "--scenarios", "default,unknown"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("json report");
    assert_eq!(value.as_array().map(Vec::len), Some(1));
    assert!(stderr.contains("Unknown scenario"));
}
