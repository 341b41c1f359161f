//! Integration tests for the report pipeline and the command line
//!
//! These run the built binary against saved reports so no discovery tool or
//! network access is needed.

use skill_scout::enrich::skip_all;
use skill_scout::output::render_entries;
use skill_scout::parse_report;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::NamedTempFile;

const SAMPLE_REPORT: &str = "\x1b[1mSearching skills for \"build\"...\x1b[0m\n\
\n\
\x1b[38;5;145macme/tools@1.0.0 some/path\x1b[0m\n\
\x1b[2m└ https://skills.sh/acme/tools/build\x1b[0m\n\
\n\
\x1b[38;5;145mother/kit@lint\x1b[0m\n\
\x1b[2m└ https://skills.sh/other/kit/lint\x1b[0m\n\
\n\
Install with npx skills add <owner/repo@skill>\n";

fn write_report(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Failed to write report");
    file.flush().expect("Failed to flush report");
    file
}

fn skill_scout(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_skill-scout"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .output()
        .expect("Failed to run skill-scout")
}

#[test]
fn test_parse_and_render_skipped() {
    let entries = parse_report(SAMPLE_REPORT);
    assert_eq!(entries.len(), 2);

    let mut out = Vec::new();
    render_entries(&mut out, &skip_all(entries)).expect("Render failed");
    assert_eq!(
        String::from_utf8(out).expect("Output is not UTF-8"),
        "acme/tools@1.0.0 some/path\n\
         └ https://skills.sh/acme/tools/build\n\
         [description skipped]\n\
         \n\
         other/kit@lint\n\
         └ https://skills.sh/other/kit/lint\n\
         [description skipped]\n\
         \n"
    );
}

#[test]
fn test_cli_no_fetch_with_max_one() {
    let report = write_report(SAMPLE_REPORT);
    let path = report.path().to_str().expect("Temp path is not UTF-8");

    let output = skill_scout(&["--input", path, "--max", "1", "--no-fetch"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "acme/tools@1.0.0 some/path\n└ https://skills.sh/acme/tools/build\n[description skipped]\n\n"
    );
}

#[test]
fn test_cli_max_zero_prints_nothing() {
    let report = write_report(SAMPLE_REPORT);
    let path = report.path().to_str().expect("Temp path is not UTF-8");

    let output = skill_scout(&["--input", path, "--max", "0"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_cli_no_entries() {
    let report = write_report("Searching...\nNo matching skills\n");
    let path = report.path().to_str().expect("Temp path is not UTF-8");

    let output = skill_scout(&["--input", path]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "No skills found.\n");
}

#[test]
fn test_cli_reads_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_skill-scout"))
        .args(["--input", "-", "--no-fetch"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to run skill-scout");
    child
        .stdin
        .take()
        .expect("stdin not piped")
        .write_all(SAMPLE_REPORT.as_bytes())
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait");
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("[description skipped]").count(), 2);
}

#[test]
fn test_cli_missing_query_is_usage_error() {
    assert_eq!(skill_scout(&[]).status.code(), Some(2));
    assert_eq!(skill_scout(&["   "]).status.code(), Some(2));
    assert_eq!(skill_scout(&["--bogus", "query"]).status.code(), Some(2));
}

#[test]
fn test_cli_missing_input_file_fails() {
    let output = skill_scout(&["--input", "/nonexistent/report.txt"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[cfg(unix)]
#[test]
fn test_cli_discovery_command_failure() {
    let config = write_report("[discovery]\nprogram = \"false\"\nargs = []\n");
    let path = config.path().to_str().expect("Temp path is not UTF-8");

    let output = skill_scout(&["--config", path, "anything"]);
    assert_eq!(output.status.code(), Some(1));
}

#[cfg(unix)]
#[test]
fn test_cli_discovery_command_output_is_parsed() {
    let report = write_report(SAMPLE_REPORT);
    let config = write_report(&format!(
        "[discovery]\nprogram = \"cat\"\nargs = [\"{}\"]\n",
        report.path().display()
    ));
    let config_path = config.path().to_str().expect("Temp path is not UTF-8");

    // Query words are appended to the configured args, so cat prints the report twice
    let output = skill_scout(&[
        "--config",
        config_path,
        "--no-fetch",
        report.path().to_str().expect("Temp path is not UTF-8"),
    ]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("[description skipped]").count(), 4);
}

#[test]
fn test_cli_invalid_config_fails() {
    let config = write_report("[enrich]\nconcurrency = 1000\n");
    let path = config.path().to_str().expect("Temp path is not UTF-8");

    let output = skill_scout(&["--config", path, "query"]);
    assert_eq!(output.status.code(), Some(1));
}
