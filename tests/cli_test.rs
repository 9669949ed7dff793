use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use anyhow::{anyhow, Result};

fn run_with_path(path: &str) -> Result<String> {
    let binary_path = env!("CARGO_BIN_EXE_transaction-report");

    let output = Command::new(binary_path)
        .arg(path)
        .output()?;

    assert!(output.status.success());

    Ok(String::from_utf8(output.stdout)?)
}

fn sample(name: &str) -> Result<String> {
    let path = Path::new("samples").join(name);
    path.to_str().map(str::to_string).ok_or_else(|| anyhow!("sample path is not UTF-8"))
}

#[test]
fn test_cli_prints_full_report_for_sample() -> Result<()> {
    let stdout = run_with_path(&sample("ledger.csv")?)?;

    let expected = "\
Transaction Report
------------------
Final Balance: 60.00
Largest Transaction: ID T1 with amount 100.00
Transaction Count:
  Credits: 1
  Debits: 1
";

    assert_eq!(stdout, expected);

    Ok(())
}

#[test]
fn test_cli_skips_malformed_lines_and_unknown_kinds() -> Result<()> {
    let stdout = run_with_path(&sample("mixed.csv")?)?;
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines[2], "Final Balance: 170.50");
    assert_eq!(lines[3], "Largest Transaction: ID T5 with amount 900.00");
    assert_eq!(lines[5], "  Credits: 2");
    assert_eq!(lines[6], "  Debits: 2");

    Ok(())
}

#[test]
fn test_cli_reports_header_only_file_as_empty() -> Result<()> {
    let stdout = run_with_path(&sample("header_only.csv")?)?;

    assert_eq!(stdout, "no transactions found in the file\n");
    assert!(!stdout.contains("Final Balance"));

    Ok(())
}

#[test]
fn test_cli_reports_missing_file_and_exits_successfully() -> Result<()> {
    let stdout = run_with_path(&sample("does_not_exist.csv")?)?;

    assert!(stdout.starts_with("file does not exist"));

    Ok(())
}

#[test]
fn test_cli_reports_empty_path_argument() -> Result<()> {
    let stdout = run_with_path("")?;

    assert_eq!(stdout, "path cannot be empty\n");

    Ok(())
}

#[test]
fn test_cli_prompts_for_path_when_no_argument_is_given() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_transaction-report");

    let mut child = Command::new(binary_path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;

    let mut stdin = child.stdin.take().ok_or_else(|| anyhow!("stdin was not piped"))?;
    writeln!(stdin, "{}", sample("ledger.csv")?)?;
    drop(stdin);

    let output = child.wait_with_output()?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let mut lines = stdout.lines();

    assert_eq!(lines.next(), Some("Please enter the path of the ledger file:"));
    assert_eq!(lines.next(), Some("Transaction Report"));

    Ok(())
}

#[test]
fn test_cli_prompt_with_empty_answer_reports_empty_path() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_transaction-report");

    let mut child = Command::new(binary_path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;

    let mut stdin = child.stdin.take().ok_or_else(|| anyhow!("stdin was not piped"))?;
    writeln!(stdin)?;
    drop(stdin);

    let output = child.wait_with_output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(output.status.success());
    assert!(stdout.ends_with("path cannot be empty\n"));

    Ok(())
}

#[test]
fn test_cli_rejects_too_many_arguments() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_transaction-report");

    let output = Command::new(binary_path)
        .args(["a.csv", "info", "extra"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    Ok(())
}
