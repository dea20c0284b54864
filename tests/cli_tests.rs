use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;

fn cmd_in(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("lotocover").unwrap();
    cmd.current_dir(dir);
    cmd
}

#[test]
fn test_help_message() {
    let mut cmd = Command::cargo_bin("lotocover").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Greedy set-cover engine"));
}

#[test]
fn test_solve_requires_input_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = cmd_in(dir.path());
    cmd.args(["solve", "--k", "14"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_solve_rejects_unknown_k() {
    let mut cmd = Command::cargo_bin("lotocover").unwrap();
    cmd.args(["solve", "--k", "10"]);

    cmd.assert().failure();
}

#[test]
fn test_solve_reports_malformed_input_line() {
    let dir = tempfile::tempdir().unwrap();
    let resultados = dir.path().join("resultados");
    fs::create_dir_all(&resultados).unwrap();

    let mut s15 = fs::File::create(resultados.join("S15.csv")).unwrap();
    writeln!(s15, "1,2,3,4,5,6,7,8,9,10,11,12,13,14,15").unwrap();
    let mut s14 = fs::File::create(resultados.join("S14.csv")).unwrap();
    writeln!(s14, "1,2,3,4,5,6,7,8,9,10,11,12,13,14").unwrap();
    writeln!(s14, "1,2,3,4,5,6,7,8,9,10,11,12,13,abc").unwrap();

    let mut cmd = cmd_in(dir.path());
    cmd.args(["solve", "--k", "14"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("S14.csv:2"))
        .stderr(predicate::str::contains("invalid symbol token"));
}

#[test]
fn test_gen_writes_small_table() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = cmd_in(dir.path());
    cmd.args(["gen", "--k", "1"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("S1: 25 lines"));

    let text = fs::read_to_string(dir.path().join("resultados/S1.csv")).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 25);
    assert_eq!(lines[0], "1");
    assert_eq!(lines[24], "25");
}

#[test]
fn test_verify_needs_a_target() {
    let mut cmd = Command::cargo_bin("lotocover").unwrap();
    cmd.arg("verify");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--k"));
}

#[test]
fn test_verify_reports_missing_sb_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = cmd_in(dir.path());
    cmd.args(["verify", "--k", "14"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("S14.csv"));
}

#[test]
fn test_cost_report_prices_existing_files() {
    let dir = tempfile::tempdir().unwrap();
    let saida = dir.path().join("prog2_saida");
    fs::create_dir_all(&saida).unwrap();
    let mut sb = fs::File::create(saida.join("SB15_14.csv")).unwrap();
    writeln!(sb, "1,2,3,4,5,6,7,8,9,10,11,12,13,14,15").unwrap();
    writeln!(sb, "1,2,3,4,5,6,7,8,9,10,11,12,13,14,16").unwrap();
    writeln!(sb, "1,2,3,4,5,6,7,8,9,10,11,12,13,14,17").unwrap();

    let mut cmd = cmd_in(dir.path());
    cmd.arg("cost");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("SB15_14"))
        .stdout(predicate::str::contains("9.00"))
        .stdout(predicate::str::contains("MISSING"));

    let csv = fs::read_to_string(dir.path().join("prog7_saida/resultado_custo_sb.csv")).unwrap();
    assert!(csv.contains("SB15_14,3,9.00,OK"));
    assert!(csv.contains("SB15_11,-,-,MISSING"));
}
