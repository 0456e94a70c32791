use factdb_cli::cli::{CheckArgs, ConvertArgs, ReportFormat, TableArgs, TablesArgs, TablesFormat};
use factdb_cli::commands::{format_report, run_check, run_convert, run_tables};
use std::fs;
use std::path::Path;
use std::process::Command;

const GEOBASE: &str = "\
state('texas','tx','austin',14229.0e+3,266.8e+3,28,'houston','dallas','san antonio','el paso').
city('texas','tx','austin',345496).
city('texas','tx','houston',1595138).
border('texas','tx',['oklahoma','arkansas','louisiana','new mexico']).
";

fn convert_args(input: &Path, output: &Path) -> ConvertArgs {
    ConvertArgs {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        tables: TableArgs::default(),
        report: None,
    }
}

#[test]
fn test_run_convert_writes_database() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("geobase");
    let output = dir.path().join("geobase.lisp");
    fs::write(&input, GEOBASE).unwrap();

    let stats = run_convert(&convert_args(&input, &output)).unwrap();
    assert_eq!(stats.facts_parsed, 4);

    let lisp = fs::read_to_string(&output).unwrap();
    assert!(lisp.contains("(define houston:c \"houston\")\n"));
    assert!(lisp.contains("(define capital:<s,c>-array (array \"austin\"))\n"));
}

#[test]
fn test_run_convert_with_dumped_tables() {
    let dir = tempfile::tempdir().unwrap();
    let tables = dir.path().join("tables.json");
    run_tables(&TablesArgs {
        tables: TableArgs::default(),
        format: TablesFormat::Json,
        output: Some(tables.clone()),
    })
    .unwrap();

    let input = dir.path().join("geobase");
    let builtin = dir.path().join("builtin.lisp");
    let reloaded = dir.path().join("reloaded.lisp");
    fs::write(&input, GEOBASE).unwrap();

    run_convert(&convert_args(&input, &builtin)).unwrap();
    let mut args = convert_args(&input, &reloaded);
    args.tables = TableArgs { tables: Some(tables) };
    run_convert(&args).unwrap();

    assert_eq!(fs::read(&builtin).unwrap(), fs::read(&reloaded).unwrap());
}

#[test]
fn test_run_check_reports_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("geobase");
    fs::write(&input, format!("{GEOBASE}highlow('texas','tx','gulf',0,'guadalupe_peak',2667).\n"))
        .unwrap();

    let stats = run_check(&CheckArgs {
        input: input.clone(),
        tables: TableArgs::default(),
        report: ReportFormat::Json,
    })
    .unwrap();

    assert_eq!(stats.facts_matched, 4);
    assert_eq!(stats.unmatched_predicates.get("highlow"), Some(&1));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);

    let report = format_report(&stats, ReportFormat::Json).unwrap();
    assert!(report.contains("\"facts_parsed\": 5"));
}

#[test]
fn test_run_convert_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("geobase.lisp");
    let err = run_convert(&convert_args(&dir.path().join("missing"), &output)).unwrap_err();

    assert!(format!("{err:#}").contains("cannot open fact file"));
    assert!(!output.exists());
}

#[test]
fn test_binary_success_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("geobase");
    let output = dir.path().join("geobase.lisp");
    fs::write(&input, GEOBASE).unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_geobase-to-lisp"))
        .arg(&input)
        .arg(&output)
        .env_remove("FACTDB_TABLES")
        .status()
        .unwrap();

    assert!(status.success());
    assert!(output.exists());
}

#[test]
fn test_binary_fails_on_malformed_line() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("geobase");
    let output = dir.path().join("geobase.lisp");
    fs::write(&input, "city('texas','tx','austin',345496).\nnot a fact\n").unwrap();

    let result = Command::new(env!("CARGO_BIN_EXE_geobase-to-lisp"))
        .arg(&input)
        .arg(&output)
        .env_remove("FACTDB_TABLES")
        .output()
        .unwrap();

    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("line 2"));
    assert!(!output.exists());
}

#[test]
fn test_binary_fails_on_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let status = Command::new(env!("CARGO_BIN_EXE_geobase-to-lisp"))
        .arg(dir.path().join("missing"))
        .arg(dir.path().join("out.lisp"))
        .env_remove("FACTDB_TABLES")
        .status()
        .unwrap();

    assert!(!status.success());
}

#[test]
fn test_factdb_convert_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("geobase");
    fs::write(&input, GEOBASE).unwrap();

    let result = Command::new(env!("CARGO_BIN_EXE_factdb"))
        .arg("convert")
        .arg(&input)
        .arg("-")
        .env_remove("FACTDB_TABLES")
        .output()
        .unwrap();

    assert!(result.status.success());
    let stdout = String::from_utf8(result.stdout).unwrap();
    assert!(stdout.starts_with("(define entities (list "));
}
