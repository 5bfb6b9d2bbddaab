//! Integration tests for the qmlmeta binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const ANNOTATED: &str = "@QmlElement\nclass Foo(QObject):\n    @Property(int, notify=barChanged)\n    def bar(self):\n        return self._bar\n    barChanged = Signal()\n";

fn qmlmeta() -> Command {
    Command::cargo_bin("qmlmeta").unwrap()
}

#[test]
fn test_version() {
    qmlmeta()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("qmlmeta"));
}

#[test]
fn test_help() {
    // `--help` prints the long description.
    qmlmeta()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("statically analyzes Python"));

    // `-h` prints the short one.
    qmlmeta()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("QML metadata extractor"));
}

#[test]
fn test_invalid_command() {
    qmlmeta().arg("invalid").assert().failure();
}

#[test]
fn test_dump_streams_records_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("foo.py"), ANNOTATED).unwrap();

    let output = qmlmeta()
        .arg("dump")
        .arg(temp_dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let record: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(record["classes"][0]["className"], "Foo");
    assert_eq!(record["classes"][0]["properties"][0]["notify"], "barChanged");
    assert_eq!(record["classes"][0]["signals"][0]["returnType"], "void");
    assert!(stdout.ends_with("}\n"));
}

#[test]
fn test_dump_writes_per_file_artifacts() {
    let temp_dir = TempDir::new().unwrap();
    let out_dir = temp_dir.path().join("meta");
    fs::write(temp_dir.path().join("foo.py"), ANNOTATED).unwrap();
    fs::write(temp_dir.path().join("empty.py"), "x = 1\n").unwrap();

    qmlmeta()
        .arg("dump")
        .arg(temp_dir.path())
        .args(["-O"])
        .arg(&out_dir)
        .assert()
        .success();

    let foo = fs::read_to_string(out_dir.join("foo.py.json")).unwrap();
    assert!(foo.contains("\"className\": \"Foo\""));
    assert!(foo.ends_with("\n"));

    // Non-annotated files still get a record with an empty class list.
    let empty = fs::read_to_string(out_dir.join("empty.py.json")).unwrap();
    let record: serde_json::Value = serde_json::from_str(&empty).unwrap();
    assert_eq!(record["classes"], serde_json::json!([]));
}

#[test]
fn test_dump_output_keys_are_sorted_and_indented() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("foo.py"), ANNOTATED).unwrap();

    let output = qmlmeta()
        .arg("dump")
        .arg(temp_dir.path())
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let classes_at = stdout.find("\"classes\"").unwrap();
    let input_at = stdout.find("\"inputFile\"").unwrap();
    assert!(classes_at < input_at);
    assert!(stdout.contains("\n    \"classes\""));
}

#[test]
fn test_dump_is_byte_stable_across_runs() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("foo.py"), ANNOTATED).unwrap();

    let first = qmlmeta().arg("dump").arg(temp_dir.path()).output().unwrap();
    let second = qmlmeta().arg("dump").arg(temp_dir.path()).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_dump_include_filter() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("keep.py"), ANNOTATED).unwrap();
    fs::write(temp_dir.path().join("skip.txt"), "not python").unwrap();

    let output = qmlmeta()
        .arg("dump")
        .arg(temp_dir.path())
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("keep.py"));
    assert!(!stdout.contains("skip.txt"));
}

#[test]
fn test_dump_skips_broken_file_but_reports_it() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("bad.py"), "def broken(:\n").unwrap();
    fs::write(temp_dir.path().join("good.py"), ANNOTATED).unwrap();

    let output = qmlmeta()
        .arg("dump")
        .arg(temp_dir.path())
        .output()
        .unwrap();

    // The run fails overall but the well-formed sibling still produced
    // its record.
    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\"className\": \"Foo\""));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("bad.py"));
}

#[test]
fn test_dump_fail_fast() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("bad.py"), "def broken(:\n").unwrap();

    qmlmeta()
        .arg("dump")
        .arg("--fail-fast")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad.py"));
}

#[test]
fn test_qrc_listing() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("main.qml"), "").unwrap();
    fs::write(temp_dir.path().join("app.py"), "").unwrap();

    let output = qmlmeta()
        .arg("qrc")
        .args(["-I", "*.qml"])
        .arg(temp_dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("<RCC>\n    <qresource prefix=\"/\">\n"));
    assert!(stdout.contains("<file>"));
    assert!(stdout.contains("main.qml"));
    assert!(!stdout.contains("app.py"));
    assert!(stdout.ends_with("</RCC>\n"));
}

#[test]
fn test_manifest_stdout() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.py"), "").unwrap();

    let output = qmlmeta()
        .arg("manifest")
        .args(["-I", "*.py"])
        .arg(temp_dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let document: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(document["files"][0].as_str().unwrap().ends_with("a.py"));
}

#[test]
fn test_manifest_updates_target_in_place() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.py"), "").unwrap();
    let target = temp_dir.path().join("build.json");
    fs::write(&target, "{\"project\": \"demo\"}").unwrap();

    qmlmeta()
        .arg("manifest")
        .args(["-I", "*.py"])
        .args(["-o"])
        .arg(&target)
        .arg(temp_dir.path())
        .assert()
        .success();

    let document: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&target).unwrap()).unwrap();
    assert_eq!(document["project"], "demo");
    assert!(document["files"].is_array());
    assert!(!temp_dir.path().join("build.json.new").exists());
}
