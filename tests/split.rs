use std::fs;
use std::path::Path;

use snipsplit::{Error, SplitEvent, SplitParams, SplitReport, split_file};

fn write_export(dir: &Path, body: &str) -> std::path::PathBuf {
    let path = dir.join("export.json");
    fs::write(&path, body).expect("write export");
    path
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read output dir")
        .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn single_php_snippet_gets_header_and_sanitized_name() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = write_export(
        tmp.path(),
        r#"[{"id":"s1","title":"Hello: World","code":"x","code_type":"php"}]"#,
    );
    let params = SplitParams {
        output_dir: tmp.path().join("out"),
    };

    let mut lines = Vec::new();
    let report = split_file(&input, &params, |event| lines.push(event.to_string())).expect("split");

    assert_eq!(
        report,
        SplitReport {
            total: 1,
            created: 1,
            failed: 0
        }
    );
    assert_eq!(lines, vec!["[1/1] Created: s1_Hello_ World.php".to_string()]);
    assert_eq!(file_names(&params.output_dir), vec!["s1_Hello_ World.php"]);
    let content = fs::read_to_string(params.output_dir.join("s1_Hello_ World.php")).unwrap();
    assert_eq!(content, "<?php\nx");
}

#[test]
fn missing_code_yields_empty_file() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = write_export(
        tmp.path(),
        r#"[
            {"id": 1, "title": "First", "code": "body {}", "code_type": "css"},
            {"id": 2, "title": "Second", "code_type": "js"}
        ]"#,
    );
    let params = SplitParams {
        output_dir: tmp.path().join("out"),
    };

    let report = split_file(&input, &params, |_| {}).expect("split");

    assert_eq!(report.created, 2);
    assert_eq!(report.failed, 0);
    assert_eq!(file_names(&params.output_dir), vec!["1_First.css", "2_Second.js"]);
    assert_eq!(
        fs::read_to_string(params.output_dir.join("2_Second.js")).unwrap(),
        ""
    );
}

#[test]
fn bad_records_do_not_stop_the_run() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = write_export(
        tmp.path(),
        r#"[
            {"id": "a", "title": "Ok", "code": "one"},
            "not a record",
            {"id": "b", "title": 12},
            {"id": "x/y", "title": "Escapes"},
            {"title": "Defaults", "code": "\r\n\r\ntwo\r\n\r\n\r\nthree\r\n"}
        ]"#,
    );
    let params = SplitParams {
        output_dir: tmp.path().join("out"),
    };

    let mut failed_positions = Vec::new();
    let report = split_file(&input, &params, |event| {
        if let SplitEvent::Failed { position, .. } = event {
            failed_positions.push(*position);
        }
    })
    .expect("split");

    assert_eq!(failed_positions, vec![2, 3, 4]);
    assert_eq!(
        report,
        SplitReport {
            total: 5,
            created: 2,
            failed: 3
        }
    );
    assert_eq!(
        file_names(&params.output_dir),
        vec!["a_Ok.txt", "snippet_5_Defaults.txt"]
    );
    assert_eq!(
        fs::read_to_string(params.output_dir.join("snippet_5_Defaults.txt")).unwrap(),
        "two\n\nthree"
    );
}

#[test]
fn rerun_overwrites_existing_files() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let params = SplitParams {
        output_dir: tmp.path().join("out"),
    };

    let input = write_export(tmp.path(), r#"[{"id":"k","title":"T","code":"old"}]"#);
    split_file(&input, &params, |_| {}).expect("first run");
    let input = write_export(tmp.path(), r#"[{"id":"k","title":"T","code":"new"}]"#);
    split_file(&input, &params, |_| {}).expect("second run");

    assert_eq!(file_names(&params.output_dir), vec!["k_T.txt"]);
    assert_eq!(
        fs::read_to_string(params.output_dir.join("k_T.txt")).unwrap(),
        "new"
    );
}

#[test]
fn non_array_export_writes_nothing() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = write_export(tmp.path(), "{}");
    let params = SplitParams {
        output_dir: tmp.path().join("out"),
    };

    let err = split_file(&input, &params, |_| panic!("no records expected")).unwrap_err();

    assert!(matches!(err, Error::NotAnArray { .. }));
    assert!(!params.output_dir.exists());
}

#[test]
fn missing_export_is_not_found() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let params = SplitParams {
        output_dir: tmp.path().join("out"),
    };

    let err = split_file(&tmp.path().join("nope.json"), &params, |_| {}).unwrap_err();

    assert!(matches!(err, Error::NotFound { .. }));
    assert!(err.to_string().contains("not found"));
}
