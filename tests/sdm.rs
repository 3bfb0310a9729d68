use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn record(word: &str, offset: u32, size: u32) -> Vec<u8> {
    let mut data = word.as_bytes().to_vec();
    data.push(0);
    data.extend_from_slice(&offset.to_be_bytes());
    data.extend_from_slice(&size.to_be_bytes());
    data
}

fn write_example(dir: &Path, index: Vec<u8>) {
    fs::write(dir.join("test.idx"), index).unwrap();
    fs::write(dir.join("test.dict"), "catdog").unwrap();
}

fn example_index() -> Vec<u8> {
    let mut index = record("cat", 0, 3);
    index.extend(record("dog", 3, 3));
    index
}

fn sdm(dir: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_sdm"))
        .env("sdm_index", dir.join("test.idx"))
        .env("sdm_dict", dir.join("test.dict"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(stdin.as_bytes()).unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn batch_from_arguments() {
    let dir = tempfile::tempdir().unwrap();
    write_example(dir.path(), example_index());

    let output = sdm(dir.path(), &["cat", "missing", "dog"], "");

    assert!(output.status.success());
    assert_eq!(output.stdout, b"catdog");
    assert_eq!(output.stderr, b"WORD NOT FOUND\n");
}

#[test]
fn batch_from_stdin() {
    let dir = tempfile::tempdir().unwrap();
    write_example(dir.path(), example_index());

    let output = sdm(dir.path(), &[], "dog\n  fox cat");

    assert!(output.status.success());
    assert_eq!(output.stdout, b"dogcat");
    assert_eq!(output.stderr, b"WORD NOT FOUND\n");
}

#[test]
fn corrupt_index_only_prints_marker() {
    let dir = tempfile::tempdir().unwrap();
    let mut index = record("cat", 0, 3);
    index.extend_from_slice(b"dog\0\x00\x00");
    write_example(dir.path(), index);

    let output = sdm(dir.path(), &["dog", "cat"], "");

    assert!(output.status.success());
    assert_eq!(output.stdout, b"cat");
    assert_eq!(output.stderr, b"WORD NOT FOUND\n");
}

#[test]
fn missing_dict_file_exits_with_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("test.idx"), example_index()).unwrap();

    let output = sdm(dir.path(), &["cat"], "");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr.contains("test.dict"), "stderr: {}", stderr);
    assert!(!stderr.contains("WORD NOT FOUND"));
}
