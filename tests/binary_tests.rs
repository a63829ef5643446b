// tests/binary_tests.rs
use mbstrip_rs::{GeoRecord, RECORD_SIZE};
use std::io::Write;
use std::process::{Command, Stdio};

fn run_mbstripnan(input: &[u8]) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_mbstripnan"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    {
        let mut stdin = child.stdin.take().unwrap();
        stdin.write_all(input).unwrap();
    }

    child.wait_with_output().unwrap()
}

#[test]
fn test_pipeline_strips_nan_records() {
    let first = GeoRecord::new(1.0, 2.0, 3.0).to_bytes();
    let bad = GeoRecord::new(f64::NAN, 5.0, 6.0).to_bytes();
    let last = GeoRecord::new(7.0, 8.0, 9.0).to_bytes();
    let input = [first, bad, last].concat();

    let output = run_mbstripnan(&input);

    assert!(output.status.success());
    assert_eq!(output.stdout, [first, last].concat());
}

#[test]
fn test_pipeline_ignores_partial_tail_silently() {
    let mut input = GeoRecord::new(-71.0, 41.5, -12.0).to_bytes().to_vec();
    input.extend_from_slice(&[0x7F; RECORD_SIZE - 1]);

    let output = run_mbstripnan(&input);

    assert!(output.status.success());
    assert_eq!(output.stdout, &input[..RECORD_SIZE]);
    assert!(output.stderr.is_empty());
}

#[test]
fn test_pipeline_empty_input() {
    let output = run_mbstripnan(&[]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}
