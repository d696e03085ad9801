use qformat::{CoefficientTable, QFormat};
use qformat_cli::commands::{bounds, convert, demo, table};
use tempfile::tempdir;

fn capture<F>(f: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> anyhow::Result<()>,
{
    let mut buf = Vec::new();
    f(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_demo_output() {
    let q = QFormat::q5_27();
    let out = capture(|w| demo::run(&q, w));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "-16.0 15.99999999254942",
            "-2147483648 2147483647",
            "0.000000 0 0.000000",
            "1.000000 134217728 1.000000",
            "-1.000000 -134217728 -1.000000",
            "-10.000000 -1342177280 -10.000000",
            "10.000000 1342177280 10.000000",
            "-16.000000 -2147483648 -16.000000",
            "15.990000 2146141470 15.990000",
            "-7.0",
        ]
    );
}

#[test]
fn test_demo_fails_on_narrow_format() {
    // Q1.31 cannot hold the 1.0 sample.
    let q = QFormat::new(1, 31).unwrap();
    let mut buf = Vec::new();
    let err = demo::run(&q, &mut buf).unwrap_err();
    assert!(err.to_string().contains("sample 1"), "{}", err);
}

#[test]
fn test_bounds_json() {
    let q = QFormat::q5_27();
    let out = capture(|w| bounds::run(&q, true, w));
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["format"], "Q5.27");
    assert_eq!(v["min_q"], -2147483648i64);
    assert_eq!(v["max_q"], 2147483647i64);

    let text = capture(|w| bounds::run(&q, false, w));
    assert!(text.contains("min_f  -16\n"));
}

#[test]
fn test_convert_commands() {
    let q = QFormat::q5_27();
    let out = capture(|w| convert::f2q(&q, &[1.0, -0.5], w));
    assert_eq!(out, "1 134217728\n-0.5 -67108864\n");

    let out = capture(|w| convert::q2f(&q, &[134217728, -2147483648], w));
    assert_eq!(out, "134217728 1\n-2147483648 -16\n");

    let mut buf = Vec::new();
    assert!(convert::f2q(&q, &[16.0], &mut buf).is_err());
    assert!(convert::q2f(&q, &[2147483648], &mut buf).is_err());
}

#[test]
fn test_table_writes_words() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("coeffs.bin");
    let q = QFormat::q5_27();

    let out = capture(|w| table::run(&q, &[0.5, -2.0], "gain", Some(path.as_path()), w));
    assert!(out.contains("const int32_t gain[2] = {"));

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes.len(), 8);
    let decoded = CoefficientTable::from_le_bytes(q, &bytes).unwrap();
    assert_eq!(decoded.to_f64(), vec![0.5, -2.0]);
}

#[test]
fn test_table_rejects_out_of_range() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.bin");
    let mut buf = Vec::new();
    let result = table::run(&QFormat::q5_27(), &[1.0, 99.0], "bad", Some(path.as_path()), &mut buf);
    assert!(result.is_err());
    assert!(!path.exists());
}
