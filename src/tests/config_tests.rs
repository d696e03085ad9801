// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::config::{FormatConfig, DEFAULT_FRAC_BITS, DEFAULT_INT_BITS, DEMO_ADDENDS, DEMO_SAMPLES};
use crate::error::QError;
use crate::fxp::qformat::QFormat;

#[test]
fn test_default_is_q5_27() {
    let cfg = FormatConfig::default();
    assert_eq!((cfg.m, cfg.n), (DEFAULT_INT_BITS, DEFAULT_FRAC_BITS));
    assert_eq!(cfg.build().unwrap(), QFormat::q5_27());
    assert_eq!(QFormat::default(), QFormat::q5_27());
}

#[test]
fn test_parse_format() {
    for s in ["Q5.27", "q5.27", "5.27", " Q5.27 "] {
        assert_eq!(s.parse::<QFormat>().unwrap(), QFormat::q5_27(), "{}", s);
    }
    assert_eq!("Q1.31".parse::<FormatConfig>().unwrap(), FormatConfig { m: 1, n: 31 });

    assert!(matches!("Q5".parse::<QFormat>(), Err(QError::ParseFormat(_))));
    assert!(matches!("Qa.b".parse::<QFormat>(), Err(QError::ParseFormat(_))));
    assert!(matches!("Q0.5".parse::<QFormat>(), Err(QError::InvalidFormat { m: 0, n: 5 })));
}

#[test]
fn test_serde_format() {
    let json = serde_json::to_string(&QFormat::q5_27()).unwrap();
    assert_eq!(json, r#"{"m":5,"n":27}"#);

    let q: QFormat = serde_json::from_str(r#"{"m":1,"n":31}"#).unwrap();
    assert_eq!(q.max_q(), i32::MAX as i64);
    assert!(serde_json::from_str::<QFormat>(r#"{"m":0,"n":31}"#).is_err());
}

#[test]
fn test_bounds_report() {
    let b = QFormat::q5_27().bounds();
    assert_eq!(b.format, "Q5.27");
    assert_eq!((b.min_q, b.max_q), (-2147483648, 2147483647));
    let json = serde_json::to_value(&b).unwrap();
    assert_eq!(json["min_f"], -16.0);
}

#[test]
fn test_demo_constants_fit_q5_27() {
    let q = QFormat::q5_27();
    for f in DEMO_SAMPLES {
        assert!(q.float_to_fixed(f).is_ok(), "{}", f);
    }
    let (a, b) = DEMO_ADDENDS;
    let sum = q
        .raw_add(q.float_to_fixed(a).unwrap(), q.float_to_fixed(b).unwrap())
        .unwrap();
    assert_eq!(q.fixed_to_float(sum).unwrap(), a + b);
}
