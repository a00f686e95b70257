// crates/shared-kernel/tests/serde_roundtrip.rs
use linecount_shared_kernel::LineCount;

#[test]
fn linecount_serializes_transparently() {
    let json = serde_json::to_string(&LineCount::new(3)).unwrap();
    assert_eq!(json, "3");

    let back: LineCount = serde_json::from_str(&json).unwrap();
    assert_eq!(back, LineCount::new(3));
}
