// crates/shared-kernel/tests/counts_sum.rs
use linecount_shared_kernel::LineCount;

#[test]
fn linecount_sum() {
    let total = [1usize, 2, 3].into_iter().map(LineCount::from).sum::<LineCount>();
    assert_eq!(usize::from(total), 6);
}

#[test]
fn linecount_sum_ref() {
    let values = [LineCount::from(5), LineCount::from(7)];
    let total: LineCount = values.iter().sum();
    assert_eq!(total, 12usize);
}

#[test]
fn linecount_mixed_arithmetic() {
    let mut lines = LineCount::from(2);
    let next = lines + 3usize;
    assert_eq!(next, 5usize);
    lines += 4usize;
    assert_eq!(lines, LineCount::from(6));
    lines += LineCount::new(2);
    assert_eq!(lines.value(), 8);
}

#[test]
fn sum_usize_into_count() {
    let lines: LineCount = [3usize, 5].into_iter().sum();
    assert_eq!(lines, 8usize);
}

#[test]
fn empty_sum_is_zero() {
    let lines: LineCount = std::iter::empty::<LineCount>().sum();
    assert!(lines.is_zero());
    assert_eq!(lines, LineCount::ZERO);
}
