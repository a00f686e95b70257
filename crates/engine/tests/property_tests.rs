use linecount_engine::scanner::{count_bytes, count_lines};
use proptest::prelude::*;
use std::io::{BufReader, Cursor};

proptest! {
    #[test]
    fn no_newline_non_empty_is_one_line(content in proptest::collection::vec(any::<u8>().prop_filter("no newline", |b| *b != b'\n'), 1..512)) {
        prop_assert_eq!(count_bytes(&content).value(), 1);
    }

    #[test]
    fn count_follows_the_newline_rule(content in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let newlines = content.iter().filter(|&&b| b == b'\n').count();
        let expected = match content.last() {
            None => 0,
            Some(b'\n') => newlines,
            Some(_) => newlines + 1,
        };
        let lines = count_lines(&mut Cursor::new(&content)).unwrap();
        prop_assert_eq!(lines.value(), expected);
    }

    #[test]
    fn buffer_size_does_not_matter(
        content in "[a-z\\n]{0,300}",
        capacity in 1usize..64,
    ) {
        let mut reader = BufReader::with_capacity(capacity, content.as_bytes());
        let lines = count_lines(&mut reader).unwrap();
        prop_assert_eq!(lines, count_bytes(content.as_bytes()));
    }

    #[test]
    fn line_count_never_exceeds_byte_count(content in "[\\x00-\\x7F]{0,1000}") {
        let lines = count_bytes(content.as_bytes()).value();
        if content.is_empty() {
            prop_assert_eq!(lines, 0);
        } else {
            prop_assert!(lines <= content.len());
        }
    }
}
