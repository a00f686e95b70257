// crates/engine/src/scanner.rs
use linecount_shared_kernel::LineCount;
use std::io::{self, BufRead, ErrorKind};

/// Consume `reader` to end-of-stream and return the number of lines in it.
///
/// Every `\n` byte terminates a line. A non-empty trailing run without a
/// terminating newline counts as one more line, so `""` is 0, `"\n"` is 1
/// and `"a\nb"` is 2. All other bytes are opaque.
///
/// The reader is advanced but never closed; its lifecycle belongs to the caller.
///
/// # Errors
///
/// Returns the first read error other than [`ErrorKind::Interrupted`].
pub fn count_lines<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<LineCount> {
    let mut lines = 0;
    let mut last_byte: Option<u8> = None;

    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            break;
        }

        if let Some(&b) = buf.last() {
            last_byte = Some(b);
        }
        lines += bytecount::count(buf, b'\n');

        let len = buf.len();
        reader.consume(len);
    }

    Ok(LineCount::new(lines + trailing_partial(last_byte)))
}

/// Same counting rule as [`count_lines`], applied to an in-memory slice.
#[must_use]
pub fn count_bytes(bytes: &[u8]) -> LineCount {
    LineCount::new(bytecount::count(bytes, b'\n') + trailing_partial(bytes.last().copied()))
}

// 末尾に改行がない場合の行カウント補正
const fn trailing_partial(last_byte: Option<u8>) -> usize {
    match last_byte {
        Some(b) if b != b'\n' => 1,
        _ => 0,
    }
}
