// ============================================================
// Layer 4 — Line Stream
// ============================================================
// Lazily reads lines from any buffered reader, in file order,
// in a single forward pass.
//
// Lines are kept as raw bytes, terminator included:
//   "a\n"   → b"a\n"
//   "b\r\n" → b"b\r\n"
//   "c"     → b"c"   (last line without a newline)
//
// Nothing is decoded, trimmed or validated, so concatenating
// every yielded line reproduces the input byte for byte.
//
// Reference: Rust Book §13 (Iterators)
//            std::io::BufRead::read_until

use std::io::{self, BufRead};

/// Iterator over the raw lines of a reader.
pub struct LineStream<R> {
    reader: R,
    done:   bool,
}

impl<R: BufRead> LineStream<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, done: false }
    }
}

impl<R: BufRead> Iterator for LineStream<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut line = Vec::new();
        match self.reader.read_until(b'\n', &mut line) {
            // 0 bytes read means end of input
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => Some(Ok(line)),
            // Stop after the first error, the stream cannot resume
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor, Read};

    fn collect(input: &[u8]) -> Vec<Vec<u8>> {
        LineStream::new(Cursor::new(input.to_vec()))
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_keeps_terminators() {
        let lines = collect(b"one\ntwo\r\nthree\n");
        assert_eq!(lines, vec![b"one\n".to_vec(), b"two\r\n".to_vec(), b"three\n".to_vec()]);
    }

    #[test]
    fn test_last_line_without_newline() {
        let lines = collect(b"a\nb");
        assert_eq!(lines, vec![b"a\n".to_vec(), b"b".to_vec()]);
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(collect(b"").is_empty());
    }

    #[test]
    fn test_blank_lines_are_lines() {
        let lines = collect(b"\n\nx\n");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], b"\n");
    }

    #[test]
    fn test_non_utf8_passes_through() {
        let input = b"\xff\xfe\n\x00ok\n";
        assert_eq!(collect(input).concat(), input.to_vec());
    }

    /// Reader that fails on every read
    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
        }
    }

    #[test]
    fn test_stops_after_error() {
        let mut stream = LineStream::new(BufReader::new(Broken));
        assert!(matches!(stream.next(), Some(Err(_))));
        assert!(stream.next().is_none());
    }
}
