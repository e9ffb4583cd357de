use memchr::memchr_iter;

/// Lines of `bytes`, each keeping its `\n` terminator. A final line without a
/// terminator is yielded as-is.
pub(crate) fn lines_inclusive(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
    let mut start = 0;
    memchr_iter(b'\n', bytes)
        .map(|pos| pos + 1)
        .chain(std::iter::once(bytes.len()))
        .filter_map(move |end| {
            if end <= start {
                return None;
            }
            let line = &bytes[start..end];
            start = end;
            Some(line)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminators_kept() {
        let lines: Vec<&[u8]> = lines_inclusive(b"a\nbb\r\n\nccc").collect();
        assert_eq!(lines, vec![&b"a\n"[..], &b"bb\r\n"[..], &b"\n"[..], &b"ccc"[..]]);
    }

    #[test]
    fn test_trailing_newline() {
        let lines: Vec<&[u8]> = lines_inclusive(b"a\nb\n").collect();
        assert_eq!(lines, vec![&b"a\n"[..], &b"b\n"[..]]);
        assert_eq!(lines_inclusive(b"").count(), 0);
    }
}
