//! Byte-level candidate search for ASCII needles.
//!
//! A char can only fold to an ASCII char if it is that ASCII char in some case, or is non-ASCII itself (e.g. KELVIN SIGN `\u{212A}` folds to `k`). So the candidates for a case-insensitive ASCII needle are its two cases and every non-ASCII byte, and everything after the first non-ASCII byte has to be verified anyway.

/// The length of the leading all-ASCII part of `b`.
///
/// If `b` starts at a char boundary of valid UTF-8, the result is a char boundary too.
///
/// ```
/// use rp_unicode::ascii::ascii_prefix_len;
///
/// assert_eq!(ascii_prefix_len(b"abc\xff"), 3);
/// assert_eq!(ascii_prefix_len(b"abcde"), 5);
/// assert_eq!(ascii_prefix_len("Kelvin \u{212A}".as_bytes()), 7);
/// ```
#[cfg(feature = "perf-ascii")]
#[inline]
pub fn ascii_prefix_len(b: &[u8]) -> usize {
    bstr::ByteSlice::find_non_ascii_byte(b).unwrap_or(b.len())
}

#[cfg(not(feature = "perf-ascii"))]
pub fn ascii_prefix_len(b: &[u8]) -> usize {
    b.iter().position(|b| !b.is_ascii()).unwrap_or(b.len())
}

#[cfg(feature = "perf-find")]
#[inline]
fn position_either(b: &[u8], x: u8, y: u8) -> Option<usize> {
    if x == y {
        memchr::memchr(x, b)
    } else {
        memchr::memchr2(x, y, b)
    }
}

#[cfg(not(feature = "perf-find"))]
fn position_either(b: &[u8], x: u8, y: u8) -> Option<usize> {
    b.iter().position(|&c| c == x || c == y)
}

/// The first index in `haystack` where a char equal to the ASCII `needle` ignoring case may start.
///
/// That is the first byte that is `needle` in either case, or is non-ASCII. Non-letter needles only match themselves.
///
/// ```
/// use rp_unicode::ascii::find_ascii_ignore_case;
///
/// assert_eq!(find_ascii_ignore_case(b"<Item><item>", b'i'), Some(1));
/// assert_eq!(find_ascii_ignore_case("xx\u{212A}k".as_bytes(), b'k'), Some(2));
/// assert_eq!(find_ascii_ignore_case(b"a<b", b'<'), Some(1));
/// assert_eq!(find_ascii_ignore_case(b"<tag>", b'i'), None);
/// ```
pub fn find_ascii_ignore_case(haystack: &[u8], needle: u8) -> Option<usize> {
    debug_assert!(needle.is_ascii());
    let ascii_len = ascii_prefix_len(haystack);
    let (ascii, rest) = haystack.split_at(ascii_len);
    position_either(
        ascii,
        needle.to_ascii_lowercase(),
        needle.to_ascii_uppercase(),
    )
    .or((!rest.is_empty()).then_some(ascii_len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_len() {
        assert_eq!(ascii_prefix_len(b""), 0);
        assert_eq!(ascii_prefix_len("é".as_bytes()), 0);
        assert_eq!(ascii_prefix_len("葬送".as_bytes()), 0);
        assert_eq!(ascii_prefix_len("a葬".as_bytes()), 1);
    }

    #[test]
    fn ignore_case() {
        assert_eq!(find_ascii_ignore_case(b"", b'a'), None);
        assert_eq!(find_ascii_ignore_case(b"bbA", b'a'), Some(2));
        assert_eq!(find_ascii_ignore_case(b"bba", b'A'), Some(2));
        // Non-ASCII bytes are candidates, but not past an earlier ASCII hit
        assert_eq!(find_ascii_ignore_case("bé a".as_bytes(), b'a'), Some(1));
        assert_eq!(find_ascii_ignore_case("ba é".as_bytes(), b'a'), Some(1));
        assert_eq!(find_ascii_ignore_case("bb é".as_bytes(), b'a'), Some(3));
        assert_eq!(find_ascii_ignore_case(b"1234", b'4'), Some(3));
    }
}
