/*!
## Mono lowercase
The "mono lowercase" mentioned in this module refers to the single-char lowercase mapping of a Unicode character. This is the same as Unicode's simple [case folding](https://www.unicode.org/Public/16.0.0/ucd/CaseFolding.txt), except that some full/special case foldings are also added but only kept the first character (currently only `İ`).

- Compared to [`char::to_lowercase()`]/[`str::to_lowercase()`] in `std`: the same, except that `İ` is mapped to `i` instead of `i\u{307}`.

Because the mapping is always one char to one char, two strings can be compared case-insensitively char by char, even if the matched chars have different UTF-8 lengths (e.g. `ſ` and `S` never match, but KELVIN SIGN `\u{212A}` and `k` do).
*/

use crate::Sealed;

pub trait CharCaseExt: Sealed + Copy {
    /// The only multi-char lowercase mapping is 'İ' -> "i\u{307}", we just ignore the '\u{307}'.
    ///
    /// See [mono lowercase](super::case) for details.
    fn to_mono_lowercase(self) -> char;

    /// Whether `self` and `other` are equal after [mono lowercase](super::case) mapping.
    ///
    /// ```
    /// use rp_unicode::case::CharCaseExt;
    ///
    /// assert!('A'.eq_ignore_case('a'));
    /// assert!('Σ'.eq_ignore_case('σ'));
    /// assert!('\u{212A}'.eq_ignore_case('K'));
    /// assert!('a'.eq_ignore_case('b') == false);
    /// ```
    fn eq_ignore_case(self, other: char) -> bool;
}

impl CharCaseExt for char {
    #[inline]
    fn to_mono_lowercase(self) -> char {
        if self.is_ascii() {
            return self.to_ascii_lowercase();
        }
        match self {
            'İ' => 'i',
            c => c.to_lowercase().next().unwrap_or(c),
        }
    }

    #[inline]
    fn eq_ignore_case(self, other: char) -> bool {
        self == other || self.to_mono_lowercase() == other.to_mono_lowercase()
    }
}

pub trait StrCaseExt: Sealed {
    /// See [mono lowercase](super::case) for details.
    fn to_mono_lowercase(&self) -> String;

    /// If `self` starts with `prefix` ignoring case, returns the byte length of
    /// the matched part of `self`.
    ///
    /// The length may differ from `prefix.len()`:
    /// ```
    /// use rp_unicode::case::StrCaseExt;
    ///
    /// assert_eq!("\u{212A}elvin".strip_prefix_len_ignore_case("kel"), Some(5));
    /// assert_eq!("Kelvin".strip_prefix_len_ignore_case("kel"), Some(3));
    /// assert_eq!("Ke".strip_prefix_len_ignore_case("kel"), None);
    /// ```
    fn strip_prefix_len_ignore_case(&self, prefix: &str) -> Option<usize>;
}

impl StrCaseExt for str {
    fn to_mono_lowercase(&self) -> String {
        self.chars().map(|c| c.to_mono_lowercase()).collect()
    }

    fn strip_prefix_len_ignore_case(&self, prefix: &str) -> Option<usize> {
        let mut chars = self.chars();
        for p in prefix.chars() {
            if !chars.next()?.eq_ignore_case(p) {
                return None;
            }
        }
        Some(self.len() - chars.as_str().len())
    }
}
