//! Char boundary helpers.
//!
//! `floor_char_boundary()` and `ceil_char_boundary()` are not stable in `std`
//! for our MSRV, so they are polyfilled here under different names to avoid
//! `unstable_name_collisions`.
use crate::Sealed;

pub trait StrBoundaryExt: Sealed {
    /// The largest char boundary `<= index`, with `index` clamped to `self.len()`.
    ///
    /// ```
    /// use rp_unicode::str::StrBoundaryExt;
    ///
    /// let s = "aé";
    /// assert_eq!(s.floor_boundary(2), 1);
    /// assert_eq!(s.floor_boundary(9), 3);
    /// ```
    fn floor_boundary(&self, index: usize) -> usize;

    /// The smallest char boundary `>= index`, with `index` clamped to `self.len()`.
    ///
    /// ```
    /// use rp_unicode::str::StrBoundaryExt;
    ///
    /// let s = "aé";
    /// assert_eq!(s.ceil_boundary(2), 3);
    /// assert_eq!(s.ceil_boundary(1), 1);
    /// ```
    fn ceil_boundary(&self, index: usize) -> usize;

    /// The char boundary right after the char starting at `index`.
    ///
    /// `index` must be a char boundary. Returns `self.len()` at or past the end.
    ///
    /// ```
    /// use rp_unicode::str::StrBoundaryExt;
    ///
    /// let s = "aé!";
    /// assert_eq!(s.next_boundary(0), 1);
    /// assert_eq!(s.next_boundary(1), 3);
    /// assert_eq!(s.next_boundary(4), 4);
    /// ```
    fn next_boundary(&self, index: usize) -> usize;
}

impl StrBoundaryExt for str {
    #[inline]
    fn floor_boundary(&self, index: usize) -> usize {
        if index >= self.len() {
            return self.len();
        }
        // A char is at most 4 bytes long
        let lower = index.saturating_sub(3);
        (lower..=index)
            .rev()
            .find(|&i| self.is_char_boundary(i))
            .unwrap_or(0)
    }

    #[inline]
    fn ceil_boundary(&self, index: usize) -> usize {
        if index >= self.len() {
            return self.len();
        }
        (index..self.len())
            .find(|&i| self.is_char_boundary(i))
            .unwrap_or(self.len())
    }

    #[inline]
    fn next_boundary(&self, index: usize) -> usize {
        match self.get(index..).and_then(|rest| rest.chars().next()) {
            Some(c) => index + c.len_utf8(),
            None => self.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        let s = "a葬送b";
        assert_eq!(s.floor_boundary(0), 0);
        assert_eq!(s.floor_boundary(3), 1);
        assert_eq!(s.ceil_boundary(3), 4);
        assert_eq!(s.next_boundary(1), 4);
        assert_eq!(s.next_boundary(7), 8);
        assert_eq!(s.next_boundary(8), 8);
        assert_eq!("".next_boundary(0), 0);
    }
}
