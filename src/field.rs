use std::fmt;

/// Maximum number of content bytes a text field can hold. The slot buffer
/// reserves one extra byte for the terminating zero.
pub const CAPACITY: usize = 49;

/// A text field holding at most [`CAPACITY`] bytes of UTF-8.
///
/// Construction never fails. Input longer than the capacity is truncated
/// at the largest character boundary that fits, and anything from the
/// first NUL byte on is cut off, since NUL terminates the field on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldStr(String);

impl FieldStr {
    pub fn new(s: &str) -> Self {
        let s = match s.find('\0') {
            Some(pos) => &s[..pos],
            None => s,
        };

        let mut end = s.len().min(CAPACITY);
        while !s.is_char_boundary(end) {
            end -= 1;
        }

        FieldStr(s[..end].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for FieldStr {
    fn from(s: &str) -> Self {
        FieldStr::new(s)
    }
}

impl fmt::Display for FieldStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldStr, CAPACITY};

    #[test]
    fn short_input_is_stored_unchanged() {
        assert_eq!(FieldStr::new("Ada Lovelace").as_str(), "Ada Lovelace");
    }

    #[test]
    fn overlong_input_is_truncated_to_capacity() {
        let long = "x".repeat(CAPACITY + 20);
        let field = FieldStr::new(&long);
        assert_eq!(field.as_str(), &long[..CAPACITY]);
    }

    #[test]
    fn truncation_never_splits_a_character() {
        // Two-byte characters leave the 49-byte capacity mid-character.
        let input = "é".repeat(30);
        let field = FieldStr::new(&input);
        assert_eq!(field.as_str(), "é".repeat(24));
        assert_eq!(field.len(), 48);
    }

    #[test]
    fn input_is_cut_at_the_first_nul() {
        assert_eq!(FieldStr::new("ada\0lovelace").as_str(), "ada");
    }

    #[quickcheck]
    fn never_exceeds_capacity(s: String) -> bool {
        FieldStr::new(&s).len() <= CAPACITY
    }
}
