//! Decoder for serialized scalar arrays stored in post meta
//!
//! Multi-select custom fields (project services and similar) are stored as
//! `a:2:{i:0;s:8:"Planning";i:1;s:6:"Design";}`. Queries hand the raw value
//! to [`decode_string_list`] and models only ever carry `Vec<String>`.

/// Decode a serialized scalar array into its values, in order
///
/// - a serialized array yields its string and numeric values
/// - a plain, non-serialized value yields a single-element list
/// - blank input or a malformed array yields an empty list
pub fn decode_string_list(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    if !trimmed.starts_with("a:") {
        return vec![trimmed.to_string()];
    }

    let mut cursor = Cursor::new(trimmed);
    cursor.parse_array().unwrap_or_default()
}

#[derive(Debug)]
enum Scalar {
    Text(String),
    Skip,
}

struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn expect(&mut self, token: &str) -> Option<()> {
        if self.rest().starts_with(token) {
            self.pos += token.len();
            Some(())
        } else {
            None
        }
    }

    /// Read up to (not including) `stop`, consuming the stop character
    fn read_until(&mut self, stop: char) -> Option<&'a str> {
        let rest = self.rest();
        let end = rest.find(stop)?;
        self.pos += end + stop.len_utf8();
        Some(&rest[..end])
    }

    fn parse_array(&mut self) -> Option<Vec<String>> {
        self.expect("a:")?;
        let count: usize = self.read_until(':')?.parse().ok()?;
        self.expect("{")?;

        // The smallest entry (`i:0;N;`) is 6 bytes; a larger declared count
        // is garbage and must not drive the allocation
        let mut values = Vec::with_capacity(count.min(self.rest().len() / 6));
        for _ in 0..count {
            // key
            self.parse_scalar()?;
            if let Scalar::Text(value) = self.parse_scalar()? {
                values.push(value);
            }
        }
        self.expect("}")?;
        Some(values)
    }

    fn parse_scalar(&mut self) -> Option<Scalar> {
        let rest = self.rest();
        if rest.starts_with("N;") {
            self.pos += 2;
            return Some(Scalar::Skip);
        }

        let kind = rest.chars().next()?;
        self.pos += kind.len_utf8();
        self.expect(":")?;
        match kind {
            'i' | 'd' => Some(Scalar::Text(self.read_until(';')?.to_string())),
            'b' => {
                self.read_until(';')?;
                Some(Scalar::Skip)
            }
            's' => {
                // Length is in bytes, which lets values contain quotes
                let len: usize = self.read_until(':')?.parse().ok()?;
                self.expect("\"")?;
                let end = self.pos.checked_add(len)?;
                let value = self.input.get(self.pos..end)?.to_string();
                self.pos = end;
                self.expect("\";")?;
                Some(Scalar::Text(value))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_serialized_strings() {
        let raw = r#"a:3:{i:0;s:8:"Planning";i:1;s:6:"Design";i:2;s:18:"Project Management";}"#;
        assert_eq!(
            decode_string_list(raw),
            vec!["Planning", "Design", "Project Management"]
        );
    }

    #[test]
    fn test_decode_uses_byte_lengths() {
        // "Malé" is 5 bytes; embedded quote and semicolon stay inside the value
        let raw = r#"a:2:{i:0;s:5:"Malé";i:1;s:8:"A "B"; C";}"#;
        assert_eq!(decode_string_list(raw), vec!["Malé", r#"A "B"; C"#]);
    }

    #[test]
    fn test_decode_numeric_and_null_values() {
        let raw = r#"a:3:{i:0;i:42;i:1;N;i:2;b:1;}"#;
        assert_eq!(decode_string_list(raw), vec!["42"]);
    }

    #[test]
    fn test_plain_value_is_single_item() {
        assert_eq!(decode_string_list(" Structural Engineering "), vec!["Structural Engineering"]);
    }

    #[test]
    fn test_blank_and_malformed() {
        assert!(decode_string_list("").is_empty());
        assert!(decode_string_list("   ").is_empty());
        assert!(decode_string_list(r#"a:2:{i:0;s:50:"short";}"#).is_empty());
        assert!(decode_string_list("a:0:{}").is_empty());
    }

    #[test]
    fn test_declared_count_larger_than_entries() {
        let raw = r#"a:3:{i:0;s:8:"Planning";i:1;s:6:"Design";}"#;
        assert!(decode_string_list(raw).is_empty());
    }

    #[test]
    fn test_declared_count_smaller_than_entries() {
        let raw = r#"a:1:{i:0;s:8:"Planning";i:1;s:6:"Design";}"#;
        assert!(decode_string_list(raw).is_empty());
    }

    #[test]
    fn test_absurd_declared_count() {
        assert!(decode_string_list("a:999999999999:{}").is_empty());
        assert!(decode_string_list("a:18446744073709551615:{}").is_empty());
        assert!(decode_string_list(r#"a:18446744073709551615:{i:0;s:1:"x";}"#).is_empty());
        // Does not fit in usize
        assert!(decode_string_list("a:99999999999999999999999:{}").is_empty());
        assert!(decode_string_list("a:-1:{}").is_empty());
    }
}
