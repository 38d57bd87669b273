/// Value of an ASCII hexadecimal digit, accepting both cases.
///
/// Returns `None` for anything outside `[0-9a-fA-F]`.
pub const fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Hexadecimal digit for a nibble value.
///
/// Only the low four bits of `nibble` are used.
pub const fn hex_char(nibble: u8, upper: bool) -> char {
    let n = nibble & 0xf;
    if n < 10 {
        (b'0' + n) as char
    } else if upper {
        (b'A' + n - 10) as char
    } else {
        (b'a' + n - 10) as char
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_digits() {
        for (i, c) in (b'0'..=b'9').enumerate() {
            assert_eq!(hex_value(c), Some(i as u8));
        }
    }

    #[test]
    fn letters_both_cases() {
        assert_eq!(hex_value(b'a'), Some(10));
        assert_eq!(hex_value(b'A'), Some(10));
        assert_eq!(hex_value(b'f'), Some(15));
        assert_eq!(hex_value(b'F'), Some(15));
    }

    #[test]
    fn rejects_non_hex() {
        for c in [b'g', b'G', b'x', b' ', b'-', b'/', b':', b'@', b'`'] {
            assert_eq!(hex_value(c), None, "{}", c as char);
        }
    }

    #[test]
    fn char_roundtrip() {
        for n in 0u8..16 {
            assert_eq!(hex_value(hex_char(n, true) as u8), Some(n));
            assert_eq!(hex_value(hex_char(n, false) as u8), Some(n));
        }
        assert_eq!(hex_char(0xb, true), 'B');
        assert_eq!(hex_char(0xb, false), 'b');
        assert_eq!(hex_char(0x1f, true), 'F');
    }
}
