use super::*;

/// Checks whether a code point can appear in an identifier word (underscore
/// or a Unicode letter).
pub fn is_letter(code: char) -> bool {
  code == '_' || code.is_alphabetic()
}

/// Checks whether a code point is a decimal digit (0 through 9).
pub fn is_decimal(code: char) -> bool {
  code.is_ascii_digit()
}

/// Checks whether a code point is Unicode white space.
pub fn is_whitespace(code: char) -> bool {
  code.is_whitespace()
}

/// Checks whether a code point is the Unicode replacement character.
pub fn is_replacement(code: char) -> bool {
  code == REPLACEMENT
}

/// Checks whether a code point is the byte order mark.
pub fn is_bom(code: char) -> bool {
  code == BOM
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn letters() {
    for code in ['a', 'Z', 'ø', 'λ', 'д', '中', '_'] {
      assert!(is_letter(code), "letter {code:?} unexpectedly rejected");
    }

    for code in ['0', '¼', ' ', '\t', '\n', '—', '«', '['] {
      assert!(!is_letter(code), "non-letter {code:?} unexpectedly accepted");
    }
  }

  #[test]
  fn decimals() {
    for code in '0'..='9' {
      assert!(is_decimal(code), "digit {code:?} unexpectedly rejected");
    }

    for code in ['a', 'λ', '٣', '¼', '_', ' '] {
      assert!(!is_decimal(code), "non-digit {code:?} unexpectedly accepted");
    }
  }

  #[test]
  fn whitespace() {
    // Latin-1 spaces, then category Z separators
    for code in [
      '\t', '\n', '\u{000B}', '\u{000C}', '\r', ' ', '\u{0085}', '\u{00A0}',
      '\u{2028}', '\u{2029}', '\u{1680}', '\u{2000}', '\u{3000}',
    ] {
      assert!(is_whitespace(code), "space {code:?} unexpectedly rejected");
    }

    for code in ['a', 'ø', '0', '_', '—'] {
      assert!(
        !is_whitespace(code),
        "non-space {code:?} unexpectedly accepted"
      );
    }
  }

  #[test]
  fn sentinels() {
    assert!(is_bom('\u{FEFF}'));
    assert!(!is_bom('\u{FFFD}'));

    assert!(is_replacement('\u{FFFD}'));
    assert!(!is_replacement('\u{FEFF}'));
  }
}
