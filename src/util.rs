//! Small utility helpers used across modules.

/// Canonicalize a level tag before matching: trim surrounding whitespace
/// and uppercase ASCII. Query strings and WS payloads send "b1", " B1 ", etc.
pub fn normalize_tag(s: &str) -> String {
  s.trim().to_ascii_uppercase()
}

/// Log-safe truncation for large strings.
/// Avoids spamming logs with huge request payloads.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.len() <= max {
    s.to_string()
  } else {
    // Back off to a char boundary so slicing never panics on multi-byte text.
    let mut cut = max;
    while !s.is_char_boundary(cut) {
      cut -= 1;
    }
    format!("{}… ({} bytes total)", &s[..cut], s.len())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn normalize_tag_trims_and_uppercases() {
    assert_eq!(normalize_tag(" b1 "), "B1");
    assert_eq!(normalize_tag("C2"), "C2");
    assert_eq!(normalize_tag(""), "");
  }

  #[test]
  fn trunc_keeps_short_strings_intact() {
    assert_eq!(trunc_for_log("abc", 10), "abc");
    assert!(trunc_for_log(&"x".repeat(200), 50).contains("200 bytes total"));
  }
}
