/* src/server/html/src/escape.rs */

use std::io::{self, Write};

/// Escape text for safe interpolation into HTML content or attribute values.
pub fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#x27;"),
      c => out.push(c),
    }
  }
  out
}

/// Streaming variant: writes unescaped runs in single calls, escapes in between.
pub(crate) fn escape_into<W: Write>(s: &str, out: &mut W) -> io::Result<()> {
  let mut rest = s;
  while let Some(idx) = rest.find(['&', '<', '>', '"', '\'']) {
    out.write_all(rest[..idx].as_bytes())?;
    let replacement = match rest.as_bytes()[idx] {
      b'&' => "&amp;",
      b'<' => "&lt;",
      b'>' => "&gt;",
      b'"' => "&quot;",
      _ => "&#x27;",
    };
    out.write_all(replacement.as_bytes())?;
    rest = &rest[idx + 1..];
  }
  out.write_all(rest.as_bytes())
}
