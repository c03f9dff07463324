/* src/cli/entry/src/scan.rs */

// Locates the page entry point in transpiled source. Byte-cursor scanning
// with balanced-delimiter depth counting; every malformed input maps to
// "leave the source alone", never a partial parse.

use std::sync::LazyLock;

use regex::Regex;

/// The entry identifier as a whole word. A renamed `page_impl` never
/// re-matches because `_` continues the identifier.
static ENTRY_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\bfn\s+page\b").expect("entry pattern"));

const ENTRY_NAME: &str = "page";

/// Byte offsets of the pieces the rewrite needs. `params` excludes the
/// delimiters; `body_open` is the index of the body's `{`.
pub(crate) struct EntrySite {
  pub(crate) name_end: usize,
  pub(crate) params_start: usize,
  pub(crate) params_end: usize,
  pub(crate) body_open: usize,
}

pub(crate) enum EntryScan {
  /// No `fn page` anywhere: nothing to normalize.
  Absent,
  /// Entry token present but the signature does not scan (no parameter
  /// list, unclosed delimiter, no body).
  Malformed,
  Site(EntrySite),
}

pub(crate) fn find_entry(source: &str) -> EntryScan {
  let Some(found) = ENTRY_RE.find(source) else {
    return EntryScan::Absent;
  };
  let name_end = found.end();
  debug_assert_eq!(&source[name_end - ENTRY_NAME.len()..name_end], ENTRY_NAME);

  let bytes = source.as_bytes();
  let mut pos = skip_whitespace(bytes, name_end);

  // Rust signatures may carry a generic parameter list between the name and
  // the parameter list; skip one balanced <...> group.
  if pos < bytes.len() && bytes[pos] == b'<' {
    match find_balanced(bytes, pos, b'<', b'>') {
      Some(close) => pos = skip_whitespace(bytes, close + 1),
      None => return EntryScan::Malformed,
    }
  }

  if pos >= bytes.len() || bytes[pos] != b'(' {
    return EntryScan::Malformed;
  }
  let params_start = pos + 1;
  let Some(params_end) = find_balanced(bytes, pos, b'(', b')') else {
    return EntryScan::Malformed;
  };

  let Some(body_open) = find_byte(bytes, params_end + 1, b'{') else {
    return EntryScan::Malformed;
  };

  EntryScan::Site(EntrySite { name_end, params_start, params_end, body_open })
}

/// `open_idx` holds the opening delimiter (scan starts at depth 1); returns
/// the index of the matching close.
fn find_balanced(bytes: &[u8], open_idx: usize, open: u8, close: u8) -> Option<usize> {
  let mut depth = 1usize;
  let mut pos = open_idx + 1;
  while pos < bytes.len() {
    if bytes[pos] == open {
      depth += 1;
    } else if bytes[pos] == close {
      depth -= 1;
      if depth == 0 {
        return Some(pos);
      }
    }
    pos += 1;
  }
  None
}

fn skip_whitespace(bytes: &[u8], mut pos: usize) -> usize {
  while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
    pos += 1;
  }
  pos
}

fn find_byte(bytes: &[u8], from: usize, needle: u8) -> Option<usize> {
  (from..bytes.len()).find(|&i| bytes[i] == needle)
}
