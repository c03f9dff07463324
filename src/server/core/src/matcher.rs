/* src/server/core/src/matcher.rs */

use crate::params::RouteParams;
use crate::path::segments;

/// Match a route pattern against a request path, extracting dynamic
/// parameters.
///
/// Pattern and path are tokenized the same way and walked in lock-step:
/// a dynamic segment (`[name]`) binds the corresponding path token, a static
/// segment requires byte equality, and either sequence ending before the
/// other is a mismatch. A pattern with no dynamic segments degenerates to
/// exact path equality; there is no separate raw-equality path.
///
/// Returns the captured parameters on a full, consistent walk (empty for
/// all-static patterns); `None` means "no match", never an error.
pub fn match_pattern(pattern: &str, path: &str) -> Option<RouteParams> {
  let mut params = RouteParams::new();
  let mut pattern_segs = segments(pattern);
  let mut path_segs = segments(path);
  loop {
    match (pattern_segs.next(), path_segs.next()) {
      (Some(pattern_seg), Some(path_seg)) => match dynamic_name(pattern_seg) {
        Some(name) => params.insert(name, path_seg),
        None => {
          if pattern_seg != path_seg {
            return None;
          }
        }
      },
      (None, None) => return Some(params),
      // Segment counts differ: one side exhausted first.
      _ => return None,
    }
  }
}

/// `[name]` with a non-empty name is dynamic; anything else (including the
/// bare `[]`) is a static token.
fn dynamic_name(segment: &str) -> Option<&str> {
  if segment.len() > 2 && segment.starts_with('[') && segment.ends_with(']') {
    Some(&segment[1..segment.len() - 1])
  } else {
    None
  }
}
