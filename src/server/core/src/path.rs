/* src/server/core/src/path.rs */

/// Strip trailing separators from a path, keeping the root intact.
/// Zero-copy: returns a subslice of the input. Idempotent for every input,
/// including degenerate ones like `"//"`.
pub fn normalize_path(path: &str) -> &str {
  let trimmed = path.trim_end_matches('/');
  if trimmed.is_empty() { "/" } else { trimmed }
}

/// Tokenize a path on the separator, discarding empty tokens (the leading
/// one from the initial `/`, and any produced by doubled separators).
pub(crate) fn segments(path: &str) -> impl Iterator<Item = &str> {
  path.split('/').filter(|s| !s.is_empty())
}
