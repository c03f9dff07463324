/* src/cli/entry/src/lib.rs */

//! Build-time normalization of page entry points.
//!
//! The transpiler emits page functions in one of several accepted shapes;
//! the runtime calls exactly one: the canonical two-argument signature
//! `(arena, optional params) -> Component`. This crate rewrites the other
//! shapes into that signature by renaming the authored function to
//! `page_impl`, injecting a local arena binding, and appending a canonical
//! wrapper that delegates to it. Sources it does not recognize come back
//! byte-for-byte unchanged, and running it on its own output is a no-op.

mod classify;
mod rewrite;
mod scan;

use std::borrow::Cow;

use scan::EntryScan;

/// Which parameter convention was detected on the entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryShape {
  /// Raw arena/params types: already canonical, untouched.
  Legacy,
  /// Page-context capability type: wrapped.
  Context,
  /// Empty parameter list: wrapped with the default-arena preamble.
  Empty,
  /// Anything else (or an unparseable signature): untouched, never guessed.
  Unsupported,
  /// No entry point in this source.
  Absent,
}

/// Normalization result. `source` is `Cow::Borrowed` whenever no rewrite
/// happened.
#[derive(Debug)]
pub struct Normalized<'a> {
  pub source: Cow<'a, str>,
  pub shape: EntryShape,
}

impl Normalized<'_> {
  pub fn rewritten(&self) -> bool {
    matches!(self.source, Cow::Owned(_))
  }
}

/// Normalize one transpiled page source. Never fails: every input that does
/// not scan as a rewritable entry point is returned unchanged.
pub fn normalize_page_entry(source: &str) -> Normalized<'_> {
  let site = match scan::find_entry(source) {
    EntryScan::Absent => {
      return Normalized { source: Cow::Borrowed(source), shape: EntryShape::Absent };
    }
    EntryScan::Malformed => {
      return Normalized { source: Cow::Borrowed(source), shape: EntryShape::Unsupported };
    }
    EntryScan::Site(site) => site,
  };

  let shape = classify::classify_params(&source[site.params_start..site.params_end]);
  let rewritten = match shape {
    EntryShape::Context => rewrite::rewrite_context(source, &site),
    EntryShape::Empty => Some(rewrite::rewrite_empty(source, &site)),
    _ => None,
  };
  match rewritten {
    Some(out) => Normalized { source: Cow::Owned(out), shape },
    None => Normalized { source: Cow::Borrowed(source), shape },
  }
}
