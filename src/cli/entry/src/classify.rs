/* src/cli/entry/src/classify.rs */

use crate::EntryShape;

/// Classify the trimmed parameter-list text of a page entry point.
///
/// Checked in order: the raw arena/params types mark an already-canonical
/// signature; the context capability type marks the wrapping shape; an empty
/// list is the bare shape. Anything else is left alone; the classifier
/// never guesses.
pub(crate) fn classify_params(params: &str) -> EntryShape {
  let trimmed = params.trim();
  if trimmed.contains("PageArena") || trimmed.contains("RouteParams") {
    EntryShape::Legacy
  } else if trimmed.contains("PageContext") {
    EntryShape::Context
  } else if trimmed.is_empty() {
    EntryShape::Empty
  } else {
    EntryShape::Unsupported
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn canonical_two_argument_list_is_legacy() {
    assert_eq!(
      classify_params("arena: &'a PageArena, params: Option<&'a RouteParams>"),
      EntryShape::Legacy
    );
  }

  #[test]
  fn either_raw_type_alone_is_legacy() {
    assert_eq!(classify_params("arena: &PageArena"), EntryShape::Legacy);
    assert_eq!(classify_params("params: &RouteParams"), EntryShape::Legacy);
  }

  #[test]
  fn context_type_is_context() {
    assert_eq!(classify_params("ctx: &PageContext<'a>"), EntryShape::Context);
  }

  #[test]
  fn legacy_wins_over_context_when_both_appear() {
    assert_eq!(
      classify_params("arena: &PageArena, ctx: &PageContext<'a>"),
      EntryShape::Legacy
    );
  }

  #[test]
  fn empty_list_is_empty() {
    assert_eq!(classify_params(""), EntryShape::Empty);
    assert_eq!(classify_params("   \n  "), EntryShape::Empty);
  }

  #[test]
  fn anything_else_is_unsupported() {
    assert_eq!(classify_params("title: &str"), EntryShape::Unsupported);
    assert_eq!(classify_params("db: &Database, n: usize"), EntryShape::Unsupported);
  }
}
