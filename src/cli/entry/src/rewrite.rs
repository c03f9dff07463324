/* src/cli/entry/src/rewrite.rs */

// Performs the actual text rewrite: rename the authored entry to the
// implementation name, inject the arena binding as the body's first
// statement, and append the canonical wrapper. Either the whole rewrite
// happens or the source comes back untouched.

use crate::scan::EntrySite;

/// Fixed suffix marking the renamed implementation.
const IMPL_SUFFIX: &str = "_impl";

/// Canonical wrapper for the context shape: builds the context and passes it
/// explicitly. No hidden registration, so nothing needs releasing on any
/// exit path.
const CONTEXT_WRAPPER: &str = "pub fn page<'a>(arena: &'a PageArena, params: Option<&'a RouteParams>) -> Component<'a> {\n  let ctx = PageContext::new(arena, params);\n  page_impl(&ctx)\n}\n";

/// Canonical wrapper for the bare shape: the implementation takes nothing,
/// so the wrapper only exists to satisfy the runtime signature.
const EMPTY_WRAPPER: &str = "pub fn page<'a>(_arena: &'a PageArena, _params: Option<&'a RouteParams>) -> Component<'a> {\n  page_impl()\n}\n";

/// Rewrite a context-shaped entry. Returns `None` (leave the source alone)
/// when the context parameter's name cannot be determined.
pub(crate) fn rewrite_context(source: &str, site: &EntrySite) -> Option<String> {
  let params = &source[site.params_start..site.params_end];
  let ctx_name = context_param_name(params)?;
  let arena_binding = format!("\n  let arena = {ctx_name}.arena();");
  Some(assemble(source, site, &arena_binding, CONTEXT_WRAPPER))
}

/// Rewrite a bare entry: the arena comes from the process-provided default
/// accessor.
pub(crate) fn rewrite_empty(source: &str, site: &EntrySite) -> String {
  assemble(
    source,
    site,
    "\n  let arena = trellis_server::default_page_arena();",
    EMPTY_WRAPPER,
  )
}

fn assemble(source: &str, site: &EntrySite, arena_binding: &str, wrapper: &str) -> String {
  let mut out = String::with_capacity(source.len() + arena_binding.len() + wrapper.len() + 16);
  out.push_str(&source[..site.name_end]);
  out.push_str(IMPL_SUFFIX);
  out.push_str(&source[site.name_end..=site.body_open]);
  out.push_str(arena_binding);
  out.push_str(&source[site.body_open + 1..]);
  // Exactly one blank line between the implementation and the wrapper.
  if !out.ends_with('\n') {
    out.push('\n');
  }
  out.push('\n');
  out.push_str(wrapper);
  out
}

/// Name of the context parameter: the identifier before the first `:`.
fn context_param_name(params: &str) -> Option<&str> {
  let (name, _ty) = params.trim().split_once(':')?;
  let name = name.trim().trim_start_matches("mut ").trim();
  if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
    return None;
  }
  Some(name)
}
