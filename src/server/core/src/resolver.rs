/* src/server/core/src/resolver.rs */

use std::io::Write;

use bytes::Bytes;
use trellis_html::Component;

use crate::arena::PageArena;
use crate::errors::TrellisError;
use crate::matcher::match_pattern;
use crate::path::normalize_path;
use crate::route::{LayoutFn, Route, RouteTree};

/// Every successful page response starts with these exact bytes.
pub const DOCTYPE_PREAMBLE: &str = "<!DOCTYPE html>\n";
/// Literal body when no route matched.
pub const NOT_FOUND_BODY: &str = "Not found";
/// Literal body when a selected route failed to render.
pub const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
  Page,
  NotFound,
  Error,
}

/// Driver result: the literal body plus which of the three user-visible
/// outcomes it is. Adapters may map the kind to a status code; the core
/// contract is the body text alone.
#[derive(Debug, Clone)]
pub struct Rendered {
  pub kind: ResponseKind,
  pub body: Bytes,
}

enum ResolveOutcome {
  Rendered,
  Failed,
  NoMatch,
}

/// Resolve a request path against the tree and produce the response body.
///
/// Root routes are tried in declaration order; the first route (anywhere in
/// its subtree) that matches wins and siblings after it are never evaluated.
pub fn render_request(tree: &RouteTree, request_path: &str) -> Rendered {
  let path = normalize_path(request_path);
  let mut inherited: Vec<LayoutFn> = Vec::new();
  let mut out = Vec::new();
  for route in tree.routes() {
    match resolve(route, path, &mut inherited, &mut out) {
      ResolveOutcome::Rendered => {
        return Rendered { kind: ResponseKind::Page, body: Bytes::from(out) };
      }
      ResolveOutcome::Failed => {
        return Rendered {
          kind: ResponseKind::Error,
          body: Bytes::from_static(INTERNAL_ERROR_BODY.as_bytes()),
        };
      }
      ResolveOutcome::NoMatch => {}
    }
  }
  Rendered { kind: ResponseKind::NotFound, body: Bytes::from_static(NOT_FOUND_BODY.as_bytes()) }
}

/// Depth-first descent. `inherited` accumulates ancestor layouts root-first;
/// it is pushed/popped symmetrically so siblings never observe each other's
/// layouts.
fn resolve(
  route: &Route,
  path: &str,
  inherited: &mut Vec<LayoutFn>,
  out: &mut Vec<u8>,
) -> ResolveOutcome {
  let pattern = normalize_path(route.path());
  if let Some(params) = match_pattern(pattern, path) {
    return render_matched(route, inherited, params, path, out);
  }

  if route.children().is_empty() {
    return ResolveOutcome::NoMatch;
  }
  if let Some(layout) = route.layout() {
    inherited.push(layout);
  }
  let mut outcome = ResolveOutcome::NoMatch;
  for child in route.children() {
    match resolve(child, path, inherited, out) {
      ResolveOutcome::NoMatch => {}
      other => {
        outcome = other;
        break;
      }
    }
  }
  if route.layout().is_some() {
    inherited.pop();
  }
  outcome
}

fn render_matched(
  route: &Route,
  inherited: &[LayoutFn],
  params: crate::params::RouteParams,
  path: &str,
  out: &mut Vec<u8>,
) -> ResolveOutcome {
  let arena = PageArena::new();
  // A purely static match carries no parameter set at all.
  let params = (!params.is_empty()).then_some(params);
  let mut component = (route.page())(&arena, params.as_ref());
  if let Some(layout) = route.layout() {
    component = layout(&arena, component);
  }
  // `inherited` is root-first; wrap leaf-to-root so the oldest ancestor ends
  // up outermost around the content.
  for layout in inherited.iter().rev() {
    component = layout(&arena, component);
  }

  out.extend_from_slice(DOCTYPE_PREAMBLE.as_bytes());
  if let Err(err) = write_component(&component, out) {
    // The route still counts as handled: no sibling fallback. The partial
    // buffer is discarded so the driver can substitute the clean error body.
    tracing::error!(path, error = %err, "render failed after route match");
    out.clear();
    return ResolveOutcome::Failed;
  }
  ResolveOutcome::Rendered
}

pub(crate) fn write_component(
  component: &Component<'_>,
  mut out: &mut dyn Write,
) -> Result<(), TrellisError> {
  component.render_to(&mut out).map_err(|err| TrellisError::render(err.to_string()))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::errors::ErrorKind;
  use crate::params::RouteParams;
  use crate::route::Route;

  fn home<'a>(_arena: &'a PageArena, _params: Option<&'a RouteParams>) -> Component<'a> {
    Component::element("h1").child(Component::text("Home"))
  }

  fn about<'a>(_arena: &'a PageArena, _params: Option<&'a RouteParams>) -> Component<'a> {
    Component::element("p").child(Component::text("About"))
  }

  fn user<'a>(arena: &'a PageArena, params: Option<&'a RouteParams>) -> Component<'a> {
    let id = params.and_then(|p| p.get("id")).unwrap_or("?");
    Component::element("p").child(Component::text(arena.alloc_fmt(format_args!("user {id}"))))
  }

  fn first<'a>(_arena: &'a PageArena, _params: Option<&'a RouteParams>) -> Component<'a> {
    Component::text("first")
  }

  fn second<'a>(_arena: &'a PageArena, _params: Option<&'a RouteParams>) -> Component<'a> {
    Component::text("second")
  }

  fn outer_layout<'a>(_arena: &'a PageArena, inner: Component<'a>) -> Component<'a> {
    Component::element("body").attr("class", "outer").child(inner)
  }

  fn inner_layout<'a>(_arena: &'a PageArena, inner: Component<'a>) -> Component<'a> {
    Component::element("section").child(inner)
  }

  fn body_str(rendered: &Rendered) -> &str {
    std::str::from_utf8(&rendered.body).unwrap()
  }

  #[test]
  fn static_route_renders_with_preamble() {
    let tree = RouteTree::new().route(Route::new("/about", about));
    let rendered = render_request(&tree, "/about");
    assert_eq!(rendered.kind, ResponseKind::Page);
    assert_eq!(body_str(&rendered), "<!DOCTYPE html>\n<p>About</p>");
  }

  #[test]
  fn trailing_separator_on_request_is_trimmed() {
    let tree = RouteTree::new().route(Route::new("/about", about));
    assert_eq!(render_request(&tree, "/about/").kind, ResponseKind::Page);
  }

  #[test]
  fn trailing_separator_on_route_path_is_trimmed() {
    let tree = RouteTree::new().route(Route::new("/about/", about));
    assert_eq!(render_request(&tree, "/about").kind, ResponseKind::Page);
  }

  #[test]
  fn dynamic_route_binds_params() {
    let tree = RouteTree::new().route(Route::new("/users/[id]", user));
    let rendered = render_request(&tree, "/users/42");
    assert_eq!(body_str(&rendered), "<!DOCTYPE html>\n<p>user 42</p>");
  }

  #[test]
  fn unknown_path_yields_not_found_body() {
    let tree = RouteTree::new().route(Route::new("/about", about));
    let rendered = render_request(&tree, "/does/not/exist");
    assert_eq!(rendered.kind, ResponseKind::NotFound);
    assert_eq!(body_str(&rendered), "Not found");
  }

  #[test]
  fn layouts_compose_root_outermost() {
    // Root layout L1 on the parent, own layout L2 on the child:
    // the rendered result must be L1(L2(page())).
    let tree = RouteTree::new().route(
      Route::new("/", home)
        .with_layout(outer_layout)
        .with_child(Route::new("/about", about).with_layout(inner_layout)),
    );
    let rendered = render_request(&tree, "/about");
    assert_eq!(
      body_str(&rendered),
      "<!DOCTYPE html>\n<body class=\"outer\"><section><p>About</p></section></body>"
    );
  }

  #[test]
  fn matched_parent_does_not_apply_own_children_chain() {
    // Matching the parent itself applies only its own layout.
    let tree = RouteTree::new().route(
      Route::new("/", home)
        .with_layout(outer_layout)
        .with_child(Route::new("/about", about).with_layout(inner_layout)),
    );
    let rendered = render_request(&tree, "/");
    assert_eq!(
      body_str(&rendered),
      "<!DOCTYPE html>\n<body class=\"outer\"><h1>Home</h1></body>"
    );
  }

  #[test]
  fn first_declared_sibling_wins() {
    // Both siblings could structurally match /items/anything.
    let tree = RouteTree::new().route(
      Route::new("/", home)
        .with_child(Route::new("/items/[a]", first))
        .with_child(Route::new("/items/[b]", second)),
    );
    let rendered = render_request(&tree, "/items/anything");
    assert_eq!(body_str(&rendered), "<!DOCTYPE html>\nfirst");
  }

  #[test]
  fn root_route_order_short_circuits() {
    let tree = RouteTree::new()
      .route(Route::new("/dup", first))
      .route(Route::new("/dup", second));
    assert_eq!(body_str(&render_request(&tree, "/dup")), "<!DOCTYPE html>\nfirst");
  }

  #[test]
  fn sibling_layouts_do_not_leak() {
    // The first subtree pushes a layout while descending; the second subtree
    // must not inherit it.
    let tree = RouteTree::new()
      .route(
        Route::new("/a", home)
          .with_layout(inner_layout)
          .with_child(Route::new("/a/x", about)),
      )
      .route(Route::new("/b", about));
    let rendered = render_request(&tree, "/b");
    assert_eq!(body_str(&rendered), "<!DOCTYPE html>\n<p>About</p>");
  }

  #[test]
  fn deep_nesting_accumulates_ancestor_layouts() {
    let tree = RouteTree::new().route(
      Route::new("/", home).with_layout(outer_layout).with_child(
        Route::new("/docs", about)
          .with_layout(inner_layout)
          .with_child(Route::new("/docs/guide", first)),
      ),
    );
    let rendered = render_request(&tree, "/docs/guide");
    assert_eq!(
      body_str(&rendered),
      "<!DOCTYPE html>\n<body class=\"outer\"><section>first</section></body>"
    );
  }

  #[test]
  fn static_match_passes_no_params() {
    fn assert_none<'a>(
      _arena: &'a PageArena,
      params: Option<&'a RouteParams>,
    ) -> Component<'a> {
      assert!(params.is_none());
      Component::text("ok")
    }
    let tree = RouteTree::new().route(Route::new("/plain", assert_none));
    assert_eq!(render_request(&tree, "/plain").kind, ResponseKind::Page);
  }

  #[test]
  fn write_component_maps_io_errors() {
    struct FailWriter;
    impl std::io::Write for FailWriter {
      fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::other("stream reset"))
      }
      fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
      }
    }
    let component = Component::text("x");
    let err = write_component(&component, &mut FailWriter).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Render);
  }
}
