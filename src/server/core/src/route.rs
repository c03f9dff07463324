/* src/server/core/src/route.rs */

use trellis_html::Component;

use crate::arena::PageArena;
use crate::params::RouteParams;

/// Canonical page entry point: every authoring shape is normalized to this
/// signature at build time. Receives the request arena and the matched
/// parameters (`None` when the pattern had no dynamic segments).
pub type PageFn = for<'a> fn(&'a PageArena, Option<&'a RouteParams>) -> Component<'a>;

/// A layout consumes one component and produces a new wrapper around it.
/// Pure: no layout observes anything but the arena and its child.
pub type LayoutFn = for<'a> fn(&'a PageArena, Component<'a>) -> Component<'a>;

/// One node of the route tree: an absolute path pattern, the page it renders,
/// an optional layout applied to this subtree, and child routes tried when
/// this node's own pattern does not match.
///
/// Constructed once at startup and read-only afterwards; a tree is shared
/// across all in-flight requests.
#[derive(Debug, Clone)]
pub struct Route {
  path: String,
  page: PageFn,
  layout: Option<LayoutFn>,
  children: Vec<Route>,
}

impl Route {
  pub fn new(path: impl Into<String>, page: PageFn) -> Self {
    Self { path: path.into(), page, layout: None, children: Vec::new() }
  }

  pub fn with_layout(mut self, layout: LayoutFn) -> Self {
    self.layout = Some(layout);
    self
  }

  pub fn with_child(mut self, child: Route) -> Self {
    self.children.push(child);
    self
  }

  pub fn with_children<I>(mut self, children: I) -> Self
  where
    I: IntoIterator<Item = Route>,
  {
    self.children.extend(children);
    self
  }

  pub fn path(&self) -> &str {
    &self.path
  }

  pub fn page(&self) -> PageFn {
    self.page
  }

  pub fn layout(&self) -> Option<LayoutFn> {
    self.layout
  }

  pub fn children(&self) -> &[Route] {
    &self.children
  }
}

/// Root routes in declaration order. The resolver tries them first to last
/// and stops at the first match.
#[derive(Debug, Clone, Default)]
pub struct RouteTree {
  routes: Vec<Route>,
}

impl RouteTree {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn route(mut self, route: Route) -> Self {
    self.routes.push(route);
    self
  }

  pub fn with_routes<I>(mut self, routes: I) -> Self
  where
    I: IntoIterator<Item = Route>,
  {
    self.routes.extend(routes);
    self
  }

  pub fn routes(&self) -> &[Route] {
    &self.routes
  }
}
