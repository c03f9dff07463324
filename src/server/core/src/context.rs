/* src/server/core/src/context.rs */

use crate::arena::PageArena;
use crate::params::RouteParams;

/// Everything a page render can reach: the request arena and the matched
/// route parameters. Context-shaped pages receive one explicitly; there is
/// no implicit "current context" registration anywhere.
///
/// Accessors return `'a`-bound references, so components built from them may
/// outlive the context value itself (it is usually a local in a generated
/// wrapper).
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
  arena: &'a PageArena,
  params: Option<&'a RouteParams>,
}

impl<'a> PageContext<'a> {
  pub fn new(arena: &'a PageArena, params: Option<&'a RouteParams>) -> Self {
    Self { arena, params }
  }

  pub fn arena(&self) -> &'a PageArena {
    self.arena
  }

  pub fn params(&self) -> Option<&'a RouteParams> {
    self.params
  }

  /// Captured value of one route parameter, if the route had any.
  pub fn param(&self, name: &str) -> Option<&'a str> {
    self.params.and_then(|p| p.get(name))
  }
}
