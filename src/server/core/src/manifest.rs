/* src/server/core/src/manifest.rs */

use serde::Serialize;

use crate::path::normalize_path;
use crate::route::{Route, RouteTree};

/// Flat, serializable listing of every route in a tree, in resolution order
/// (depth-first, declaration order preserved). Diagnostic surface for
/// tooling; the resolver never consults it.
#[derive(Debug, Clone, Serialize)]
pub struct RouteManifest {
  pub routes: Vec<RouteManifestEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteManifestEntry {
  pub pattern: String,
  pub depth: usize,
  pub has_layout: bool,
}

pub fn build_manifest(tree: &RouteTree) -> RouteManifest {
  let mut routes = Vec::new();
  for route in tree.routes() {
    collect(route, 0, &mut routes);
  }
  RouteManifest { routes }
}

impl RouteManifest {
  pub fn to_json(&self) -> serde_json::Value {
    serde_json::to_value(self).expect("manifest serialization")
  }
}

fn collect(route: &Route, depth: usize, out: &mut Vec<RouteManifestEntry>) {
  out.push(RouteManifestEntry {
    pattern: normalize_path(route.path()).to_string(),
    depth,
    has_layout: route.layout().is_some(),
  });
  for child in route.children() {
    collect(child, depth + 1, out);
  }
}
