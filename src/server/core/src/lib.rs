/* src/server/core/src/lib.rs */

pub mod arena;
pub mod context;
pub mod errors;
pub mod manifest;
pub mod matcher;
pub mod params;
pub mod path;
pub mod resolver;
pub mod route;

// Re-exports for ergonomic use
pub use arena::{default_page_arena, PageArena};
pub use context::PageContext;
pub use errors::{ErrorKind, TrellisError};
pub use manifest::{build_manifest, RouteManifest, RouteManifestEntry};
pub use matcher::match_pattern;
pub use params::RouteParams;
pub use path::normalize_path;
pub use resolver::{
  render_request, Rendered, ResponseKind, DOCTYPE_PREAMBLE, INTERNAL_ERROR_BODY, NOT_FOUND_BODY,
};
pub use route::{LayoutFn, PageFn, Route, RouteTree};
pub use trellis_html::Component;
