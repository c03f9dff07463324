/* src/server/core/src/arena.rs */

use std::fmt;
use std::sync::{Mutex, OnceLock};

/// Per-request string arena. Pages and layouts allocate dynamic strings here
/// and receive references valid for the whole render, so component trees can
/// borrow everything they display.
///
/// Chunks are `Box<str>`: the heap buffer behind each allocation never moves
/// when the chunk list grows, which is what makes the returned references
/// stable.
#[derive(Debug)]
pub struct PageArena {
  chunks: Mutex<Vec<Box<str>>>,
}

impl PageArena {
  pub fn new() -> Self {
    Self { chunks: Mutex::new(Vec::new()) }
  }

  /// Copy `value` into the arena, returning a reference that stays valid as
  /// long as the arena does.
  pub fn alloc_str(&self, value: &str) -> &str {
    let boxed: Box<str> = Box::from(value);
    let ptr: *const str = &*boxed;
    let mut chunks = self.chunks.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    chunks.push(boxed);
    // SAFETY: the pushed Box owns a stable heap allocation. The chunk list
    // only grows and is dropped no earlier than the arena itself, so the
    // pointee outlives every `&self` borrow this reference is tied to.
    unsafe { &*ptr }
  }

  /// Format directly into the arena: `arena.alloc_fmt(format_args!(...))`.
  pub fn alloc_fmt(&self, args: fmt::Arguments<'_>) -> &str {
    self.alloc_str(&args.to_string())
  }
}

impl Default for PageArena {
  fn default() -> Self {
    Self::new()
  }
}

static DEFAULT_ARENA: OnceLock<PageArena> = OnceLock::new();

/// Process-wide arena backing pages authored with no parameters. Strings
/// allocated through it live for the rest of the process.
pub fn default_page_arena() -> &'static PageArena {
  DEFAULT_ARENA.get_or_init(PageArena::new)
}
