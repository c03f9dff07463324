/* src/cli/core/src/ui.rs */

// Minimal terminal output helpers shared by CLI commands.

pub(crate) const DIM: &str = "\x1b[2m";
pub(crate) const GREEN: &str = "\x1b[32m";
pub(crate) const YELLOW: &str = "\x1b[33m";
pub(crate) const RESET: &str = "\x1b[0m";

pub(crate) fn detail(message: &str) {
  println!("  {message}");
}

pub(crate) fn detail_ok(message: &str) {
  println!("  {GREEN}+{RESET} {message}");
}

pub(crate) fn ok(message: &str) {
  println!("{GREEN}ok{RESET} {message}");
}
