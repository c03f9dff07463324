/* src/cli/core/src/build.rs */

// The build step: apply the entry-point normalizer to every transpiled page
// source. Files are written back only when their text actually changes, so
// repeated builds leave the tree untouched.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use trellis_entry::{normalize_page_entry, EntryShape};

use crate::config::load_config;
use crate::ui::{self, DIM, RESET, YELLOW};

pub(crate) fn run(config_path: &Path, check: bool) -> Result<()> {
  let config = load_config(config_path)?;
  let base_dir = config_path.parent().unwrap_or(Path::new("."));
  let pages_dir = base_dir.join(&config.build.pages_dir);
  if !pages_dir.is_dir() {
    bail!("pages directory {} not found", pages_dir.display());
  }

  if let Some(name) = config.project.name.as_deref() {
    ui::detail(&format!("{DIM}normalizing pages for {name}{RESET}"));
  }

  let mut sources = Vec::new();
  collect_sources(&pages_dir, &mut sources)?;
  sources.sort();

  let mut pending = 0usize;
  for path in &sources {
    let status = process_file(path, check)?;
    let name = path.strip_prefix(base_dir).unwrap_or(path).display();
    match status {
      FileStatus::Unchanged(shape) => {
        ui::detail(&format!("{DIM}{name}  ({}){RESET}", shape_label(shape)));
      }
      FileStatus::Rewritten(shape) => {
        pending += 1;
        if check {
          ui::detail(&format!("{YELLOW}!{RESET} {name}  ({} -> canonical)", shape_label(shape)));
        } else {
          ui::detail_ok(&format!("{name}  ({} -> canonical)", shape_label(shape)));
        }
      }
    }
  }

  if check && pending > 0 {
    bail!("{pending} page source(s) need normalization; run `trellis build`");
  }
  ui::ok(&format!("{} page source(s) processed, {pending} rewritten", sources.len()));
  Ok(())
}

enum FileStatus {
  Unchanged(EntryShape),
  Rewritten(EntryShape),
}

fn process_file(path: &Path, check: bool) -> Result<FileStatus> {
  let source =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let result = normalize_page_entry(&source);
  if !result.rewritten() {
    return Ok(FileStatus::Unchanged(result.shape));
  }
  if !check {
    std::fs::write(path, result.source.as_ref())
      .with_context(|| format!("failed to write {}", path.display()))?;
  }
  Ok(FileStatus::Rewritten(result.shape))
}

fn collect_sources(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
  let entries =
    std::fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))?;
  for entry in entries {
    let path = entry?.path();
    if path.is_dir() {
      collect_sources(&path, out)?;
    } else if path.extension().is_some_and(|ext| ext == "rs") {
      out.push(path);
    }
  }
  Ok(())
}

fn shape_label(shape: EntryShape) -> &'static str {
  match shape {
    EntryShape::Legacy => "canonical",
    EntryShape::Context => "context",
    EntryShape::Empty => "empty",
    EntryShape::Unsupported => "unsupported",
    EntryShape::Absent => "no entry",
  }
}
