/* src/server/core/src/params.rs */

use std::collections::HashMap;

/// Parameters captured by dynamic segments during a match. Created fresh per
/// matching request and dropped when the render finishes; never shared.
///
/// A pattern that repeats a parameter name (`/[id]/[id]`) keeps the last
/// captured value. Documented behavior, covered by a test below.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
  values: HashMap<String, String>,
}

impl RouteParams {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(&mut self, name: &str, value: &str) {
    self.values.insert(name.to_string(), value.to_string());
  }

  pub fn get(&self, name: &str) -> Option<&str> {
    self.values.get(name).map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn insert_and_get() {
    let mut params = RouteParams::new();
    params.insert("id", "42");
    assert_eq!(params.get("id"), Some("42"));
    assert_eq!(params.get("missing"), None);
    assert_eq!(params.len(), 1);
  }

  #[test]
  fn duplicate_name_keeps_last_value() {
    let mut params = RouteParams::new();
    params.insert("id", "first");
    params.insert("id", "second");
    assert_eq!(params.get("id"), Some("second"));
    assert_eq!(params.len(), 1);
  }
}
