/* src/server/html/src/component.rs */

use std::io::{self, Write};

use crate::escape::escape_into;

const VOID_ELEMENTS: &[&str] = &[
  "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
  "track", "wbr",
];

/// A renderable HTML value. Pages produce one; each layout consumes one and
/// produces a new wrapper around it.
///
/// All strings are borrowed for the render lifetime: string literals, arena
/// allocations, and captured route parameters all satisfy `&'a str`, so
/// building a tree performs no string copies.
#[derive(Debug, Clone, PartialEq)]
pub enum Component<'a> {
  /// An element with attributes and children. Tag and attribute names are
  /// trusted authoring-side tokens; attribute values are escaped on render.
  Element { tag: &'a str, attrs: Vec<(&'a str, &'a str)>, children: Vec<Component<'a>> },
  /// Text content, HTML-escaped on render.
  Text(&'a str),
  /// Verbatim HTML, written unescaped.
  Raw(&'a str),
}

impl<'a> Component<'a> {
  pub fn element(tag: &'a str) -> Self {
    Component::Element { tag, attrs: Vec::new(), children: Vec::new() }
  }

  pub fn text(value: &'a str) -> Self {
    Component::Text(value)
  }

  pub fn raw(html: &'a str) -> Self {
    Component::Raw(html)
  }

  /// Add an attribute. No-op on text and raw nodes.
  pub fn attr(mut self, name: &'a str, value: &'a str) -> Self {
    if let Component::Element { ref mut attrs, .. } = self {
      attrs.push((name, value));
    }
    self
  }

  /// Append a child. No-op on text and raw nodes.
  pub fn child(mut self, node: Component<'a>) -> Self {
    if let Component::Element { ref mut children, .. } = self {
      children.push(node);
    }
    self
  }

  /// Append children in order. No-op on text and raw nodes.
  pub fn children<I>(mut self, nodes: I) -> Self
  where
    I: IntoIterator<Item = Component<'a>>,
  {
    if let Component::Element { ref mut children, .. } = self {
      children.extend(nodes);
    }
    self
  }

  /// Render this tree into a byte stream. Void elements render without a
  /// closing tag and their children are never visited.
  pub fn render_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
    match self {
      Component::Text(value) => escape_into(value, out),
      Component::Raw(html) => out.write_all(html.as_bytes()),
      Component::Element { tag, attrs, children } => {
        out.write_all(b"<")?;
        out.write_all(tag.as_bytes())?;
        for (name, value) in attrs {
          out.write_all(b" ")?;
          out.write_all(name.as_bytes())?;
          out.write_all(b"=\"")?;
          escape_into(value, out)?;
          out.write_all(b"\"")?;
        }
        out.write_all(b">")?;
        if VOID_ELEMENTS.contains(tag) {
          return Ok(());
        }
        for node in children {
          node.render_to(out)?;
        }
        out.write_all(b"</")?;
        out.write_all(tag.as_bytes())?;
        out.write_all(b">")
      }
    }
  }

  /// Render into an owned String. Writing to a Vec cannot fail.
  pub fn render_string(&self) -> String {
    let mut buf = Vec::new();
    self.render_to(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn renders_element_with_attrs_and_children() {
    let node = Component::element("div")
      .attr("class", "card")
      .child(Component::element("h1").child(Component::text("Hello")))
      .child(Component::text("world"));
    assert_eq!(node.render_string(), r#"<div class="card"><h1>Hello</h1>world</div>"#);
  }

  #[test]
  fn escapes_text_content() {
    let node = Component::element("p").child(Component::text("a < b & c"));
    assert_eq!(node.render_string(), "<p>a &lt; b &amp; c</p>");
  }

  #[test]
  fn escapes_attribute_values() {
    let node = Component::element("a").attr("title", r#"say "hi""#);
    assert_eq!(node.render_string(), r#"<a title="say &quot;hi&quot;"></a>"#);
  }

  #[test]
  fn raw_passes_through_unescaped() {
    let node = Component::element("div").child(Component::raw("<b>bold</b>"));
    assert_eq!(node.render_string(), "<div><b>bold</b></div>");
  }

  #[test]
  fn void_elements_have_no_closing_tag() {
    let node = Component::element("img").attr("src", "x.png");
    assert_eq!(node.render_string(), r#"<img src="x.png">"#);
    assert_eq!(Component::element("br").render_string(), "<br>");
  }

  #[test]
  fn attr_on_text_is_noop() {
    let node = Component::text("plain").attr("class", "ignored");
    assert_eq!(node.render_string(), "plain");
  }

  #[test]
  fn children_extends_in_order() {
    let node = Component::element("ul")
      .children(["a", "b"].into_iter().map(|s| Component::element("li").child(Component::text(s))));
    assert_eq!(node.render_string(), "<ul><li>a</li><li>b</li></ul>");
  }

  #[test]
  fn render_to_propagates_writer_errors() {
    struct FailWriter;
    impl std::io::Write for FailWriter {
      fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::other("sink closed"))
      }
      fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
      }
    }
    let node = Component::element("p").child(Component::text("x"));
    assert!(node.render_to(&mut FailWriter).is_err());
  }
}
