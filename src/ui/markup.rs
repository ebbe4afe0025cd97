// SPDX-License-Identifier: MPL-2.0
//! HTML element builder.
//!
//! Produces markup with attributes in insertion order. Attribute values and
//! text are escaped; tag and attribute names are trusted.

use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt;

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: [&str; 6] = ["br", "hr", "img", "input", "link", "meta"];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Element(Element),
    Text(String),
    /// Pre-rendered markup inserted verbatim.
    Raw(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// Adds the attribute only when `value` is present.
    #[must_use]
    pub fn attr_opt(self, name: &'static str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    #[must_use]
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Inserts already rendered markup, such as a stylesheet, unescaped.
    #[must_use]
    pub fn raw(mut self, markup: impl Into<String>) -> Self {
        self.children.push(Node::Raw(markup.into()));
        self
    }

    /// Unescaped value of attribute `name`.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.get_attr(name).is_some()
    }

    /// Child elements, skipping text.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            _ => None,
        })
    }

    fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attrs {
            write!(f, " {}=\"{}\"", name, encode_double_quoted_attribute(value))?;
        }
        write!(f, ">")?;
        if self.is_void() {
            return Ok(());
        }
        for child in &self.children {
            match child {
                Node::Element(element) => write!(f, "{element}")?,
                Node::Text(text) => write!(f, "{}", encode_text(text))?,
                Node::Raw(markup) => f.write_str(markup)?,
            }
        }
        write!(f, "</{}>", self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_attributes_in_order() {
        let a = Element::new("a").attr("class", "x").attr("href", "/y");
        assert_eq!(a.to_string(), r#"<a class="x" href="/y"></a>"#);
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let img = Element::new("img").attr("src", "/i.png").attr("alt", "");
        assert_eq!(img.to_string(), r#"<img src="/i.png" alt="">"#);
    }

    #[test]
    fn attr_opt_skips_none() {
        let a = Element::new("a")
            .attr_opt("target", None::<&str>)
            .attr_opt("rel", Some("noopener"));
        assert!(!a.has_attr("target"));
        assert_eq!(a.get_attr("rel"), Some("noopener"));
    }

    #[test]
    fn escapes_attribute_values_and_text() {
        let p = Element::new("p")
            .attr("title", r#"a "quoted" <b> & 'it'"#)
            .text("1 < 2 & 3");
        assert_eq!(
            p.to_string(),
            "<p title=\"a &quot;quoted&quot; &lt;b&gt; &amp; 'it'\">1 &lt; 2 &amp; 3</p>"
        );
    }

    #[test]
    fn raw_children_are_not_escaped() {
        let style = Element::new("style").raw(".a > .b { color: red; }");
        assert_eq!(style.to_string(), "<style>.a > .b { color: red; }</style>");
    }

    #[test]
    fn nested_children_render_inside_parent() {
        let a = Element::new("a").child(Element::new("img").attr("src", "/i.png"));
        assert_eq!(a.child_elements().count(), 1);
        assert_eq!(a.to_string(), r#"<a><img src="/i.png"></a>"#);
    }
}
