//! Minimal element tree for preview markup
//!
//! Elements are built with chained calls, in the same spirit as a layout
//! builder:
//!
//! ```rust
//! use shade_preview::node::{div, span};
//!
//! let badge = div()
//!     .class("badge")
//!     .bg("#ff6b6b")
//!     .rounded(4)
//!     .child(span().text("SALE"));
//!
//! assert_eq!(
//!     badge.to_html(),
//!     r#"<div class="badge" style="background-color: #ff6b6b; border-radius: 4px"><span>SALE</span></div>"#
//! );
//! ```
//!
//! Inline styles keep insertion order; setting the same property twice
//! replaces the value in place.

use std::fmt::Write;

use indexmap::IndexMap;

/// Elements that never have children or a closing tag
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "meta"];

/// A child of an element: another element or a run of text
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Child {
    Element(PreviewNode),
    Text(String),
}

/// One element of the preview tree
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewNode {
    tag: &'static str,
    class: Option<String>,
    styles: IndexMap<&'static str, String>,
    attrs: IndexMap<&'static str, String>,
    children: Vec<Child>,
}

impl PreviewNode {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            class: None,
            styles: IndexMap::new(),
            attrs: IndexMap::new(),
            children: Vec::new(),
        }
    }

    // =========================================================================
    // Builder
    // =========================================================================

    /// Set the class attribute
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Set an inline style property
    pub fn style(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.styles.insert(property, value.into());
        self
    }

    /// Set an attribute other than `class` or `style`
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.insert(name, value.into());
        self
    }

    /// Append a text run
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Child::Text(text.into()));
        self
    }

    /// Append a child element
    pub fn child(mut self, child: PreviewNode) -> Self {
        self.children.push(Child::Element(child));
        self
    }

    /// Append several child elements
    pub fn children(mut self, children: impl IntoIterator<Item = PreviewNode>) -> Self {
        self.children.extend(children.into_iter().map(Child::Element));
        self
    }

    /// Append a child only when `child` is `Some`
    pub fn child_opt(self, child: Option<PreviewNode>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    // Style shorthands

    pub fn bg(self, color: impl Into<String>) -> Self {
        self.style("background-color", color)
    }

    /// `background` shorthand, for gradients
    pub fn background(self, value: impl Into<String>) -> Self {
        self.style("background", value)
    }

    pub fn color(self, color: impl Into<String>) -> Self {
        self.style("color", color)
    }

    /// Corner radius in whole pixels
    pub fn rounded(self, px: i32) -> Self {
        self.style("border-radius", format!("{px}px"))
    }

    pub fn font_size(self, size: &'static str) -> Self {
        self.style("font-size", size)
    }

    pub fn font_weight(self, weight: u16) -> Self {
        self.style("font-weight", weight.to_string())
    }

    pub fn border(self, value: impl Into<String>) -> Self {
        self.style("border", value)
    }

    pub fn shadow(self, value: impl Into<String>) -> Self {
        self.style("box-shadow", value)
    }

    pub fn padding(self, value: impl Into<String>) -> Self {
        self.style("padding", value)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class.as_deref()
    }

    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }

    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Direct child elements, skipping text runs
    pub fn elements(&self) -> impl Iterator<Item = &PreviewNode> {
        self.children.iter().filter_map(|child| match child {
            Child::Element(node) => Some(node),
            Child::Text(_) => None,
        })
    }

    /// All text below this element, concatenated in document order
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Child::Text(text) => out.push_str(text),
                Child::Element(node) => node.collect_text(out),
            }
        }
    }

    /// First element (depth first, self included) whose class list has `class`
    pub fn find_by_class(&self, class: &str) -> Option<&PreviewNode> {
        if self.has_class(class) {
            return Some(self);
        }
        self.elements().find_map(|node| node.find_by_class(class))
    }

    /// Every element whose class list has `class`, in document order
    pub fn find_all_by_class<'a>(&'a self, class: &str) -> Vec<&'a PreviewNode> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a PreviewNode>) {
        if self.has_class(class) {
            found.push(self);
        }
        for node in self.elements() {
            node.collect_by_class(class, found);
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.class
            .as_deref()
            .is_some_and(|list| list.split_whitespace().any(|c| c == class))
    }

    // =========================================================================
    // Serialization
    // =========================================================================

    /// Serialize to HTML; text and attribute values are escaped
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Wrap the element in a standalone HTML document
    pub fn to_document(&self, title: &str) -> String {
        let mut out = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        let _ = writeln!(out, "<title>{}</title>", html_escape::encode_text(title));
        out.push_str("</head>\n<body style=\"margin: 0\">\n");
        self.write_html(&mut out);
        out.push_str("\n</body>\n</html>\n");
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if let Some(class) = &self.class {
            write_attr(out, "class", class);
        }
        if !self.styles.is_empty() {
            let style = self
                .styles
                .iter()
                .map(|(property, value)| format!("{property}: {value}"))
                .collect::<Vec<_>>()
                .join("; ");
            write_attr(out, "style", &style);
        }
        for (name, value) in &self.attrs {
            write_attr(out, name, value);
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.tag) {
            return;
        }
        for child in &self.children {
            match child {
                Child::Text(text) => out.push_str(&html_escape::encode_text(text)),
                Child::Element(node) => node.write_html(out),
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    let _ = write!(
        out,
        " {}=\"{}\"",
        name,
        html_escape::encode_double_quoted_attribute(value)
    );
}

pub fn el(tag: &'static str) -> PreviewNode {
    PreviewNode::new(tag)
}

pub fn div() -> PreviewNode {
    PreviewNode::new("div")
}

pub fn span() -> PreviewNode {
    PreviewNode::new("span")
}

pub fn p() -> PreviewNode {
    PreviewNode::new("p")
}

pub fn button() -> PreviewNode {
    PreviewNode::new("button")
}

/// Image with `src` and `alt` set
pub fn img(src: impl Into<String>, alt: impl Into<String>) -> PreviewNode {
    PreviewNode::new("img").attr("src", src).attr("alt", alt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_keep_order_and_replace_in_place() {
        let node = div().color("red").rounded(2).color("blue");
        assert_eq!(node.to_html(), r#"<div style="color: blue; border-radius: 2px"></div>"#);
    }

    #[test]
    fn text_and_attributes_are_escaped() {
        let node = p()
            .attr("title", "say \"hi\"")
            .text("Tom & Jerry <3");
        assert_eq!(
            node.to_html(),
            r#"<p title="say &quot;hi&quot;">Tom &amp; Jerry &lt;3</p>"#
        );
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let node = div().child(img("a.png", "A")).child(el("input").attr("type", "email"));
        assert_eq!(
            node.to_html(),
            r#"<div><img src="a.png" alt="A"><input type="email"></div>"#
        );
    }

    #[test]
    fn class_lookup_matches_whole_words() {
        let tree = div()
            .class("page")
            .child(div().class("card sale").text("one"))
            .child(div().class("card").text("two"))
            .child(div().class("cards"));

        assert_eq!(tree.find_by_class("sale").map(|n| n.text_content()), Some("one".into()));
        assert_eq!(tree.find_all_by_class("card").len(), 2);
        assert!(tree.find_by_class("car").is_none());
        assert_eq!(tree.text_content(), "onetwo");
    }

    #[test]
    fn document_wraps_body() {
        let doc = span().text("x").to_document("A & B");
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>A &amp; B</title>"));
        assert!(doc.contains("<span>x</span>"));
    }
}
