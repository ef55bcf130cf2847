use super::escape_html;
use std::fmt::Write;

const VOID_TAGS: [&str; 4] = ["meta", "br", "input", "link"];
const BLOCK_TAGS: [&str; 11] = [
    "html", "body", "main", "section", "header", "div", "p", "h1", "h2", "li", "textarea",
];

/// A node in a markup tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Free text, escaped on render
    Text(String),
    Element(Element),
}

/// An element built from static tags and escaped content
#[derive(Debug, Clone, PartialEq)]
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

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn class(self, class: &'static str) -> Self {
        self.attr("class", class)
    }

    /// Attribute values are escaped on render
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children
            .extend(children.into_iter().map(Node::Element));
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Child elements, skipping text nodes
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Serialize to markup
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            // Writing to a String cannot fail
            let _ = write!(out, " {}=\"{}\"", name, escape_html(value.as_str()));
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag) {
            return;
        }

        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(&escape_html(text.as_str())),
                Node::Element(element) => element.render_into(out),
            }
        }

        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }

    /// Visible text, one line per block element. Graphics are skipped.
    pub fn to_text(&self) -> String {
        let mut lines = Vec::new();
        let mut current = String::new();
        self.collect_text(&mut lines, &mut current);
        flush(&mut lines, &mut current);
        lines.join("\n")
    }

    fn collect_text(&self, lines: &mut Vec<String>, current: &mut String) {
        if self.tag == "svg" || self.tag == "head" {
            return;
        }

        let block = BLOCK_TAGS.contains(&self.tag);
        if block {
            flush(lines, current);
        }

        for child in &self.children {
            match child {
                Node::Text(text) => {
                    if !current.is_empty() && !current.ends_with(' ') {
                        current.push(' ');
                    }
                    current.push_str(text.trim());
                }
                Node::Element(element) => element.collect_text(lines, current),
            }
        }

        if block {
            flush(lines, current);
        }
    }
}

fn flush(lines: &mut Vec<String>, current: &mut String) {
    let line = current.trim();
    if !line.is_empty() {
        lines.push(line.to_string());
    }
    current.clear();
}
