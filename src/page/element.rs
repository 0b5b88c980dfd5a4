// SPDX-License-Identifier: MPL-2.0
use quick_xml::escape::escape;

/// A node of the page tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// Plain text, escaped when serialized.
    Text(String),
    /// Markup kept verbatim: source text, comments, doctype, injected HTML.
    Markup(String),
}

impl Node {
    pub(crate) fn write_to(&self, out: &mut String) {
        match self {
            Node::Element(element) => element.write_to(out),
            Node::Text(text) => out.push_str(&escape(text.as_str())),
            Node::Markup(markup) => out.push_str(markup),
        }
    }
}

/// An element with ordered attributes and child nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
    self_closing: bool,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            self_closing: false,
        }
    }

    pub(crate) fn with_attributes(
        name: String,
        attributes: Vec<(String, String)>,
        self_closing: bool,
    ) -> Self {
        Self {
            name,
            attributes,
            children: Vec::new(),
            self_closing,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Sets an attribute, keeping its position if it already exists.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Replaces all children with a single text node.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children = vec![Node::Text(text.into())];
        self.self_closing = false;
    }

    /// Replaces all children with verbatim markup.
    pub fn set_inner_html(&mut self, html: impl Into<String>) {
        self.children = vec![Node::Markup(html.into())];
        self.self_closing = false;
    }

    /// Replaces all children with already-parsed nodes.
    pub fn set_children(&mut self, children: Vec<Node>) {
        self.children = children;
        self.self_closing = false;
    }

    /// Serialized children, as `innerHTML` would show them.
    pub fn inner_markup(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.write_to(&mut out);
        }
        out
    }

    pub(crate) fn write_to(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&escape(value.as_str()));
            out.push('"');
        }
        if self.self_closing && self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for child in &self.children {
            child.write_to(out);
        }
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }
}
