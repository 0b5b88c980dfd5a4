// SPDX-License-Identifier: MPL-2.0
//! In-memory page tree built from a well-formed (XHTML) template.
//!
//! Only elements are modelled; everything between them (text, comments,
//! doctype, processing instructions) is kept as the exact source slice, so
//! an untouched document serializes back to the input byte for byte,
//! modulo attribute quoting.

mod element;

pub use element::{Element, Node};

use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub nodes: Vec<Node>,
}

impl Document {
    /// Parses a template or a fragment with several top-level nodes.
    pub fn parse(source: &str) -> Result<Self> {
        Ok(Self {
            nodes: parse_nodes(source)?,
        })
    }

    pub fn to_markup(&self) -> String {
        let mut out = String::with_capacity(1024);
        for node in &self.nodes {
            node.write_to(&mut out);
        }
        out
    }

    /// Visits every element depth-first, parents before children.
    pub fn walk_mut(&mut self, visit: &mut impl FnMut(&mut Element)) {
        walk_nodes_mut(&mut self.nodes, visit);
    }

    pub fn walk(&self, visit: &mut impl FnMut(&Element)) {
        walk_nodes(&self.nodes, visit);
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        find_in(&self.nodes, id)
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_in_mut(&mut self.nodes, id)
    }

    /// First top-level element, normally `<html>`.
    pub fn root_element_mut(&mut self) -> Option<&mut Element> {
        self.nodes.iter_mut().find_map(|node| match node {
            Node::Element(element) => Some(element),
            _ => None,
        })
    }
}

fn walk_nodes_mut(nodes: &mut [Node], visit: &mut impl FnMut(&mut Element)) {
    for node in nodes {
        if let Node::Element(element) = node {
            visit(element);
            walk_nodes_mut(&mut element.children, visit);
        }
    }
}

fn walk_nodes(nodes: &[Node], visit: &mut impl FnMut(&Element)) {
    for node in nodes {
        if let Node::Element(element) = node {
            visit(element);
            walk_nodes(&element.children, visit);
        }
    }
}

fn find_in<'a>(nodes: &'a [Node], id: &str) -> Option<&'a Element> {
    nodes.iter().find_map(|node| match node {
        Node::Element(element) if element.attr("id") == Some(id) => Some(element),
        Node::Element(element) => find_in(&element.children, id),
        _ => None,
    })
}

fn find_in_mut<'a>(nodes: &'a mut [Node], id: &str) -> Option<&'a mut Element> {
    for node in nodes {
        if let Node::Element(element) = node {
            if element.attr("id") == Some(id) {
                return Some(element);
            }
            if let Some(found) = find_in_mut(&mut element.children, id) {
                return Some(found);
            }
        }
    }
    None
}

fn element_from_start(start: &BytesStart<'_>, self_closing: bool) -> Result<Element> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        attributes.push((key, value));
    }
    Ok(Element::with_attributes(name, attributes, self_closing))
}

fn parse_nodes(source: &str) -> Result<Vec<Node>> {
    let mut reader = Reader::from_str(source);
    reader.config_mut().trim_text(false);

    let mut roots: Vec<Node> = Vec::new();
    let mut open: Vec<Element> = Vec::new();

    fn push(node: Node, open: &mut [Element], roots: &mut Vec<Node>) {
        match open.last_mut() {
            Some(parent) => parent.children.push(node),
            None => roots.push(node),
        }
    }

    loop {
        let before = reader.buffer_position() as usize;
        let event = reader.read_event()?;
        let after = reader.buffer_position() as usize;

        match event {
            Event::Start(start) => open.push(element_from_start(&start, false)?),
            Event::Empty(start) => {
                let element = element_from_start(&start, true)?;
                push(Node::Element(element), &mut open, &mut roots);
            }
            Event::End(end) => {
                let element = open.pop().ok_or_else(|| {
                    Error::Template(format!(
                        "unexpected closing tag </{}>",
                        String::from_utf8_lossy(end.name().as_ref())
                    ))
                })?;
                push(Node::Element(element), &mut open, &mut roots);
            }
            Event::Text(_)
            | Event::CData(_)
            | Event::Comment(_)
            | Event::Decl(_)
            | Event::PI(_)
            | Event::DocType(_) => {
                let raw = source.get(before..after).unwrap_or_default();
                push(Node::Markup(raw.to_string()), &mut open, &mut roots);
            }
            Event::Eof => break,
        }
    }

    if let Some(unclosed) = open.last() {
        return Err(Error::Template(format!(
            "unclosed element <{}>",
            unclosed.name
        )));
    }

    Ok(roots)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html>
<html lang="ru">
  <head><title data-i18n="meta.title">Портфолио</title></head>
  <body>
    <!-- hero -->
    <div id="header"></div>
    <p class="lead">Tom &amp; Jerry</p>
    <input type="text" placeholder="Имя"/>
  </body>
</html>
"#;

    #[test]
    fn untouched_document_round_trips() {
        let doc = Document::parse(PAGE).expect("valid page");
        assert_eq!(doc.to_markup(), PAGE);
    }

    #[test]
    fn find_by_id_searches_nested_elements() {
        let doc = Document::parse(PAGE).unwrap();
        let header = doc.find_by_id("header").expect("header slot");
        assert_eq!(header.name, "div");
        assert!(doc.find_by_id("footer").is_none());
    }

    #[test]
    fn walk_visits_parents_before_children() {
        let doc = Document::parse(PAGE).unwrap();
        let mut names = Vec::new();
        doc.walk(&mut |el| names.push(el.name.clone()));
        assert_eq!(names, vec!["html", "head", "title", "body", "div", "p", "input"]);
    }

    #[test]
    fn attributes_are_unescaped_on_read() {
        let doc = Document::parse(r#"<a title="Tom &amp; Jerry">x</a>"#).unwrap();
        let mut title = None;
        doc.walk(&mut |el| title = el.attr("title").map(str::to_string));
        assert_eq!(title.as_deref(), Some("Tom & Jerry"));
        assert_eq!(doc.to_markup(), r#"<a title="Tom &amp; Jerry">x</a>"#);
    }

    #[test]
    fn fragments_with_several_roots_parse() {
        let doc = Document::parse("<nav>a</nav><ul><li>b</li></ul>").unwrap();
        assert_eq!(doc.nodes.len(), 2);
    }

    #[test]
    fn unclosed_element_is_template_error() {
        let err = Document::parse("<div><p>text</div>").unwrap_err();
        assert!(matches!(err, Error::Template(_)));

        let err = Document::parse("<section>").unwrap_err();
        assert!(matches!(err, Error::Template(_)));
    }

    #[test]
    fn root_element_skips_doctype() {
        let mut doc = Document::parse(PAGE).unwrap();
        assert_eq!(doc.root_element_mut().map(|el| el.name.clone()), Some("html".into()));
    }
}
