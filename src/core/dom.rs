//! In-memory page model.
//!
//! A `Document` is an arena of elements rooted at `<body>`, plus the
//! window-level state the widgets touch: the current location and the alerts
//! raised so far. Widgets share it as [`SharedDocument`] and must never hold a
//! borrow across an `.await`.

use std::cell::RefCell;
use std::rc::Rc;

use html_escape::{encode_double_quoted_attribute, encode_text};

pub type SharedDocument = Rc<RefCell<Document>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta", "link"];

#[derive(Debug, Clone, Default)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    text: String,
    value: String,
    disabled: bool,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Element {
            tag: tag.to_ascii_lowercase(),
            ..Default::default()
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: &str) {
        self.id = Some(id.to_string());
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
    }

    /// Own text, not including descendants.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

#[derive(Debug)]
pub struct Document {
    nodes: Vec<Element>,
    body: NodeId,
    location: String,
    alerts: Vec<String>,
}

impl Document {
    pub fn new(location: &str) -> Self {
        Document {
            nodes: vec![Element::new("body")],
            body: NodeId(0),
            location: location.to_string(),
            alerts: Vec::new(),
        }
    }

    pub fn shared(self) -> SharedDocument {
        Rc::new(RefCell::new(self))
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn navigate(&mut self, location: &str) {
        self.location = location.to_string();
    }

    pub fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Creates a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.push(Element::new(tag));
        NodeId(self.nodes.len() - 1)
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(old) = self.nodes[child.0].parent.take() {
            self.nodes[old.0].children.retain(|c| *c != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    pub fn element(&self, node: NodeId) -> &Element {
        &self.nodes[node.0]
    }

    pub fn element_mut(&mut self, node: NodeId) -> &mut Element {
        &mut self.nodes[node.0]
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// First attached element (document order) carrying `id`.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        let mut stack = vec![self.body];
        while let Some(node) = stack.pop() {
            let el = &self.nodes[node.0];
            if el.id.as_deref() == Some(id) {
                return Some(node);
            }
            stack.extend(el.children.iter().rev().copied());
        }
        None
    }

    /// Concatenated text of the element and its descendants.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        let el = &self.nodes[node.0];
        out.push_str(&el.text);
        for child in &el.children {
            self.collect_text(*child, out);
        }
    }

    pub fn to_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_html(node, &mut out);
        out
    }

    fn write_html(&self, node: NodeId, out: &mut String) {
        let el = &self.nodes[node.0];
        out.push('<');
        out.push_str(&el.tag);
        if let Some(id) = &el.id {
            push_attr(out, "id", id);
        }
        if !el.classes.is_empty() {
            push_attr(out, "class", &el.classes.join(" "));
        }
        for (name, value) in &el.attributes {
            push_attr(out, name, value);
        }
        if el.tag == "input" {
            push_attr(out, "value", &el.value);
        }
        if el.disabled {
            out.push_str(" disabled");
        }
        out.push('>');

        if VOID_TAGS.contains(&el.tag.as_str()) {
            return;
        }

        out.push_str(&encode_text(&el.text));
        for child in &el.children {
            self.write_html(*child, out);
        }
        out.push_str("</");
        out.push_str(&el.tag);
        out.push('>');
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&encode_double_quoted_attribute(value));
    out.push('"');
}
