//! Visual tree.
//!
//! Cards are built as plain data so callers can inspect them, mount them in
//! a UI host, or serialize them to HTML with [`Node::to_html`].

/// CSS declarations in insertion order.
pub type Styles = Vec<(&'static str, String)>;

/// A node in the visual tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element with attributes, inline styles and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub styles: Styles,
    pub children: Vec<Node>,
}

const VOID_ELEMENTS: &[&str] = &["img", "br", "hr", "input", "meta", "link"];

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            styles: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any previous value.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Append a class name.
    pub fn class(mut self, class: &str) -> Self {
        match self.attrs.iter_mut().find(|(n, _)| *n == "class") {
            Some(slot) => {
                slot.1.push(' ');
                slot.1.push_str(class);
            }
            None => self.attrs.push(("class", class.to_string())),
        }
        self
    }

    /// Add a CSS declaration.
    pub fn style(mut self, property: &'static str, value: impl ToString) -> Self {
        self.styles.push((property, value.to_string()));
        self
    }

    /// Add every declaration from a static table.
    pub fn styles(mut self, table: &[(&'static str, &'static str)]) -> Self {
        self.styles
            .extend(table.iter().map(|(p, v)| (*p, (*v).to_string())));
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Add a child only when one is given; absent children leave no trace.
    pub fn maybe_child(mut self, node: Option<impl Into<Node>>) -> Self {
        if let Some(node) = node {
            self.children.push(node.into());
        }
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Last value set for a CSS property.
    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .rev()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|classes| classes.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);

        for (name, value) in &self.attrs {
            out.push_str(&format!(r#" {}="{}""#, name, escape_html(value)));
        }
        if !self.styles.is_empty() {
            out.push_str(&format!(
                r#" style="{}""#,
                escape_html(&inline_css(&self.styles))
            ));
        }

        if VOID_ELEMENTS.contains(&self.tag) {
            out.push('>');
            return;
        }

        out.push('>');
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    /// Depth-first search for the first element carrying `class`.
    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        let el = self.as_element()?;
        if el.has_class(class) {
            return Some(el);
        }
        el.children.iter().find_map(|c| c.find_by_class(class))
    }

    /// Depth-first search for the first element with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Element> {
        let el = self.as_element()?;
        if el.tag == tag {
            return Some(el);
        }
        el.children.iter().find_map(|c| c.find_by_tag(tag))
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(t),
            Node::Element(el) => el.children.iter().for_each(|c| c.collect_text(out)),
        }
    }

    /// Serialize to an HTML fragment.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(&escape_html(t)),
            Node::Element(el) => el.write_html(out),
        }
    }
}

impl Element {
    /// Text content of this element's subtree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.children.iter().for_each(|c| c.collect_text(&mut out));
        out
    }
}

/// Join declarations into an inline `style` value.
pub fn inline_css<P: AsRef<str>, V: AsRef<str>>(styles: &[(P, V)]) -> String {
    styles
        .iter()
        .map(|(p, v)| format!("{}: {};", p.as_ref(), v.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
