//! Layout and accessibility primitives.

use crate::node::{Element, Node};

/// Declarations that hide content visually while keeping it in the
/// accessibility tree.
pub const VISUALLY_HIDDEN_STYLES: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("overflow", "hidden"),
    ("clip", "inset(50%)"),
    ("height", "1px"),
    ("width", "1px"),
    ("margin", "-1px"),
    ("padding", "0"),
    ("border", "0"),
];

/// Wrap `children` so screen readers announce them but nothing is drawn.
pub fn visually_hidden(children: impl Into<Node>) -> Element {
    Element::new("span")
        .class("visually-hidden")
        .styles(VISUALLY_HIDDEN_STYLES)
        .child(children)
}

/// Fixed-size block used to put vertical space between rows.
pub fn spacer(size: u32) -> Element {
    let px = format!("{}px", size);
    Element::new("span")
        .class("spacer")
        .style("display", "block")
        .style("width", &px)
        .style("min-width", &px)
        .style("height", &px)
        .style("min-height", &px)
}

/// Inline CSS for a spacer, for hosts that render markup directly.
pub fn spacer_css(size: u32) -> String {
    format!(
        "display: block; width: {size}px; min-width: {size}px; height: {size}px; min-height: {size}px;",
        size = size
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::inline_css;

    #[test]
    fn test_visually_hidden_keeps_text() {
        let node: Node = visually_hidden(Node::text("Sale price: ")).into();
        assert_eq!(node.text_content(), "Sale price: ");
        let el = node.as_element().unwrap();
        assert_eq!(el.style_value("clip"), Some("inset(50%)"));
        assert_eq!(el.style_value("width"), Some("1px"));
    }

    #[test]
    fn test_spacer_size() {
        let el = spacer(12);
        assert_eq!(el.style_value("height"), Some("12px"));
        assert_eq!(el.style_value("min-width"), Some("12px"));
        assert!(el.children.is_empty());
    }

    #[test]
    fn test_spacer_css_matches_tree() {
        assert_eq!(spacer_css(12), inline_css(&spacer(12).styles));
    }
}
