//! DOM helpers
//!
//! Class-based lookups over an html5ever tree, enough to scrape the reading page.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Parses an HTML document into a DOM tree
pub fn parse_html(html: &str) -> RcDom {
    parse_document(RcDom::default(), Default::default()).one(html)
}

/// Collects every element carrying `class_name` among its classes, in document order
pub fn find_by_class(node: &Handle, class_name: &str) -> Vec<Handle> {
    let mut found_nodes = Vec::new();

    if has_class(node, class_name) {
        found_nodes.push(node.clone());
    }

    for child_node in node.children.borrow().iter() {
        found_nodes.append(&mut find_by_class(child_node, class_name));
    }

    found_nodes
}

/// Concatenated text of all descendant text nodes
pub fn text_content(node: &Handle) -> String {
    let mut text = String::new();
    collect_text(node, &mut text);
    text
}

/// Text of every element with `class_name`, concatenated and trimmed
pub fn class_text(document: &RcDom, class_name: &str) -> String {
    find_by_class(&document.document, class_name)
        .iter()
        .map(text_content)
        .collect::<String>()
        .trim()
        .to_string()
}

/// Trimmed, non-empty text of every `<p>` inside an element with `class_name`
///
/// Each paragraph is taken once, in document order, even when containers nest.
pub fn paragraphs_in_class(document: &RcDom, class_name: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    collect_paragraphs(&document.document, class_name, false, &mut paragraphs);
    paragraphs
}

fn collect_paragraphs(node: &Handle, class_name: &str, inside: bool, out: &mut Vec<String>) {
    // Only descendants of a container count, not the container itself
    if inside && get_node_name(node) == Some("p") {
        let text = text_content(node).trim().to_string();
        if !text.is_empty() {
            out.push(text);
        }
        return;
    }

    let inside = inside || has_class(node, class_name);
    for child_node in node.children.borrow().iter() {
        collect_paragraphs(child_node, class_name, inside, out);
    }
}

fn collect_text(node: &Handle, out: &mut String) {
    match &node.data {
        NodeData::Text { contents } => out.push_str(&contents.borrow()),
        NodeData::Element { name, .. } if matches!(&*name.local, "script" | "style") => {}
        _ => {
            for child_node in node.children.borrow().iter() {
                collect_text(child_node, out);
            }
        }
    }
}

fn get_node_name(node: &Handle) -> Option<&'_ str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

fn get_node_attr(node: &Handle, attr_name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| &*attr.name.local == attr_name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

fn has_class(node: &Handle, class_name: &str) -> bool {
    get_node_attr(node, "class")
        .is_some_and(|classes| classes.split_ascii_whitespace().any(|c| c == class_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html>
<html><body>
  <h1 class="title-article big">Gospel <em>of the</em> Day</h1>
  <div class="date-article"> 01 May 2024 </div>
  <div class="article-body">
    <p>  First paragraph. </p>
    <div><p>Nested paragraph.</p></div>
    <p>   </p>
    <script>var ignored = 1;</script>
  </div>
</body></html>"#;

    #[test]
    fn test_class_text_concatenates_and_trims() {
        let dom = parse_html(PAGE);
        assert_eq!(class_text(&dom, "title-article"), "Gospel of the Day");
        assert_eq!(class_text(&dom, "date-article"), "01 May 2024");
    }

    #[test]
    fn test_class_text_missing_is_empty() {
        let dom = parse_html(PAGE);
        assert_eq!(class_text(&dom, "scripture-passage"), "");
    }

    #[test]
    fn test_class_match_is_whole_word() {
        let dom = parse_html(PAGE);
        assert_eq!(class_text(&dom, "title"), "");
        assert_eq!(class_text(&dom, "big"), "Gospel of the Day");
    }

    #[test]
    fn test_paragraphs_in_class() {
        let dom = parse_html(PAGE);
        assert_eq!(
            paragraphs_in_class(&dom, "article-body"),
            vec!["First paragraph.".to_string(), "Nested paragraph.".to_string()]
        );
    }

    #[test]
    fn test_paragraphs_in_nested_containers_are_taken_once() {
        let dom = parse_html(
            r#"<div class="article-body"><div class="article-body"><p>One</p></div><p>Two</p></div>"#,
        );
        assert_eq!(
            paragraphs_in_class(&dom, "article-body"),
            vec!["One".to_string(), "Two".to_string()]
        );
    }

    #[test]
    fn test_paragraphs_outside_container_are_ignored() {
        let dom = parse_html(r#"<p>Intro</p><div class="article-body"><p>Body</p></div><p>Footer</p>"#);
        assert_eq!(paragraphs_in_class(&dom, "article-body"), vec!["Body".to_string()]);
    }

    #[test]
    fn test_text_content_skips_scripts() {
        let dom = parse_html("<div class=\"x\">a<script>b</script>c</div>");
        assert_eq!(class_text(&dom, "x"), "ac");
    }
}
