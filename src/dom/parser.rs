use crate::dom::{ElementData, Node, NodeData, RAW_TEXT_TAGS, VOID_TAGS};
use crate::utils::error::SectocError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // One alternation per markup construct: comment, declaration,
    // closing tag, opening tag (attributes kept raw for ATTR_REGEX).
    static ref TOKEN_REGEX: Regex = Regex::new(
        r#"(?s)<!--(.*?)-->|<!([^>]*)>|<\s*/\s*([A-Za-z][A-Za-z0-9:-]*)\s*>|<\s*([A-Za-z][A-Za-z0-9:-]*)((?:"[^"]*"|'[^']*'|[^>"'])*?)(/?)>"#
    ).unwrap();

    static ref ATTR_REGEX: Regex = Regex::new(
        r#"([A-Za-z_:][A-Za-z0-9_:.-]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+)))?"#
    ).unwrap();
}

/// Parse an HTML document (or fragment) into an owned node tree.
///
/// Lenient by design: unmatched closing tags are dropped, unclosed
/// elements are closed at end of input. Text and attribute values are
/// entity-decoded; script and style bodies are captured verbatim.
pub fn parse_html(input: &str) -> Result<Node, SectocError> {
    let mut stack: Vec<Node> = vec![Node::document()];
    let mut pos = 0;

    while pos < input.len() {
        let rest = &input[pos..];
        let Some(caps) = TOKEN_REGEX.captures(rest) else {
            append_text(&mut stack, rest);
            pos = input.len();
            break;
        };
        let token = caps.get(0).ok_or_else(|| SectocError::Parse("empty token match".to_string()))?;
        if token.start() > 0 {
            append_text(&mut stack, &rest[..token.start()]);
        }
        pos += token.end();

        if let Some(comment) = caps.get(1) {
            push_child(
                &mut stack,
                Node { data: NodeData::Comment(comment.as_str().to_string()), children: Vec::new() },
            );
        } else if let Some(decl) = caps.get(2) {
            push_child(
                &mut stack,
                Node { data: NodeData::Doctype(decl.as_str().to_string()), children: Vec::new() },
            );
        } else if let Some(close) = caps.get(3) {
            close_element(&mut stack, &close.as_str().to_ascii_lowercase());
        } else if let Some(open) = caps.get(4) {
            let tag = open.as_str().to_ascii_lowercase();
            let attrs = parse_attrs(caps.get(5).map_or("", |m| m.as_str()));
            let self_closing = caps.get(6).is_some_and(|m| !m.as_str().is_empty());
            let node = Node {
                data: NodeData::Element(ElementData { tag: tag.clone(), attrs }),
                children: Vec::new(),
            };

            if self_closing || VOID_TAGS.contains(&tag.as_str()) {
                push_child(&mut stack, node);
            } else if RAW_TEXT_TAGS.contains(&tag.as_str()) {
                pos = capture_raw_text(input, pos, &tag, node, &mut stack);
            } else {
                stack.push(node);
            }
        }
    }

    // Close everything still open
    while stack.len() > 1 {
        if let Some(node) = stack.pop() {
            if let Some(parent) = stack.last_mut() {
                parent.children.push(node);
            }
        }
    }
    stack
        .pop()
        .ok_or_else(|| SectocError::Parse("empty parse stack".to_string()))
}

/// Take everything up to the matching close tag as a verbatim text child.
/// Returns the position just past the close tag.
fn capture_raw_text(input: &str, body_start: usize, tag: &str, mut node: Node, stack: &mut Vec<Node>) -> usize {
    let close_marker = format!("</{}", tag);
    let lower = input[body_start..].to_ascii_lowercase();
    match lower.find(&close_marker) {
        Some(offset) => {
            let body = &input[body_start..body_start + offset];
            if !body.is_empty() {
                node.children.push(Node { data: NodeData::Text(body.to_string()), children: Vec::new() });
            }
            push_child(stack, node);
            let after = body_start + offset;
            input[after..]
                .find('>')
                .map(|gt| after + gt + 1)
                .unwrap_or(input.len())
        }
        None => {
            // Unterminated: the rest of the input is the body
            let body = &input[body_start..];
            if !body.is_empty() {
                node.children.push(Node { data: NodeData::Text(body.to_string()), children: Vec::new() });
            }
            push_child(stack, node);
            input.len()
        }
    }
}

fn append_text(stack: &mut Vec<Node>, raw: &str) {
    if raw.is_empty() {
        return;
    }
    let decoded = html_escape::decode_html_entities(raw).to_string();
    push_child(stack, Node::text(&decoded));
}

fn push_child(stack: &mut Vec<Node>, node: Node) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    }
}

/// Pop the stack down to (and including) the nearest open element with
/// the given tag. Closing tags with no open counterpart are ignored.
fn close_element(stack: &mut Vec<Node>, tag: &str) {
    let Some(open_index) = stack.iter().rposition(|node| node.tag() == Some(tag)) else {
        return;
    };
    while stack.len() > open_index {
        if let Some(node) = stack.pop() {
            if let Some(parent) = stack.last_mut() {
                parent.children.push(node);
            }
        }
    }
}

fn parse_attrs(raw: &str) -> Vec<(String, String)> {
    let mut attrs = Vec::new();
    for caps in ATTR_REGEX.captures_iter(raw) {
        let name = caps[1].to_ascii_lowercase();
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map_or(String::new(), |m| {
                html_escape::decode_html_entities(m.as_str()).to_string()
            });
        attrs.push((name, value));
    }
    attrs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_elements() {
        let doc = parse_html("<div id=\"outer\"><p class='body'>Hello <b>world</b></p></div>").unwrap();
        assert_eq!(doc.children.len(), 1);

        let div = &doc.children[0];
        assert_eq!(div.tag(), Some("div"));
        assert_eq!(div.id(), Some("outer"));

        let p = &div.children[0];
        assert_eq!(p.attr("class"), Some("body"));
        assert_eq!(p.children.len(), 2);
        assert_eq!(p.children[0], Node::text("Hello "));
        assert_eq!(p.children[1].tag(), Some("b"));
    }

    #[test]
    fn test_parse_doctype_and_comment() {
        let doc = parse_html("<!DOCTYPE html><!-- note --><html></html>").unwrap();
        assert_eq!(doc.children.len(), 3);
        assert_eq!(doc.children[0].data, NodeData::Doctype("DOCTYPE html".to_string()));
        assert_eq!(doc.children[1].data, NodeData::Comment(" note ".to_string()));
        assert_eq!(doc.children[2].tag(), Some("html"));
    }

    #[test]
    fn test_parse_void_and_self_closing() {
        let doc = parse_html("<p>a<br>b<img src=\"x.png\"/></p>").unwrap();
        let p = &doc.children[0];
        assert_eq!(p.children.len(), 4);
        assert_eq!(p.children[1].tag(), Some("br"));
        assert!(p.children[1].children.is_empty());
        assert_eq!(p.children[3].attr("src"), Some("x.png"));
    }

    #[test]
    fn test_parse_bare_attribute() {
        let doc = parse_html("<input type=checkbox checked>").unwrap();
        let input = &doc.children[0];
        assert_eq!(input.attr("type"), Some("checkbox"));
        assert_eq!(input.attr("checked"), Some(""));
    }

    #[test]
    fn test_script_body_is_verbatim() {
        let doc = parse_html("<script>if (a < b && c > d) { go(); }</script>").unwrap();
        let script = &doc.children[0];
        assert_eq!(script.tag(), Some("script"));
        assert_eq!(
            script.children[0],
            Node::text("if (a < b && c > d) { go(); }")
        );
    }

    #[test]
    fn test_text_entities_are_decoded() {
        let doc = parse_html("<p>fish &amp; chips</p>").unwrap();
        assert_eq!(doc.children[0].children[0], Node::text("fish & chips"));
    }

    #[test]
    fn test_unmatched_close_tag_is_ignored() {
        let doc = parse_html("<div>text</span></div>").unwrap();
        let div = &doc.children[0];
        assert_eq!(div.tag(), Some("div"));
        assert_eq!(div.children.len(), 1);
    }

    #[test]
    fn test_unclosed_elements_close_at_end() {
        let doc = parse_html("<div><p>dangling").unwrap();
        let div = &doc.children[0];
        assert_eq!(div.children[0].tag(), Some("p"));
        assert_eq!(div.children[0].children[0], Node::text("dangling"));
    }
}
