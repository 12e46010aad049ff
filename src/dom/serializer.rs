use crate::dom::{Node, NodeData, RAW_TEXT_TAGS, VOID_TAGS};

/// Serialize a node tree back to HTML text
pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, None, &mut out);
    out
}

fn write_node(node: &Node, parent_tag: Option<&str>, out: &mut String) {
    match &node.data {
        NodeData::Document => {
            for child in &node.children {
                write_node(child, None, out);
            }
        }
        NodeData::Doctype(decl) => {
            out.push_str("<!");
            out.push_str(decl);
            out.push('>');
        }
        NodeData::Comment(comment) => {
            out.push_str("<!--");
            out.push_str(comment);
            out.push_str("-->");
        }
        NodeData::Text(text) => {
            if parent_tag.is_some_and(|tag| RAW_TEXT_TAGS.contains(&tag)) {
                out.push_str(text);
            } else {
                out.push_str(&html_escape::encode_text(text));
            }
        }
        NodeData::Element(el) => {
            out.push('<');
            out.push_str(&el.tag);
            for (name, value) in &el.attrs {
                out.push(' ');
                out.push_str(name);
                if !value.is_empty() {
                    out.push_str("=\"");
                    out.push_str(&html_escape::encode_double_quoted_attribute(value));
                    out.push('"');
                }
            }
            out.push('>');
            if VOID_TAGS.contains(&el.tag.as_str()) {
                return;
            }
            for child in &node.children {
                write_node(child, Some(el.tag.as_str()), out);
            }
            out.push_str("</");
            out.push_str(&el.tag);
            out.push('>');
        }
    }
}
