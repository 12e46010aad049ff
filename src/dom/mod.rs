pub mod parser;
pub mod serializer;

pub use parser::parse_html;
pub use serializer::to_html;

/// Elements that never have children and never get a closing tag
pub(crate) const VOID_TAGS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Elements whose text content is kept verbatim (no entity handling)
pub(crate) const RAW_TEXT_TAGS: [&str; 2] = ["script", "style"];

/// Tag name and attributes of an element node, attribute order preserved
#[derive(Debug, Clone, PartialEq)]
pub struct ElementData {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
}

/// The kind of a document node
#[derive(Debug, Clone, PartialEq)]
pub enum NodeData {
    /// Synthetic root of a parsed document
    Document,
    /// Declaration content without the leading `<!`, e.g. `DOCTYPE html`
    Doctype(String),
    Comment(String),
    Text(String),
    Element(ElementData),
}

/// One node of an owned document tree. `Clone` deep-copies the whole
/// subtree, which is what TOC content capture relies on.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub data: NodeData,
    pub children: Vec<Node>,
}

impl Node {
    pub fn document() -> Self {
        Node { data: NodeData::Document, children: Vec::new() }
    }

    pub fn element(tag: &str) -> Self {
        Node {
            data: NodeData::Element(ElementData { tag: tag.to_string(), attrs: Vec::new() }),
            children: Vec::new(),
        }
    }

    pub fn text(text: &str) -> Self {
        Node { data: NodeData::Text(text.to_string()), children: Vec::new() }
    }

    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Tag name for element nodes, `None` otherwise
    pub fn tag(&self) -> Option<&str> {
        match &self.data {
            NodeData::Element(el) => Some(el.tag.as_str()),
            _ => None,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        match &self.data {
            NodeData::Element(el) => el
                .attrs
                .iter()
                .find(|(n, _)| n.as_str() == name)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    /// Set or replace an attribute. No-op on non-element nodes.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        if let NodeData::Element(el) = &mut self.data {
            if let Some(attr) = el.attrs.iter_mut().find(|(n, _)| n.as_str() == name) {
                attr.1 = value.to_string();
            } else {
                el.attrs.push((name.to_string(), value.to_string()));
            }
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// First node in pre-order with the given id
    pub fn find_by_id(&self, id: &str) -> Option<&Node> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_by_id(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Node> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_by_id_mut(id))
    }

    /// Serialize this node (and its subtree) back to HTML
    pub fn to_html(&self) -> String {
        serializer::to_html(self)
    }
}
