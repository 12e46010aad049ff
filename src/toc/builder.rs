use log::debug;
use serde::Serialize;

use crate::dom::{parse_html, Node};
use crate::toc::tree::{is_numeric_key, KeyTree};
use crate::toc::TocOptions;
use crate::utils::error::SectocError;

/// One scan-build-render cycle over the document. The numeric pass
/// always renders before the alphabetic pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Numeric,
    Alphabetic,
}

impl Pass {
    /// The pass a path belongs to. Membership is decided by the first
    /// segment only, even when later segments read differently.
    pub fn of(first_key: &str) -> Pass {
        if is_numeric_key(first_key) {
            Pass::Numeric
        } else {
            Pass::Alphabetic
        }
    }

    fn admits(self, first_key: &str) -> bool {
        Pass::of(first_key) == self
    }
}

/// A section marker discovered during a scan
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    /// The element's full identifier, e.g. `section2-1`
    pub id: String,
    /// The hierarchical path split out of the identifier
    pub path: Vec<String>,
}

/// Builds nested table-of-contents lists from section markers.
///
/// Each generation run scans the document for elements whose id follows
/// the `section<path>` convention, builds one sorted [`KeyTree`] per
/// pass, and renders the trees into `<ul>`/`<li>` lists linked back to
/// the marked elements.
pub struct TocBuilder {
    options: TocOptions,
}

impl Default for TocBuilder {
    fn default() -> Self {
        TocBuilder::new(TocOptions::default())
    }
}

impl TocBuilder {
    pub fn new(options: TocOptions) -> Self {
        TocBuilder { options }
    }

    /// Split the hierarchical path out of an element id, or `None` when
    /// the id does not follow the marker convention. Identifiers with
    /// empty segments (adjacent or trailing separators) never qualify.
    fn section_path(&self, id: &str) -> Option<Vec<String>> {
        let prefix = self.options.section_prefix.as_str();
        if id.len() <= prefix.len() || !id.starts_with(prefix) {
            return None;
        }
        let keys: Vec<String> = id[prefix.len()..]
            .split(self.options.separator)
            .map(str::to_string)
            .collect();
        if keys.iter().any(|key| key.is_empty()) {
            return None;
        }
        Some(keys)
    }

    /// Every section marker in the document, in pre-order, both passes
    pub fn scan_sections(&self, document: &Node) -> Vec<Section> {
        let mut sections = Vec::new();
        self.scan_into(document, &mut sections);
        sections
    }

    fn scan_into(&self, element: &Node, sections: &mut Vec<Section>) {
        if let Some(id) = element.id() {
            if let Some(path) = self.section_path(id) {
                sections.push(Section { id: id.to_string(), path });
            }
        }
        for child in &element.children {
            if child.is_element() {
                self.scan_into(child, sections);
            }
        }
    }

    /// Pre-order scan feeding one pass's tree. The element's children
    /// are deep-copied as the captured display content, so the rendered
    /// TOC never aliases the source nodes. Traversal always descends,
    /// so markers nested inside other markers are found too.
    fn collect_sections(
        &self,
        element: &Node,
        pass: Pass,
        tree: &mut KeyTree<Vec<Node>>,
    ) -> Result<(), SectocError> {
        if let Some(id) = element.id() {
            if let Some(path) = self.section_path(id) {
                if pass.admits(&path[0]) {
                    let content = element.children.clone();
                    tree.insert(&path, self.options.separator, content)?;
                }
            }
        }
        for child in &element.children {
            if child.is_element() {
                self.collect_sections(child, pass, tree)?;
            }
        }
        Ok(())
    }

    /// Render a tree level into a `<ul>`, or `None` for a childless node
    fn build_list(&self, node: &KeyTree<Vec<Node>>, path: &[String], depth: usize) -> Option<Node> {
        if node.children().is_empty() {
            return None;
        }

        let mut list = Node::element("ul");
        list.set_attr("class", &self.options.list_class);

        for child in node.children() {
            let mut item = Node::element("li");
            item.set_attr(
                "class",
                &format!("{}{}", self.options.level_class_prefix, depth + 1),
            );

            let mut child_path = path.to_vec();
            child_path.push(child.key().unwrap_or_default().to_string());

            if let Some(content) = child.content() {
                if !content.is_empty() {
                    let mut link = Node::element("a");
                    link.set_attr(
                        "href",
                        &format!("#{}{}", self.options.section_prefix, self.join(&child_path)),
                    );
                    link.children.extend(content.iter().cloned());
                    item.children.push(link);
                }
            }

            if let Some(sublist) = self.build_list(child, &child_path, depth + 1) {
                item.children.push(sublist);
            }

            list.children.push(item);
        }

        Some(list)
    }

    fn join(&self, path: &[String]) -> String {
        path.join(&self.options.separator.to_string())
    }

    /// Build and render one pass: fresh tree, full scan, render from
    /// the root at depth 0. `None` when the pass found no sections.
    pub fn toc_fragment(&self, document: &Node, pass: Pass) -> Result<Option<Node>, SectocError> {
        let mut tree = KeyTree::root();
        self.collect_sections(document, pass, &mut tree)?;
        debug!(
            "{:?} pass collected {} top-level entries",
            pass,
            tree.children().len()
        );
        Ok(self.build_list(&tree, &[], 0))
    }

    /// Clear the toc container and fill it with the numeric-pass list
    /// followed by the alphabetic-pass list. Returns `false` (without
    /// touching the document) when no container is present. A duplicate
    /// section path aborts the run with the offending path.
    pub fn generate(&self, document: &mut Node) -> Result<bool, SectocError> {
        match document.find_by_id_mut(&self.options.toc_root_id) {
            Some(container) => container.children.clear(),
            None => return Ok(false),
        }

        let numeric = self.toc_fragment(document, Pass::Numeric)?;
        let alphabetic = self.toc_fragment(document, Pass::Alphabetic)?;

        let container = document
            .find_by_id_mut(&self.options.toc_root_id)
            .ok_or_else(|| {
                SectocError::Document(format!(
                    "toc container #{} disappeared during generation",
                    self.options.toc_root_id
                ))
            })?;
        if let Some(list) = numeric {
            container.children.push(list);
        }
        if let Some(list) = alphabetic {
            container.children.push(list);
        }
        Ok(true)
    }
}

/// Parse an HTML document, inject the generated table of contents into
/// its toc container, and serialize it back. Documents without a
/// container pass through unchanged (modulo reserialization).
pub fn inject_toc(html: &str, options: &TocOptions) -> Result<String, SectocError> {
    let mut document = parse_html(html)?;
    let builder = TocBuilder::new(options.clone());
    if !builder.generate(&mut document)? {
        debug!("no toc container found; document unchanged");
    }
    Ok(document.to_html())
}
