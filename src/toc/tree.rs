use crate::utils::error::SectocError;
use std::cmp::Ordering;

/// Numeric reading of a key segment, if it has one. Whitespace is
/// trimmed; NaN counts as non-numeric so it falls back to text order.
fn numeric_value(key: &str) -> Option<f64> {
    match key.trim().parse::<f64>() {
        Ok(value) if !value.is_nan() => Some(value),
        _ => None,
    }
}

/// Whether a key segment reads as a number (decides pass membership)
pub fn is_numeric_key(key: &str) -> bool {
    numeric_value(key).is_some()
}

/// Total order over key segments: by magnitude when both sides read as
/// numbers, by code-unit lexical order otherwise.
pub fn compare_keys(a: &str, b: &str) -> Ordering {
    match (numeric_value(a), numeric_value(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.cmp(b),
    }
}

/// One path segment of the section hierarchy. Children stay sorted by
/// `compare_keys` from the moment they are inserted; there is never a
/// separate sort pass. The payload type is opaque to the tree.
#[derive(Debug, Clone)]
pub struct KeyTree<T> {
    key: Option<String>,
    content: Option<T>,
    children: Vec<KeyTree<T>>,
}

impl<T> KeyTree<T> {
    /// The synthetic root: no key, never rendered or compared
    pub fn root() -> Self {
        KeyTree { key: None, content: None, children: Vec::new() }
    }

    fn with_key(key: &str) -> Self {
        KeyTree { key: Some(key.to_string()), content: None, children: Vec::new() }
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn content(&self) -> Option<&T> {
        self.content.as_ref()
    }

    pub fn children(&self) -> &[KeyTree<T>] {
        &self.children
    }

    /// Child whose key compares equal to the given segment
    pub fn child(&self, key: &str) -> Option<&KeyTree<T>> {
        self.children.iter().find(|child| {
            child
                .key()
                .is_some_and(|k| compare_keys(key, k) == Ordering::Equal)
        })
    }

    /// Insert a path into the tree, attaching the payload at its final
    /// segment. A path that terminates on a node that already holds a
    /// payload is a duplicate section; the error names the re-joined path.
    pub fn insert(&mut self, path: &[String], separator: char, content: T) -> Result<(), SectocError> {
        if path.is_empty() {
            return Err(SectocError::Document("empty section path".to_string()));
        }
        self.insert_at(path, 0, separator, content)
    }

    fn insert_at(
        &mut self,
        path: &[String],
        index: usize,
        separator: char,
        content: T,
    ) -> Result<(), SectocError> {
        let key = path[index].as_str();

        // Sorted insert: stop at the first greater sibling, reuse an
        // equal one, otherwise append.
        let mut slot = None;
        for (i, child) in self.children.iter().enumerate() {
            match compare_keys(key, child.key().unwrap_or_default()) {
                Ordering::Less => {
                    self.children.insert(i, KeyTree::with_key(key));
                    slot = Some(i);
                    break;
                }
                Ordering::Equal => {
                    slot = Some(i);
                    break;
                }
                Ordering::Greater => {}
            }
        }
        let node = match slot {
            Some(i) => &mut self.children[i],
            None => {
                self.children.push(KeyTree::with_key(key));
                self.children
                    .last_mut()
                    .ok_or_else(|| SectocError::Document("children vanished during insert".to_string()))?
            }
        };

        if index + 1 < path.len() {
            node.insert_at(path, index + 1, separator, content)
        } else if node.content.is_some() {
            Err(SectocError::DuplicateSection(path.join(&separator.to_string())))
        } else {
            node.content = Some(content);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    fn child_keys<T>(node: &KeyTree<T>) -> Vec<String> {
        node.children()
            .iter()
            .map(|c| c.key().unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn test_compare_numeric_by_magnitude() {
        assert_eq!(compare_keys("2", "10"), Ordering::Less);
        assert_eq!(compare_keys("10", "9"), Ordering::Greater);
        assert_eq!(compare_keys("3.5", "3.50"), Ordering::Equal);
        assert_eq!(compare_keys(" 7", "7"), Ordering::Equal);
    }

    #[test]
    fn test_compare_text_fallback() {
        // Lexical order makes "10" < "9" when a non-number is involved
        assert_eq!(compare_keys("a", "b"), Ordering::Less);
        assert_eq!(compare_keys("A", "a"), Ordering::Less);
        assert_eq!(compare_keys("1", "a"), Ordering::Less);
        assert_eq!(compare_keys("appendix", "appendix"), Ordering::Equal);
        assert_eq!(compare_keys("NaN", "NaN"), Ordering::Equal);
    }

    #[test]
    fn test_insert_keeps_siblings_sorted() {
        let mut tree = KeyTree::root();
        for key in ["10", "2", "1", "20", "3"] {
            tree.insert(&path(&[key]), '-', key).unwrap();
        }
        assert_eq!(child_keys(&tree), vec!["1", "2", "3", "10", "20"]);
    }

    #[test]
    fn test_sibling_order_is_insertion_order_independent() {
        let keys = ["10", "2", "1", "3"];
        let mut orders = Vec::new();
        permutations(&keys, &mut Vec::new(), &mut orders);
        assert_eq!(orders.len(), 24);

        for order in orders {
            let mut tree = KeyTree::root();
            for key in order.iter() {
                tree.insert(&path(&[*key]), '-', ()).unwrap();
            }
            assert_eq!(child_keys(&tree), vec!["1", "2", "3", "10"], "order {:?}", order);
        }
    }

    fn permutations<'a>(rest: &[&'a str], prefix: &mut Vec<&'a str>, out: &mut Vec<Vec<&'a str>>) {
        if rest.is_empty() {
            out.push(prefix.clone());
            return;
        }
        for (i, key) in rest.iter().enumerate() {
            let mut remaining = rest.to_vec();
            remaining.remove(i);
            prefix.push(key);
            permutations(&remaining, prefix, out);
            prefix.pop();
        }
    }

    #[test]
    fn test_duplicate_path_is_an_error() {
        let mut tree = KeyTree::root();
        tree.insert(&path(&["1", "2"]), '-', "first").unwrap();
        let err = tree.insert(&path(&["1", "2"]), '-', "second").unwrap_err();
        match err {
            SectocError::DuplicateSection(joined) => assert_eq!(joined, "1-2"),
            other => panic!("expected duplicate section error, got {:?}", other),
        }
    }

    #[test]
    fn test_node_may_hold_content_and_children() {
        let mut tree = KeyTree::root();
        tree.insert(&path(&["1"]), '-', "chapter").unwrap();
        tree.insert(&path(&["1", "1"]), '-', "first").unwrap();
        tree.insert(&path(&["1", "2"]), '-', "second").unwrap();

        let chapter = tree.child("1").unwrap();
        assert_eq!(chapter.content(), Some(&"chapter"));
        assert_eq!(child_keys(chapter), vec!["1", "2"]);
    }

    #[test]
    fn test_intermediate_nodes_have_no_content() {
        let mut tree = KeyTree::root();
        tree.insert(&path(&["2", "1", "1"]), '-', "deep").unwrap();

        let two = tree.child("2").unwrap();
        assert!(two.content().is_none());
        let two_one = two.child("1").unwrap();
        assert!(two_one.content().is_none());
        assert_eq!(two_one.child("1").unwrap().content(), Some(&"deep"));
    }

    #[test]
    fn test_equal_numeric_keys_share_a_node() {
        // "01" and "1" compare equal numerically, so they collide
        let mut tree = KeyTree::root();
        tree.insert(&path(&["1"]), '-', ()).unwrap();
        assert!(tree.insert(&path(&["01"]), '-', ()).is_err());
    }

    #[test]
    fn test_empty_path_rejected() {
        let mut tree: KeyTree<()> = KeyTree::root();
        assert!(tree.insert(&[], '-', ()).is_err());
    }
}
