use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use shared_types::markup::{COLLAPSE_TOGGLE_ATTR, INDICATOR_SELECTOR};

use super::ToggleDom;

#[derive(Debug, Default)]
struct Node {
    tag: String,
    parent: Option<usize>,
    attributes: BTreeMap<String, String>,
    classes: BTreeSet<String>,
}

/// Flat in-memory document for exercising the toggle contract off-browser.
#[derive(Debug, Default)]
pub struct MemoryDom {
    nodes: RefCell<Vec<Node>>,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, tag: &str, parent: Option<usize>, id: Option<&str>) -> usize {
        let mut node = Node {
            tag: tag.to_string(),
            parent,
            ..Node::default()
        };
        if let Some(id) = id {
            node.attributes.insert("id".to_string(), id.to_string());
        }

        let mut nodes = self.nodes.borrow_mut();
        nodes.push(node);
        nodes.len() - 1
    }

    pub fn has_class(&self, element: usize, class: &str) -> bool {
        self.nodes.borrow()[element].classes.contains(class)
    }

    fn is_control(&self, element: usize) -> bool {
        self.nodes.borrow()[element]
            .attributes
            .contains_key(COLLAPSE_TOGGLE_ATTR)
    }

    fn is_descendant(&self, element: usize, ancestor: usize) -> bool {
        let nodes = self.nodes.borrow();
        let mut current = nodes[element].parent;
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = nodes[parent].parent;
        }
        false
    }
}

impl ToggleDom for MemoryDom {
    type Element = usize;

    fn controls(&self) -> Vec<usize> {
        let count = self.nodes.borrow().len();
        (0..count).filter(|&i| self.is_control(i)).collect()
    }

    fn closest_control(&self, origin: &usize) -> Option<usize> {
        let mut current = Some(*origin);
        while let Some(element) = current {
            if self.is_control(element) {
                return Some(element);
            }
            current = self.nodes.borrow()[element].parent;
        }
        None
    }

    fn element_by_id(&self, id: &str) -> Option<usize> {
        self.nodes
            .borrow()
            .iter()
            .position(|node| node.attributes.get("id").map(String::as_str) == Some(id))
    }

    fn attribute(&self, element: &usize, name: &str) -> Option<String> {
        self.nodes.borrow()[*element].attributes.get(name).cloned()
    }

    fn set_attribute(&self, element: &usize, name: &str, value: &str) {
        self.nodes.borrow_mut()[*element]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn toggle_class(&self, element: &usize, class: &str) -> bool {
        let mut nodes = self.nodes.borrow_mut();
        let classes = &mut nodes[*element].classes;
        if classes.remove(class) {
            false
        } else {
            classes.insert(class.to_string());
            true
        }
    }

    fn indicator(&self, control: &usize) -> Option<usize> {
        let count = self.nodes.borrow().len();
        (0..count).find(|&i| {
            self.nodes.borrow()[i].tag == INDICATOR_SELECTOR && self.is_descendant(i, *control)
        })
    }
}
