//! Familized tree view model
//!
//! The tree is a read-only projection of the flat test list: every node is one
//! step shared by all tests that reach it along the same path. It is produced
//! by [`familize`](crate::familize::familize) and handed to the presentation
//! layer as is; it is never patched, only rebuilt.
//!
//! ## Structure
//!
//! - [`Tree`]: the root [`Level`]
//! - [`Level`]: insertion-ordered map from canonical key to [`Node`]
//! - [`Node`]: the step, its occurrences, its terminal titles and its children
//!
//! Sibling keys are unique. Sibling order is first-seen order across tests.

use rustc_hash::FxHashMap;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use stepmap_core::{canonical_key, Action, Occurrence, Step, StepValue};

/// A test whose last step is a given node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Terminal {
    /// Index of the test in the flat list
    pub test_index: usize,
    /// Title of the test
    pub title: String,
}

/// One step of the familized tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    key: String,
    step: Step,
    occurrences: Vec<Occurrence>,
    terminals: Vec<Terminal>,
    children: Level,
}

impl Node {
    fn new(key: String, step: Step, occurrence: Occurrence) -> Self {
        Node {
            key,
            step,
            occurrences: vec![occurrence],
            terminals: Vec::new(),
            children: Level::default(),
        }
    }

    /// Canonical key of the step
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The step this node stands for
    pub fn step(&self) -> &Step {
        &self.step
    }

    /// Action of the step
    pub fn action(&self) -> Action {
        self.step.action()
    }

    /// Payload of the step
    pub fn value(&self) -> StepValue {
        self.step.value()
    }

    /// Every (test, step) position this node stands for, in insertion order
    ///
    /// Pass this list back into the editor to edit or delete the node.
    pub fn occurrences(&self) -> &[Occurrence] {
        &self.occurrences
    }

    /// Tests that end at this node, in list order
    pub fn terminals(&self) -> &[Terminal] {
        &self.terminals
    }

    /// Title of the first test ending here
    pub fn title(&self) -> Option<&str> {
        self.terminals.first().map(|t| t.title.as_str())
    }

    /// Titles of every test ending here
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.terminals.iter().map(|t| t.title.as_str())
    }

    /// Child nodes
    pub fn children(&self) -> &Level {
        &self.children
    }

    /// Whether at least one test ends here
    pub fn is_terminal(&self) -> bool {
        !self.terminals.is_empty()
    }

    /// Whether more than one test runs through this node
    pub fn is_shared(&self) -> bool {
        self.occurrences.len() > 1
    }

    /// Whether this node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn push_terminal(&mut self, test_index: usize, title: &str) {
        self.terminals.push(Terminal {
            test_index,
            title: title.to_string(),
        });
    }

    pub(crate) fn children_mut(&mut self) -> &mut Level {
        &mut self.children
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("action", &self.action())?;
        let value = self.value();
        if value != StepValue::None {
            map.serialize_entry("value", &value)?;
        }
        if let Some(title) = self.title() {
            map.serialize_entry("title", title)?;
        }
        if !self.terminals.is_empty() {
            map.serialize_entry("terminals", &self.terminals)?;
        }
        map.serialize_entry("occurrences", &self.occurrences)?;
        if !self.children.is_empty() {
            map.serialize_entry("children", &self.children)?;
        }
        map.end()
    }
}

/// Insertion-ordered map from canonical key to node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Level {
    nodes: Vec<Node>,
    index: FxHashMap<String, usize>,
}

impl Level {
    /// Node with the given key
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.index.get(key).map(|&i| &self.nodes[i])
    }

    /// Whether a node with the given key exists
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Nodes in first-seen order
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Keys in first-seen order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.key.as_str())
    }

    /// Number of nodes at this level
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether this level is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node this occurrence belongs to, if it is on this level
    pub fn containing(&self, occurrence: Occurrence) -> Option<&Node> {
        self.nodes
            .iter()
            .find(|n| n.occurrences.contains(&occurrence))
    }

    /// Record `occurrence` of `step`, creating the node on first sight
    pub(crate) fn entry(&mut self, step: &Step, occurrence: Occurrence) -> &mut Node {
        let key = canonical_key(step);
        let existing = self.index.get(&key).copied();
        let i = match existing {
            Some(i) => {
                self.nodes[i].occurrences.push(occurrence);
                i
            }
            None => {
                let i = self.nodes.len();
                self.index.insert(key.clone(), i);
                self.nodes.push(Node::new(key, step.clone(), occurrence));
                i
            }
        };
        &mut self.nodes[i]
    }
}

impl<'a> IntoIterator for &'a Level {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.nodes.len()))?;
        for node in &self.nodes {
            map.serialize_entry(&node.key, node)?;
        }
        map.end()
    }
}

/// The familized tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    roots: Level,
    test_count: usize,
}

impl Tree {
    pub(crate) fn new(roots: Level, test_count: usize) -> Self {
        Tree { roots, test_count }
    }

    /// First steps of all tests
    pub fn roots(&self) -> &Level {
        &self.roots
    }

    /// Root node with the given key
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.roots.get(key)
    }

    /// Follow a path of keys from the root
    pub fn find<S: AsRef<str>>(&self, path: &[S]) -> Option<&Node> {
        let (first, rest) = path.split_first()?;
        let mut node = self.roots.get(first.as_ref())?;
        for key in rest {
            node = node.children.get(key.as_ref())?;
        }
        Some(node)
    }

    /// Whether the tree has no nodes
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Number of tests the tree was built from
    pub fn test_count(&self) -> usize {
        self.test_count
    }

    /// Total number of nodes
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Depth-first, pre-order walk yielding `(depth, node)`
    pub fn iter(&self) -> Nodes<'_> {
        Nodes {
            stack: self.roots.iter().rev().map(|n| (0, n)).collect(),
        }
    }

    /// Nodes along the path of one test, first step first
    ///
    /// Empty if the test has no steps or does not exist.
    pub fn walk(&self, test_index: usize) -> Vec<&Node> {
        let mut path = Vec::new();
        let mut level = &self.roots;
        while let Some(node) = level.containing(Occurrence::new(test_index, path.len())) {
            path.push(node);
            level = &node.children;
        }
        path
    }

    /// Nodes at which at least one test ends
    pub fn terminal_nodes(&self) -> impl Iterator<Item = &Node> {
        self.iter().map(|(_, n)| n).filter(|n| n.is_terminal())
    }

    /// Groups of tests whose full step sequences are identical
    ///
    /// Each group lists test indices in list order.
    pub fn duplicate_groups(&self) -> Vec<Vec<usize>> {
        self.terminal_nodes()
            .filter(|n| n.terminals.len() > 1)
            .map(|n| n.terminals.iter().map(|t| t.test_index).collect())
            .collect()
    }
}

impl Serialize for Tree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.roots.serialize(serializer)
    }
}

/// Depth-first iterator over tree nodes
pub struct Nodes<'a> {
    stack: Vec<(usize, &'a Node)>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = (usize, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().map(|c| (depth + 1, c)));
        Some((depth, node))
    }
}
