//! Ordered course store: an arena-indexed binary search tree keyed by
//! uppercased course name.
//!
//! Insertion, lookup and in-order enumeration are the whole contract.
//! There is no delete and no rebalancing; tree shape is fully determined
//! by insertion order, and the in-order walk yields ascending name order
//! regardless of that shape.

use std::cmp::Ordering;

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::entities::{normalize_key, Course};

/// Tree node owning one course and the indices of its subtrees.
///
/// Left holds keys strictly less than this node's, right strictly greater.
/// An equal key takes neither branch: duplicates are dropped at insert.
#[derive(Debug)]
struct CourseNode {
    course: Course,
    left: Option<Index>,
    right: Option<Index>,
}

impl CourseNode {
    fn leaf(course: Course) -> Self {
        Self {
            course,
            left: None,
            right: None,
        }
    }
}

/// Arena-based binary search tree of [`Course`] records.
///
/// The arena owns every node and the catalog holds the root index, so
/// ownership stays strictly tree-shaped: no back-references, no cycles,
/// and dropping (or clearing) the catalog releases every node exactly
/// once.
#[derive(Debug)]
pub struct CourseCatalog {
    /// Arena storage for all tree nodes
    arena: Arena<CourseNode>,
    /// Index of the root node, None for an empty catalog
    root: Option<Index>,
}

impl Default for CourseCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseCatalog {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// True iff the catalog holds no courses.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of stored courses.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Insert a course keyed by its (already uppercased) name.
    ///
    /// Descends from the root: lesser keys go left, greater go right, and
    /// a new leaf is created where descent first reaches an absent child.
    /// An equal key is a no-op: the existing entry is retained and the
    /// given course is dropped. Returns whether the course was inserted.
    #[instrument(level = "trace", skip(self, course), fields(key = %course.name))]
    pub fn insert(&mut self, course: Course) -> bool {
        let mut current = match self.root {
            Some(idx) => idx,
            None => {
                let idx = self.arena.insert(CourseNode::leaf(course));
                self.root = Some(idx);
                return true;
            }
        };

        loop {
            let (ord, left, right) = match self.arena.get(current) {
                Some(node) => (
                    course.name.as_str().cmp(node.course.name.as_str()),
                    node.left,
                    node.right,
                ),
                // Nodes are never removed, so indices cannot dangle.
                None => return false,
            };

            match ord {
                Ordering::Equal => return false,
                Ordering::Less => match left {
                    Some(child) => current = child,
                    None => {
                        let idx = self.arena.insert(CourseNode::leaf(course));
                        if let Some(node) = self.arena.get_mut(current) {
                            node.left = Some(idx);
                        }
                        return true;
                    }
                },
                Ordering::Greater => match right {
                    Some(child) => current = child,
                    None => {
                        let idx = self.arena.insert(CourseNode::leaf(course));
                        if let Some(node) = self.arena.get_mut(current) {
                            node.right = Some(idx);
                        }
                        return true;
                    }
                },
            }
        }
    }

    /// Look up a course by name, any case.
    ///
    /// The query is uppercased, then the same comparison descent as
    /// [`insert`](Self::insert) runs until a match or an absent child.
    /// O(height), no mutation.
    #[instrument(level = "trace", skip(self))]
    pub fn find(&self, name: &str) -> Option<&Course> {
        let key = normalize_key(name);
        let mut current = self.root;

        while let Some(idx) = current {
            let node = self.arena.get(idx)?;
            current = match key.as_str().cmp(node.course.name.as_str()) {
                Ordering::Equal => return Some(&node.course),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// In-order traversal: all courses in ascending name order.
    ///
    /// This is the only supported enumeration order and the only way to
    /// observe the full catalog.
    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> InOrderIter {
        InOrderIter::new(self)
    }

    /// Release all nodes and reset to the empty state.
    ///
    /// Safe on an empty catalog.
    #[instrument(level = "trace", skip(self))]
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }
}

/// Explicit-stack in-order iterator over a [`CourseCatalog`].
///
/// Holds the left spine of the subtree still to visit; popping a node
/// yields it and pushes the left spine of its right child.
pub struct InOrderIter<'a> {
    catalog: &'a CourseCatalog,
    stack: Vec<Index>,
}

impl<'a> InOrderIter<'a> {
    fn new(catalog: &'a CourseCatalog) -> Self {
        let mut iter = Self {
            catalog,
            stack: Vec::new(),
        };
        iter.push_left_spine(catalog.root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<Index>) {
        while let Some(idx) = node {
            self.stack.push(idx);
            node = self.catalog.arena.get(idx).and_then(|n| n.left);
        }
    }
}

impl<'a> Iterator for InOrderIter<'a> {
    type Item = &'a Course;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let catalog = self.catalog;
        let node = catalog.arena.get(idx)?;
        self.push_left_spine(node.right);
        Some(&node.course)
    }
}
