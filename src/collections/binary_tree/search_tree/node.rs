use std::collections::{HashSet, VecDeque};
use std::fmt::{self, Debug, Formatter};
use std::ops::{Deref, DerefMut};
use std::ptr;

pub(crate) struct Branch<T>(pub Option<Box<Node<T>>>);

pub(crate) struct Node<T> {
    pub left: Branch<T>,
    pub right: Branch<T>,
    pub value: T,
}

impl<T> Node<T> {
    pub const fn leaf(value: T) -> Node<T> {
        Node {
            left: Branch(None),
            right: Branch(None),
            value,
        }
    }

    /// Both children, left first, skipping any that are absent.
    pub fn children(&self) -> impl Iterator<Item = &Node<T>> {
        [self.left.as_deref(), self.right.as_deref()].into_iter().flatten()
    }
}

impl<T: Ord> Branch<T> {
    /// Walks down from this branch, going left whenever the current value is greater than or equal
    /// to `value`, and attaches a new leaf at the first empty branch.
    pub fn insert(&mut self, value: T) {
        let mut branch = &mut self.0;
        while let Some(node) = branch {
            branch = if node.value >= value {
                &mut node.left.0
            } else {
                &mut node.right.0
            };
        }
        *branch = Some(Box::new(Node::leaf(value)));
    }

    pub fn contains(&self, value: &T) -> bool {
        let mut branch = self.as_deref();
        while let Some(node) = branch {
            if node.value == *value {
                return true;
            }
            branch = if node.value > *value {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }
        false
    }
}

impl<T> Branch<T> {
    pub fn in_order(&self) -> Vec<&T> {
        let mut values = Vec::new();
        let mut stack = Vec::new();
        let mut branch = self.as_deref();

        loop {
            while let Some(node) = branch {
                stack.push(node);
                branch = node.left.as_deref();
            }
            match stack.pop() {
                Some(node) => {
                    values.push(&node.value);
                    branch = node.right.as_deref();
                },
                None => break values,
            }
        }
    }

    pub fn pre_order(&self) -> Vec<&T> {
        let mut values = Vec::new();
        let mut stack: Vec<&Node<T>> = self.as_deref().into_iter().collect();

        while let Some(node) = stack.pop() {
            values.push(&node.value);
            // Right first, so that left is popped first.
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        values
    }

    pub fn post_order(&self) -> Vec<&T> {
        // Collects (self, right, left), the exact reverse of (left, right, self).
        let mut values = Vec::new();
        let mut stack: Vec<&Node<T>> = self.as_deref().into_iter().collect();

        while let Some(node) = stack.pop() {
            values.push(&node.value);
            stack.extend(node.children());
        }
        values.reverse();
        values
    }

    /// Visits every node reachable from this branch, taking nodes from the `frontier` until it is
    /// empty. Values are recorded in the order that they leave the frontier, and a node is only
    /// added to the frontier the first time it is discovered.
    pub fn search<'a, F: Frontier<'a, T>>(&'a self, mut frontier: F, kind: &str) -> Vec<&'a T> {
        let mut visited = Vec::new();
        let mut discovered = HashSet::new();

        if let Some(root) = self.as_deref() {
            discovered.insert(ptr::from_ref(root));
            frontier.put(root);
        }

        while let Some(node) = frontier.take() {
            tracing::trace!(
                kind,
                step = visited.len(),
                pending = frontier.len(),
                node = ?ptr::from_ref(node),
                "visiting node"
            );
            visited.push(&node.value);

            for child in node.children() {
                if discovered.insert(ptr::from_ref(child)) {
                    frontier.put(child);
                }
            }
        }
        visited
    }

    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<T>, usize)> =
            self.as_deref().map(|root| (root, 1)).into_iter().collect();

        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.children().map(|child| (child, depth + 1)));
        }
        height
    }
}

/// The collection of discovered but unvisited nodes during a search. Its ordering decides the kind
/// of search: first in, first out for breadth-first and last in, first out for depth-first.
pub(crate) trait Frontier<'a, T> {
    fn put(&mut self, node: &'a Node<T>);

    fn take(&mut self) -> Option<&'a Node<T>>;

    fn len(&self) -> usize;
}

impl<'a, T> Frontier<'a, T> for VecDeque<&'a Node<T>> {
    fn put(&mut self, node: &'a Node<T>) {
        self.push_back(node);
    }

    fn take(&mut self) -> Option<&'a Node<T>> {
        self.pop_front()
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

impl<'a, T> Frontier<'a, T> for Vec<&'a Node<T>> {
    fn put(&mut self, node: &'a Node<T>) {
        self.push(node);
    }

    fn take(&mut self) -> Option<&'a Node<T>> {
        self.pop()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T> Deref for Branch<T> {
    type Target = Option<Box<Node<T>>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Branch<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T: Debug> Debug for Branch<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => write!(
                f,
                "{}\n({:?})\n{}",
                format!("{:?}", node.left)
                    .lines()
                    .map(|l| String::from("┌    ") + l)
                    .collect::<Vec<_>>()
                    .join("\n"),
                node.value,
                format!("{:?}", node.right)
                    .lines()
                    .map(|l| String::from("└    ") + l)
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
            None => write!(f, "-"),
        }
    }
}
