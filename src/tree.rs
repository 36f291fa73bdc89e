//! Tree sort over an unbalanced binary search tree.
//!
//! The tree lives in an arena: node `i` holds element `i` of the decorated input
//! and links to its children by index. Insertion and the in-order walk are both
//! iterative, so a degenerate (list-shaped) tree costs time but never stack.

use crate::core::{Keyed, apply_permutation, decorate, finish};

const NIL: usize = usize::MAX;

#[derive(Clone, Copy, Debug)]
struct Node {
    left: usize,
    right: usize,
}

impl Default for Node {
    fn default() -> Self {
        Node {
            left: NIL,
            right: NIL,
        }
    }
}

/// Sorts by inserting every element into a binary search tree and reading it back in order.
///
/// Equal keys descend into the right subtree, so elements with equal keys come
/// out in insertion order. Stable. No rebalancing happens: sorted or reversed
/// input builds a list-shaped tree and costs O(n²) comparisons.
///
/// # Examples
///
/// ```
/// use keysort::tree::tree_sort;
///
/// let pairs = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
/// let sorted = tree_sort(&pairs, |p| p.0, false);
///
/// assert_eq!(sorted, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
/// ```
pub fn tree_sort<T, K, F>(data: &[T], key: F, reverse: bool) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut items = decorate(data, key);
    if items.len() > 1 {
        let order = Tree::build(&items).in_order();
        apply_permutation(&mut items, order);
    }
    finish(items, reverse)
}

struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Inserts `items` in input order. The root is element 0.
    fn build<K: Ord, T>(items: &[Keyed<K, T>]) -> Self {
        let mut nodes = vec![Node::default(); items.len()];

        for new in 1..items.len() {
            let mut current = 0;
            loop {
                let node = &mut nodes[current];
                let link = if items[new].key < items[current].key {
                    &mut node.left
                } else {
                    &mut node.right
                };
                if *link == NIL {
                    *link = new;
                    break;
                }
                current = *link;
            }
        }

        Tree { nodes }
    }

    /// Element indices in in-order sequence.
    fn in_order(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.nodes.len());
        if self.nodes.is_empty() {
            return order;
        }

        let mut stack = Vec::new();
        let mut current = 0;
        loop {
            while current != NIL {
                stack.push(current);
                current = self.nodes[current].left;
            }
            match stack.pop() {
                Some(visited) => {
                    order.push(visited);
                    current = self.nodes[visited].right;
                }
                None => break,
            }
        }

        order
    }
}
