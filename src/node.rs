use crate::letters::ALPHABET;

pub(crate) struct TrieNode<T> {
    pub(crate) value: Option<T>,
    /// Number of value-holding nodes in this subtree, this node included.
    pub(crate) count: usize,
    pub(crate) children: [Option<Box<TrieNode<T>>>; ALPHABET],
}

impl<T> TrieNode<T> {
    pub(crate) fn new() -> Self {
        TrieNode {
            value: None,
            count: 0,
            children: std::array::from_fn(|_| None),
        }
    }

    #[inline(always)]
    pub(crate) fn child(&self, idx: u8) -> Option<&TrieNode<T>> {
        self.children[idx as usize].as_deref()
    }

    #[inline(always)]
    pub(crate) fn child_mut(&mut self, idx: u8) -> Option<&mut TrieNode<T>> {
        self.children[idx as usize].as_deref_mut()
    }

    /// Returns the child for `idx`, allocating an empty one if needed.
    pub(crate) fn child_or_insert(&mut self, idx: u8) -> &mut TrieNode<T> {
        self.children[idx as usize].get_or_insert_with(|| Box::new(TrieNode::new()))
    }

    /// Iterates over the existing children in `a..=z` order.
    pub(crate) fn children(&self) -> impl DoubleEndedIterator<Item = (u8, &TrieNode<T>)> {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(idx, child)| child.as_deref().map(|node| (idx as u8, node)))
    }

    pub(crate) fn node_count(&self) -> usize {
        let mut total = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            total += 1;
            stack.extend(node.children().map(|(_, child)| child));
        }
        total
    }

    fn take_children(&mut self) -> impl Iterator<Item = Box<TrieNode<T>>> + '_ {
        self.children.iter_mut().filter_map(Option::take)
    }
}

// Nodes nest once per key letter, so dropping and cloning run on an explicit
// stack instead of the compiler's recursive glue.
impl<T> Drop for TrieNode<T> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<TrieNode<T>>> = self.take_children().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.take_children());
        }
    }
}

impl<T: Clone> Clone for TrieNode<T> {
    fn clone(&self) -> Self {
        let leaf = |node: &TrieNode<T>| TrieNode {
            value: node.value.clone(),
            count: node.count,
            children: std::array::from_fn(|_| None),
        };

        // Copies in pre-order as (parent position, letter, node), so every
        // parent sits before its children.
        let mut copies = vec![(0, 0, leaf(self))];
        let mut stack = vec![(self, 0)];
        while let Some((source, at)) = stack.pop() {
            for (idx, child) in source.children() {
                stack.push((child, copies.len()));
                copies.push((at, idx, leaf(child)));
            }
        }

        // Attach from the back; the root is the last one left.
        while let Some((parent, idx, node)) = copies.pop() {
            match copies.get_mut(parent) {
                Some((_, _, copy)) => copy.children[idx as usize] = Some(Box::new(node)),
                None => return node,
            }
        }
        TrieNode::new()
    }
}
