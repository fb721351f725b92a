use crate::node::TrieNode;

/// Release `root` and everything below it, children before parents.
/// Returns the number of nodes released.
///
/// Uses an explicit stack instead of recursion because the depth of the
/// tree is the length of the longest word, which can be anything.
pub(crate) fn release_post_order(root: TrieNode) -> usize {
    release_post_order_with(root, |_| ())
}

/// Like `release_post_order` but calls `released` on each node just
/// before it is dropped. The node has no children left at that point.
pub(crate) fn release_post_order_with(
    root: TrieNode,
    mut released: impl FnMut(&TrieNode),
) -> usize {
    let mut nr = 0;
    let mut stack = vec![(root, false)];
    while let Some((mut node, expanded)) = stack.pop() {
        if expanded {
            released(&node);
            nr += 1;
            continue;
        }
        let children = node.take_children();
        stack.push((node, true));
        // Reversed so that children come off the stack in alphabet order.
        stack.extend(children.into_iter().rev().flatten().map(|c| (c, false)));
    }
    nr
}
