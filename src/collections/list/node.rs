use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodeRef<T>>;

// NOTE: Nodes are allocated through Box rather than alloc because dereferencing a Box is the one
// way to move a value back out of the heap without copying it bytewise.

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

/// A pointer to a heap-allocated [`Node`]. Copyable so that traversal code can hold links while
/// splicing; exclusive ownership of each node is maintained by the containing list.
#[derive(Debug)]
pub(crate) struct NodeRef<T>(pub NonNull<Node<T>>);

impl<T> NodeRef<T> {
    pub fn new(value: T) -> NodeRef<T> {
        NodeRef::from_node(Node {
            value,
            next: None,
        })
    }

    pub fn from_node(node: Node<T>) -> NodeRef<T> {
        NodeRef(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Moves the node out of the heap, ending its allocation. The list must have already unlinked
    /// it, and no other copy of this NodeRef may be dereferenced afterwards.
    pub fn take_node(self) -> Node<T> {
        // SAFETY: NodeRefs are only created from Box allocations, and the containing list hands
        // out each node to take_node at most once.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub fn value<'a>(&self) -> &'a T {
        // SAFETY: The node is alive for as long as a list links to it; see Slot for the aliasing
        // discipline.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn value_mut<'a>(&mut self) -> &'a mut T {
        // SAFETY: As above, and the list is the single mutator.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: As for value.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: As for value_mut.
        unsafe { &mut (*self.0.as_ptr()).next }
    }
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<T> {}

impl<T> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
