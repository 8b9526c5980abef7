use std::{
    cell::{Cell, RefCell},
    mem,
    rc::Rc,
};
use tapegrad_core::{op::Operation, Float};

pub(crate) type NodeRef<T> = Rc<RefCell<Node<T>>>;

thread_local! {
    static LIVE_NODES: Cell<usize> = const { Cell::new(0) };
}

/// Number of graph nodes currently alive on this thread, across all numeric types.
pub fn live_nodes() -> usize {
    LIVE_NODES.with(|n| n.get())
}

pub(crate) struct Node<T: Float> {
    pub(crate) op: &'static Operation,
    pub(crate) value: T,
    pub(crate) grad: T,
    pub(crate) children: Vec<NodeRef<T>>,
    pub(crate) released: bool,
}

impl<T: Float> Node<T> {
    pub(crate) fn leaf(value: T) -> NodeRef<T> {
        Self::with_children(Operation::identity(), value, Vec::new())
    }

    pub(crate) fn with_children(op: &'static Operation, value: T, children: Vec<NodeRef<T>>) -> NodeRef<T> {
        LIVE_NODES.with(|n| n.set(n.get() + 1));
        Rc::new(RefCell::new(Self {
            op,
            value,
            grad: T::ZERO,
            children,
            released: false,
        }))
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.op.is_leaf()
    }
}

// Children are released with an explicit stack: a long chain of single-owner nodes would otherwise
// recurse once per link.
impl<T: Float> Drop for Node<T> {
    fn drop(&mut self) {
        let _ = LIVE_NODES.try_with(|n| n.set(n.get().saturating_sub(1)));

        let mut stack = mem::take(&mut self.children);
        while let Some(child) = stack.pop() {
            if let Ok(cell) = Rc::try_unwrap(child) {
                let mut node = cell.into_inner();
                stack.append(&mut node.children);
            }
        }
    }
}
