use crate::{
    is_retain_graph, live_nodes,
    node::{Node, NodeRef},
    Var,
};
use log::{debug, trace};
use std::{
    cell::RefCell,
    collections::{hash_map::Entry, HashMap, HashSet, VecDeque},
    mem,
    rc::Rc,
};
use tapegrad_core::{
    error::{Error, Result},
    Float,
};

type NodePtr<T> = *const RefCell<Node<T>>;

/// Counts, for every node reachable from `root`, the parent edges pointing at it.
///
/// Edges are counted individually, so `x * x` contributes two to `x`. Fails with `UseAfterRelease`
/// if a released node is reachable. Nothing is written until the whole graph has been checked;
/// then interior gradients are zeroed so a retained graph can be propagated again, while leaf
/// gradients keep accumulating.
fn pending_in_degrees<T: Float>(root: &NodeRef<T>) -> Result<HashMap<NodePtr<T>, usize>> {
    let mut degrees = HashMap::new();
    degrees.insert(Rc::as_ptr(root), 0);

    let mut interior = Vec::new();
    let mut stack = vec![Rc::clone(root)];
    while let Some(node) = stack.pop() {
        {
            let inner = node.try_borrow().map_err(|_| Error::NodeLocked)?;
            if inner.released {
                return Err(Error::UseAfterRelease);
            }

            for child in &inner.children {
                match degrees.entry(Rc::as_ptr(child)) {
                    Entry::Occupied(mut entry) => *entry.get_mut() += 1,
                    Entry::Vacant(entry) => {
                        entry.insert(1);
                        stack.push(Rc::clone(child));
                    },
                }
            }

            if inner.is_leaf() {
                continue;
            }
        }
        interior.push(node);
    }

    for node in interior {
        node.try_borrow_mut().map_err(|_| Error::NodeLocked)?.grad = T::ZERO;
    }

    Ok(degrees)
}

/// Reverse accumulation from `root`, seeded with `seed`.
///
/// A node is dequeued only once all of its incoming edges have delivered their contribution, so
/// its gradient is final before it pushes anything further down.
fn accumulate<T: Float>(root: &NodeRef<T>, seed: T) -> Result<usize> {
    let mut degrees = pending_in_degrees(root)?;
    let reachable = degrees.len();

    root.try_borrow_mut().map_err(|_| Error::NodeLocked)?.grad = seed;

    let mut queue = VecDeque::new();
    queue.push_back(Rc::clone(root));

    while let Some(node) = queue.pop_front() {
        let cur = node.try_borrow().map_err(|_| Error::NodeLocked)?;
        if cur.is_leaf() {
            continue;
        }

        let args = cur
            .children
            .iter()
            .map(|child| child.try_borrow().map(|c| c.value).map_err(|_| Error::NodeLocked))
            .collect::<Result<Vec<T>>>()?;
        let grads = cur.op.backward(cur.grad, &args)?;
        trace!("propagate: `{}` pushes {:?} into {} child(ren)", cur.op.name(), grads, cur.children.len());

        for (child, contribution) in cur.children.iter().zip(grads) {
            {
                let mut inner = child.try_borrow_mut().map_err(|_| Error::NodeLocked)?;
                inner.grad = inner.grad + contribution;
            }

            if let Some(pending) = degrees.get_mut(&Rc::as_ptr(child)) {
                *pending -= 1;
                if *pending == 0 {
                    queue.push_back(Rc::clone(child));
                }
            }
        }
    }

    Ok(reachable)
}

/// Drops the root's edges and marks it released; children whose last owner was that edge are
/// freed in cascade. A leaf root has nothing to release and stays usable.
fn teardown<T: Float>(root: &NodeRef<T>) -> Result<()> {
    let before = live_nodes();
    let children = {
        let mut inner = root.try_borrow_mut().map_err(|_| Error::NodeLocked)?;
        if inner.is_leaf() {
            return Ok(());
        }
        inner.released = true;
        mem::take(&mut inner.children)
    };
    drop(children);
    debug!("teardown: released {} node(s)", before.saturating_sub(live_nodes()));
    Ok(())
}

impl<T: Float> Var<T> {
    /// Propagates from this node with an explicit seed.
    ///
    /// Without `retain`, the graph under this node is torn down afterwards and this node becomes
    /// released: reading it, or any handle sharing it, fails with `UseAfterRelease`. Nodes still
    /// held by other handles survive with their gradients.
    pub fn try_propagate_with(&self, seed: T, retain: bool) -> Result<()> {
        self.live()?;

        let reachable = accumulate(self.node(), seed)?;
        debug!(
            "propagate: {} node(s) reachable from `{}` root, retain = {}",
            reachable,
            self.try_op_kind()?.as_str(),
            retain
        );

        if !retain {
            teardown(self.node())?;
        }
        Ok(())
    }

    /// Seeds with one and tears the graph down unless [`retain_graph_mode`](crate::retain_graph_mode)
    /// is active.
    pub fn try_propagate(&self) -> Result<()> {
        self.try_propagate_with(T::ONE, is_retain_graph())
    }

    pub fn propagate(&self) {
        self.try_propagate().unwrap_or_else(|err| panic!("propagate: {}", err))
    }

    pub fn try_propagate_retained(&self) -> Result<()> {
        self.try_propagate_with(T::ONE, true)
    }

    /// Propagates and keeps the graph, so intermediate values and gradients stay readable.
    pub fn propagate_retained(&self) {
        self.try_propagate_retained()
            .unwrap_or_else(|err| panic!("propagate_retained: {}", err))
    }

    /// Propagates from this node, then reads the gradient of each argument.
    ///
    /// ```
    /// use tapegrad_var::Var;
    ///
    /// let x = Var::new(2.0);
    /// let y = Var::new(3.0);
    /// let z = &x * &y;
    /// let [dx, dy] = z.derivative([&x, &y]);
    /// assert_eq!((dx, dy), (3.0, 2.0));
    /// ```
    pub fn try_derivative<const N: usize>(&self, args: [&Var<T>; N]) -> Result<[T; N]> {
        self.try_propagate()?;

        let mut grads = [T::ZERO; N];
        for (slot, arg) in grads.iter_mut().zip(args) {
            *slot = arg.try_grad()?;
        }
        Ok(grads)
    }

    pub fn derivative<const N: usize>(&self, args: [&Var<T>; N]) -> [T; N] {
        self.try_derivative(args)
            .unwrap_or_else(|err| panic!("derivative: {}", err))
    }

    /// Resets the gradient of every node reachable from this one.
    pub fn try_clear_graph(&self) -> Result<()> {
        let mut seen = HashSet::new();
        let mut stack = vec![Rc::clone(self.node())];
        while let Some(node) = stack.pop() {
            if !seen.insert(Rc::as_ptr(&node)) {
                continue;
            }
            let mut inner = node.try_borrow_mut().map_err(|_| Error::NodeLocked)?;
            inner.grad = T::ZERO;
            stack.extend(inner.children.iter().cloned());
        }
        Ok(())
    }

    pub fn clear_graph(&self) {
        self.try_clear_graph()
            .unwrap_or_else(|err| panic!("clear_graph: {}", err))
    }
}
