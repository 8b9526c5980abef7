mod compare;
mod display;
pub mod mode;
mod node;
mod operators;
mod ops;
mod propagate;

pub use compare::{clear, max, min, EQ_TOLERANCE};
pub use mode::{
    grad_mode, is_grad_enabled, is_retain_graph, no_grad_mode, retain_graph_mode, set_grad_enabled, set_retain_graph,
    GradientGuard, RetainGraphGuard,
};
pub use node::live_nodes;

use node::{Node, NodeRef};
use std::{
    cell::{Ref, RefMut},
    rc::Rc,
};
use tapegrad_core::{
    error::{Error, Result},
    op::{OpKind, Operation},
    Float,
};

/// A handle to one node of the computation graph.
///
/// Cloning shares the node (its reference count goes up by one); dropping the last handle and the
/// last parent edge frees it. Operators and the named functions build new nodes whose children are
/// the operands' nodes, with the forward value computed immediately.
///
/// Every fallible method has a `try_*` form; the plain form panics on error.
#[derive(Clone)]
pub struct Var<T: Float = f64> {
    node: NodeRef<T>,
}

impl<T: Float> Var<T> {
    /// Creates a leaf holding `value`.
    pub fn new(value: T) -> Self {
        Self { node: Node::leaf(value) }
    }

    /// Records `op` applied to `operands`, evaluating the forward rule eagerly.
    ///
    /// With recording disabled (see [`no_grad_mode`]) the result is a detached leaf.
    pub(crate) fn apply(op: &'static Operation, operands: &[&Var<T>]) -> Result<Self> {
        let values = operands.iter().map(|v| v.try_raw()).collect::<Result<Vec<T>>>()?;
        let value = op.forward(&values)?;

        if !is_grad_enabled() {
            return Ok(Self::new(value));
        }

        let children = operands.iter().map(|v| Rc::clone(&v.node)).collect();
        Ok(Self {
            node: Node::with_children(op, value, children),
        })
    }

    pub(crate) fn node(&self) -> &NodeRef<T> {
        &self.node
    }

    fn borrow(&self) -> Result<Ref<'_, Node<T>>> {
        self.node.try_borrow().map_err(|_| Error::NodeLocked)
    }

    fn borrow_mut(&self) -> Result<RefMut<'_, Node<T>>> {
        self.node.try_borrow_mut().map_err(|_| Error::NodeLocked)
    }

    fn live(&self) -> Result<Ref<'_, Node<T>>> {
        let node = self.borrow()?;
        if node.released {
            return Err(Error::UseAfterRelease);
        }
        Ok(node)
    }

    fn live_mut(&self) -> Result<RefMut<'_, Node<T>>> {
        let node = self.borrow_mut()?;
        if node.released {
            return Err(Error::UseAfterRelease);
        }
        Ok(node)
    }

    // value

    pub fn try_raw(&self) -> Result<T> {
        Ok(self.live()?.value)
    }

    /// Runs [`try_raw`](Self::try_raw) and panics on failure.
    pub fn raw(&self) -> T {
        self.try_raw().unwrap_or_else(|err| panic!("raw: {}", err))
    }

    /// Overwrites the stored value in place.
    ///
    /// Meant for leaves (parameters updated by an optimizer); parents already built from this node
    /// keep the value they were evaluated with.
    pub fn try_set_raw(&self, value: T) -> Result<()> {
        self.live_mut()?.value = value;
        Ok(())
    }

    pub fn set_raw(&self, value: T) {
        self.try_set_raw(value).unwrap_or_else(|err| panic!("set_raw: {}", err))
    }

    // grad

    pub fn try_grad(&self) -> Result<T> {
        Ok(self.live()?.grad)
    }

    pub fn grad(&self) -> T {
        self.try_grad().unwrap_or_else(|err| panic!("grad: {}", err))
    }

    /// Resets this node's gradient to zero.
    pub fn try_clear(&self) -> Result<()> {
        self.borrow_mut()?.grad = T::ZERO;
        Ok(())
    }

    pub fn clear(&self) {
        self.try_clear().unwrap_or_else(|err| panic!("clear: {}", err))
    }

    // node

    pub fn try_op_kind(&self) -> Result<OpKind> {
        Ok(self.borrow()?.op.kind())
    }

    pub fn op_kind(&self) -> OpKind {
        self.try_op_kind().unwrap_or_else(|err| panic!("op_kind: {}", err))
    }

    pub fn try_is_leaf(&self) -> Result<bool> {
        Ok(self.borrow()?.is_leaf())
    }

    pub fn is_leaf(&self) -> bool {
        self.try_is_leaf().unwrap_or_else(|err| panic!("is_leaf: {}", err))
    }

    pub fn try_is_released(&self) -> Result<bool> {
        Ok(self.borrow()?.released)
    }

    pub fn is_released(&self) -> bool {
        self.try_is_released().unwrap_or_else(|err| panic!("is_released: {}", err))
    }

    /// Number of owners of the underlying node: live handles plus parent edges.
    pub fn ref_count(&self) -> usize {
        Rc::strong_count(&self.node)
    }

    /// Whether both handles refer to the same node.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }

    /// A new leaf with the same value and no history.
    pub fn try_detach(&self) -> Result<Self> {
        Ok(Self::new(self.try_raw()?))
    }

    pub fn detach(&self) -> Self {
        self.try_detach().unwrap_or_else(|err| panic!("detach: {}", err))
    }
}

impl<T: Float> From<T> for Var<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Float> Default for Var<T> {
    fn default() -> Self {
        Self::new(T::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locked_node_reports_instead_of_panicking() {
        let x = Var::new(1.0f64);
        let y = x.exp();
        let _held = y.node().borrow_mut();

        assert_eq!(y.try_op_kind(), Err(Error::NodeLocked));
        assert_eq!(y.try_is_leaf(), Err(Error::NodeLocked));
        assert_eq!(y.try_is_released(), Err(Error::NodeLocked));
        assert_eq!(y.try_raw(), Err(Error::NodeLocked));
        assert!(x.try_is_leaf().is_ok());
    }

    #[test]
    #[should_panic(expected = "op_kind: ")]
    fn locked_node_panics_with_context() {
        let x = Var::new(1.0f64);
        let _held = x.node().borrow_mut();
        let _ = x.op_kind();
    }
}
