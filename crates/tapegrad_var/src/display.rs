use crate::{node::NodeRef, Var};
use std::{
    collections::{hash_map::Entry, HashMap, VecDeque},
    fmt,
    rc::Rc,
};
use tapegrad_core::Float;

impl<T: Float> fmt::Display for Var<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.try_raw() {
            Ok(value) => fmt::Display::fmt(&value, f),
            Err(_) => write!(f, "<released>"),
        }
    }
}

impl<T: Float> fmt::Debug for Var<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node().try_borrow() {
            Ok(node) => f
                .debug_struct("Var")
                .field("op", &node.op.name())
                .field("value", &node.value)
                .field("grad", &node.grad)
                .field("refs", &self.ref_count())
                .field("released", &node.released)
                .finish(),
            Err(_) => f.debug_struct("Var").field("locked", &true).finish_non_exhaustive(),
        }
    }
}

impl<T: Float> Var<T> {
    /// Renders the graph below this node, one node per line followed by its incoming edges.
    ///
    /// Nodes are numbered in discovery order starting from `#00` for this node:
    ///
    /// ```text
    /// #00 multiply value=6 grad=0 refs=1
    ///   #01 --multiply--> #00
    ///   #02 --multiply--> #00
    /// #01 identity value=2 grad=0 refs=2
    /// #02 identity value=3 grad=0 refs=2
    /// ```
    pub fn graph_string(&self) -> String {
        let mut ids: HashMap<*const _, usize> = HashMap::new();
        let mut order: Vec<NodeRef<T>> = Vec::new();
        let mut queue = VecDeque::from([Rc::clone(self.node())]);
        ids.insert(Rc::as_ptr(self.node()), 0);

        while let Some(node) = queue.pop_front() {
            if let Ok(inner) = node.try_borrow() {
                for child in &inner.children {
                    let next = ids.len();
                    if let Entry::Vacant(entry) = ids.entry(Rc::as_ptr(child)) {
                        entry.insert(next);
                        queue.push_back(Rc::clone(child));
                    }
                }
            }
            order.push(node);
        }

        let mut out = String::new();
        for node in &order {
            let Ok(inner) = node.try_borrow() else {
                continue;
            };
            let id = ids[&Rc::as_ptr(node)];
            // `order` holds one extra owner of every node.
            let refs = Rc::strong_count(node) - 1;
            out.push_str(&format!(
                "#{:02} {} value={} grad={} refs={}\n",
                id,
                inner.op.name(),
                inner.value,
                inner.grad,
                refs
            ));
            for child in &inner.children {
                out.push_str(&format!(
                    "  #{:02} --{}--> #{:02}\n",
                    ids[&Rc::as_ptr(child)],
                    inner.op.name(),
                    id
                ));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_graph() {
        let x = Var::new(2.0);
        let y = Var::new(3.0);
        let z = &x * &y;

        assert_eq!(format!("{}", z), "6");
        assert_eq!(format!("{:.2}", x), "2.00");

        let graph = z.graph_string();
        assert!(graph.starts_with("#00 multiply value=6 grad=0 refs=1\n"));
        assert!(graph.contains("  #01 --multiply--> #00\n"));
        assert!(graph.contains("#01 identity value=2 grad=0 refs=2\n"));
        assert!(graph.contains("#02 identity value=3 grad=0 refs=2\n"));
        assert_eq!(z.ref_count(), 1);
        assert_eq!(x.ref_count(), 2);
    }

    #[test]
    fn released_display() {
        let x = Var::new(2.0);
        let y = x.exp();
        y.propagate();
        assert_eq!(format!("{}", y), "<released>");
        assert!(format!("{:?}", y).contains("released: true"));
    }
}
