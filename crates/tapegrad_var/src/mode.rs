use std::cell::Cell;

// ────────────────────────────────────────────────────────────────────────────
//  Gradient recording
// ────────────────────────────────────────────────────────────────────────────

thread_local! {
    static GRAD_ENABLED: Cell<bool> = const { Cell::new(true) };
    static RETAIN_GRAPH: Cell<bool> = const { Cell::new(false) };
}

/// Whether operations on variables record graph edges on this thread.
pub fn is_grad_enabled() -> bool {
    GRAD_ENABLED.with(|g| g.get())
}

pub fn set_grad_enabled(enabled: bool) {
    GRAD_ENABLED.with(|g| g.set(enabled))
}

pub struct GradientGuard {
    prev_enabled: bool,
}

impl GradientGuard {
    pub fn new(enabled: bool) -> Self {
        let prev_enabled = is_grad_enabled();
        set_grad_enabled(enabled);
        Self { prev_enabled }
    }
}

impl Drop for GradientGuard {
    fn drop(&mut self) {
        set_grad_enabled(self.prev_enabled);
    }
}

/// Disables recording until the guard is dropped: results come back as detached leaves.
pub fn no_grad_mode() -> GradientGuard {
    GradientGuard::new(false)
}

pub fn grad_mode() -> GradientGuard {
    GradientGuard::new(true)
}

// ────────────────────────────────────────────────────────────────────────────
//  Graph retention
// ────────────────────────────────────────────────────────────────────────────

/// Whether a plain `propagate()` keeps the graph instead of tearing it down.
pub fn is_retain_graph() -> bool {
    RETAIN_GRAPH.with(|r| r.get())
}

pub fn set_retain_graph(retain: bool) {
    RETAIN_GRAPH.with(|r| r.set(retain))
}

pub struct RetainGraphGuard {
    prev_retain: bool,
}

impl RetainGraphGuard {
    pub fn new(retain: bool) -> Self {
        let prev_retain = is_retain_graph();
        set_retain_graph(retain);
        Self { prev_retain }
    }
}

impl Drop for RetainGraphGuard {
    fn drop(&mut self) {
        set_retain_graph(self.prev_retain);
    }
}

pub fn retain_graph_mode() -> RetainGraphGuard {
    RetainGraphGuard::new(true)
}
