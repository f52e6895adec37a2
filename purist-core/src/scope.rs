//! Scope tracking for free-variable capture
//!
//! Global invariants enforced:
//! - One `ScopeStack` per analysis run, owned by the traversal; no globals
//! - A context's free-variable list is computed exactly once, at close

/// Working state for one function body under analysis
///
/// `bound` holds the function's declared parameter names plus any names bound
/// by variable declarators inside the body while the context is active.
/// `referenced` holds every identifier recorded while the context was on top
/// of the stack, in source order, duplicates included.
#[derive(Debug)]
pub struct ScopeContext {
    bound: Vec<String>,
    referenced: Vec<String>,
    free: Option<Vec<String>>,
}

impl ScopeContext {
    fn new(params: Vec<String>) -> Self {
        ScopeContext {
            bound: params,
            referenced: Vec::new(),
            free: None,
        }
    }

    /// Finalize the context: free = referenced names not in the bound set.
    ///
    /// Called exactly once, when the context is popped. `free` is never
    /// recomputed afterwards.
    fn close(mut self) -> Self {
        debug_assert!(self.free.is_none(), "context closed twice");
        let free = self
            .referenced
            .iter()
            .filter(|name| !self.bound.contains(name))
            .cloned()
            .collect();
        self.free = Some(free);
        self
    }

    /// Free variables of a closed context. Empty for a context not yet closed.
    pub fn free(&self) -> &[String] {
        self.free.as_deref().unwrap_or(&[])
    }
}

/// LIFO stack of scope contexts, one per open function nesting level
///
/// Capture is gated on the stack being non-empty: references and bindings
/// recorded while no function is open are dropped. Closing an inner context
/// never affects capture for a still-open outer context.
#[derive(Debug, Default)]
pub struct ScopeStack {
    contexts: Vec<ScopeContext>,
}

impl ScopeStack {
    pub fn new() -> Self {
        ScopeStack::default()
    }

    /// Open a context for a function with the given parameter names.
    pub fn open(&mut self, params: Vec<String>) {
        self.contexts.push(ScopeContext::new(params));
    }

    /// Close the innermost context, computing its free variables.
    pub fn close(&mut self) -> Option<ScopeContext> {
        self.contexts.pop().map(ScopeContext::close)
    }

    /// Record an identifier reference on the innermost open context.
    pub fn record_reference(&mut self, name: &str) {
        if let Some(ctx) = self.contexts.last_mut() {
            ctx.referenced.push(name.to_string());
        }
    }

    /// Record a locally declared name on the innermost open context.
    pub fn record_binding(&mut self, name: String) {
        if let Some(ctx) = self.contexts.last_mut() {
            ctx.bound.push(name);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_is_referenced_minus_bound() {
        let mut stack = ScopeStack::new();
        stack.open(vec!["a".to_string()]);
        stack.record_reference("a");
        stack.record_reference("b");
        let ctx = stack.close().unwrap();
        assert_eq!(ctx.free(), ["b".to_string()]);
    }

    #[test]
    fn local_bindings_are_not_free() {
        let mut stack = ScopeStack::new();
        stack.open(vec![]);
        stack.record_binding("x".to_string());
        stack.record_reference("x");
        let ctx = stack.close().unwrap();
        assert!(ctx.free().is_empty());
    }

    #[test]
    fn references_go_to_innermost_context() {
        let mut stack = ScopeStack::new();
        stack.open(vec![]);
        stack.open(vec![]);
        stack.record_reference("inner");
        let inner = stack.close().unwrap();
        stack.record_reference("outer");
        let outer = stack.close().unwrap();
        assert_eq!(inner.free(), ["inner".to_string()]);
        assert_eq!(outer.free(), ["outer".to_string()]);
    }

    #[test]
    fn references_with_no_open_context_are_dropped() {
        let mut stack = ScopeStack::new();
        stack.record_reference("ghost");
        assert!(stack.is_empty());
        assert!(stack.close().is_none());
    }
}
