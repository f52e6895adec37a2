//! Rule engine: per-node dispatch, scope capture, and the four detectors
//!
//! Global invariants enforced:
//! - One analyzer per run; no state survives between runs
//! - Findings are appended in traversal (pre-order, source) order
//! - Traversal never descends into a flagged loop
//!
//! Handled node shapes are matched explicitly in `visit_stmt`/`visit_expr`;
//! every other shape falls through to generic structural recursion via
//! `visit_children_with`.

use crate::findings::{Finding, RuleKind};
use crate::scope::ScopeStack;
use swc_common::{Span, Spanned};
use swc_ecma_ast::*;
use swc_ecma_visit::{Visit, VisitWith};

/// Analyze a parsed module, returning all findings in traversal order.
pub fn analyze_module(module: &Module) -> Vec<Finding> {
    let mut analyzer = Analyzer {
        scopes: ScopeStack::new(),
        findings: Vec::new(),
        parent: module.span,
    };
    module.visit_with(&mut analyzer);
    debug_assert!(analyzer.scopes.is_empty(), "unbalanced scope stack");
    analyzer.findings
}

/// Tree-walking analyzer holding all per-run mutable state
struct Analyzer {
    scopes: ScopeStack,
    findings: Vec<Finding>,
    /// Span of the node the traversal descended from, used as the anchor for
    /// `UnnecessaryBraces` findings.
    parent: Span,
}

impl Analyzer {
    fn flag(&mut self, span: Span, kind: RuleKind) {
        self.findings.push(Finding::new(span, kind));
    }

    /// Visit a child node with `parent` set to the enclosing node's span.
    fn visit_child<N: VisitWith<Self>>(&mut self, node: &N, parent: Span) {
        let saved = self.parent;
        self.parent = parent;
        node.visit_with(self);
        self.parent = saved;
    }

    fn enter_arrow(&mut self, arrow: &ArrowExpr) {
        let anchor = self.parent;
        let params = param_names(arrow.params.iter());
        self.scopes.open(params.clone());

        match &*arrow.body {
            BlockStmtOrExpr::BlockStmt(block) => {
                self.walk_function_body(block, arrow.span, anchor);
            }
            BlockStmtOrExpr::Expr(expr) => {
                if let Expr::Call(call) = &**expr {
                    if forwards_own_params(&params, call) {
                        self.flag(arrow.span, RuleKind::UnnecessaryFunctionNesting);
                    }
                }
                self.visit_child(&**expr, arrow.span);
            }
        }

        self.leave_function(arrow.span);
    }

    fn enter_fn_expr(&mut self, fn_expr: &FnExpr) {
        let anchor = self.parent;
        let params = param_names(fn_expr.function.params.iter().map(|p| &p.pat));
        self.scopes.open(params);

        if let Some(block) = &fn_expr.function.body {
            self.walk_function_body(block, fn_expr.function.span, anchor);
        }

        self.leave_function(fn_expr.function.span);
    }

    /// Walk a block function body, flagging a single-statement block that is
    /// neither a loop nor a conditional. The finding anchors on the traversal
    /// parent of the function, not the function itself.
    fn walk_function_body(&mut self, block: &BlockStmt, fn_span: Span, anchor: Span) {
        if let [only] = block.stmts.as_slice() {
            if !is_loop_stmt(only) && !matches!(only, Stmt::If(_)) {
                self.flag(anchor, RuleKind::UnnecessaryBraces);
            }
        }
        for stmt in &block.stmts {
            self.visit_child(stmt, fn_span);
        }
    }

    /// Close the function's scope; a non-empty free-variable list means the
    /// function reached outside its own parameters and locals.
    fn leave_function(&mut self, fn_span: Span) {
        if let Some(ctx) = self.scopes.close() {
            if !ctx.free().is_empty() {
                self.flag(fn_span, RuleKind::ImpureFunction);
            }
        }
    }
}

impl Visit for Analyzer {
    fn visit_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            // Loops are flagged and never entered; nothing inside a flagged
            // loop is analyzed.
            Stmt::For(s) => self.flag(s.span, RuleKind::DontUseLoops),
            Stmt::ForIn(s) => self.flag(s.span, RuleKind::DontUseLoops),
            Stmt::ForOf(s) => self.flag(s.span, RuleKind::DontUseLoops),
            Stmt::While(s) => self.flag(s.span, RuleKind::DontUseLoops),
            Stmt::DoWhile(s) => self.flag(s.span, RuleKind::DontUseLoops),
            other => {
                let span = other.span();
                let saved = self.parent;
                self.parent = span;
                other.visit_children_with(self);
                self.parent = saved;
            }
        }
    }

    fn visit_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Arrow(arrow) => self.enter_arrow(arrow),
            Expr::Fn(fn_expr) => self.enter_fn_expr(fn_expr),
            other => {
                let span = other.span();
                let saved = self.parent;
                self.parent = span;
                other.visit_children_with(self);
                self.parent = saved;
            }
        }
    }

    /// Every visited identifier is a reference on the innermost open scope.
    /// Declaration-site names never reach here (`visit_var_declarator`).
    fn visit_ident(&mut self, ident: &Ident) {
        self.scopes.record_reference(&ident.sym);
    }

    /// Member properties and property keys count as references too; this is a
    /// shallow approximation, not lexical resolution.
    fn visit_ident_name(&mut self, name: &IdentName) {
        self.scopes.record_reference(&name.sym);
    }

    /// Declarator name patterns bind locals on the active scope instead of
    /// recording references; only the initializer is walked.
    fn visit_var_declarator(&mut self, declarator: &VarDeclarator) {
        for name in param_names(std::iter::once(&declarator.name)) {
            self.scopes.record_binding(name);
        }
        if let Some(init) = &declarator.init {
            self.visit_child(&**init, declarator.span);
        }
    }
}

fn is_loop_stmt(stmt: &Stmt) -> bool {
    matches!(
        stmt,
        Stmt::For(_) | Stmt::ForIn(_) | Stmt::ForOf(_) | Stmt::While(_) | Stmt::DoWhile(_)
    )
}

/// Pass-through test: every argument is a plain identifier and the
/// comma-joined argument names are a prefix of the comma-joined parameter
/// names. An empty argument list matches any parameter list.
fn forwards_own_params(params: &[String], call: &CallExpr) -> bool {
    let mut args = Vec::with_capacity(call.args.len());
    for arg in &call.args {
        if arg.spread.is_some() {
            return false;
        }
        match &*arg.expr {
            Expr::Ident(ident) => args.push(ident.sym.to_string()),
            _ => return false,
        }
    }
    params.join(", ").starts_with(&args.join(", "))
}

/// Collect binding identifiers from parameter patterns in source order.
///
/// Destructured bindings contribute their identifiers; default-value
/// expressions and computed keys contribute nothing.
fn param_names<'a>(pats: impl Iterator<Item = &'a Pat>) -> Vec<String> {
    struct Collector {
        names: Vec<String>,
    }

    impl Visit for Collector {
        fn visit_binding_ident(&mut self, ident: &BindingIdent) {
            self.names.push(ident.id.sym.to_string());
        }

        fn visit_assign_pat(&mut self, pat: &AssignPat) {
            // Only the bound side; the default value is an expression
            pat.left.visit_with(self);
        }

        fn visit_expr(&mut self, _expr: &Expr) {}
    }

    let mut collector = Collector { names: Vec::new() };
    for pat in pats {
        pat.visit_with(&mut collector);
    }
    collector.names
}
