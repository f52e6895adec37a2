//! Finding records produced by the rule detectors

use swc_common::Span;

/// The four anti-pattern rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Any loop statement (for, for-in, for-of, while, do-while)
    DontUseLoops,
    /// Function body wrapped in a block when a single statement suffices
    UnnecessaryBraces,
    /// Function whose body only forwards its own parameters to another call
    UnnecessaryFunctionNesting,
    /// Function referencing identifiers outside its own parameters and locals
    ImpureFunction,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::DontUseLoops => "DontUseLoops",
            RuleKind::UnnecessaryBraces => "UnnecessaryBraces",
            RuleKind::UnnecessaryFunctionNesting => "UnnecessaryFunctionNesting",
            RuleKind::ImpureFunction => "ImpureFunction",
        }
    }
}

/// One rule violation, anchored on an AST node's span
///
/// Findings are immutable and appended to the per-run results sequence in
/// traversal (pre-order, source) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finding {
    pub span: Span,
    pub kind: RuleKind,
}

impl Finding {
    pub fn new(span: Span, kind: RuleKind) -> Self {
        Finding { span, kind }
    }
}
