//! Validation context
//!
//! Tracks where the walk currently is in the tree and collects the issues it
//! finds along the way.

use super::{IssueKind, ValidationIssue};
use crate::limits::Limits;

/// State carried through one validation walk
#[derive(Debug, Clone, Default)]
pub struct ValidationContext {
    /// Collected issues in emission order
    pub issues: Vec<ValidationIssue>,
    /// Type names from the root to the current node
    pub path: Vec<String>,
    /// Maximum depth to descend to (None = unlimited)
    pub max_depth: Option<usize>,
    /// Whether part of the tree was skipped for depth
    pub truncated: bool,
}

impl ValidationContext {
    /// Create a new validation context
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context bounded by resource limits
    pub fn with_limits(limits: &Limits) -> Self {
        Self::new().with_max_depth(limits.max_depth)
    }

    /// Set maximum depth
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Current nesting level
    pub fn level(&self) -> usize {
        self.path.len()
    }

    /// Check if we've exceeded max depth
    pub fn is_max_depth_exceeded(&self) -> bool {
        match self.max_depth {
            Some(max) => self.level() > max,
            None => false,
        }
    }

    /// Enter a child node
    pub fn enter(&mut self, name: &str) {
        self.path.push(name.to_string());
    }

    /// Leave the current node
    pub fn exit(&mut self) {
        self.path.pop();
    }

    /// Record an issue at the current node
    pub fn report(&mut self, kind: IssueKind, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            path: self.path.clone(),
            kind,
            message: message.into(),
        });
    }

    /// Record an issue at a child of the current node
    pub fn report_at(&mut self, child: &str, kind: IssueKind, message: impl Into<String>) {
        let mut path = self.path.clone();
        path.push(child.to_string());
        self.issues.push(ValidationIssue {
            path,
            kind,
            message: message.into(),
        });
    }

    /// Check if there are any issues
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Take the collected issues, leaving the context empty
    pub fn take_issues(&mut self) -> Vec<ValidationIssue> {
        self.path.clear();
        std::mem::take(&mut self.issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_tracking() {
        let mut ctx = ValidationContext::new();
        ctx.enter("eml");
        ctx.enter("dataset");
        ctx.report_at(
            "arbitrary",
            IssueKind::UnexpectedElement {
                element: "arbitrary".into(),
            },
            "not allowed",
        );
        ctx.exit();
        assert_eq!(ctx.level(), 1);
        assert!(ctx.has_issues());

        let issues = ctx.take_issues();
        assert_eq!(issues[0].path, ["eml", "dataset", "arbitrary"]);
        assert!(!ctx.has_issues());
        assert_eq!(ctx.level(), 0);
    }

    #[test]
    fn test_max_depth() {
        let mut ctx = ValidationContext::new().with_max_depth(1);
        ctx.enter("a");
        assert!(!ctx.is_max_depth_exceeded());
        ctx.enter("b");
        assert!(ctx.is_max_depth_exceeded());
    }
}
