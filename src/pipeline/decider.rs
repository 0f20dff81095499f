use anyhow::Result;

use super::FilterContext;
use crate::filter::FileFilterDecision;

/// The external decision step: sees the context, answers with exclusion rules
///
/// Implementations typically wrap a model call. The pipeline never inspects
/// how a decision was reached.
pub trait FileFilterDecider: Send + Sync {
    fn decide(&self, context: &FilterContext) -> Result<FileFilterDecision>;

    /// Name for logs and error messages
    fn name(&self) -> &'static str;
}

/// Serves the same decision for every context
#[derive(Debug, Clone)]
pub struct StaticDecider {
    decision: FileFilterDecision,
}

impl StaticDecider {
    pub fn new(decision: FileFilterDecision) -> Self {
        Self { decision }
    }
}

impl FileFilterDecider for StaticDecider {
    fn decide(&self, _context: &FilterContext) -> Result<FileFilterDecision> {
        Ok(self.decision.clone())
    }

    fn name(&self) -> &'static str {
        "StaticDecider"
    }
}
