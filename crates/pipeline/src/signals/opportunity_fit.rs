//! Signal for candidates who bring what the opportunity asks for.

use crate::context::UserContext;
use crate::traits::{Signal, SignalKind, SkillMatcher};
use data_loader::{Candidate, Opportunity};
use std::sync::Arc;

/// Fires when a candidate skill is related to any required skill of the
/// chosen opportunity.
pub struct OpportunityFitSignal {
    matcher: Arc<dyn SkillMatcher>,
}

impl OpportunityFitSignal {
    pub fn new(matcher: Arc<dyn SkillMatcher>) -> Self {
        Self { matcher }
    }
}

impl Signal for OpportunityFitSignal {
    fn name(&self) -> &str {
        "OpportunityFitSignal"
    }

    fn kind(&self) -> SignalKind {
        SignalKind::OpportunityFit
    }

    fn evidence(
        &self,
        candidate: &Candidate,
        opportunity: &Opportunity,
        _context: &UserContext,
    ) -> Vec<String> {
        candidate
            .skills
            .iter()
            .filter(|skill| {
                opportunity
                    .required_skills
                    .iter()
                    .any(|required| self.matcher.related(skill, required))
            })
            .cloned()
            .collect()
    }
}
