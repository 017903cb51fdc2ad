//! Core traits for the matching pipeline.
//!
//! Two seams live here:
//! - `SkillMatcher` decides whether two skill strings refer to the same thing
//! - `Signal` decides why (if at all) a candidate is worth suggesting

use crate::context::UserContext;
use data_loader::{Candidate, Opportunity};

/// Predicate relating two skill strings.
///
/// Ranking and recommendation only ever ask "are these related?", so the
/// rule can be replaced (exact match, taxonomy lookup, embeddings) without
/// touching either of them.
pub trait SkillMatcher: Send + Sync {
    /// Returns the name of this matcher (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `a` and `b` name related skills. Must be symmetric.
    fn related(&self, a: &str, b: &str) -> bool;
}

/// Which recommendation intent a signal represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    /// The candidate has skills the chosen opportunity asks for
    OpportunityFit,
    /// The candidate covers a skill the user is weak in
    WeakSkillCoverage,
}

/// A reason to include a candidate in the teammate suggestions.
///
/// ## Design Note
/// - Signals are OR-ed by `CandidateRecommender`: any non-empty evidence
///   is enough for inclusion
/// - Evidence is the list of the candidate's own skill strings that
///   triggered the signal, so message composition never re-runs matching
pub trait Signal: Send + Sync {
    /// Returns the name of this signal (for logging/debugging)
    fn name(&self) -> &str;

    fn kind(&self) -> SignalKind;

    /// Candidate skills supporting this signal; empty when it doesn't fire.
    fn evidence(
        &self,
        candidate: &Candidate,
        opportunity: &Opportunity,
        context: &UserContext,
    ) -> Vec<String>;
}
