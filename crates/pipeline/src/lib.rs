//! Matching core for hackathon and teammate recommendations.
//!
//! This crate provides:
//! - `SkillMatcher` and its fuzzy/exact implementations
//! - `UserContext`, the per-request view of the user's skills
//! - `OpportunityRanker` for scoring and ordering hackathons
//! - `Signal` implementations and the `CandidateRecommender` that combines them
//! - Progress helpers for the dashboard (skill tiers, XP progress)
//!
//! Everything here is synchronous and free of shared mutable state; it is
//! safe to call from many threads at once.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{rank, recommend_candidates};
//!
//! let ranked = rank(&catalog.skills, &catalog.opportunities);
//! let best = &ranked[0].opportunity;
//! let partners = recommend_candidates(&catalog.skills, best, &catalog.candidates);
//! ```

pub mod context;
pub mod matcher;
pub mod progress;
pub mod ranker;
pub mod recommender;
pub mod signals;
pub mod traits;

// Re-export main types
pub use context::{DEFAULT_WEAK_SKILL_THRESHOLD, UserContext};
pub use matcher::{ExactMatcher, FuzzyMatcher, skills_related};
pub use progress::{SkillTier, unlocked_badges, xp_progress_percent};
pub use ranker::{MatchResult, OpportunityRanker, match_score};
pub use recommender::{CandidateMatch, CandidateRecommender};
pub use signals::{OpportunityFitSignal, WeakSkillSignal};
pub use traits::{Signal, SignalKind, SkillMatcher};

use data_loader::{Candidate, Opportunity, Skill};
use std::sync::Arc;

/// Rank `catalog` against `user_skills` with the fuzzy matcher.
pub fn rank(user_skills: &[Skill], catalog: &[Opportunity]) -> Vec<MatchResult> {
    let context = UserContext::from_skills(user_skills);
    OpportunityRanker::new(Arc::new(FuzzyMatcher)).rank(&context, catalog)
}

/// Teammates for `opportunity`: anyone fitting its requirements or covering
/// a weak skill (level below 60). Catalog order is preserved.
pub fn recommend_candidates(
    user_skills: &[Skill],
    opportunity: &Opportunity,
    catalog: &[Candidate],
) -> Vec<Candidate> {
    CandidateRecommender::with_default_signals(Arc::new(FuzzyMatcher))
        .recommend(catalog, opportunity, &UserContext::from_skills(user_skills))
        .into_iter()
        .map(|m| m.candidate)
        .collect()
}
