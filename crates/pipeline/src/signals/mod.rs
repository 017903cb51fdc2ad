//! Signal implementations for teammate recommendation.
//!
//! Each signal is one reason a candidate might be worth suggesting.
//! `CandidateRecommender` includes a candidate when any signal fires.

pub mod opportunity_fit;
pub mod weak_skill;

// Re-export for convenience
pub use opportunity_fit::OpportunityFitSignal;
pub use weak_skill::WeakSkillSignal;
