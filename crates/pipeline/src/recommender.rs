//! The CandidateRecommender combines signals into teammate suggestions.
//!
//! Signals are added with a builder, like filters in a pipeline, but they
//! combine with OR: a candidate is kept as soon as one signal fires.

use crate::context::UserContext;
use crate::traits::{Signal, SignalKind, SkillMatcher};
use crate::signals::{OpportunityFitSignal, WeakSkillSignal};
use data_loader::{Candidate, Opportunity};
use std::sync::Arc;

/// A suggested teammate and the evidence behind the suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateMatch {
    pub candidate: Candidate,
    /// Candidate skills related to the opportunity's requirements
    pub opportunity_fit: Vec<String>,
    /// Candidate skills related to the user's weak skills
    pub weak_skill_coverage: Vec<String>,
}

impl CandidateMatch {
    fn new(candidate: &Candidate) -> Self {
        Self {
            candidate: candidate.clone(),
            opportunity_fit: Vec::new(),
            weak_skill_coverage: Vec::new(),
        }
    }

    pub fn fits_opportunity(&self) -> bool {
        !self.opportunity_fit.is_empty()
    }

    pub fn covers_weak_skill(&self) -> bool {
        !self.weak_skill_coverage.is_empty()
    }

    fn record(&mut self, kind: SignalKind, evidence: Vec<String>) {
        let slot = match kind {
            SignalKind::OpportunityFit => &mut self.opportunity_fit,
            SignalKind::WeakSkillCoverage => &mut self.weak_skill_coverage,
        };
        for skill in evidence {
            if !slot.contains(&skill) {
                slot.push(skill);
            }
        }
    }
}

/// Chains signals into a boolean inclusion rule.
///
/// ## Usage
/// ```ignore
/// let recommender = CandidateRecommender::new()
///     .add_signal(OpportunityFitSignal::new(matcher.clone()))
///     .add_signal(WeakSkillSignal::new(matcher.clone()));
///
/// let partners = recommender.recommend(&catalog.candidates, &opportunity, &context);
/// ```
///
/// A recommender with no signals suggests nobody.
pub struct CandidateRecommender {
    signals: Vec<Box<dyn Signal>>,
}

impl CandidateRecommender {
    /// Create a new CandidateRecommender with no signals.
    pub fn new() -> Self {
        Self {
            signals: Vec::new(),
        }
    }

    /// Opportunity fit OR weak-skill coverage, both using `matcher`
    pub fn with_default_signals(matcher: Arc<dyn SkillMatcher>) -> Self {
        Self::new()
            .add_signal(OpportunityFitSignal::new(matcher.clone()))
            .add_signal(WeakSkillSignal::new(matcher))
    }

    /// Add a signal (builder pattern).
    pub fn add_signal(mut self, signal: impl Signal + 'static) -> Self {
        self.signals.push(Box::new(signal));
        self
    }

    /// Suggest teammates for `opportunity`.
    ///
    /// # Returns
    /// The candidates at least one signal fired for, in catalog order,
    /// each with the evidence every signal produced. No scoring.
    pub fn recommend(
        &self,
        candidates: &[Candidate],
        opportunity: &Opportunity,
        context: &UserContext,
    ) -> Vec<CandidateMatch> {
        let mut matches = Vec::new();
        for candidate in candidates {
            let mut candidate_match = CandidateMatch::new(candidate);
            let mut fired = false;
            for signal in &self.signals {
                let evidence = signal.evidence(candidate, opportunity, context);
                if evidence.is_empty() {
                    continue;
                }
                tracing::trace!(
                    "{} fired for {} ({} skills)",
                    signal.name(),
                    candidate.name,
                    evidence.len()
                );
                fired = true;
                candidate_match.record(signal.kind(), evidence);
            }
            if fired {
                matches.push(candidate_match);
            }
        }

        tracing::debug!(
            "Recommended {} of {} candidates for '{}'",
            matches.len(),
            candidates.len(),
            opportunity.title
        );
        matches
    }
}

impl Default for CandidateRecommender {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::FuzzyMatcher;
    use data_loader::{Difficulty, Skill, Trend};

    fn candidate(name: &str, skills: &[&str]) -> Candidate {
        Candidate {
            name: name.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            level: 85,
            avatar: "?".to_string(),
        }
    }

    fn opportunity(required: &[&str]) -> Opportunity {
        Opportunity {
            title: "Test Hackathon".to_string(),
            description: String::new(),
            required_skills: required.iter().map(|s| s.to_string()).collect(),
            difficulty: Difficulty::Beginner,
            prize: "$500".to_string(),
            deadline: "1 week".to_string(),
        }
    }

    fn context() -> UserContext {
        UserContext::from_skills(&[
            Skill::new("React Development", 85, "Frontend", Trend::Up),
            Skill::new("System Design", 45, "Architecture", Trend::Stable),
        ])
    }

    #[test]
    fn test_empty_recommender_suggests_nobody() {
        let recommender = CandidateRecommender::new();
        let matches = recommender.recommend(
            &[candidate("A", &["React"])],
            &opportunity(&["React"]),
            &context(),
        );
        assert!(matches.is_empty());
    }

    #[test]
    fn test_or_semantics_and_catalog_order() {
        let recommender = CandidateRecommender::with_default_signals(Arc::new(FuzzyMatcher));
        let candidates = vec![
            candidate("Gap Filler", &["System Design"]),
            candidate("Unrelated", &["Painting"]),
            candidate("Fit", &["Frontend"]),
            candidate("Both", &["Frontend", "System Design"]),
        ];

        let target = opportunity(&["Frontend Performance"]);
        let matches = recommender.recommend(&candidates, &target, &context());
        let names: Vec<&str> = matches.iter().map(|m| m.candidate.name.as_str()).collect();
        assert_eq!(names, vec!["Gap Filler", "Fit", "Both"]);

        assert!(!matches[0].fits_opportunity());
        assert!(matches[0].covers_weak_skill());

        assert!(matches[1].fits_opportunity());
        assert!(!matches[1].covers_weak_skill());

        assert_eq!(matches[2].opportunity_fit, vec!["Frontend"]);
        assert_eq!(matches[2].weak_skill_coverage, vec!["System Design"]);
    }

    #[test]
    fn test_empty_catalog() {
        let recommender = CandidateRecommender::with_default_signals(Arc::new(FuzzyMatcher));
        assert!(recommender
            .recommend(&[], &opportunity(&["React"]), &context())
            .is_empty());
    }

    #[test]
    fn test_duplicate_evidence_is_recorded_once() {
        let recommender = CandidateRecommender::new()
            .add_signal(OpportunityFitSignal::new(Arc::new(FuzzyMatcher)))
            .add_signal(OpportunityFitSignal::new(Arc::new(FuzzyMatcher)));

        let matches = recommender.recommend(
            &[candidate("A", &["React"])],
            &opportunity(&["React Development"]),
            &context(),
        );
        assert_eq!(matches[0].opportunity_fit, vec!["React"]);
    }
}
