//! Opportunity ranking.
//!
//! Scores every opportunity by the share of its required skills the user
//! already covers, then orders the catalog by that score.

use crate::context::UserContext;
use crate::traits::SkillMatcher;
use data_loader::Opportunity;
use rayon::prelude::*;
use std::sync::Arc;

/// An opportunity together with how well the user fits it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub opportunity: Opportunity,
    /// Required skills the user covers, in `required_skills` order
    pub matching_skills: Vec<String>,
    /// 0 to 100
    pub match_score: u8,
}

impl MatchResult {
    /// Required skills the user doesn't cover, in `required_skills` order
    pub fn missing_skills(&self) -> Vec<&str> {
        self.opportunity
            .required_skills
            .iter()
            .filter(|skill| !self.matching_skills.contains(skill))
            .map(|skill| skill.as_str())
            .collect()
    }
}

/// `round(100 * matched / required)`, with 0 for an empty requirement list.
///
/// Integer arithmetic, rounding halves up.
pub fn match_score(matched: usize, required: usize) -> u8 {
    if required == 0 {
        return 0;
    }
    let matched = matched.min(required);
    ((200 * matched + required) / (2 * required)) as u8
}

/// Ranks opportunities against a user's skills.
///
/// ## Performance Note
/// Per-opportunity scoring runs on Rayon. `collect` keeps catalog order,
/// and the sort afterwards is stable, so output is deterministic.
#[derive(Clone)]
pub struct OpportunityRanker {
    matcher: Arc<dyn SkillMatcher>,
}

impl OpportunityRanker {
    pub fn new(matcher: Arc<dyn SkillMatcher>) -> Self {
        Self { matcher }
    }

    /// Score and order `catalog`, best match first.
    ///
    /// Ties keep their relative catalog order.
    pub fn rank(&self, context: &UserContext, catalog: &[Opportunity]) -> Vec<MatchResult> {
        let mut results: Vec<MatchResult> = catalog
            .par_iter()
            .map(|opportunity| self.score_opportunity(opportunity, context))
            .collect();

        // sort_by is stable
        results.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        tracing::debug!(
            "Ranked {} opportunities with {} (best score: {})",
            results.len(),
            self.matcher.name(),
            results.first().map(|r| r.match_score).unwrap_or(0)
        );
        results
    }

    /// Score one opportunity
    pub fn score_opportunity(
        &self,
        opportunity: &Opportunity,
        context: &UserContext,
    ) -> MatchResult {
        let (matching_skills, match_score) =
            self.score_skills(context, &opportunity.required_skills);
        MatchResult {
            opportunity: opportunity.clone(),
            matching_skills,
            match_score,
        }
    }

    /// Match an arbitrary required-skill list against the user.
    ///
    /// # Returns
    /// (required skills the user covers, score 0..=100)
    pub fn score_skills(&self, context: &UserContext, required: &[String]) -> (Vec<String>, u8) {
        let matching: Vec<String> = required
            .iter()
            .filter(|required_skill| {
                context
                    .skill_names()
                    .any(|user_skill| self.matcher.related(user_skill, required_skill))
            })
            .cloned()
            .collect();
        let score = match_score(matching.len(), required.len());
        (matching, score)
    }
}
