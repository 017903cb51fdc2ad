//! # Recommendation Assistant
//!
//! This module wires the catalog and engine config into the matching
//! pipeline:
//! 1. Build the user context (weak skills) once
//! 2. Rank opportunities on demand
//! 3. Suggest teammates for a selected opportunity
//! 4. Compose messages from those results
//!
//! Every call recomputes from the immutable catalog; there is no cache.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Result, anyhow};
use tracing::debug;

use data_loader::{Catalog, Opportunity, WeeklyEvent};
use pipeline::{CandidateMatch, CandidateRecommender, MatchResult, OpportunityRanker, UserContext};

use crate::config::EngineConfig;
use crate::message;

/// How well the user fits the weekly event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventMatch {
    pub event: WeeklyEvent,
    pub matching_skills: Vec<String>,
    pub match_score: u8,
}

/// Main entry point for callers presenting recommendations
#[derive(Clone)]
pub struct Assistant {
    catalog: Arc<Catalog>,
    config: EngineConfig,
    context: UserContext,
    ranker: OpportunityRanker,
    recommender: Arc<CandidateRecommender>,
}

impl Assistant {
    /// Create a new assistant over `catalog`
    ///
    /// # Arguments
    /// * `catalog` - Shared, already validated data set
    /// * `config` - Matcher choice and weak-skill threshold
    pub fn new(catalog: Arc<Catalog>, config: EngineConfig) -> Self {
        let matcher = config.matcher.build();
        let context = UserContext::new(catalog.skills.clone(), config.weak_skill_threshold);
        debug!(
            "Assistant using {} with {} weak skills (threshold {})",
            matcher.name(),
            context.weak_skills.len(),
            config.weak_skill_threshold
        );

        Self {
            ranker: OpportunityRanker::new(matcher.clone()),
            recommender: Arc::new(CandidateRecommender::with_default_signals(matcher)),
            catalog,
            config,
            context,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    pub fn context(&self) -> &UserContext {
        &self.context
    }

    /// All opportunities, best match first
    pub fn recommendations(&self) -> Vec<MatchResult> {
        let start_time = Instant::now();
        let ranked = self.ranker.rank(&self.context, &self.catalog.opportunities);
        debug!(
            "Ranked {} opportunities in {:.2?}",
            ranked.len(),
            start_time.elapsed()
        );
        ranked
    }

    /// Resolve a selection to a scored opportunity.
    ///
    /// `query` is either a 1-based position in `recommendations()` or a
    /// title (exact first, then substring, case-insensitive).
    pub fn select(&self, query: &str) -> Result<MatchResult> {
        if let Ok(position) = query.trim().parse::<usize>() {
            let ranked = self.recommendations();
            return position
                .checked_sub(1)
                .and_then(|index| ranked.into_iter().nth(index))
                .ok_or_else(|| {
                    anyhow!(
                        "No opportunity at rank {} ({} available)",
                        position,
                        self.catalog.opportunities.len()
                    )
                });
        }

        let opportunity = self
            .catalog
            .find_opportunity(query)
            .ok_or_else(|| anyhow!("No opportunity matching '{}'", query))?;
        Ok(self.ranker.score_opportunity(opportunity, &self.context))
    }

    /// Suggested teammates for `opportunity`, in catalog order
    pub fn partners_for(&self, opportunity: &Opportunity) -> Vec<CandidateMatch> {
        let start_time = Instant::now();
        let partners = self
            .recommender
            .recommend(&self.catalog.candidates, opportunity, &self.context);
        debug!(
            "Found {} partners for '{}' in {:.2?}",
            partners.len(),
            opportunity.title,
            start_time.elapsed()
        );
        partners
    }

    /// The weekly event scored like any other opportunity, if there is one
    pub fn featured_event_match(&self) -> Option<EventMatch> {
        let event = self.catalog.dashboard.as_ref()?.weekly_event.as_ref()?;
        let (matching_skills, match_score) = self.ranker.score_skills(&self.context, &event.skills);
        Some(EventMatch {
            event: event.clone(),
            matching_skills,
            match_score,
        })
    }

    pub fn greeting(&self) -> &'static str {
        message::GREETING
    }

    /// Message for a selected opportunity
    pub fn select_opportunity(&self, result: &MatchResult) -> String {
        message::opportunity_message(result)
    }

    /// Message for a selected teammate
    pub fn select_candidate(&self, candidate_match: &CandidateMatch) -> String {
        message::candidate_message(candidate_match)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatcherKind;

    fn assistant() -> Assistant {
        Assistant::new(Arc::new(Catalog::builtin()), EngineConfig::default())
    }

    #[test]
    fn test_recommendations_cover_catalog() {
        let assistant = assistant();
        let ranked = assistant.recommendations();
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].opportunity.title, "AI-Powered Health Assistant");
    }

    #[test]
    fn test_select_by_rank_and_title() {
        let assistant = assistant();

        let by_rank = assistant.select("3").unwrap();
        assert_eq!(by_rank.opportunity.title, "Cloud Infrastructure Monitor");

        let by_title = assistant.select("financial").unwrap();
        assert_eq!(by_title.opportunity.title, "Smart Financial Dashboard");
        assert_eq!(by_title.match_score, 100);

        assert!(assistant.select("0").is_err());
        assert!(assistant.select("4").is_err());
        assert!(assistant.select("quantum knitting").is_err());
    }

    #[test]
    fn test_partners_for_health_assistant() {
        let assistant = assistant();
        let selected = assistant.select("health").unwrap();
        let partners = assistant.partners_for(&selected.opportunity);

        // Marcus covers the weak System Design skill; nobody lists AI/ML
        // Basics, React Development or Data Structures.
        let names: Vec<&str> = partners.iter().map(|p| p.candidate.name.as_str()).collect();
        assert_eq!(names, vec!["Marcus Rodriguez"]);
        assert!(!partners[0].fits_opportunity());
        assert!(partners[0].covers_weak_skill());
    }

    #[test]
    fn test_threshold_changes_partners() {
        // Nothing is weak at threshold 0, so only opportunity fit counts
        let config = EngineConfig::new(0, MatcherKind::Fuzzy).unwrap();
        let assistant = Assistant::new(Arc::new(Catalog::builtin()), config);
        assert!(assistant.context().weak_skills.is_empty());

        let selected = assistant.select("health").unwrap();
        assert!(assistant.partners_for(&selected.opportunity).is_empty());
    }

    #[test]
    fn test_featured_event_match() {
        let event_match = assistant().featured_event_match().unwrap();
        // "React" is covered by "React Development"; WebSockets, Node.js and
        // Database Design are not.
        assert_eq!(event_match.matching_skills, vec!["React"]);
        assert_eq!(event_match.match_score, 25);
    }

    #[test]
    fn test_featured_event_absent() {
        let catalog = Catalog {
            dashboard: None,
            ..Catalog::builtin()
        };
        let assistant = Assistant::new(Arc::new(catalog), EngineConfig::default());
        assert!(assistant.featured_event_match().is_none());
    }

    #[test]
    fn test_messages_follow_results() {
        let assistant = assistant();
        let selected = assistant.select("cloud").unwrap();
        let message = assistant.select_opportunity(&selected);
        assert!(message.starts_with("Great choice! This advanced hackathon has a 100% match"));

        let partners = assistant.partners_for(&selected.opportunity);
        let message = assistant.select_candidate(&partners[0]);
        assert!(message.contains("System Design and DevOps"));
    }
}
