//! Signal for candidates who fill gaps in the user's profile.
//!
//! This one ignores the opportunity entirely: a teammate strong where the
//! user is weak is worth suggesting for any hackathon.

use crate::context::UserContext;
use crate::traits::{Signal, SignalKind, SkillMatcher};
use data_loader::{Candidate, Opportunity};
use std::sync::Arc;

/// Fires when a candidate skill is related to one of the user's weak skills.
pub struct WeakSkillSignal {
    matcher: Arc<dyn SkillMatcher>,
}

impl WeakSkillSignal {
    pub fn new(matcher: Arc<dyn SkillMatcher>) -> Self {
        Self { matcher }
    }
}

impl Signal for WeakSkillSignal {
    fn name(&self) -> &str {
        "WeakSkillSignal"
    }

    fn kind(&self) -> SignalKind {
        SignalKind::WeakSkillCoverage
    }

    fn evidence(
        &self,
        candidate: &Candidate,
        _opportunity: &Opportunity,
        context: &UserContext,
    ) -> Vec<String> {
        if context.weak_skills.is_empty() {
            return Vec::new();
        }
        candidate
            .skills
            .iter()
            .filter(|skill| {
                context
                    .weak_skills
                    .iter()
                    .any(|weak| self.matcher.related(skill, weak))
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::FuzzyMatcher;
    use data_loader::{Difficulty, Skill, Trend};

    fn opportunity() -> Opportunity {
        Opportunity {
            title: "Smart Financial Dashboard".to_string(),
            description: String::new(),
            required_skills: vec!["React Development".to_string()],
            difficulty: Difficulty::Beginner,
            prize: "$2,500".to_string(),
            deadline: "1 week".to_string(),
        }
    }

    fn candidate(skills: &[&str]) -> Candidate {
        Candidate {
            name: "Test".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            level: 80,
            avatar: "T".to_string(),
        }
    }

    #[test]
    fn test_weak_skill_evidence() {
        let context = UserContext::from_skills(&[
            Skill::new("System Design", 45, "Architecture", Trend::Stable),
            Skill::new("React Development", 85, "Frontend", Trend::Up),
        ]);
        let signal = WeakSkillSignal::new(Arc::new(FuzzyMatcher));

        let evidence = signal.evidence(
            &candidate(&["Backend Development", "System Design"]),
            &opportunity(),
            &context,
        );
        assert_eq!(evidence, vec!["System Design"]);

        // Strong skills don't count
        assert!(signal
            .evidence(&candidate(&["React"]), &opportunity(), &context)
            .is_empty());
    }

    #[test]
    fn test_no_weak_skills_never_fires() {
        let strong = Skill::new("DevOps", 90, "Infrastructure", Trend::Up);
        let context = UserContext::from_skills(&[strong]);
        let signal = WeakSkillSignal::new(Arc::new(FuzzyMatcher));
        assert!(signal
            .evidence(&candidate(&["DevOps"]), &opportunity(), &context)
            .is_empty());
    }
}
