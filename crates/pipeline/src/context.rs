//! Per-request view of the user's skill profile.
//!
//! Built once from the catalog's skill list so that ranking and
//! recommendation don't recompute weak skills for every candidate.

use data_loader::Skill;

/// Skills below this level count as weak
pub const DEFAULT_WEAK_SKILL_THRESHOLD: u8 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserContext {
    pub skills: Vec<Skill>,
    /// Names of skills with `level < weak_threshold`, in profile order
    pub weak_skills: Vec<String>,
    pub weak_threshold: u8,
}

impl UserContext {
    pub fn new(skills: Vec<Skill>, weak_threshold: u8) -> Self {
        let weak_skills = skills
            .iter()
            .filter(|skill| skill.level < weak_threshold)
            .map(|skill| skill.name.clone())
            .collect();
        Self {
            skills,
            weak_skills,
            weak_threshold,
        }
    }

    /// Context using [`DEFAULT_WEAK_SKILL_THRESHOLD`]
    pub fn from_skills(skills: &[Skill]) -> Self {
        Self::new(skills.to_vec(), DEFAULT_WEAK_SKILL_THRESHOLD)
    }

    pub fn skill_names(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(|s| s.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::Trend;

    #[test]
    fn test_weak_skills_below_threshold() {
        let context = UserContext::from_skills(&[
            Skill::new("React Development", 85, "Frontend", Trend::Up),
            Skill::new("System Design", 45, "Architecture", Trend::Stable),
            Skill::new("AI/ML Basics", 25, "Emerging Tech", Trend::Up),
            // Exactly at the threshold is not weak
            Skill::new("DevOps", 60, "Infrastructure", Trend::Stable),
        ]);

        assert_eq!(context.weak_skills, vec!["System Design", "AI/ML Basics"]);
    }

    #[test]
    fn test_custom_threshold() {
        let skills = vec![Skill::new("DevOps", 60, "Infrastructure", Trend::Stable)];
        let context = UserContext::new(skills, 61);
        assert_eq!(context.weak_skills, vec!["DevOps"]);
    }
}
