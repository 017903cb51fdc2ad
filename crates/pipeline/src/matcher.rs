//! Skill matching rules.
//!
//! The default rule is deliberately loose: two skills are related when
//! either name contains the other, ignoring case. That lets
//! "React" line up with "React Development" and "Frontend" with
//! "Frontend Performance".

use crate::traits::SkillMatcher;

/// Bidirectional, case-insensitive substring containment.
///
/// Names are compared as given. An empty name is contained in every skill,
/// and padding is significant, so `Catalog::validate` rejects both at load
/// time.
pub fn skills_related(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

/// The default matcher, backed by [`skills_related`]
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyMatcher;

impl SkillMatcher for FuzzyMatcher {
    fn name(&self) -> &str {
        "FuzzyMatcher"
    }

    fn related(&self, a: &str, b: &str) -> bool {
        skills_related(a, b)
    }
}

/// Case-insensitive equality.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatcher;

impl SkillMatcher for ExactMatcher {
    fn name(&self) -> &str {
        "ExactMatcher"
    }

    fn related(&self, a: &str, b: &str) -> bool {
        a.to_lowercase() == b.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skills_related_both_directions() {
        assert!(skills_related("React", "React Development"));
        assert!(skills_related("React Development", "React"));
        assert!(skills_related("typescript", "TypeScript"));
        assert!(!skills_related("Python", "TypeScript"));
    }

    #[test]
    fn test_skills_related_is_substring_not_word_match() {
        // Loose on purpose: "Java" sits inside "JavaScript"
        assert!(skills_related("Java", "JavaScript"));
        assert!(skills_related("Design", "UI/UX Design"));
    }

    #[test]
    fn test_padding_is_significant() {
        assert!(!skills_related("React ", "Reactive"));
        assert!(!skills_related(" DevOps", "DevOps"));
        assert!(skills_related("React ", "React Development"));
    }

    #[test]
    fn test_empty_is_contained_in_everything() {
        assert!(skills_related("", "DevOps"));
        assert!(skills_related("DevOps", ""));
    }

    #[test]
    fn test_exact_matcher() {
        let matcher = ExactMatcher;
        assert!(matcher.related("System Design", "system design"));
        assert!(!matcher.related("System Design", "Design"));
        assert!(!matcher.related("System Design ", "System Design"));
    }
}
