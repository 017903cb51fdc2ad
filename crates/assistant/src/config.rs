//! Engine configuration.
//!
//! Passed explicitly into `Assistant::new`; nothing here is global.

use pipeline::{DEFAULT_WEAK_SKILL_THRESHOLD, ExactMatcher, FuzzyMatcher, SkillMatcher};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown matcher '{0}' (expected 'fuzzy' or 'exact')")]
    UnknownMatcher(String),

    #[error("Weak skill threshold must be at most 100, got {0}")]
    ThresholdOutOfRange(u8),
}

/// Which `SkillMatcher` the engine uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatcherKind {
    #[default]
    Fuzzy,
    Exact,
}

impl MatcherKind {
    pub fn build(&self) -> Arc<dyn SkillMatcher> {
        match self {
            Self::Fuzzy => Arc::new(FuzzyMatcher),
            Self::Exact => Arc::new(ExactMatcher),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fuzzy => "fuzzy",
            Self::Exact => "exact",
        }
    }
}

impl fmt::Display for MatcherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MatcherKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fuzzy" => Ok(Self::Fuzzy),
            "exact" => Ok(Self::Exact),
            other => Err(ConfigError::UnknownMatcher(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Skills below this level are weak
    pub weak_skill_threshold: u8,
    pub matcher: MatcherKind,
}

impl EngineConfig {
    pub fn new(weak_skill_threshold: u8, matcher: MatcherKind) -> Result<Self, ConfigError> {
        if weak_skill_threshold > 100 {
            return Err(ConfigError::ThresholdOutOfRange(weak_skill_threshold));
        }
        Ok(Self {
            weak_skill_threshold,
            matcher,
        })
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weak_skill_threshold: DEFAULT_WEAK_SKILL_THRESHOLD,
            matcher: MatcherKind::Fuzzy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.weak_skill_threshold, 60);
        assert_eq!(config.matcher, MatcherKind::Fuzzy);
    }

    #[test]
    fn test_matcher_kind_from_str() {
        assert_eq!("fuzzy".parse::<MatcherKind>(), Ok(MatcherKind::Fuzzy));
        assert_eq!(" EXACT ".parse::<MatcherKind>(), Ok(MatcherKind::Exact));
        assert_eq!(
            "embedding".parse::<MatcherKind>(),
            Err(ConfigError::UnknownMatcher("embedding".to_string()))
        );
    }

    #[test]
    fn test_threshold_range() {
        assert!(EngineConfig::new(100, MatcherKind::Exact).is_ok());
        assert_eq!(
            EngineConfig::new(101, MatcherKind::Fuzzy),
            Err(ConfigError::ThresholdOutOfRange(101))
        );
    }

    #[test]
    fn test_build_matcher() {
        assert_eq!(MatcherKind::Fuzzy.build().name(), "FuzzyMatcher");
        assert_eq!(MatcherKind::Exact.build().name(), "ExactMatcher");
    }
}
