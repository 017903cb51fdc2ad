//! Core domain types for the skill dashboard.
//!
//! This module defines the data the recommendation engine consumes:
//! - the user's skill profile
//! - the opportunity (hackathon) catalog
//! - candidate teammates
//! - dashboard extras (stats, badges, daily quest, weekly event)
//!
//! All of it is loaded once and then treated as immutable.

use serde::Deserialize;
use std::fmt;

// =============================================================================
// Skill-related Types
// =============================================================================

/// Proficiency in a named competency.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency from 0 to 100
    pub level: u8,
    pub category: String,
    pub trend: Trend,
}

impl Skill {
    pub fn new(
        name: impl Into<String>,
        level: u8,
        category: impl Into<String>,
        trend: Trend,
    ) -> Self {
        Self {
            name: name.into(),
            level,
            category: category.into(),
            trend,
        }
    }
}

/// Direction a skill level has been moving recently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Stable,
    Down,
}

// =============================================================================
// Opportunity-related Types
// =============================================================================

/// A hackathon or challenge the user could enter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub title: String,
    pub description: String,
    /// Ordered list of skill names; may be empty
    pub required_skills: Vec<String>,
    pub difficulty: Difficulty,
    pub prize: String,
    pub deadline: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Candidate Type
// =============================================================================

/// A potential teammate.
///
/// `skills` is free text ("Backend Development", "Machine Learning"), which is
/// why matching against it is fuzzy rather than exact.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub skills: Vec<String>,
    /// Overall level from 0 to 100
    pub level: u8,
    pub avatar: String,
}

// =============================================================================
// Dashboard Types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub rarity: Rarity,
    pub unlocked: bool,
}

/// Level, XP and streak counters shown on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub level: u32,
    pub xp: u32,
    pub xp_to_next_level: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub quests_completed: u32,
    pub hackathons_completed: u32,
    #[serde(default)]
    pub badges: Vec<Badge>,
}

/// The daily quest card
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub estimated_time: String,
    pub xp_reward: u32,
    pub category: String,
    pub completed: bool,
    /// Percent complete, 0 to 100
    pub progress: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Active,
    Completed,
}

/// The weekly hackathon promo card
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub theme: String,
    pub difficulty: Difficulty,
    pub duration: String,
    pub participants: u32,
    pub prizes: Vec<String>,
    pub skills: Vec<String>,
    pub starts_in: String,
    pub status: EventStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub stats: UserStats,
    pub daily_quest: Option<Quest>,
    pub weekly_event: Option<WeeklyEvent>,
}

// =============================================================================
// Catalog - The In-Memory Data Set
// =============================================================================

/// Everything the engine needs, supplied by the caller at run time.
///
/// The catalog is never mutated after loading. Callers usually wrap it in
/// an `Arc` and share it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub skills: Vec<Skill>,
    pub opportunities: Vec<Opportunity>,
    pub candidates: Vec<Candidate>,
    pub dashboard: Option<Dashboard>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Find an opportunity by title.
    ///
    /// An exact (case-insensitive) title wins; otherwise the first title
    /// containing `query` is returned.
    pub fn find_opportunity(&self, query: &str) -> Option<&Opportunity> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }
        self.opportunities
            .iter()
            .find(|o| o.title.to_lowercase() == query)
            .or_else(|| {
                self.opportunities
                    .iter()
                    .find(|o| o.title.to_lowercase().contains(&query))
            })
    }

    /// Get a user skill by name (case-insensitive)
    ///
    /// Uses the same folding as the duplicate check in `validate`, so any
    /// name that counts as a duplicate also resolves here.
    pub fn get_skill(&self, name: &str) -> Option<&Skill> {
        let name = name.to_lowercase();
        self.skills.iter().find(|s| s.name.to_lowercase() == name)
    }

    /// (skills, opportunities, candidates)
    pub fn counts(&self) -> (usize, usize, usize) {
        (
            self.skills.len(),
            self.opportunities.len(),
            self.candidates.len(),
        )
    }
}
