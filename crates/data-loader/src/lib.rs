//! # Data Loader Crate
//!
//! This crate owns the data behind the skill dashboard: the user's skill
//! profile, the hackathon catalog, candidate teammates and the dashboard
//! extras (stats, badges, daily quest, weekly event).
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Skill, Opportunity, Candidate, Catalog)
//! - **parser**: Parse JSON documents into Rust structs
//! - **index**: Load a catalog directory and validate it
//! - **builtin**: The demo catalog used when no directory is supplied
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_files(Path::new("data/demo"))?;
//! let (skills, opportunities, candidates) = catalog.counts();
//! ```

// Public modules
pub mod builtin;
pub mod error;
pub mod index;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use index::MAX_LEVEL;
pub use types::{
    Badge, Candidate, Catalog, Dashboard, Difficulty, EventStatus, Opportunity, Quest, Rarity,
    Skill, Trend, UserStats, WeeklyEvent,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();
        assert_eq!(catalog.counts(), (0, 0, 0));
        assert!(catalog.dashboard.is_none());
    }

    #[test]
    fn test_builtin_counts() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.counts(), (6, 3, 3));

        let dashboard = catalog.dashboard.unwrap();
        assert_eq!(dashboard.stats.badges.len(), 4);
        assert!(dashboard.daily_quest.is_some());
        assert!(dashboard.weekly_event.is_some());
    }

    #[test]
    fn test_find_opportunity() {
        let catalog = Catalog::builtin();

        let exact = catalog.find_opportunity("smart financial dashboard").unwrap();
        assert_eq!(exact.title, "Smart Financial Dashboard");

        let partial = catalog.find_opportunity("cloud").unwrap();
        assert_eq!(partial.title, "Cloud Infrastructure Monitor");

        assert!(catalog.find_opportunity("underwater basket weaving").is_none());
        assert!(catalog.find_opportunity("   ").is_none());
    }

    #[test]
    fn test_get_skill_case_insensitive() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get_skill("devops").unwrap().level, 60);
        assert!(catalog.get_skill("Rust").is_none());
    }

    #[test]
    fn test_get_skill_folds_non_ascii() {
        let catalog = Catalog {
            skills: vec![Skill::new("Ünicode Handling", 40, "Programming", Trend::Up)],
            ..Catalog::new()
        };
        assert_eq!(catalog.get_skill("ÜNICODE HANDLING").unwrap().level, 40);
        assert_eq!(catalog.get_skill("ünicode handling").unwrap().level, 40);
    }
}
