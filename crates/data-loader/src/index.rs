//! Catalog loading and validation.
//!
//! This module builds a `Catalog` from a data directory:
//! - Parse the three required files in parallel
//! - Attach the optional dashboard document
//! - Validate ranges and names before anything downstream sees the data

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashSet;
use std::path::Path;

/// Highest value a skill or candidate level may take
pub const MAX_LEVEL: u8 = 100;

impl Catalog {
    /// Load a catalog from a directory of JSON files
    ///
    /// Steps:
    /// 1. Parse skills, opportunities and candidates (in parallel)
    /// 2. Parse dashboard.json if it exists
    /// 3. Validate data integrity
    pub fn load_from_files(data_dir: &Path) -> Result<Self> {
        tracing::info!("Loading catalog from {}", data_dir.display());

        let skills_path = data_dir.join("skills.json");
        let opportunities_path = data_dir.join("opportunities.json");
        let candidates_path = data_dir.join("candidates.json");
        let dashboard_path = data_dir.join("dashboard.json");

        // Nested joins give three-way parallelism
        let ((skills, opportunities), candidates) = rayon::join(
            || {
                rayon::join(
                    || parser::parse_skills(&skills_path),
                    || parser::parse_opportunities(&opportunities_path),
                )
            },
            || parser::parse_candidates(&candidates_path),
        );

        let dashboard = if dashboard_path.exists() {
            Some(parser::parse_dashboard(&dashboard_path)?)
        } else {
            None
        };

        let catalog = Catalog {
            skills: skills?,
            opportunities: opportunities?,
            candidates: candidates?,
            dashboard,
        };

        let (skills, opportunities, candidates) = catalog.counts();
        tracing::info!(
            "Loaded {} skills, {} opportunities, {} candidates",
            skills,
            opportunities,
            candidates
        );

        catalog.validate()?;
        Ok(catalog)
    }

    /// Validate data integrity
    ///
    /// Check that:
    /// - Names and titles are non-empty
    /// - Levels are within 0..=100
    /// - Skill entries are non-empty and carry no surrounding whitespace
    /// - Skill names are unique (case-insensitive)
    /// - Dashboard counters are usable
    ///
    /// An opportunity with no required skills is accepted; ranking scores it 0.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for skill in &self.skills {
            if skill.name.trim().is_empty() {
                return Err(DataLoadError::ValidationError(
                    "skill with empty name".to_string(),
                ));
            }
            check_skill_entry("skill.name", &skill.name, &skill.name)?;
            check_level("skill.level", &skill.name, skill.level)?;
            if !seen.insert(skill.name.to_lowercase()) {
                return Err(DataLoadError::ValidationError(format!(
                    "duplicate skill: {}",
                    skill.name
                )));
            }
        }

        for opportunity in &self.opportunities {
            if opportunity.title.trim().is_empty() {
                return Err(DataLoadError::ValidationError(
                    "opportunity with empty title".to_string(),
                ));
            }
            for skill in &opportunity.required_skills {
                check_skill_entry("opportunity.requiredSkills", &opportunity.title, skill)?;
            }
            if opportunity.required_skills.is_empty() {
                tracing::warn!(
                    "Opportunity '{}' lists no required skills",
                    opportunity.title
                );
            }
        }

        for candidate in &self.candidates {
            if candidate.name.trim().is_empty() {
                return Err(DataLoadError::ValidationError(
                    "candidate with empty name".to_string(),
                ));
            }
            check_level("candidate.level", &candidate.name, candidate.level)?;
            for skill in &candidate.skills {
                check_skill_entry("candidate.skills", &candidate.name, skill)?;
            }
        }

        if let Some(dashboard) = &self.dashboard {
            if dashboard.stats.xp_to_next_level == 0 {
                return Err(DataLoadError::InvalidValue {
                    field: "stats.xpToNextLevel".to_string(),
                    value: "0".to_string(),
                });
            }
            if let Some(quest) = &dashboard.daily_quest {
                if quest.progress > 100 {
                    return Err(DataLoadError::InvalidValue {
                        field: "dailyQuest.progress".to_string(),
                        value: quest.progress.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

// Matching compares names verbatim, so "" or " React" would relate to
// skills the author never meant.
fn check_skill_entry(field: &str, owner: &str, skill: &str) -> Result<()> {
    if skill.is_empty() || skill.trim() != skill {
        return Err(DataLoadError::InvalidValue {
            field: field.to_string(),
            value: format!("{skill:?} ({owner})"),
        });
    }
    Ok(())
}

fn check_level(field: &str, owner: &str, level: u8) -> Result<()> {
    if level > MAX_LEVEL {
        return Err(DataLoadError::InvalidValue {
            field: field.to_string(),
            value: format!("{level} ({owner})"),
        });
    }
    Ok(())
}
