//! Parser for catalog data files.
//!
//! A catalog directory holds plain JSON documents:
//! - skills.json: array of `{ name, level, category, trend }`
//! - opportunities.json: array of
//!   `{ title, description, requiredSkills, difficulty, prize, deadline }`
//! - candidates.json: array of `{ name, skills, level, avatar }`
//! - dashboard.json (optional): `{ stats, dailyQuest, weeklyEvent }`
//!
//! Shape errors (missing fields, wrong types) surface here. Range checks
//! live in `Catalog::validate`.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read a whole file, turning a missing file into `FileNotFound`
fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Deserialize `content` as `T`, reporting errors against `file`
pub fn parse_json<T: DeserializeOwned>(file: &str, content: &str) -> Result<T> {
    serde_json::from_str(content).map_err(|e| DataLoadError::ParseError {
        file: file.to_string(),
        line: e.line(),
        reason: e.to_string(),
    })
}

fn parse_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = read_to_string(path)?;
    let parsed = parse_json(&file_label(path), &content)?;
    tracing::debug!("Parsed {}", path.display());
    Ok(parsed)
}

/// Parse the skills.json file
pub fn parse_skills(path: &Path) -> Result<Vec<Skill>> {
    parse_file(path)
}

/// Parse the opportunities.json file
pub fn parse_opportunities(path: &Path) -> Result<Vec<Opportunity>> {
    parse_file(path)
}

/// Parse the candidates.json file
pub fn parse_candidates(path: &Path) -> Result<Vec<Candidate>> {
    parse_file(path)
}

/// Parse the dashboard.json file
pub fn parse_dashboard(path: &Path) -> Result<Dashboard> {
    parse_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skill_array() {
        let json = r#"[
            { "name": "TypeScript", "level": 70, "category": "Programming", "trend": "up" },
            { "name": "DevOps", "level": 60, "category": "Infrastructure", "trend": "stable" }
        ]"#;

        let skills: Vec<Skill> = parse_json("skills.json", json).unwrap();
        assert_eq!(skills.len(), 2);
        assert_eq!(skills[0].name, "TypeScript");
        assert_eq!(skills[0].trend, Trend::Up);
        assert_eq!(skills[1].level, 60);
    }

    #[test]
    fn test_parse_opportunity_uses_camel_case() {
        let json = r#"[{
            "title": "Cloud Infrastructure Monitor",
            "description": "Monitor cloud infrastructure",
            "requiredSkills": ["System Design", "DevOps", "TypeScript"],
            "difficulty": "Advanced",
            "prize": "$10,000",
            "deadline": "3 weeks"
        }]"#;

        let opportunities: Vec<Opportunity> = parse_json("opportunities.json", json).unwrap();
        assert_eq!(opportunities[0].required_skills.len(), 3);
        assert_eq!(opportunities[0].difficulty, Difficulty::Advanced);
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        // No "avatar"
        let json = r#"[
            { "name": "Sarah Chen", "skills": ["Python"], "level": 88 }
        ]"#;

        let err = parse_json::<Vec<Candidate>>("candidates.json", json).unwrap_err();
        match err {
            DataLoadError::ParseError { file, line, reason } => {
                assert_eq!(file, "candidates.json");
                assert!(line >= 1);
                assert!(reason.contains("avatar"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_trend_is_parse_error() {
        let json =
            r#"[{ "name": "Go", "level": 10, "category": "Programming", "trend": "sideways" }]"#;
        assert!(matches!(
            parse_json::<Vec<Skill>>("skills.json", json),
            Err(DataLoadError::ParseError { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = parse_skills(Path::new("/definitely/not/here/skills.json")).unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }
}
