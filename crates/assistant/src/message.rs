//! Narrative messages shown by the assistant.
//!
//! Pure string composition over results the ranker and recommender already
//! produced. Nothing in here calls a matcher.

use pipeline::{CandidateMatch, MatchResult};

pub const GREETING: &str = "Hey there! I'm Pixie, your friendly AI assistant. \
    I've analyzed your skill profile and found some exciting opportunities for you!";

/// Summary for a selected opportunity: fit, gaps, reward and deadline.
pub fn opportunity_message(result: &MatchResult) -> String {
    let opportunity = &result.opportunity;
    let strong_in = if result.matching_skills.is_empty() {
        "some skills".to_string()
    } else {
        result.matching_skills.join(", ")
    };
    let missing = result.missing_skills();

    let mut message = format!(
        "Great choice! This {} hackathon has a {}% match with your skills. ",
        opportunity.difficulty.as_str().to_lowercase(),
        result.match_score
    );
    message.push_str(&format!("You're already strong in: {strong_in}. "));
    if !missing.is_empty() {
        message.push_str(&format!(
            "You might want to find teammates who excel in: {}. ",
            missing.join(", ")
        ));
    }
    message.push_str(&format!(
        "With {} left and a {} prize, this could be perfect for you!",
        opportunity.deadline, opportunity.prize
    ));
    message
}

/// Summary for a suggested teammate, built from the recorded evidence.
pub fn candidate_message(candidate_match: &CandidateMatch) -> String {
    let candidate = &candidate_match.candidate;

    let mut message = format!("{} could be an amazing teammate! ", candidate.name);
    message.push_str(&format!(
        "With a {}% skill level, they bring expertise in {}. ",
        candidate.level,
        candidate.skills.join(", ")
    ));
    if candidate_match.fits_opportunity() {
        message.push_str(&format!(
            "They specifically excel in {} which are crucial for this hackathon. ",
            candidate_match.opportunity_fit.join(" and ")
        ));
    }
    if candidate_match.covers_weak_skill() {
        message.push_str(&format!(
            "They also cover {} where your profile is still developing. ",
            candidate_match.weak_skill_coverage.join(" and ")
        ));
    }
    message.push_str("Together, you could make a winning team!");
    message
}
