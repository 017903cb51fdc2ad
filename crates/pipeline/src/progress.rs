//! Progress indicators for the skill graph and stats card.

use data_loader::Badge;
use std::fmt;

/// Coarse band a skill level falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkillTier {
    Novice,
    Developing,
    Proficient,
    Expert,
}

impl SkillTier {
    /// Expert >= 80, Proficient >= 60, Developing >= 40, else Novice
    pub fn from_level(level: u8) -> Self {
        match level {
            80.. => Self::Expert,
            60..=79 => Self::Proficient,
            40..=59 => Self::Developing,
            _ => Self::Novice,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Novice => "Novice",
            Self::Developing => "Developing",
            Self::Proficient => "Proficient",
            Self::Expert => "Expert",
        }
    }
}

impl fmt::Display for SkillTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Percent of the way to the next level, rounded and capped at 100.
pub fn xp_progress_percent(xp: u32, xp_to_next_level: u32) -> u8 {
    if xp_to_next_level == 0 {
        return 100;
    }
    let xp = u64::from(xp);
    let target = u64::from(xp_to_next_level);
    ((200 * xp + target) / (2 * target)).min(100) as u8
}

pub fn unlocked_badges(badges: &[Badge]) -> Vec<&Badge> {
    badges.iter().filter(|b| b.unlocked).collect()
}
