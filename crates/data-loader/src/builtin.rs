//! The demo catalog shipped with the binary.
//!
//! Used when no data directory is given, and as a fixture in tests.

use crate::types::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Catalog {
    /// The built-in demo data set
    pub fn builtin() -> Self {
        Catalog {
            skills: builtin_skills(),
            opportunities: builtin_opportunities(),
            candidates: builtin_candidates(),
            dashboard: Some(builtin_dashboard()),
        }
    }
}

pub fn builtin_skills() -> Vec<Skill> {
    vec![
        Skill::new("React Development", 85, "Frontend", Trend::Up),
        Skill::new("TypeScript", 70, "Programming", Trend::Up),
        Skill::new("System Design", 45, "Architecture", Trend::Stable),
        Skill::new("AI/ML Basics", 25, "Emerging Tech", Trend::Up),
        Skill::new("DevOps", 60, "Infrastructure", Trend::Stable),
        Skill::new("Data Structures", 80, "Programming", Trend::Stable),
    ]
}

pub fn builtin_opportunities() -> Vec<Opportunity> {
    vec![
        Opportunity {
            title: "AI-Powered Health Assistant".to_string(),
            description:
                "Build an AI assistant that helps users track and improve their health habits"
                    .to_string(),
            required_skills: strings(&["AI/ML Basics", "React Development", "Data Structures"]),
            difficulty: Difficulty::Intermediate,
            prize: "$5,000".to_string(),
            deadline: "2 weeks".to_string(),
        },
        Opportunity {
            title: "Smart Financial Dashboard".to_string(),
            description: "Create a React dashboard with TypeScript that visualizes financial data"
                .to_string(),
            required_skills: strings(&["React Development", "TypeScript", "Data Structures"]),
            difficulty: Difficulty::Beginner,
            prize: "$2,500".to_string(),
            deadline: "1 week".to_string(),
        },
        Opportunity {
            title: "Cloud Infrastructure Monitor".to_string(),
            description: "Build a system design solution for monitoring cloud infrastructure"
                .to_string(),
            required_skills: strings(&["System Design", "DevOps", "TypeScript"]),
            difficulty: Difficulty::Advanced,
            prize: "$10,000".to_string(),
            deadline: "3 weeks".to_string(),
        },
    ]
}

pub fn builtin_candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            name: "Sarah Chen".to_string(),
            skills: strings(&["Python", "Machine Learning", "Data Science"]),
            level: 88,
            avatar: "🧑‍💻".to_string(),
        },
        Candidate {
            name: "Marcus Rodriguez".to_string(),
            skills: strings(&["Backend Development", "System Design", "DevOps"]),
            level: 92,
            avatar: "👨‍💻".to_string(),
        },
        Candidate {
            name: "Emily Watson".to_string(),
            skills: strings(&["UI/UX Design", "Frontend", "Product Management"]),
            level: 85,
            avatar: "👩‍🎨".to_string(),
        },
    ]
}

pub fn builtin_dashboard() -> Dashboard {
    Dashboard {
        stats: UserStats {
            level: 12,
            xp: 2380,
            xp_to_next_level: 2500,
            current_streak: 7,
            longest_streak: 21,
            quests_completed: 47,
            hackathons_completed: 8,
            badges: vec![
                badge(
                    "first-quest",
                    "First Steps",
                    "Complete your first quest",
                    "🎯",
                    Rarity::Common,
                    true,
                ),
                badge(
                    "week-warrior",
                    "Week Warrior",
                    "7-day quest streak",
                    "🔥",
                    Rarity::Rare,
                    true,
                ),
                badge(
                    "code-ninja",
                    "Code Ninja",
                    "Complete 50 coding quests",
                    "🥷",
                    Rarity::Epic,
                    false,
                ),
                badge(
                    "hackathon-hero",
                    "Hackathon Hero",
                    "Win 10 hackathons",
                    "👑",
                    Rarity::Legendary,
                    false,
                ),
            ],
        },
        daily_quest: Some(Quest {
            id: "quest-001".to_string(),
            title: "Refactor React Component for Performance".to_string(),
            description: "Take this React component and optimize it by implementing React.memo, \
                useMemo, and useCallback where appropriate. \
                Focus on preventing unnecessary re-renders."
                .to_string(),
            difficulty: Difficulty::Intermediate,
            estimated_time: "15 min".to_string(),
            xp_reward: 150,
            category: "React Optimization".to_string(),
            completed: false,
            progress: 0,
        }),
        weekly_event: Some(WeeklyEvent {
            id: "hack-001".to_string(),
            title: "Build a Real-time Chat App".to_string(),
            description: "Create a modern chat application with real-time messaging, user \
                authentication, and a beautiful UI. Perfect for showcasing your full-stack skills!"
                .to_string(),
            theme: "Real-time Applications".to_string(),
            difficulty: Difficulty::Intermediate,
            duration: "48 hours".to_string(),
            participants: 1247,
            prizes: strings(&[
                "LinkedIn Premium (1 month)",
                "Exclusive Badge",
                "Career Mentorship",
            ]),
            skills: strings(&["React", "WebSockets", "Node.js", "Database Design"]),
            starts_in: "2 days".to_string(),
            status: EventStatus::Upcoming,
        }),
    }
}

fn badge(
    id: &str,
    name: &str,
    description: &str,
    icon: &str,
    rarity: Rarity,
    unlocked: bool,
) -> Badge {
    Badge {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        rarity,
        unlocked,
    }
}
