use anyhow::{Context, Result, bail};
use assistant::{Assistant, EngineConfig, MatcherKind};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{Catalog, Trend};
use pipeline::{CandidateMatch, MatchResult, SkillTier, unlocked_badges, xp_progress_percent};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// SkillQuest - hackathon and teammate recommendations from your skill profile
#[derive(Parser)]
#[command(name = "skillquest")]
#[command(about = "Rank hackathons against your skills and find teammates", long_about = None)]
struct Cli {
    /// Directory with skills.json, opportunities.json, candidates.json
    /// (and optionally dashboard.json). Uses the built-in demo data if omitted.
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Skills below this level count as weak
    #[arg(long, default_value_t = pipeline::DEFAULT_WEAK_SKILL_THRESHOLD)]
    weak_threshold: u8,

    /// Skill matching rule: fuzzy or exact
    #[arg(long, default_value = "fuzzy")]
    matcher: MatcherKind,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank hackathons by how well your skills cover them
    Recommend {
        /// Number of opportunities to show
        #[arg(long, default_value = "10")]
        limit: usize,

        /// Show the assistant's message for each opportunity
        #[arg(long)]
        explain: bool,
    },

    /// Suggest teammates for one hackathon
    Partners {
        /// Rank from `recommend` (1-based) or part of the title
        #[arg(long)]
        opportunity: String,
    },

    /// Show skill graph, level progress, badges, daily quest and weekly event
    Profile,

    /// Run benchmark to test performance
    Benchmark {
        /// Number of rank + recommend rounds
        #[arg(long, default_value = "1000")]
        iterations: usize,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let catalog = match &cli.data_dir {
        Some(dir) => Catalog::load_from_files(dir)
            .with_context(|| format!("Failed to load catalog from {}", dir.display()))?,
        None => {
            tracing::info!("No data directory given, using built-in demo catalog");
            Catalog::builtin()
        }
    };
    let config = EngineConfig::new(cli.weak_threshold, cli.matcher)
        .context("Invalid engine configuration")?;
    let assistant = Assistant::new(Arc::new(catalog), config);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend { limit, explain } => handle_recommend(&assistant, limit, explain),
        Commands::Partners { opportunity } => handle_partners(&assistant, &opportunity)?,
        Commands::Profile => handle_profile(&assistant),
        Commands::Benchmark { iterations } => handle_benchmark(&assistant, iterations)?,
    }

    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(assistant: &Assistant, limit: usize, explain: bool) {
    println!("{}", assistant.greeting().italic());
    println!();
    println!("{}", "Recommended Hackathons:".bold().blue());

    let recommendations = assistant.recommendations();
    for (rank, result) in recommendations.iter().take(limit).enumerate() {
        print_match(rank + 1, result);
        if explain {
            println!("   {}", assistant.select_opportunity(result).italic());
        }
    }
}

/// Handle the 'partners' command
fn handle_partners(assistant: &Assistant, query: &str) -> Result<()> {
    let selected = assistant.select(query)?;

    print_match(1, &selected);
    println!("   {}", assistant.select_opportunity(&selected).italic());
    println!();

    let partners = assistant.partners_for(&selected.opportunity);
    if partners.is_empty() {
        println!("{}", "No suggested teammates for this hackathon.".yellow());
        return Ok(());
    }

    println!("{}", "Suggested Teammates:".bold().blue());
    for partner in &partners {
        print_partner(partner);
        println!("   {}", assistant.select_candidate(partner).italic());
    }
    Ok(())
}

/// Handle the 'profile' command
fn handle_profile(assistant: &Assistant) {
    let catalog = assistant.catalog();
    let weak_threshold = assistant.config().weak_skill_threshold;

    println!("{}", "Skill Graph:".bold().blue());
    for skill in &catalog.skills {
        let trend = match skill.trend {
            Trend::Up => "↑".green(),
            Trend::Stable => "→".normal(),
            Trend::Down => "↓".red(),
        };
        let tier = SkillTier::from_level(skill.level);
        let level = if skill.level < weak_threshold {
            format!("{:>3}%", skill.level).yellow()
        } else {
            format!("{:>3}%", skill.level).green()
        };
        println!(
            "{}{:<22} {} {} {:<11} [{}]",
            "• ".cyan(),
            skill.name,
            level,
            trend,
            tier.as_str(),
            skill.category
        );
    }

    let Some(dashboard) = &catalog.dashboard else {
        return;
    };

    let stats = &dashboard.stats;
    println!();
    println!("{}", format!("Level {}", stats.level).bold().blue());
    println!(
        "{}XP: {} / {} ({}% to level {})",
        "• ".green(),
        stats.xp,
        stats.xp_to_next_level,
        xp_progress_percent(stats.xp, stats.xp_to_next_level),
        stats.level + 1
    );
    println!(
        "{}Streak: {} days (longest {})",
        "• ".green(),
        stats.current_streak,
        stats.longest_streak
    );
    println!(
        "{}Completed: {} quests, {} hackathons",
        "• ".green(),
        stats.quests_completed,
        stats.hackathons_completed
    );

    let unlocked = unlocked_badges(&stats.badges);
    println!("Badges ({}/{} unlocked):", unlocked.len(), stats.badges.len());
    for badge in &stats.badges {
        let line = format!(
            "  {} {} ({:?}) - {}",
            badge.icon, badge.name, badge.rarity, badge.description
        );
        if badge.unlocked {
            println!("{}", line);
        } else {
            println!("{}", line.dimmed());
        }
    }

    if let Some(quest) = &dashboard.daily_quest {
        println!();
        println!("{}", "Daily Quest:".bold().blue());
        println!(
            "  {} [{}] +{} XP, ~{}",
            quest.title, quest.difficulty, quest.xp_reward, quest.estimated_time
        );
        println!("  {}", quest.description);
        let status = if quest.completed {
            "completed".green()
        } else {
            format!("{}% done", quest.progress).normal()
        };
        println!("  Status: {}", status);
    }

    if let Some(event_match) = assistant.featured_event_match() {
        let event = &event_match.event;
        println!();
        println!("{}", "Weekly Hackathon:".bold().blue());
        println!(
            "  {} [{}] {:?}, starts in {}, {}",
            event.title, event.difficulty, event.status, event.starts_in, event.duration
        );
        println!("  Theme: {} ({} participants)", event.theme, event.participants);
        println!("  Prizes: {}", event.prizes.join(", "));
        println!(
            "  Your match: {}% ({})",
            event_match.match_score,
            if event_match.matching_skills.is_empty() {
                "no overlapping skills".to_string()
            } else {
                event_match.matching_skills.join(", ")
            }
        );
    }
}

/// Handle the 'benchmark' command
fn handle_benchmark(assistant: &Assistant, iterations: usize) -> Result<()> {
    if iterations == 0 {
        bail!("--iterations must be at least 1");
    }

    let mut timings: Vec<Duration> = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        let start = Instant::now();
        let ranked = assistant.recommendations();
        for result in &ranked {
            std::hint::black_box(assistant.partners_for(&result.opportunity));
        }
        timings.push(start.elapsed());
    }

    let summary = LatencySummary::from_timings(&mut timings);
    let throughput = iterations as f64 / summary.total.as_secs_f64().max(f64::EPSILON);

    println!("Benchmark results:");
    println!("Total time: {:?}", summary.total);
    println!("Average latency: {:?}", summary.average);
    println!("P50 latency: {:?}", summary.p50);
    println!("P95 latency: {:?}", summary.p95);
    println!("P99 latency: {:?}", summary.p99);
    println!("Throughput: {:.2} rounds/second", throughput);

    Ok(())
}

/// Latency statistics over one benchmark run
#[derive(Debug, PartialEq)]
struct LatencySummary {
    total: Duration,
    average: Duration,
    p50: Duration,
    p95: Duration,
    p99: Duration,
}

impl LatencySummary {
    /// Sorts `timings` in place. `timings` must be non-empty.
    fn from_timings(timings: &mut [Duration]) -> Self {
        let total: Duration = timings.iter().sum();
        let average = total.div_f64(timings.len() as f64);
        timings.sort();
        let last = timings.len() - 1;
        let percentile = |p: f64| timings[((timings.len() as f64 * p) as usize).min(last)];
        Self {
            total,
            average,
            p50: timings[timings.len() / 2],
            p95: percentile(0.95),
            p99: percentile(0.99),
        }
    }
}

fn print_match(rank: usize, result: &MatchResult) {
    let opportunity = &result.opportunity;
    let score = format!("{}%", result.match_score);
    let score = match result.match_score {
        80.. => score.green(),
        50..=79 => score.yellow(),
        _ => score.red(),
    };
    println!(
        "{}. {} [{}] - Match: {} - Prize: {} - Deadline: {}",
        rank.to_string().green(),
        opportunity.title.bold(),
        opportunity.difficulty,
        score,
        opportunity.prize,
        opportunity.deadline
    );
    println!("   {}", opportunity.description);
    if !result.matching_skills.is_empty() {
        println!("   Have: {}", result.matching_skills.join(", ").green());
    }
    let missing = result.missing_skills();
    if !missing.is_empty() {
        println!("   Need: {}", missing.join(", ").yellow());
    }
}

fn print_partner(partner: &CandidateMatch) {
    let candidate = &partner.candidate;
    let mut reasons = Vec::new();
    if partner.fits_opportunity() {
        reasons.push("fits hackathon");
    }
    if partner.covers_weak_skill() {
        reasons.push("covers weak skill");
    }
    println!(
        "{} {} (level {}) [{}] - {}",
        candidate.avatar,
        candidate.name.bold(),
        candidate.level,
        candidate.skills.join(", "),
        reasons.join(", ").cyan()
    );
}
