//! HabitMind CLI — the main entry point.
//!
//! Commands:
//! - `coach`   — Ask the habit coach about a specific habit
//! - `reflect` — Get reflection feedback on a piece of work
//! - `lesson`  — Generate a lesson plan integrating selected habits
//! - `solve`   — Work a problem through the problem solver's workshop
//! - `assess`  — Get feedback on a habit self-assessment
//! - `habits`  — Browse the Habits of Mind catalog

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "habitmind",
    about = "HabitMind — Habits of Mind coaching tools",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit the prompt pair and response as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the habit coach about a specific habit
    Coach {
        /// Habit id (1-16)
        #[arg(long)]
        habit: u8,

        /// Your question for the coach
        #[arg(long)]
        question: String,

        /// Your experience level (defaults from config)
        #[arg(long)]
        level: Option<String>,
    },

    /// Get reflection feedback on a piece of work
    Reflect {
        /// Habit id (1-16)
        #[arg(long)]
        habit: u8,

        /// The work to reflect on
        #[arg(long)]
        work: String,
    },

    /// Generate a lesson plan integrating selected habits
    Lesson {
        /// Habit ids to integrate, comma-separated (e.g. 2,7)
        #[arg(long, value_delimiter = ',')]
        habits: Vec<u8>,

        /// Subject of the lesson
        #[arg(long)]
        subject: String,

        /// Grade level
        #[arg(long)]
        grade: String,

        /// Learning objective
        #[arg(long)]
        objective: String,
    },

    /// Work a problem through the problem solver's workshop
    Solve {
        /// The problem statement
        #[arg(long)]
        problem: String,

        /// Habit ids to apply, comma-separated (e.g. 1,4,8)
        #[arg(long, value_delimiter = ',')]
        habits: Vec<u8>,
    },

    /// Get feedback on a habit self-assessment
    Assess {
        /// Habit id (1-16)
        #[arg(long)]
        habit: u8,

        /// Your self-assessment responses
        #[arg(long)]
        responses: String,
    },

    /// Browse the Habits of Mind catalog
    Habits {
        /// Show one habit in full instead of the whole list
        #[arg(long)]
        id: Option<u8>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let config = habitmind_config::AppConfig::load()?;

    match cli.command {
        Commands::Coach {
            habit,
            question,
            level,
        } => {
            let level = level.unwrap_or_else(|| config.default_user_level.clone());
            let prompt = habitmind_prompts::habit_coach(habit, &level, &question)?;
            commands::respond(&config, prompt, cli.json).await?;
        }
        Commands::Reflect { habit, work } => {
            let prompt = habitmind_prompts::reflection(habit, &work)?;
            commands::respond(&config, prompt, cli.json).await?;
        }
        Commands::Lesson {
            habits,
            subject,
            grade,
            objective,
        } => {
            let prompt = habitmind_prompts::lesson_plan(&habits, &subject, &grade, &objective)?;
            commands::respond(&config, prompt, cli.json).await?;
        }
        Commands::Solve { problem, habits } => {
            let prompt = habitmind_prompts::problem_solver(&problem, &habits)?;
            commands::respond(&config, prompt, cli.json).await?;
        }
        Commands::Assess { habit, responses } => {
            let prompt = habitmind_prompts::self_assessment(habit, &responses)?;
            commands::respond(&config, prompt, cli.json).await?;
        }
        Commands::Habits { id } => commands::habits::run(id, cli.json)?,
    }

    Ok(())
}
