//! CLI seeding tool for course-map.
//!
//! Loads the sample courses into the database and reports store status
//! without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Insert the sample courses (asks for confirmation when the table
//! # already has rows)
//! cargo run --bin seed -- run
//!
//! # Skip the confirmation prompt
//! cargo run --bin seed -- run --yes
//!
//! # Show how many courses are stored
//! cargo run --bin seed -- status
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use course_map::application::services::CourseService;
use course_map::domain::entities::{Coordinate, CourseSubmission, Level};
use course_map::infrastructure::persistence::PgCourseRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for seeding course-map.
#[derive(Parser)]
#[command(name = "seed")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Insert the sample courses
    Run {
        /// Skip the confirmation prompt when the table is not empty
        #[arg(long)]
        yes: bool,
    },

    /// Show the number of stored courses
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let repository = Arc::new(PgCourseRepository::new(Arc::new(pool)));
    let service = CourseService::new(repository);

    match cli.command {
        Commands::Run { yes } => run_seed(&service, yes).await,
        Commands::Status => status(&service).await,
    }
}

async fn run_seed(service: &CourseService, yes: bool) -> Result<()> {
    let existing = service
        .count_courses()
        .await
        .map_err(|e| anyhow::anyhow!(e.message().to_string()))?;

    if existing > 0 && !yes {
        let proceed = Confirm::new()
            .with_prompt(format!(
                "The store already holds {existing} courses. Seed anyway?"
            ))
            .default(false)
            .interact()?;
        if !proceed {
            println!("{}", "Aborted.".yellow());
            return Ok(());
        }
    }

    for submission in sample_courses() {
        let title = submission.title.clone().unwrap_or_default();
        match service.create_course(submission).await {
            Ok(course) => println!(
                "{} {} (id {})",
                "Created".green().bold(),
                course.title,
                course.id
            ),
            Err(e) => println!("{} {}: {}", "Failed".red().bold(), title, e.message()),
        }
    }

    Ok(())
}

async fn status(service: &CourseService) -> Result<()> {
    let count = service
        .count_courses()
        .await
        .map_err(|e| anyhow::anyhow!(e.message().to_string()))?;
    println!("{} {count}", "Stored courses:".bold());
    Ok(())
}

/// The three sample courses used for local development.
fn sample_courses() -> Vec<CourseSubmission> {
    vec![
        CourseSubmission {
            title: Some("Ttukseom Han River Park out-and-back".to_string()),
            description: Some(
                "5 km along the riverside, well lit at night and mostly separated from the bike lanes."
                    .to_string(),
            ),
            distance_km: Some(5.2),
            estimated_minutes: Some(30),
            level: Some(Level::Easy),
            region: Some("Seongdong-gu, Seoul".to_string()),
            tags: Some(vec![
                "night-friendly".to_string(),
                "riverside".to_string(),
                "beginner".to_string(),
            ]),
            path: Some(vec![
                Coordinate::new(37.53125, 127.0678),
                Coordinate::new(37.5322, 127.073),
                Coordinate::new(37.5331, 127.079),
                Coordinate::new(37.5338, 127.085),
            ]),
        },
        CourseSubmission {
            title: Some("Olympic Park outer loop".to_string()),
            description: Some(
                "3 km around the park edge, almost entirely flat and easy to lap.".to_string(),
            ),
            distance_km: Some(3.1),
            estimated_minutes: Some(20),
            level: Some(Level::Easy),
            region: Some("Songpa-gu, Seoul".to_string()),
            tags: Some(vec![
                "park".to_string(),
                "flat".to_string(),
                "family-run".to_string(),
            ]),
            path: Some(vec![
                Coordinate::new(37.5175, 127.1213),
                Coordinate::new(37.517, 127.126),
                Coordinate::new(37.5162, 127.129),
                Coordinate::new(37.5152, 127.124),
            ]),
        },
        CourseSubmission {
            title: Some("Namsan hill course".to_string()),
            description: Some(
                "Plenty of climbing, good for building strength. Rough on beginners.".to_string(),
            ),
            distance_km: Some(4.0),
            estimated_minutes: Some(35),
            level: Some(Level::Hard),
            region: Some("Jung-gu, Seoul".to_string()),
            tags: Some(vec![
                "hilly".to_string(),
                "good-views".to_string(),
                "strength".to_string(),
            ]),
            path: Some(vec![
                Coordinate::new(37.5521, 126.985),
                Coordinate::new(37.5532, 126.987),
                Coordinate::new(37.554, 126.989),
                Coordinate::new(37.555, 126.991),
            ]),
        },
    ]
}
