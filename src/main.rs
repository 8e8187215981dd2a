//! Resume grader: AI-powered resume grading against job descriptions

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use resume_grader::cli::{self, Cli, Commands, ConfigAction};
use resume_grader::config::Config;
use resume_grader::error::{Result, ResumeGraderError};
use resume_grader::generation::OllamaClient;
use resume_grader::output::formatter;
use resume_grader::profile::{ProfileExtractor, ProfileStore};
use resume_grader::scoring::{Evaluator, StaticModelProvider};
use std::fs;
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if !config.output.color_output {
        colored::control::set_override(false);
    }

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Evaluate {
            resume,
            job,
            output,
            save,
        } => {
            info!("Starting resume evaluation");

            cli::validate_file_extension(&resume, &["txt", "md"])
                .map_err(|e| ResumeGraderError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&job, &["txt", "md"])
                .map_err(|e| ResumeGraderError::InvalidInput(format!("Job description file: {}", e)))?;

            let output_format =
                cli::parse_output_format(&output).map_err(ResumeGraderError::InvalidInput)?;

            println!("🚀 Resume grading");
            println!("📄 Resume: {}", resume.display());
            println!("💼 Job Description: {}", job.display());

            let resume_text = fs::read_to_string(&resume)?;
            let job_text = fs::read_to_string(&job)?;

            let client = OllamaClient::new(&config.generation)?;
            let extractor = ProfileExtractor::new(client);

            let spinner = spinner("Parsing resume with the generation service...");
            let candidate = extractor.extract_candidate(&resume_text).await?;
            spinner.set_message("Parsing job description with the generation service...");
            let job_profile = extractor.extract_job(&job_text).await?;
            spinner.finish_and_clear();

            println!(
                "✅ Parsed profiles: {} skills, {} roles vs {} required skills, {} responsibilities",
                candidate.all_skills().len(),
                candidate.experience.len(),
                job_profile.requirements.required_skills.len(),
                job_profile.responsibilities.len()
            );

            println!("🧠 Loading embedding model...");
            let provider = StaticModelProvider::load(&config.embedding)?;

            let evaluator = Evaluator::new(&provider, &config.scoring);
            let report = evaluator.evaluate(&candidate, &job_profile);

            println!("{}", formatter::render(&report, &output_format)?);

            if let Some(path) = save {
                fs::write(&path, serde_json::to_string_pretty(&report)?)?;
                println!("💾 Report saved to: {}", path.display());
            }

            println!("🎯 Final score: {:.2}/100", report.final_score);
        }

        Commands::Parse { input, job, save } => {
            cli::validate_file_extension(&input, &["txt", "md"])
                .map_err(|e| ResumeGraderError::InvalidInput(format!("Input file: {}", e)))?;

            let text = fs::read_to_string(&input)?;
            let client = OllamaClient::new(&config.generation)?;
            let extractor = ProfileExtractor::new(client);

            let spinner = spinner("Parsing document with the generation service...");
            let snapshot_name = input
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or("profile")
                .to_string();

            if job {
                let profile = extractor.extract_job(&text).await?;
                spinner.finish_and_clear();
                println!("{}", serde_json::to_string_pretty(&profile)?);
                if let Some(dir) = save {
                    let path = ProfileStore::new(dir).save(&snapshot_name, &profile)?;
                    println!("💾 Snapshot saved to: {}", path.display());
                }
            } else {
                let profile = extractor.extract_candidate(&text).await?;
                spinner.finish_and_clear();
                println!("{}", serde_json::to_string_pretty(&profile)?);
                if let Some(dir) = save {
                    let path = ProfileStore::new(dir).save(&snapshot_name, &profile)?;
                    println!("💾 Snapshot saved to: {}", path.display());
                }
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Generation service: {}", config.generation.base_url);
                println!("Generation model: {}", config.generation.model);
                println!("Embedding model: {}", config.embedding.model);
                println!("\nScoring:");
                println!(
                    "  Similarity threshold: {:.2}",
                    config.scoring.similarity_threshold
                );
                println!("  Skill weight: {:.1}", config.scoring.skill_weight);
                println!("  Experience weight: {:.1}", config.scoring.experience_weight);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}

fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
