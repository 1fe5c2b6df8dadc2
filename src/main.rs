//! career-roadmap: terminal form that turns experience, skills and a target
//! role into a templated career roadmap.
//!
//! Usage:
//!   cargo run                      # interactive form
//!   cargo run -- generate --experience 3 --skills "Java, Spring" --target-role "Senior Backend Engineer"

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use career_roadmap::config::{Config, RuntimeConfig, load_env_file};
use career_roadmap::form::parse_assignment;
use career_roadmap::{
    Field, FormData, LogTarget, RoadmapError, Session, SimulatedGenerator, init_tracing,
};

#[derive(Parser)]
#[command(name = "career-roadmap")]
#[command(about = "AI career roadmap generator", long_about = None)]
struct Cli {
    /// Override the generation delay in milliseconds
    #[arg(long, global = true)]
    delay_ms: Option<u64>,

    /// Append logs to this file (the interactive form logs nowhere otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive form (default)
    Form,
    /// Generate one roadmap without the terminal UI
    Generate {
        #[arg(long, default_value = "")]
        experience: String,
        #[arg(long, default_value = "")]
        skills: String,
        #[arg(long, default_value = "")]
        target_role: String,
        /// Set a field by name, e.g. `--set targetRole="Staff Engineer"`; applied after the flags
        #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
        set: Vec<(Field, String)>,
        /// Print a JSON object instead of plain text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Form);

    // Subscriber goes in before the config file is read so its warnings show
    load_env_file();
    let mut runtime = RuntimeConfig::load_from_env();
    if let Some(path) = cli.log_file {
        runtime.log_file = Some(path);
    }
    let target = match (runtime.log_file.as_deref(), &command) {
        (Some(path), _) => LogTarget::File(path),
        (None, Commands::Form) => LogTarget::Off,
        (None, Commands::Generate { .. }) => LogTarget::Stderr,
    };
    init_tracing(&runtime.log_level, target)?;

    let mut config = Config::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;
    config.runtime = runtime;
    if let Some(delay) = cli.delay_ms {
        config.generation.delay_ms = delay;
    }
    config.validate()?;

    match command {
        Commands::Form => {
            career_roadmap::tui::run(&config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Generate {
            experience,
            skills,
            target_role,
            set,
            json,
        } => {
            let mut form = FormData::new(experience, skills, target_role);
            for (field, value) in set {
                form.update(field, value);
            }
            generate(&config, form, json).await
        }
    }
}

async fn generate(config: &Config, form: FormData, as_json: bool) -> Result<ExitCode> {
    let generator = SimulatedGenerator::new(config.delay());
    let mut session = Session::with_form(form);

    match session.generate_with(&generator).await {
        Ok(Some(roadmap)) => {
            if as_json {
                let mut out = serde_json::to_value(session.form())?;
                out["status"] = serde_json::to_value(session.status())?;
                out["roadmap"] = roadmap.into();
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{roadmap}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Ok(None) => Ok(ExitCode::SUCCESS),
        Err(err @ RoadmapError::Validation { .. }) => {
            eprintln!("{err}");
            Ok(ExitCode::from(2))
        }
        Err(err) => Err(err.into()),
    }
}
