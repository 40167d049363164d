mod cli;
mod cmd;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands, ConfigAction};
use nutricare::error::ProfileError;
use nutricare::models::NutritionFacts;
use nutricare::output::{self, ErrorCode};
use std::process;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    // stdout carries the JSON envelope, so logs go to stderr
    let filter =
        EnvFilter::try_from_env("NUTRICARE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let command = cli.command.name();

    let result = match cli.command {
        Commands::Init { skip } => cmd::init::run(skip),
        Commands::Config { action } => match action {
            ConfigAction::Show => cmd::config::run_show(cli.human),
            ConfigAction::Set { key, value } => cmd::config::run_set(&key, &value),
        },
        Commands::Metrics { profile } => cmd::metrics::run(&profile, cli.human),
        Commands::Macros { calories, profile } => cmd::macros::run(calories, &profile, cli.human),
        Commands::Burn {
            exercise,
            minutes,
            intensity,
            weight,
        } => cmd::burn::run(&exercise, minutes, &intensity, weight, cli.human),
        Commands::Exercises { recommend, profile } => {
            cmd::exercises::run(recommend, &profile, cli.human)
        }
        Commands::Meal {
            calories,
            protein,
            carbs,
            fats,
            fiber,
            consumed,
        } => cmd::meal::run(
            NutritionFacts {
                calories,
                protein,
                carbs,
                fats,
                fiber: fiber.unwrap_or(0.0),
            },
            consumed,
            cli.human,
        ),
        Commands::Analyze {
            consumed,
            target,
            profile,
        } => cmd::analyze::run(&consumed, target.as_deref(), &profile, cli.human),
        Commands::Day { input, profile } => cmd::day::run(&input, &profile, cli.human),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "nutricare", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        let code = if e.downcast_ref::<ProfileError>().is_some() {
            ErrorCode::InvalidProfile
        } else {
            ErrorCode::GeneralError
        };
        eprintln!("{}", output::error(command, code, e.to_string()));
        process::exit(1);
    }
}
