use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use std::process::ExitCode;

use crate::assembler::launch_list::LaunchFilter;
use crate::command_logic::init::init_config;
use crate::command_logic::launch::show_launch_detail;
use crate::command_logic::launches::list_launches;
use crate::config::Config;
use crate::errors::AppError;
use crate::external_api::spacex_api::SpacexApi;

#[derive(Parser)]
#[command(
    name = "launchdeck",
    version,
    about = "CLI client for the SpaceX launch API <https://api.spacexdata.com/v4>",
    long_about = None,
    propagate_version = true
)]
pub struct Cli {
    /// Base url of the SpaceX API, overrides the config
    #[arg(long, global = true)]
    pub base_url: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List launches, newest first
    Launches(LaunchesArgs),
    /// Show details of a launch
    Launch(LaunchArgs),
    /// Create the default config
    Init,
}

#[derive(Args)]
pub struct LaunchesArgs {
    /// Which launches to show
    #[arg(long, short, value_enum, default_value_t = LaunchFilter::All)]
    pub filter: LaunchFilter,
}

#[derive(Args)]
pub struct LaunchArgs {
    /// Launch id
    #[arg(long, short, required = true, value_parser = validate_launch_id)]
    pub id: String,
}

fn validate_launch_id(value: &str) -> Result<String, AppError> {
    let launch_id = value.trim();
    if launch_id.is_empty() {
        return Err(AppError::EmptyLaunchId);
    }
    Ok(launch_id.to_string())
}

fn build_spacex_api(base_url: Option<String>) -> Result<(SpacexApi, Config), AppError> {
    let config = Config::load(base_url)?;
    let spacex_api = SpacexApi::new(&config.spacex_base_api_url, config.timeout())?;
    Ok((spacex_api, config))
}

async fn run_launches(base_url: Option<String>, args: &LaunchesArgs) -> Result<String, AppError> {
    let (spacex_api, _) = build_spacex_api(base_url)?;
    list_launches(&spacex_api, args.filter, Utc::now).await
}

async fn run_launch(base_url: Option<String>, args: &LaunchArgs) -> Result<String, AppError> {
    let (spacex_api, config) = build_spacex_api(base_url)?;
    show_launch_detail(&spacex_api, &args.id, config.max_concurrent_fetches).await
}

fn print_outcome(result: Result<String, AppError>, failure: &str) -> ExitCode {
    match result {
        Ok(value) => {
            println!("{}", value);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to {}: {}", failure, e);
            ExitCode::FAILURE
        }
    }
}

pub async fn handle_command(cli: Cli) -> ExitCode {
    match &cli.command {
        Commands::Launches(value) => {
            print_outcome(run_launches(cli.base_url.clone(), value).await, "load launches")
        }
        Commands::Launch(value) => {
            print_outcome(run_launch(cli.base_url.clone(), value).await, "load launch details")
        }
        Commands::Init => print_outcome(
            Config::config_path().and_then(|path| init_config(&path)),
            "create config",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use rstest::rstest;

    #[rstest]
    #[case("-f", "past", LaunchFilter::Past)]
    #[case("--filter", "upcoming", LaunchFilter::Upcoming)]
    #[case("--filter", "all", LaunchFilter::All)]
    fn test_launches_command_positive(#[case] flag: &str, #[case] value: &str, #[case] exp_filter: LaunchFilter) {
        let args = Cli::parse_from(["launchdeck", "launches", flag, value]);
        match args.command {
            Commands::Launches(value) => assert_eq!(value.filter, exp_filter),
            _ => panic!("Expected the launches command"),
        }
    }

    #[test]
    fn test_launches_default_filter() {
        let args = Cli::parse_from(["launchdeck", "launches"]);
        match args.command {
            Commands::Launches(value) => assert_eq!(value.filter, LaunchFilter::All),
            _ => panic!("Expected the launches command"),
        }
        assert!(args.base_url.is_none());
    }

    #[test]
    fn test_launches_invalid_filter() {
        let result = Cli::try_parse_from(["launchdeck", "launches", "--filter", "tomorrow"]);
        assert!(result.is_err());
    }

    #[rstest]
    #[case("-i")]
    #[case("--id")]
    fn test_launch_command_positive(#[case] flag: &str) {
        let args = Cli::parse_from(["launchdeck", "launch", flag, "5eb87cd9ffd86e000604b32a"]);
        match args.command {
            Commands::Launch(value) => assert_eq!(value.id, "5eb87cd9ffd86e000604b32a"),
            _ => panic!("Expected the launch command"),
        }
    }

    #[test]
    fn test_global_base_url() {
        let args = Cli::parse_from(["launchdeck", "launches", "--base-url", "http://localhost:3000"]);
        assert_eq!(args.base_url.as_deref(), Some("http://localhost:3000"));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn test_validate_empty_launch_id(#[case] value: &str) {
        assert!(matches!(validate_launch_id(value), Err(AppError::EmptyLaunchId)));
    }

    #[test]
    fn test_empty_launch_id_message() {
        let error = Cli::try_parse_from(["launchdeck", "launch", "--id", " "]).err().unwrap();
        assert!(error.to_string().contains("The launch ID must not be empty"));
    }

    #[test]
    fn test_validate_launch_id_trims() {
        assert_eq!(validate_launch_id(" abc ").unwrap(), "abc");
    }

    #[test]
    fn test_missing_launch_id() {
        assert!(Cli::try_parse_from(["launchdeck", "launch"]).is_err());
    }
}
