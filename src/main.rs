use anyhow::Context;
use clap::{Parser, Subcommand};
use riot_caller::display::output::{
    display_error, display_info, display_json, display_params, display_services, display_success,
};
use riot_caller::tool::tool_definition;
use riot_caller::{Config, Params, RiotCaller};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "riot-caller")]
#[command(about = "Call Riot Games API services by name", long_about = None)]
struct Args {
    /// Platform host prefix for server-scoped services (default: br1)
    #[arg(short, long, global = true)]
    server: Option<String>,

    /// Regional cluster for region-scoped services (default: americas)
    #[arg(short, long, global = true)]
    region: Option<String>,

    /// Load the endpoint catalog from a TOML file instead of the built-in one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Call a service and print its JSON response
    Call {
        /// Service name, e.g. get_league_by_id
        service: String,

        /// Path parameter, repeatable: -p leagueId=abc123
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
    /// List every service in the catalog
    Services,
    /// List known parameters and their allowed values
    Params,
    /// Print the agent tool definition as JSON
    ToolSchema,
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = Config::from_env().context("Failed to read configuration")?;
    if let Some(server) = args.server {
        config.server = server;
    }
    if let Some(region) = args.region {
        config.region = region;
    }
    if let Some(catalog) = args.catalog {
        config.catalog_path = Some(catalog);
    }

    let riot = RiotCaller::new(&config).context("Failed to initialise client")?;

    match args.command {
        Command::Call { service, params } => {
            let params: Params = params.into_iter().collect();
            display_info(&format!(
                "Calling {} (server {}, region {})",
                service, config.server, config.region
            ));

            let body = riot.call_service(&service, Some(&params))?;
            display_success("Done");
            display_json(&body);
        }
        Command::Services => display_services(riot.catalog()),
        Command::Params => display_params(riot.registry()),
        Command::ToolSchema => {
            let definition = serde_json::to_value(tool_definition(&riot))?;
            display_json(&definition);
        }
    }

    Ok(())
}
