mod cli;

use clap::Parser;
use cli::{Cli, Commands, ResolveArgs};
use tracing::info;

use quackly::config::Config;
use quackly::engine::{self, DispatchOutcome, RecordingContext, ResolvedRequest};
use quackly::observability;
use quackly::settings::SettingsService;
use quackly::store;

type AnyError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), AnyError> {
    let cli = Cli::parse();

    let mut config = Config::load()?;
    observability::init_tracing(&config.telemetry);

    match cli.command {
        Commands::Server(args) => {
            if let Some(address) = args.address {
                config.server.bind_addr = address;
            }
            info!(version = env!("CARGO_PKG_VERSION"), "Starting Quackly");
            quackly::api::run(config).await?
        }
        Commands::Resolve(args) => resolve(&config, args)?,
        Commands::Config => print!("{}", toml::to_string_pretty(&config)?),
    }

    Ok(())
}

/// Resolve one query and print the destinations with a dry-run dispatch plan
fn resolve(config: &Config, args: ResolveArgs) -> Result<(), AnyError> {
    let settings = SettingsService::new(store::open(&config.storage)?);
    let snapshot = settings.snapshot()?;
    let resolved = engine::resolve(&args.query, &snapshot.registry, &snapshot.settings);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
        return Ok(());
    }

    match resolved {
        None => println!("empty query: the search page would be shown"),
        Some(ResolvedRequest::Single { url, strategy }) => {
            println!("redirect ({strategy:?}): {url}");
        }
        Some(ResolvedRequest::Multi(destination)) => {
            println!(
                "multi-bang: {} destination(s) for {:?} from [{}]",
                destination.urls.len(),
                destination.query,
                destination.triggers.join(", ")
            );

            let mut context = RecordingContext::allowing();
            match engine::dispatch(&destination, &mut context) {
                DispatchOutcome::Redirected { primary, .. } => {
                    for url in &context.opened {
                        println!("  open new tab: {url}");
                    }
                    println!("  replace page: {primary}");
                }
                DispatchOutcome::Fallback(affordance) => {
                    println!("  nothing to open automatically ({} url(s))", affordance.urls().len());
                }
            }
        }
    }

    Ok(())
}
