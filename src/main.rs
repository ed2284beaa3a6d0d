//! Binary entrypoint for the playerdb CLI.
//!
//! Commands:
//! - `start [--players a,b]` - run the registry against a stdin console host
//! - `init` - write a starter `config.toml`
//! - `status` - print the number of registered players
//! - `dump` - print the registry as pretty JSON
//!
//! See the library crate docs for module-level details: `playerdb::`.
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};

use playerdb::commands::CommandRouter;
use playerdb::config::Config;
use playerdb::host::{start_service, Actor, ChatDecision, ConsoleInput, ConsoleOutbound, RegistryService};
use playerdb::logutil::preview;
use playerdb::registry::{RegistryStore, SledProperties};

#[derive(Parser)]
#[command(name = "playerdb")]
#[command(about = "Persisted player registry with chat commands")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the registry against a console host reading events from stdin
    Start {
        /// Players already connected at startup (comma separated)
        #[arg(short, long, value_delimiter = ',')]
        players: Vec<String>,
    },
    /// Write a default configuration file
    Init,
    /// Show how many players are registered
    Status,
    /// Print the registry as JSON
    Dump,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            init_logging(&None, cli.verbose);
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
        }
        Commands::Status => {
            let (config, store) = prepare(&cli.config, cli.verbose).await?;
            let names = store.list();
            println!("Registry: {} players ({})", names.len(), config.registry.data_dir);
        }
        Commands::Dump => {
            let (_, store) = prepare(&cli.config, cli.verbose).await?;
            println!("{}", store.to_json_pretty());
        }
        Commands::Start { players } => {
            let (config, store) = prepare(&cli.config, cli.verbose).await?;
            info!("Starting playerdb v{}", env!("CARGO_PKG_VERSION"));
            let router = CommandRouter::new(config.commands.parser());
            let service = RegistryService::new(store, router, ConsoleOutbound);
            let (handle, join) = start_service(service);

            handle.startup(players.into_iter().map(Actor::player).collect())?;

            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await? {
                match ConsoleInput::parse(&line) {
                    ConsoleInput::Chat { sender, text } => {
                        if handle.chat(sender.clone(), text.clone()).await? == ChatDecision::Deliver {
                            let who = match &sender {
                                Actor::Player(p) => p.name.clone(),
                                Actor::Entity { type_id } => type_id.clone(),
                            };
                            println!("<{}> {}", who, text);
                        }
                    }
                    ConsoleInput::Spawn {
                        actor,
                        initial_spawn,
                    } => handle.spawn(actor, initial_spawn)?,
                    ConsoleInput::Quit => break,
                    ConsoleInput::Blank => {}
                    ConsoleInput::Invalid(raw) => {
                        warn!("Unrecognized console input '{}'", preview(&raw));
                    }
                }
            }

            handle.shutdown().await;
            join.await?;
            info!("playerdb stopped");
        }
    }

    Ok(())
}

/// Load config, start logging, and open the registry slot database.
async fn prepare(path: &str, verbosity: u8) -> Result<(Config, RegistryStore<SledProperties>)> {
    let config = Config::load(path).await?;
    init_logging(&Some(config.clone()), verbosity);
    let properties =
        SledProperties::open_with_limit(&config.registry.data_dir, config.registry.max_value_bytes)?;
    Ok((config, RegistryStore::new(properties)))
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let base_level = match (verbosity, config) {
        (0, Some(cfg)) => cfg.logging.level_filter(),
        (0, None) => log::LevelFilter::Info,
        (1, _) => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);
    let log_file = config
        .as_ref()
        .and_then(|cfg| cfg.logging.file.as_ref())
        .and_then(|path| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .ok()
        });
    if let Some(f) = log_file {
        let file = std::sync::Mutex::new(f);
        // Only echo to the console when attached to a terminal
        let is_tty = atty::is(atty::Stream::Stdout);
        builder.format(move |fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            let line = format!("{} [{}] {}", ts, record.level(), record.args());
            if let Ok(mut guard) = file.lock() {
                let _ = writeln!(guard, "{}", line);
            }
            if is_tty {
                writeln!(fmt, "{}", line)
            } else {
                Ok(())
            }
        });
    } else {
        builder.format(|fmt, record| {
            writeln!(
                fmt,
                "{} [{}] {}",
                chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                record.level(),
                record.args()
            )
        });
    }
    let _ = builder.try_init();
}
