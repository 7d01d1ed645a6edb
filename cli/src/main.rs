//! hatvote — operate a hat-gated voting registry persisted to a state file.

mod clock;
mod commands;
mod holders;

use anyhow::{bail, Context};
use clap::Parser;
use hatvote_registry::{HatsVotes, RegistryConfig, Votes};
use hatvote_types::{AccountAddress, ClockMode, HatId, Timepoint, VoteWeight};
use hatvote_utils::{init_logging, LogFormat};
use std::path::PathBuf;

use crate::clock::FixedClock;
use crate::commands::Action;
use crate::holders::HolderTable;

#[derive(Parser)]
#[command(name = "hatvote", about = "Hat-gated voting-weight registry")]
struct Cli {
    /// Path to the registry TOML configuration (construction parameters).
    #[arg(long, env = "HATVOTE_CONFIG")]
    config: Option<PathBuf>,

    /// Path to the binary state file.
    #[arg(long, default_value = "./hatvote.state", env = "HATVOTE_STATE")]
    state: PathBuf,

    /// TOML table of who wears which hats.
    #[arg(long, env = "HATVOTE_HOLDERS")]
    holders: Option<PathBuf>,

    /// Current logical time (block number or unix seconds, per config).
    #[arg(long, default_value_t = 0, env = "HATVOTE_CLOCK")]
    clock: u64,

    /// Clock unit: "blocknumber" or "timestamp". Overrides the config file
    /// and must match the mode the state file was created with.
    #[arg(long, env = "HATVOTE_CLOCK_MODE")]
    clock_mode: Option<ClockMode>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    /// Defaults to the config file's value.
    #[arg(long, env = "HATVOTE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json". Defaults to the config file's value.
    #[arg(long, env = "HATVOTE_LOG_FORMAT")]
    log_format: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Create the state file from the configuration.
    Init {
        /// Overwrite an existing state file.
        #[arg(long)]
        force: bool,
    },
    /// Assign weights to hats (owner only).
    SetWeights {
        #[arg(long)]
        caller: AccountAddress,
        /// Hat ids, comma-separated.
        #[arg(long, value_delimiter = ',', required = true)]
        hats: Vec<HatId>,
        /// Weights, comma-separated, one per hat.
        #[arg(long, value_delimiter = ',', required = true)]
        weights: Vec<u128>,
    },
    /// Hand configuration rights to the wearer of another hat (owner only).
    SetOwnerHat {
        #[arg(long)]
        caller: AccountAddress,
        #[arg(long)]
        hat: HatId,
    },
    /// Enable or disable registration on behalf of others (owner only).
    SetThirdParty {
        #[arg(long)]
        caller: AccountAddress,
        #[arg(long, action = clap::ArgAction::Set)]
        enabled: bool,
    },
    /// Freeze all configuration permanently (owner only).
    Lock {
        #[arg(long)]
        caller: AccountAddress,
    },
    /// Register an account under a hat it wears.
    Register {
        #[arg(long)]
        caller: AccountAddress,
        #[arg(long)]
        hat: HatId,
        /// Register this account instead of the caller.
        #[arg(long = "for")]
        on_behalf_of: Option<AccountAddress>,
    },
    /// Print an account's voting weight.
    Votes {
        #[arg(long)]
        account: AccountAddress,
        /// Query past votes as of this timepoint.
        #[arg(long)]
        at: Option<u64>,
    },
    /// Print the registry state.
    Show {
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => RegistryConfig::from_toml_file(path)?,
        None => RegistryConfig::default(),
    };

    let format: LogFormat = cli
        .log_format
        .as_deref()
        .unwrap_or(&config.log_format)
        .parse()?;
    init_logging(format, cli.log_level.as_deref().unwrap_or(&config.log_level));

    let holders = match &cli.holders {
        Some(path) => HolderTable::from_toml_file(path)?,
        None => HolderTable::default(),
    };
    tracing::debug!(holders = holders.len(), "holder table loaded");
    if let Some(mode) = cli.clock_mode {
        config.clock_mode = mode;
    }
    let clock = FixedClock::new(cli.clock, config.clock_mode);

    if let Command::Init { force } = cli.command {
        if cli.state.exists() && !force {
            bail!(
                "state file {} already exists (use --force to overwrite)",
                cli.state.display()
            );
        }
        let registry = HatsVotes::from_config(&config, holders, clock)?;
        commands::save_state(&registry, &cli.state)?;
        tracing::info!(state = %cli.state.display(), "state file initialised");
        return Ok(());
    }

    let mut registry = commands::load_state(&cli.state, holders, clock)?;

    let action = match cli.command {
        Command::Init { .. } => unreachable!("handled above"),
        Command::Votes { account, at } => {
            let votes = match at {
                Some(at) => registry.get_past_votes(&account, Timepoint::new(at)),
                None => registry.get_votes(&account),
            };
            println!("{}", votes.raw());
            return Ok(());
        }
        Command::Show { json } => {
            let summary = commands::summarize(&registry);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{summary}");
            }
            return Ok(());
        }
        Command::SetWeights {
            caller,
            hats,
            weights,
        } => Action::SetWeights {
            caller,
            hats,
            weights: weights.into_iter().map(VoteWeight::new).collect(),
        },
        Command::SetOwnerHat { caller, hat } => Action::SetOwnerHat { caller, hat },
        Command::SetThirdParty { caller, enabled } => Action::SetThirdParty { caller, enabled },
        Command::Lock { caller } => Action::Lock { caller },
        Command::Register {
            caller,
            hat,
            on_behalf_of,
        } => Action::Register {
            caller,
            hat,
            on_behalf_of,
        },
    };

    let events = commands::apply(&mut registry, &action)
        .with_context(|| format!("{action:?} rejected"))?;
    commands::save_state(&registry, &cli.state)?;
    for event in &events {
        println!("{}", serde_json::to_string(event)?);
    }
    Ok(())
}
