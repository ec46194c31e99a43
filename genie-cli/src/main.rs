use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

mod commands;
mod config;

use commands::{
    handle_agents_command, handle_chat_command, handle_contract_command, AgentsCommand,
    ContractCommand,
};
use config::CliContext;
use genie_core::GenieError;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Parser)]
#[command(name = "genie")]
#[command(author = "Web3 AI Labs")]
#[command(version = VERSION)]
#[command(about = "Genie - Web3 AI assistant, agent deployment and smart contract tooling")]
#[command(long_about = r#"
Genie simulates the Web3 AI Labs suite from the terminal: a chat assistant
with blockchain, security and contracts personas, a registry of trading,
monitoring and custom agents, and smart contract generation, security
scanning, documentation and gas optimization.

Every answer is produced locally from templates. Use --instant to skip the
simulated processing delays.
"#)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(long, global = true, help = "Skip simulated processing delays")]
    instant: bool,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Chat with the Web3 AI assistant")]
    Chat {
        #[arg(short, long, help = "Assistant mode (blockchain, security, contracts)")]
        mode: Option<String>,

        #[arg(long, help = "Send a single message and print the reply")]
        message: Option<String>,
    },

    #[command(about = "Deploy and manage AI agents")]
    Agents {
        #[command(subcommand)]
        action: AgentsCommand,
    },

    #[command(about = "Generate, scan, document and optimize smart contracts")]
    Contract {
        #[command(subcommand)]
        action: ContractCommand,
    },

    #[command(about = "Inspect configuration")]
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },

    #[command(about = "Show version information")]
    Version {
        #[arg(short, long)]
        detailed: bool,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    #[command(about = "Print the effective configuration as TOML")]
    Show,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            if let Some(hint) = e
                .downcast_ref::<GenieError>()
                .and_then(GenieError::user_suggestion)
            {
                eprintln!("  {} {}", "Hint:".dimmed(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool, level: &str, json: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let layer = if json {
        fmt::layer().json().with_writer(std::io::stderr).boxed()
    } else {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .boxed()
    };

    tracing_subscriber::registry().with(layer).with(filter).init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    if let Commands::Version { detailed } = cli.command {
        init_logging(cli.verbose, "warn", false);
        debug!("Dispatching version command");
        return cmd_version(detailed);
    }

    let ctx = CliContext::load(cli.instant)?;
    init_logging(
        cli.verbose,
        ctx.config.log_level(),
        ctx.config.logging.json_format,
    );
    debug!(
        instant = cli.instant,
        latency_enabled = ctx.config.latency.enabled,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Chat { mode, message } => {
            debug!(mode = ?mode, one_shot = message.is_some(), "Dispatching chat command");
            handle_chat_command(&ctx, mode.as_deref(), message.as_deref()).await
        }
        Commands::Agents { action } => {
            debug!("Dispatching agents command");
            handle_agents_command(&ctx, action).await
        }
        Commands::Contract { action } => {
            debug!("Dispatching contract command");
            handle_contract_command(&ctx, action).await
        }
        Commands::Config { action } => match action {
            ConfigCommand::Show => cmd_config_show(&ctx),
        },
        Commands::Version { .. } => Ok(()),
    }
}

fn cmd_config_show(ctx: &CliContext) -> anyhow::Result<()> {
    print!("{}", toml::to_string_pretty(&ctx.config)?);
    Ok(())
}

fn cmd_version(detailed: bool) -> anyhow::Result<()> {
    if detailed {
        println!("{}", "Genie Version Information".cyan().bold());
        println!("{}", "═".repeat(40).dimmed());
        println!("  {:<15} {}", "Version:".bold(), VERSION);
        println!("  {:<15} {}", "Name:".bold(), NAME);
        println!("  {:<15} Apache-2.0", "License:".bold());
        println!();
        println!("  {}", "Assistant Modes:".bold());
        println!("    ◎ Blockchain");
        println!("    ◈ Security");
        println!("    ◇ Contracts");
        println!();
        println!("  {}", "Agent Types:".bold());
        println!("    ⬡ Trading");
        println!("    ◫ Monitoring");
        println!("    ⟁ Custom");
        println!();
        println!("  {}", "Build Information:".bold());
        println!("    Rust Edition: 2021");
        #[cfg(debug_assertions)]
        println!("    Build:        Debug");
        #[cfg(not(debug_assertions))]
        println!("    Build:        Release");
    } else {
        println!("genie {}", VERSION);
    }

    Ok(())
}
