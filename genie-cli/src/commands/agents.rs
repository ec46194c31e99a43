use std::str::FromStr;
use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Subcommand;
use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Color, Table};
use genie_core::services::{DEFAULT_BUDGET, DEFAULT_FREQUENCY, DEFAULT_RISK_LEVEL};
use genie_core::{
    AgentDeployer, AgentRecord, AgentRegistry, AgentSettings, AgentStatus, AgentType,
};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{prompt_line, stdin_lines};
use crate::config::CliContext;

#[derive(Subcommand)]
pub enum AgentsCommand {
    #[command(about = "Deploy a new agent and print its record")]
    Deploy {
        #[arg(short = 't', long = "type", help = "Agent type (trading, monitoring, custom)")]
        agent_type: String,

        #[arg(short, long, help = "Name for the agent")]
        name: String,

        #[arg(short, long, default_value_t = DEFAULT_RISK_LEVEL, help = "Risk level 0-100")]
        risk: u8,

        #[arg(short, long, default_value = DEFAULT_BUDGET, help = "Budget for trading agents")]
        budget: String,

        #[arg(long, default_value = DEFAULT_FREQUENCY, help = "Check frequency for monitoring agents")]
        frequency: String,

        #[arg(short, long, help = "Free-form description")]
        description: Option<String>,

        #[arg(
            short,
            long,
            default_value = "text",
            help = "Output format (text, json)"
        )]
        format: String,
    },

    #[command(about = "Interactive session over an in-memory agent registry")]
    Shell,
}

pub async fn handle_agents_command(ctx: &CliContext, cmd: AgentsCommand) -> Result<()> {
    let registry = Arc::new(RwLock::new(AgentRegistry::new()));
    let deployer = AgentDeployer::new(registry, ctx.deployment_service());

    match cmd {
        AgentsCommand::Deploy {
            agent_type,
            name,
            risk,
            budget,
            frequency,
            description,
            format,
        } => {
            let mut settings = AgentSettings::new(name, AgentType::from_str(&agent_type)?)
                .with_risk_level(risk)
                .with_budget(budget)
                .with_frequency(frequency);
            if let Some(description) = description {
                settings = settings.with_description(description);
            }
            cmd_agents_deploy(&deployer, settings, &format).await
        }
        AgentsCommand::Shell => cmd_agents_shell(&deployer).await,
    }
}

async fn cmd_agents_deploy(
    deployer: &AgentDeployer,
    settings: AgentSettings,
    format: &str,
) -> Result<()> {
    if format != "json" {
        println!(
            "{} {} agent \"{}\"...",
            "Deploying".cyan(),
            settings.agent_type.title(),
            settings.name.trim()
        );
    }

    let agent = deployer.deploy(settings).await?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&agent)?);
        return Ok(());
    }

    println!(
        "{} Agent \"{}\" deployed successfully",
        "✓".green().bold(),
        agent.name.bold()
    );
    println!();
    print_agent_details(&agent)?;
    Ok(())
}

async fn cmd_agents_shell(deployer: &AgentDeployer) -> Result<()> {
    println!("{}", "Agent Control Panel".cyan().bold());
    println!("{}", "Type 'help' for commands, 'quit' to leave.".dimmed());
    println!();

    let mut lines = stdin_lines();
    while let Some(line) = prompt_line(&mut lines, &format!("{} ", "agents>".green().bold())).await? {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let args: Vec<&str> = parts.collect();

        let result = match command {
            "quit" | "exit" => break,
            "help" => {
                print_shell_help();
                Ok(())
            }
            "list" | "ls" => shell_list(deployer).await,
            "deploy" => shell_deploy(deployer, &args).await,
            "pause" => shell_status_change(deployer, &args, StatusAction::Pause).await,
            "resume" => shell_status_change(deployer, &args, StatusAction::Resume).await,
            "toggle" => shell_status_change(deployer, &args, StatusAction::Toggle).await,
            "remove" | "rm" => shell_remove(deployer, &args).await,
            other => {
                eprintln!("{} {}", "Unknown command:".yellow(), other);
                Ok(())
            }
        };

        if let Err(e) = result {
            eprintln!("{}: {}", "Error".red().bold(), e);
        }
    }

    println!("{}", "Goodbye.".dimmed());
    Ok(())
}

#[derive(Clone, Copy)]
enum StatusAction {
    Pause,
    Resume,
    Toggle,
}

async fn shell_deploy(deployer: &AgentDeployer, args: &[&str]) -> Result<()> {
    let Some((agent_type, name)) = args.split_first() else {
        bail!("Usage: deploy <type> <name>");
    };
    let agent_type = AgentType::from_str(agent_type)?;
    let settings = AgentSettings::new(name.join(" "), agent_type);

    println!("{}", "Deploying...".dimmed());
    let agent = deployer.deploy(settings).await?;
    println!(
        "{} Agent \"{}\" deployed successfully ({})",
        "✓".green().bold(),
        agent.name.bold(),
        agent.id
    );
    Ok(())
}

async fn shell_list(deployer: &AgentDeployer) -> Result<()> {
    let agents = deployer.list().await;
    if agents.is_empty() {
        println!("{}", "No agents deployed yet.".yellow());
        println!("{}", "Run 'deploy <type> <name>' to create one.".dimmed());
        return Ok(());
    }
    print_agents_table(&agents);

    let registry = deployer.registry();
    let registry = registry.read().await;
    println!(
        "{} active, {} paused, {} errored",
        registry.count_by_status(AgentStatus::Active).to_string().green(),
        registry.count_by_status(AgentStatus::Paused).to_string().yellow(),
        registry.count_by_status(AgentStatus::Error).to_string().red()
    );
    Ok(())
}

async fn shell_status_change(
    deployer: &AgentDeployer,
    args: &[&str],
    action: StatusAction,
) -> Result<()> {
    let id = resolve_agent_id(deployer, args).await?;
    let agent = match action {
        StatusAction::Pause => deployer.pause(id).await?,
        StatusAction::Resume => deployer.resume(id).await?,
        StatusAction::Toggle => deployer.toggle(id).await?,
    };
    println!(
        "{} \"{}\" is now {}",
        "✓".green().bold(),
        agent.name,
        status_label(agent.status)
    );
    Ok(())
}

async fn shell_remove(deployer: &AgentDeployer, args: &[&str]) -> Result<()> {
    let id = resolve_agent_id(deployer, args).await?;
    deployer.remove(id).await?;
    println!("{} Agent removed successfully", "✓".green().bold());
    Ok(())
}

/// Accepts a full UUID or a unique prefix of one.
async fn resolve_agent_id(deployer: &AgentDeployer, args: &[&str]) -> Result<Uuid> {
    let Some(raw) = args.first() else {
        bail!("Missing agent id");
    };
    if let Ok(id) = Uuid::parse_str(raw) {
        return Ok(id);
    }

    let matches: Vec<Uuid> = deployer
        .list()
        .await
        .iter()
        .map(|a| a.id)
        .filter(|id| id.to_string().starts_with(raw))
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(genie_core::GenieError::AgentNotFound(raw.to_string()).into()),
        _ => bail!("Agent id prefix '{}' is ambiguous", raw),
    }
}

fn print_agents_table(agents: &[AgentRecord]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec![
            Cell::new("ID").fg(Color::White),
            Cell::new("Name").fg(Color::White),
            Cell::new("Type").fg(Color::White),
            Cell::new("Status").fg(Color::White),
            Cell::new("Created").fg(Color::White),
            Cell::new("Last Active").fg(Color::White),
        ]);

    for agent in agents {
        let short_id: String = agent.id.to_string().chars().take(8).collect();
        table.add_row(vec![
            Cell::new(short_id).fg(Color::DarkGrey),
            Cell::new(&agent.name).fg(Color::Cyan),
            Cell::new(agent.agent_type.title()),
            status_cell(agent.status),
            Cell::new(agent.created_at.format("%Y-%m-%d %H:%M:%S").to_string()),
            Cell::new(
                agent
                    .last_active
                    .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                    .unwrap_or_else(|| "-".to_string()),
            )
            .fg(Color::DarkGrey),
        ]);
    }

    println!("{table}");
}

fn print_agent_details(agent: &AgentRecord) -> Result<()> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS);

    table.add_row(vec![Cell::new("ID").fg(Color::White), Cell::new(agent.id)]);
    table.add_row(vec![
        Cell::new("Name").fg(Color::White),
        Cell::new(&agent.name).fg(Color::Cyan),
    ]);
    table.add_row(vec![
        Cell::new("Type").fg(Color::White),
        Cell::new(agent.agent_type.title()),
    ]);
    table.add_row(vec![Cell::new("Status").fg(Color::White), status_cell(agent.status)]);
    table.add_row(vec![
        Cell::new("Created").fg(Color::White),
        Cell::new(agent.created_at.to_rfc3339()),
    ]);
    table.add_row(vec![
        Cell::new("Configuration").fg(Color::White),
        Cell::new(serde_json::to_string_pretty(&agent.configuration)?),
    ]);

    println!("{table}");
    Ok(())
}

fn status_cell(status: AgentStatus) -> Cell {
    match status {
        AgentStatus::Active => Cell::new("Active").fg(Color::Green),
        AgentStatus::Paused => Cell::new("Paused").fg(Color::Yellow),
        AgentStatus::Error => Cell::new("Error").fg(Color::Red),
    }
}

fn status_label(status: AgentStatus) -> colored::ColoredString {
    match status {
        AgentStatus::Active => "active".green(),
        AgentStatus::Paused => "paused".yellow(),
        AgentStatus::Error => "error".red(),
    }
}

fn print_shell_help() {
    println!("{}", "Commands".cyan().bold());
    println!("  {:<24} {}", "deploy <type> <name>", "Deploy a trading, monitoring or custom agent");
    println!("  {:<24} {}", "list", "Show deployed agents");
    println!("  {:<24} {}", "pause <id>", "Pause an agent");
    println!("  {:<24} {}", "resume <id>", "Resume an agent");
    println!("  {:<24} {}", "toggle <id>", "Pause when active, otherwise resume");
    println!("  {:<24} {}", "remove <id>", "Remove an agent");
    println!("  {:<24} {}", "quit", "Leave the shell");
    println!("{}", "Ids may be given as a unique prefix.".dimmed());
}
