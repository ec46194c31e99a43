use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Color, Table};
use genie_core::{
    enhance_requirements, require_input, ContractDocumentation, GasOptimization, GasOptimizer,
    GeneratedContract, RiskLevel, ScanReport, Severity,
};
use tokio::io::AsyncReadExt;

use crate::config::CliContext;

#[derive(Subcommand)]
pub enum ContractCommand {
    #[command(about = "Generate a contract from a plain-language description")]
    Generate {
        #[arg(help = "Contract requirements")]
        requirements: String,

        #[arg(short, long, help = "Template family (nft, token, marketplace, custom)")]
        kind: Option<String>,

        #[arg(short, long, help = "Write the generated code to a file")]
        output: Option<PathBuf>,

        #[arg(
            short,
            long,
            default_value = "text",
            help = "Output format (text, json)"
        )]
        format: String,
    },

    #[command(about = "Run a security scan over contract source")]
    Scan {
        #[arg(help = "Solidity source file, or - for stdin")]
        path: PathBuf,

        #[arg(
            short,
            long,
            default_value = "text",
            help = "Output format (text, json)"
        )]
        format: String,
    },

    #[command(about = "Generate documentation for contract source")]
    Docs {
        #[arg(help = "Solidity source file, or - for stdin")]
        path: PathBuf,

        #[arg(
            short,
            long,
            default_value = "text",
            help = "Output format (text, json)"
        )]
        format: String,
    },

    #[command(about = "Apply gas optimizations to contract source")]
    Optimize {
        #[arg(help = "Solidity source file, or - for stdin")]
        path: PathBuf,

        #[arg(short, long, help = "Write the optimized code to a file")]
        output: Option<PathBuf>,

        #[arg(long, help = "Seed for the gas estimate")]
        seed: Option<u64>,

        #[arg(
            short,
            long,
            default_value = "text",
            help = "Output format (text, json)"
        )]
        format: String,
    },
}

pub async fn handle_contract_command(ctx: &CliContext, cmd: ContractCommand) -> Result<()> {
    match cmd {
        ContractCommand::Generate {
            requirements,
            kind,
            output,
            format,
        } => cmd_contract_generate(ctx, &requirements, kind.as_deref(), output.as_deref(), &format).await,
        ContractCommand::Scan { path, format } => cmd_contract_scan(ctx, &path, &format).await,
        ContractCommand::Docs { path, format } => cmd_contract_docs(ctx, &path, &format).await,
        ContractCommand::Optimize {
            path,
            output,
            seed,
            format,
        } => cmd_contract_optimize(ctx, &path, output.as_deref(), seed, &format).await,
    }
}

async fn cmd_contract_generate(
    ctx: &CliContext,
    requirements: &str,
    kind: Option<&str>,
    output: Option<&Path>,
    format: &str,
) -> Result<()> {
    let requirements = require_input(requirements, "Please describe your contract requirements")?;
    let prompt = match kind {
        Some(kind) => enhance_requirements(kind, requirements),
        None => requirements.to_string(),
    };

    let contract = ctx.deployment_service().generate_contract(&prompt).await;

    if let Some(path) = output {
        write_output(path, &contract.code).await?;
    }

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&contract)?);
        return Ok(());
    }

    print_generated(&contract, output);
    Ok(())
}

async fn cmd_contract_scan(ctx: &CliContext, path: &Path, format: &str) -> Result<()> {
    let code = read_source(path).await?;
    let code = require_input(&code, "Please provide contract code to scan")?;

    let report = ctx.deployment_service().scan_contract(code).await;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_scan_report(&report);
    Ok(())
}

async fn cmd_contract_docs(ctx: &CliContext, path: &Path, format: &str) -> Result<()> {
    let code = read_source(path).await?;
    let code = require_input(&code, "Please provide contract code to document")?;

    let docs = ctx.deployment_service().generate_documentation(code).await;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&docs)?);
        return Ok(());
    }

    print_documentation(&docs);
    Ok(())
}

async fn cmd_contract_optimize(
    ctx: &CliContext,
    path: &Path,
    output: Option<&Path>,
    seed: Option<u64>,
    format: &str,
) -> Result<()> {
    let code = read_source(path).await?;
    let code = require_input(&code, "Please provide contract code to optimize")?;

    let optimizer = match seed {
        Some(seed) => GasOptimizer::with_seed(Arc::clone(&ctx.latency), seed),
        None => GasOptimizer::new(Arc::clone(&ctx.latency)),
    };
    let result = optimizer.optimize(code).await;

    if let Some(path) = output {
        write_output(path, &result.optimized_code).await?;
    }

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_optimization(&result, output);
    Ok(())
}

async fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buf)
            .await
            .context("Failed to read contract source from stdin")?;
        return Ok(buf);
    }

    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read contract source from {}", path.display()))
}

async fn write_output(path: &Path, contents: &str) -> Result<()> {
    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}

fn print_generated(contract: &GeneratedContract, output: Option<&Path>) {
    println!(
        "{} {} smart contract generated successfully!",
        "✓".green().bold(),
        contract.kind.to_string().bold()
    );
    match output {
        Some(path) => println!("  Saved to {}", path.display().to_string().cyan()),
        None => {
            println!();
            println!("{}", contract.code);
        }
    }
}

fn print_scan_report(report: &ScanReport) {
    let risk = match report.overall_risk {
        RiskLevel::Low => "LOW".green().bold(),
        RiskLevel::Medium => "MEDIUM".yellow().bold(),
        RiskLevel::High => "HIGH".red().bold(),
    };

    println!("{}", "Security Scan".cyan().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!("  {:<15} {}", "Overall risk:".bold(), risk);
    println!("  {:<15} {}", "Issues:".bold(), report.issue_count);
    println!(
        "  {:<15} {} critical, {} warning, {} info",
        "Breakdown:".bold(),
        report.count_by_severity(Severity::Critical),
        report.count_by_severity(Severity::Warning),
        report.count_by_severity(Severity::Info)
    );
    println!();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec![
            Cell::new("Severity").fg(Color::White),
            Cell::new("Type").fg(Color::White),
            Cell::new("Description").fg(Color::White),
        ]);

    for issue in &report.issues {
        let severity = match issue.severity {
            Severity::Critical => Cell::new("critical").fg(Color::Red),
            Severity::Warning => Cell::new("warning").fg(Color::Yellow),
            Severity::Info => Cell::new("info").fg(Color::Blue),
        };
        table.add_row(vec![
            severity,
            Cell::new(&issue.kind),
            Cell::new(&issue.description),
        ]);
    }

    println!("{table}");
}

fn print_documentation(docs: &ContractDocumentation) {
    println!("{}", docs.contract_name.cyan().bold());
    println!("{}", docs.description);
    println!("{} {}", "Author:".dimmed(), docs.author);
    println!();

    println!("{} ({})", "Functions".bold(), docs.functions.len());
    if docs.functions.is_empty() {
        println!("  {}", "none found".dimmed());
    }
    for function in &docs.functions {
        println!("  {}({})", function.name.green(), function.parameters.join(", "));
        println!("    {}", function.description);
        println!("    {} {}", "returns:".dimmed(), function.returns);
    }
    println!();

    println!("{} ({})", "Events".bold(), docs.events.len());
    if docs.events.is_empty() {
        println!("  {}", "none found".dimmed());
    }
    for event in &docs.events {
        println!("  {}({})", event.name.yellow(), event.parameters.join(", "));
        println!("    {}", event.description);
    }
    println!();

    println!("{} {}", "Variables:".bold(), docs.variables.join(", "));
}

fn print_optimization(result: &GasOptimization, output: Option<&Path>) {
    println!("{}", "Gas Optimization".cyan().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!("  {:<15} {}", "Before:".bold(), result.gas_before);
    println!("  {:<15} {}", "After:".bold(), result.gas_after.to_string().green());
    println!(
        "  {:<15} {} ({:.1}%)",
        "Saved:".bold(),
        result.gas_saved(),
        result.savings_percent()
    );

    match output {
        Some(path) => println!("  Saved to {}", path.display().to_string().cyan()),
        None => {
            println!();
            println!("{}", result.optimized_code);
        }
    }
}
