use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use genie_core::{AssistantMode, ChatMessage, ChatService, ChatSession, MessageRole};
use tokio::sync::RwLock;

use super::{prompt_line, stdin_lines};
use crate::config::CliContext;

pub async fn handle_chat_command(
    ctx: &CliContext,
    mode: Option<&str>,
    message: Option<&str>,
) -> Result<()> {
    let mode = match mode {
        Some(m) => AssistantMode::from_str(m)?,
        None => ctx.config.chat.default_mode,
    };

    let session = Arc::new(RwLock::new(ChatSession::with_mode(mode)));
    let service = ChatService::new(session, Arc::clone(&ctx.latency));

    match message {
        Some(text) => cmd_chat_once(&service, text).await,
        None => cmd_chat_repl(ctx, &service).await,
    }
}

async fn cmd_chat_once(service: &ChatService, text: &str) -> Result<()> {
    let reply = service.send_message(text).await;
    println!("{}", reply.content);
    Ok(())
}

async fn cmd_chat_repl(ctx: &CliContext, service: &ChatService) -> Result<()> {
    let mode = service.mode().await;
    println!(
        "{} {}",
        "Web3 AI Assistant".cyan().bold(),
        format!("({} mode)", mode.label()).dimmed()
    );
    println!(
        "{}",
        "Type /help for commands, /quit to leave.".dimmed()
    );
    println!();

    if ctx.config.chat.welcome_on_start && service.ensure_welcome().await {
        if let Some(welcome) = service.snapshot().await.last() {
            print_message(welcome);
        }
    }

    let mut lines = stdin_lines();
    while let Some(line) = prompt_line(&mut lines, &format!("{} ", "you>".green().bold())).await? {
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if let Some(command) = input.strip_prefix('/') {
            let mut parts = command.split_whitespace();
            match (parts.next().unwrap_or_default(), parts.next()) {
                ("quit" | "exit", _) => break,
                ("help", _) => print_help(),
                ("clear", _) => {
                    service.clear().await;
                    println!("{}", "Transcript cleared.".dimmed());
                }
                ("history", _) => print_history(&service.snapshot().await),
                ("mode", None) => {
                    println!("Current mode: {}", service.mode().await.label().bold());
                }
                ("mode", Some(name)) => match AssistantMode::from_str(name) {
                    Ok(mode) => {
                        service.switch_mode(mode).await;
                        println!("{} {}", "Switched to".green(), mode.label().bold());
                        if let Some(welcome) = service.snapshot().await.last() {
                            print_message(welcome);
                        }
                    }
                    Err(e) => eprintln!("{}: {}", "Error".red().bold(), e),
                },
                (other, _) => {
                    eprintln!("{} /{}", "Unknown command:".yellow(), other);
                }
            }
            continue;
        }

        println!("{}", "Assistant is typing...".dimmed());
        let reply = service.send_message(input).await;
        print_message(&reply);
    }

    println!("{}", "Goodbye.".dimmed());
    Ok(())
}

fn print_message(message: &ChatMessage) {
    let speaker = match message.role {
        MessageRole::User => "you".green().bold(),
        MessageRole::Assistant => "assistant".cyan().bold(),
    };
    println!("{} {}", speaker, message.timestamp.format("%H:%M:%S").to_string().dimmed());
    println!("{}", message.content);
    println!();
}

fn print_history(messages: &[ChatMessage]) {
    if messages.is_empty() {
        println!("{}", "No messages yet.".yellow());
        return;
    }
    println!("{}", format!("Transcript ({} messages)", messages.len()).cyan().bold());
    println!();
    for message in messages {
        print_message(message);
    }
}

fn print_help() {
    println!("{}", "Commands".cyan().bold());
    println!("  {:<16} {}", "/mode <name>", "Switch to blockchain, security or contracts");
    println!("  {:<16} {}", "/mode", "Show the current mode");
    println!("  {:<16} {}", "/clear", "Clear the transcript");
    println!("  {:<16} {}", "/history", "Show the transcript");
    println!("  {:<16} {}", "/quit", "Leave the chat");
}
