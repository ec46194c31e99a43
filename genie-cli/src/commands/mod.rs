pub mod agents;
pub mod chat;
pub mod contract;

pub use agents::{handle_agents_command, AgentsCommand};
pub use chat::handle_chat_command;
pub use contract::{handle_contract_command, ContractCommand};

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

pub(crate) type InputLines = Lines<BufReader<Stdin>>;

pub(crate) fn stdin_lines() -> InputLines {
    BufReader::new(tokio::io::stdin()).lines()
}

/// Prints `prompt` and reads the next line. `None` on end of input.
pub(crate) async fn prompt_line(lines: &mut InputLines, prompt: &str) -> anyhow::Result<Option<String>> {
    print!("{}", prompt);
    std::io::stdout().flush()?;
    Ok(lines.next_line().await?)
}
