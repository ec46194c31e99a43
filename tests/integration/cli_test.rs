use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn genie_command(workdir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_genie"));
    cmd.current_dir(workdir)
        .env("HOME", workdir)
        .env("XDG_CONFIG_HOME", workdir.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("GENIE_LOG_LEVEL");
    cmd
}

fn run_genie(args: &[&str]) -> Output {
    let dir = TempDir::new().unwrap();
    run_genie_in(dir.path(), args)
}

fn run_genie_in(workdir: &Path, args: &[&str]) -> Output {
    genie_command(workdir)
        .args(args)
        .output()
        .expect("Failed to execute genie command")
}

fn run_genie_with_stdin(args: &[&str], input: &str) -> Output {
    let dir = TempDir::new().unwrap();
    let mut child = genie_command(dir.path())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn genie command");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();

    child.wait_with_output().expect("Failed to wait for genie")
}

fn output_to_string(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr_to_string(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

const VULNERABLE_CONTRACT: &str = r#"pragma solidity ^0.8.0;

contract Vault {
    event Withdrawn(address who, uint256 amount);

    function withdraw() public {
        uint256 amount = this.balance;
        if (block.timestamp > 0) {
            payable(msg.sender).transfer(amount);
        }
        emit Withdrawn(msg.sender, amount);
    }
}
"#;

mod version_command_tests {
    use super::*;

    #[test]
    fn test_version_command_basic() {
        let output = run_genie(&["version"]);
        let stdout = output_to_string(&output);

        assert!(output.status.success(), "version command should succeed");
        assert!(stdout.contains("genie"), "output should contain 'genie'");
        assert!(stdout.contains("0.1.0"), "output should contain version number");
    }

    #[test]
    fn test_version_command_detailed() {
        let output = run_genie(&["version", "--detailed"]);
        let stdout = output_to_string(&output);

        assert!(output.status.success(), "version --detailed should succeed");
        assert!(stdout.contains("Version"));
        assert!(stdout.contains("Apache-2.0"));
        assert!(stdout.contains("Security"), "should list assistant modes");
        assert!(stdout.contains("Monitoring"), "should list agent types");
    }
}

mod help_command_tests {
    use super::*;

    #[test]
    fn test_help_command() {
        let output = run_genie(&["--help"]);
        let stdout = output_to_string(&output);

        assert!(output.status.success(), "--help should succeed");
        for command in ["chat", "agents", "contract", "config", "version"] {
            assert!(stdout.contains(command), "help should mention {}", command);
        }
    }

    #[test]
    fn test_contract_help() {
        let output = run_genie(&["contract", "--help"]);
        let stdout = output_to_string(&output);

        assert!(output.status.success());
        for command in ["generate", "scan", "docs", "optimize"] {
            assert!(stdout.contains(command), "help should mention {}", command);
        }
    }
}

mod invalid_command_tests {
    use super::*;

    #[test]
    fn test_invalid_command() {
        let output = run_genie(&["nonexistent-command"]);
        assert!(!output.status.success(), "invalid command should fail");
    }

    #[test]
    fn test_invalid_mode_reports_error() {
        let output = run_genie(&["--instant", "chat", "--mode", "poetry", "--message", "hi"]);

        assert!(!output.status.success());
        assert!(stderr_to_string(&output).contains("Error"));
    }

    #[test]
    fn test_invalid_agent_type_reports_error() {
        let output = run_genie(&["--instant", "agents", "deploy", "--type", "oracle", "--name", "x"]);

        assert!(!output.status.success());
        assert!(stderr_to_string(&output).contains("oracle"));
    }
}

mod chat_command_tests {
    use super::*;
    use genie_core::responder::{ASK_ME_MORE, GAS_TIPS, VULNERABILITY_ANALYSIS};

    #[test]
    fn test_one_shot_reply_uses_mode() {
        let output = run_genie(&[
            "--instant",
            "chat",
            "--mode",
            "security",
            "--message",
            "Is this hackable?",
        ]);

        assert!(output.status.success());
        assert_eq!(output_to_string(&output).trim_end(), VULNERABILITY_ANALYSIS);
    }

    #[test]
    fn test_one_shot_reply_default_mode_falls_back() {
        let output = run_genie(&["--instant", "chat", "--message", "hello there"]);

        assert!(output.status.success());
        assert_eq!(output_to_string(&output).trim_end(), ASK_ME_MORE);
    }

    #[test]
    fn test_repl_switches_mode_and_quits() {
        let output = run_genie_with_stdin(
            &["--instant", "chat"],
            "/mode contracts\nhow much gas to deploy?\n/history\n/quit\n",
        );
        let stdout = output_to_string(&output);

        assert!(output.status.success());
        assert!(stdout.contains("Hello! I'm Web3 AI Assistant"));
        assert!(stdout.contains("Hello! I'm the Smart Contract AI Assistant"));
        assert!(stdout.contains(GAS_TIPS));
        assert!(stdout.contains("Transcript (3 messages)"));
        assert!(stdout.contains("Goodbye."));
    }

    #[test]
    fn test_verbose_logs_dispatch() {
        let output = run_genie(&["--verbose", "--instant", "chat", "--message", "hi"]);

        assert!(output.status.success());
        assert!(stderr_to_string(&output).contains("Dispatching chat command"));
        assert_eq!(output_to_string(&output).trim_end(), ASK_ME_MORE);
    }

    #[test]
    fn test_repl_ends_on_eof() {
        let output = run_genie_with_stdin(&["--instant", "chat"], "/clear\n/history\n");
        let stdout = output_to_string(&output);

        assert!(output.status.success());
        assert!(stdout.contains("Transcript cleared."));
        assert!(stdout.contains("No messages yet."));
    }
}

mod agents_command_tests {
    use super::*;

    #[test]
    fn test_deploy_json() {
        let output = run_genie(&[
            "--instant",
            "agents",
            "deploy",
            "--type",
            "trading",
            "--name",
            "Alpha",
            "--risk",
            "80",
            "--format",
            "json",
        ]);

        assert!(output.status.success(), "stderr: {}", stderr_to_string(&output));
        let agent: serde_json::Value = serde_json::from_str(&output_to_string(&output)).unwrap();
        assert_eq!(agent["name"], "Alpha");
        assert_eq!(agent["type"], "trading");
        assert_eq!(agent["status"], "active");
        assert_eq!(agent["configuration"]["strategy"], "aggressive");
        assert_eq!(agent["configuration"]["budget"], "0.1 ETH");
        assert!(agent["last_active"].is_null());
    }

    #[test]
    fn test_deploy_rejects_blank_name() {
        let output = run_genie(&["--instant", "agents", "deploy", "--type", "custom", "--name", "  "]);

        assert!(!output.status.success());
        assert!(stderr_to_string(&output).contains("Please provide a name for your agent"));
    }

    #[test]
    fn test_shell_lifecycle() {
        let output = run_genie_with_stdin(
            &["--instant", "agents", "shell"],
            "deploy monitoring Watcher One\nlist\nremove 00000000-0000-0000-0000-000000000000\nquit\n",
        );
        let stdout = output_to_string(&output);
        let stderr = stderr_to_string(&output);

        assert!(output.status.success());
        assert!(stdout.contains("Agent \"Watcher One\" deployed successfully"));
        assert!(stdout.contains("Monitoring"));
        assert!(stdout.contains("1 active, 0 paused, 0 errored"));
        assert!(stderr.contains("Agent not found"), "stderr: {}", stderr);
    }
}

mod contract_command_tests {
    use super::*;

    #[test]
    fn test_generate_json_nft() {
        let output = run_genie(&[
            "--instant",
            "contract",
            "generate",
            "An NFT collection",
            "--format",
            "json",
        ]);

        assert!(output.status.success());
        let contract: serde_json::Value = serde_json::from_str(&output_to_string(&output)).unwrap();
        assert_eq!(contract["type"], "NFT");
        assert!(contract["code"].as_str().unwrap().contains("ERC721"));
    }

    #[test]
    fn test_generate_with_kind_writes_output() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("Token.sol");
        let output = run_genie_in(
            dir.path(),
            &[
                "--instant",
                "contract",
                "generate",
                "fixed supply",
                "--kind",
                "token",
                "--output",
                target.to_str().unwrap(),
            ],
        );

        assert!(output.status.success());
        assert!(output_to_string(&output).contains("Token smart contract generated successfully!"));
        let code = std::fs::read_to_string(&target).unwrap();
        assert!(code.contains("ERC20"));
    }

    #[test]
    fn test_generate_rejects_blank_requirements() {
        let output = run_genie(&["--instant", "contract", "generate", "   "]);

        assert!(!output.status.success());
        assert!(stderr_to_string(&output).contains("Please describe your contract requirements"));
    }

    #[test]
    fn test_scan_from_stdin() {
        let output = run_genie_with_stdin(
            &["--instant", "contract", "scan", "-", "--format", "json"],
            VULNERABLE_CONTRACT,
        );

        assert!(output.status.success());
        let report: serde_json::Value = serde_json::from_str(&output_to_string(&output)).unwrap();
        assert_eq!(report["overall_risk"], "high");
        assert_eq!(report["issue_count"], 4);
        assert_eq!(report["issues"][0]["type"], "Reentrancy");
    }

    #[test]
    fn test_docs_from_file() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("Vault.sol");
        std::fs::write(&source, VULNERABLE_CONTRACT).unwrap();

        let output = run_genie_in(
            dir.path(),
            &["--instant", "contract", "docs", source.to_str().unwrap()],
        );
        let stdout = output_to_string(&output);

        assert!(output.status.success());
        assert!(stdout.contains("Generated Contract"));
        assert!(stdout.contains("withdraw(param1, param2)"));
        assert!(stdout.contains("Withdrawn(param1, param2)"));
    }

    #[test]
    fn test_scan_missing_file_fails() {
        let output = run_genie(&["--instant", "contract", "scan", "does-not-exist.sol"]);

        assert!(!output.status.success());
        assert!(stderr_to_string(&output).contains("does-not-exist.sol"));
    }

    #[test]
    fn test_optimize_seeded_json() {
        let output = run_genie_with_stdin(
            &["--instant", "contract", "optimize", "-", "--seed", "7", "--format", "json"],
            "function f(uint256[] memory xs) public { for (uint256 i = 0; i < 3; i++) { } }",
        );

        assert!(output.status.success());
        let result: serde_json::Value = serde_json::from_str(&output_to_string(&output)).unwrap();
        let code = result["optimized_code"].as_str().unwrap();
        assert!(code.contains("uint128[] calldata xs"));
        assert!(code.contains("unchecked { for ("));

        let before = result["gas_before"].as_u64().unwrap();
        let after = result["gas_after"].as_u64().unwrap();
        assert!((80_000..130_000).contains(&before));
        assert!(after < before);
    }
}

mod config_command_tests {
    use super::*;

    #[test]
    fn test_config_show_defaults() {
        let output = run_genie(&["config", "show"]);
        let stdout = output_to_string(&output);

        assert!(output.status.success());
        assert!(stdout.contains("[latency]"));
        assert!(stdout.contains("chat_base_ms = 800"));
        assert!(stdout.contains("default_mode = \"blockchain\""));
    }

    #[test]
    fn test_config_show_reads_local_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("genie.toml"),
            "[chat]\ndefault_mode = \"security\"\n",
        )
        .unwrap();

        let output = run_genie_in(dir.path(), &["config", "show"]);

        assert!(output.status.success());
        assert!(output_to_string(&output).contains("default_mode = \"security\""));
    }

    #[test]
    fn test_invalid_config_reports_code_and_hint() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("genie.toml"),
            "[logging]\nlevel = \"loud\"\n",
        )
        .unwrap();

        let output = run_genie_in(dir.path(), &["config", "show"]);
        let stderr = stderr_to_string(&output);

        assert!(!output.status.success());
        assert!(stderr.contains("[E2002]"), "stderr: {}", stderr);
        assert!(stderr.contains("Hint:"), "stderr: {}", stderr);
    }

    #[test]
    fn test_instant_flag_disables_latency() {
        let output = run_genie(&["--instant", "config", "show"]);

        assert!(output.status.success());
        assert!(output_to_string(&output).contains("enabled = false"));
    }
}
