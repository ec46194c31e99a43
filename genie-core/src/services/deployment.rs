use std::sync::{Arc, LazyLock};

use regex::Regex;
use tracing::{debug, info};

use crate::error::{GenieError, GenieResult};
use crate::latency::{Latency, Operation};
use crate::models::{
    AgentRecord, AgentType, ContractDocumentation, ContractKind, EventDoc, FunctionDoc,
    GeneratedContract, ScanFinding, ScanReport, Severity,
};

use super::templates::{GENERIC_TEMPLATE, MARKETPLACE_TEMPLATE, NFT_TEMPLATE, TOKEN_TEMPLATE};

static FUNCTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"function\s+([A-Za-z0-9_]+)").expect("function pattern is valid"));

static EVENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"event\s+([A-Za-z0-9_]+)").expect("event pattern is valid"));

/// Ordered template choice: first keyword hit wins.
const CONTRACT_RULES: &[(&[&str], ContractKind, &str)] = &[
    (&["nft"], ContractKind::Nft, NFT_TEMPLATE),
    (&["token", "erc20"], ContractKind::Token, TOKEN_TEMPLATE),
    (&["marketplace"], ContractKind::Marketplace, MARKETPLACE_TEMPLATE),
];

const PLACEHOLDER_PARAMETERS: [&str; 2] = ["param1", "param2"];

/// Simulated backend for agent deployment and contract tooling.
///
/// Every operation waits on the injected latency, then builds its result
/// from templates and substring checks. None of them can fail.
#[derive(Clone)]
pub struct MockDeploymentService {
    latency: Arc<dyn Latency>,
}

impl MockDeploymentService {
    pub fn new(latency: Arc<dyn Latency>) -> Self {
        Self { latency }
    }

    /// Creates an active agent record. The name comes from
    /// `configuration["name"]` when present, else `"<Type> Agent"`.
    pub async fn deploy_agent(
        &self,
        agent_type: AgentType,
        configuration: serde_json::Value,
    ) -> AgentRecord {
        self.latency.wait(Operation::DeployAgent).await;

        let name = configuration
            .get("name")
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("{} Agent", agent_type.title()));

        let agent = AgentRecord::new(name, agent_type, configuration);
        info!(
            agent_id = %agent.id,
            agent_type = %agent_type,
            "{} agent deployed successfully!",
            agent_type.title()
        );
        agent
    }

    pub async fn generate_contract(&self, requirements: &str) -> GeneratedContract {
        self.latency.wait(Operation::GenerateContract).await;

        let contract = select_contract_template(requirements);
        info!(kind = %contract.kind, "{} smart contract generated successfully!", contract.kind);
        contract
    }

    pub async fn scan_contract(&self, code: &str) -> ScanReport {
        self.latency.wait(Operation::ScanContract).await;

        let report = ScanReport::from_findings(collect_findings(code));
        info!(
            risk = %report.overall_risk,
            "Security scan completed with {} findings",
            report.issue_count
        );
        report
    }

    pub async fn generate_documentation(&self, code: &str) -> ContractDocumentation {
        self.latency.wait(Operation::GenerateDocumentation).await;

        let docs = document_contract(code);
        info!(
            functions = docs.functions.len(),
            events = docs.events.len(),
            "Documentation generated successfully!"
        );
        docs
    }
}

pub fn select_contract_template(requirements: &str) -> GeneratedContract {
    let lower = requirements.to_lowercase();
    let (kind, code) = CONTRACT_RULES
        .iter()
        .find(|(keywords, _, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, kind, code)| (*kind, *code))
        .unwrap_or((ContractKind::Generic, GENERIC_TEMPLATE));

    debug!(kind = %kind, "Selected contract template");
    GeneratedContract {
        kind,
        code: code.to_string(),
    }
}

/// Findings in fixed order; the gas note is always last.
pub fn collect_findings(code: &str) -> Vec<ScanFinding> {
    let mut findings = Vec::new();

    if code.contains("this.balance") {
        findings.push(ScanFinding::new(
            Severity::Critical,
            "Reentrancy",
            "Potential reentrancy vulnerability detected. Consider using the checks-effects-interactions pattern.",
        ));
    }

    if code.contains("block.timestamp") {
        findings.push(ScanFinding::new(
            Severity::Warning,
            "Time Manipulation",
            "Usage of block.timestamp detected. Miners can manipulate this value slightly.",
        ));
    }

    if !code.contains("require") && code.encode_utf16().count() > 100 {
        findings.push(ScanFinding::new(
            Severity::Warning,
            "Input Validation",
            "No input validation detected. Consider adding require statements to validate inputs.",
        ));
    }

    findings.push(ScanFinding::new(
        Severity::Info,
        "Gas Optimization",
        "Consider using calldata instead of memory for read-only function parameters to save gas.",
    ));

    findings
}

pub fn document_contract(code: &str) -> ContractDocumentation {
    let placeholders = || -> Vec<String> {
        PLACEHOLDER_PARAMETERS.iter().map(|p| p.to_string()).collect()
    };

    let functions = FUNCTION_PATTERN
        .captures_iter(code)
        .map(|caps| {
            let name = caps[1].to_string();
            FunctionDoc {
                description: format!("The {} function allows interaction with the contract.", name),
                parameters: placeholders(),
                returns: "Description of return value".to_string(),
                name,
            }
        })
        .collect();

    let events = EVENT_PATTERN
        .captures_iter(code)
        .map(|caps| {
            let name = caps[1].to_string();
            EventDoc {
                description: format!("The {} event is emitted when certain actions occur.", name),
                parameters: placeholders(),
                name,
            }
        })
        .collect();

    ContractDocumentation {
        contract_name: "Generated Contract".to_string(),
        description: "This contract provides functionality for blockchain interactions."
            .to_string(),
        author: "Web3 AI Assistant".to_string(),
        functions,
        events,
        variables: vec!["name".to_string(), "symbol".to_string(), "owner".to_string()],
    }
}

/// Wraps free-form requirements with the template family picked by the user.
pub fn enhance_requirements(kind: &str, requirements: &str) -> String {
    format!(
        "Generate a {} contract with these requirements: {}",
        kind, requirements
    )
}

/// Rejects blank input before a simulated service is invoked.
pub fn require_input<'a>(input: &'a str, message: &str) -> GenieResult<&'a str> {
    if input.trim().is_empty() {
        Err(GenieError::validation(message))
    } else {
        Ok(input)
    }
}
